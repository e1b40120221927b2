// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::basics::{
    DecisionsLesson, FunctionsLesson, LoopsLesson, MapsLesson, PointersLesson, SlicesLesson,
    UserTypeLesson, VariablesLesson,
};
use crate::concurrency::TasksLesson;
use crate::config::consts::*;
use crate::config::Syllabus;
use crate::errors::ValidationError;
use crate::observability::messages::tour::LessonSkipped;
use crate::observability::messages::StructuredLog;
use crate::traits::Lesson;

/// Factory for creating lesson instances by id
pub struct LessonFactory;

impl LessonFactory {
    /// Create a lesson from its syllabus id
    ///
    /// - "variables" -> VariablesLesson
    /// - "functions" -> FunctionsLesson
    /// - "user_type" -> UserTypeLesson
    /// - "pointers" -> PointersLesson
    /// - "maps" -> MapsLesson
    /// - "decisions" -> DecisionsLesson
    /// - "slices" -> SlicesLesson
    /// - "loops" -> LoopsLesson
    /// - "tasks" -> TasksLesson
    pub fn create_lesson(lesson_id: &str) -> Result<Box<dyn Lesson>, ValidationError> {
        match lesson_id {
            LESSON_VARIABLES => Ok(Box::new(VariablesLesson::new())),
            LESSON_FUNCTIONS => Ok(Box::new(FunctionsLesson::new())),
            LESSON_USER_TYPE => Ok(Box::new(UserTypeLesson::new())),
            LESSON_POINTERS => Ok(Box::new(PointersLesson::new())),
            LESSON_MAPS => Ok(Box::new(MapsLesson::new())),
            LESSON_DECISIONS => Ok(Box::new(DecisionsLesson::new())),
            LESSON_SLICES => Ok(Box::new(SlicesLesson::new())),
            LESSON_LOOPS => Ok(Box::new(LoopsLesson::new())),
            LESSON_TASKS => Ok(Box::new(TasksLesson::new())),
            _ => Err(ValidationError::UnknownLesson {
                lesson_id: lesson_id.to_string(),
            }),
        }
    }

    /// List all available lesson ids, in default tour order
    pub fn list_available_lessons() -> Vec<&'static str> {
        vec![
            LESSON_VARIABLES,
            LESSON_FUNCTIONS,
            LESSON_USER_TYPE,
            LESSON_POINTERS,
            LESSON_MAPS,
            LESSON_DECISIONS,
            LESSON_SLICES,
            LESSON_LOOPS,
            LESSON_TASKS,
        ]
    }

    pub fn is_lesson_available(lesson_id: &str) -> bool {
        Self::list_available_lessons().contains(&lesson_id)
    }
}

/// Resolve the enabled syllabus entries into lesson instances, in order
pub fn build_lessons(syllabus: &Syllabus) -> Result<Vec<Box<dyn Lesson>>, ValidationError> {
    let mut lessons = Vec::new();

    for entry in &syllabus.lessons {
        if !entry.enabled {
            LessonSkipped { lesson: &entry.id }.log();
            continue;
        }
        lessons.push(LessonFactory::create_lesson(&entry.id)?);
    }

    Ok(lessons)
}
