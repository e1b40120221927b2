// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Syllabus validation.
//!
//! All problems are collected rather than stopping at the first, so a single
//! run reports everything wrong with a file. Disabled entries are still checked,
//! and a syllabus with nothing enabled counts as empty.

use std::collections::HashSet;

use crate::config::{LessonFactory, Syllabus};
use crate::errors::ValidationError;

pub fn validate_syllabus(syllabus: &Syllabus) -> Result<(), Vec<ValidationError>> {
    if syllabus.lessons.is_empty() {
        return Err(vec![ValidationError::EmptySyllabus]);
    }

    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for lesson in &syllabus.lessons {
        if !LessonFactory::is_lesson_available(&lesson.id) {
            errors.push(ValidationError::UnknownLesson {
                lesson_id: lesson.id.clone(),
            });
        }
        if !seen.insert(lesson.id.as_str()) {
            errors.push(ValidationError::DuplicateLesson {
                lesson_id: lesson.id.clone(),
            });
        }
    }

    if syllabus.enabled_lessons().next().is_none() {
        errors.push(ValidationError::EmptySyllabus);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LessonConfig;

    fn syllabus_of(ids: &[&str]) -> Syllabus {
        Syllabus {
            title: "test".to_string(),
            lessons: ids
                .iter()
                .map(|id| LessonConfig {
                    id: id.to_string(),
                    enabled: true,
                })
                .collect(),
        }
    }

    #[test]
    fn test_valid_syllabus() {
        assert!(validate_syllabus(&syllabus_of(&["pointers", "slices", "tasks"])).is_ok());
    }

    #[test]
    fn test_empty_syllabus() {
        let errors = validate_syllabus(&syllabus_of(&[])).unwrap_err();
        assert_eq!(errors, vec![ValidationError::EmptySyllabus]);
    }

    #[test]
    fn test_collects_unknown_and_duplicate() {
        let errors = validate_syllabus(&syllabus_of(&["slices", "generics", "slices"])).unwrap_err();

        assert_eq!(
            errors,
            vec![
                ValidationError::UnknownLesson {
                    lesson_id: "generics".to_string()
                },
                ValidationError::DuplicateLesson {
                    lesson_id: "slices".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_all_disabled_is_empty() {
        let mut syllabus = syllabus_of(&["loops", "maps"]);
        for lesson in &mut syllabus.lessons {
            lesson.enabled = false;
        }

        let errors = validate_syllabus(&syllabus).unwrap_err();
        assert_eq!(errors, vec![ValidationError::EmptySyllabus]);
    }

    #[test]
    fn test_disabled_entries_are_still_checked() {
        let mut syllabus = syllabus_of(&["loops", "closures"]);
        syllabus.lessons[1].enabled = false;

        assert!(validate_syllabus(&syllabus).is_err());
    }
}
