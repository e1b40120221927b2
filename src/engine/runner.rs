// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Sequential tour runner.
//!
//! Lessons run one after another in syllabus order. A failing lesson is
//! recorded and logged, and the tour moves on to the next one.
//!
//! # Example
//! ```rust
//! use the_basics::config::default_syllabus;
//! use the_basics::engine::TourRunner;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let runner = TourRunner::from_syllabus(&default_syllabus()?)?;
//! let summary = runner.run().await;
//! assert!(summary.is_success());
//! # Ok(())
//! # }
//! ```

use std::time::{Duration, Instant};
use tracing::Instrument;

use crate::config::{build_lessons, Syllabus};
use crate::errors::{ConfigError, LessonError};
use crate::observability::messages::lesson::{LessonCompleted, LessonFailed, LessonStarted};
use crate::observability::messages::tour::TourStarted;
use crate::observability::messages::StructuredLog;
use crate::traits::{Lesson, LessonOutcome};

/// What one lesson produced.
#[derive(Debug)]
pub struct LessonResult {
    pub lesson: &'static str,
    pub outcome: Result<LessonOutcome, LessonError>,
    pub duration: Duration,
}

#[derive(Debug)]
pub struct TourSummary {
    pub title: String,
    pub results: Vec<LessonResult>,
    pub duration: Duration,
}

impl TourSummary {
    pub fn completed_count(&self) -> usize {
        self.results.iter().filter(|r| r.outcome.is_ok()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.results.len() - self.completed_count()
    }

    pub fn is_success(&self) -> bool {
        self.failed_count() == 0
    }
}

pub struct TourRunner {
    title: String,
    lessons: Vec<Box<dyn Lesson>>,
}

impl TourRunner {
    pub fn new(title: impl Into<String>, lessons: Vec<Box<dyn Lesson>>) -> Self {
        Self {
            title: title.into(),
            lessons,
        }
    }

    /// Build a runner for the enabled entries of a syllabus.
    pub fn from_syllabus(syllabus: &Syllabus) -> Result<Self, ConfigError> {
        let lessons = build_lessons(syllabus)?;
        Ok(Self::new(syllabus.title.clone(), lessons))
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn lesson_names(&self) -> Vec<&'static str> {
        self.lessons.iter().map(|l| l.name()).collect()
    }

    pub async fn run(&self) -> TourSummary {
        let tour_start = Instant::now();
        let start_msg = TourStarted {
            title: &self.title,
            lesson_count: self.lessons.len(),
        };
        let span = start_msg.span("tour_execution");
        start_msg.log();

        let results = async {
            let mut results = Vec::with_capacity(self.lessons.len());
            for lesson in &self.lessons {
                results.push(Self::run_lesson(lesson.as_ref()).await);
            }
            results
        }
        .instrument(span)
        .await;

        TourSummary {
            title: self.title.clone(),
            results,
            duration: tour_start.elapsed(),
        }
    }

    async fn run_lesson(lesson: &dyn Lesson) -> LessonResult {
        let topic = lesson.topic().to_string();
        LessonStarted {
            lesson: lesson.name(),
            topic: &topic,
        }
        .log();

        let start_time = Instant::now();
        let outcome = lesson.teach().await;
        let duration = start_time.elapsed();

        match &outcome {
            Ok(observations) => LessonCompleted {
                lesson: lesson.name(),
                observation_count: observations.len(),
                duration,
            }
            .log(),
            Err(e) => LessonFailed {
                lesson: lesson.name(),
                error: e,
            }
            .log(),
        }

        LessonResult {
            lesson: lesson.name(),
            outcome,
            duration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_syllabus;
    use crate::traits::LessonTopic;
    use async_trait::async_trait;

    struct BrokenLesson;

    fn result_for<'a>(summary: &'a TourSummary, lesson: &str) -> &'a LessonResult {
        summary
            .results
            .iter()
            .find(|r| r.lesson == lesson)
            .unwrap_or_else(|| panic!("No result for lesson '{lesson}'"))
    }

    #[async_trait]
    impl Lesson for BrokenLesson {
        async fn teach(&self) -> Result<LessonOutcome, LessonError> {
            let parse_error = serde_json::from_str::<u32>("not a number").unwrap_err();
            Err(LessonError::Json(parse_error))
        }

        fn name(&self) -> &'static str {
            "broken"
        }
    }

    #[tokio::test]
    async fn test_default_tour_runs_every_lesson() {
        let runner = TourRunner::from_syllabus(&default_syllabus().unwrap()).unwrap();
        let summary = runner.run().await;

        assert_eq!(summary.results.len(), 9);
        assert!(summary.is_success());
        assert_eq!(summary.title, "Rust Basics Tour");
        let pointers = result_for(&summary, "pointers").outcome.as_ref().unwrap();
        assert_eq!(pointers.value_of("Value of x after function call"), Some("20"));
    }

    #[tokio::test]
    async fn test_failure_does_not_stop_tour() {
        let lessons: Vec<Box<dyn Lesson>> = vec![
            Box::new(BrokenLesson),
            Box::new(crate::basics::LoopsLesson::new()),
        ];
        let runner = TourRunner::new("mixed", lessons);
        let summary = runner.run().await;

        assert_eq!(summary.completed_count(), 1);
        assert_eq!(summary.failed_count(), 1);
        assert!(!summary.is_success());
        assert!(result_for(&summary, "broken").outcome.is_err());
        assert!(result_for(&summary, "loops").outcome.is_ok());
    }

    #[tokio::test]
    async fn test_order_follows_syllabus() {
        let lessons: Vec<Box<dyn Lesson>> = vec![
            Box::new(crate::concurrency::TasksLesson::new()),
            Box::new(crate::basics::SlicesLesson::new()),
        ];
        let runner = TourRunner::new("ordered", lessons);

        assert_eq!(runner.lesson_names(), vec!["tasks", "slices"]);
        let summary = runner.run().await;
        let ran: Vec<&str> = summary.results.iter().map(|r| r.lesson).collect();
        assert_eq!(ran, vec!["tasks", "slices"]);
    }

    #[test]
    fn test_default_topic_is_basics() {
        assert_eq!(BrokenLesson.topic(), LessonTopic::Basics);
    }
}
