// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for lesson lifecycle events.
//!
//! This module contains message types for logging events related to:
//! * Lesson start, completion and failure
//! * The detached task spawned by the concurrency lesson

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use std::time::Duration;
use tracing::Span;

/// Lesson started.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use the_basics::observability::messages::lesson::LessonStarted;
///
/// let msg = LessonStarted {
///     lesson: "slices",
///     topic: "basics",
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct LessonStarted<'a> {
    pub lesson: &'a str,
    pub topic: &'a str,
}

impl Display for LessonStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Lesson '{}' started (topic: {})", self.lesson, self.topic)
    }
}

impl StructuredLog for LessonStarted<'_> {
    fn log(&self) {
        tracing::info!(lesson = self.lesson, topic = self.topic, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!("lesson", name = name, lesson = self.lesson, topic = self.topic)
    }
}

/// Lesson completed successfully.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use the_basics::observability::messages::lesson::LessonCompleted;
/// use std::time::Duration;
///
/// let msg = LessonCompleted {
///     lesson: "slices",
///     observation_count: 6,
///     duration: Duration::from_micros(42),
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct LessonCompleted<'a> {
    pub lesson: &'a str,
    pub observation_count: usize,
    pub duration: Duration,
}

impl Display for LessonCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Lesson '{}' completed: observations={}, duration={:?}",
            self.lesson, self.observation_count, self.duration
        )
    }
}

impl StructuredLog for LessonCompleted<'_> {
    fn log(&self) {
        tracing::info!(
            lesson = self.lesson,
            observation_count = self.observation_count,
            duration_us = self.duration.as_micros() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "lesson",
            name = name,
            lesson = self.lesson,
            observation_count = self.observation_count,
        )
    }
}

/// Lesson failed.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct LessonFailed<'a> {
    pub lesson: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for LessonFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Lesson '{}' failed: {}", self.lesson, self.error)
    }
}

impl StructuredLog for LessonFailed<'_> {
    fn log(&self) {
        tracing::error!(
            lesson = self.lesson,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!("lesson", name = name, lesson = self.lesson)
    }
}

/// A background task was handed to the runtime.
///
/// # Log Level
/// `info!` - Important operational event
pub struct TaskSpawned<'a> {
    pub task: &'a str,
    pub detached: bool,
}

impl Display for TaskSpawned<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Task '{}' spawned (detached={})", self.task, self.detached)
    }
}

impl StructuredLog for TaskSpawned<'_> {
    fn log(&self) {
        tracing::info!(task = self.task, detached = self.detached, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!("task", name = name, task = self.task)
    }
}

/// A background task ran to the end of its body.
///
/// # Log Level
/// `debug!` - Nobody waits for this event, it may never be printed
pub struct TaskFinished<'a> {
    pub task: &'a str,
}

impl Display for TaskFinished<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Task '{}' finished", self.task)
    }
}

impl StructuredLog for TaskFinished<'_> {
    fn log(&self) {
        tracing::debug!(task = self.task, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!("task", name = name, task = self.task)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lesson_completed_display() {
        let msg = LessonCompleted {
            lesson: "loops",
            observation_count: 5,
            duration: Duration::from_millis(1),
        };
        assert_eq!(
            msg.to_string(),
            "Lesson 'loops' completed: observations=5, duration=1ms"
        );
    }

    #[test]
    fn test_lesson_failed_display_includes_error() {
        let error = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        let msg = LessonFailed {
            lesson: "user_type",
            error: &error,
        };
        assert_eq!(msg.to_string(), "Lesson 'user_type' failed: boom");
    }
}
