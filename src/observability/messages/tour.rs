// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for the syllabus and the tour as a whole.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use std::time::Duration;
use tracing::Span;

/// Syllabus loaded and validated.
///
/// # Log Level
/// `info!` - Important operational event
pub struct SyllabusLoaded<'a> {
    pub source: &'a str,
    pub lesson_count: usize,
}

impl Display for SyllabusLoaded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Syllabus loaded from {}: {} lessons",
            self.source, self.lesson_count
        )
    }
}

impl StructuredLog for SyllabusLoaded<'_> {
    fn log(&self) {
        tracing::info!(
            source = self.source,
            lesson_count = self.lesson_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!("syllabus", name = name, source = self.source)
    }
}

/// Lesson disabled in the syllabus and skipped.
///
/// # Log Level
/// `debug!` - Expected configuration choice
pub struct LessonSkipped<'a> {
    pub lesson: &'a str,
}

impl Display for LessonSkipped<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Lesson '{}' disabled in syllabus, skipping", self.lesson)
    }
}

impl StructuredLog for LessonSkipped<'_> {
    fn log(&self) {
        tracing::debug!(lesson = self.lesson, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!("syllabus", name = name, lesson = self.lesson)
    }
}

/// Tour started.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use the_basics::observability::messages::tour::TourStarted;
///
/// let msg = TourStarted {
///     title: "Rust Basics Tour",
///     lesson_count: 9,
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct TourStarted<'a> {
    pub title: &'a str,
    pub lesson_count: usize,
}

impl Display for TourStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Starting tour '{}' with {} lessons",
            self.title, self.lesson_count
        )
    }
}

impl StructuredLog for TourStarted<'_> {
    fn log(&self) {
        tracing::info!(
            title = self.title,
            lesson_count = self.lesson_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "tour",
            name = name,
            title = self.title,
            lesson_count = self.lesson_count,
        )
    }
}

/// Tour finished, successfully or not.
///
/// # Log Level
/// `info!` when every lesson completed, `warn!` otherwise
pub struct TourCompleted<'a> {
    pub title: &'a str,
    pub completed: usize,
    pub failed: usize,
    pub duration: Duration,
}

impl Display for TourCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Tour '{}' finished: completed={}, failed={}, duration={:?}",
            self.title, self.completed, self.failed, self.duration
        )
    }
}

impl StructuredLog for TourCompleted<'_> {
    fn log(&self) {
        if self.failed == 0 {
            tracing::info!(
                title = self.title,
                completed = self.completed,
                failed = self.failed,
                "{}", self
            );
        } else {
            tracing::warn!(
                title = self.title,
                completed = self.completed,
                failed = self.failed,
                "{}", self
            );
        }
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!("tour", name = name, title = self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tour_started_display() {
        let msg = TourStarted {
            title: "Rust Basics Tour",
            lesson_count: 9,
        };
        assert_eq!(msg.to_string(), "Starting tour 'Rust Basics Tour' with 9 lessons");
    }

    #[test]
    fn test_syllabus_loaded_display() {
        let msg = SyllabusLoaded {
            source: "built-in default",
            lesson_count: 3,
        };
        assert_eq!(msg.to_string(), "Syllabus loaded from built-in default: 3 lessons");
    }
}
