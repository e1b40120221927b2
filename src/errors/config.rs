// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for syllabus loading, validation and logging setup.

use thiserror::Error;

/// Problems found while validating a syllabus.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// The syllabus names a lesson that no implementation exists for
    #[error("Unknown lesson: '{lesson_id}'")]
    UnknownLesson { lesson_id: String },

    /// The same lesson appears more than once
    #[error("Duplicate lesson: '{lesson_id}'")]
    DuplicateLesson { lesson_id: String },

    /// The syllabus contains no lessons at all
    #[error("Syllabus contains no lessons")]
    EmptySyllabus,
}

/// Errors that can occur before the tour starts.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Syllabus file could not be read.
    #[error("Failed to read syllabus '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Syllabus content is not valid YAML for the expected shape.
    #[error("Failed to parse syllabus: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// A single lesson could not be resolved.
    #[error(transparent)]
    Lesson(#[from] ValidationError),

    /// One or more validation rules failed.
    #[error("Syllabus validation failed:\n{}", join_errors(.0))]
    Invalid(Vec<ValidationError>),

    /// The tracing subscriber could not be installed.
    #[error("Logging setup failed: {0}")]
    Logging(String),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
