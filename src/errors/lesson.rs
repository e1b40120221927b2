// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors raised while a lesson is being taught.
//!
//! Lessons are expected to succeed. The only fallible step is encoding the
//! user type, so the variants wrap the two serializers.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LessonError {
    /// JSON encoding or decoding failed.
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML document encoding failed.
    #[error("Document encoding failed: {0}")]
    Document(#[from] serde_yaml::Error),
}
