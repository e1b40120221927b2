// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Each message type implements `Display` for human-readable output and
//! [`StructuredLog`] to emit the same event with typed fields.
//!
//! # Usage Pattern
//!
//! ```rust
//! use the_basics::observability::messages::tour::TourStarted;
//! use the_basics::observability::messages::StructuredLog;
//!
//! let msg = TourStarted {
//!     title: "Rust Basics Tour",
//!     lesson_count: 9,
//! };
//!
//! msg.log();
//! ```

use std::fmt::Display;
use tracing::Span;

pub mod lesson;
pub mod tour;

/// A log message that knows its own level and structured fields.
pub trait StructuredLog: Display {
    /// Emit the message as a tracing event.
    fn log(&self);

    /// Build a span carrying the message's fields.
    fn span(&self, name: &str) -> Span;
}
