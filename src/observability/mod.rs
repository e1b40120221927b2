// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! Log messages are structs implementing `Display` and [`messages::StructuredLog`],
//! grouped by subsystem:
//! * `messages::lesson` - lesson lifecycle and the detached task
//! * `messages::tour` - syllabus loading and tour lifecycle
//!
//! # Usage
//!
//! ```rust
//! use the_basics::observability::messages::lesson::LessonStarted;
//! use the_basics::observability::messages::StructuredLog;
//!
//! LessonStarted {
//!     lesson: "pointers",
//!     topic: "basics",
//! }
//! .log();
//! ```

pub mod logging;
pub mod messages;

pub use logging::init_logging;
