// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Lessons on the language fundamentals.
//!
//! Each lesson exposes a plain function returning a typed report, and a
//! [`Lesson`](crate::traits::Lesson) implementation that turns the report into
//! printable observations.

pub mod decisions;
pub mod functions;
pub mod loops;
pub mod maps;
pub mod pointers;
pub mod slices;
pub mod types;
pub mod variables;

pub use decisions::DecisionsLesson;
pub use functions::FunctionsLesson;
pub use loops::LoopsLesson;
pub use maps::MapsLesson;
pub use pointers::PointersLesson;
pub use slices::SlicesLesson;
pub use types::{User, UserTypeLesson};
pub use variables::VariablesLesson;
