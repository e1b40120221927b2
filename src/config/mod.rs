// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod loader;
mod registry;
mod validation;

#[cfg(test)]
mod integration_tests;
pub mod consts;

pub use loader::{
    default_syllabus, load_and_validate_syllabus, load_syllabus, parse_syllabus, LessonConfig,
    Syllabus,
};
pub use registry::{build_lessons, LessonFactory};
pub use validation::validate_syllabus;
