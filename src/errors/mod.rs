// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod config;
mod lesson;

pub use config::{ConfigError, ValidationError};
pub use lesson::LessonError;
