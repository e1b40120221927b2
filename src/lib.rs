// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod basics;         // language fundamentals lessons
pub mod concurrency;    // task spawning lesson
pub mod config;         // syllabus + lesson registry
pub mod engine;         // tour runner
pub mod errors;         // error handling
pub mod observability;
pub mod traits;         // unified abstractions
