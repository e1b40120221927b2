// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;

use crate::config::consts::LESSON_FUNCTIONS;
use crate::errors::LessonError;
use crate::traits::{Lesson, LessonOutcome};

pub fn single_return_value() -> String {
    String::from("Ferris")
}

/// Several values come back as a tuple and are destructured by the caller.
pub fn multiple_return_values() -> (String, i64) {
    (String::from("Ferris"), 10)
}

#[derive(Debug, Default)]
pub struct FunctionsLesson;

impl FunctionsLesson {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Lesson for FunctionsLesson {
    async fn teach(&self) -> Result<LessonOutcome, LessonError> {
        // Binding type comes from the function's return type.
        let returned_name = single_return_value();
        let (returned_name_again, returned_id) = multiple_return_values();

        let mut outcome = LessonOutcome::new();
        outcome
            .observe("My name is", returned_name)
            .observe(
                "Multiple values",
                format!("name={returned_name_again}, id={returned_id}"),
            );
        Ok(outcome)
    }

    fn name(&self) -> &'static str {
        LESSON_FUNCTIONS
    }
}
