// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;

use crate::config::consts::LESSON_VARIABLES;
use crate::errors::LessonError;
use crate::traits::{Lesson, LessonOutcome};

// Visible to this module only.
static GLOBAL_VARIABLE: &str = "global";

/// Visible to every module that imports it.
pub static PUBLIC_GLOBAL_VARIABLE: &str = "Global";

#[derive(Debug, Clone, PartialEq)]
pub struct VariablesReport {
    pub local: &'static str,
    pub name: String,
    pub id: i64,
    pub is_super_human: bool,
    pub counter: u32,
    pub shadowed_len: usize,
    pub module_global: &'static str,
    pub public_global: &'static str,
}

/// Bindings: local, late-initialised, explicitly typed, inferred, mutable and shadowed.
#[allow(clippy::needless_late_init)]
pub fn understand_variables() -> VariablesReport {
    let local_variable = "local";

    // Declared first, assigned exactly once later.
    let name: String;
    name = String::from("Ferris");

    let id: i64 = 10;

    // Type inferred from the initializer, same as `let is_super_human: bool = false`.
    let is_super_human = false;

    let mut counter = 0;
    counter += 1;

    // Shadowing may change the type.
    let spaces = "   ";
    let spaces = spaces.len();

    VariablesReport {
        local: local_variable,
        name,
        id,
        is_super_human,
        counter,
        shadowed_len: spaces,
        module_global: GLOBAL_VARIABLE,
        public_global: PUBLIC_GLOBAL_VARIABLE,
    }
}

#[derive(Debug, Default)]
pub struct VariablesLesson;

impl VariablesLesson {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Lesson for VariablesLesson {
    async fn teach(&self) -> Result<LessonOutcome, LessonError> {
        let report = understand_variables();

        let mut outcome = LessonOutcome::new();
        outcome
            .observe("Variable local to function", report.local)
            .observe("My name is", &report.name)
            .observe("My id is", report.id)
            .observe("Am I a Super Human?", report.is_super_human)
            .observe("Counter after increment", report.counter)
            .observe("Shadowed binding", report.shadowed_len)
            .observe("Variable private to module", report.module_global)
            .observe("Variable public outside module", report.public_global);
        Ok(outcome)
    }

    fn name(&self) -> &'static str {
        LESSON_VARIABLES
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_understand_variables() {
        let report = understand_variables();

        assert_eq!(report.local, "local");
        assert_eq!(report.name, "Ferris");
        assert_eq!(report.id, 10);
        assert!(!report.is_super_human);
        assert_eq!(report.counter, 1);
        assert_eq!(report.shadowed_len, 3);
        assert_eq!(report.module_global, "global");
        assert_eq!(report.public_global, "Global");
    }

    #[tokio::test]
    async fn test_variables_lesson_observations() {
        let outcome = VariablesLesson::new().teach().await.unwrap();

        assert_eq!(outcome.value_of("My id is"), Some("10"));
        assert_eq!(outcome.value_of("Am I a Super Human?"), Some("false"));
        assert_eq!(outcome.value_of("Variable public outside module"), Some("Global"));
    }
}
