// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use std::fmt::{self, Display, Formatter};

use crate::config::consts::LESSON_DECISIONS;
use crate::errors::LessonError;
use crate::traits::{Lesson, LessonOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeGroup {
    Child,
    Teen,
    Adult,
    Senior,
}

impl Display for AgeGroup {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let label = match self {
            AgeGroup::Child => "child",
            AgeGroup::Teen => "teen",
            AgeGroup::Adult => "adult",
            AgeGroup::Senior => "senior",
        };
        write!(f, "{label}")
    }
}

/// `match` on inclusive ranges. Arms are checked top to bottom.
pub fn classify_age(age: u32) -> AgeGroup {
    match age {
        0..=12 => AgeGroup::Child,
        13..=19 => AgeGroup::Teen,
        20..=64 => AgeGroup::Adult,
        _ => AgeGroup::Senior,
    }
}

/// `if` / `else if` / `else` is an expression: every branch yields a value.
pub fn describe_number(n: i64) -> &'static str {
    if n < 0 {
        "negative"
    } else if n == 0 {
        "zero"
    } else if n % 2 == 0 {
        "positive even"
    } else {
        "positive odd"
    }
}

pub fn greeting(name: Option<&str>) -> String {
    if let Some(name) = name {
        format!("Hello, {name}!")
    } else {
        String::from("Hello, stranger!")
    }
}

/// Tuple patterns. Arms are checked top to bottom, so `(0, 0)` must come first.
pub fn fizz_buzz(n: u32) -> String {
    match (n % 3, n % 5) {
        (0, 0) => String::from("FizzBuzz"),
        (0, _) => String::from("Fizz"),
        (_, 0) => String::from("Buzz"),
        _ => n.to_string(),
    }
}

/// Guards refine an arm after the pattern matched.
pub fn compare_pair(pair: (i32, i32)) -> &'static str {
    match pair {
        (x, y) if x == y => "equal",
        (x, y) if x + y == 0 => "opposites",
        (x, _) if x % 2 == 0 => "first is even",
        _ => "unrelated",
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DecisionsReport {
    pub age_groups: Vec<(u32, AgeGroup)>,
    pub numbers: Vec<(i64, &'static str)>,
    pub greetings: Vec<String>,
    pub fizz_buzz: Vec<String>,
    pub pairs: Vec<((i32, i32), &'static str)>,
}

pub fn understand_decisions() -> DecisionsReport {
    DecisionsReport {
        age_groups: [7, 15, 42, 80]
            .into_iter()
            .map(|age| (age, classify_age(age)))
            .collect(),
        numbers: [-4, 0, 6, 7]
            .into_iter()
            .map(|n| (n, describe_number(n)))
            .collect(),
        greetings: vec![greeting(Some("Ferris")), greeting(None)],
        fizz_buzz: (1..=15).map(fizz_buzz).collect(),
        pairs: [(2, 2), (3, -3), (4, 1), (5, 1)]
            .into_iter()
            .map(|pair| (pair, compare_pair(pair)))
            .collect(),
    }
}

#[derive(Debug, Default)]
pub struct DecisionsLesson;

impl DecisionsLesson {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Lesson for DecisionsLesson {
    async fn teach(&self) -> Result<LessonOutcome, LessonError> {
        let report = understand_decisions();

        let mut outcome = LessonOutcome::new();
        for (age, group) in &report.age_groups {
            outcome.observe(format!("Age {age} is"), group);
        }
        for (n, description) in &report.numbers {
            outcome.observe(format!("Number {n} is"), description);
        }
        for greeting in &report.greetings {
            outcome.observe("Greeting", greeting);
        }
        outcome.observe("FizzBuzz 1..=15", report.fizz_buzz.join(" "));
        for ((x, y), relation) in &report.pairs {
            outcome.observe(format!("Pair ({x}, {y})"), relation);
        }
        Ok(outcome)
    }

    fn name(&self) -> &'static str {
        LESSON_DECISIONS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_age_boundaries() {
        assert_eq!(classify_age(0), AgeGroup::Child);
        assert_eq!(classify_age(12), AgeGroup::Child);
        assert_eq!(classify_age(13), AgeGroup::Teen);
        assert_eq!(classify_age(19), AgeGroup::Teen);
        assert_eq!(classify_age(20), AgeGroup::Adult);
        assert_eq!(classify_age(64), AgeGroup::Adult);
        assert_eq!(classify_age(65), AgeGroup::Senior);
    }

    #[test]
    fn test_describe_number() {
        assert_eq!(describe_number(-1), "negative");
        assert_eq!(describe_number(0), "zero");
        assert_eq!(describe_number(2), "positive even");
        assert_eq!(describe_number(3), "positive odd");
    }

    #[test]
    fn test_greeting() {
        assert_eq!(greeting(Some("Ferris")), "Hello, Ferris!");
        assert_eq!(greeting(None), "Hello, stranger!");
    }

    #[test]
    fn test_fizz_buzz() {
        assert_eq!(fizz_buzz(0), "FizzBuzz");
        assert_eq!(fizz_buzz(9), "Fizz");
        assert_eq!(fizz_buzz(10), "Buzz");
        assert_eq!(fizz_buzz(15), "FizzBuzz");
        assert_eq!(fizz_buzz(7), "7");
    }

    #[test]
    fn test_compare_pair_guards() {
        assert_eq!(compare_pair((0, 0)), "equal");
        assert_eq!(compare_pair((3, -3)), "opposites");
        assert_eq!(compare_pair((4, 1)), "first is even");
        assert_eq!(compare_pair((5, 1)), "unrelated");
    }

    #[tokio::test]
    async fn test_decisions_lesson() {
        let outcome = DecisionsLesson::new().teach().await.unwrap();

        assert_eq!(outcome.value_of("Age 15 is"), Some("teen"));
        assert_eq!(outcome.value_of("Number -4 is"), Some("negative"));
        assert!(outcome
            .value_of("FizzBuzz 1..=15")
            .unwrap()
            .ends_with("14 FizzBuzz"));
        assert_eq!(outcome.value_of("Pair (3, -3)"), Some("opposites"));
    }
}
