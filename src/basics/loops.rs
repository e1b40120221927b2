// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;

use crate::config::consts::LESSON_LOOPS;
use crate::errors::LessonError;
use crate::traits::{Lesson, LessonOutcome};

#[derive(Debug, Clone, PartialEq)]
pub struct LoopsReport {
    pub range_sum: u32,
    pub countdown: Vec<u32>,
    pub first_power_over_hundred: u32,
    pub shouted: Vec<String>,
    pub lower_triangle: Vec<(u32, u32)>,
}

pub fn understand_loops() -> LoopsReport {
    let mut range_sum = 0;
    for i in 1..=10 {
        range_sum += i;
    }

    let mut countdown = Vec::new();
    let mut remaining = 3;
    while remaining > 0 {
        countdown.push(remaining);
        remaining -= 1;
    }

    // `loop` is an expression; `break` hands back its value.
    let mut power = 1;
    let first_power_over_hundred = loop {
        power *= 2;
        if power > 100 {
            break power;
        }
    };

    let words = ["ownership", "borrowing", "lifetimes"];
    let mut shouted = Vec::with_capacity(words.len());
    for word in &words {
        shouted.push(word.to_uppercase());
    }

    let mut lower_triangle = Vec::new();
    'rows: for row in 0..3 {
        for col in 0..3 {
            if col > row {
                continue 'rows;
            }
            lower_triangle.push((row, col));
        }
    }

    LoopsReport {
        range_sum,
        countdown,
        first_power_over_hundred,
        shouted,
        lower_triangle,
    }
}

#[derive(Debug, Default)]
pub struct LoopsLesson;

impl LoopsLesson {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Lesson for LoopsLesson {
    async fn teach(&self) -> Result<LessonOutcome, LessonError> {
        let report = understand_loops();

        let mut outcome = LessonOutcome::new();
        outcome
            .observe("Sum of 1..=10", report.range_sum)
            .observe("Countdown", format!("{:?}", report.countdown))
            .observe("First power of two over 100", report.first_power_over_hundred)
            .observe("Shouted words", report.shouted.join(" "))
            .observe("Lower triangle", format!("{:?}", report.lower_triangle));
        Ok(outcome)
    }

    fn name(&self) -> &'static str {
        LESSON_LOOPS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_understand_loops() {
        let report = understand_loops();

        assert_eq!(report.range_sum, 55);
        assert_eq!(report.countdown, vec![3, 2, 1]);
        assert_eq!(report.first_power_over_hundred, 128);
        assert_eq!(report.shouted, vec!["OWNERSHIP", "BORROWING", "LIFETIMES"]);
    }

    #[test]
    fn test_labeled_continue_skips_rest_of_row() {
        let report = understand_loops();

        assert_eq!(
            report.lower_triangle,
            vec![(0, 0), (1, 0), (1, 1), (2, 0), (2, 1), (2, 2)]
        );
    }

    #[tokio::test]
    async fn test_loops_lesson() {
        let outcome = LoopsLesson::new().teach().await.unwrap();
        assert_eq!(outcome.value_of("Sum of 1..=10"), Some("55"));
    }
}
