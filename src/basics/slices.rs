// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;

use crate::config::consts::LESSON_SLICES;
use crate::errors::LessonError;
use crate::traits::{Lesson, LessonOutcome};

#[derive(Debug, Clone, PartialEq)]
pub struct SliceReport {
    pub appended: Vec<i32>,
    pub sorted: Vec<i32>,
    pub empty: Vec<i32>,
    pub empty_capacity: usize,
    pub literal: Vec<i32>,
    pub head: Vec<i32>,
    pub middle: Vec<i32>,
}

pub fn understand_slices() -> SliceReport {
    let mut numbers: Vec<i32> = Vec::new();
    numbers.push(3);
    numbers.push(1);
    numbers.push(2);
    let appended = numbers.clone();

    numbers.sort_by(|a, b| a.cmp(b));

    // A fresh Vec has not allocated: length and capacity are both 0.
    let empty: Vec<i32> = Vec::new();
    let empty_capacity = empty.capacity();

    let new_numbers = vec![5, 3, 2, 4, 1];

    // start inclusive, end exclusive
    let head: &[i32] = &new_numbers[0..2];
    let middle: &[i32] = &new_numbers[1..3];

    SliceReport {
        appended,
        sorted: numbers,
        empty,
        empty_capacity,
        head: head.to_vec(),
        middle: middle.to_vec(),
        literal: new_numbers,
    }
}

#[derive(Debug, Default)]
pub struct SlicesLesson;

impl SlicesLesson {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Lesson for SlicesLesson {
    async fn teach(&self) -> Result<LessonOutcome, LessonError> {
        let report = understand_slices();

        let mut outcome = LessonOutcome::new();
        outcome
            .observe("Slice values are", format!("{:?}", report.appended))
            .observe(
                "Slice values after sorting in ascending order are",
                format!("{:?}", report.sorted),
            )
            .observe(
                "Empty Vec is",
                format!(
                    "{:?} (len={}, capacity={})",
                    report.empty,
                    report.empty.len(),
                    report.empty_capacity
                ),
            )
            .observe("New Slice values are", format!("{:?}", report.literal))
            .observe("new_numbers[0..2]", format!("{:?}", report.head))
            .observe("new_numbers[1..3]", format!("{:?}", report.middle));
        Ok(outcome)
    }

    fn name(&self) -> &'static str {
        LESSON_SLICES
    }
}
