// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! References as the safe form of pointers.
//!
//! A `&mut i32` handed to a function lets the function write through it. The
//! reference itself is copied into the callee (it is reborrowed), so the
//! address the caller holds never changes.

use async_trait::async_trait;

use crate::config::consts::LESSON_POINTERS;
use crate::errors::LessonError;
use crate::traits::{Lesson, LessonOutcome};

#[derive(Debug, Clone, PartialEq)]
pub struct PointerReport {
    pub before: i32,
    pub dereferenced: i32,
    pub seen_inside: i32,
    pub after: i32,
    pub address_before: String,
    pub address_inside: String,
    pub address_after: String,
}

pub fn understand_pointers() -> PointerReport {
    let mut x: i32 = 10;
    let before = x;

    let p: &mut i32 = &mut x;
    let address_before = format!("{:p}", p);
    let dereferenced = *p;

    let (address_inside, seen_inside) = pass_by_reference(p);
    let address_after = format!("{:p}", p);

    PointerReport {
        before,
        dereferenced,
        seen_inside,
        after: x,
        address_before,
        address_inside,
        address_after,
    }
}

/// Write `20` through the reference. Returns the address and the value seen on entry.
pub fn pass_by_reference(y: &mut i32) -> (String, i32) {
    let address = format!("{:p}", y);
    let seen = *y;
    *y = 20;
    (address, seen)
}

#[derive(Debug, Default)]
pub struct PointersLesson;

impl PointersLesson {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Lesson for PointersLesson {
    async fn teach(&self) -> Result<LessonOutcome, LessonError> {
        let report = understand_pointers();

        let mut outcome = LessonOutcome::new();
        outcome
            .observe("Value of x", report.before)
            .observe("Address of x", &report.address_before)
            .observe("Value at address p points to", report.dereferenced)
            .observe("Value of y inside function", &report.address_inside)
            .observe("Value of p after call", &report.address_after)
            .observe("Value of x after function call", report.after);
        Ok(outcome)
    }

    fn name(&self) -> &'static str {
        LESSON_POINTERS
    }
}
