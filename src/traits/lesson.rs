// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use std::fmt::{self, Display, Formatter};

use crate::errors::LessonError;

/// Broad area a lesson belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LessonTopic {
    /// Bindings, references, collections and types
    Basics,
    /// Spawning work onto the async runtime
    Concurrency,
}

impl Display for LessonTopic {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LessonTopic::Basics => write!(f, "basics"),
            LessonTopic::Concurrency => write!(f, "concurrency"),
        }
    }
}

/// A labeled value produced by a lesson for display.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub label: String,
    pub value: String,
}

impl Observation {
    pub fn new(label: impl Into<String>, value: impl Display) -> Self {
        Self {
            label: label.into(),
            value: value.to_string(),
        }
    }
}

impl Display for Observation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.value)
    }
}

/// Everything a lesson wants printed, in the order it was observed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LessonOutcome {
    pub observations: Vec<Observation>,
}

impl LessonOutcome {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one observation. Chainable.
    pub fn observe(&mut self, label: impl Into<String>, value: impl Display) -> &mut Self {
        self.observations.push(Observation::new(label, value));
        self
    }

    /// Look up the first observation with the given label.
    pub fn value_of(&self, label: &str) -> Option<&str> {
        self.observations
            .iter()
            .find(|o| o.label == label)
            .map(|o| o.value.as_str())
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }
}

#[async_trait]
pub trait Lesson: Send + Sync {
    async fn teach(&self) -> Result<LessonOutcome, LessonError>;

    fn name(&self) -> &'static str;

    fn topic(&self) -> LessonTopic {
        LessonTopic::Basics
    }
}
