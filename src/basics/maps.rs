// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use std::collections::HashMap;

use crate::config::consts::LESSON_MAPS;
use crate::errors::LessonError;
use crate::traits::{Lesson, LessonOutcome};

#[derive(Debug, Clone, PartialEq)]
pub struct MapReport {
    /// Final contents, sorted by key. `HashMap` iteration order is unspecified.
    pub entries: Vec<(String, u32)>,
    pub lookup: Option<u32>,
    pub missing: Option<u32>,
    pub missing_or_default: u32,
    pub removed: Option<u32>,
    pub contains_after_remove: bool,
}

pub fn understand_maps() -> MapReport {
    let mut ages: HashMap<String, u32> = HashMap::new();
    ages.insert("ferris".to_string(), 8);
    ages.insert("corro".to_string(), 3);

    // Update in place through the entry API.
    *ages.entry("ferris".to_string()).or_insert(0) += 1;

    let lookup = ages.get("ferris").copied();
    let missing = ages.get("nobody").copied();
    let missing_or_default = missing.unwrap_or_default();

    ages.insert("temporary".to_string(), 1);
    let removed = ages.remove("temporary");
    let contains_after_remove = ages.contains_key("temporary");

    let mut entries: Vec<(String, u32)> = ages.into_iter().collect();
    entries.sort();

    MapReport {
        entries,
        lookup,
        missing,
        missing_or_default,
        removed,
        contains_after_remove,
    }
}

#[derive(Debug, Default)]
pub struct MapsLesson;

impl MapsLesson {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Lesson for MapsLesson {
    async fn teach(&self) -> Result<LessonOutcome, LessonError> {
        let report = understand_maps();

        let mut outcome = LessonOutcome::new();
        outcome
            .observe("Map entries are", format!("{:?}", report.entries))
            .observe("ages[\"ferris\"]", format!("{:?}", report.lookup))
            .observe("ages[\"nobody\"]", format!("{:?}", report.missing))
            .observe("Missing key with default", report.missing_or_default)
            .observe("Removed value", format!("{:?}", report.removed))
            .observe("Contains removed key", report.contains_after_remove);
        Ok(outcome)
    }

    fn name(&self) -> &'static str {
        LESSON_MAPS
    }
}
