// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::{DEFAULT_SYLLABUS, DEFAULT_TITLE};
use crate::errors::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// The list of lessons a tour runs, in order.
///
/// # Fields
/// * `title` - Heading printed before the first lesson (optional)
/// * `lessons` - Lesson entries, run top to bottom
///
/// # Example
/// ```yaml
/// title: "References and Slices"
/// lessons:
///   - id: pointers
///   - id: slices
///   - id: maps
///     enabled: false
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Syllabus {
    #[serde(default = "default_title")]
    pub title: String,
    pub lessons: Vec<LessonConfig>,
}

/// One syllabus entry.
///
/// # Fields
/// * `id` - Lesson identifier, must be known to [`LessonFactory`](crate::config::LessonFactory)
/// * `enabled` - Set to `false` to keep the entry but skip it (defaults to `true`)
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LessonConfig {
    pub id: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

fn default_enabled() -> bool {
    true
}

impl Syllabus {
    /// Entries that will actually run.
    pub fn enabled_lessons(&self) -> impl Iterator<Item = &LessonConfig> {
        self.lessons.iter().filter(|l| l.enabled)
    }
}

/// Parse a syllabus from YAML text without validating it.
pub fn parse_syllabus(content: &str) -> Result<Syllabus, ConfigError> {
    Ok(serde_yaml::from_str(content)?)
}

/// Load a syllabus from a YAML file
pub fn load_syllabus<P: AsRef<Path>>(path: P) -> Result<Syllabus, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_syllabus(&content)
}

/// Load and validate a syllabus from a YAML file
///
/// Every lesson id must be known, appear once, and at least one entry must exist.
pub fn load_and_validate_syllabus<P: AsRef<Path>>(path: P) -> Result<Syllabus, ConfigError> {
    let syllabus = load_syllabus(path)?;
    crate::config::validate_syllabus(&syllabus).map_err(ConfigError::Invalid)?;
    Ok(syllabus)
}

/// The built-in syllabus covering every lesson.
pub fn default_syllabus() -> Result<Syllabus, ConfigError> {
    let syllabus = parse_syllabus(DEFAULT_SYLLABUS)?;
    crate::config::validate_syllabus(&syllabus).map_err(ConfigError::Invalid)?;
    Ok(syllabus)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_basic_syllabus() {
        let yaml = r#"
title: "Just Loops"
lessons:
  - id: loops
  - id: slices
    enabled: false
"#;

        let syllabus = parse_syllabus(yaml).unwrap();
        assert_eq!(syllabus.title, "Just Loops");
        assert_eq!(syllabus.lessons.len(), 2);
        assert!(syllabus.lessons[0].enabled);
        assert!(!syllabus.lessons[1].enabled);

        let enabled: Vec<&str> = syllabus.enabled_lessons().map(|l| l.id.as_str()).collect();
        assert_eq!(enabled, vec!["loops"]);
    }

    #[test]
    fn test_title_defaults_when_missing() {
        let syllabus = parse_syllabus("lessons:\n  - id: loops\n").unwrap();
        assert_eq!(syllabus.title, DEFAULT_TITLE);
    }

    #[test]
    fn test_missing_lessons_is_parse_error() {
        let result = parse_syllabus("title: nothing here\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let result = load_syllabus("does/not/exist.yaml");
        match result {
            Err(ConfigError::Io { path, .. }) => assert_eq!(path, "does/not/exist.yaml"),
            other => panic!("Expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn test_default_syllabus_is_valid() {
        let syllabus = default_syllabus().unwrap();
        assert_eq!(syllabus.title, "Rust Basics Tour");
        assert_eq!(syllabus.lessons.len(), 9);
    }
}
