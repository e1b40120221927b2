// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! A struct with serialization attributes.
//!
//! [`User`] renders to two textual encodings:
//!
//! * JSON, with camelCase keys. `lastName` is omitted when empty and `age`
//!   when zero.
//! * A YAML document through [`UserDocument`], with snake_case keys. Every
//!   field is always written.
//!
//! Fields that are never set keep their zero value: empty strings, `0` and
//! the zero timestamp (the Unix epoch).

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::consts::LESSON_USER_TYPE;
use crate::errors::LessonError;
use crate::traits::{Lesson, LessonOutcome};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    pub first_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub last_name: String,
    pub phone_number: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub age: u32,
    pub birth_date: DateTime<Utc>,
}

fn is_zero(value: &u32) -> bool {
    *value == 0
}

impl User {
    /// Build a user with only the names set.
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            ..Default::default()
        }
    }

    /// Names of the fields still holding their zero value.
    pub fn zero_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if self.first_name.is_empty() {
            fields.push("first_name");
        }
        if self.last_name.is_empty() {
            fields.push("last_name");
        }
        if self.phone_number.is_empty() {
            fields.push("phone_number");
        }
        if self.age == 0 {
            fields.push("age");
        }
        if self.birth_date == DateTime::<Utc>::default() {
            fields.push("birth_date");
        }
        fields
    }

    pub fn to_json(&self) -> Result<String, LessonError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, LessonError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_document(&self) -> Result<String, LessonError> {
        Ok(serde_yaml::to_string(&UserDocument::from(self))?)
    }
}

/// Document view of a [`User`]. Borrows the user, keeps every field.
#[derive(Debug, Serialize)]
pub struct UserDocument<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub phone_number: &'a str,
    pub age: u32,
    pub birth_date: &'a DateTime<Utc>,
}

impl<'a> From<&'a User> for UserDocument<'a> {
    fn from(user: &'a User) -> Self {
        Self {
            first_name: &user.first_name,
            last_name: &user.last_name,
            phone_number: &user.phone_number,
            age: user.age,
            birth_date: &user.birth_date,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypesReport {
    pub user: User,
    pub zero_fields: Vec<&'static str>,
    pub json: String,
    pub sparse_json: String,
    pub document: String,
}

pub fn understand_types() -> Result<TypesReport, LessonError> {
    let user = User::new("Ferris", "Crab");
    let sparse = User {
        first_name: String::from("Corro"),
        ..Default::default()
    };

    Ok(TypesReport {
        zero_fields: user.zero_fields(),
        json: user.to_json()?,
        sparse_json: sparse.to_json()?,
        document: user.to_document()?,
        user,
    })
}

#[derive(Debug, Default)]
pub struct UserTypeLesson;

impl UserTypeLesson {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Lesson for UserTypeLesson {
    async fn teach(&self) -> Result<LessonOutcome, LessonError> {
        let report = understand_types()?;
        let user = &report.user;

        let mut outcome = LessonOutcome::new();
        outcome
            .observe(
                "Type values are",
                format!(
                    "{} {} {:?} {} {}",
                    user.first_name, user.last_name, user.phone_number, user.age, user.birth_date
                ),
            )
            .observe("Zero-valued fields", report.zero_fields.join(", "))
            .observe("JSON", &report.json)
            .observe("JSON with empty fields omitted", &report.sparse_json)
            .observe("Document", report.document.trim_end());
        Ok(outcome)
    }

    fn name(&self) -> &'static str {
        LESSON_USER_TYPE
    }
}
