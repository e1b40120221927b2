// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Fire-and-forget task launch.
//!
//! [`understand_tasks`] hands one future to the tokio runtime. The lesson
//! drops the returned `JoinHandle`, which detaches the task: nothing awaits
//! it, nothing synchronizes with it, and if the process exits first it may
//! never run at all.

use async_trait::async_trait;
use tokio::task::JoinHandle;

use crate::config::consts::LESSON_TASKS;
use crate::errors::LessonError;
use crate::observability::messages::lesson::{TaskFinished, TaskSpawned};
use crate::observability::messages::StructuredLog;
use crate::traits::{Lesson, LessonOutcome, LessonTopic};

const TASK_NAME: &str = "greeter";

#[derive(Debug, Clone, PartialEq)]
pub struct TaskReport {
    pub task: &'static str,
    pub greeting: String,
}

/// Spawn the task and hand back its handle. Must be called inside a tokio runtime.
pub fn understand_tasks() -> JoinHandle<TaskReport> {
    let handle = tokio::spawn(async move {
        let greeting = String::from("Hello from a spawned task");
        tracing::info!(task = TASK_NAME, "{}", greeting);
        TaskFinished { task: TASK_NAME }.log();
        TaskReport {
            task: TASK_NAME,
            greeting,
        }
    });

    TaskSpawned {
        task: TASK_NAME,
        detached: true,
    }
    .log();

    handle
}

#[derive(Debug, Default)]
pub struct TasksLesson;

impl TasksLesson {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Lesson for TasksLesson {
    async fn teach(&self) -> Result<LessonOutcome, LessonError> {
        // Dropping the handle detaches the task.
        drop(understand_tasks());

        let mut outcome = LessonOutcome::new();
        outcome
            .observe("Spawned task", TASK_NAME)
            .observe("Awaited", false);
        Ok(outcome)
    }

    fn name(&self) -> &'static str {
        LESSON_TASKS
    }

    fn topic(&self) -> LessonTopic {
        LessonTopic::Concurrency
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_spawned_task_completes_when_awaited() {
        let report = understand_tasks().await.unwrap();

        assert_eq!(report.task, "greeter");
        assert_eq!(report.greeting, "Hello from a spawned task");
    }

    #[tokio::test]
    async fn test_tasks_lesson_does_not_wait() {
        let lesson = TasksLesson::new();
        let outcome = lesson.teach().await.unwrap();

        assert_eq!(lesson.topic(), LessonTopic::Concurrency);
        assert_eq!(outcome.value_of("Awaited"), Some("false"));
    }
}
