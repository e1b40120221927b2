pub mod lesson;

pub use lesson::{Lesson, LessonOutcome, LessonTopic, Observation};
