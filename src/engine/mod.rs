pub mod runner;

pub use runner::{LessonResult, TourRunner, TourSummary};
