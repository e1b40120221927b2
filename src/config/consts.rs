/// Built-in syllabus: every lesson, in tour order.
pub const DEFAULT_SYLLABUS: &str = include_str!("../../syllabus/default.yaml");
/// Level used when `RUST_LOG` is not set
pub const DEFAULT_LOG_LEVEL: &str = "info";
/// Title used when a syllabus does not give one
pub const DEFAULT_TITLE: &str = "Rust Basics Tour";

pub const LESSON_VARIABLES: &str = "variables";
pub const LESSON_FUNCTIONS: &str = "functions";
pub const LESSON_USER_TYPE: &str = "user_type";
pub const LESSON_POINTERS: &str = "pointers";
pub const LESSON_MAPS: &str = "maps";
pub const LESSON_DECISIONS: &str = "decisions";
pub const LESSON_SLICES: &str = "slices";
pub const LESSON_LOOPS: &str = "loops";
pub const LESSON_TASKS: &str = "tasks";
