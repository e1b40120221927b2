#[cfg(test)]
mod integration_tests {
    use crate::config::consts::DEFAULT_SYLLABUS;
    use crate::config::{build_lessons, load_and_validate_syllabus, LessonFactory};
    use crate::errors::{ConfigError, ValidationError};
    use std::io::Write;

    /// Test that the shipped syllabus files load and validate
    #[test]
    fn test_references_syllabus_yaml_loading() {
        let syllabus = load_and_validate_syllabus("syllabus/references-and-slices.yaml").unwrap();

        assert_eq!(syllabus.title, "References and Slices");
        assert_eq!(syllabus.lessons.len(), 3);
        assert_eq!(syllabus.lessons[0].id, "pointers");
        assert!(!syllabus.lessons[2].enabled);
    }

    /// The default syllabus runs every lesson exactly once, in tour order
    #[test]
    fn test_default_syllabus_matches_registry() {
        let syllabus = load_and_validate_syllabus("syllabus/default.yaml").unwrap();
        let ids: Vec<&str> = syllabus.lessons.iter().map(|l| l.id.as_str()).collect();

        assert_eq!(ids, LessonFactory::list_available_lessons());
        assert_eq!(
            std::fs::read_to_string("syllabus/default.yaml").unwrap(),
            DEFAULT_SYLLABUS
        );
    }

    #[test]
    fn test_build_lessons_from_yaml() {
        let syllabus = load_and_validate_syllabus("syllabus/references-and-slices.yaml").unwrap();
        let lessons = build_lessons(&syllabus).unwrap();

        assert_eq!(lessons.len(), 2);
        assert_eq!(lessons[0].name(), "pointers");
        assert_eq!(lessons[1].name(), "slices");
    }

    #[test]
    fn test_invalid_syllabus_file_reports_all_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "lessons:\n  - id: loops\n  - id: traits\n  - id: loops"
        )
        .unwrap();

        match load_and_validate_syllabus(file.path()) {
            Err(ConfigError::Invalid(errors)) => {
                assert_eq!(errors.len(), 2);
                assert!(errors.contains(&ValidationError::UnknownLesson {
                    lesson_id: "traits".to_string()
                }));
                assert!(errors.contains(&ValidationError::DuplicateLesson {
                    lesson_id: "loops".to_string()
                }));
            }
            other => panic!("Expected validation failure, got {:?}", other),
        }
    }

    #[test]
    fn test_syllabus_with_nothing_enabled_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "lessons:\n  - id: loops\n    enabled: false").unwrap();

        match load_and_validate_syllabus(file.path()) {
            Err(ConfigError::Invalid(errors)) => {
                assert_eq!(errors, vec![ValidationError::EmptySyllabus]);
            }
            other => panic!("Expected validation failure, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_yaml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "lessons: [unterminated").unwrap();

        assert!(matches!(
            load_and_validate_syllabus(file.path()),
            Err(ConfigError::Parse(_))
        ));
    }
}
