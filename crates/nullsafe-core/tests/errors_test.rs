//! Tests for the error handling system.

use std::collections::HashSet;
use std::path::PathBuf;

use nullsafe_core::errors::error_code;
use nullsafe_core::errors::*;

fn sample_errors() -> Vec<PipelineError> {
    vec![
        ScanError::RootNotFound {
            path: PathBuf::from("/missing"),
        }
        .into(),
        ParseError::Grammar {
            message: "version mismatch".into(),
        }
        .into(),
        ParseError::InvalidUtf8 {
            path: PathBuf::from("Bad.java"),
        }
        .into(),
        ProviderError::TypeNotFound {
            qualified_name: "a.Gone".into(),
        }
        .into(),
        ProviderError::NotAClass {
            qualified_name: "a.Kind".into(),
            kind: "interface".into(),
        }
        .into(),
        EmitError::Rejected {
            class_name: "NullSafeFoo".into(),
            message: "read-only".into(),
        }
        .into(),
        ConfigError::FileNotFound {
            path: "/tmp/nullsafe.toml".into(),
        }
        .into(),
    ]
}

#[test]
fn test_pipeline_error_delegates_error_code() {
    let codes: Vec<&str> = sample_errors().iter().map(|e| e.error_code()).collect();
    assert_eq!(
        codes,
        [
            error_code::SCAN_ERROR,
            error_code::GRAMMAR_ERROR,
            error_code::PARSE_ERROR,
            error_code::TYPE_NOT_FOUND,
            error_code::NOT_A_CLASS,
            error_code::EMIT_ERROR,
            error_code::CONFIG_ERROR,
        ]
    );
    let unique: HashSet<&str> = codes.into_iter().collect();
    assert_eq!(unique.len(), 7);
}

#[test]
fn test_display_human_readable() {
    for error in sample_errors() {
        let msg = error.to_string();
        assert!(!msg.contains("{ "), "Debug leak in: {msg}");
        assert!(!msg.is_empty());
    }
}

#[test]
fn test_coded_string_format() {
    let err = ProviderError::TypeNotFound {
        qualified_name: "a.Gone".into(),
    };
    assert_eq!(
        err.coded_string(),
        "[TYPE_NOT_FOUND] No declaration found for marked type a.Gone"
    );
}

#[test]
fn test_emit_error_names_the_class() {
    let err = EmitError::Io {
        class_name: "NullSafeFoo".into(),
        path: PathBuf::from("/ro/NullSafeFoo.java"),
        source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    };
    assert_eq!(err.class_name(), "NullSafeFoo");
    assert!(err.to_string().contains("NullSafeFoo"));

    use std::error::Error;
    assert!(err.source().unwrap().to_string().contains("denied"));
}

#[test]
fn test_pipeline_result_accumulates_errors() {
    let mut result = PipelineResult::<Vec<String>>::new(vec!["NullSafeFoo".into()]);
    assert!(result.is_clean());

    result.add_error(ProviderError::TypeNotFound {
        qualified_name: "a.Gone".into(),
    });
    result.add_error(EmitError::Rejected {
        class_name: "NullSafeBar".into(),
        message: "exists".into(),
    });

    assert!(!result.is_clean());
    assert_eq!(result.error_count(), 2);
    assert_eq!(result.data, ["NullSafeFoo"]);
}
