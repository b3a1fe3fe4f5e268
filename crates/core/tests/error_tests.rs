// ═══════════════════════════════════════════════════════════════════
// Error Tests — CoreError variants, Display formatting, From impls
// ═══════════════════════════════════════════════════════════════════

use fuel_tracker_core::errors::CoreError;

// ── Display formatting ──────────────────────────────────────────────

mod display {
    use super::*;

    #[test]
    fn invalid_file_format() {
        let err = CoreError::InvalidFileFormat("bad envelope".into());
        assert_eq!(err.to_string(), "Invalid snapshot format: bad envelope");
    }

    #[test]
    fn unsupported_version() {
        let err = CoreError::UnsupportedVersion(99);
        assert_eq!(err.to_string(), "Unsupported snapshot version: 99");
    }

    #[test]
    fn unsupported_version_max() {
        let err = CoreError::UnsupportedVersion(u16::MAX);
        assert_eq!(
            err.to_string(),
            format!("Unsupported snapshot version: {}", u16::MAX)
        );
    }

    #[test]
    fn serialization() {
        let err = CoreError::Serialization("buffer overflow".into());
        assert_eq!(err.to_string(), "Serialization error: buffer overflow");
    }

    #[test]
    fn deserialization() {
        let err = CoreError::Deserialization("unexpected EOF".into());
        assert_eq!(err.to_string(), "Deserialization error: unexpected EOF");
    }

    #[test]
    fn file_io() {
        let err = CoreError::FileIO("permission denied".into());
        assert_eq!(err.to_string(), "File I/O error: permission denied");
    }

    #[test]
    fn validation_error() {
        let err = CoreError::ValidationError("fuel amount must not be negative".into());
        assert_eq!(
            err.to_string(),
            "Record validation failed: fuel amount must not be negative"
        );
    }

    #[test]
    fn record_not_found() {
        let err = CoreError::RecordNotFound("abc-123".into());
        assert_eq!(err.to_string(), "Record not found: abc-123");
    }
}

// ── From impls ──────────────────────────────────────────────────────

mod conversions {
    use super::*;

    #[test]
    fn from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: CoreError = io.into();
        match err {
            CoreError::FileIO(msg) => assert!(msg.contains("denied")),
            other => panic!("Expected FileIO, got {:?}", other),
        }
    }

    #[test]
    fn from_serde_json_error() {
        let json_err = serde_json::from_str::<Vec<i32>>("not json").unwrap_err();
        let err: CoreError = json_err.into();
        match err {
            CoreError::Deserialization(_) => {}
            other => panic!("Expected Deserialization, got {:?}", other),
        }
    }

    #[test]
    fn implements_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        assert_error(&CoreError::RecordNotFound("x".into()));
    }

    #[test]
    fn debug_format_names_variant() {
        let err = CoreError::UnsupportedVersion(2);
        assert!(format!("{:?}", err).contains("UnsupportedVersion"));
    }
}
