use shroud_core::errors::*;

#[test]
fn recognizer_unavailable_carries_name_and_reason() {
    let err = RecognizerError::Unavailable {
        name: "gliner-pii".into(),
        reason: "weights missing".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("gliner-pii"));
    assert!(msg.contains("weights missing"));
}

#[test]
fn eval_bundle_not_found_carries_path() {
    let err = EvalError::BundleNotFound {
        path: "/tmp/tests.json".into(),
    };
    assert!(err.to_string().contains("/tmp/tests.json"));
}

// --- From impls ---

#[test]
fn recognizer_error_converts_to_shroud_error() {
    let err: ShroudError = RecognizerError::DetectionFailed {
        reason: "timeout".into(),
    }
    .into();
    assert!(matches!(err, ShroudError::RecognizerError(_)));
}

#[test]
fn eval_error_converts_to_shroud_error() {
    let err: ShroudError = EvalError::MalformedBundle {
        path: "b.json".into(),
        reason: "no tests".into(),
    }
    .into();
    assert!(matches!(err, ShroudError::EvalError(_)));
}

#[test]
fn serialization_error_converts_to_shroud_error() {
    let json_err = serde_json::from_str::<String>("not valid json").unwrap_err();
    let err: ShroudError = json_err.into();
    assert!(matches!(err, ShroudError::SerializationError(_)));
}

#[test]
fn io_error_converts_to_shroud_error() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    let err: ShroudError = io_err.into();
    assert!(matches!(err, ShroudError::IoError(_)));
}
