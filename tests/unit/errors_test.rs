use tabshell::types::errors::*;

// === TabError Tests ===

#[test]
fn tab_error_invalid_index_display() {
    let err = TabError::InvalidIndex(99);
    assert_eq!(err.to_string(), "Invalid tab index: 99");
}

#[test]
fn tab_error_implements_error_trait() {
    let err: Box<dyn std::error::Error> = Box::new(TabError::InvalidIndex(0));
    assert!(err.source().is_none());
}

// === SettingsError Tests ===

#[test]
fn settings_error_display_variants() {
    assert_eq!(
        SettingsError::IoError("disk full".to_string()).to_string(),
        "Settings I/O error: disk full"
    );
    assert_eq!(
        SettingsError::SerializationError("bad json".to_string()).to_string(),
        "Settings serialization error: bad json"
    );
}

#[test]
fn settings_error_implements_error_trait() {
    let err: Box<dyn std::error::Error> =
        Box::new(SettingsError::IoError("x".to_string()));
    assert!(err.source().is_none());
}
