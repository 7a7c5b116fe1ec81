use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        TitleGridError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        TitleGridError::catalog("x")
            .to_string()
            .contains("catalog error:")
    );
    assert!(
        TitleGridError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn capacity_message_names_both_counts() {
    let msg = TitleGridError::CapacityExceeded {
        len: 41,
        capacity: 40,
    }
    .to_string();
    assert!(msg.contains("41"));
    assert!(msg.contains("40"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = TitleGridError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
