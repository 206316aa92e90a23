use crate::redirect::query::{append_passthrough, first_value, is_control_key};
use pretty_assertions::assert_eq;
use url::Url;

fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
    raw.iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn recognizes_every_control_key() {
    for key in ["target", "status", "head_redirect", "await_params"] {
        assert!(is_control_key(key), "expected `{key}` to be a control key");
    }
}

#[test]
fn control_keys_are_case_sensitive() {
    assert!(!is_control_key("Target"));
    assert!(!is_control_key("STATUS"));
    assert!(!is_control_key("targets"));
}

#[test]
fn first_value_returns_first_of_duplicates() {
    // Arrange
    let pairs = pairs(&[("status", "301"), ("status", "307")]);

    // Act + Assert
    assert_eq!(first_value(&pairs, "status"), Some("301"));
    assert_eq!(first_value(&pairs, "target"), None);
}

#[test]
fn no_passthrough_leaves_target_untouched() {
    // Arrange
    let mut target = Url::parse("https://example.com/path").unwrap();
    let pairs = pairs(&[("target", "ignored"), ("status", "301")]);

    // Act
    let has_passthrough = append_passthrough(&mut target, &pairs);

    // Assert
    assert!(!has_passthrough);
    assert_eq!(target.as_str(), "https://example.com/path");
    assert_eq!(target.query(), None);
}

#[test]
fn appends_passthrough_in_inbound_order() {
    // Arrange
    let mut target = Url::parse("https://example.com/path").unwrap();
    let pairs = pairs(&[
        ("campaign", "summer"),
        ("target", "ignored"),
        ("click_id", "abc123"),
    ]);

    // Act
    let has_passthrough = append_passthrough(&mut target, &pairs);

    // Assert
    assert!(has_passthrough);
    assert_eq!(
        target.as_str(),
        "https://example.com/path?campaign=summer&click_id=abc123"
    );
}

#[test]
fn preserves_existing_target_query_and_accumulates_duplicates() {
    // Arrange
    let mut target = Url::parse("https://example.com/path?source=web").unwrap();
    let pairs = pairs(&[("source", "app")]);

    // Act
    append_passthrough(&mut target, &pairs);

    // Assert
    assert_eq!(
        target.as_str(),
        "https://example.com/path?source=web&source=app"
    );
}

#[test]
fn passthrough_values_are_form_encoded() {
    // Arrange
    let mut target = Url::parse("https://example.com/").unwrap();
    let pairs = pairs(&[("q", "two words")]);

    // Act
    append_passthrough(&mut target, &pairs);

    // Assert
    assert_eq!(target.as_str(), "https://example.com/?q=two+words");
}
