use crate::conf::{ConfigError, parse_host_list, parse_port};
use pretty_assertions::assert_eq;

//-----------------------------------------------------------------------------
// Port parsing
//-----------------------------------------------------------------------------
#[test]
fn parses_plain_port() {
    assert_eq!(parse_port("3000"), Ok(3000));
}

#[test]
fn trims_whitespace_around_port() {
    assert_eq!(parse_port(" 8080 "), Ok(8080));
}

#[test]
fn rejects_zero_port() {
    assert_eq!(
        parse_port("0"),
        Err(ConfigError::InvalidPort {
            value: "0".to_owned()
        })
    );
}

#[test]
fn rejects_non_numeric_port() {
    assert_eq!(
        parse_port("http"),
        Err(ConfigError::InvalidPort {
            value: "http".to_owned()
        })
    );
}

#[test]
fn rejects_negative_port() {
    assert!(parse_port("-80").is_err());
}

//-----------------------------------------------------------------------------
// Host list parsing
//-----------------------------------------------------------------------------
#[test]
fn missing_host_list_is_empty() {
    assert_eq!(parse_host_list(None), Vec::<String>::new());
}

#[test]
fn empty_host_list_is_empty() {
    assert_eq!(parse_host_list(Some("")), Vec::<String>::new());
}

#[test]
fn splits_trims_and_lowercases_hosts() {
    // Arrange
    let raw = " Example.com ,API.example.com,, shop.example.com ";

    // Act
    let hosts = parse_host_list(Some(raw));

    // Assert
    assert_eq!(
        hosts,
        vec!["example.com", "api.example.com", "shop.example.com"]
    );
}
