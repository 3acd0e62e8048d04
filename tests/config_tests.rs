use std::collections::HashMap;
use std::time::Duration;

use sede_mcp_server::config::{ConfigError, ServerConfig};

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn defaults_match_fixed_endpoint() {
    let config = ServerConfig::from_lookup(lookup(&[])).unwrap();

    assert_eq!(config.status_url, "https://sede.olografix.org/status");
    assert_eq!(config.user_agent, "sede-mcp-server/1.0");
    assert_eq!(config.accept, "application/text");
    assert_eq!(config.request_timeout, Duration::from_secs(30));
}

#[test]
fn overrides_are_applied() {
    let config = ServerConfig::from_lookup(lookup(&[
        ("SEDE_STATUS_URL", "http://localhost:8080/status"),
        ("SEDE_REQUEST_TIMEOUT_SECS", "5"),
    ]))
    .unwrap();

    assert_eq!(config.status_url, "http://localhost:8080/status");
    assert_eq!(config.request_timeout, Duration::from_secs(5));
    assert_eq!(config.user_agent, "sede-mcp-server/1.0");
}

#[test]
fn invalid_timeout_is_rejected() {
    for bad in ["abc", "-1", "0", ""] {
        let err = ServerConfig::from_lookup(lookup(&[("SEDE_REQUEST_TIMEOUT_SECS", bad)]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTimeout), "{bad:?} should be rejected");
    }
}

#[test]
fn empty_url_is_rejected() {
    let err = ServerConfig::from_lookup(lookup(&[("SEDE_STATUS_URL", "  ")])).unwrap_err();
    assert!(matches!(err, ConfigError::EmptyStatusUrl));
}
