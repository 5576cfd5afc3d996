//! Resolves which Google Identity client id a request should use.

use std::collections::HashMap;

/// Hostnames that fall back to [DEV_CLIENT_ID] when nothing else matches.
pub const DEV_HOSTNAMES: [&str; 3] = ["localhost", "127.0.0.1", "0.0.0.0"];

/// The client id used for local development hosts.
pub const DEV_CLIENT_ID: &str = "local-development.apps.googleusercontent.com";

/// How to pick a client id for the sign-in widget.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentityConfig {
    /// Used for every host when set.
    pub client_id: Option<String>,
    /// Lowercase hostname (without port) to client id.
    pub client_ids_by_host: HashMap<String, String>,
}

impl IdentityConfig {
    /// Create a config from an explicit client id and `host=id` pairs.
    ///
    /// Hostnames are lowercased. An empty explicit client id counts as unset.
    pub fn new(
        client_id: Option<String>,
        client_ids_by_host: impl IntoIterator<Item = (String, String)>,
    ) -> Self {
        Self {
            client_id: client_id.filter(|id| !id.trim().is_empty()),
            client_ids_by_host: client_ids_by_host
                .into_iter()
                .map(|(host, id)| (host.to_ascii_lowercase(), id))
                .collect(),
        }
    }

    /// Pick the client id for a request to `host`.
    ///
    /// In order: the explicit client id, the mapping for the hostname, the
    /// local development fallback, then `None`. `host` may include a port.
    pub fn resolve_client_id(&self, host: Option<&str>) -> Option<&str> {
        if let Some(client_id) = &self.client_id {
            return Some(client_id);
        }

        let hostname = strip_port(host?).to_ascii_lowercase();

        if let Some(client_id) = self.client_ids_by_host.get(&hostname) {
            return Some(client_id);
        }

        DEV_HOSTNAMES
            .contains(&hostname.as_str())
            .then_some(DEV_CLIENT_ID)
    }
}

fn strip_port(host: &str) -> &str {
    if let Some(rest) = host.strip_prefix('[') {
        // IPv6 literal, e.g. "[::1]:3000".
        return rest.split(']').next().unwrap_or(rest);
    }

    match host.rsplit_once(':') {
        Some((hostname, port)) if port.chars().all(|c| c.is_ascii_digit()) => hostname,
        _ => host,
    }
}

/// Parse a `host=client_id` command line value.
pub fn parse_host_mapping(value: &str) -> Result<(String, String), String> {
    let (host, client_id) = value
        .split_once('=')
        .ok_or_else(|| format!("expected HOST=CLIENT_ID, got \"{value}\""))?;
    let host = host.trim();
    let client_id = client_id.trim();

    if host.is_empty() || client_id.is_empty() {
        return Err(format!(
            "both the host and client id must be given, got \"{value}\""
        ));
    }

    Ok((host.to_owned(), client_id.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::{DEV_CLIENT_ID, IdentityConfig, parse_host_mapping};

    fn mapped_config() -> IdentityConfig {
        IdentityConfig::new(
            None,
            [("Budget.Example.com".to_owned(), "mapped-id".to_owned())],
        )
    }

    #[test]
    fn explicit_client_id_wins() {
        let config = IdentityConfig::new(
            Some("explicit-id".to_owned()),
            [("budget.example.com".to_owned(), "mapped-id".to_owned())],
        );

        assert_eq!(
            config.resolve_client_id(Some("budget.example.com")),
            Some("explicit-id")
        );
        assert_eq!(config.resolve_client_id(None), Some("explicit-id"));
    }

    #[test]
    fn mapping_ignores_case_and_port() {
        let config = mapped_config();

        assert_eq!(
            config.resolve_client_id(Some("BUDGET.example.com:8443")),
            Some("mapped-id")
        );
    }

    #[test]
    fn mapping_beats_dev_fallback() {
        let config = IdentityConfig::new(
            None,
            [("localhost".to_owned(), "my-local-id".to_owned())],
        );

        assert_eq!(
            config.resolve_client_id(Some("localhost:3000")),
            Some("my-local-id")
        );
    }

    #[test]
    fn dev_hosts_fall_back() {
        let config = mapped_config();

        for host in ["localhost:3000", "127.0.0.1", "0.0.0.0:80"] {
            assert_eq!(config.resolve_client_id(Some(host)), Some(DEV_CLIENT_ID));
        }
    }

    #[test]
    fn unknown_host_has_no_client_id() {
        let config = mapped_config();

        assert_eq!(config.resolve_client_id(Some("other.example.com")), None);
        assert_eq!(config.resolve_client_id(Some("[::1]:3000")), None);
        assert_eq!(config.resolve_client_id(None), None);
    }

    #[test]
    fn blank_explicit_client_id_is_ignored() {
        let config = IdentityConfig::new(Some("  ".to_owned()), []);

        assert_eq!(config.client_id, None);
    }

    #[test]
    fn parses_host_mappings() {
        assert_eq!(
            parse_host_mapping("budget.example.com=abc.apps.googleusercontent.com"),
            Ok((
                "budget.example.com".to_owned(),
                "abc.apps.googleusercontent.com".to_owned()
            ))
        );
        assert!(parse_host_mapping("budget.example.com").is_err());
        assert!(parse_host_mapping("=abc").is_err());
    }
}
