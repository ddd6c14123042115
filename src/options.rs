//! Raw connection input: the partial options mapping and the URL-or-options
//! entry union.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// TLS sub-options as supplied by the caller.
///
/// Only `reject_unauthorized` participates in resolution; the PEM paths are
/// forwarded untouched to the transport layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TlsOptions {
    /// Require a valid server certificate. Resolution forces this to `true`
    /// unless the caller explicitly set `false`.
    #[serde(default)]
    pub reject_unauthorized: Option<bool>,
    #[serde(default)]
    pub ca_file: Option<PathBuf>,
    #[serde(default)]
    pub cert_file: Option<PathBuf>,
    #[serde(default)]
    pub key_file: Option<PathBuf>,
}

/// Partial connection options. Every field is optional; the resolver fills in
/// the defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConnectOptions {
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default)]
    pub port: Option<u16>,
    /// Caller-chosen client identifier (an opaque tag for server-side
    /// logging). Whether an absent value gets generated depends on which
    /// resolver entry point is used.
    #[serde(default)]
    pub clientid: Option<String>,
    /// Connect timeout in milliseconds. An explicit `0` is honored; only a
    /// missing value falls back to the default.
    #[serde(default)]
    pub connect_timeout_ms: Option<u64>,
    #[serde(default)]
    pub debug: Option<bool>,
    /// Protocol trace flag. Resolves to `true` unless explicitly `false`.
    #[serde(default)]
    pub trace: Option<bool>,
    /// Opaque pooling settings, forwarded untouched to the pool layer.
    #[serde(default)]
    pub pool: Option<serde_json::Value>,
    /// TLS settings; absent means TLS off.
    #[serde(default)]
    pub ssl: Option<TlsOptions>,
}

/// Entry input for the resolver: a connection-URL string or an options
/// mapping. Converted once at the API boundary so downstream code never
/// type-sniffs.
#[derive(Debug, Clone)]
pub enum ConnectInput {
    Url(String),
    Options(ConnectOptions),
}

impl From<&str> for ConnectInput {
    fn from(url: &str) -> Self {
        ConnectInput::Url(url.to_string())
    }
}

impl From<String> for ConnectInput {
    fn from(url: String) -> Self {
        ConnectInput::Url(url)
    }
}

impl From<ConnectOptions> for ConnectInput {
    fn from(opts: ConnectOptions) -> Self {
        ConnectInput::Options(opts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_deserialize_all_fields_optional() {
        let opts: ConnectOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(opts, ConnectOptions::default());
    }

    #[test]
    fn options_deserialize_partial() {
        let opts: ConnectOptions = serde_json::from_str(
            r#"{
                "host": "db.example.com",
                "port": 4000,
                "trace": false,
                "pool": { "max": 8 }
            }"#,
        )
        .unwrap();
        assert_eq!(opts.host.as_deref(), Some("db.example.com"));
        assert_eq!(opts.port, Some(4000));
        assert_eq!(opts.trace, Some(false));
        assert_eq!(opts.pool.unwrap()["max"], 8);
        assert!(opts.clientid.is_none());
        assert!(opts.ssl.is_none());
    }

    #[test]
    fn options_deserialize_tls_sub_record() {
        let opts: ConnectOptions = serde_json::from_str(
            r#"{ "ssl": { "reject_unauthorized": false, "ca_file": "/etc/ssl/ca.pem" } }"#,
        )
        .unwrap();
        let tls = opts.ssl.unwrap();
        assert_eq!(tls.reject_unauthorized, Some(false));
        assert_eq!(tls.ca_file.as_deref(), Some(std::path::Path::new("/etc/ssl/ca.pem")));
        assert!(tls.cert_file.is_none());
    }

    #[test]
    fn input_conversions() {
        match ConnectInput::from("tcp://example.com:4000") {
            ConnectInput::Url(u) => assert_eq!(u, "tcp://example.com:4000"),
            other => panic!("expected Url, got {:?}", other),
        }
        match ConnectInput::from(ConnectOptions::default()) {
            ConnectInput::Options(o) => assert_eq!(o, ConnectOptions::default()),
            other => panic!("expected Options, got {:?}", other),
        }
    }
}
