//! Option resolution: raw input to a fully populated [`ConnectionConfig`].
//!
//! Each field resolves independently, explicit value first, fixed default
//! second. Host, port, client id, and pool treat falsy values (empty string,
//! `0`, `false`, `null`) as unset; the connect timeout is the one field where
//! only literal absence triggers the default, so an explicit `0` survives.

pub mod client_id;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::conn_url::parse_connection_url;
use crate::error::ConfigError;
use crate::options::{ConnectInput, ConnectOptions, TlsOptions};

/// Default host when none (or an empty string) is supplied.
pub const DEFAULT_HOST: &str = "localhost";
/// Default port when none (or `0`) is supplied.
pub const DEFAULT_PORT: u16 = 9999;
/// Default connect timeout; applies only when the field is absent.
pub const DEFAULT_CONNECT_TIMEOUT_MS: u64 = 10_000;

/// Resolved TLS settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TlsConfig {
    /// Require a valid server certificate. `true` unless the caller
    /// explicitly opted out.
    pub reject_unauthorized: bool,
    pub ca_file: Option<PathBuf>,
    pub cert_file: Option<PathBuf>,
    pub key_file: Option<PathBuf>,
}

impl From<TlsOptions> for TlsConfig {
    fn from(opts: TlsOptions) -> Self {
        Self {
            reject_unauthorized: opts.reject_unauthorized != Some(false),
            ca_file: opts.ca_file,
            cert_file: opts.cert_file,
            key_file: opts.key_file,
        }
    }
}

/// Fully resolved connection configuration, every field defined. Built once
/// at client startup and handed to the transport layer; no mutators are
/// provided.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionConfig {
    pub host: String,
    pub port: u16,
    /// Opaque client tag. `None` only when resolved via [`Self::resolve`]
    /// with no caller-supplied id.
    pub client_id: Option<String>,
    pub connect_timeout_ms: u64,
    /// Pass-through, no default.
    pub debug: Option<bool>,
    pub trace: bool,
    /// Opaque pooling settings; falsy inputs resolve to unset.
    pub pool: Option<serde_json::Value>,
    /// `None` means TLS off.
    pub ssl: Option<TlsConfig>,
}

impl ConnectionConfig {
    /// Resolves `input` without ever generating a client identifier; an
    /// absent `clientid` stays unset.
    ///
    /// URL inputs are parsed first, so this is the only failure path; an
    /// options mapping cannot fail.
    pub fn resolve(input: impl Into<ConnectInput>) -> Result<Self, ConfigError> {
        Ok(Self::from_options(into_options(input.into())?, false))
    }

    /// Resolves `input`, generating a random client identifier when the
    /// input carries none (see [`client_id::generate_client_id`]).
    ///
    /// An explicit `clientid` is kept as-is, so re-resolving an already
    /// resolved configuration does not change it.
    pub fn resolve_with_generated_id(input: impl Into<ConnectInput>) -> Result<Self, ConfigError> {
        Ok(Self::from_options(into_options(input.into())?, true))
    }

    fn from_options(opts: ConnectOptions, generate_id: bool) -> Self {
        // An empty-string id counts as absent, same as host.
        let client_id = match opts.clientid.filter(|id| !id.is_empty()) {
            Some(id) => Some(id),
            None if generate_id => {
                let id = client_id::generate_client_id();
                tracing::debug!(client_id = %id, "generated client id");
                Some(id)
            }
            None => None,
        };

        let ssl = opts.ssl.map(TlsConfig::from);
        if let Some(tls) = &ssl {
            tracing::debug!(
                reject_unauthorized = tls.reject_unauthorized,
                "tls enabled"
            );
        }

        Self {
            host: opts
                .host
                .filter(|h| !h.is_empty())
                .unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: opts.port.filter(|p| *p != 0).unwrap_or(DEFAULT_PORT),
            client_id,
            // Only absence triggers the default; an explicit 0 means
            // "no timeout".
            connect_timeout_ms: opts.connect_timeout_ms.unwrap_or(DEFAULT_CONNECT_TIMEOUT_MS),
            debug: opts.debug,
            trace: opts.trace != Some(false),
            pool: opts.pool.filter(|v| !pool_is_falsy(v)),
            ssl,
        }
    }
}

/// Falsy pool values (`null`, `false`, `0`, `""`) resolve to unset; any other
/// value passes through untouched.
fn pool_is_falsy(v: &serde_json::Value) -> bool {
    match v {
        serde_json::Value::Null => true,
        serde_json::Value::Bool(b) => !b,
        serde_json::Value::Number(n) => n.as_f64() == Some(0.0),
        serde_json::Value::String(s) => s.is_empty(),
        _ => false,
    }
}

fn into_options(input: ConnectInput) -> Result<ConnectOptions, ConfigError> {
    match input {
        ConnectInput::Url(url) => parse_connection_url(&url),
        ConnectInput::Options(opts) => Ok(opts),
    }
}

/// A resolved configuration converts back to an explicit options mapping,
/// so it can be fed through resolution again without drift.
impl From<ConnectionConfig> for ConnectOptions {
    fn from(cfg: ConnectionConfig) -> Self {
        Self {
            host: Some(cfg.host),
            port: Some(cfg.port),
            clientid: cfg.client_id,
            connect_timeout_ms: Some(cfg.connect_timeout_ms),
            debug: cfg.debug,
            trace: Some(cfg.trace),
            pool: cfg.pool,
            ssl: cfg.ssl.map(|tls| TlsOptions {
                reject_unauthorized: Some(tls.reject_unauthorized),
                ca_file: tls.ca_file,
                cert_file: tls.cert_file,
                key_file: tls.key_file,
            }),
        }
    }
}
