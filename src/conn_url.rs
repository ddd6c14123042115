//! Connection-URL parsing.
//!
//! Maps `tcp://host:port?...` and `tls://host:port?...` onto
//! [`ConnectOptions`]. Missing host or port are left unset so the resolver
//! applies its defaults; unknown query keys are ignored.

use std::str::FromStr;

use crate::error::ConfigError;
use crate::options::{ConnectOptions, TlsOptions};

/// Parses a connection URL into an equivalent partial options mapping.
///
/// Recognized query parameters: `clientid`, `connect_timeout_ms`, `debug`,
/// `trace`, and `reject_unauthorized` (the last only has an effect with the
/// `tls` scheme; without TLS it is dropped like an unknown key).
pub fn parse_connection_url(input: &str) -> Result<ConnectOptions, ConfigError> {
    let parsed = url::Url::parse(input)?;

    let tls = match parsed.scheme() {
        "tcp" => false,
        "tls" => true,
        other => {
            return Err(ConfigError::UnsupportedScheme {
                scheme: other.to_string(),
            })
        }
    };

    let mut opts = ConnectOptions {
        host: parsed.host_str().map(str::to_string),
        port: parsed.port(),
        ssl: if tls { Some(TlsOptions::default()) } else { None },
        ..ConnectOptions::default()
    };

    for (key, value) in parsed.query_pairs() {
        match key.as_ref() {
            "clientid" => opts.clientid = Some(value.into_owned()),
            "connect_timeout_ms" => {
                opts.connect_timeout_ms = Some(parse_param("connect_timeout_ms", &value)?)
            }
            "debug" => opts.debug = Some(parse_param("debug", &value)?),
            "trace" => opts.trace = Some(parse_param("trace", &value)?),
            "reject_unauthorized" => {
                let v: bool = parse_param("reject_unauthorized", &value)?;
                if let Some(tls_opts) = opts.ssl.as_mut() {
                    tls_opts.reject_unauthorized = Some(v);
                }
            }
            _ => {}
        }
    }

    Ok(opts)
}

fn parse_param<T: FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidParam {
        key,
        value: value.to_string(),
    })
}
