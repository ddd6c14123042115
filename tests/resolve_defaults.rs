//! End-to-end resolution through the public API: URL form and options form.

use std::sync::Once;

use conncfg::{ConnectOptions, ConnectionConfig, TlsOptions};

static LOGGING: Once = Once::new();

/// Installs the stderr subscriber once for the whole test binary, so
/// resolution debug events show up under RUST_LOG.
fn init_logging() {
    LOGGING.call_once(conncfg::logging::init_logging_stderr);
}

#[test]
fn defaults_from_empty_options() {
    init_logging();
    let cfg = ConnectionConfig::resolve(ConnectOptions::default()).unwrap();
    assert_eq!(cfg.host, "localhost");
    assert_eq!(cfg.port, 9999);
    assert_eq!(cfg.connect_timeout_ms, 10_000);
    assert!(cfg.trace);
    assert!(cfg.ssl.is_none());
    assert!(cfg.client_id.is_none());
}

#[test]
fn generated_client_id_shape() {
    init_logging();
    let cfg = ConnectionConfig::resolve_with_generated_id(ConnectOptions::default()).unwrap();
    let id = cfg.client_id.unwrap();
    assert!(id.starts_with("NJS"));
    assert_eq!(id.len(), 8);
    let v: u32 = id["NJS".len()..].parse().unwrap();
    assert!((1..=99_999).contains(&v));
}

#[test]
fn url_end_to_end() -> anyhow::Result<()> {
    let cfg = ConnectionConfig::resolve(
        "tls://db.example.com:4000?clientid=app1&connect_timeout_ms=0&trace=false",
    )?;
    assert_eq!(cfg.host, "db.example.com");
    assert_eq!(cfg.port, 4000);
    assert_eq!(cfg.client_id.as_deref(), Some("app1"));
    assert_eq!(cfg.connect_timeout_ms, 0);
    assert!(!cfg.trace);
    assert!(cfg.ssl.unwrap().reject_unauthorized);
    Ok(())
}

#[test]
fn url_with_tls_opt_out() {
    let cfg = ConnectionConfig::resolve("tls://db.example.com:4000?reject_unauthorized=false")
        .unwrap();
    assert!(!cfg.ssl.unwrap().reject_unauthorized);
}

#[test]
fn resolved_config_survives_re_resolution() {
    let first = ConnectionConfig::resolve_with_generated_id("tls://db.example.com:4000").unwrap();
    let again =
        ConnectionConfig::resolve_with_generated_id(ConnectOptions::from(first.clone())).unwrap();
    assert_eq!(again, first);
}

#[test]
fn config_serializes_with_every_field_present() {
    let cfg = ConnectionConfig::resolve(ConnectOptions {
        ssl: Some(TlsOptions::default()),
        ..ConnectOptions::default()
    })
    .unwrap();
    let json = serde_json::to_value(&cfg).unwrap();
    for key in [
        "host",
        "port",
        "client_id",
        "connect_timeout_ms",
        "debug",
        "trace",
        "pool",
        "ssl",
    ] {
        assert!(json.get(key).is_some(), "missing field {}", key);
    }
    assert_eq!(json["ssl"]["reject_unauthorized"], true);
}
