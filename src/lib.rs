//! Connection-configuration resolution.
//!
//! Takes a connection-URL string (`tcp://host:port?...` or `tls://...`) or a
//! partial [`options::ConnectOptions`] mapping and produces a fully populated
//! [`resolve::ConnectionConfig`] with fixed defaults applied. Connection
//! establishment, pooling, and the TLS handshake are the transport layer's
//! job; this crate only shapes their configuration.

pub mod conn_url;
pub mod error;
pub mod logging;
pub mod options;
pub mod resolve;

pub use conn_url::parse_connection_url;
pub use error::ConfigError;
pub use options::{ConnectInput, ConnectOptions, TlsOptions};
pub use resolve::client_id::generate_client_id;
pub use resolve::{ConnectionConfig, TlsConfig};
