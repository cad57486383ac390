//! Server configuration from environment variables

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Default listen address.
const DEFAULT_ADDR: SocketAddr = SocketAddr::new(
    std::net::IpAddr::V4(std::net::Ipv4Addr::new(0, 0, 0, 0)),
    2001,
);

/// Runtime configuration, resolved once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the backing JSON file.
    pub events_file: PathBuf,
    /// Socket address the HTTP server binds to.
    pub bind_addr: SocketAddr,
    /// Directory served under `/gas_events/`.
    pub static_dir: PathBuf,
}

impl Config {
    /// Read configuration from the environment.
    ///
    /// - `GAS_EVENTS_FILE` - backing file (default `events.json` in the
    ///   current directory; relative paths are joined to it)
    /// - `GAS_EVENTS_ADDR` - listen address (default `0.0.0.0:2001`)
    /// - `GAS_EVENTS_STATIC_DIR` - static asset directory (default `static`)
    pub fn from_env() -> Self {
        let current_dir = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

        let events_file = match env::var("GAS_EVENTS_FILE") {
            Ok(path) => {
                let path = PathBuf::from(path);
                if path.is_absolute() {
                    path
                } else {
                    current_dir.join(path)
                }
            }
            Err(_) => current_dir.join("events.json"),
        };

        let bind_addr = match env::var("GAS_EVENTS_ADDR") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!(addr = %raw, "unparsable GAS_EVENTS_ADDR, using default");
                DEFAULT_ADDR
            }),
            Err(_) => DEFAULT_ADDR,
        };

        let static_dir = env::var("GAS_EVENTS_STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("static"));

        Self {
            events_file,
            bind_addr,
            static_dir,
        }
    }
}
