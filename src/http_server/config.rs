use std::net::SocketAddr;

use url::Url;

#[derive(Debug, Clone)]
pub struct Config {
    // Listen address
    pub listen_addr: SocketAddr,
    // Host name used for generated download URLs when the request
    //  carries no Host header
    pub hostname: Url,
    // log level for http tracing
    pub log_level: tracing::Level,
}

impl Config {
    pub fn new(listen_addr: SocketAddr) -> Self {
        let hostname = Url::parse(&format!("http://localhost:{}", listen_addr.port()))
            .expect("localhost URL must parse");
        Self {
            listen_addr,
            hostname,
            log_level: tracing::Level::INFO,
        }
    }
}

#[allow(dead_code)]
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("Invalid Socket Address: {0}")]
    ListenAddr(#[from] std::net::AddrParseError),
}
