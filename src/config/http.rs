//! HTTP API server configuration

use serde::{Deserialize, Serialize};

fn default_listen_addr() -> String {
    "127.0.0.1:5173".to_string()
}

/// HTTP API server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Listen address for HTTP server (e.g., "0.0.0.0:8080")
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
    /// Public base origin for share links (e.g., "https://notes.example.com").
    /// When unset, share links are built from the request's Host header.
    #[serde(default)]
    pub public_url: Option<String>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            public_url: None,
        }
    }
}

impl HttpConfig {
    /// Replace the port of `listen_addr`, keeping the host part
    pub fn set_port(&mut self, port: u16) {
        let host = match self.listen_addr.rsplit_once(':') {
            Some((host, _)) if !host.is_empty() => host.to_string(),
            _ => "0.0.0.0".to_string(),
        };
        self.listen_addr = format!("{}:{}", host, port);
    }
}
