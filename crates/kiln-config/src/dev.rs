//! Development server descriptor.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DevServer {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Open a browser once the server is up.
    #[serde(default = "default_open")]
    pub open: bool,

    /// Hot module replacement.
    #[serde(default = "default_hot")]
    pub hot: bool,
}

impl Default for DevServer {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            open: default_open(),
            hot: default_hot(),
        }
    }
}

impl DevServer {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn default_host() -> String {
    "localhost".into()
}

fn default_port() -> u16 {
    3000
}

fn default_open() -> bool {
    true
}

fn default_hot() -> bool {
    true
}
