//! Plugin configuration.
//!
//! Two knobs, read once at registration and never again:
//!
//! ```json
//! { "method": "append", "verbose": true }
//! ```
//!
//! `method` selects the [`Mode`]; any other value fails deserialization, and
//! the server must not start. `verbose` only raises the log level of
//! per-request decision diagnostics from `debug` to `info`.

use serde::Deserialize;

use crate::normalize::Mode;

/// Registration-time options for the trailing-slash middleware.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct Config {
    /// `append` or `remove`.
    pub method: Mode,
    /// Log redirect decisions at `info` instead of `debug`.
    #[serde(default)]
    pub verbose: bool,
}

impl Config {
    pub fn new(method: Mode) -> Self {
        Self { method, verbose: false }
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}
