//! A small async WHOIS client.
//!
//! The client opens one TCP connection per query, sends the domain followed
//! by CRLF, and returns the raw text the server produced. Nothing is parsed
//! and no referral is followed; what the server sent is what the caller gets.
//!
//! ```no_run
//! use whoq::WhoisClient;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), whoq::error::Error> {
//! let client = WhoisClient::new();
//! let response = client.query("github.com").await?;
//! println!("{response}");
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod utils;

use std::future::Future;
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::{debug, instrument};

pub use crate::error::Error;
use crate::utils::check_query;

pub const DEFAULT_HOST: &str = "whois.internic.net";
pub const DEFAULT_PORT: u16 = 43;

/// Options accepted by [`WhoisClient::with_options`].
///
/// Every field is optional; unset fields fall back to the defaults
/// ([`DEFAULT_HOST`], [`DEFAULT_PORT`], no timeout).
#[derive(Debug, Clone, Default)]
pub struct WhoisOptions {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub timeout: Option<Duration>,
}

/// The resolved configuration a client runs with. Immutable once built.
#[derive(Debug, Clone)]
struct ClientConfig {
    host: String,
    port: u16,
    timeout: Option<Duration>,
}

/// Merges caller options over the defaults. An explicit option always wins.
fn merge_options(options: WhoisOptions) -> ClientConfig {
    ClientConfig {
        host: options.host.unwrap_or_else(|| DEFAULT_HOST.to_owned()),
        port: options.port.unwrap_or(DEFAULT_PORT),
        timeout: options.timeout,
    }
}

/// A WHOIS client bound to one server target.
///
/// The client holds no cross-query state: every [`WhoisClient::query`] call
/// opens its own connection, so concurrent queries on a shared client need
/// no coordination.
#[derive(Debug, Clone)]
pub struct WhoisClient {
    config: ClientConfig,
}

impl Default for WhoisClient {
    fn default() -> Self {
        Self::new()
    }
}

impl WhoisClient {
    /// Creates a client targeting `whois.internic.net:43` with no timeout.
    pub fn new() -> Self {
        Self::with_options(WhoisOptions::default())
    }

    /// Creates a client from explicit options merged over the defaults.
    pub fn with_options(options: WhoisOptions) -> Self {
        Self {
            config: merge_options(options),
        }
    }

    pub fn host(&self) -> &str {
        &self.config.host
    }

    pub fn port(&self) -> u16 {
        self.config.port
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.config.timeout
    }

    /// Sends `domain` to the configured server and returns the raw response.
    ///
    /// The domain is sent verbatim after a minimal check (non-empty, no
    /// embedded CR or LF); see [`utils::check_query`]. The response is
    /// buffered until the server closes the connection and delivered exactly
    /// once, reassembled in order — a response split across packets arrives
    /// as one string. A server that closes without sending anything yields
    /// `Ok("")`.
    ///
    /// If the client was built with a timeout, it caps the connect, the
    /// request write, and each read; a deadline that elapses with no
    /// progress fails the call with [`Error::Timeout`] and tears the
    /// connection down.
    #[instrument(skip(self), fields(host = %self.config.host, port = self.config.port))]
    pub async fn query(&self, domain: &str) -> Result<String, Error> {
        check_query(domain)?;

        let mut stream = self
            .bounded(TcpStream::connect((self.config.host.as_str(), self.config.port)))
            .await?
            .map_err(Error::Connect)?;
        debug!("connected");

        let request = format!("{domain}\r\n");
        self.bounded(stream.write_all(request.as_bytes()))
            .await?
            .map_err(Error::Stream)?;

        let mut raw = Vec::new();
        let mut buf = [0u8; 4096];
        loop {
            let n = self
                .bounded(stream.read(&mut buf))
                .await?
                .map_err(Error::Stream)?;
            if n == 0 {
                break;
            }
            raw.extend_from_slice(&buf[..n]);
        }
        debug!(bytes = raw.len(), "response complete");

        Ok(decode_response(raw))
    }

    /// Runs one I/O step under the configured timeout, if any.
    async fn bounded<T>(
        &self,
        op: impl Future<Output = std::io::Result<T>>,
    ) -> Result<std::io::Result<T>, Error> {
        match self.config.timeout {
            Some(limit) => timeout(limit, op).await.map_err(|_| Error::Timeout(limit)),
            None => Ok(op.await),
        }
    }
}

/// Decodes a response as UTF-8, falling back to Latin-1 for servers that
/// still emit legacy 8-bit text. Both paths preserve byte order.
fn decode_response(raw: Vec<u8>) -> String {
    match String::from_utf8(raw) {
        Ok(text) => text,
        Err(err) => err.into_bytes().iter().map(|&b| b as char).collect(),
    }
}
