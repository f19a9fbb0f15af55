//! HTTP transport for `tables-pro`.
//!
//! [`HttpRemote`] implements [`tables_pro::Remote`] with `reqwest`. Requests
//! carry the htmx request headers the server routes fragments on, and
//! response headers are mapped back to [`tables_pro::Outcome`]s.
//!
//! # Example
//!
//! ```ignore
//! use tables_pro_http::{HttpRemote, HttpRemoteConfig};
//!
//! let config = HttpRemoteConfig::new().timeout(Duration::from_secs(10));
//! let (remote, mut responses) = HttpRemote::new(config, tokio::runtime::Handle::current())?;
//! let mut page = Page::new(doc, PageConfig::default(), remote, navigator);
//! page.load()?;
//!
//! while let Some(response) = responses.recv().await {
//!     page.apply_response(response);
//! }
//! ```

mod config;
mod error;
pub mod headers;
mod remote;

pub use config::HttpRemoteConfig;
pub use error::HttpError;
pub use remote::HttpRemote;
