//! Signed HTTP client for the Seewo open platform.
//!
//! Every outgoing request is stamped with the platform's `x-sw-*` headers
//! and an HMAC-MD5 signature computed over a canonicalized subset of headers
//! and query parameters. The signature must be bit-exact with what the
//! remote server derives, so the canonicalization rules in [`signature`] are
//! interop-critical.
//!
//! ## Quick Start
//!
//! ```no_run
//! use seewo::{Client, MisRemote};
//! use seewo_core::Context;
//! use seewo_http_send_reqwest::ReqwestHttpSend;
//!
//! #[tokio::main]
//! async fn main() -> seewo_core::Result<()> {
//!     // Create context with a reqwest transport.
//!     let ctx = Context::new().with_http_send(ReqwestHttpSend::default());
//!
//!     // Create the client. Construction fails on empty credentials.
//!     let client = Client::new(ctx, "your-app-id", "your-secret")?;
//!
//!     // Per-endpoint wrappers are thin consumers of get/post.
//!     let mis = MisRemote::new(client);
//!     let resp = mis.schools_by_province("440000").await?;
//!
//!     // Non-2xx statuses are returned, not raised.
//!     println!("status: {}", resp.status());
//!     Ok(())
//! }
//! ```
//!
//! ## Hosts
//!
//! Requests go to the production host by default. `Config::is_sandbox` (or
//! [`Client::with_sandbox`]) selects the sandbox host, and an explicit host
//! override always wins over both.
//!
//! ## Transports
//!
//! The client requires only the `HttpSend` capability from `seewo_core`.
//! `seewo-http-send-reqwest` provides the reqwest-backed implementation;
//! anything that can send an `http::Request<Bytes>` can be injected instead.

mod constants;

mod build;
pub use build::RequestBuilder;

mod client;
pub use client::Client;

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod sign;
pub use sign::signature;

mod mis_remote;
pub use mis_remote::MisRemote;

mod school_open;
pub use school_open::SchoolOpen;
