//! Core components for signing Seewo open platform requests.
//!
//! This crate provides the foundational types for the seewo client:
//!
//! - **Context**: a container that holds implementations for HTTP sending
//!   and environment access
//! - **SigningRequest**: a decomposed view of an outgoing request that the
//!   signer canonicalizes and applies back
//! - **Error**: the structured error type shared by the whole workspace
//!
//! ## Example
//!
//! ```no_run
//! use seewo_core::{Context, OsEnv};
//!
//! // Create a context with explicit implementations.
//! let ctx = Context::new().with_env(OsEnv);
//! ```
//!
//! ## Traits
//!
//! - [`HttpSend`]: for dispatching HTTP requests
//! - [`Env`]: for environment variable access
//!
//! ## Utilities
//!
//! - [`hash`]: MD5 and HMAC-MD5 helpers
//! - [`time`]: wall-clock helpers for millisecond timestamps
//! - [`utils`]: data redaction for credentials

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod context;
pub use context::{Context, Env, HttpSend, NoopEnv, NoopHttpSend, OsEnv, StaticEnv};

mod error;
pub use error::{Error, ErrorKind, Result};

mod request;
pub use request::SigningRequest;
