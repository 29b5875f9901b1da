//! Synchronous client core for the Sitoo REST API.
//!
//! # Overview
//! Resolves the regional API host from an account identifier, builds
//! Basic-authenticated JSON requests, sends them through a `Transport`, and
//! logs each attempt and outcome with `tracing`.
//!
//! # Design
//! - `SitooClient` is stateless. It builds `HttpRequest` values and parses
//!   `HttpResponse` values without touching the network.
//! - `Transport` is the I/O seam. `UreqTransport` is the default; tests inject
//!   fakes.
//! - `Dispatcher` ties the two together behind one `send` and thin
//!   per-verb wrappers. Every failure is an `ApiError` returned to the caller.

pub mod account;
pub mod auth;
pub mod client;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod http;
pub mod transport;

pub use account::{resolve_host_suffix, AccountId};
pub use auth::{basic_auth, Credentials};
pub use client::SitooClient;
pub use config::ClientConfig;
pub use dispatch::Dispatcher;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use transport::{Transport, UreqTransport};
