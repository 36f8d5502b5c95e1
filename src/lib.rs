//! # admin-api-client
//!
//! Typed async HTTP client for the admin console backend.
//!
//! ## Overview
//!
//! The backend wraps every non-binary response in a uniform envelope
//! (`{code, message, data}`). This crate centralizes the one piece of real
//! logic behind all endpoint calls: a typed request dispatcher that
//! performs exactly one HTTP attempt per call, enforces the envelope
//! contract, and maps every failure into a classified [`Error`]. The
//! endpoint modules under [`api`] are thin typed facades over that
//! dispatcher.
//!
//! ## Core guarantees
//!
//! - **One attempt per call**: no retries, no backoff, no caching.
//!   Resilience policy belongs to callers ([`client::classify`] helps
//!   them decide).
//! - **Exhaustive classification**: every dispatch resolves to the
//!   payload or one of `Transport` / `HttpStatus` / `Business` / `Decode`.
//! - **No ambient state**: configuration is an explicit [`ClientConfig`];
//!   independently configured clients coexist freely.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use admin_api_client::{ApiClient, api::PageQuery};
//!
//! #[tokio::main]
//! async fn main() -> admin_api_client::Result<()> {
//!     let client = ApiClient::builder()
//!         .base_url("https://console.example.com")
//!         .bearer_token("secret")
//!         .build()?;
//!
//!     let page = client.users().page(&PageQuery::new().page(1).size(20)).await?;
//!     println!("{} users of {}", page.items().len(), page.total());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | The dispatcher, its builder, and status classification |
//! | [`config`] | Explicit client configuration |
//! | [`request`] | Request descriptors consumed by the dispatcher |
//! | [`envelope`] | Response envelope and paged payload shapes |
//! | [`api`] | Typed endpoint facades (users, posts, feedback, comments) |

pub mod api;
pub mod client;
pub mod config;
pub mod envelope;
pub mod request;

// Re-export main types for convenience
pub use client::{ApiClient, ApiClientBuilder};
pub use config::ClientConfig;
pub use envelope::{Envelope, PageData};
pub use request::{Method, RequestBody, RequestSpec, ResponseKind};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};
