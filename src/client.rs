//! Typed request dispatcher for the admin console backend.
//!
//! Developer-friendly goal: keep the public surface small and predictable.
//! Implementation details are split into submodules under `src/client/`.

pub mod builder;
pub mod classify;
pub mod core;

pub use builder::ApiClientBuilder;
pub use core::ApiClient;
