//! Shared test utilities for the sea-selector workspace.
//!
//! A dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`fixtures`] - canned region and game config documents
//! - [`home`] - [`TestHome`] builder for an application home plus user folder

pub mod fixtures;
pub mod home;

pub use home::TestHome;
