//! Calabash Core - Shared types library.
//!
//! This crate provides common types used across all Calabash Market
//! components:
//! - `store` - JSON-backed collections and their repositories
//! - `storefront` - Public-facing shop site
//! - `admin` - Catalog administration panel
//! - `cli` - Command-line tools for seeding and inspection
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no HTTP.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, money helpers, and statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
