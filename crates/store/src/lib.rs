//! Calabash Store - JSON-backed collections and their repositories.
//!
//! All persistent state lives in one JSON document (the store file) with
//! four top-level collections: `products`, `cart`, `orders` and the
//! `darkMode` preference flag. Each collection is owned by a typed
//! repository; UI surfaces never touch the document directly.
//!
//! # Consistency model
//!
//! Every repository call is a read-modify-write of the whole document,
//! committed atomically by writing a temp file and renaming it over the
//! store file. Within a process that makes multi-collection updates (like
//! checkout's order-append + cart-clear) a single commit. Across
//! processes the store is last-write-wins with no merge; concurrent
//! writers race, and the later rename replaces the file wholesale.
//!
//! # Modules
//!
//! - [`kv`] - The store document and its load/commit primitives
//! - [`records`] - Entity schemas (products, cart lines, orders)
//! - [`catalog`] - Product CRUD and stock stats
//! - [`cart`] - Cart lines, quantity changes, badge count
//! - [`orders`] - Order log and the checkout contract
//! - [`prefs`] - The dark-mode preference flag
//! - [`summary`] - Order summary math (subtotal, tax, delivery, total)

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod kv;
pub mod orders;
pub mod prefs;
pub mod records;
pub mod summary;

pub use cart::{CartRepository, QuantityChange, total_quantity};
pub use catalog::{CatalogError, CatalogRepository, CatalogStats, DEFAULT_IMAGE};
pub use kv::{JsonStore, StoreData, StoreError};
pub use orders::{CheckoutError, OrderRepository};
pub use prefs::PreferencesRepository;
pub use records::{CartLine, Customer, Order, Product, ProductForm};
pub use summary::OrderSummary;
