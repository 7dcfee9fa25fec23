//! CLI command implementations.

pub mod orders;
pub mod seed;
pub mod stats;

use std::path::PathBuf;

use calabash_store::JsonStore;

/// Open the shared JSON store, honoring `CALABASH_STORE_PATH`.
pub fn open_store() -> JsonStore {
    dotenvy::dotenv().ok();

    let path = std::env::var("CALABASH_STORE_PATH")
        .map_or_else(|_| PathBuf::from("data/store.json"), PathBuf::from);
    tracing::debug!(path = %path.display(), "Opening store");
    JsonStore::open(&path)
}
