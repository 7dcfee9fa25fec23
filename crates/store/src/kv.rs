//! The store document and its load/commit primitives.
//!
//! The document holds the four storage keys: `products`, `cart`,
//! `orders`, `darkMode`. A missing store file loads as the empty
//! document, so a fresh install starts with nothing.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::records::{CartLine, Order, Product};

/// Errors from reading or writing the store file.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store file could not be read or written.
    #[error("store I/O error: {0}")]
    Io(#[from] io::Error),

    /// The store file exists but does not hold valid JSON.
    #[error("store data is not valid JSON: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// The full persisted state, one field per storage key.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreData {
    /// Product catalog, owned by the admin surface.
    #[serde(default)]
    pub products: Vec<Product>,

    /// Cart lines, owned by the storefront.
    #[serde(default)]
    pub cart: Vec<CartLine>,

    /// Append-only order log, written by checkout.
    #[serde(default)]
    pub orders: Vec<Order>,

    /// Dark-mode UI preference.
    #[serde(default, rename = "darkMode")]
    pub dark_mode: bool,
}

/// Handle to the JSON store file.
///
/// Opening does not touch the filesystem; every operation re-reads the
/// file so independent handles (and independent processes) observe each
/// other's committed writes, last write winning.
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    /// Create a handle for the store file at `path`.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing store file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the current document. A missing file is the empty document.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` for filesystem failures other than the
    /// file not existing, and `StoreError::Corrupt` for invalid JSON.
    pub fn load(&self) -> Result<StoreData, StoreError> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(StoreData::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Commit a document atomically (temp file + rename).
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the file cannot be written.
    pub fn commit(&self, data: &StoreData) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_vec_pretty(data)?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    /// Read-modify-write the document in one commit.
    ///
    /// # Errors
    ///
    /// Propagates `load`/`commit` errors; the closure itself is
    /// infallible.
    pub fn update<T>(&self, mutate: impl FnOnce(&mut StoreData) -> T) -> Result<T, StoreError> {
        let mut data = self.load()?;
        let out = mutate(&mut data);
        self.commit(&data)?;
        Ok(out)
    }
}
