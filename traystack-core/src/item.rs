//! Item - A single tray in the storage unit
//!
//! TigerStyle: Immutable value, explicit fields, preconditions asserted.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::constants::{DATE_FORMAT, DATE_TIME_FORMAT};

// =============================================================================
// Item
// =============================================================================

/// A perishable food tray.
///
/// Fields are private: once placed, an item never changes. The rendering
/// produced by [`std::fmt::Display`] is for people only and is never used to
/// compare items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ItemRecord")]
pub struct Item {
    name: String,
    weight_grams: u32,
    best_before: NaiveDate,
    placed_at: NaiveDateTime,
}

impl Item {
    /// Create a new item.
    ///
    /// # Panics
    /// Panics if `name` is empty or `weight_grams` is zero. Drivers validate
    /// user input before calling this.
    #[must_use]
    pub fn new(
        name: String,
        weight_grams: u32,
        best_before: NaiveDate,
        placed_at: NaiveDateTime,
    ) -> Self {
        // Preconditions
        assert!(!name.is_empty(), "name must not be empty");
        assert!(weight_grams > 0, "weight_grams must be positive");

        Self {
            name,
            weight_grams,
            best_before,
            placed_at,
        }
    }

    /// Display name as entered.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Weight in grams.
    #[must_use]
    pub fn weight_grams(&self) -> u32 {
        self.weight_grams
    }

    /// Best-before calendar date.
    #[must_use]
    pub fn best_before(&self) -> NaiveDate {
        self.best_before
    }

    /// When the item was placed in storage.
    #[must_use]
    pub fn placed_at(&self) -> NaiveDateTime {
        self.placed_at
    }

    /// Case-insensitive name comparison.
    #[must_use]
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

// =============================================================================
// Deserialization
// =============================================================================

/// Item fields rejected on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ItemError {
    /// Name was empty.
    #[error("item name must not be empty")]
    EmptyName,

    /// Weight was zero.
    #[error("item weight must be positive")]
    ZeroWeight,
}

/// Unchecked wire form of an [`Item`].
#[derive(Deserialize)]
struct ItemRecord {
    name: String,
    weight_grams: u32,
    best_before: NaiveDate,
    placed_at: NaiveDateTime,
}

impl TryFrom<ItemRecord> for Item {
    type Error = ItemError;

    fn try_from(record: ItemRecord) -> Result<Self, Self::Error> {
        if record.name.is_empty() {
            return Err(ItemError::EmptyName);
        }
        if record.weight_grams == 0 {
            return Err(ItemError::ZeroWeight);
        }
        Ok(Self::new(
            record.name,
            record.weight_grams,
            record.best_before,
            record.placed_at,
        ))
    }
}

impl std::fmt::Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Name: {} | Weight: {} g | BestBefore: {} | TimePlaced: {}",
            self.name,
            self.weight_grams,
            self.best_before.format(DATE_FORMAT),
            self.placed_at.format(DATE_TIME_FORMAT)
        )
    }
}

// =============================================================================
// Tests
// =============================================================================
