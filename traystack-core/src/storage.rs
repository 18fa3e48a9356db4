//! StorageUnit - Bounded double-ended tray rack
//!
//! TigerStyle: Capacity checked before insert, emptiness checked before
//! removal, mode only decides which end the next removal takes from.
//!
//! ```text
//!   add ─▶ front [ C | B | A ] back
//!          ▲                  ▲
//!          │                  └── remove (AddFrontRemoveOpp, FIFO)
//!          └───────────────────── remove (StackFrontBoth, LIFO), peek
//! ```

use std::collections::VecDeque;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::{LISTING_EMPTY_TEXT, LISTING_HEADER_TEXT};
use crate::item::Item;

// =============================================================================
// Mode
// =============================================================================

/// Removal policy of a storage unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Mode {
    /// Add and remove at the front (LIFO).
    StackFrontBoth,
    /// Add at the front, remove at the back (FIFO).
    AddFrontRemoveOpp,
}

impl Mode {
    /// Get string representation.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::StackFrontBoth => "STACK_FRONT_BOTH",
            Self::AddFrontRemoveOpp => "ADD_FRONT_REMOVE_OPP",
        }
    }

    /// Parse from string.
    ///
    /// Accepts the rendered names in any case plus the `lifo`/`stack` and
    /// `fifo`/`queue` aliases.
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "stack_front_both" | "lifo" | "stack" => Some(Self::StackFrontBoth),
            "add_front_remove_opp" | "fifo" | "queue" => Some(Self::AddFrontRemoveOpp),
            _ => None,
        }
    }

    /// Get all modes in menu order.
    #[must_use]
    pub fn all() -> &'static [Mode] {
        &[Self::StackFrontBoth, Self::AddFrontRemoveOpp]
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// Errors
// =============================================================================

/// Storage unit failures. Both are recoverable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// `add` on a full unit.
    #[error("Storage is full (capacity {capacity}).")]
    CapacityExceeded {
        /// Capacity of the unit that rejected the item
        capacity: usize,
    },

    /// `remove` or `peek_top` on an empty unit.
    #[error("Storage is empty.")]
    EmptyContainer,
}

/// Result type for storage unit operations.
pub type StorageResult<T> = Result<T, StorageError>;

// =============================================================================
// Listing
// =============================================================================

/// Front-to-back rendering of a storage unit's contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing {
    /// No items are stored.
    Empty,
    /// One rendering per item, front first.
    Items(Vec<String>),
}

impl std::fmt::Display for Listing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "{LISTING_EMPTY_TEXT}"),
            Self::Items(lines) => {
                writeln!(f, "{LISTING_HEADER_TEXT}")?;
                for (index, line) in lines.iter().enumerate() {
                    writeln!(f, "[{index}] {line}")?;
                }
                Ok(())
            }
        }
    }
}

// =============================================================================
// StorageUnit
// =============================================================================

/// Fixed-capacity rack of trays.
///
/// Invariant: `0 <= len() <= capacity()`. Only [`add`](Self::add) and
/// [`remove`](Self::remove) change the length.
#[derive(Debug, Clone)]
pub struct StorageUnit {
    capacity: usize,
    items: VecDeque<Item>,
    mode: Mode,
}

impl StorageUnit {
    /// Create an empty unit.
    ///
    /// # Panics
    /// Panics if `capacity` is zero.
    #[must_use]
    pub fn new(capacity: usize, mode: Mode) -> Self {
        // Precondition
        assert!(capacity > 0, "capacity must be positive");

        Self {
            capacity,
            items: VecDeque::with_capacity(capacity),
            mode,
        }
    }

    /// Maximum number of items.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of items currently stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when no more items fit.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    /// True when nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Current removal policy.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Switch removal policy. Existing items keep their order.
    pub fn set_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            tracing::debug!(from = %self.mode, to = %mode, "mode switched");
        }
        self.mode = mode;
    }

    /// Iterate items front to back.
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    /// Place an item at the front.
    ///
    /// # Errors
    /// Returns [`StorageError::CapacityExceeded`] when the unit is full; the
    /// item is dropped and the unit is unchanged.
    pub fn add(&mut self, item: Item) -> StorageResult<()> {
        if self.is_full() {
            tracing::warn!(capacity = self.capacity, name = item.name(), "add rejected, storage full");
            return Err(StorageError::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        let len_before = self.items.len();
        tracing::debug!(name = item.name(), weight_grams = item.weight_grams(), "item added");
        self.items.push_front(item);

        // Postconditions
        debug_assert_eq!(self.items.len(), len_before + 1);
        debug_assert!(self.items.len() <= self.capacity);

        Ok(())
    }

    /// Take an item out: the front in [`Mode::StackFrontBoth`], the back in
    /// [`Mode::AddFrontRemoveOpp`].
    ///
    /// # Errors
    /// Returns [`StorageError::EmptyContainer`] when nothing is stored.
    pub fn remove(&mut self) -> StorageResult<Item> {
        let removed = match self.mode {
            Mode::StackFrontBoth => self.items.pop_front(),
            Mode::AddFrontRemoveOpp => self.items.pop_back(),
        };

        match removed {
            Some(item) => {
                tracing::debug!(name = item.name(), mode = %self.mode, "item removed");
                Ok(item)
            }
            None => {
                tracing::warn!("remove rejected, storage empty");
                Err(StorageError::EmptyContainer)
            }
        }
    }

    /// Look at the front item without removing it.
    ///
    /// # Errors
    /// Returns [`StorageError::EmptyContainer`] when nothing is stored.
    pub fn peek_top(&self) -> StorageResult<&Item> {
        self.items.front().ok_or(StorageError::EmptyContainer)
    }

    /// Render every item, front to back.
    #[must_use]
    pub fn display_all(&self) -> Listing {
        if self.items.is_empty() {
            return Listing::Empty;
        }
        Listing::Items(self.items.iter().map(ToString::to_string).collect())
    }

    /// First item, front to back, whose name matches ignoring case.
    #[must_use]
    pub fn search_by_name(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.matches_name(name))
    }

    /// Items with `min <= weight <= max`, front to back.
    ///
    /// An inverted range (`min > max`) matches nothing.
    #[must_use]
    pub fn search_by_weight_range(&self, min: u32, max: u32) -> Vec<&Item> {
        self.items
            .iter()
            .filter(|item| (min..=max).contains(&item.weight_grams()))
            .collect()
    }

    /// Items with `from <= best_before <= to`, front to back.
    ///
    /// An inverted range (`from > to`) matches nothing.
    #[must_use]
    pub fn search_by_best_before_range(&self, from: NaiveDate, to: NaiveDate) -> Vec<&Item> {
        self.items
            .iter()
            .filter(|item| (from..=to).contains(&item.best_before()))
            .collect()
    }
}

// =============================================================================
// Tests
// =============================================================================
