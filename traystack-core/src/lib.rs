//! Traystack Core - Bounded Tray Storage
//!
//! TigerStyle: one fixed-capacity rack, two removal disciplines, no I/O.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │               StorageUnit                    │
//! ├─────────────────────────────────────────────┤
//! │  front ─▶ [ Item | Item | Item ] ◀─ back     │
//! ├─────────────────────────────────────────────┤
//! │  add        │ always at the front            │
//! │  remove     │ front (LIFO) or back (FIFO)    │
//! │  search     │ read-only, front to back       │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! The core never reads the clock or parses text. Drivers (the CLI, a test
//! harness) construct [`Item`]s and call into [`StorageUnit`].
//!
//! # Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use traystack_core::{Item, Mode, StorageUnit};
//!
//! let placed = NaiveDate::from_ymd_opt(2024, 5, 1)
//!     .unwrap()
//!     .and_hms_opt(12, 0, 0)
//!     .unwrap();
//! let best_before = NaiveDate::from_ymd_opt(2024, 5, 3).unwrap();
//!
//! let mut unit = StorageUnit::new(2, Mode::AddFrontRemoveOpp);
//! unit.add(Item::new("Fries".to_string(), 100, best_before, placed)).unwrap();
//! unit.add(Item::new("Burger".to_string(), 250, best_before, placed)).unwrap();
//!
//! assert!(unit.is_full());
//! assert_eq!(unit.remove().unwrap().name(), "Fries");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod constants;
pub mod item;
pub mod storage;

// Re-export common types
pub use constants::*;
pub use item::{Item, ItemError};
pub use storage::{Listing, Mode, StorageError, StorageResult, StorageUnit};
