//! TigerStyle Constants
//!
//! Limits and formats are named here rather than scattered as literals.

/// Default number of trays a storage unit holds.
pub const STORAGE_CAPACITY_DEFAULT: usize = 8;

/// Render format for best-before dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Render format for placement timestamps.
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Text rendered by an empty listing.
pub const LISTING_EMPTY_TEXT: &str = "Storage is empty.";

/// Header line of a non-empty listing.
pub const LISTING_HEADER_TEXT: &str = "Storage contents (front to back):";
