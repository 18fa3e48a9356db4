//! Traystack - Fast-Food Tray Storage Manager
//!
//! Interactive driver around [`traystack_core::StorageUnit`].
//!
//! Features:
//! - Menu-driven session over any reader/writer pair
//! - Switchable LIFO/FIFO removal at runtime
//! - Name, weight-range and best-before-range search
//! - Best-before dates limited to two weeks past placement

pub mod clock;
pub mod input;
pub mod session;

pub use clock::{Clock, SimClock, SystemClock};
pub use session::{Session, SessionError};

/// Application name
pub const APP_NAME: &str = "traystack";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
