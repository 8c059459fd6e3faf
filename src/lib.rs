//! # FlatStore
//!
//! A fixed-layout binary record store with:
//! - A small fixed-size header (magic, version, record count, timestamps)
//! - Fixed-width product records appended in insertion order
//! - Lazy scans that skip inactive records and total inventory value
//! - An enum-dispatched integer calculator
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌──────────────────────┐        ┌──────────────────────┐
//! │   flatstore (CLI)    │        │   flatcalc (CLI)     │
//! └──────────┬───────────┘        └──────────┬───────────┘
//!            │                               │
//!            ▼                               ▼
//!   ┌─────────────────┐             ┌─────────────────┐
//!   │   RecordStore   │             │  DispatchTable  │
//!   │ create / append │             │  Operator enum  │
//!   │  scan / find    │             └─────────────────┘
//!   └────────┬────────┘
//!            │
//!            ▼
//!   ┌─────────────────┐
//!   │     Format      │
//!   │ Header / Product│
//!   │  (byte-exact)   │
//!   └─────────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod format;
pub mod store;
pub mod calc;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{FlatError, Result};
pub use config::Config;
pub use format::{Header, Product};
pub use store::RecordStore;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of FlatStore
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
