//! # OxiRange Core
//!
//! Core components for the OxiRange range-coding library.
//!
//! This crate provides the definitions shared by every coder crate:
//!
//! - [`error`]: Error types
//!
//! ## Architecture
//!
//! OxiRange is designed as a small layered stack:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ L3: Filters                                             │
//! │     BCJ2 branch-target filter (oxirange-bcj2)          │
//! ├─────────────────────────────────────────────────────────┤
//! │ L2: Composites                                          │
//! │     BitTree symbol coding, price table (oxirange-rc)   │
//! ├─────────────────────────────────────────────────────────┤
//! │ L1: Range coder                                         │
//! │     BitModel, RangeEncoder/RangeDecoder (oxirange-rc)  │
//! ├─────────────────────────────────────────────────────────┤
//! │ L0: Shared definitions (this crate)                     │
//! │     Error types                                         │
//! └─────────────────────────────────────────────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;

// Re-exports for convenience
pub use error::{OxiRangeError, Result};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{OxiRangeError, Result};
}
