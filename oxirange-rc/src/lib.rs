//! # OxiRange RC
//!
//! Adaptive binary range coding - the entropy-coding engine underneath
//! the LZMA family of formats.
//!
//! A range coder narrows an integer interval (`[low, low + range)`) as
//! symbols arrive and emits whole bytes once the top of the interval is
//! provably fixed. This crate provides the engine and the composites
//! built directly on it:
//!
//! - [`BitModel`]: one adaptive probability per binary decision point
//! - [`RangeEncoder`] / [`RangeDecoder`]: the register machinery,
//!   carry-safe renormalization, modeled bits and unmodeled
//!   ("direct") bits
//! - [`BitTree`]: multi-bit symbols coded as a trie of bit models, in
//!   either bit order
//! - [`price`]: compile-time cost table for encoders that compare
//!   candidate encodings
//!
//! ## Contract
//!
//! Encoder and decoder compute the interval split and the model update
//! with identical integer arithmetic - a one-bit divergence corrupts
//! everything that follows, silently. The decoder has no end-of-stream
//! detection: callers track the symbol count externally, and an
//! exhausted input feeds `0xFF` bytes to the refill rather than
//! failing (see [`RangeDecoder`]).
//!
//! ## Example
//!
//! ```rust
//! use oxirange_rc::{BitModel, RangeDecoder, RangeEncoder};
//! use std::io::Cursor;
//!
//! let mut encoder = RangeEncoder::new(Vec::new());
//! let mut model = BitModel::new();
//! for bit in [1, 0, 0, 1, 1, 1] {
//!     encoder.encode_bit(&mut model, bit).unwrap();
//! }
//! let stream = encoder.finish().unwrap();
//!
//! let mut decoder = RangeDecoder::new(Cursor::new(stream)).unwrap();
//! let mut model = BitModel::new();
//! for bit in [1, 0, 0, 1, 1, 1] {
//!     assert_eq!(decoder.decode_bit(&mut model).unwrap(), bit);
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bittree;
pub mod decoder;
pub mod encoder;
pub mod model;
pub mod price;

// Re-exports
pub use bittree::BitTree;
pub use decoder::RangeDecoder;
pub use encoder::RangeEncoder;
pub use model::{BitModel, MOVE_BITS, PROB_BITS, PROB_INIT, PROB_MAX};
pub use price::{PRICE_SHIFT_BITS, direct_bits_price};
