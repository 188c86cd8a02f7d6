//! Rabin fingerprints over a fixed irreducible 64-bit polynomial.
//!
//! A Rabin fingerprint of a byte string `s` is the residue `s(x) mod P(x)`,
//! where `s` is read as a polynomial over GF(2) (first byte at the highest
//! position) and `P` is a fixed irreducible polynomial of degree 64. The
//! fingerprint is a universal hash with a pigeonhole collision bound of
//! `2^-64` per pair; it is *not* a MAC and carries no cryptographic claims.
//!
//! # Engines
//!
//! | Type | State | Word width | Extra |
//! |------|-------|------------|-------|
//! | [`Rabin`] | two `u32` halves | 4 bytes | - |
//! | [`Rabin64`] | one `u64` | 8 bytes | - |
//! | [`RollingRabin`] | two `u32` halves | 4 bytes | O(1) window advance |
//!
//! All engines produce bit-identical fingerprints for every input; they
//! differ only in how many bytes each table-driven step consumes.
//!
//! # Quick Start
//!
//! ```
//! use rabin::{Fingerprint, Rabin};
//!
//! // One-shot.
//! let fp = Rabin::fingerprint(b"hello world");
//!
//! // Streaming.
//! let mut hasher = rabin::new_streaming();
//! hasher.update(b"hello ");
//! hasher.update(b"world");
//! assert_eq!(hasher.digest_u64(), fp);
//! ```
//!
//! # Rolling
//!
//! ```
//! use rabin::{Fingerprint, Rabin, RollingFingerprint};
//!
//! let data = b"abcdefgh";
//! let mut hasher = rabin::new_rolling(4);
//! hasher.update(&data[..4]);
//! hasher.roll(&data[..1], &data[4..5]);
//! assert_eq!(hasher.digest_u64(), Rabin::fingerprint(&data[1..5]));
//! ```
//!
//! # Table State
//!
//! The fixed-polynomial lookup tables are computed at compile time and live
//! in read-only process memory. Rolling tables depend on the window size and
//! are owned by the hasher that requested them; callers that need many
//! window sizes may cache [`RollingTables`] externally.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod constants;
mod dispatch;
mod portable;
mod rabin32;
mod rabin64;
pub mod reference;
mod rolling;
mod tables;

pub use constants::{irreducible_poly, POLY_COEFFS, POLY_DEGREE};
pub use dispatch::{Update32Fn, Update64Fn};
pub use rabin32::Rabin;
pub use rabin64::Rabin64;
pub use rolling::RollingRabin;
pub use tables::{power_table, tables32_from_poly, tables64_from_poly, RollingTables};
// Re-export the traits so downstream code needs only this crate.
pub use traits::{Fingerprint, RollingFingerprint};

/// Create a streaming hasher using the 32-bit-word engine.
#[inline]
#[must_use]
pub fn new_streaming() -> Rabin {
  Rabin::new()
}

/// Create a streaming hasher using the 64-bit-word engine.
///
/// Produces the same fingerprints as [`new_streaming`]; the wider words
/// trade table size for fewer steps per byte.
#[inline]
#[must_use]
pub fn new_streaming_64() -> Rabin64 {
  Rabin64::new()
}

/// Create a rolling hasher over a window of `window_size` bytes.
///
/// Table construction costs O(window) up front; see [`RollingRabin`].
#[inline]
#[must_use]
pub fn new_rolling(window_size: usize) -> RollingRabin {
  RollingRabin::new(window_size)
}
