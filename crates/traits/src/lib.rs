//! Core traits for the rabin fingerprint workspace.
//!
//! This crate provides the foundational traits that the fingerprint engines
//! conform to. It is `no_std` compatible and has zero dependencies.
//!
//! | Trait | Purpose |
//! |-------|---------|
//! | [`Fingerprint`] | Streaming 64-bit fingerprint computation |
//! | [`RollingFingerprint`] | Sliding-window extension with O(1) advance |
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod fingerprint;

pub use fingerprint::{Fingerprint, RollingFingerprint};
