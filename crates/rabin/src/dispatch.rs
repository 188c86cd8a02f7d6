//! Kernel selection for the word-at-a-time update loops.
//!
//! Each engine funnels its whole-word work through a function pointer chosen
//! once per process. Accelerated kernels (SIMD ports of the same recurrence)
//! register as candidates ahead of the portable fallback and must be
//! bit-identical to it; the portable kernel carries no requirements and
//! terminates every candidate list.

use crate::portable;

/// Kernel contract for the 32-bit engine: advance `(f1, f2)` over every
/// whole 4-byte word of the input, leaving the tail to the caller.
pub type Update32Fn = fn(u32, u32, &[[u64; 256]; 4], &[u8]) -> (u32, u32);

/// Kernel contract for the 64-bit engine.
pub type Update64Fn = fn(u64, &[[u64; 256]; 8], &[u8]) -> u64;

struct Candidate<F: 'static> {
  name: &'static str,
  available: fn() -> bool,
  func: F,
}

const fn always() -> bool {
  true
}

static CANDIDATES32: &[Candidate<Update32Fn>] = &[Candidate {
  name: "portable/table32x4",
  available: always,
  func: portable::update32_words,
}];

static CANDIDATES64: &[Candidate<Update64Fn>] = &[Candidate {
  name: "portable/table64x8",
  available: always,
  func: portable::update64_words,
}];

/// First candidate whose probe passes. The portable fallback is always last
/// and always available.
fn select<F: Copy>(candidates: &'static [Candidate<F>]) -> &'static Candidate<F> {
  for candidate in candidates {
    if (candidate.available)() {
      return candidate;
    }
  }
  unreachable!("candidate lists end with the portable kernel");
}

#[cfg(feature = "std")]
fn selected32() -> &'static Candidate<Update32Fn> {
  use std::sync::OnceLock;
  static SELECTED: OnceLock<&'static Candidate<Update32Fn>> = OnceLock::new();
  *SELECTED.get_or_init(|| select(CANDIDATES32))
}

#[cfg(not(feature = "std"))]
fn selected32() -> &'static Candidate<Update32Fn> {
  select(CANDIDATES32)
}

#[cfg(feature = "std")]
fn selected64() -> &'static Candidate<Update64Fn> {
  use std::sync::OnceLock;
  static SELECTED: OnceLock<&'static Candidate<Update64Fn>> = OnceLock::new();
  *SELECTED.get_or_init(|| select(CANDIDATES64))
}

#[cfg(not(feature = "std"))]
fn selected64() -> &'static Candidate<Update64Fn> {
  select(CANDIDATES64)
}

#[inline]
pub(crate) fn update32() -> Update32Fn {
  selected32().func
}

#[inline]
pub(crate) fn update64() -> Update64Fn {
  selected64().func
}

pub(crate) fn backend_name32() -> &'static str {
  selected32().name
}

pub(crate) fn backend_name64() -> &'static str {
  selected64().name
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn selection_lands_on_a_kernel() {
    assert_eq!(backend_name32(), "portable/table32x4");
    assert_eq!(backend_name64(), "portable/table64x8");
  }

  #[test]
  fn selected_kernels_run() {
    let (f1, f2) = update32()(0, 0, &crate::tables::TABLES32, &[1, 2, 3, 4]);
    let fp = update64()(0, &crate::tables::TABLES64, &[0, 0, 0, 0, 1, 2, 3, 4]);
    assert_eq!((u64::from(f1) << 32) | u64::from(f2), fp);
  }
}
