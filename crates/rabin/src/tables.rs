//! Lookup table construction for the fingerprint engines.
//!
//! Every table entry is some `(b · x^k) mod P(x)` packed into a `u64`:
//!
//! - the **power table** holds the residues `x^(base+8i) mod P` themselves;
//! - the **fingerprint tables** key those residues by the byte `b` of the
//!   running fingerprint that multiplies them (4 stripes for the 32-bit
//!   engine, 8 for the 64-bit engine);
//! - the **rolling tables** do the same for the four byte positions a
//!   departing word occupies at distance `window` behind the stream head.
//!
//! The fixed-polynomial tables are built by `const fn` into `static`s, so
//! there is no process-wide init step. Each builder has a naive counterpart
//! that reduces `b · x^k` with the polynomial algebra directly; the unit
//! tests hold the two paths equal entry by entry.

// Table indices are produced by `& 0xFF` / byte loops and are bounded by
// construction; clippy cannot see this inside const fns.
#![allow(clippy::indexing_slicing)]

use alloc::boxed::Box;

use gf2poly::Polynomial;

use crate::constants::POLY_COEFFS;

// ─────────────────────────────────────────────────────────────────────────────
// Fast path (const fn, no algebra)
// ─────────────────────────────────────────────────────────────────────────────

/// Multiply a residue (degree < 64) by `x` and reduce.
#[inline]
const fn mulx(v: u64) -> u64 {
  let shifted = v << 1;
  if v >> 63 != 0 { shifted ^ POLY_COEFFS } else { shifted }
}

/// `(b(x) · v(x)) mod P(x)` for a byte `b` and a residue `v` of degree < 64.
///
/// Horner's walk over the bits of `b`, high to low: each step multiplies the
/// accumulator by `x` (reducing the bit shifted past degree 63 through
/// `x^64 ≡ P - x^64`) and mixes in `v` where `b` has a coefficient.
const fn mul_byte(b: u8, v: u64) -> u64 {
  let mut acc = 0u64;
  let mut bit = 8u32;
  while bit > 0 {
    bit -= 1;
    acc = mulx(acc);
    if (b >> bit) & 1 != 0 {
      acc ^= v;
    }
  }
  acc
}

/// The residues `x^(base_power + 8i) mod P(x)` for `i = 0..16`.
///
/// Seeded by walking `x^64 mod P` up to `base_power` one squaring-free
/// multiply-by-`x` at a time (callers pass arbitrary bases, not just
/// multiples of 8), then stepped by `x^8` with a single byte reduction per
/// entry.
#[must_use]
pub const fn power_table(base_power: usize) -> [u64; 16] {
  let mut v = if base_power < 64 {
    1u64 << base_power
  } else {
    let mut v = POLY_COEFFS;
    let mut power = 64;
    while power < base_power {
      v = mulx(v);
      power += 1;
    }
    v
  };

  let mut table = [0u64; 16];
  let mut i = 0;
  while i < 16 {
    table[i] = v;
    // v · x^8: the byte shifted past degree 63 re-enters through x^64 ≡ P_low.
    v = (v << 8) ^ mul_byte((v >> 56) as u8, POLY_COEFFS);
    i += 1;
  }
  table
}

/// Fingerprint tables for the 32-bit engine: `tables[i][b] = (b · x^(64+8i)) mod P`.
#[must_use]
pub(crate) const fn make_tables32() -> [[u64; 256]; 4] {
  let powers = power_table(64);
  let mut tables = [[0u64; 256]; 4];
  let mut i = 0;
  while i < 4 {
    let mut b = 0usize;
    while b < 256 {
      tables[i][b] = mul_byte(b as u8, powers[i]);
      b += 1;
    }
    i += 1;
  }
  tables
}

/// Fingerprint tables for the 64-bit engine: eight stripes, `x^64 .. x^120`.
#[must_use]
pub(crate) const fn make_tables64() -> [[u64; 256]; 8] {
  let powers = power_table(64);
  let mut tables = [[0u64; 256]; 8];
  let mut i = 0;
  while i < 8 {
    let mut b = 0usize;
    while b < 256 {
      tables[i][b] = mul_byte(b as u8, powers[i]);
      b += 1;
    }
    i += 1;
  }
  tables
}

pub(crate) static TABLES32: [[u64; 256]; 4] = make_tables32();
pub(crate) static TABLES64: [[u64; 256]; 8] = make_tables64();

// ─────────────────────────────────────────────────────────────────────────────
// Rolling tables
// ─────────────────────────────────────────────────────────────────────────────

/// Per-window lookup tables for draining departing bytes.
///
/// Stripe `i` maps a byte `b` to `(b · x^(8·window + 8i)) mod P` for
/// `i = 0..4`: the four positions a departing word's bytes occupy behind a
/// window of `window` bytes.
#[derive(Clone, Debug)]
pub struct RollingTables {
  tables: Box<[[u64; 256]; 4]>,
}

impl RollingTables {
  /// Build the tables for a window of `window_size` bytes.
  #[must_use]
  pub fn new(window_size: usize) -> Self {
    let powers = power_table(8 * window_size);
    let mut tables = Box::new([[0u64; 256]; 4]);
    for (stripe, table) in tables.iter_mut().enumerate() {
      for (b, entry) in table.iter_mut().enumerate() {
        *entry = mul_byte(b as u8, powers[stripe]);
      }
    }
    Self { tables }
  }

  /// Look up the contribution of byte `b` at stripe offset `8·stripe` bits.
  #[inline]
  pub(crate) fn at(&self, stripe: usize, b: u8) -> u64 {
    self.tables[stripe][b as usize]
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Naive path (polynomial algebra oracle)
// ─────────────────────────────────────────────────────────────────────────────

/// `(b · x^power) mod p` computed with the polynomial algebra.
fn byte_power_residue(p: &Polynomial, b: u8, power: usize) -> u64 {
  let mut poly = Polynomial::zero();
  for bit in 0..8 {
    if (b >> bit) & 1 != 0 {
      poly.set_coefficient(power + bit, true);
    }
  }
  poly.rem(p).to_u64().1
}

/// The 32-bit engine tables derived from `p` by direct reduction.
///
/// Slow; exists to cross-check the table builders against the algebra.
#[must_use]
pub fn tables32_from_poly(p: &Polynomial) -> [[u64; 256]; 4] {
  let mut tables = [[0u64; 256]; 4];
  for (i, table) in tables.iter_mut().enumerate() {
    for (b, entry) in table.iter_mut().enumerate() {
      *entry = byte_power_residue(p, b as u8, 64 + 8 * i);
    }
  }
  tables
}

/// The 64-bit engine tables derived from `p` by direct reduction.
#[must_use]
pub fn tables64_from_poly(p: &Polynomial) -> [[u64; 256]; 8] {
  let mut tables = [[0u64; 256]; 8];
  for (i, table) in tables.iter_mut().enumerate() {
    for (b, entry) in table.iter_mut().enumerate() {
      *entry = byte_power_residue(p, b as u8, 64 + 8 * i);
    }
  }
  tables
}
