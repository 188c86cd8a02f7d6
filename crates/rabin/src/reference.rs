//! Reference fingerprinting through the polynomial algebra.
//!
//! This is the mathematical definition of the fingerprint, computed the slow
//! way: read the input as one big polynomial and reduce it modulo `P(x)`.
//! The table-driven engines must agree with it on every input. It is the
//! oracle the test suite verifies them against, and is far too slow for
//! production use.

use gf2poly::Polynomial;

use crate::constants::irreducible_poly;

/// Fingerprint of `data` under the fixed polynomial, by direct reduction.
#[must_use]
pub fn fingerprint(data: &[u8]) -> u64 {
  fingerprint_with_poly(data, &irreducible_poly())
}

/// Fingerprint of `data` under an arbitrary degree-64 modulus.
///
/// # Panics
///
/// Panics if `modulus` is zero or its degree exceeds 64 (the residue would
/// not fit the packed 64-bit form).
#[must_use]
pub fn fingerprint_with_poly(data: &[u8], modulus: &Polynomial) -> u64 {
  Polynomial::from_bytes_be(data).rem(modulus).to_u64().1
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn below_the_modulus_nothing_reduces() {
    assert_eq!(fingerprint(&[]), 0);
    assert_eq!(fingerprint(&[0x42]), 0x42);
    assert_eq!(fingerprint(&[0xFF; 8]), u64::MAX);
  }

  #[test]
  fn first_reduction_step_is_the_polynomial_tail() {
    // A 9-byte input with only its top bit set is x^64, whose residue is
    // P(x) minus its leading term: the packed coefficient word.
    let mut data = [0u8; 9];
    data[0] = 0x01;
    assert_eq!(fingerprint(&data), crate::POLY_COEFFS);
  }

  #[test]
  fn arbitrary_modulus_is_honored() {
    // Modulo x^8 only the last byte survives.
    let modulus = gf2poly::Polynomial::from_degrees(&[8]);
    assert_eq!(fingerprint_with_poly(&[0xAA, 0xBB, 0xCC], &modulus), 0xCC);
  }
}
