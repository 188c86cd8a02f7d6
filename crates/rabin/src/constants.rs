//! The fixed irreducible polynomial every engine reduces by.

use gf2poly::Polynomial;

/// Coefficients of degree < 64 of the fingerprint polynomial `P(x)`. The
/// degree-64 term is implicit, so this word is also `x^64 mod P(x)`.
///
/// In full:
///
/// ```text
/// x^64 + x^62 + x^60 + x^59 + x^56 + x^55 + x^54 + x^51
///      + x^50 + x^48 + x^47 + x^43 + x^34 + x^33 + x^32 + x^31
///      + x^29 + x^27 + x^26 + x^21 + x^20 + x^19 + x^18 + x^17
///      + x^14 + x^4 + x^2 + x + 1
/// ```
pub const POLY_COEFFS: u64 = 0x59cd_8807_ac3e_4017;

/// Degree of the fingerprint polynomial.
pub const POLY_DEGREE: usize = 64;

/// The fingerprint polynomial as a [`Polynomial`], for algebra-level checks.
#[must_use]
pub fn irreducible_poly() -> Polynomial {
  Polynomial::from_u64(POLY_DEGREE, POLY_COEFFS)
}
