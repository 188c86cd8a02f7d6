//! Uniform sampling of GF(2) polynomials and irreducible search.

use rand_core::RngCore;
use smallvec::smallvec;

use crate::poly::{Limbs, Polynomial};

/// Draw a uniformly random polynomial of exactly the given degree.
///
/// The `degree` term is fixed at 1; every lower coefficient is an unbiased
/// bit from `rng`.
#[must_use]
pub fn random_polynomial<R: RngCore + ?Sized>(rng: &mut R, degree: usize) -> Polynomial {
  let mut limbs: Limbs = smallvec![0; degree / 64 + 1];
  for limb in limbs.iter_mut() {
    *limb = rng.next_u64();
  }
  // Mask everything at or above the degree bit, then pin the degree bit.
  let top = degree % 64;
  if let Some(last) = limbs.last_mut() {
    *last &= (1u64 << top) - 1;
    *last |= 1u64 << top;
  }
  Polynomial::from_limbs(limbs)
}

/// Draw random polynomials of the given degree until one is irreducible.
///
/// Roughly one in `degree` monic polynomials of a given degree is
/// irreducible, so the expected number of draws is small.
#[must_use]
pub fn find_irreducible<R: RngCore + ?Sized>(rng: &mut R, degree: usize) -> Polynomial {
  loop {
    let candidate = random_polynomial(rng, degree);
    if candidate.is_irreducible() {
      return candidate;
    }
  }
}

#[cfg(test)]
mod tests {
  use rand::{rngs::StdRng, SeedableRng};

  use super::*;

  #[test]
  fn random_polynomial_has_exact_degree() {
    let mut rng = StdRng::seed_from_u64(0x5eed);

    let p = random_polynomial(&mut rng, 61);
    assert_eq!(p.degree(), 61);

    // There are 2^60 monic degree-61 polynomials; consecutive identical
    // draws mean the generator is broken, not unlucky.
    let mut duplicates = 0;
    for _ in 0..4 {
      if random_polynomial(&mut rng, 61) == p {
        duplicates += 1;
      }
    }
    assert!(duplicates < 4);
  }

  #[test]
  fn random_polynomial_spans_limbs() {
    let mut rng = StdRng::seed_from_u64(1);
    let p = random_polynomial(&mut rng, 64);
    assert_eq!(p.degree(), 64);
  }

  #[test]
  fn finds_irreducible_degree_32() {
    let mut rng = StdRng::seed_from_u64(2);
    let p = find_irreducible(&mut rng, 32);
    assert_eq!(p.degree(), 32);
    assert!(p.is_irreducible());
  }

  #[test]
  fn finds_irreducible_degree_64() {
    let mut rng = StdRng::seed_from_u64(3);
    let p = find_irreducible(&mut rng, 64);
    assert_eq!(p.degree(), 64);
    assert!(p.is_irreducible());

    let (degree, coeffs) = p.to_u64();
    assert_eq!(Polynomial::from_u64(degree, coeffs), p);
  }
}
