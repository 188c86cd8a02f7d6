//! Arbitrary-precision polynomial arithmetic over GF(2).
//!
//! Polynomials over the two-element field are bit vectors: addition is XOR,
//! multiplication is carry-less shift-and-XOR. This crate provides the
//! algebra needed to construct and verify table-driven Rabin fingerprint
//! engines:
//!
//! - [`Polynomial`]: add / mul / div / mod / gcd / square, comparison, and
//!   Rabin's irreducibility test
//! - [`primes`]: the small prime utilities the irreducibility test relies on
//! - [`random_polynomial`] / [`find_irreducible`]: uniform sampling and
//!   rejection search for irreducible polynomials of a given degree
//!
//! # Example
//!
//! ```
//! use gf2poly::Polynomial;
//!
//! // (x^2 + x + 1) / (x + 1) = x remainder 1
//! let f = Polynomial::from_int(0x7);
//! let g = Polynomial::from_int(0x3);
//! let (q, r) = f.div_rem(&g);
//! assert_eq!(q, Polynomial::from_int(0x2));
//! assert_eq!(r, Polynomial::one());
//! ```
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod poly;
pub mod primes;
mod random;

pub use poly::Polynomial;
pub use random::{find_irreducible, random_polynomial};
