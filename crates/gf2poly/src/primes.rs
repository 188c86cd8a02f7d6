//! Small prime utilities backing the irreducibility test.
//!
//! Rabin's test needs the distinct prime divisors of the candidate degree.
//! Degrees in practice are tiny (≤ a few hundred), so a plain sieve is all
//! that is required.

use alloc::vec::Vec;

/// Whether `n` is a power of two. Zero is not.
#[inline]
#[must_use]
pub fn is_power_of_two(n: usize) -> bool {
  n > 0 && n & (n - 1) == 0
}

/// All primes `<= n`, ascending (Sieve of Eratosthenes).
#[must_use]
pub fn primes_up_to(n: usize) -> Vec<usize> {
  if n < 2 {
    return Vec::new();
  }
  let mut composite = alloc::vec![false; n + 1];
  let mut primes = Vec::new();
  for candidate in 2..=n {
    if composite[candidate] {
      continue;
    }
    primes.push(candidate);
    let mut multiple = candidate * candidate;
    while multiple <= n {
      composite[multiple] = true;
      multiple += candidate;
    }
  }
  primes
}

/// The distinct prime divisors of `n`, ascending.
///
/// Powers of two short-circuit to `{2}`; `n < 2` has none.
#[must_use]
pub fn prime_divisors(n: usize) -> Vec<usize> {
  if n < 2 {
    return Vec::new();
  }
  if is_power_of_two(n) {
    return alloc::vec![2];
  }
  primes_up_to(n).into_iter().filter(|p| n % p == 0).collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn power_of_two() {
    assert!(is_power_of_two(1));
    assert!(is_power_of_two(2));
    assert!(!is_power_of_two(3));
    assert!(is_power_of_two(4));
    assert!(!is_power_of_two(5));
    assert!(!is_power_of_two(0));
  }

  #[test]
  fn primes() {
    assert!(primes_up_to(1).is_empty());
    assert_eq!(primes_up_to(2), [2]);
    assert_eq!(primes_up_to(11), [2, 3, 5, 7, 11]);
  }

  #[test]
  fn divisors() {
    assert!(prime_divisors(0).is_empty());
    assert!(prime_divisors(1).is_empty());
    assert_eq!(prime_divisors(64), [2]);
    assert_eq!(prime_divisors(12), [2, 3]);
    assert_eq!(prime_divisors(61), [61]);
  }
}
