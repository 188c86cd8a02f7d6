//! Statistical collision sweep.
//!
//! A million distinct 20-character strings give ~2^39 pairs against a 2^-64
//! per-pair collision bound, so even one collision indicates a broken
//! engine rather than bad luck. Ignored by default: generating and hashing
//! the corpus takes a while in debug builds.

use std::collections::{HashMap, HashSet};

use rabin::Fingerprint;
use rand::{rngs::StdRng, Rng, SeedableRng};

#[test]
#[ignore = "long-running statistical sweep; run with --ignored"]
fn a_million_distinct_strings_do_not_collide() {
  let mut chars = Vec::with_capacity(73);
  for c in 0..26u8 {
    chars.push(b'a' + c);
    chars.push(b'A' + c);
  }
  chars.extend(b'0'..=b'9');
  chars.push(b'.');

  let mut rng = StdRng::seed_from_u64(0);
  let mut distinct: HashSet<Vec<u8>> = HashSet::with_capacity(1_000_000);
  let mut seen: HashMap<u64, Vec<u8>> = HashMap::with_capacity(1_000_000);

  let mut hasher = rabin::new_streaming();
  while distinct.len() < 1_000_000 {
    let url: Vec<u8> = (0..20).map(|_| chars[rng.random_range(0..chars.len())]).collect();
    if !distinct.insert(url.clone()) {
      continue;
    }

    hasher.update(&url);
    let fp = hasher.digest_u64();
    hasher.reset();

    if let Some(previous) = seen.insert(fp, url.clone()) {
      panic!("collision: {previous:?} and {url:?} share fingerprint {fp:#018x}");
    }
  }
}
