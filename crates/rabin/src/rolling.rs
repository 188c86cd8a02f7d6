//! The rolling-window engine.

use traits::{Fingerprint, RollingFingerprint};

use crate::{
  portable,
  rabin32::Rabin,
  tables::{RollingTables, TABLES32},
};

/// Rabin fingerprint over a sliding window of fixed byte size.
///
/// Construction precomputes a table set specific to the window size (a
/// non-negligible, window-proportional cost), so reuse one hasher per window
/// size where possible.
///
/// Load the window with exactly `window_size` bytes of [`update`] calls,
/// then advance it with [`roll`]. The hasher does not track how many bytes
/// have been loaded; rolling a window that was never filled simply produces
/// the fingerprint of the byte string the operations describe.
///
/// [`update`]: Fingerprint::update
/// [`roll`]: RollingFingerprint::roll
#[derive(Clone, Debug)]
pub struct RollingRabin {
  inner: Rabin,
  window_size: usize,
  rolling: RollingTables,
}

impl RollingRabin {
  /// Create a rolling hasher for a window of `window_size` bytes.
  #[must_use]
  pub fn new(window_size: usize) -> Self {
    Self {
      inner: Rabin::new(),
      window_size,
      rolling: RollingTables::new(window_size),
    }
  }

  /// Name of the word kernel the dispatcher selected.
  #[must_use]
  pub fn backend_name() -> &'static str {
    Rabin::backend_name()
  }
}

impl Fingerprint for RollingRabin {
  const OUTPUT_SIZE: usize = 8;

  #[inline]
  fn block_size(&self) -> usize {
    self.inner.block_size()
  }

  #[inline]
  fn update(&mut self, data: &[u8]) -> usize {
    self.inner.update(data)
  }

  #[inline]
  fn reset(&mut self) {
    self.inner.reset();
  }

  #[inline]
  fn digest_u64(&self) -> u64 {
    self.inner.digest_u64()
  }
}

impl RollingFingerprint for RollingRabin {
  #[inline]
  fn window_size(&self) -> usize {
    self.window_size
  }

  /// Append `new` and drain `old`, the bytes leaving the window.
  ///
  /// Appending is the plain streaming step; draining XORs out each departing
  /// byte's contribution `old[i] · x^(8·window + offset) mod P` from the
  /// rolling tables. Each outgoing word must be retired in the same
  /// iteration that admits its incoming word: the rolling tables only cover
  /// offsets `8W .. 8W+24`, and a later word step would shift a stale
  /// contribution out of their range.
  fn roll(&mut self, old: &[u8], new: &[u8]) -> usize {
    assert_eq!(old.len(), new.len(), "rolled slices must have equal lengths");
    assert!(
      new.len() <= self.window_size,
      "cannot roll {} bytes through a {}-byte window",
      new.len(),
      self.window_size
    );

    let mut f1 = self.inner.f1;
    let mut f2 = self.inner.f2;

    let split = new.len() & !3;
    let (new_words, new_tail) = new.split_at(split);
    let (old_words, old_tail) = old.split_at(split);

    for (new_word, old_word) in new_words.as_chunks::<4>().0.iter().zip(old_words.as_chunks::<4>().0) {
      // Admit the incoming word.
      (f1, f2) = portable::update32_words(f1, f2, &TABLES32, new_word);

      // Retire the outgoing word, oldest byte farthest behind the head.
      let [o0, o1, o2, o3] = *old_word;
      let t = self.rolling.at(0, o3)
        ^ self.rolling.at(1, o2)
        ^ self.rolling.at(2, o1)
        ^ self.rolling.at(3, o0);
      f1 ^= (t >> 32) as u32;
      f2 ^= t as u32;
    }

    (f1, f2) = portable::update32_tail(f1, f2, &TABLES32, new_tail);

    let t = match *old_tail {
      [] => 0,
      [b0] => self.rolling.at(0, b0),
      [b0, b1] => self.rolling.at(1, b0) ^ self.rolling.at(0, b1),
      [b0, b1, b2] => self.rolling.at(2, b0) ^ self.rolling.at(1, b1) ^ self.rolling.at(0, b2),
      _ => unreachable!("tail bounded by the word split"),
    };
    f1 ^= (t >> 32) as u32;
    f2 ^= t as u32;

    self.inner.f1 = f1;
    self.inner.f2 = f2;
    new.len()
  }
}

#[cfg(feature = "std")]
impl std::io::Write for RollingRabin {
  #[inline]
  fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
    Ok(self.update(buf))
  }

  #[inline]
  fn flush(&mut self) -> std::io::Result<()> {
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn roll_of_nothing_is_a_no_op() {
    let mut hasher = RollingRabin::new(8);
    hasher.update(&[1, 2, 3, 4, 5, 6, 7, 8]);
    let before = hasher.digest_u64();
    assert_eq!(hasher.roll(&[], &[]), 0);
    assert_eq!(hasher.digest_u64(), before);
  }

  #[test]
  fn roll_matches_rehashing_across_word_boundaries() {
    let data: [u8; 24] = core::array::from_fn(|i| i as u8 + 1);

    for window in [4usize, 5, 8, 11] {
      for step in 1..=window.min(7) {
        let mut hasher = RollingRabin::new(window);
        hasher.update(&data[..window]);
        hasher.roll(&data[..step], &data[window..window + step]);
        assert_eq!(
          hasher.digest_u64(),
          Rabin::fingerprint(&data[step..window + step]),
          "window {window}, step {step}"
        );
      }
    }
  }

  #[test]
  #[should_panic(expected = "equal lengths")]
  fn mismatched_roll_lengths_panic() {
    let mut hasher = RollingRabin::new(8);
    hasher.update(&[0; 8]);
    let _ = hasher.roll(&[1, 2], &[3]);
  }

  #[test]
  #[should_panic(expected = "window")]
  fn rolling_more_than_the_window_panics() {
    let mut hasher = RollingRabin::new(2);
    hasher.update(&[0; 2]);
    let _ = hasher.roll(&[1, 2, 3], &[4, 5, 6]);
  }
}
