//! The 64-bit-word streaming engine.

use traits::Fingerprint;

use crate::{dispatch, portable, tables::TABLES64};

/// Streaming Rabin fingerprint, 8 bytes per table-driven step.
///
/// Bit-identical to [`Rabin`](crate::Rabin) for every input; the single
/// `u64` state and eight table stripes halve the steps per byte at twice
/// the table footprint.
#[derive(Clone, Debug, Default)]
pub struct Rabin64 {
  fingerprint: u64,
}

impl Rabin64 {
  /// Create an empty hasher (fingerprint 0).
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self { fingerprint: 0 }
  }

  /// Fingerprint `data` in one shot.
  #[inline]
  #[must_use]
  pub fn fingerprint(data: &[u8]) -> u64 {
    let mut hasher = Self::new();
    hasher.update(data);
    hasher.digest_u64()
  }

  /// Name of the word kernel the dispatcher selected.
  #[must_use]
  pub fn backend_name() -> &'static str {
    dispatch::backend_name64()
  }
}

impl Fingerprint for Rabin64 {
  const OUTPUT_SIZE: usize = 8;

  #[inline]
  fn block_size(&self) -> usize {
    8
  }

  #[inline]
  fn update(&mut self, data: &[u8]) -> usize {
    let split = data.len() & !7;
    let (words, tail) = data.split_at(split);
    let fp = dispatch::update64()(self.fingerprint, &TABLES64, words);
    self.fingerprint = portable::update64_tail(fp, &TABLES64, tail);
    data.len()
  }

  #[inline]
  fn reset(&mut self) {
    self.fingerprint = 0;
  }

  #[inline]
  fn digest_u64(&self) -> u64 {
    self.fingerprint
  }
}

#[cfg(feature = "std")]
impl std::io::Write for Rabin64 {
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
  fn short_inputs_are_their_own_fingerprint() {
    assert_eq!(Rabin64::fingerprint(&[]), 0);
    assert_eq!(Rabin64::fingerprint(&[0xAB]), 0xAB);
    assert_eq!(Rabin64::fingerprint(&[1, 2, 3, 4, 5, 6, 7]), 0x01020304050607);
    assert_eq!(
      Rabin64::fingerprint(&[0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08]),
      0x0102030405060708
    );
  }

  #[test]
  fn reset_restores_the_empty_state() {
    let mut hasher = Rabin64::new();
    hasher.update(b"some input");
    hasher.reset();
    assert_eq!(hasher.digest_u64(), 0);
  }
}
