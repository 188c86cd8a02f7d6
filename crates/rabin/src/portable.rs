//! Portable table-driven update kernels.
//!
//! The recurrence for appending `k` bits to a fingerprint `F` is
//! `F' = (F · x^k + incoming) mod P`. The kernels below apply it a word at a
//! time: the bytes of `F` that the multiplication pushes past degree 63 are
//! re-reduced through per-byte table lookups, the surviving bits shift up,
//! and the incoming word lands in the vacated low bits.
//!
//! Word kernels only consume whole words; the sub-word tails handle the
//! final 1..3 (or 1..7) bytes by the same recurrence at `k = 8·len`.

// Table indices are single bytes extracted with shifts and masks.
#![allow(clippy::indexing_slicing)]

/// Advance `(f1, f2)` over every whole 4-byte word of `data`.
///
/// Bytes beyond the last whole word are ignored; callers route them through
/// [`update32_tail`].
pub(crate) fn update32_words(
  mut f1: u32,
  mut f2: u32,
  tables: &[[u64; 256]; 4],
  data: &[u8],
) -> (u32, u32) {
  let (words, _) = data.as_chunks::<4>();
  for word in words {
    let in_word = u32::from_be_bytes(*word);

    let t = tables[3][(f1 >> 24) as usize]
      ^ tables[2][((f1 >> 16) & 0xFF) as usize]
      ^ tables[1][((f1 >> 8) & 0xFF) as usize]
      ^ tables[0][(f1 & 0xFF) as usize];

    f1 = ((t >> 32) as u32) ^ f2;
    f2 = (t as u32) ^ in_word;
  }
  (f1, f2)
}

/// Advance `(f1, f2)` by the final `tail.len() < 4` bytes.
///
/// # Panics
///
/// Panics if `tail` holds a whole word or more; the word kernel must have
/// consumed those.
pub(crate) fn update32_tail(f1: u32, f2: u32, tables: &[[u64; 256]; 4], tail: &[u8]) -> (u32, u32) {
  match *tail {
    [] => (f1, f2),
    [b0] => {
      let t = tables[0][(f1 >> 24) as usize];
      let j1 = (f1 << 8) | (f2 >> 24);
      let j2 = f2 << 8;
      (((t >> 32) as u32) ^ j1, (t as u32) ^ j2 ^ u32::from(b0))
    }
    [b0, b1] => {
      let t = tables[1][(f1 >> 24) as usize] ^ tables[0][((f1 >> 16) & 0xFF) as usize];
      let j1 = (f1 << 16) | (f2 >> 16);
      let j2 = f2 << 16;
      let bytes = (u32::from(b0) << 8) | u32::from(b1);
      (((t >> 32) as u32) ^ j1, (t as u32) ^ j2 ^ bytes)
    }
    [b0, b1, b2] => {
      let t = tables[2][(f1 >> 24) as usize]
        ^ tables[1][((f1 >> 16) & 0xFF) as usize]
        ^ tables[0][((f1 >> 8) & 0xFF) as usize];
      let j1 = (f1 << 24) | (f2 >> 8);
      let j2 = f2 << 24;
      let bytes = (u32::from(b0) << 16) | (u32::from(b1) << 8) | u32::from(b2);
      (((t >> 32) as u32) ^ j1, (t as u32) ^ j2 ^ bytes)
    }
    _ => unreachable!("sub-word tail of {} bytes", tail.len()),
  }
}

/// Advance `fp` over every whole 8-byte word of `data`.
pub(crate) fn update64_words(mut fp: u64, tables: &[[u64; 256]; 8], data: &[u8]) -> u64 {
  let (words, _) = data.as_chunks::<8>();
  for word in words {
    let in_word = u64::from_be_bytes(*word);

    fp = tables[7][(fp >> 56) as usize]
      ^ tables[6][((fp >> 48) & 0xFF) as usize]
      ^ tables[5][((fp >> 40) & 0xFF) as usize]
      ^ tables[4][((fp >> 32) & 0xFF) as usize]
      ^ tables[3][((fp >> 24) & 0xFF) as usize]
      ^ tables[2][((fp >> 16) & 0xFF) as usize]
      ^ tables[1][((fp >> 8) & 0xFF) as usize]
      ^ tables[0][(fp & 0xFF) as usize]
      ^ in_word;
  }
  fp
}

/// Advance `fp` by the final `tail.len() < 8` bytes.
///
/// The state shifts up by `8·len` bits, the tail bytes fill the low bits,
/// and stripes `T64 .. T64+8(len-1)` reduce the displaced high bytes.
///
/// # Panics
///
/// Panics if `tail` holds a whole word or more.
pub(crate) fn update64_tail(fp: u64, tables: &[[u64; 256]; 8], tail: &[u8]) -> u64 {
  let len = tail.len();
  if len == 0 {
    return fp;
  }
  assert!(len < 8, "sub-word tail of {len} bytes");

  let mut bytes = 0u64;
  for &b in tail {
    bytes = (bytes << 8) | u64::from(b);
  }

  let mut acc = (fp << (8 * len)) ^ bytes;
  for (stripe, table) in tables.iter().enumerate().take(len) {
    let byte = (fp >> (56 - 8 * (len - 1 - stripe))) & 0xFF;
    acc ^= table[byte as usize];
  }
  acc
}
