/// Bit-mirror of every byte value: entry `b` holds `b` with bit 0 and
/// bit 7 swapped, bit 1 and bit 6 swapped, and so on.
///
/// Built at compile time; reading it needs no synchronization. The table
/// is a bijection, and mirroring twice is the identity.
pub static BIT_MIRROR: [u8; 256] = {
  let mut table = [0u8; 256];
  let mut i = 0;

  while i < 256 {
    table[i] = mirror_byte(i as u8);
    i += 1;
  }

  table
};

const fn mirror_byte(byte: u8) -> u8 {
  let byte = (byte & 0xF0) >> 4 | (byte & 0x0F) << 4;
  let byte = (byte & 0xCC) >> 2 | (byte & 0x33) << 2;
  (byte & 0xAA) >> 1 | (byte & 0x55) << 1
}

/// Generates the word-width reversal functions. Each one mirrors the bits
/// inside every byte via [`BIT_MIRROR`], then reverses the byte order of
/// the word, which together reverse the whole word end to end: bit 0 of
/// the input lands in the most significant position of the output. The
/// result depends only on the logical value, not on host byte order.
macro_rules! reverse_fn {
  ($(#[$doc:meta])* $name:ident, $ty:ty) => {
    $(#[$doc])*
    #[inline]
    #[must_use]
    pub fn $name(value: $ty) -> $ty {
      let mut bytes = value.to_ne_bytes();

      for byte in &mut bytes {
        *byte = BIT_MIRROR[*byte as usize];
      }

      <$ty>::from_ne_bytes(bytes).swap_bytes()
    }
  };
}

reverse_fn! {
  /// Reverses the bit order of a 16-bit word.
  ///
  /// # Examples
  ///
  /// ```rust
  /// use hotbox::reverse_bits16;
  ///
  /// assert_eq!(reverse_bits16(0x0001), 0x8000);
  /// assert_eq!(reverse_bits16(reverse_bits16(0xCAFE)), 0xCAFE);
  /// ```
  reverse_bits16, u16
}

reverse_fn! {
  /// Reverses the bit order of a 32-bit word.
  reverse_bits32, u32
}

reverse_fn! {
  /// Reverses the bit order of a 64-bit word.
  reverse_bits64, u64
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_mirror_table_is_an_involution() {
    for b in 0..=255u8 {
      assert_eq!(BIT_MIRROR[BIT_MIRROR[b as usize] as usize], b);
    }
  }

  #[test]
  fn test_mirror_table_is_a_bijection() {
    let mut seen = [false; 256];

    for b in 0..=255u8 {
      let mirrored = BIT_MIRROR[b as usize] as usize;

      assert!(!seen[mirrored], "duplicate image for {b:#04x}");
      seen[mirrored] = true;
    }
  }

  #[test]
  fn test_mirror_table_known_entries() {
    assert_eq!(BIT_MIRROR[0x00], 0x00);
    assert_eq!(BIT_MIRROR[0xFF], 0xFF);
    assert_eq!(BIT_MIRROR[0x01], 0x80);
    assert_eq!(BIT_MIRROR[0x80], 0x01);
    assert_eq!(BIT_MIRROR[0xB4], 0x2D);
  }

  #[test]
  fn test_reverse16() {
    assert_eq!(reverse_bits16(0x0001), 0x8000);
    assert_eq!(reverse_bits16(0x8000), 0x0001);
    assert_eq!(reverse_bits16(0), 0);
    assert_eq!(reverse_bits16(0xFFFF), 0xFFFF);

    for v in (0..=u16::MAX).step_by(251) {
      assert_eq!(reverse_bits16(reverse_bits16(v)), v);
      assert_eq!(reverse_bits16(v), v.reverse_bits());
    }
  }

  #[test]
  fn test_reverse32() {
    assert_eq!(reverse_bits32(0x0000_0001), 0x8000_0000);
    assert_eq!(reverse_bits32(0), 0);
    assert_eq!(reverse_bits32(0xFFFF_FFFF), 0xFFFF_FFFF);
    assert_eq!(reverse_bits32(0xDEAD_BEEF), 0xDEAD_BEEF_u32.reverse_bits());

    let mut v = 0x9E37_79B9_u32;
    for _ in 0..1000 {
      assert_eq!(reverse_bits32(reverse_bits32(v)), v);
      assert_eq!(reverse_bits32(v), v.reverse_bits());
      v = v.wrapping_mul(0x85EB_CA6B).wrapping_add(1);
    }
  }

  #[test]
  fn test_reverse64() {
    assert_eq!(reverse_bits64(0), 0);
    assert_eq!(reverse_bits64(0xFFFF_FFFF_FFFF_FFFF), 0xFFFF_FFFF_FFFF_FFFF);
    assert_eq!(reverse_bits64(1), 1 << 63);

    let mut v = 0x9E37_79B9_7F4A_7C15_u64;
    for _ in 0..1000 {
      assert_eq!(reverse_bits64(reverse_bits64(v)), v);
      assert_eq!(reverse_bits64(v), v.reverse_bits());
      v = v.wrapping_mul(0xBF58_476D_1CE4_E5B9).wrapping_add(1);
    }
  }
}
