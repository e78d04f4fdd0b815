use proptest::prelude::*;
use utils::conv::{ITOA_BUF_LEN, MAX_BASE, MIN_BASE, atoi, itoa};

fn any_base() -> impl Strategy<Value = u32> {
    MIN_BASE..=MAX_BASE
}

proptest! {
  // Encode any value in any base, decode it back and compare.
  #[test]
  fn itoa_atoi_roundtrips(value in any::<i32>(), base in any_base()) {
      let mut buf = [0u8; ITOA_BUF_LEN];
      let len = itoa(value, &mut buf, base);
      prop_assert!(len >= 2);
      prop_assert_eq!(buf[usize::from(len) - 1], 0);
      prop_assert_eq!(atoi(&buf, len - 1, base), value);
  }

  // Only decimal output ever carries a sign.
  #[test]
  fn sign_only_in_base_ten(value in i32::MIN..0, base in any_base()) {
      let mut buf = [0u8; ITOA_BUF_LEN];
      itoa(value, &mut buf, base);
      prop_assert_eq!(buf[0] == b'-', base == 10);
  }

  // Every emitted digit is a valid uppercase digit of the base.
  #[test]
  fn digits_stay_in_base(value in any::<i32>(), base in any_base()) {
      let mut buf = [0u8; ITOA_BUF_LEN];
      let len = usize::from(itoa(value, &mut buf, base));
      for &byte in buf[..len - 1].iter().filter(|&&b| b != b'-') {
          let digit = char::from(byte);
          prop_assert!(digit.is_ascii_digit() || digit.is_ascii_uppercase());
          prop_assert!(digit.to_digit(base).is_some());
      }
  }

  // Out of range bases always produce the sentinel.
  #[test]
  fn bad_base_is_rejected(value in any::<i32>(), base in prop_oneof![0u32..MIN_BASE, (MAX_BASE + 1)..=u32::MAX]) {
      let mut buf = [0u8; ITOA_BUF_LEN];
      prop_assert_eq!(itoa(value, &mut buf, base), 0);
      prop_assert_eq!(atoi(b"101", 3, base), 0);
  }
}
