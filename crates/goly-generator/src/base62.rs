/// The 62-symbol alphabet, lowercase first so `a` encodes digit zero.
const ALPHABET: &[u8; 62] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Encodes an integer identifier as a base62 string.
///
/// Digits are accumulated least-significant-first by repeated division,
/// then reversed so the output reads most-significant-first. `encode(0)`
/// is the empty string; callers must guarantee a positive id (the store's
/// counter is seeded above zero and only incremented, so this holds by
/// construction).
pub fn encode(mut id: u64) -> String {
    let mut digits = Vec::new();
    while id > 0 {
        digits.push(ALPHABET[(id % 62) as usize]);
        id /= 62;
    }
    digits.reverse();
    // The alphabet is ASCII, so the digit buffer is valid UTF-8.
    String::from_utf8(digits).expect("base62 alphabet is ASCII")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_encodes_to_empty_string() {
        assert_eq!(encode(0), "");
    }

    #[test]
    fn single_digit_values() {
        assert_eq!(encode(1), "b");
        assert_eq!(encode(25), "z");
        assert_eq!(encode(26), "A");
        assert_eq!(encode(61), "9");
    }

    #[test]
    fn multi_digit_values() {
        assert_eq!(encode(62), "ba");
        assert_eq!(encode(63), "bb");
        assert_eq!(encode(62 * 62), "baa");
    }

    #[test]
    fn counter_seed_neighborhood() {
        // Values just above the store's counter seed.
        assert_eq!(encode(2_000_000_001), "clvXwH");
        assert_eq!(encode(2_000_000_002), "clvXwI");
    }

    #[test]
    fn encoding_is_injective_over_a_range() {
        let mut seen = std::collections::HashSet::new();
        for id in 1..10_000_u64 {
            assert!(seen.insert(encode(id)));
        }
    }
}
