//! Digit extraction and modulo-11 check digits shared by the document validators.

/// Keep only the ASCII digits of `input`.
pub fn strip_non_digits(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// True when `digits` is non-empty and every character is the same.
pub fn all_same(digits: &str) -> bool {
    let mut bytes = digits.bytes();
    match bytes.next() {
        Some(first) => bytes.all(|b| b == first),
        None => false,
    }
}

/// Convert an ASCII digit string into numeric values.
///
/// Callers pass the output of [`strip_non_digits`], so every byte is `b'0'..=b'9'`.
pub(crate) fn to_values(digits: &str) -> Vec<u8> {
    digits.bytes().map(|b| b - b'0').collect()
}

/// Modulo-11 check digit: `11 - (sum mod 11)`, with results above 9 folded to 0.
///
/// `weights` is zipped with `digits`; extra weights are ignored.
pub fn check_digit<W>(digits: &[u8], weights: W) -> u8
where
    W: IntoIterator<Item = u32>,
{
    let sum: u32 = digits
        .iter()
        .zip(weights)
        .map(|(&d, w)| u32::from(d) * w)
        .sum();

    let check = 11 - (sum % 11);
    if check > 9 {
        0
    } else {
        check as u8
    }
}

/// Weights that start at `start`, descend to 2, then wrap to 9 and descend again.
pub(crate) fn cyclic_weights(start: u32) -> impl Iterator<Item = u32> {
    std::iter::successors(Some(start), |&w| Some(if w == 2 { 9 } else { w - 1 }))
}

/// Format `digits` by inserting `separators` before the given byte offsets.
///
/// `groups` pairs an offset with the separator placed before it.
pub(crate) fn mask(digits: &str, groups: &[(usize, &str)]) -> String {
    let mut out = String::with_capacity(digits.len() + groups.len() * 2);
    for (i, c) in digits.chars().enumerate() {
        if let Some((_, sep)) = groups.iter().find(|(at, _)| *at == i) {
            out.push_str(sep);
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_non_digits() {
        assert_eq!(strip_non_digits("111.444.777-35"), "11144477735");
        assert_eq!(strip_non_digits("(85) 98831-8679"), "85988318679");
        assert_eq!(strip_non_digits("abc"), "");
        assert_eq!(strip_non_digits("١٢٣"), "");
    }

    #[test]
    fn test_all_same() {
        assert!(all_same("11111111111"));
        assert!(!all_same("11111111112"));
        assert!(!all_same(""));
    }

    #[test]
    fn test_check_digit_folds_large_values() {
        // sum = 0 -> 11 - 0 = 11 -> 0
        assert_eq!(check_digit(&[0, 0, 0], [3, 2, 1]), 0);
        // sum = 10 -> 11 - 10 = 1
        assert_eq!(check_digit(&[5], [2]), 1);
    }

    #[test]
    fn test_cyclic_weights() {
        let first: Vec<u32> = cyclic_weights(5).take(12).collect();
        assert_eq!(first, vec![5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2]);

        let second: Vec<u32> = cyclic_weights(6).take(13).collect();
        assert_eq!(second, vec![6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2]);
    }

    #[test]
    fn test_mask() {
        assert_eq!(
            mask("11144477735", &[(3, "."), (6, "."), (9, "-")]),
            "111.444.777-35"
        );
    }
}
