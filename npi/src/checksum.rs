/// Number of characters in an NPI, check digit included
pub(crate) const NPI_LENGTH: usize = 10;

/// Number of leading digits the check digit is computed from
pub(crate) const PREFIX_LENGTH: usize = NPI_LENGTH - 1;

/// Contribution of the `80840` health industry prefix to the Luhn sum
const HEALTH_INDUSTRY_PREFIX_SUM: u32 = 24;

/// Sum all the digits from a number
#[inline]
fn sum_all_digits(digits: u32) -> u32 {
    let mut sum = 0;
    let mut num = digits;
    while num > 0 {
        sum += num % 10;
        num /= 10;
    }
    sum
}

/// Luhn sum of the prefix: digits at even positions are doubled and reduced to
/// the sum of their own digits, digits at odd positions are kept as is.
///
/// `prefix` must hold exactly `PREFIX_LENGTH` ASCII digits.
fn check_value(prefix: &[u8]) -> u32 {
    debug_assert_eq!(prefix.len(), PREFIX_LENGTH);

    let mut sum = HEALTH_INDUSTRY_PREFIX_SUM;
    let mut is_doubled = true;

    for byte in prefix {
        let digit = u32::from(byte - b'0');
        if is_doubled {
            sum += sum_all_digits(digit * 2);
        } else {
            sum += digit;
        }
        is_doubled = !is_doubled;
    }
    sum
}

pub(crate) fn check_digit(prefix: &[u8]) -> u32 {
    match check_value(prefix) % 10 {
        0 => 0,
        remainder => 10 - remainder,
    }
}

/// Computes the check digit that completes a 9 digit NPI prefix.
///
/// Returns `None` unless `prefix` is exactly 9 ASCII digits.
pub fn check_digit_for(prefix: &str) -> Option<u32> {
    if prefix.len() != PREFIX_LENGTH || !prefix.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(check_digit(prefix.as_bytes()))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn doubled_digits_are_split() {
        assert_eq!(sum_all_digits(16), 7);
        assert_eq!(sum_all_digits(18), 9);
        assert_eq!(sum_all_digits(8), 8);
        assert_eq!(sum_all_digits(0), 0);
    }

    #[test]
    fn check_value_includes_prefix_constant() {
        assert_eq!(check_value(b"000000000"), 24);
        // 2 + 2 + 1 + 5 + 4 + 9 + 0 + 3 + (1 + 6) + 24
        assert_eq!(check_value(b"121529038"), 58);
    }

    #[test]
    fn check_digit_of_known_prefixes() {
        assert_eq!(check_digit(b"121529038"), 2);
        assert_eq!(check_digit(b"123456789"), 3);
        assert_eq!(check_digit(b"111111111"), 2);
        assert_eq!(check_digit(b"000000000"), 6);
        assert_eq!(check_digit(b"999999999"), 5);
    }

    #[test]
    fn check_digit_is_zero_when_sum_is_a_multiple_of_ten() {
        // 24 + 2 + 4 = 30
        assert_eq!(check_value(b"140000000"), 30);
        assert_eq!(check_digit(b"140000000"), 0);
    }

    #[test]
    fn check_digit_for_rejects_bad_prefixes() {
        assert_eq!(check_digit_for("121529038"), Some(2));
        assert_eq!(check_digit_for("12152903"), None);
        assert_eq!(check_digit_for("1215290382"), None);
        assert_eq!(check_digit_for("12152903a"), None);
        assert_eq!(check_digit_for(""), None);
    }
}
