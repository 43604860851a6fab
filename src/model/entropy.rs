///
/// Estimate the bits of entropy in the plain text password.
///
/// The character pool is accumulated from the classes of character actually
/// present - 26 for lowercase, 26 for uppercase, 10 for digits and 32 for
/// anything else (the printable symbol range).
///
/// The estimate is length * log2(pool), rounded to 2 decimal places. An empty
/// password has no pool and scores zero.
///
pub fn estimate_entropy(password: &str) -> f64 {
    let mut pool = 0u32;

    if password.chars().any(|c| c.is_lowercase()) {
        pool += 26;
    }

    if password.chars().any(|c| c.is_uppercase()) {
        pool += 26;
    }

    if password.chars().any(|c| c.is_numeric()) {
        pool += 10;
    }

    if password.chars().any(|c| !c.is_alphanumeric()) {
        pool += 32;
    }

    if pool == 0 {
        return 0.;
    }

    let entropy = password.chars().count() as f64 * (pool as f64).log2();
    (entropy * 100.).round() / 100.
}


#[cfg(test)]
mod tests {
    use super::*;
    use more_asserts::assert_gt;

    #[test]
    fn test_empty_password_has_no_entropy() {
        assert_eq!(estimate_entropy(""), 0.);
    }

    #[test]
    fn test_wider_pool_beats_a_longer_single_class() {
        // 14 chars over a 94 pool comfortably beats 8 lowercase.
        assert_gt!(estimate_entropy("Sn0w!leopard99"), estimate_entropy("password"));
    }

    #[test]
    fn test_single_class_pool() {
        // 8 lowercase letters: 8 * log2(26) = 37.603..., rounded to 2dp.
        assert_eq!(estimate_entropy("password"), 37.6);
    }

    #[test]
    fn test_all_classes_pool() {
        // Lower + upper + digit + symbol = pool of 94.
        // 14 * log2(94) = 91.76...
        assert_eq!(estimate_entropy("Sn0w!leopard99"), 91.76);
    }

    #[test]
    fn test_digits_only_pool() {
        // 6 digits: 6 * log2(10) = 19.93...
        assert_eq!(estimate_entropy("123456"), 19.93);
    }

    #[test]
    fn test_symbols_count_toward_length() {
        // 4 symbols: 4 * log2(32) = 20 exactly.
        assert_eq!(estimate_entropy("!!$$"), 20.);
    }
}
