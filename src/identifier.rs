//! Character-class checks for the pieces of a version.

/// Returns true for a non-empty string of ASCII digits.
///
/// ## Examples
///
/// ```rust
/// use sem_ver::identifier::is_numeric;
///
/// assert!(is_numeric("0123"));
/// assert!(!is_numeric("12a"));
/// assert!(!is_numeric(""));
/// ```
pub fn is_numeric(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Returns true if `s` is a valid pre-release identifier.
///
/// That is either an alphanumeric identifier starting with an ASCII letter
/// and followed by letters, digits, or hyphens, or a numeric identifier
/// without leading zeroes.
///
/// ## Examples
///
/// ```rust
/// use sem_ver::identifier::is_valid_pre_release;
///
/// assert!(is_valid_pre_release("beta-1"));
/// assert!(is_valid_pre_release("0"));
/// assert!(is_valid_pre_release("42"));
/// assert!(!is_valid_pre_release("0123"));
/// assert!(!is_valid_pre_release("*aaa"));
/// assert!(!is_valid_pre_release("sdk&d"));
/// ```
pub fn is_valid_pre_release(s: &str) -> bool {
    let mut bytes = s.bytes();
    match bytes.next() {
        Some(b) if b.is_ascii_alphabetic() => bytes.all(is_identifier_byte),
        Some(b'0') => s.len() == 1,
        Some(b) if b.is_ascii_digit() => bytes.all(|b| b.is_ascii_digit()),
        _ => false,
    }
}

/// Returns true if `s` is a valid build identifier, i.e. it only consists of
/// ASCII letters, digits, and hyphens. Leading zeroes are allowed.
///
/// ## Examples
///
/// ```rust
/// use sem_ver::identifier::is_valid_build;
///
/// assert!(is_valid_build("0042"));
/// assert!(is_valid_build("exp-sha-5114f85"));
/// assert!(!is_valid_build("dafj^"));
/// ```
pub fn is_valid_build(s: &str) -> bool {
    s.bytes().all(is_identifier_byte)
}

#[inline]
fn is_identifier_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-'
}
