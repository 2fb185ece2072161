//! Helpers for keeping credentials out of logs

/// Mask an email address for logging
///
/// Keeps the first character of the local part and the whole domain.
///
/// # Example
///
/// ```
/// use nf_shared::masking::mask_email;
/// assert_eq!(mask_email("alice@example.com"), "a****@example.com");
/// ```
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => {
            let mut chars = local.chars();
            match chars.next() {
                Some(first) => format!("{}{}@{}", first, "*".repeat(chars.count()), domain),
                None => format!("@{}", domain),
            }
        }
        None => "*".repeat(email.chars().count()),
    }
}

/// Mask an opaque token for logging, keeping only its last four characters
///
/// # Example
///
/// ```
/// use nf_shared::masking::mask_token;
/// assert_eq!(mask_token("abcdefghijkl"), "********ijkl");
/// assert_eq!(mask_token("abc"), "***");
/// ```
pub fn mask_token(token: &str) -> String {
    let len = token.chars().count();
    if len <= 4 {
        return "*".repeat(len);
    }
    let tail: String = token.chars().skip(len - 4).collect();
    format!("{}{}", "*".repeat(len - 4), tail)
}
