//! Receipt ids for contact submissions.
//!
//! Non-cryptographic, display-only. Nine lowercase base-36 characters, the
//! same shape visitors were shown before.

/// Length of a receipt id.
pub const RECEIPT_ID_LEN: usize = 9;

const ALPHABET: [char; 36] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i',
    'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// Fresh receipt id.
pub fn receipt_id() -> String {
    nanoid::nanoid!(RECEIPT_ID_LEN, &ALPHABET)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn receipt_ids_are_base36() {
        let id = receipt_id();
        assert_eq!(id.len(), RECEIPT_ID_LEN);
        assert!(id.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[test]
    fn receipt_ids_do_not_repeat() {
        let first = receipt_id();
        let second = receipt_id();
        assert_ne!(first, second);
    }
}
