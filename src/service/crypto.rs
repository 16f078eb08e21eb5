use sha3::{Digest, Sha3_256};

/// Unsalted SHA3-256 of the password, as 64 uppercase hex characters.
pub fn get_sha3_256_hash(data: &str) -> String {
    let mut hasher = Sha3_256::default();
    hasher.update(data.as_bytes());
    format!("{:X}", hasher.finalize())
}

pub fn matches_hash(password: &str, stored_hash: &str) -> bool {
    get_sha3_256_hash(password) == stored_hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_is_fixed_length_hex() {
        for input in ["", "secret", "a much longer passphrase with spaces"] {
            let hash = get_sha3_256_hash(input);
            assert_eq!(hash.len(), 64);
            assert!(hash.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_lowercase()));
        }
    }

    #[test]
    fn known_digest_of_empty_string() {
        assert_eq!(
            get_sha3_256_hash(""),
            "A7FFC6F8BF1ED76651C14756A061D662F580FF4DE43B49FA82D80A4B80F8434A"
        );
    }

    #[test]
    fn matches_only_the_same_password() {
        let stored = get_sha3_256_hash("secret");
        assert!(matches_hash("secret", &stored));
        assert!(!matches_hash("Secret", &stored));
    }
}
