//! Random string generation for deployment secrets and API keys.

use rand::distributions::Alphanumeric;
use rand::Rng;

/// Length of generated component secrets.
pub const SECRET_LEN: usize = 64;

/// Length of generated administrator API keys.
pub const API_KEY_LEN: usize = 64;

/// Generate a random alphanumeric string.
pub fn random_string(length: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_requested_length() {
        assert_eq!(random_string(SECRET_LEN).len(), SECRET_LEN);
        assert_eq!(random_string(0).len(), 0);
    }

    #[test]
    fn output_is_alphanumeric() {
        let s = random_string(128);
        assert!(s.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn successive_values_differ() {
        assert_ne!(random_string(32), random_string(32));
    }
}
