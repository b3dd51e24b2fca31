use super::models::TaskId;
use rand::Rng;

const SUFFIX_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const SUFFIX_LEN: usize = 9;

/// Builds an id from the creation time and a random base-36 suffix.
///
/// Collisions are not checked; two ids minted in the same millisecond would
/// also need identical nine-character suffixes to clash.
pub fn generate_id(now_millis: i64) -> TaskId {
    let mut rng = rand::rng();
    let suffix: String = (0..SUFFIX_LEN)
        .map(|_| {
            let idx = rng.random_range(0..SUFFIX_ALPHABET.len());
            SUFFIX_ALPHABET[idx] as char
        })
        .collect();

    TaskId::new(format!("{}{}", now_millis, suffix))
}
