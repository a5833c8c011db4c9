use crate::bytes::{concat_sorted, Bytes32};
use sha3::{Digest, Keccak256};

#[must_use]
pub fn keccak256(data: &[u8]) -> Bytes32 {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut output = [0u8; 32];
    output.copy_from_slice(&result);
    output
}

/// Parent hash of two sibling digests.
///
/// The children are concatenated in ascending order before hashing, so the
/// operation is commutative and a verifier never needs to know which side of
/// the pair its leaf was on. The carried-forward element of an odd layer is
/// never passed through here; it moves up unchanged.
#[must_use]
pub fn combine(a: &Bytes32, b: &Bytes32) -> Bytes32 {
    keccak256(&concat_sorted(a, b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bytes::bytes32_to_hex;

    #[test]
    fn test_keccak256_known_value() {
        let input = b"hello";
        let hash = keccak256(input);
        let hex = bytes32_to_hex(&hash);
        assert_eq!(
            hex,
            "0x1c8aff950685c2ed4bc3174f3472287b56d9517b9c948127319a09a7a36deac8"
        );
    }

    #[test]
    fn test_keccak256_empty() {
        let input = b"";
        let hash = keccak256(input);
        let hex = bytes32_to_hex(&hash);
        assert_eq!(
            hex,
            "0xc5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
    }

    #[test]
    fn test_combine_commutative() {
        let a = [1u8; 32];
        let b = [2u8; 32];

        assert_eq!(combine(&a, &b), combine(&b, &a));
    }

    #[test]
    fn test_combine_matches_sorted_concat() {
        let mut a = [0u8; 32];
        let mut b = [0u8; 32];
        a[0] = 9;
        b[0] = 3;

        assert_eq!(combine(&a, &b), keccak256(&concat_sorted(&a, &b)));
    }

    #[test]
    fn test_combine_sensitive_to_input() {
        let a = [1u8; 32];
        let b = [2u8; 32];
        let c = [3u8; 32];

        assert_ne!(combine(&a, &b), combine(&a, &c));
    }
}
