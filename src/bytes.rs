use crate::error::{DistributorError, Result};
use alloy_primitives::U256;
use std::cmp::Ordering;

pub type Bytes32 = [u8; 32];
pub type HexString = String;

pub fn hex_to_bytes32(s: &str) -> Result<Bytes32> {
    let s = s.strip_prefix("0x").unwrap_or(s);
    let bytes = hex::decode(s).map_err(|e| DistributorError::HexDecode(e.to_string()))?;
    if bytes.len() != 32 {
        return Err(DistributorError::InvalidNodeLength);
    }
    let mut arr = [0u8; 32];
    arr.copy_from_slice(&bytes);
    Ok(arr)
}

#[must_use]
pub fn bytes32_to_hex(bytes: &Bytes32) -> HexString {
    format!("0x{}", hex::encode(bytes))
}

/// Minimal-width lowercase hex for amounts and totals, `0x0` for zero.
///
/// Digests keep their full 32-byte width; this formatting is only for
/// unsigned integer values in the distribution artifact.
#[must_use]
pub fn u256_to_hex(value: &U256) -> HexString {
    let full = hex::encode(value.to_be_bytes::<32>());
    let digits = full.trim_start_matches('0');
    if digits.is_empty() {
        "0x0".to_string()
    } else {
        format!("0x{digits}")
    }
}

/// Parses an unsigned 256-bit amount from a `0x`-prefixed hex or decimal
/// string. Anything else is a fatal boundary error, never coerced.
pub fn parse_u256(s: &str) -> Result<U256> {
    let s = s.trim();
    if let Some(hex_str) = s.strip_prefix("0x") {
        U256::from_str_radix(hex_str, 16)
            .map_err(|e| DistributorError::InvalidAmount(format!("invalid hex amount: {e}")))
    } else {
        U256::from_str_radix(s, 10)
            .map_err(|e| DistributorError::InvalidAmount(format!("invalid amount: {e}")))
    }
}

/// The canonical digest ordering: big-endian unsigned byte-wise comparison.
///
/// Used both for sorting the leaf layer and for ordering siblings before
/// concatenation, so construction and verification can never disagree.
#[must_use]
pub fn compare_bytes32(a: &Bytes32, b: &Bytes32) -> Ordering {
    for i in 0..32 {
        match a[i].cmp(&b[i]) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    Ordering::Equal
}

/// Concatenates two digests with the smaller one first per [`compare_bytes32`].
#[must_use]
pub fn concat_sorted(a: &Bytes32, b: &Bytes32) -> Vec<u8> {
    let mut result = Vec::with_capacity(64);
    if compare_bytes32(a, b) == Ordering::Less {
        result.extend_from_slice(a);
        result.extend_from_slice(b);
    } else {
        result.extend_from_slice(b);
        result.extend_from_slice(a);
    }
    result
}
