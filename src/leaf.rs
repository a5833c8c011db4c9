use crate::bytes::Bytes32;
use crate::hashes::keccak256;
use alloy_primitives::{Address, U256};
use alloy_sol_types::SolValue;

/// One row of a distribution: the positional index assigned by input order,
/// the claiming account and the amount it is entitled to.
///
/// Immutable once assigned; the index must match the order exposed in the
/// output artifact, since the on-chain verifier hashes all three fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimRecord {
    pub index: u64,
    pub account: Address,
    pub amount: U256,
}

impl ClaimRecord {
    #[must_use]
    pub fn new(index: u64, account: Address, amount: U256) -> Self {
        Self {
            index,
            account,
            amount,
        }
    }

    /// Packed ABI encoding of `(uint256 index, address account, uint256 amount)`.
    ///
    /// Packed mode keeps integers at their declared 32-byte width; only the
    /// address drops to its natural 20 bytes, giving an 84-byte payload.
    #[must_use]
    pub fn payload(&self) -> Vec<u8> {
        (U256::from(self.index), self.account, self.amount).abi_encode_packed()
    }

    /// Keccak-256 of the packed payload.
    ///
    /// This is the leaf value the claim verifier recomputes from
    /// `(index, account, amount)` before walking the proof.
    #[must_use]
    pub fn digest(&self) -> Bytes32 {
        keccak256(&self.payload())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(byte: u8) -> Address {
        Address::from([byte; 20])
    }

    #[test]
    fn test_payload_length() {
        let record = ClaimRecord::new(0, account(0x11), U256::from(100u64));
        assert_eq!(record.payload().len(), 84);
    }

    #[test]
    fn test_payload_layout() {
        let record = ClaimRecord::new(7, account(0x11), U256::from(100u64));
        let payload = record.payload();

        assert_eq!(&payload[..32], U256::from(7u64).to_be_bytes::<32>());
        assert_eq!(&payload[32..52], record.account.as_slice());
        assert_eq!(&payload[52..84], U256::from(100u64).to_be_bytes::<32>());
    }

    #[test]
    fn test_digest_deterministic() {
        let a = ClaimRecord::new(1, account(0x22), U256::from(250u64));
        let b = ClaimRecord::new(1, account(0x22), U256::from(250u64));
        assert_eq!(a.digest(), b.digest());
    }

    #[test]
    fn test_digest_changes_with_index() {
        let a = ClaimRecord::new(0, account(0x22), U256::from(250u64));
        let b = ClaimRecord::new(1, account(0x22), U256::from(250u64));
        assert_ne!(a.digest(), b.digest());
    }

    #[test]
    fn test_digest_changes_with_account() {
        let a = ClaimRecord::new(0, account(0x22), U256::from(250u64));
        let b = ClaimRecord::new(0, account(0x23), U256::from(250u64));
        assert_ne!(a.digest(), b.digest());
    }

    #[test]
    fn test_digest_changes_with_amount() {
        let a = ClaimRecord::new(0, account(0x22), U256::from(250u64));
        let b = ClaimRecord::new(0, account(0x22), U256::from(251u64));
        assert_ne!(a.digest(), b.digest());
    }

    #[test]
    fn test_digest_is_keccak_of_payload() {
        let record = ClaimRecord::new(3, account(0x44), U256::from(42u64));
        assert_eq!(record.digest(), keccak256(&record.payload()));
    }
}
