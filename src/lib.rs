//! # claimtree
//!
//! Merkle tree construction and proof generation for claimable token airdrop
//! distributions.
//!
//! Given an ordered mapping from account to entitled amount, `claimtree`
//! builds a binary Merkle tree over packed-encoded claim records and produces
//! for every account a proof path against the single root. The resulting
//! [`Distribution`] artifact is the trust anchor for an on-chain claim
//! verifier, which recomputes the leaf from `(index, account, amount)` and
//! walks the proof with the same order-independent pairing rule.
//!
//! ## Features
//!
//! - Packed ABI leaf encoding `(uint256, address, uint256)`, Keccak-256 hashed
//! - Deterministic tree construction over a sorted, distinct leaf set
//! - Per-account proof generation and stateless proof verification
//! - JSON artifact with root, exact token total and every claim
//!
//! ## Example
//!
//! ```rust
//! use alloy_primitives::{Address, U256};
//! use claimtree::build_distribution;
//!
//! let balances: Vec<(Address, U256)> = vec![
//!     ("0x1111111111111111111111111111111111111111".parse().unwrap(), U256::from(100u64)),
//!     ("0x2222222222222222222222222222222222222222".parse().unwrap(), U256::from(200u64)),
//! ];
//!
//! let distribution = build_distribution(&balances).unwrap();
//! assert!(distribution.validate().is_ok());
//! ```

#![deny(unsafe_code)]
#![allow(clippy::module_name_repetitions)]

pub mod bytes;
pub mod distribution;
pub mod error;
pub mod hashes;
pub mod leaf;
pub mod tree;

pub use bytes::{
    bytes32_to_hex, compare_bytes32, concat_sorted, hex_to_bytes32, parse_u256, u256_to_hex,
    Bytes32, HexString,
};
pub use distribution::{build_distribution, Claim, Distribution};
pub use error::{DistributorError, Result};
pub use hashes::{combine, keccak256};
pub use leaf::ClaimRecord;
pub use tree::{verify_proof, MerkleTree};
