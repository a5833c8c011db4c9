use crate::bytes::{bytes32_to_hex, hex_to_bytes32, parse_u256, u256_to_hex, Bytes32, HexString};
use crate::error::{invariant, validate_argument, DistributorError, Result};
use crate::leaf::ClaimRecord;
use crate::tree::{verify_proof, MerkleTree};
use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::io::{Read, Write};

/// One account's entry in the distribution artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claim {
    pub index: u64,
    pub amount: HexString,
    pub proof: Vec<HexString>,
}

/// The complete artifact for one token's airdrop: the Merkle root, the exact
/// sum of all amounts and every account's claim with its proof path.
///
/// This is a wire format consumed verbatim by the on-chain claim verifier:
/// field names, lowercase `0x` hex, full-width digests and minimal-width
/// amounts all matter. Claims are keyed by checksummed account address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Distribution {
    pub merkle_root: HexString,
    pub token_total: HexString,
    pub claims: BTreeMap<String, Claim>,
}

/// Builds the distribution for one token from an ordered `(account, amount)`
/// sequence.
///
/// Input order is preserved as each claim's `index`, so the same mapping
/// always produces the same artifact. Duplicate accounts and an overflowing
/// total are rejected; a digest collision between distinct records surfaces
/// as [`DistributorError::DuplicateLeaf`] from tree construction.
pub fn build_distribution(balances: &[(Address, U256)]) -> Result<Distribution> {
    validate_argument(!balances.is_empty(), "Expected non-zero number of balances")?;

    let mut records = Vec::with_capacity(balances.len());
    let mut seen = HashSet::with_capacity(balances.len());
    let mut total = U256::ZERO;

    for (index, (account, amount)) in balances.iter().enumerate() {
        if !seen.insert(*account) {
            return Err(DistributorError::DuplicateAccount(account.to_string()));
        }
        total = total
            .checked_add(*amount)
            .ok_or(DistributorError::AmountOverflow)?;
        records.push(ClaimRecord::new(index as u64, *account, *amount));
    }

    let digests: Vec<Bytes32> = records.iter().map(ClaimRecord::digest).collect();
    let tree = MerkleTree::new(digests.clone())?;

    let mut claims = BTreeMap::new();
    for (record, digest) in records.iter().zip(&digests) {
        let proof = tree.proof(digest)?;
        claims.insert(
            record.account.to_string(),
            Claim {
                index: record.index,
                amount: u256_to_hex(&record.amount),
                proof: proof.iter().map(bytes32_to_hex).collect(),
            },
        );
    }

    Ok(Distribution {
        merkle_root: bytes32_to_hex(&tree.root()),
        token_total: u256_to_hex(&total),
        claims,
    })
}

impl Distribution {
    /// Looks up the claim for an account, if it is part of the distribution.
    #[must_use]
    pub fn claim(&self, account: &Address) -> Option<&Claim> {
        self.claims.get(&account.to_string())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.claims.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }

    /// Re-derives every leaf digest from its claim fields, checks its proof
    /// against the stored root and re-checks the total.
    ///
    /// Run after loading an artifact from disk; a tampered or truncated file
    /// fails here instead of producing claims that the on-chain verifier
    /// would reject later.
    pub fn validate(&self) -> Result<()> {
        let root = hex_to_bytes32(&self.merkle_root)?;
        let mut total = U256::ZERO;

        for (account_str, claim) in &self.claims {
            let account: Address = account_str
                .parse()
                .map_err(|e| DistributorError::InvalidAddress(format!("{account_str}: {e}")))?;
            let amount = parse_u256(&claim.amount)?;
            total = total
                .checked_add(amount)
                .ok_or(DistributorError::AmountOverflow)?;

            let digest = ClaimRecord::new(claim.index, account, amount).digest();
            let proof = claim
                .proof
                .iter()
                .map(|p| hex_to_bytes32(p))
                .collect::<Result<Vec<_>>>()?;
            invariant(
                verify_proof(&root, &digest, &proof),
                format!("Claim for {account_str} does not verify against the root"),
            )?;
        }

        invariant(
            u256_to_hex(&total) == self.token_total,
            "Token total does not match the sum of claim amounts",
        )?;
        Ok(())
    }

    pub fn to_writer<W: Write>(&self, writer: W) -> Result<()> {
        serde_json::to_writer_pretty(writer, self).map_err(|e| DistributorError::Json(e.to_string()))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        serde_json::from_reader(reader).map_err(|e| DistributorError::Json(e.to_string()))
    }
}
