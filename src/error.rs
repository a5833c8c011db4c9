use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DistributorError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invariant violation: {0}")]
    Invariant(String),

    #[error("Expected non-zero number of leaves")]
    EmptyLeaves,

    #[error("Duplicate leaf digest {0}")]
    DuplicateLeaf(String),

    #[error("Duplicate account {0}")]
    DuplicateAccount(String),

    #[error("Leaf is not in tree")]
    LeafNotInTree,

    #[error("Token total overflows uint256")]
    AmountOverflow,

    #[error("Merkle tree nodes must be 32 bytes")]
    InvalidNodeLength,

    #[error("Hex decode error: {0}")]
    HexDecode(String),

    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("JSON error: {0}")]
    Json(String),
}

pub type Result<T> = std::result::Result<T, DistributorError>;

#[inline]
pub fn validate_argument<T: AsRef<str>>(condition: bool, message: T) -> Result<()> {
    if !condition {
        Err(DistributorError::InvalidArgument(
            message.as_ref().to_string(),
        ))
    } else {
        Ok(())
    }
}

#[inline]
pub fn invariant<T: AsRef<str>>(condition: bool, message: T) -> Result<()> {
    if !condition {
        Err(DistributorError::Invariant(message.as_ref().to_string()))
    } else {
        Ok(())
    }
}
