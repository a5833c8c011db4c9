use crate::bytes::{bytes32_to_hex, compare_bytes32, Bytes32};
use crate::error::{DistributorError, Result};
use crate::hashes::combine;

/// Binary Merkle tree over a distinct, ascending-sorted set of leaf digests.
///
/// Layer 0 is the sorted leaf set; each layer above pairs neighbours with
/// [`combine`], carrying an unpaired tail element upward unchanged, until a
/// single digest (the root) remains. Built once from a finalized leaf set and
/// never mutated.
#[derive(Debug)]
pub struct MerkleTree {
    elements: Vec<Bytes32>,
    layers: Vec<Vec<Bytes32>>,
}

impl MerkleTree {
    /// Builds a tree from leaf digests.
    ///
    /// Leaves are sorted with the same byte-wise ordering used for sibling
    /// concatenation. Equal digests are rejected rather than collapsed: a
    /// collision between two distinct claim records would silently drop one
    /// of the claims, so it must surface here.
    pub fn new(mut leaves: Vec<Bytes32>) -> Result<Self> {
        if leaves.is_empty() {
            return Err(DistributorError::EmptyLeaves);
        }

        leaves.sort_by(|a, b| compare_bytes32(a, b));
        for pair in leaves.windows(2) {
            if pair[0] == pair[1] {
                return Err(DistributorError::DuplicateLeaf(bytes32_to_hex(&pair[0])));
            }
        }

        let mut layers = vec![leaves.clone()];
        while layers[layers.len() - 1].len() > 1 {
            let next = next_layer(&layers[layers.len() - 1]);
            layers.push(next);
        }

        Ok(Self {
            elements: leaves,
            layers,
        })
    }

    #[must_use]
    pub fn root(&self) -> Bytes32 {
        self.layers[self.layers.len() - 1][0]
    }

    /// Sorted distinct leaf digests (layer 0).
    #[must_use]
    pub fn elements(&self) -> &[Bytes32] {
        &self.elements
    }

    /// All layers, leaves first, single-element root layer last.
    #[must_use]
    pub fn layers(&self) -> &[Vec<Bytes32>] {
        &self.layers
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Sibling digests from the leaf layer upward for the given leaf.
    ///
    /// At a layer where the element has no sibling (the carried tail of an
    /// odd layer) nothing is appended. Asking for a digest that is not in the
    /// tree signals a logic error in the caller and fails with
    /// [`DistributorError::LeafNotInTree`].
    pub fn proof(&self, leaf: &Bytes32) -> Result<Vec<Bytes32>> {
        let mut idx = self
            .elements
            .binary_search_by(|el| compare_bytes32(el, leaf))
            .map_err(|_| DistributorError::LeafNotInTree)?;

        let mut proof = Vec::new();
        for layer in &self.layers {
            let sibling = if idx % 2 == 0 { idx + 1 } else { idx - 1 };
            if sibling < layer.len() {
                proof.push(layer[sibling]);
            }
            idx /= 2;
        }
        Ok(proof)
    }
}

fn next_layer(elements: &[Bytes32]) -> Vec<Bytes32> {
    elements
        .chunks(2)
        .map(|pair| {
            if pair.len() == 2 {
                combine(&pair[0], &pair[1])
            } else {
                pair[0]
            }
        })
        .collect()
}

/// Recomputes the root from a leaf digest and its proof.
///
/// The dual of construction: folds [`combine`] over the siblings in order and
/// compares the result against `root`. A mismatch is the expected `false`,
/// never an error; policy belongs to the caller.
#[must_use]
pub fn verify_proof(root: &Bytes32, leaf: &Bytes32, proof: &[Bytes32]) -> bool {
    let mut current = *leaf;
    for sibling in proof {
        current = combine(&current, sibling);
    }
    current == *root
}
