//! Allocation merkle tree over blake3.
//!
//! Leaves commit to `(claimant, amount)`; inner nodes hash the sorted pair of
//! children, so a proof is just the list of siblings from leaf to root.

use anchor_lang::prelude::Pubkey;
use bytemuck::{Pod, Zeroable};

const LEAF_PREFIX: &[u8] = &[0];
const NODE_PREFIX: &[u8] = &[1];

/// Fixed byte layout of a leaf preimage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Pod, Zeroable)]
#[repr(C)]
pub struct ClaimLeaf {
    pub claimant: [u8; 32],
    /// Little-endian allocation in base units.
    pub amount: [u8; 8],
}

impl ClaimLeaf {
    pub fn new(claimant: &Pubkey, amount: u64) -> Self {
        Self {
            claimant: claimant.to_bytes(),
            amount: amount.to_le_bytes(),
        }
    }

    pub fn hash(&self) -> [u8; 32] {
        let mut hasher = blake3::Hasher::new();
        hasher.update(LEAF_PREFIX);
        hasher.update(bytemuck::bytes_of(self));
        hasher.finalize().into()
    }
}

pub fn leaf_hash(claimant: &Pubkey, amount: u64) -> [u8; 32] {
    ClaimLeaf::new(claimant, amount).hash()
}

pub fn hash_pair(a: &[u8; 32], b: &[u8; 32]) -> [u8; 32] {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    let mut hasher = blake3::Hasher::new();
    hasher.update(NODE_PREFIX);
    hasher.update(lo);
    hasher.update(hi);
    hasher.finalize().into()
}

pub fn verify(proof: &[[u8; 32]], root: &[u8; 32], leaf: [u8; 32]) -> bool {
    let computed = proof
        .iter()
        .fold(leaf, |node, sibling| hash_pair(&node, sibling));
    computed == *root
}

/// Off-chain tree builder used by the distribution tooling.
#[cfg(not(target_os = "solana"))]
#[derive(Clone, Debug)]
pub struct MerkleTree {
    /// levels[0] are the leaves, the last level holds the root.
    levels: Vec<Vec<[u8; 32]>>,
}

#[cfg(not(target_os = "solana"))]
impl MerkleTree {
    pub fn new(leaves: Vec<[u8; 32]>) -> Self {
        let mut levels = Vec::new();
        let mut current = leaves;
        while current.len() > 1 {
            let next = current
                .chunks(2)
                .map(|pair| match pair.get(1) {
                    Some(right) => hash_pair(&pair[0], right),
                    // odd node is promoted unchanged
                    None => pair[0],
                })
                .collect();
            levels.push(current);
            current = next;
        }
        levels.push(current);
        Self { levels }
    }

    pub fn from_allocations(allocations: &[(Pubkey, u64)]) -> Self {
        Self::new(
            allocations
                .iter()
                .map(|(claimant, amount)| leaf_hash(claimant, *amount))
                .collect(),
        )
    }

    /// Root of the tree; all zeroes for an empty tree.
    pub fn root(&self) -> [u8; 32] {
        self.levels
            .last()
            .and_then(|l| l.first())
            .copied()
            .unwrap_or([0u8; 32])
    }

    pub fn proof(&self, mut index: usize) -> Option<Vec<[u8; 32]>> {
        if index >= self.levels.first()?.len() {
            return None;
        }
        let mut proof = Vec::new();
        for level in &self.levels[..self.levels.len() - 1] {
            let sibling = index ^ 1;
            if let Some(node) = level.get(sibling) {
                proof.push(*node);
            }
            index /= 2;
        }
        Some(proof)
    }
}
