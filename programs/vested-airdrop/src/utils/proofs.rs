//! Distribution file produced by the allocation script and consumed by
//! clients to build `claim` instructions.
//!
//! ```json
//! { "merkle_root": "0x..", "data": [ { "address": "<base58>", "quantity": 1000, "proof": ["0x.."] } ] }
//! ```

use std::path::Path;
use std::str::FromStr;

use anchor_lang::prelude::Pubkey;
use serde::{Deserialize, Serialize};

use super::merkle::MerkleTree;

#[derive(Debug, thiserror::Error)]
pub enum ProofsError {
    #[error("failed to read proofs file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed proofs json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid hex node: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("hash must be 32 bytes, got {0}")]
    HashLength(usize),

    #[error("invalid claimant address: {0}")]
    InvalidAddress(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerkleProofs {
    pub merkle_root: String,
    pub data: Vec<ProofEntry>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofEntry {
    pub address: String,
    pub quantity: u64,
    pub proof: Vec<String>,
}

/// A decoded entry, ready to be passed to `claim`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Allocation {
    pub claimant: Pubkey,
    pub amount: u64,
    pub proof: Vec<[u8; 32]>,
}

pub fn load_merkle_proofs(path: impl AsRef<Path>) -> Result<MerkleProofs, ProofsError> {
    let raw = std::fs::read_to_string(path)?;
    parse_merkle_proofs(&raw)
}

pub fn parse_merkle_proofs(raw: &str) -> Result<MerkleProofs, ProofsError> {
    Ok(serde_json::from_str(raw)?)
}

impl MerkleProofs {
    pub fn from_allocations(allocations: &[(Pubkey, u64)]) -> Self {
        let tree = MerkleTree::from_allocations(allocations);
        let data = allocations
            .iter()
            .enumerate()
            .map(|(i, (claimant, amount))| ProofEntry {
                address: claimant.to_string(),
                quantity: *amount,
                proof: tree
                    .proof(i)
                    .unwrap_or_default()
                    .iter()
                    .map(encode_hash)
                    .collect(),
            })
            .collect();
        Self {
            merkle_root: encode_hash(&tree.root()),
            data,
        }
    }

    pub fn root(&self) -> Result<[u8; 32], ProofsError> {
        decode_hash(&self.merkle_root)
    }

    pub fn allocation(&self, index: usize) -> Option<Result<Allocation, ProofsError>> {
        self.data.get(index).map(ProofEntry::decode)
    }

    pub fn to_json(&self) -> Result<String, ProofsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl ProofEntry {
    pub fn decode(&self) -> Result<Allocation, ProofsError> {
        let claimant = Pubkey::from_str(&self.address)
            .map_err(|_| ProofsError::InvalidAddress(self.address.clone()))?;
        let proof = self
            .proof
            .iter()
            .map(|node| decode_hash(node))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Allocation {
            claimant,
            amount: self.quantity,
            proof,
        })
    }
}

pub fn encode_hash(hash: &[u8; 32]) -> String {
    format!("0x{}", hex::encode(hash))
}

/// Accepts hashes with or without the `0x` prefix.
pub fn decode_hash(s: &str) -> Result<[u8; 32], ProofsError> {
    let digits = s.strip_prefix("0x").unwrap_or(s);
    let bytes = hex::decode(digits)?;
    let len = bytes.len();
    bytes.try_into().map_err(|_| ProofsError::HashLength(len))
}
