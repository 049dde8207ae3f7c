use anchor_lang::prelude::*;

/// Custom error codes for the vested airdrop program.
#[error_code]
pub enum AirdropError {
    #[msg("Only owner can call this function")]
    OnlyOwner,

    #[msg("Claiming is not available yet")]
    ClaimingNotAvailable,

    #[msg("Nothing to claim")]
    NothingToClaim,

    #[msg("Invalid merkle proof")]
    InvalidProof,

    #[msg("Claim account belongs to another claimant")]
    ClaimantMismatch,

    #[msg("Invalid public key")]
    InvalidPubkey,

    #[msg("Invalid timestamp")]
    InvalidTimestamp,

    #[msg("Invalid amount (must be > 0)")]
    InvalidAmount,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Insufficient vault balance")]
    InsufficientVaultBalance,

    #[msg("Math overflow")]
    MathOverflow,
}
