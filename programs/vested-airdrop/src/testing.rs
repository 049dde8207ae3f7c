//! In-process deployment of a token + airdrop pair for scenario tests.
//!
//! Drives `AirdropState` exactly like the instruction handlers do, with a
//! plain balance map standing in for the SPL token program and a settable
//! clock standing in for the `Clock` sysvar.

use std::collections::HashMap;
use std::path::PathBuf;

use anchor_lang::prelude::Pubkey;

use crate::error::AirdropError;
use crate::state::{AirdropState, ClaimStatus};
use crate::utils::proofs::MerkleProofs;
use crate::utils::units;

pub const TOKEN_DECIMALS: u8 = 9;

/// Deployment time of every fixture (2026-01-01 00:00:00 UTC).
pub const DEPLOY_TIME: i64 = 1_767_225_600;

pub struct Token {
    pub name: String,
    pub mint: Pubkey,
    pub decimals: u8,
    balances: HashMap<Pubkey, u64>,
}

impl Token {
    pub fn balance_of(&self, owner: &Pubkey) -> u64 {
        self.balances.get(owner).copied().unwrap_or(0)
    }

    fn mint_to(&mut self, to: Pubkey, amount: u64) {
        *self.balances.entry(to).or_insert(0) += amount;
    }

    fn transfer(&mut self, from: Pubkey, to: Pubkey, amount: u64) -> Result<(), AirdropError> {
        let balance = self.balance_of(&from);
        if balance < amount {
            return Err(AirdropError::InsufficientVaultBalance);
        }
        self.balances.insert(from, balance - amount);
        self.mint_to(to, amount);
        Ok(())
    }
}

pub struct Airdrop {
    /// Airdrop PDA address; also the authority of the vault balance.
    pub address: Pubkey,
    pub state: AirdropState,
    claims: HashMap<Pubkey, ClaimStatus>,
}

pub struct VestingSystem {
    pub token: Token,
    pub airdrop: Airdrop,
    pub owner: Pubkey,
    pub proofs_path: PathBuf,
    now: i64,
}

impl VestingSystem {
    pub fn warp(&mut self, timestamp: i64) {
        self.now = timestamp;
    }

    pub fn block_timestamp(&self) -> i64 {
        self.now
    }

    pub fn claim(
        &mut self,
        claimant: Pubkey,
        amount: u64,
        proof: &[[u8; 32]],
    ) -> Result<u64, AirdropError> {
        let address = self.airdrop.address;
        let mut status = self
            .airdrop
            .claims
            .get(&claimant)
            .cloned()
            .unwrap_or_default();
        if status.is_fresh() {
            status.bind(address, claimant, 255);
        }

        // Work on copies so a failing claim leaves no trace.
        let mut state = self.airdrop.state.clone();
        let claimable = state.process_claim(&mut status, claimant, amount, proof, self.now)?;
        self.token.transfer(address, claimant, claimable)?;

        self.airdrop.state = state;
        self.airdrop.claims.insert(claimant, status);
        Ok(claimable)
    }

    pub fn claimable_amount(&self, claimant: Pubkey, amount: u64) -> Result<u64, AirdropError> {
        let claimed = match self.airdrop.claims.get(&claimant) {
            Some(status) => status.claimed_by(&claimant)?,
            None => 0,
        };
        self.airdrop.state.claimable(amount, claimed, self.now)
    }

    pub fn set_merkle_root(&mut self, caller: Pubkey, root: [u8; 32]) -> Result<(), AirdropError> {
        self.airdrop.state.set_merkle_root(&caller, root)?;
        Ok(())
    }

    pub fn rescue_tokens(&mut self, caller: Pubkey, amount: u64) -> Result<(), AirdropError> {
        self.airdrop.state.check_rescue(&caller, amount)?;
        let owner = self.airdrop.state.owner;
        self.token.transfer(self.airdrop.address, owner, amount)
    }

    pub fn transfer_ownership(&mut self, caller: Pubkey, new_owner: Pubkey) -> Result<(), AirdropError> {
        let address = self.airdrop.address;
        self.airdrop
            .state
            .transfer_ownership(&caller, new_owner, &address)?;
        Ok(())
    }
}

impl Drop for VestingSystem {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.proofs_path);
    }
}

/// Allocations of the fixture distribution, in whole tokens.
pub fn fixture_allocations() -> Vec<(Pubkey, u64)> {
    [1_000u64, 2_500, 333, 10_000, 42]
        .iter()
        .map(|tokens| {
            (
                Pubkey::new_unique(),
                units::to_base_units(*tokens, TOKEN_DECIMALS).unwrap(),
            )
        })
        .collect()
}

/// Creates the token, builds the distribution, writes its proofs file and
/// funds the airdrop with the distribution plus a spare 1_000_000 tokens.
pub fn deploy() -> VestingSystem {
    let allocations = fixture_allocations();
    let proofs = MerkleProofs::from_allocations(&allocations);

    let mint = Pubkey::new_unique();
    let owner = Pubkey::new_unique();
    let (address, bump) =
        Pubkey::find_program_address(&[crate::constants::AIRDROP_SEED, mint.as_ref()], &crate::ID);

    let proofs_path = std::env::temp_dir().join(format!("merkle_proofs_{mint}.json"));
    std::fs::write(&proofs_path, proofs.to_json().unwrap()).unwrap();

    let mut token = Token {
        name: "Token".to_string(),
        mint,
        decimals: TOKEN_DECIMALS,
        balances: HashMap::new(),
    };
    let distributed: u64 = allocations.iter().map(|(_, amount)| amount).sum();
    let spare = units::to_base_units(1_000_000, TOKEN_DECIMALS).unwrap();
    token.mint_to(address, distributed + spare);

    let state = AirdropState {
        owner,
        mint,
        vault: address,
        merkle_root: proofs.root().unwrap(),
        vesting_start_time: DEPLOY_TIME,
        total_claimed: 0,
        bump,
        vault_bump: bump,
    };

    VestingSystem {
        token,
        airdrop: Airdrop {
            address,
            state,
            claims: HashMap::new(),
        },
        owner,
        proofs_path,
        now: DEPLOY_TIME,
    }
}

/// Fixture handed to every scenario.
pub fn vesting_system() -> VestingSystem {
    deploy()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{NINETY_DAYS, ONE_DAY, SIXTY_DAYS, THIRTY_DAYS};
    use crate::utils::proofs::{load_merkle_proofs, Allocation};

    /// Fixture plus the first entry of the proofs file.
    fn setup() -> (VestingSystem, Allocation) {
        let system = vesting_system();
        let proofs = load_merkle_proofs(&system.proofs_path).unwrap();
        let user1 = proofs.allocation(0).unwrap().unwrap();
        (system, user1)
    }

    fn tge(amount: u64) -> u64 {
        amount * 31 / 100
    }

    fn linear(amount: u64) -> u64 {
        amount * 69 / 100
    }

    #[test]
    fn deploy_returns_a_funded_system() {
        let (s, user1) = setup();
        assert_eq!(s.token.name, "Token");
        assert_eq!(s.airdrop.state.mint, s.token.mint);
        assert_eq!(s.token.decimals, TOKEN_DECIMALS);
        assert_ne!(s.airdrop.state.vesting_start_time, 0);
        assert_eq!(s.airdrop.state.owner, s.owner);
        assert!(s.token.balance_of(&s.airdrop.address) > user1.amount);
        assert_eq!(user1.amount, units::to_base_units(1_000, TOKEN_DECIMALS).unwrap());
    }

    #[test]
    fn set_merkle_root() {
        let (mut s, _) = setup();
        let root: [u8; 32] = blake3::hash(b"HelloEth").into();
        s.set_merkle_root(s.owner, root).unwrap();
        assert_eq!(s.airdrop.state.merkle_root, root);
    }

    #[test]
    fn claim_over_three_periods() {
        let (mut s, u) = setup();

        // only 31% at TGE
        s.claim(u.claimant, u.amount, &u.proof).unwrap();
        assert_eq!(s.token.balance_of(&u.claimant), tge(u.amount));

        assert!(matches!(
            s.claim(u.claimant, u.amount, &u.proof),
            Err(AirdropError::NothingToClaim)
        ));

        s.warp(DEPLOY_TIME + THIRTY_DAYS);
        s.claim(u.claimant, u.amount, &u.proof).unwrap();
        assert_eq!(
            s.token.balance_of(&u.claimant),
            tge(u.amount) + linear(u.amount) * THIRTY_DAYS as u64 / NINETY_DAYS as u64
        );

        s.warp(s.block_timestamp() + THIRTY_DAYS);
        s.claim(u.claimant, u.amount, &u.proof).unwrap();
        assert_eq!(
            s.token.balance_of(&u.claimant),
            tge(u.amount) + linear(u.amount) * 60 / 90
        );

        s.warp(s.block_timestamp() + THIRTY_DAYS);
        s.claim(u.claimant, u.amount, &u.proof).unwrap();
        assert_eq!(s.token.balance_of(&u.claimant), u.amount);

        s.warp(s.block_timestamp() + THIRTY_DAYS);
        assert!(matches!(
            s.claim(u.claimant, u.amount, &u.proof),
            Err(AirdropError::NothingToClaim)
        ));
        assert_eq!(s.airdrop.state.total_claimed, u.amount);
    }

    #[test]
    fn claim_all_after_vesting_end() {
        let (mut s, u) = setup();
        s.warp(DEPLOY_TIME + NINETY_DAYS);
        assert_eq!(s.claim(u.claimant, u.amount, &u.proof).unwrap(), u.amount);
        assert_eq!(s.token.balance_of(&u.claimant), u.amount);

        assert!(matches!(
            s.claim(u.claimant, u.amount, &u.proof),
            Err(AirdropError::NothingToClaim)
        ));
    }

    #[test]
    fn claim_at_irregular_times() {
        let (mut s, u) = setup();
        for days in [1, 11, 23, 25, 832] {
            s.warp(s.block_timestamp() + days * ONE_DAY);
            s.claim(u.claimant, u.amount, &u.proof).unwrap();
        }
        assert_eq!(s.token.balance_of(&u.claimant), u.amount);

        assert!(matches!(
            s.claim(u.claimant, u.amount, &u.proof),
            Err(AirdropError::NothingToClaim)
        ));
    }

    #[test]
    fn cannot_claim_before_start() {
        let (mut s, u) = setup();
        s.warp(0);
        assert!(matches!(
            s.claim(u.claimant, u.amount, &u.proof),
            Err(AirdropError::ClaimingNotAvailable)
        ));
        assert_eq!(s.claimable_amount(u.claimant, u.amount).unwrap(), 0);
        assert_eq!(s.token.balance_of(&u.claimant), 0);
    }

    #[test]
    fn claimable_amount_is_stateless_without_claims() {
        let (mut s, u) = setup();
        assert_eq!(s.claimable_amount(u.claimant, u.amount).unwrap(), tge(u.amount));

        s.warp(DEPLOY_TIME + THIRTY_DAYS);
        assert_eq!(
            s.claimable_amount(u.claimant, u.amount).unwrap(),
            tge(u.amount) + linear(u.amount) * THIRTY_DAYS as u64 / NINETY_DAYS as u64
        );

        s.warp(DEPLOY_TIME + SIXTY_DAYS);
        assert_eq!(
            s.claimable_amount(u.claimant, u.amount).unwrap(),
            tge(u.amount) + linear(u.amount) * SIXTY_DAYS as u64 / NINETY_DAYS as u64
        );

        s.warp(DEPLOY_TIME + NINETY_DAYS);
        assert_eq!(s.claimable_amount(u.claimant, u.amount).unwrap(), u.amount);

        // nothing was claimed, so the full amount stays claimable
        s.warp(DEPLOY_TIME + 4 * THIRTY_DAYS);
        assert_eq!(s.claimable_amount(u.claimant, u.amount).unwrap(), u.amount);
    }

    #[test]
    fn claimable_amount_tracks_claims() {
        let (mut s, u) = setup();
        // 1000 tokens: 69% splits evenly in thirds
        let per_period = linear(u.amount) / 3;
        assert_eq!(per_period * 3, linear(u.amount));

        assert_eq!(s.claimable_amount(u.claimant, u.amount).unwrap(), tge(u.amount));
        s.claim(u.claimant, u.amount, &u.proof).unwrap();
        assert_eq!(s.claimable_amount(u.claimant, u.amount).unwrap(), 0);

        for period in 1..=3u64 {
            s.warp(s.block_timestamp() + THIRTY_DAYS);
            assert_eq!(s.claimable_amount(u.claimant, u.amount).unwrap(), per_period);
            s.claim(u.claimant, u.amount, &u.proof).unwrap();
            assert_eq!(
                s.token.balance_of(&u.claimant),
                tge(u.amount) + per_period * period
            );
        }
        assert_eq!(s.token.balance_of(&u.claimant), u.amount);

        s.warp(s.block_timestamp() + THIRTY_DAYS);
        assert_eq!(s.claimable_amount(u.claimant, u.amount).unwrap(), 0);
        assert!(matches!(
            s.claim(u.claimant, u.amount, &u.proof),
            Err(AirdropError::NothingToClaim)
        ));
    }

    #[test]
    fn claims_are_independent_per_claimant() {
        let (mut s, u) = setup();
        let proofs = load_merkle_proofs(&s.proofs_path).unwrap();
        let u2 = proofs.allocation(1).unwrap().unwrap();

        s.claim(u.claimant, u.amount, &u.proof).unwrap();
        s.claim(u2.claimant, u2.amount, &u2.proof).unwrap();
        assert_eq!(s.token.balance_of(&u2.claimant), tge(u2.amount));
        assert_eq!(s.airdrop.state.total_claimed, tge(u.amount) + tge(u2.amount));

        // someone else's proof does not open user1's allocation
        assert!(matches!(
            s.claim(u.claimant, u2.amount, &u2.proof),
            Err(AirdropError::InvalidProof)
        ));
    }

    #[test]
    fn rotated_root_keeps_claimed_amounts() {
        let (mut s, u) = setup();
        s.claim(u.claimant, u.amount, &u.proof).unwrap();

        let doubled = u.amount * 2;
        let rotated = MerkleProofs::from_allocations(&[
            (u.claimant, doubled),
            (Pubkey::new_unique(), u.amount),
        ]);
        s.set_merkle_root(s.owner, rotated.root().unwrap()).unwrap();
        let entry = rotated.allocation(0).unwrap().unwrap();

        // old proof no longer verifies
        assert!(matches!(
            s.claim(u.claimant, u.amount, &u.proof),
            Err(AirdropError::InvalidProof)
        ));

        let got = s.claim(entry.claimant, entry.amount, &entry.proof).unwrap();
        assert_eq!(got, tge(doubled) - tge(u.amount));
        assert_eq!(s.token.balance_of(&u.claimant), tge(doubled));
    }

    #[test]
    fn rescue_tokens() {
        let (mut s, _) = setup();
        let amount = units::to_base_units(1_000, TOKEN_DECIMALS).unwrap();
        let before = s.token.balance_of(&s.airdrop.address);

        s.rescue_tokens(s.owner, amount).unwrap();
        assert_eq!(s.token.balance_of(&s.airdrop.address), before - amount);
        assert_eq!(s.token.balance_of(&s.owner), amount);

        assert!(matches!(
            s.rescue_tokens(s.owner, before),
            Err(AirdropError::InsufficientVaultBalance)
        ));
    }

    #[test]
    fn owner_functions_reject_other_callers() {
        let (mut s, _) = setup();
        let user = Pubkey::new_unique();
        assert!(matches!(
            s.set_merkle_root(user, [0u8; 32]),
            Err(AirdropError::OnlyOwner)
        ));
        assert!(matches!(s.rescue_tokens(user, 0), Err(AirdropError::OnlyOwner)));
        assert!(matches!(
            s.transfer_ownership(user, user),
            Err(AirdropError::OnlyOwner)
        ));
    }

    #[test]
    fn ownership_cannot_go_to_the_airdrop_account() {
        let (mut s, _) = setup();
        let owner = s.owner;
        let address = s.airdrop.address;
        assert!(matches!(
            s.transfer_ownership(owner, address),
            Err(AirdropError::InvalidPubkey)
        ));
        assert!(matches!(
            s.transfer_ownership(owner, owner),
            Err(AirdropError::InvalidPubkey)
        ));
        assert_eq!(s.airdrop.state.owner, owner);
    }

    #[test]
    fn rescue_of_zero_is_rejected_for_owner() {
        let (mut s, _) = setup();
        let before = s.token.balance_of(&s.airdrop.address);
        assert!(matches!(
            s.rescue_tokens(s.owner, 0),
            Err(AirdropError::InvalidAmount)
        ));
        assert_eq!(s.token.balance_of(&s.airdrop.address), before);
    }

    #[test]
    fn proofs_file_is_removed_with_the_system() {
        let (s, _) = setup();
        let path = s.proofs_path.clone();
        assert!(path.exists());
        drop(s);
        assert!(!path.exists());
    }

    #[test]
    fn ownership_transfer_hands_over_owner_functions() {
        let (mut s, _) = setup();
        let old_owner = s.owner;
        let new_owner = Pubkey::new_unique();

        assert!(matches!(
            s.transfer_ownership(old_owner, Pubkey::default()),
            Err(AirdropError::InvalidPubkey)
        ));
        s.transfer_ownership(old_owner, new_owner).unwrap();

        assert!(matches!(
            s.set_merkle_root(old_owner, [1u8; 32]),
            Err(AirdropError::OnlyOwner)
        ));
        s.set_merkle_root(new_owner, [1u8; 32]).unwrap();
        assert_eq!(s.airdrop.state.merkle_root, [1u8; 32]);
    }
}
