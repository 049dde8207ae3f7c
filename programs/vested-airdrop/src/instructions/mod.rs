pub mod initialize_airdrop;
pub mod deposit_tokens;
pub mod set_merkle_root;
pub mod claim;
pub mod claimable_amount;
pub mod rescue_tokens;
pub mod transfer_ownership;

pub use initialize_airdrop::*;
pub use deposit_tokens::*;
pub use set_merkle_root::*;
pub use claim::*;
pub use claimable_amount::*;
pub use rescue_tokens::*;
pub use transfer_ownership::*;
