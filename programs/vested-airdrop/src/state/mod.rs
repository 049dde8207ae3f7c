pub mod airdrop;
pub mod claim_status;

pub use airdrop::*;
pub use claim_status::*;
