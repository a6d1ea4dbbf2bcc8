use anchor_lang::prelude::*;

#[event]
pub struct RegistryInitialized {
    pub authority: Pubkey,
}

#[event]
pub struct UserRegistered {
    pub username: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct ResultRecorded {
    pub winner: Pubkey,
    pub loser: Pubkey,
    pub win_count: u16,
    pub lost_count: u16,
}
