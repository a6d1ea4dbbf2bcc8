use anchor_lang::prelude::*;

#[account]
#[derive(InitSpace)]
pub struct Registry {
    /// Signer allowed to report match results.
    pub authority: Pubkey,
    /// PDA bump seed.
    pub bump: u8,
}

impl Registry {
    pub const SEED: &'static [u8] = b"registry";
}
