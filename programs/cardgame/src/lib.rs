use anchor_lang::prelude::*;

pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;

use instructions::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod cardgame {
    use super::*;

    /// One-time setup of the registry and the authority that reports results.
    pub fn initialize_registry(ctx: Context<InitializeRegistry>) -> Result<()> {
        instructions::initialize_registry::handler(ctx)
    }

    /// Create the caller's user record on first login. Later logins are no-ops.
    pub fn login(ctx: Context<Login>, username: Pubkey) -> Result<()> {
        instructions::login::handler(ctx, username)
    }

    /// Registry authority reports a finished match between two users.
    pub fn record_result(ctx: Context<RecordResult>) -> Result<()> {
        instructions::record_result::handler(ctx)
    }
}
