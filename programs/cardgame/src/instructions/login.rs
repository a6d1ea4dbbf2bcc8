use anchor_lang::prelude::*;

use crate::errors::CardGameError;
use crate::events::UserRegistered;
use crate::state::UserInfo;

#[derive(Accounts)]
#[instruction(username: Pubkey)]
pub struct Login<'info> {
    #[account(
        init_if_needed,
        payer = player,
        space = 8 + UserInfo::INIT_SPACE,
        seeds = [UserInfo::SEED, username.as_ref()],
        bump,
    )]
    pub user: Account<'info, UserInfo>,

    /// Must be `username` itself. Pays rent for a new record.
    #[account(mut)]
    pub player: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Login>, username: Pubkey) -> Result<()> {
    let signer = ctx.accounts.player.key();
    let bump = ctx.bumps.user;

    if !register_if_absent(&mut ctx.accounts.user, &signer, username, bump)? {
        return Ok(());
    }

    let clock = Clock::get()?;
    emit!(UserRegistered {
        username,
        timestamp: clock.unix_timestamp,
    });
    msg!("Registered user {}", username);

    Ok(())
}

/// Writes a fresh record unless `user` already holds one.
/// Returns whether anything was written.
pub fn register_if_absent(
    user: &mut UserInfo,
    signer: &Pubkey,
    username: Pubkey,
    bump: u8,
) -> Result<bool> {
    require_keys_eq!(*signer, username, CardGameError::Unauthorized);

    if user.is_registered() {
        return Ok(false);
    }

    user.register(username, bump);
    Ok(true)
}
