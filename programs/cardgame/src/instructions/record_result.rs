use anchor_lang::prelude::*;

use crate::errors::CardGameError;
use crate::events::ResultRecorded;
use crate::state::{Registry, UserInfo};

#[derive(Accounts)]
pub struct RecordResult<'info> {
    #[account(
        seeds = [Registry::SEED],
        bump = registry.bump,
        has_one = authority @ CardGameError::Unauthorized,
    )]
    pub registry: Account<'info, Registry>,

    #[account(
        mut,
        seeds = [UserInfo::SEED, winner.username.as_ref()],
        bump = winner.bump,
    )]
    pub winner: Account<'info, UserInfo>,

    #[account(
        mut,
        seeds = [UserInfo::SEED, loser.username.as_ref()],
        bump = loser.bump,
    )]
    pub loser: Account<'info, UserInfo>,

    /// Registry authority (game backend signer).
    pub authority: Signer<'info>,
}

pub fn handler(ctx: Context<RecordResult>) -> Result<()> {
    let winner = &mut ctx.accounts.winner;
    let loser = &mut ctx.accounts.loser;

    settle(winner, loser)?;

    emit!(ResultRecorded {
        winner: winner.username,
        loser: loser.username,
        win_count: winner.win_count,
        lost_count: loser.lost_count,
    });

    Ok(())
}

/// Credits one win and one loss. Leaves both records untouched on error.
pub fn settle(winner: &mut UserInfo, loser: &mut UserInfo) -> Result<()> {
    require_keys_neq!(winner.username, loser.username, CardGameError::SamePlayer);

    let win_count = winner
        .win_count
        .checked_add(1)
        .ok_or(CardGameError::MathOverflow)?;
    let lost_count = loser
        .lost_count
        .checked_add(1)
        .ok_or(CardGameError::MathOverflow)?;

    winner.win_count = win_count;
    loser.lost_count = lost_count;

    Ok(())
}
