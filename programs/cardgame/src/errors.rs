use anchor_lang::prelude::*;

#[error_code]
pub enum CardGameError {
    #[msg("Transaction is not signed by the required account.")]
    Unauthorized,
    #[msg("Winner and loser must be different users.")]
    SamePlayer,
    #[msg("Arithmetic overflow.")]
    MathOverflow,
}
