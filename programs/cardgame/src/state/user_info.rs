use anchor_lang::prelude::*;

/// One row of the `users` table, stored at `[SEED, username]`.
#[account]
#[derive(InitSpace, Default, Debug, PartialEq, Eq)]
pub struct UserInfo {
    /// Account that owns this record. Also the primary key.
    pub username: Pubkey,
    /// Matches won.
    pub win_count: u16,
    /// Matches lost.
    pub lost_count: u16,
    /// PDA bump seed.
    pub bump: u8,
}

impl UserInfo {
    pub const SEED: &'static [u8] = b"user";

    /// Accounts fresh from `init_if_needed` are zeroed and carry no username.
    pub fn is_registered(&self) -> bool {
        self.username != Pubkey::default()
    }

    pub fn register(&mut self, username: Pubkey, bump: u8) {
        self.username = username;
        self.win_count = 0;
        self.lost_count = 0;
        self.bump = bump;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeroed_account_is_not_registered() {
        assert!(!UserInfo::default().is_registered());
    }

    #[test]
    fn register_sets_key_and_zero_counters() {
        let alice = Pubkey::new_unique();
        let mut user = UserInfo {
            win_count: 7,
            lost_count: 2,
            ..UserInfo::default()
        };

        user.register(alice, 254);

        assert!(user.is_registered());
        assert_eq!(
            user,
            UserInfo {
                username: alice,
                win_count: 0,
                lost_count: 0,
                bump: 254,
            }
        );
    }
}
