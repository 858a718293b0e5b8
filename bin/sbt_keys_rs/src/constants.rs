use sbt_keys_utils::env::get_env_opt;

pub const PRINT_MNEMONIC_ENV: &str = "PRINT_MNEMONIC";
pub const PRINT_ACCOUNT_COUNT: u32 = 4;
pub const PRINT_WALLETS_PER_ACCOUNT: usize = 5;

#[derive(Debug, Clone)]
pub struct PrintKeysConfig {
    pub mnemonic: Option<String>,
    pub account_count: u32,
    pub wallets_per_account: usize,
}

impl PrintKeysConfig {
    pub fn new(mnemonic: Option<String>) -> Self {
        Self {
            mnemonic,
            account_count: PRINT_ACCOUNT_COUNT,
            wallets_per_account: PRINT_WALLETS_PER_ACCOUNT,
        }
    }

    /// Build the config from the process environment; a blank mnemonic counts as unset
    pub fn from_env() -> Self {
        let mnemonic = get_env_opt(PRINT_MNEMONIC_ENV);
        log::debug!("{} set: {}", PRINT_MNEMONIC_ENV, mnemonic.is_some());
        Self::new(mnemonic)
    }
}
