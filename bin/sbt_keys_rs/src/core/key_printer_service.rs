use std::io::Write;

use sbt_keys_utils::{error::KeysError, types::AccountWallets, utils::get_wallets_from_mnemonic};

use crate::constants::{PrintKeysConfig, PRINT_MNEMONIC_ENV};

/// Derive every account of `config` in ascending order.
pub fn derive_accounts(
    mnemonic: &str,
    config: &PrintKeysConfig,
) -> Result<Vec<AccountWallets>, KeysError> {
    (0..config.account_count)
        .map(|account| {
            let wallets =
                get_wallets_from_mnemonic(mnemonic, config.wallets_per_account, account)?;
            log::info!("account {} derived {} wallets", account, wallets.len());
            Ok(AccountWallets { account, wallets })
        })
        .collect()
}

/// Print the mnemonic followed by the address and key of every derived wallet.
///
/// All wallets are derived before the first write, so a rejected mnemonic
/// leaves `out` untouched.
pub fn run(config: &PrintKeysConfig, out: &mut impl Write) -> Result<(), KeysError> {
    let Some(mnemonic) = config.mnemonic.as_deref() else {
        return Err(KeysError::MissingConfiguration("mnemonic".to_string()));
    };
    let accounts = derive_accounts(mnemonic, config)?;

    writeln!(out)?;
    writeln!(out, "Mnemonic")?;
    writeln!(out, "{}", mnemonic)?;
    for AccountWallets { account, wallets } in &accounts {
        writeln!(out)?;
        writeln!(out, "======== Account {} ========", account)?;
        for wallet in wallets {
            writeln!(out)?;
            writeln!(out, "Address:  {}", wallet.checksum_address())?;
            writeln!(out, "Key:  {}", wallet.private_key)?;
        }
    }
    out.flush()?;
    log::debug!("printed {} accounts from {}", accounts.len(), PRINT_MNEMONIC_ENV);
    Ok(())
}
