use bip39::{Language, Mnemonic};
use ethers::signers::{coins_bip39::English, LocalWallet, MnemonicBuilder, Signer};
use rand::{rngs::OsRng, RngCore};

use crate::{
    constants::{ETH_COIN_TYPE, MNEMONIC_ENTROPY_BYTES},
    error::KeysError,
    types::WalletInfo,
};

/// Generate a random 12-words mnemonic phrase
pub fn random_mnemonic_phrase() -> Result<String, KeysError> {
    let mut entropy = [0u8; MNEMONIC_ENTROPY_BYTES];
    OsRng
        .try_fill_bytes(&mut entropy)
        .map_err(|e| KeysError::GenerationFailure(e.to_string()))?;
    let mnemonic = Mnemonic::from_entropy(&entropy, Language::English)
        .map_err(|e| KeysError::GenerationFailure(e.to_string()))?;
    Ok(mnemonic.into_phrase())
}

/// Check word list membership, word count and checksum of an English phrase
pub fn validate_mnemonic(mnemonic: &str) -> Result<(), KeysError> {
    Mnemonic::validate(mnemonic, Language::English)
        .map_err(|e| KeysError::InvalidMnemonic(e.to_string()))
}

pub fn wallet_derivation_path(account: u32, index: u32) -> String {
    format!("m/44'/{}'/{}'/0/{}", ETH_COIN_TYPE, account, index)
}

pub fn load_mnemonic_wallet(
    mnemonic: &str,
    account: u32,
    index: u32,
) -> Result<LocalWallet, KeysError> {
    let wallet = MnemonicBuilder::<English>::default()
        .phrase(mnemonic)
        .derivation_path(&wallet_derivation_path(account, index))
        .and_then(|builder| builder.build())
        .map_err(|e| KeysError::InvalidMnemonic(e.to_string()))?;
    Ok(wallet)
}

pub fn format_private_key(wallet: &LocalWallet) -> String {
    format!("0x{}", hex::encode(wallet.signer().to_bytes()))
}

/// Derive `n` wallets at address indices `0..n` of `account`.
///
/// The phrase is validated up front, so a malformed mnemonic yields an error
/// and no wallet at all.
pub fn get_wallets_from_mnemonic(
    mnemonic: &str,
    n: usize,
    account: u32,
) -> Result<Vec<WalletInfo>, KeysError> {
    if n == 0 {
        return Err(KeysError::InvalidWalletCount(n));
    }
    let count = u32::try_from(n).map_err(|_| KeysError::InvalidWalletCount(n))?;
    validate_mnemonic(mnemonic)?;

    let mut wallets = Vec::with_capacity(n);
    for index in 0..count {
        let wallet = load_mnemonic_wallet(mnemonic, account, index)?;
        log::debug!("account {} index {} derived", account, index);
        wallets.push(WalletInfo {
            path: wallet_derivation_path(account, index),
            address: wallet.address(),
            private_key: format_private_key(&wallet),
        });
    }
    Ok(wallets)
}
