use thiserror::Error;

/// Errors raised while generating mnemonics or deriving wallets from them.
#[derive(Error, Debug)]
pub enum KeysError {
    /// A required configuration value is absent or empty.
    #[error("empty {0}")]
    MissingConfiguration(String),
    /// The phrase was rejected by the BIP-39 checks or the derivation.
    #[error("invalid mnemonic: {0}")]
    InvalidMnemonic(String),
    /// The random source or the wordlist encoding failed.
    #[error("mnemonic generation failed: {0}")]
    GenerationFailure(String),
    #[error("wallet count must be greater than 0, got {0}")]
    InvalidWalletCount(usize),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
