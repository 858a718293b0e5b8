/// SLIP-44 coin type for Ethereum
pub const ETH_COIN_TYPE: u32 = 60;

/// Account used when the caller does not pick one
pub const DEFAULT_ACCOUNT: u32 = 0;

/// 128 bits of entropy, encoded as a 12-words phrase
pub const MNEMONIC_ENTROPY_BYTES: usize = 16;
pub const MNEMONIC_WORD_COUNT: usize = 12;
