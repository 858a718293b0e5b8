use ethers::{types::Address, utils::to_checksum};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletInfo {
    pub path: String,
    pub address: Address,
    /// `0x`-prefixed lowercase hex of the 32-byte secret key
    pub private_key: String,
}

impl WalletInfo {
    /// EIP-55 mixed-case representation of `address`
    pub fn checksum_address(&self) -> String {
        to_checksum(&self.address, None)
    }
}

/// Wallets of one account, ordered by address index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountWallets {
    pub account: u32,
    pub wallets: Vec<WalletInfo>,
}
