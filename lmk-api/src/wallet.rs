//! Wallet ledger and gem store.
//!
//! The wallet balance itself is read with
//! [`get_wallet`](crate::LmkClient::get_wallet).

use crate::client::LmkClient;
use crate::error::Result;
use crate::transport::Transport;
use crate::types::{DEFAULT_LEDGER_LIMIT, DEFAULT_PAGE};
use serde_json::Value;

impl<T: Transport> LmkClient<T> {
    /// Gem packets offered in the in-app store.
    pub fn get_store_gem_packets(&self) -> Result<Value> {
        self.get_json("/store/gemPackets/v2", &[])
    }

    /// Wallet transaction history, default page `0`, limit `20`.
    pub fn get_wallet_transactions(&self, page: Option<u32>, limit: Option<u32>) -> Result<Value> {
        self.get_json(
            "/user/walletTransactions",
            &[
                ("page", page.unwrap_or(DEFAULT_PAGE).to_string()),
                ("limit", limit.unwrap_or(DEFAULT_LEDGER_LIMIT).to_string()),
            ],
        )
    }
}
