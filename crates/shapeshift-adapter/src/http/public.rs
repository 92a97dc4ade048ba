/*
[INPUT]:  Coin pairs, addresses, and query parameters
[OUTPUT]: Market and transaction data as passthrough JSON
[POS]:    HTTP layer - read-only GET endpoints (no side effects)
[UPDATE]: When adding new public endpoints or changing response format
[UPDATE]: 2026-08-07 Added GET endpoint implementations and tests
*/

use serde_json::Value;

use crate::http::endpoint;
use crate::http::error::Result;
use crate::http::{ShapeshiftClient, Transport};
use crate::types::Pair;

impl<T: Transport> ShapeshiftClient<T> {
    /// List the coins the service currently supports.
    ///
    /// GET /getcoins
    ///
    /// One entry per currency; status is "available" or "unavailable".
    pub async fn get_coins(&self) -> Result<Value> {
        self.execute(endpoint::coins()).await
    }

    /// Current exchange rate offered for a pair.
    ///
    /// GET /rate/{input}_{output}
    pub async fn get_rate(&self, pair: &Pair) -> Result<Value> {
        self.execute(endpoint::rate(pair)).await
    }

    /// Current deposit limit for a pair.
    ///
    /// GET /limit/{input}_{output}
    pub async fn get_deposit_limit(&self, pair: &Pair) -> Result<Value> {
        self.execute(endpoint::deposit_limit(pair)).await
    }

    /// Market info (rate, limit, minimum, miner fee) for a pair, or for
    /// all markets when `pair` is `None`.
    ///
    /// GET /marketinfo/{input}_{output}
    /// GET /marketinfo
    pub async fn get_market_info(&self, pair: Option<&Pair>) -> Result<Value> {
        self.execute(endpoint::market_info(pair)).await
    }

    /// Most recent transactions, up to `max` entries.
    ///
    /// GET /recenttx/{max}
    ///
    /// Fails with [`crate::ShapeshiftError::InvalidArgument`] before any
    /// network call unless `max` is within 1..=50.
    pub async fn get_recent_tx_list(&self, max: u32) -> Result<Value> {
        self.execute(endpoint::recent_tx_list(max)?).await
    }

    /// Status of the most recent transaction to a deposit address.
    ///
    /// GET /txStat/{address}
    ///
    /// The response shape varies with the reported status
    /// (no_deposits, received, complete, failed); it is returned as-is.
    pub async fn get_tx_status(&self, address: &str) -> Result<Value> {
        self.execute(endpoint::tx_status(address)).await
    }

    /// Seconds remaining on a fixed-amount transaction's deposit window.
    ///
    /// GET /timeremaining/{address}
    pub async fn get_time_remaining(&self, address: &str) -> Result<Value> {
        self.execute(endpoint::time_remaining(address)).await
    }

    /// All transactions performed under an affiliate API key.
    ///
    /// GET /txbyapikey/{apiKey}
    pub async fn get_tx_by_api_key(&self, api_key: &str) -> Result<Value> {
        self.execute(endpoint::tx_by_api_key(api_key)).await
    }

    /// All transactions performed at an output address, scoped to an
    /// affiliate API key.
    ///
    /// GET /txbyapikey/{address}/{apiKey}
    pub async fn get_tx_by_address(&self, address: &str, api_key: &str) -> Result<Value> {
        self.execute(endpoint::tx_by_address(address, api_key)).await
    }

    /// Check that a receiving address is valid for a given coin.
    ///
    /// GET /validateAddress/{address}/{coinSymbol}
    pub async fn validate_address(&self, address: &str, coin_symbol: &str) -> Result<Value> {
        self.execute(endpoint::validate_address(address, coin_symbol))
            .await
    }
}
