/*
[INPUT]:  HTTP configuration and an injected blocking transport
[OUTPUT]: Configured blocking client exposing the full endpoint surface
[POS]:    HTTP layer - blocking calling convention
[UPDATE]: When the async client surface changes (kept in lockstep)
*/

use reqwest::Url;
use serde_json::Value;

use crate::http::client::{BASE_URL, ClientConfig};
use crate::http::endpoint::{self, ApiRequest};
use crate::http::error::Result;
use crate::http::transport::{BlockingHttpTransport, BlockingTransport};
use crate::types::{CancelPendingRequest, MailRequest, Pair, SendAmountRequest, ShiftRequest};

/// Blocking client for the ShapeShift API.
///
/// Same endpoint surface as [`crate::ShapeshiftClient`], built from the
/// same endpoint definitions; only the calling convention differs. Each
/// call occupies the calling thread until the round trip completes.
/// Must not be used from within an async runtime.
#[derive(Debug)]
pub struct BlockingShapeshiftClient<B: BlockingTransport = BlockingHttpTransport> {
    transport: B,
    base_url: Url,
}

impl BlockingShapeshiftClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Self::with_config_and_base_url(config, BASE_URL)
    }

    /// Create a new client against an explicit base URL
    pub fn with_config_and_base_url(config: ClientConfig, base_url: &str) -> Result<Self> {
        Self::with_transport(BlockingHttpTransport::new(&config)?, base_url)
    }
}

impl<B: BlockingTransport> BlockingShapeshiftClient<B> {
    /// Create a client from an explicit transport implementation.
    pub fn with_transport(transport: B, base_url: &str) -> Result<Self> {
        Ok(Self {
            transport,
            base_url: Url::parse(base_url)?,
        })
    }

    /// Base URL all request paths are joined onto
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn execute(&self, request: ApiRequest) -> Result<Value> {
        match request {
            ApiRequest::Get { path } => {
                let url = self.base_url.join(&path)?;
                self.transport.get(url)
            }
            ApiRequest::PostForm { path, form } => {
                let url = self.base_url.join(&path)?;
                self.transport.post_form(url, &form)
            }
        }
    }

    /// List the coins the service currently supports.
    ///
    /// GET /getcoins
    pub fn get_coins(&self) -> Result<Value> {
        self.execute(endpoint::coins())
    }

    /// Current exchange rate offered for a pair.
    ///
    /// GET /rate/{input}_{output}
    pub fn get_rate(&self, pair: &Pair) -> Result<Value> {
        self.execute(endpoint::rate(pair))
    }

    /// Current deposit limit for a pair.
    ///
    /// GET /limit/{input}_{output}
    pub fn get_deposit_limit(&self, pair: &Pair) -> Result<Value> {
        self.execute(endpoint::deposit_limit(pair))
    }

    /// Market info for a pair, or for all markets when `pair` is `None`.
    ///
    /// GET /marketinfo/{input}_{output}
    /// GET /marketinfo
    pub fn get_market_info(&self, pair: Option<&Pair>) -> Result<Value> {
        self.execute(endpoint::market_info(pair))
    }

    /// Most recent transactions, up to `max` entries (1..=50, checked
    /// before any network call).
    ///
    /// GET /recenttx/{max}
    pub fn get_recent_tx_list(&self, max: u32) -> Result<Value> {
        self.execute(endpoint::recent_tx_list(max)?)
    }

    /// Status of the most recent transaction to a deposit address.
    ///
    /// GET /txStat/{address}
    pub fn get_tx_status(&self, address: &str) -> Result<Value> {
        self.execute(endpoint::tx_status(address))
    }

    /// Seconds remaining on a fixed-amount transaction's deposit window.
    ///
    /// GET /timeremaining/{address}
    pub fn get_time_remaining(&self, address: &str) -> Result<Value> {
        self.execute(endpoint::time_remaining(address))
    }

    /// All transactions performed under an affiliate API key.
    ///
    /// GET /txbyapikey/{apiKey}
    pub fn get_tx_by_api_key(&self, api_key: &str) -> Result<Value> {
        self.execute(endpoint::tx_by_api_key(api_key))
    }

    /// All transactions performed at an output address, scoped to an
    /// affiliate API key.
    ///
    /// GET /txbyapikey/{address}/{apiKey}
    pub fn get_tx_by_address(&self, address: &str, api_key: &str) -> Result<Value> {
        self.execute(endpoint::tx_by_address(address, api_key))
    }

    /// Check that a receiving address is valid for a given coin.
    ///
    /// GET /validateAddress/{address}/{coinSymbol}
    pub fn validate_address(&self, address: &str, coin_symbol: &str) -> Result<Value> {
        self.execute(endpoint::validate_address(address, coin_symbol))
    }

    /// Create a variable-rate exchange transaction.
    ///
    /// POST /shift
    pub fn create_shift(&self, request: &ShiftRequest) -> Result<Value> {
        self.execute(endpoint::shift(request)?)
    }

    /// Request a fixed amount at the withdrawal address, or a rate quote.
    ///
    /// POST /sendamount
    pub fn send_amount(&self, request: &SendAmountRequest) -> Result<Value> {
        self.execute(endpoint::send_amount(request)?)
    }

    /// Request an email receipt for a completed shift.
    ///
    /// POST /mail
    pub fn request_email_receipt(&self, email: &str, tx_id: &str) -> Result<Value> {
        let request = MailRequest {
            email: email.to_string(),
            txid: tx_id.to_string(),
        };
        self.execute(endpoint::mail(&request)?)
    }

    /// Cancel a pending shift. Will not work once funds have been sent.
    ///
    /// POST /cancelpending
    pub fn cancel_pending(&self, address: &str) -> Result<Value> {
        let request = CancelPendingRequest {
            address: address.to_string(),
        };
        self.execute(endpoint::cancel_pending(&request)?)
    }
}
