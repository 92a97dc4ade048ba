/*
[INPUT]:  Shift requests with form-encoded bodies
[OUTPUT]: Deposit address reservations, quotes, and confirmations
[POS]:    HTTP layer - POST endpoints (side effects on the service)
[UPDATE]: When adding new write endpoints or changing payload fields
*/

use serde_json::Value;

use crate::http::endpoint;
use crate::http::error::Result;
use crate::http::{ShapeshiftClient, Transport};
use crate::types::{CancelPendingRequest, MailRequest, SendAmountRequest, ShiftRequest};

impl<T: Transport> ShapeshiftClient<T> {
    /// Create a variable-rate exchange transaction. Reserves a deposit
    /// address on the service; one-shot, no idempotency guarantee.
    ///
    /// POST /shift
    pub async fn create_shift(&self, request: &ShiftRequest) -> Result<Value> {
        self.execute(endpoint::shift(request)?).await
    }

    /// Request a fixed amount at the withdrawal address, or a rate
    /// quote. An amount+pair-only body is treated as a quote by the
    /// service and reserves nothing.
    ///
    /// POST /sendamount
    pub async fn send_amount(&self, request: &SendAmountRequest) -> Result<Value> {
        self.execute(endpoint::send_amount(request)?).await
    }

    /// Request an email receipt for a completed shift.
    ///
    /// POST /mail
    pub async fn request_email_receipt(&self, email: &str, tx_id: &str) -> Result<Value> {
        let request = MailRequest {
            email: email.to_string(),
            txid: tx_id.to_string(),
        };
        self.execute(endpoint::mail(&request)?).await
    }

    /// Cancel a pending shift. Will not work once funds have been sent.
    ///
    /// POST /cancelpending
    pub async fn cancel_pending(&self, address: &str) -> Result<Value> {
        let request = CancelPendingRequest {
            address: address.to_string(),
        };
        self.execute(endpoint::cancel_pending(&request)?).await
    }
}
