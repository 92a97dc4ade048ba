/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust request structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::models::Pair;

/// Body of POST /shift - create a variable-rate exchange transaction.
///
/// Optional fields that are `None` are omitted from the form body
/// entirely, never sent as null or empty keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftRequest {
    pub withdrawal: String,
    pub pair: Pair,
    #[serde(rename = "returnAddress")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_address: Option<String>,
    #[serde(rename = "destTag")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dest_tag: Option<String>,
    #[serde(rename = "rsAddress")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rs_address: Option<String>,
    #[serde(rename = "apiKey")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl ShiftRequest {
    /// Request with the required fields only; optional fields start absent.
    pub fn new(withdrawal: impl Into<String>, pair: Pair) -> Self {
        Self {
            withdrawal: withdrawal.into(),
            pair,
            return_address: None,
            dest_tag: None,
            rs_address: None,
            api_key: None,
        }
    }
}

/// Body of POST /sendamount - request a fixed amount at the withdrawal
/// address, or a rate quote.
///
/// The service treats an amount+pair-only body as a quote request and
/// does not generate a deposit address; that branching is entirely
/// server-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SendAmountRequest {
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub withdrawal: String,
    pub pair: Pair,
    #[serde(rename = "returnAddress")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_address: Option<String>,
    #[serde(rename = "destTag")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dest_tag: Option<String>,
    #[serde(rename = "rsAddress")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rs_address: Option<String>,
    #[serde(rename = "apiKey")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl SendAmountRequest {
    pub fn new(amount: Decimal, withdrawal: impl Into<String>, pair: Pair) -> Self {
        Self {
            amount,
            withdrawal: withdrawal.into(),
            pair,
            return_address: None,
            dest_tag: None,
            rs_address: None,
            api_key: None,
        }
    }
}

/// Body of POST /mail - request an email receipt for a completed shift.
///
/// `txid` is the transaction id of the withdrawal to the user, not the
/// deposit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MailRequest {
    pub email: String,
    pub txid: String,
}

/// Body of POST /cancelpending - cancel a pending shift by its deposit
/// address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CancelPendingRequest {
    pub address: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_request_omits_absent_optionals() {
        let request = ShiftRequest::new("1Abc", Pair::new("ltc", "btc"));
        let value = serde_json::to_value(&request).expect("serialize");
        let fields = value.as_object().expect("object");

        assert_eq!(fields.len(), 2);
        assert_eq!(fields["withdrawal"], "1Abc");
        assert_eq!(fields["pair"], "ltc_btc");
    }

    #[test]
    fn test_shift_request_keeps_supplied_optionals() {
        let mut request = ShiftRequest::new("1Abc", Pair::new("ltc", "btc"));
        request.api_key = Some("affiliate-key".to_string());

        let value = serde_json::to_value(&request).expect("serialize");
        let fields = value.as_object().expect("object");

        assert_eq!(fields.len(), 3);
        assert_eq!(fields["apiKey"], "affiliate-key");
    }

    #[test]
    fn test_send_amount_serializes_amount_as_string() {
        let request = SendAmountRequest::new(
            "0.25".parse().expect("amount"),
            "1Abc",
            Pair::new("btc", "ltc"),
        );
        let value = serde_json::to_value(&request).expect("serialize");

        assert_eq!(value["amount"], "0.25");
        assert_eq!(value["pair"], "btc_ltc");
    }
}
