/*
[INPUT]:  Operation parameters (pairs, addresses, request bodies)
[OUTPUT]: Fully-formed API requests (path + optional form payload)
[POS]:    HTTP layer - endpoint definitions shared by both calling conventions
[UPDATE]: When the service adds endpoints or changes path templates
*/

use reqwest::Method;
use serde::Serialize;
use serde::ser::Error as _;
use serde_json::Value;

use crate::http::error::{Result, ShapeshiftError};
use crate::types::{CancelPendingRequest, MailRequest, Pair, SendAmountRequest, ShiftRequest};

/// Form payload for POST endpoints: field name to string/number value.
pub type Form = serde_json::Map<String, Value>;

/// One fully-formed API request, ready to hand to either transport.
///
/// This is the single endpoint-definition set: URL paths and form
/// payloads are built here once, and the async and blocking clients only
/// differ in how they execute the result.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiRequest {
    Get { path: String },
    PostForm { path: String, form: Form },
}

impl ApiRequest {
    pub fn method(&self) -> Method {
        match self {
            ApiRequest::Get { .. } => Method::GET,
            ApiRequest::PostForm { .. } => Method::POST,
        }
    }

    /// Path relative to the service base URL.
    pub fn path(&self) -> &str {
        match self {
            ApiRequest::Get { path } => path,
            ApiRequest::PostForm { path, .. } => path,
        }
    }
}

/// List the coins the service currently supports.
///
/// GET /getcoins
pub fn coins() -> ApiRequest {
    ApiRequest::Get {
        path: "getcoins".to_string(),
    }
}

/// Current exchange rate offered for a pair.
///
/// GET /rate/{input}_{output}
pub fn rate(pair: &Pair) -> ApiRequest {
    ApiRequest::Get {
        path: format!("rate/{}", pair),
    }
}

/// Current deposit limit for a pair.
///
/// GET /limit/{input}_{output}
pub fn deposit_limit(pair: &Pair) -> ApiRequest {
    ApiRequest::Get {
        path: format!("limit/{}", pair),
    }
}

/// Market info (rate, limit, minimum, miner fee) for a pair, or for all
/// markets when no pair is given.
///
/// GET /marketinfo/{input}_{output}
/// GET /marketinfo
pub fn market_info(pair: Option<&Pair>) -> ApiRequest {
    let path = match pair {
        Some(p) => format!("marketinfo/{}", p),
        None => "marketinfo".to_string(),
    };
    ApiRequest::Get { path }
}

/// Most recent transactions, up to `max` entries.
///
/// GET /recenttx/{max}
///
/// `max` must be within 1..=50; the bound is checked here, before any
/// network call.
pub fn recent_tx_list(max: u32) -> Result<ApiRequest> {
    if !(1..=50).contains(&max) {
        return Err(ShapeshiftError::invalid_argument(format!(
            "recenttx max must be between 1 and 50, got {}",
            max
        )));
    }
    Ok(ApiRequest::Get {
        path: format!("recenttx/{}", max),
    })
}

/// Status of the most recent transaction to a deposit address.
///
/// GET /txStat/{address}
pub fn tx_status(address: &str) -> ApiRequest {
    ApiRequest::Get {
        path: format!("txStat/{}", address),
    }
}

/// Seconds remaining on a fixed-amount transaction's deposit window.
///
/// GET /timeremaining/{address}
pub fn time_remaining(address: &str) -> ApiRequest {
    ApiRequest::Get {
        path: format!("timeremaining/{}", address),
    }
}

/// All transactions performed under an affiliate API key.
///
/// GET /txbyapikey/{apiKey}
pub fn tx_by_api_key(api_key: &str) -> ApiRequest {
    ApiRequest::Get {
        path: format!("txbyapikey/{}", api_key),
    }
}

/// All transactions performed at an output address, scoped to an
/// affiliate API key.
///
/// GET /txbyapikey/{address}/{apiKey}
pub fn tx_by_address(address: &str, api_key: &str) -> ApiRequest {
    ApiRequest::Get {
        path: format!("txbyapikey/{}/{}", address, api_key),
    }
}

/// Check that a receiving address is valid for a given coin.
///
/// GET /validateAddress/{address}/{coinSymbol}
pub fn validate_address(address: &str, coin_symbol: &str) -> ApiRequest {
    ApiRequest::Get {
        path: format!("validateAddress/{}/{}", address, coin_symbol),
    }
}

/// Create a variable-rate exchange transaction (reserves a deposit
/// address).
///
/// POST /shift
pub fn shift(request: &ShiftRequest) -> Result<ApiRequest> {
    Ok(ApiRequest::PostForm {
        path: "shift".to_string(),
        form: to_form(request)?,
    })
}

/// Request a fixed amount at the withdrawal address, or a rate quote.
///
/// POST /sendamount
pub fn send_amount(request: &SendAmountRequest) -> Result<ApiRequest> {
    Ok(ApiRequest::PostForm {
        path: "sendamount".to_string(),
        form: to_form(request)?,
    })
}

/// Request an email receipt for a completed shift.
///
/// POST /mail
pub fn mail(request: &MailRequest) -> Result<ApiRequest> {
    Ok(ApiRequest::PostForm {
        path: "mail".to_string(),
        form: to_form(request)?,
    })
}

/// Cancel a pending shift by its deposit address.
///
/// POST /cancelpending
pub fn cancel_pending(request: &CancelPendingRequest) -> Result<ApiRequest> {
    Ok(ApiRequest::PostForm {
        path: "cancelpending".to_string(),
        form: to_form(request)?,
    })
}

/// Serialize a request struct into a form payload.
///
/// Absent optional fields are dropped during serialization, so the
/// resulting map holds exactly the required fields plus the supplied
/// optionals.
fn to_form<T: Serialize>(request: &T) -> Result<Form> {
    match serde_json::to_value(request)? {
        Value::Object(fields) => Ok(fields),
        _ => Err(serde_json::Error::custom("form payload must serialize to an object").into()),
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_rate_path() {
        let request = rate(&Pair::new("btc", "ltc"));
        assert_eq!(request.method(), Method::GET);
        assert_eq!(request.path(), "rate/btc_ltc");
    }

    #[test]
    fn test_get_paths() {
        let pair = Pair::new("btc", "ltc");
        assert_eq!(coins().path(), "getcoins");
        assert_eq!(deposit_limit(&pair).path(), "limit/btc_ltc");
        assert_eq!(market_info(Some(&pair)).path(), "marketinfo/btc_ltc");
        assert_eq!(market_info(None).path(), "marketinfo");
        assert_eq!(tx_status("1Dep").path(), "txStat/1Dep");
        assert_eq!(time_remaining("1Dep").path(), "timeremaining/1Dep");
        assert_eq!(tx_by_api_key("key").path(), "txbyapikey/key");
        assert_eq!(tx_by_address("1Out", "key").path(), "txbyapikey/1Out/key");
        assert_eq!(validate_address("1Abc", "btc").path(), "validateAddress/1Abc/btc");
    }

    #[rstest]
    #[case(0)]
    #[case(51)]
    #[case(u32::MAX)]
    fn test_recent_tx_list_rejects_out_of_range(#[case] max: u32) {
        let err = recent_tx_list(max).unwrap_err();
        assert!(matches!(err, ShapeshiftError::InvalidArgument { .. }));
        assert!(err.is_local());
    }

    #[rstest]
    #[case(1)]
    #[case(5)]
    #[case(50)]
    fn test_recent_tx_list_accepts_in_range(#[case] max: u32) {
        let request = recent_tx_list(max).expect("in-range max");
        assert_eq!(request.path(), format!("recenttx/{}", max));
    }

    #[test]
    fn test_shift_form_holds_required_fields_only() {
        let request = shift(&ShiftRequest::new("1Abc", Pair::new("ltc", "btc")))
            .expect("build shift");

        let ApiRequest::PostForm { path, form } = request else {
            panic!("expected a POST request");
        };
        assert_eq!(path, "shift");
        assert_eq!(form.len(), 2);
        assert_eq!(form["withdrawal"], "1Abc");
        assert_eq!(form["pair"], "ltc_btc");
    }

    #[test]
    fn test_shift_form_includes_supplied_optionals() {
        let mut body = ShiftRequest::new("1Abc", Pair::new("ltc", "btc"));
        body.api_key = Some("affiliate-key".to_string());

        let ApiRequest::PostForm { form, .. } = shift(&body).expect("build shift") else {
            panic!("expected a POST request");
        };
        assert_eq!(form.len(), 3);
        assert_eq!(form["withdrawal"], "1Abc");
        assert_eq!(form["pair"], "ltc_btc");
        assert_eq!(form["apiKey"], "affiliate-key");
    }

    #[test]
    fn test_send_amount_form_with_all_optionals() {
        let mut body = SendAmountRequest::new(
            "123".parse().expect("amount"),
            "1Abc",
            Pair::new("ltc", "btc"),
        );
        body.return_address = Some("RetAddr".to_string());
        body.dest_tag = Some("42".to_string());
        body.rs_address = Some("NXT-1".to_string());
        body.api_key = Some("affiliate-key".to_string());

        let ApiRequest::PostForm { path, form } = send_amount(&body).expect("build") else {
            panic!("expected a POST request");
        };
        assert_eq!(path, "sendamount");
        assert_eq!(form.len(), 7);
        assert_eq!(form["amount"], "123");
        assert_eq!(form["returnAddress"], "RetAddr");
        assert_eq!(form["destTag"], "42");
        assert_eq!(form["rsAddress"], "NXT-1");
        assert_eq!(form["apiKey"], "affiliate-key");
    }

    #[test]
    fn test_mail_and_cancel_forms() {
        let mail_request = mail(&MailRequest {
            email: "mail@example.com".to_string(),
            txid: "123ABC".to_string(),
        })
        .expect("build mail");
        let ApiRequest::PostForm { path, form } = mail_request else {
            panic!("expected a POST request");
        };
        assert_eq!(path, "mail");
        assert_eq!(form.len(), 2);
        assert_eq!(form["email"], "mail@example.com");
        assert_eq!(form["txid"], "123ABC");

        let cancel_request = cancel_pending(&CancelPendingRequest {
            address: "1Dep".to_string(),
        })
        .expect("build cancel");
        let ApiRequest::PostForm { path, form } = cancel_request else {
            panic!("expected a POST request");
        };
        assert_eq!(path, "cancelpending");
        assert_eq!(form.len(), 1);
        assert_eq!(form["address"], "1Dep");
    }
}
