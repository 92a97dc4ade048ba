/*
[INPUT]:  Coin symbols as supplied by callers
[OUTPUT]: Exchange pair type with wire serialization
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use std::fmt;

use serde::de::{self, Deserialize, Deserializer};
use serde::{Serialize, Serializer};

/// An ordered exchange direction, input coin to output coin.
///
/// Serialized on the wire as `{input}_{output}`, e.g. `btc_ltc`.
/// Coin symbols are opaque to this crate and never validated locally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pair {
    input: String,
    output: String,
}

impl Pair {
    pub fn new(input: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }

    /// Symbol of the coin being deposited.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Symbol of the coin being withdrawn.
    pub fn output(&self) -> &str {
        &self.output
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.input, self.output)
    }
}

impl Serialize for Pair {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Pair {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        let (input, output) = raw.split_once('_').ok_or_else(|| {
            de::Error::custom(format!("expected coin pair as `input_output`, got `{}`", raw))
        })?;
        Ok(Pair::new(input, output))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_display() {
        let pair = Pair::new("btc", "ltc");
        assert_eq!(pair.to_string(), "btc_ltc");
        assert_eq!(pair.input(), "btc");
        assert_eq!(pair.output(), "ltc");
    }

    #[test]
    fn test_pair_serde_roundtrip() {
        let pair = Pair::new("ltc", "btc");
        let json = serde_json::to_string(&pair).expect("serialize");
        assert_eq!(json, r#""ltc_btc""#);

        let parsed: Pair = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, pair);
    }

    #[test]
    fn test_pair_deserialize_rejects_missing_separator() {
        let result: Result<Pair, _> = serde_json::from_str(r#""btcltc""#);
        assert!(result.is_err());
    }
}
