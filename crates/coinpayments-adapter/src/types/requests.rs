/*
[INPUT]:  Supported API commands and their per-command fields
[OUTPUT]: Ordered, form-encodable request parameter lists
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API commands are added or their field sets change
*/

use rust_decimal::Decimal;
use std::fmt;
use url::form_urlencoded;

/// Scalar value of a single request parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    Integer(i64),
    Text(String),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Integer(value) => write!(f, "{value}"),
            ParamValue::Text(value) => f.write_str(value),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Text(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Integer(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        ParamValue::Integer(i64::from(value))
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        ParamValue::Integer(i64::from(value))
    }
}

impl From<Decimal> for ParamValue {
    fn from(value: Decimal) -> Self {
        ParamValue::Text(value.to_string())
    }
}

/// Ordered parameter list; insertion order is the wire order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestParams {
    pairs: Vec<(&'static str, ParamValue)>,
}

impl RequestParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: &'static str, value: impl Into<ParamValue>) -> &mut Self {
        self.pairs.push((name, value.into()));
        self
    }

    /// First value stored under `name`
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.pairs
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value)
    }

    /// Value of the `cmd` parameter, if present
    pub fn command(&self) -> Option<String> {
        self.get("cmd").map(ToString::to_string)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &ParamValue)> {
        self.pairs.iter().map(|(key, value)| (*key, value))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Serialize as `application/x-www-form-urlencoded` bytes
    ///
    /// Spaces become `+`; parameter order is preserved. Uses WHATWG form rules:
    /// `*` stays literal and `~` becomes `%7E`, the reverse of Python's
    /// `urllib.parse.urlencode`, so bodies (and signatures) containing either
    /// character differ byte-for-byte from that encoder.
    pub fn encode(&self) -> Vec<u8> {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.pairs {
            serializer.append_pair(key, &value.to_string());
        }
        serializer.finish().into_bytes()
    }
}

/// Parameters shared by every command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommonParams<'a> {
    pub key: &'a str,
    pub version: i64,
    pub format: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTransactionRequest {
    /// Passed through untouched; integers, strings and decimals are all accepted.
    pub amount: ParamValue,
    pub currency1: String,
    pub currency2: String,
    pub buyer_email: String,
    pub item_name: String,
    pub success_url: String,
}

impl CreateTransactionRequest {
    pub fn new(
        amount: impl Into<ParamValue>,
        currency1: impl Into<String>,
        currency2: impl Into<String>,
        buyer_email: impl Into<String>,
        item_name: impl Into<String>,
        success_url: impl Into<String>,
    ) -> Self {
        Self {
            amount: amount.into(),
            currency1: currency1.into(),
            currency2: currency2.into(),
            buyer_email: buyer_email.into(),
            item_name: item_name.into(),
            success_url: success_url.into(),
        }
    }
}

/// One remote API command with exactly the fields it sends
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCommand {
    /// `get_tx_ids`
    GetTxIds { limit: u32 },
    /// `get_tx_info` with a limit
    GetTxInfo { txid: String, limit: u32 },
    /// `get_tx_info` in full mode.
    ///
    /// `full` is carried for callers but the wire value is always `1`.
    PaymentInfo { txid: String, full: u32 },
    /// `get_tx_info_multi`; `txids` is the caller-joined id list
    GetTxInfoMulti { txids: String },
    /// `balances`
    Balances { limit: u32 },
    /// `create_transaction`
    CreateTransaction(CreateTransactionRequest),
}

impl ApiCommand {
    pub const DEFAULT_LIMIT: u32 = 10;

    /// Remote `cmd` name
    pub fn name(&self) -> &'static str {
        match self {
            ApiCommand::GetTxIds { .. } => "get_tx_ids",
            ApiCommand::GetTxInfo { .. } | ApiCommand::PaymentInfo { .. } => "get_tx_info",
            ApiCommand::GetTxInfoMulti { .. } => "get_tx_info_multi",
            ApiCommand::Balances { .. } => "balances",
            ApiCommand::CreateTransaction(_) => "create_transaction",
        }
    }

    /// Build the ordered wire parameters for this command
    pub fn to_params(&self, common: CommonParams<'_>) -> RequestParams {
        let mut params = RequestParams::new();
        params.push("cmd", self.name());

        match self {
            ApiCommand::GetTxIds { limit } | ApiCommand::Balances { limit } => {
                push_common(&mut params, common);
                params.push("limit", *limit);
            }
            ApiCommand::GetTxInfo { txid, limit } => {
                push_common(&mut params, common);
                params.push("limit", *limit);
                params.push("txid", txid.as_str());
            }
            ApiCommand::PaymentInfo { txid, full: _ } => {
                params.push("txid", txid.as_str());
                params.push("full", 1_i64);
                push_common(&mut params, common);
            }
            ApiCommand::GetTxInfoMulti { txids } => {
                params.push("txid", txids.as_str());
                push_common(&mut params, common);
            }
            ApiCommand::CreateTransaction(req) => {
                push_common(&mut params, common);
                params.push("amount", req.amount.clone());
                params.push("currency1", req.currency1.as_str());
                params.push("currency2", req.currency2.as_str());
                params.push("buyer_email", req.buyer_email.as_str());
                params.push("item_name", req.item_name.as_str());
                params.push("success_url", req.success_url.as_str());
            }
        }

        params
    }
}

fn push_common(params: &mut RequestParams, common: CommonParams<'_>) {
    params.push("key", common.key);
    params.push("version", common.version);
    params.push("format", common.format);
}
