/*
[INPUT]:  Parsed subcommand arguments
[OUTPUT]: Typed API commands and rendered responses
[POS]:    CLI layer - maps subcommands onto client calls
[UPDATE]: When adding subcommands or changing output format
*/

use anyhow::{Context, Result};
use clap::Subcommand;
use coinpayments_adapter::{ApiCommand, ApiResponse, CreateTransactionRequest};
use rust_decimal::Decimal;

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    /// List transaction ids (get_tx_ids)
    TxIds {
        #[arg(long, default_value_t = ApiCommand::DEFAULT_LIMIT)]
        limit: u32,
    },
    /// Look up one transaction (get_tx_info)
    TxInfo {
        txid: String,
        #[arg(long, default_value_t = ApiCommand::DEFAULT_LIMIT)]
        limit: u32,
    },
    /// Show coin balances (balances)
    Balances {
        #[arg(long, default_value_t = ApiCommand::DEFAULT_LIMIT)]
        limit: u32,
    },
    /// Full details for one transaction; the gateway always receives full=1
    PaymentInfo {
        txid: String,
        #[arg(long, default_value_t = 0)]
        full: u32,
    },
    /// Look up several transactions (get_tx_info_multi); ids joined with '|'
    PaymentInfoMulti { txids: String },
    /// Create a checkout transaction (create_transaction)
    CreateTransaction {
        #[arg(long)]
        amount: Decimal,
        #[arg(long)]
        currency1: String,
        #[arg(long)]
        currency2: String,
        #[arg(long)]
        buyer_email: String,
        #[arg(long)]
        item_name: String,
        #[arg(long)]
        success_url: String,
    },
}

impl ApiCall {
    pub fn into_command(self) -> ApiCommand {
        match self {
            ApiCall::TxIds { limit } => ApiCommand::GetTxIds { limit },
            ApiCall::TxInfo { txid, limit } => ApiCommand::GetTxInfo { txid, limit },
            ApiCall::Balances { limit } => ApiCommand::Balances { limit },
            ApiCall::PaymentInfo { txid, full } => ApiCommand::PaymentInfo { txid, full },
            ApiCall::PaymentInfoMulti { txids } => ApiCommand::GetTxInfoMulti { txids },
            ApiCall::CreateTransaction {
                amount,
                currency1,
                currency2,
                buyer_email,
                item_name,
                success_url,
            } => ApiCommand::CreateTransaction(CreateTransactionRequest::new(
                amount,
                currency1,
                currency2,
                buyer_email,
                item_name,
                success_url,
            )),
        }
    }
}

/// Render a response for stdout; the flag is true for HTTP errors
pub fn render_response(response: &ApiResponse) -> Result<(String, bool)> {
    match response {
        ApiResponse::Json(value) => {
            let rendered = serde_json::to_string_pretty(value).context("render JSON response")?;
            Ok((rendered, false))
        }
        ApiResponse::HttpError { status, body } => Ok((
            format!("HTTP {status}: {}", String::from_utf8_lossy(body)),
            true,
        )),
    }
}
