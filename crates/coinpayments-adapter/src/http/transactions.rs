/*
[INPUT]:  Transaction ids, limits and checkout fields
[OUTPUT]: Transaction listings, details and newly created payments
[POS]:    HTTP layer - transaction commands (signed POST)
[UPDATE]: When adding new transaction commands or changing their fields
*/

use crate::http::{CoinPaymentsClient, Result};
use crate::types::{ApiCommand, ApiResponse, CreateTransactionRequest};

impl CoinPaymentsClient {
    /// List transaction ids
    ///
    /// cmd=get_tx_ids
    pub fn get_transactions(&self, limit: u32) -> Result<ApiResponse> {
        self.execute(&ApiCommand::GetTxIds { limit })
    }

    /// List transaction ids; same request as [`Self::get_transactions`]
    ///
    /// cmd=get_tx_ids
    pub fn get_tx_ids(&self, limit: u32) -> Result<ApiResponse> {
        self.execute(&ApiCommand::GetTxIds { limit })
    }

    /// Look up one transaction
    ///
    /// cmd=get_tx_info
    pub fn get_tx_info(&self, txid: &str, limit: u32) -> Result<ApiResponse> {
        self.execute(&ApiCommand::GetTxInfo {
            txid: txid.to_string(),
            limit,
        })
    }

    /// Create a checkout transaction
    ///
    /// cmd=create_transaction
    pub fn create_transaction(&self, req: CreateTransactionRequest) -> Result<ApiResponse> {
        self.execute(&ApiCommand::CreateTransaction(req))
    }

    /// Look up several transactions at once; `txids` is sent as given
    ///
    /// cmd=get_tx_info_multi
    pub fn get_multiple_payment_info(&self, txids: &str) -> Result<ApiResponse> {
        self.execute(&ApiCommand::GetTxInfoMulti {
            txids: txids.to_string(),
        })
    }

    /// Full details for one transaction
    ///
    /// cmd=get_tx_info
    ///
    /// `full` is accepted but ignored: the request always carries `full=1`.
    pub fn get_payment_info(&self, txid: &str, full: u32) -> Result<ApiResponse> {
        self.execute(&ApiCommand::PaymentInfo {
            txid: txid.to_string(),
            full,
        })
    }
}
