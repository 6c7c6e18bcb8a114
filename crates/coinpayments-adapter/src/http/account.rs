/*
[INPUT]:  Result limit
[OUTPUT]: Coin balances for the merchant account
[POS]:    HTTP layer - account commands (signed POST)
[UPDATE]: When adding new account commands
*/

use crate::http::{CoinPaymentsClient, Result};
use crate::types::{ApiCommand, ApiResponse};

impl CoinPaymentsClient {
    /// Query coin balances
    ///
    /// cmd=balances
    pub fn get_balances(&self, limit: u32) -> Result<ApiResponse> {
        self.execute(&ApiCommand::Balances { limit })
    }
}
