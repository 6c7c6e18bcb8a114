/*
[INPUT]:  Client credentials, endpoint configuration and API commands
[OUTPUT]: Signed HTTP requests and decoded API responses
[POS]:    HTTP layer - CoinPayments API communication
[UPDATE]: When adding new commands or changing client behavior
*/

pub mod account;
pub mod client;
pub mod error;
pub mod signature;
pub mod transactions;

pub use error::{CoinPaymentsError, Result};
pub use signature::{RequestSigner, SignedRequest};

pub use client::{ClientConfig, CoinPaymentsClient, Credentials, Logger};
