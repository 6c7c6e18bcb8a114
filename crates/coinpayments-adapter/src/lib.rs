/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public CoinPayments adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod http;
pub mod types;

// Re-export commonly used types from http
pub use http::{
    ClientConfig,
    CoinPaymentsClient,
    CoinPaymentsError,
    Credentials,
    Logger,
    RequestSigner,
    Result,
    SignedRequest,
};

// Re-export all types
pub use types::*;
