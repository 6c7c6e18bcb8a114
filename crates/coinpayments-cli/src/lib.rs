/*
[INPUT]:  Public API exports for coinpayments-cli crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod command;
pub mod config;

pub use command::ApiCall;
pub use config::CliConfig;
