/*
[INPUT]:  CoinPayments API command set and wire conventions
[OUTPUT]: Typed commands, parameter lists and response wrappers
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API commands change or new types added
*/

pub mod enums;
pub mod requests;
pub mod responses;

pub use enums::*;
pub use requests::*;
pub use responses::*;
