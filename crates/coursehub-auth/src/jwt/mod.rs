//! Session token encoding and validation.

pub mod claims;
pub mod decoder;
pub mod encoder;

pub use claims::AdminClaims;
pub use decoder::TokenDecoder;
pub use encoder::TokenEncoder;
