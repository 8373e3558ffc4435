/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Switcheo adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod encoding;
pub mod http;
pub mod neo;
pub mod types;
pub mod util;

// Re-export commonly used encoders
pub use encoding::{
    EncodingError,
    Fixed8,
    encode_var_int,
    number_to_hex_string,
    reverse_hex_byte_pairs,
};

// Re-export commonly used types from http
pub use http::{
    ClientConfig,
    HttpClient,
    PostBody,
    PublicClient,
    Result,
    SwitcheoError,
};

// Re-export NEO transaction types
pub use neo::{
    Transaction,
    TransactionAttribute,
    TransactionInput,
    TransactionKind,
    TransactionOutput,
    Witness,
    serialize_transaction,
};

// Re-export all types
pub use types::*;

pub use util::{epoch_milliseconds, stringify_message};
