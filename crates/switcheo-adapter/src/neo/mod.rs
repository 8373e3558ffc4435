/*
[INPUT]:  NEO transaction structures
[OUTPUT]: Hex payloads ready for signing
[POS]:    NEO layer - blockchain specific serialization
[UPDATE]: When adding NEO payload types
*/

pub mod transaction;

pub use transaction::{
    MAX_TRANSACTION_ATTRIBUTE_SIZE, Transaction, TransactionAttribute, TransactionInput,
    TransactionKind, TransactionOutput, Witness, attribute_usage, serialize_transaction,
};
