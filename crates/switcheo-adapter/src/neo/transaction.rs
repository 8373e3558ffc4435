/*
[INPUT]:  Typed NEO transactions (attributes, inputs, outputs, witnesses)
[OUTPUT]: Serialized transaction hex payloads
[POS]:    NEO layer - transaction serialization on top of the hex encoders
[UPDATE]: When adding transaction types or attribute usages
*/

use serde::{Deserialize, Serialize};

use crate::encoding::{
    EncodingError, Fixed8, encode_hex_length, encode_var_int, number_to_hex_string,
    reverse_hex_byte_pairs,
};

/// Maximum length, in hex characters, of a transaction attribute's data
pub const MAX_TRANSACTION_ATTRIBUTE_SIZE: usize = 65_535;

/// Attribute usage bytes with special serialization rules
pub mod attribute_usage {
    pub const ECDH02: u8 = 0x02;
    pub const ECDH03: u8 = 0x03;
    pub const SCRIPT: u8 = 0x20;
    pub const VOTE: u8 = 0x30;
    pub const DESCRIPTION_URL: u8 = 0x81;
    pub const DESCRIPTION: u8 = 0x90;
    pub const REMARK: u8 = 0xf0;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum TransactionKind {
    Claim,
    Contract,
    Invocation,
}

impl TransactionKind {
    pub const fn as_u8(self) -> u8 {
        match self {
            TransactionKind::Claim => 0x02,
            TransactionKind::Contract => 0x80,
            TransactionKind::Invocation => 0xd1,
        }
    }
}

impl TryFrom<u8> for TransactionKind {
    type Error = EncodingError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0x02 => Ok(TransactionKind::Claim),
            0x80 => Ok(TransactionKind::Contract),
            0xd1 => Ok(TransactionKind::Invocation),
            other => Err(EncodingError::UnknownTransactionType(other)),
        }
    }
}

impl From<TransactionKind> for u8 {
    fn from(kind: TransactionKind) -> Self {
        kind.as_u8()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionAttribute {
    pub usage: u8,
    pub data: String,
}

/// Reference to an unspent output of a previous transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionInput {
    pub prev_hash: String,
    pub prev_index: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionOutput {
    pub asset_id: String,
    pub value: Fixed8,
    pub script_hash: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Witness {
    pub invocation_script: String,
    pub verification_script: String,
}

/// A NEO transaction as submitted to the exchange for signing and relay
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub version: u8,
    #[serde(default)]
    pub attributes: Vec<TransactionAttribute>,
    #[serde(default)]
    pub inputs: Vec<TransactionInput>,
    #[serde(default)]
    pub outputs: Vec<TransactionOutput>,
    #[serde(default)]
    pub scripts: Vec<Witness>,
    /// Claimed outputs (claim transactions only)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub claims: Vec<TransactionInput>,
    /// Invocation script (invocation transactions only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script: Option<String>,
    /// System fee attached to invocation transactions from version 1
    #[serde(default)]
    pub gas: Fixed8,
}

impl Transaction {
    /// Serialize to hex.
    ///
    /// Witnesses are appended only when `signed` is set and the transaction
    /// carries at least one.
    pub fn serialize(&self, signed: bool) -> Result<String, EncodingError> {
        let mut out = String::new();
        out.push_str(&number_to_hex_string(self.kind.as_u8() as u64, 1, false));
        out.push_str(&number_to_hex_string(self.version as u64, 1, false));
        out.push_str(&self.serialize_exclusive()?);

        out.push_str(&encode_var_int(self.attributes.len() as u64));
        for attribute in &self.attributes {
            out.push_str(&serialize_attribute(attribute)?);
        }

        out.push_str(&encode_var_int(self.inputs.len() as u64));
        for input in &self.inputs {
            out.push_str(&serialize_input(input)?);
        }

        out.push_str(&encode_var_int(self.outputs.len() as u64));
        for output in &self.outputs {
            out.push_str(&serialize_output(output)?);
        }

        if signed && !self.scripts.is_empty() {
            out.push_str(&encode_var_int(self.scripts.len() as u64));
            for witness in &self.scripts {
                out.push_str(&serialize_witness(witness)?);
            }
        }

        Ok(out)
    }

    fn serialize_exclusive(&self) -> Result<String, EncodingError> {
        match self.kind {
            TransactionKind::Claim => {
                let mut out = encode_var_int(self.claims.len() as u64);
                for claim in &self.claims {
                    out.push_str(&serialize_input(claim)?);
                }
                Ok(out)
            }
            TransactionKind::Contract => Ok(String::new()),
            TransactionKind::Invocation => {
                let script = self.script.as_deref().ok_or(EncodingError::MissingScript)?;
                let script = hex_field("script", script)?;
                let mut out = encode_hex_length(&script);
                out.push_str(&script);
                if self.version >= 1 {
                    out.push_str(&self.gas.to_reverse_hex());
                }
                Ok(out)
            }
        }
    }
}

/// Serialize `transaction` to hex, see [`Transaction::serialize`]
pub fn serialize_transaction(
    transaction: &Transaction,
    signed: bool,
) -> Result<String, EncodingError> {
    transaction.serialize(signed)
}

pub fn serialize_attribute(attribute: &TransactionAttribute) -> Result<String, EncodingError> {
    let usage = attribute.usage;
    if attribute.data.len() > MAX_TRANSACTION_ATTRIBUTE_SIZE {
        return Err(EncodingError::AttributeTooLarge {
            len: attribute.data.len(),
            max: MAX_TRANSACTION_ATTRIBUTE_SIZE,
        });
    }
    let data = hex_field("attribute data", &attribute.data)?;

    let mut out = number_to_hex_string(usage as u64, 1, false);
    match usage {
        attribute_usage::DESCRIPTION_URL => {
            let len = data.len() / 2;
            if len > 0xff {
                return Err(EncodingError::InvalidAttribute {
                    usage,
                    reason: format!("description url is {len} bytes, max 255"),
                });
            }
            out.push_str(&number_to_hex_string(len as u64, 1, false));
        }
        attribute_usage::DESCRIPTION | attribute_usage::REMARK..=0xff => {
            out.push_str(&encode_hex_length(&data));
        }
        _ => {}
    }

    match usage {
        // Compressed public key: the usage byte replaces the key's prefix byte
        attribute_usage::ECDH02 | attribute_usage::ECDH03 => {
            let key = data.get(2..66).ok_or_else(|| EncodingError::InvalidAttribute {
                usage,
                reason: format!("expected a 33 byte public key, got {} bytes", data.len() / 2),
            })?;
            out.push_str(key);
        }
        _ => out.push_str(&data),
    }

    Ok(out)
}

pub fn serialize_input(input: &TransactionInput) -> Result<String, EncodingError> {
    let prev_hash = hex_field("prevHash", &input.prev_hash)?;
    Ok(format!(
        "{}{}",
        reverse_hex_byte_pairs(&prev_hash),
        number_to_hex_string(input.prev_index as u64, 2, true)
    ))
}

pub fn serialize_output(output: &TransactionOutput) -> Result<String, EncodingError> {
    let asset_id = hex_field("assetId", &output.asset_id)?;
    let script_hash = hex_field("scriptHash", &output.script_hash)?;
    Ok(format!(
        "{}{}{}",
        reverse_hex_byte_pairs(&asset_id),
        output.value.to_reverse_hex(),
        reverse_hex_byte_pairs(&script_hash)
    ))
}

pub fn serialize_witness(witness: &Witness) -> Result<String, EncodingError> {
    let invocation = hex_field("invocationScript", &witness.invocation_script)?;
    let verification = hex_field("verificationScript", &witness.verification_script)?;
    Ok(format!(
        "{}{}{}{}",
        encode_hex_length(&invocation),
        invocation,
        encode_hex_length(&verification),
        verification
    ))
}

/// Validate a hex field and return it lowercased
fn hex_field(field: &'static str, value: &str) -> Result<String, EncodingError> {
    hex::decode(value).map_err(|source| EncodingError::InvalidHex { field, source })?;
    Ok(value.to_ascii_lowercase())
}
