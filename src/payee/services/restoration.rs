//! Tolerant reconstruction of payees read back from storage.
//!
//! Writes always validate. Reads never fail: each restorable field is run
//! through its validating constructor and, when that is rejected, the raw
//! persisted value is passed through and a [`TemperedValue`] is handed to
//! the injected [`TemperedValueSink`].

use crate::payee::{
    domain::{
        BankAccountRef, Document, Email, Name, PayeeEntity, PayeeId, PayeeStatus,
        PersistedPayeeData, PixKey, StoredDocument, StoredPixKey, StoredStatus, TemperedField,
        TemperedValue,
    },
    ports::TemperedValueSink,
};
use serde::{Deserialize, Serialize};

/// Persisted field set of a payee.
///
/// Only raw values are stored; display formats are derived on read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayeeRecord {
    /// Payee identifier.
    pub id: String,
    /// Person or legal name.
    pub name: String,
    /// Document digits.
    pub document: String,
    /// Status code.
    pub status: String,
    /// Email address, empty when absent.
    #[serde(default)]
    pub email: String,
    /// PIX key type tag.
    pub pix_key_type: String,
    /// Raw PIX key value.
    pub pix_key_value: String,
    /// Reference to the externally owned bank account.
    #[serde(default)]
    pub bank_account: Option<String>,
}

impl From<&PayeeEntity> for PayeeRecord {
    fn from(payee: &PayeeEntity) -> Self {
        Self {
            id: payee.id().as_str().to_owned(),
            name: payee.name().as_str().to_owned(),
            document: payee.document().value().to_owned(),
            status: payee.status().value().to_owned(),
            email: payee
                .email()
                .map(|email| email.as_str().to_owned())
                .unwrap_or_default(),
            pix_key_type: payee.pix_key().key_type().to_owned(),
            pix_key_value: payee.pix_key().value().to_owned(),
            bank_account: payee
                .bank_account()
                .map(|account| account.as_str().to_owned()),
        }
    }
}

/// Rebuilds a payee from its persisted record.
///
/// Status, document and PIX key go through the tolerant restore functions.
/// Identifier, name and email are trusted as stored.
#[must_use]
pub fn restore_payee(record: PayeeRecord, sink: &dyn TemperedValueSink) -> PayeeEntity {
    let PayeeRecord {
        id: raw_id,
        name,
        document: raw_document,
        status: raw_status,
        email: raw_email,
        pix_key_type,
        pix_key_value,
        bank_account,
    } = record;

    let id = PayeeId::from_persisted(raw_id);
    let status = restore_status(&id, &raw_status, sink);
    let pix_key = restore_pix_key(&id, &pix_key_type, &pix_key_value, sink);
    let document = restore_document(&id, &raw_document, sink);
    let email = if raw_email.is_empty() {
        None
    } else {
        Some(Email::from_trusted(raw_email))
    };

    PayeeEntity::from_persisted(PersistedPayeeData {
        id,
        name: Name::from_trusted(name),
        document,
        status,
        email,
        pix_key,
        bank_account: bank_account.map(BankAccountRef::new),
    })
}

/// Restores a status code, passing unknown codes through.
#[must_use]
pub fn restore_status(
    payee_id: &PayeeId,
    raw: &str,
    sink: &dyn TemperedValueSink,
) -> StoredStatus {
    match PayeeStatus::try_from(raw) {
        Ok(status) => status.into(),
        Err(err) => {
            sink.record(&TemperedValue::new(
                payee_id.clone(),
                TemperedField::Status,
                err,
            ));
            StoredStatus::Passthrough(raw.to_owned())
        }
    }
}

/// Restores a document, passing invalid values through.
#[must_use]
pub fn restore_document(
    payee_id: &PayeeId,
    raw: &str,
    sink: &dyn TemperedValueSink,
) -> StoredDocument {
    match Document::new(raw) {
        Ok(document) => document.into(),
        Err(err) => {
            sink.record(&TemperedValue::new(
                payee_id.clone(),
                TemperedField::Document,
                err,
            ));
            StoredDocument::Passthrough(raw.to_owned())
        }
    }
}

/// Restores a PIX key, passing an unknown type or invalid value through.
#[must_use]
pub fn restore_pix_key(
    payee_id: &PayeeId,
    key_type: &str,
    raw: &str,
    sink: &dyn TemperedValueSink,
) -> StoredPixKey {
    match PixKey::new(key_type, raw) {
        Ok(key) => key.into(),
        Err(err) => {
            sink.record(&TemperedValue::new(
                payee_id.clone(),
                TemperedField::PixKey,
                err,
            ));
            StoredPixKey::Passthrough {
                key_type: key_type.to_owned(),
                value: raw.to_owned(),
            }
        }
    }
}
