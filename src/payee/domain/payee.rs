//! Payee aggregate root.

use super::{
    BankAccountRef, Document, Email, Name, PayeeDomainError, PayeeId, PayeeStatus, PixKey,
    StoredDocument, StoredPixKey, StoredStatus, TemperedField,
};

/// Unvalidated payee details as submitted by a caller.
///
/// An empty `email` means the payee has no email address.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PayeeDetails {
    name: String,
    document: String,
    pix_key_type: String,
    pix_key: String,
    email: String,
}

impl PayeeDetails {
    /// Bundles the raw values of a create or edit request.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        document: impl Into<String>,
        pix_key_type: impl Into<String>,
        pix_key: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            document: document.into(),
            pix_key_type: pix_key_type.into(),
            pix_key: pix_key.into(),
            email: email.into(),
        }
    }

    /// Replaces the email, keeping the other details.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }
}

/// Payee aggregate root.
///
/// A payee starts as [`PayeeStatus::Draft`], when every field except the
/// identifier may be replaced. Once it leaves draft only the email can
/// change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayeeEntity {
    id: PayeeId,
    name: Name,
    document: StoredDocument,
    status: StoredStatus,
    email: Option<Email>,
    pix_key: StoredPixKey,
    bank_account: Option<BankAccountRef>,
}

/// Parameter object for reconstructing a persisted payee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedPayeeData {
    /// Persisted payee identifier.
    pub id: PayeeId,
    /// Persisted name.
    pub name: Name,
    /// Persisted tax identifier.
    pub document: StoredDocument,
    /// Persisted lifecycle status.
    pub status: StoredStatus,
    /// Persisted email, if any.
    pub email: Option<Email>,
    /// Persisted PIX key.
    pub pix_key: StoredPixKey,
    /// Reference to the externally owned bank account, if any.
    pub bank_account: Option<BankAccountRef>,
}

impl PayeeEntity {
    /// Creates a new draft payee with a fresh identifier.
    ///
    /// Fields are validated in order: name, document, PIX key and, when not
    /// empty, email. The first failure is returned.
    ///
    /// # Errors
    ///
    /// Returns the [`PayeeDomainError`] of the first field that fails
    /// validation.
    pub fn create(details: &PayeeDetails) -> Result<Self, PayeeDomainError> {
        let name = Name::new(&details.name)?;
        let document = Document::new(&details.document)?;
        let pix_key = PixKey::new(&details.pix_key_type, &details.pix_key)?;
        let email = parse_optional_email(&details.email)?;

        Ok(Self {
            id: PayeeId::new(),
            name,
            document: document.into(),
            status: PayeeStatus::Draft.into(),
            email,
            pix_key: pix_key.into(),
            bank_account: None,
        })
    }

    /// Reconstructs a payee from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedPayeeData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            document: data.document,
            status: data.status,
            email: data.email,
            pix_key: data.pix_key,
            bank_account: data.bank_account,
        }
    }

    /// Returns the payee identifier.
    #[must_use]
    pub const fn id(&self) -> &PayeeId {
        &self.id
    }

    /// Returns the payee name.
    #[must_use]
    pub const fn name(&self) -> &Name {
        &self.name
    }

    /// Returns the tax identifier.
    #[must_use]
    pub const fn document(&self) -> &StoredDocument {
        &self.document
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> &StoredStatus {
        &self.status
    }

    /// Returns the email address, if any.
    #[must_use]
    pub const fn email(&self) -> Option<&Email> {
        self.email.as_ref()
    }

    /// Returns the PIX key.
    #[must_use]
    pub const fn pix_key(&self) -> &StoredPixKey {
        &self.pix_key
    }

    /// Returns the bank account reference, if any.
    #[must_use]
    pub const fn bank_account(&self) -> Option<&BankAccountRef> {
        self.bank_account.as_ref()
    }

    /// Lists the fields that were restored from values failing validation.
    #[must_use]
    pub fn tempered_fields(&self) -> Vec<TemperedField> {
        [
            (TemperedField::Status, self.status.is_tempered()),
            (TemperedField::Document, self.document.is_tempered()),
            (TemperedField::PixKey, self.pix_key.is_tempered()),
        ]
        .into_iter()
        .filter_map(|(field, tempered)| tempered.then_some(field))
        .collect()
    }

    /// Applies edited details.
    ///
    /// The email is always applied first; an empty email clears it. When the
    /// payee is not a draft nothing else changes. For a draft, name, document
    /// and PIX key are then validated and applied in that order. Fields
    /// applied before a failing one stay applied.
    ///
    /// # Errors
    ///
    /// Returns the [`PayeeDomainError`] of the first field that fails
    /// validation. The failing field keeps its previous value.
    pub fn edit_details(&mut self, details: &PayeeDetails) -> Result<(), PayeeDomainError> {
        self.email = parse_optional_email(&details.email)?;

        if !self.status.is_draft() {
            return Ok(());
        }

        self.name = Name::new(&details.name)?;
        self.document = Document::new(&details.document)?.into();
        self.pix_key = PixKey::new(&details.pix_key_type, &details.pix_key)?.into();
        Ok(())
    }

    /// Marks the payee as validated, freezing everything but the email.
    ///
    /// Invoked by the external validation workflow once it has accepted the
    /// payee's details.
    pub fn mark_validated(&mut self) {
        self.status = PayeeStatus::Valid.into();
    }
}

fn parse_optional_email(raw: &str) -> Result<Option<Email>, PayeeDomainError> {
    if raw.is_empty() {
        return Ok(None);
    }
    Email::new(raw).map(Some)
}
