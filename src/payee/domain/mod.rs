//! Domain model for payee identity and payment routing.
//!
//! Value objects are validated on construction and immutable afterwards.
//! Fields that are reloaded from storage use the `Stored*` wrappers, which
//! can also carry a raw value that no longer satisfies the current rules.
//! All infrastructure concerns are kept outside the domain boundary.

mod checksum;
mod digits;
mod document;
mod email;
mod error;
mod ids;
mod name;
mod patterns;
mod payee;
mod pix_key;
mod status;
mod stored;
mod tempered;

pub use digits::keep_only_digits;
pub use document::{Cnpj, Cpf, Document};
pub use email::Email;
pub use error::{InvalidNameError, ParsePayeeStatusError, PayeeDomainError};
pub use ids::{BankAccountRef, PayeeId};
pub use name::Name;
pub use payee::{PayeeDetails, PayeeEntity, PersistedPayeeData};
pub use pix_key::{ChaveAleatoria, PixKey, PixKeyType, Telefone};
pub use status::PayeeStatus;
pub use stored::{StoredDocument, StoredPixKey, StoredStatus};
pub use tempered::{TemperedField, TemperedValue, TemperedValueError};
