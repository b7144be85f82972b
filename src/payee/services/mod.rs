//! Application services for payee persistence boundaries.

mod restoration;

pub use restoration::{
    PayeeRecord, restore_document, restore_payee, restore_pix_key, restore_status,
};
