//! Shared world state for payee lifecycle BDD scenarios.

use payee_accounts::payee::{
    adapters::RecordingTemperedValueSink,
    domain::{PayeeDetails, PayeeEntity},
    services::PayeeRecord,
};
use rstest::fixture;

/// PIX key type used by every scenario payee.
pub const PIX_KEY_TYPE: &str = "TELEFONE";

/// PIX key value used by every scenario payee.
pub const PIX_KEY: &str = "99987654321";

/// Email applied by the edit step.
pub const EDITED_EMAIL: &str = "contato@fake.com";

/// Scenario world for payee lifecycle behaviour tests.
#[derive(Default)]
pub struct PayeeWorld {
    /// Payee under test.
    pub payee: Option<PayeeEntity>,
    /// Stored record waiting to be restored.
    pub record: Option<PayeeRecord>,
    /// Sink collecting tempered-value events.
    pub sink: RecordingTemperedValueSink,
}

impl PayeeWorld {
    /// Returns the payee under test.
    pub fn payee(&self) -> Result<&PayeeEntity, eyre::Report> {
        self.payee
            .as_ref()
            .ok_or_else(|| eyre::eyre!("no payee in scenario world"))
    }

    /// Returns the payee under test mutably.
    pub fn payee_mut(&mut self) -> Result<&mut PayeeEntity, eyre::Report> {
        self.payee
            .as_mut()
            .ok_or_else(|| eyre::eyre!("no payee in scenario world"))
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> PayeeWorld {
    PayeeWorld::default()
}

/// Builds details sharing the scenario PIX key.
pub fn build_details(name: &str, document: &str, email: &str) -> PayeeDetails {
    PayeeDetails::new(name, document, PIX_KEY_TYPE, PIX_KEY, email)
}
