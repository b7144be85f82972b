//! Given steps for payee lifecycle BDD scenarios.

use super::world::{PIX_KEY, PIX_KEY_TYPE, PayeeWorld, build_details};
use eyre::WrapErr;
use payee_accounts::payee::{domain::PayeeEntity, services::PayeeRecord};
use rstest_bdd_macros::given;

#[given(r#"a draft payee named "{name}" with document "{document}""#)]
fn a_draft_payee(world: &mut PayeeWorld, name: String, document: String) -> Result<(), eyre::Report> {
    let payee = PayeeEntity::create(&build_details(&name, &document, ""))
        .wrap_err("create draft payee for scenario")?;
    world.payee = Some(payee);
    Ok(())
}

#[given("the payee has been validated")]
fn payee_validated(world: &mut PayeeWorld) -> Result<(), eyre::Report> {
    world.payee_mut()?.mark_validated();
    Ok(())
}

#[given(r#"a stored payee record with document "{document}" and status "{status}""#)]
fn a_stored_record(world: &mut PayeeWorld, document: String, status: String) {
    world.record = Some(PayeeRecord {
        id: "stored-payee".to_owned(),
        name: "Italo Feitosa".to_owned(),
        document,
        status,
        email: String::new(),
        pix_key_type: PIX_KEY_TYPE.to_owned(),
        pix_key_value: PIX_KEY.to_owned(),
        bank_account: None,
    });
}
