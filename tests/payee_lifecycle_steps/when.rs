//! When steps for payee lifecycle BDD scenarios.

use super::world::{EDITED_EMAIL, PayeeWorld, build_details};
use eyre::WrapErr;
use payee_accounts::payee::services::restore_payee;
use rstest_bdd_macros::when;

#[when(r#"the payee is edited to name "{name}" and document "{document}""#)]
fn edit_payee(world: &mut PayeeWorld, name: String, document: String) -> Result<(), eyre::Report> {
    world
        .payee_mut()?
        .edit_details(&build_details(&name, &document, EDITED_EMAIL))
        .wrap_err("edit payee details")
}

#[when("the stored record is restored")]
fn restore_record(world: &mut PayeeWorld) -> Result<(), eyre::Report> {
    let record = world
        .record
        .take()
        .ok_or_else(|| eyre::eyre!("no stored record in scenario world"))?;
    world.payee = Some(restore_payee(record, &world.sink));
    Ok(())
}
