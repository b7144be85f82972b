//! Then steps for payee lifecycle BDD scenarios.

use super::world::PayeeWorld;
use rstest_bdd_macros::then;

#[then(r#"the payee name is "{name}""#)]
fn payee_name_is(world: &PayeeWorld, name: String) -> Result<(), eyre::Report> {
    let actual = world.payee()?.name().as_str();
    if actual != name {
        return Err(eyre::eyre!("expected name '{name}', found '{actual}'"));
    }
    Ok(())
}

#[then(r#"the payee document is displayed as "{display}""#)]
fn payee_document_is(world: &PayeeWorld, display: String) -> Result<(), eyre::Report> {
    let actual = world.payee()?.document().to_string();
    if actual != display {
        return Err(eyre::eyre!("expected document '{display}', found '{actual}'"));
    }
    Ok(())
}

#[then(r#"the payee email is "{email}""#)]
fn payee_email_is(world: &PayeeWorld, email: String) -> Result<(), eyre::Report> {
    let actual = world.payee()?.email().map(|value| value.as_str());
    if actual != Some(email.as_str()) {
        return Err(eyre::eyre!("expected email '{email}', found {actual:?}"));
    }
    Ok(())
}

#[then(r#"the payee status label is "{label}""#)]
fn payee_status_label_is(world: &PayeeWorld, label: String) -> Result<(), eyre::Report> {
    let actual = world.payee()?.status().label();
    if actual != label {
        return Err(eyre::eyre!("expected status label '{label}', found '{actual}'"));
    }
    Ok(())
}

#[then("restoration recorded {count:usize} tempered fields")]
fn restoration_recorded(world: &PayeeWorld, count: usize) -> Result<(), eyre::Report> {
    let recorded = world.sink.events().len();
    if recorded != count {
        return Err(eyre::eyre!(
            "expected {count} tempered fields, found {recorded}"
        ));
    }
    Ok(())
}
