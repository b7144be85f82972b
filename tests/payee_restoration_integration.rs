//! Integration tests for restoring persisted payee records.

use payee_accounts::payee::{
    adapters::{RecordingTemperedValueSink, TracingTemperedValueSink},
    domain::{PayeeDetails, PayeeEntity, PayeeStatus, TemperedField},
    services::{PayeeRecord, restore_payee},
};
use rstest::{fixture, rstest};

#[fixture]
fn sink() -> RecordingTemperedValueSink {
    RecordingTemperedValueSink::new()
}

fn stored_records() -> Vec<PayeeRecord> {
    serde_json::from_str(
        r#"[
            {
                "id": "5c1d3e2a-0000-4000-8000-000000000001",
                "name": "Italo Feitosa",
                "document": "77386735081",
                "status": "VALID",
                "email": "italo@feitosa.com",
                "pix_key_type": "EMAIL",
                "pix_key_value": "italo@feitosa.com",
                "bank_account": "acc-1"
            },
            {
                "id": "5c1d3e2a-0000-4000-8000-000000000002",
                "name": "The Fake Company LTDA",
                "document": "19039318000105",
                "status": "DRAFT",
                "pix_key_type": "CNPJ",
                "pix_key_value": "19039318000104"
            }
        ]"#,
    )
    .expect("records should parse")
}

#[rstest]
fn intact_record_records_no_events(sink: RecordingTemperedValueSink) {
    let records = stored_records();
    let intact = records.first().cloned().expect("first record");

    let payee = restore_payee(intact, &sink);

    assert!(sink.is_empty());
    assert_eq!(*payee.status(), PayeeStatus::Valid);
    assert_eq!(payee.pix_key().to_string(), "italo@feitosa.com");
    assert_eq!(
        payee.bank_account().map(|account| account.as_str()),
        Some("acc-1")
    );
}

#[rstest]
fn tempered_document_is_recorded_once(sink: RecordingTemperedValueSink) {
    let records = stored_records();
    let tempered = records.get(1).cloned().expect("second record");

    let payee = restore_payee(tempered, &sink);

    let events = sink.events();
    assert_eq!(events.len(), 1);
    let event = events.first().expect("one event");
    assert_eq!(event.field(), TemperedField::Document);
    assert_eq!(
        event.payee_id().as_str(),
        "5c1d3e2a-0000-4000-8000-000000000002"
    );
    assert_eq!(payee.document().to_string(), "19039318000105");
    assert!(payee.email().is_none());
    assert!(payee.bank_account().is_none());
}

#[rstest]
fn restoring_every_record_never_fails(sink: RecordingTemperedValueSink) {
    let payees: Vec<PayeeEntity> = stored_records()
        .into_iter()
        .map(|record| restore_payee(record, &sink))
        .collect();

    assert_eq!(payees.len(), 2);
    assert_eq!(sink.events().len(), 1);
}

#[rstest]
fn created_payee_survives_a_storage_round_trip() {
    let created = PayeeEntity::create(&PayeeDetails::new(
        "Maria   da Silva",
        "616.388.240-70",
        "TELEFONE",
        "11987654321",
        "maria@silva.com",
    ))
    .expect("payee should be created");

    let json = serde_json::to_string(&PayeeRecord::from(&created)).expect("serialize record");
    let record: PayeeRecord = serde_json::from_str(&json).expect("deserialize record");
    assert!(!json.contains("616.388.240-70"));

    let restored = restore_payee(record, &TracingTemperedValueSink::new());
    assert_eq!(restored, created);
    assert_eq!(restored.name().as_str(), "Maria da Silva");
    assert_eq!(restored.pix_key().to_string(), "+5511987654321");
}

#[rstest]
fn recording_sink_clones_share_events(sink: RecordingTemperedValueSink) {
    let shared = sink.clone();
    let record = PayeeRecord {
        status: "UNKNOWN".to_owned(),
        ..stored_records().remove(0)
    };

    let _payee = restore_payee(record, &shared);

    assert_eq!(sink.events().len(), 1);
}
