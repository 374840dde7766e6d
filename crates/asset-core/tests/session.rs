use std::fs;
use std::path::PathBuf;

use asset_core::{ImportOptions, ImportSession, SessionError, SessionState};
use asset_ingest::IngestError;
use asset_model::FieldKey;

const COMPLETE: &str = "Asset Name,Asset Type,Owner,Classification\n\
                        Server1,Hardware,a@b.com,Internal\n\
                        Laptop,Hardware,Jane Doe,Public\n";

#[test]
fn happy_path_completes() {
    let mut session = ImportSession::default();
    session.load_text(COMPLETE).unwrap();
    assert_eq!(session.state(), SessionState::Mapping);
    assert_eq!(session.row_count(), 2);

    let report = session.validate().unwrap();
    assert!(report.is_clean());
    assert_eq!(session.state(), SessionState::Validated);

    let records = session.import().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].id, "ASSET-002");
    assert_eq!(session.state(), SessionState::Completed);
}

#[test]
fn blocking_errors_return_to_mapping() {
    let mut session = ImportSession::default();
    session
        .load_text("Asset Name,Owner\nServer1,a@b.com\n")
        .unwrap();
    session.set_mapping_by_name("Owner", None).unwrap();

    let err = session.import().unwrap_err();
    assert!(matches!(err, SessionError::BlockingErrors { count: 3 }));
    assert_eq!(session.state(), SessionState::Mapping);
    assert!(session.records().is_empty());

    let report = session.report().expect("report kept for remediation");
    assert!(report.errors().all(|f| f.row == 0));
    assert!(report.errors().any(|f| f.column == "Asset Owner"));
}

#[test]
fn remapping_clears_stale_report() {
    let mut session = ImportSession::default();
    session.load_text(COMPLETE).unwrap();
    session.validate().unwrap();
    session.set_mapping(3, None).unwrap();
    assert!(session.report().is_none());
    assert_eq!(session.state(), SessionState::Mapping);
    assert_eq!(session.validate().unwrap().error_count(), 1);
}

#[test]
fn stale_upload_is_rejected() {
    let mut session = ImportSession::default();
    let first = session.begin_upload();
    let second = session.begin_upload();

    session
        .complete_upload(second, Ok(COMPLETE.to_string()))
        .unwrap();
    let err = session
        .complete_upload(first, Ok("Other\nx\n".to_string()))
        .unwrap_err();

    assert!(matches!(err, SessionError::StaleUpload { ticket, current: None } if ticket == first.id()));
    assert_eq!(session.columns().len(), 4);
    assert_eq!(session.row_count(), 2);
}

#[test]
fn stale_completion_while_newer_pending_keeps_reading() {
    let mut session = ImportSession::default();
    let first = session.begin_upload();
    let second = session.begin_upload();
    assert!(session.complete_upload(first, Ok(COMPLETE.to_string())).is_err());
    assert_eq!(session.state(), SessionState::Reading);
    session.complete_upload(second, Ok(COMPLETE.to_string())).unwrap();
    assert_eq!(session.state(), SessionState::Mapping);
}

#[test]
fn failed_read_is_surfaced() {
    let mut session = ImportSession::default();
    let ticket = session.begin_upload();
    let err = session
        .complete_upload(
            ticket,
            Err(IngestError::Decode {
                path: PathBuf::from("assets.csv"),
            }),
        )
        .unwrap_err();
    assert!(matches!(err, SessionError::Read(_)));
    assert_eq!(session.state(), SessionState::ReadFailed);
    assert!(session.read_error().is_some());
    assert!(matches!(
        session.validate(),
        Err(SessionError::InvalidState { .. })
    ));

    session.load_text(COMPLETE).unwrap();
    assert_eq!(session.state(), SessionState::Mapping);
    assert!(session.read_error().is_none());
}

#[test]
fn load_file_reads_from_disk() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("assets.csv");
    fs::write(&path, COMPLETE).expect("write file");

    let mut session = ImportSession::default();
    session.load_file(&path).unwrap();
    assert_eq!(session.row_count(), 2);

    let missing = session.load_file(&dir.path().join("missing.csv"));
    assert!(matches!(missing, Err(SessionError::Read(IngestError::FileRead { .. }))));
    assert_eq!(session.state(), SessionState::ReadFailed);
}

#[test]
fn manual_options_skip_auto_map() {
    let mut session = ImportSession::new(ImportOptions::manual());
    session.load_text(COMPLETE).unwrap();
    assert!(session.columns().iter().all(|c| c.mapped_to.is_none()));
    assert_eq!(session.mapping_summary().missing_required.len(), 4);

    assert_eq!(session.auto_map().unwrap(), 4);
    assert_eq!(session.columns()[2].mapped_to, Some(FieldKey::Owner));
}

#[test]
fn completion_callback_receives_records() {
    let mut session = ImportSession::default();
    session.load_text(COMPLETE).unwrap();
    let mut received = Vec::new();
    session.import_with(|records| received = records).unwrap();
    assert_eq!(received.len(), 2);
    assert_eq!(received[0].text(FieldKey::Name), Some("Server1"));
}

#[test]
fn mapping_requires_loaded_file() {
    let mut session = ImportSession::default();
    assert!(matches!(
        session.set_mapping(0, Some(FieldKey::Name)),
        Err(SessionError::InvalidState { .. })
    ));
    session.load_text(COMPLETE).unwrap();
    session.reset();
    assert_eq!(session.state(), SessionState::Idle);
    assert!(session.columns().is_empty());
}

#[test]
fn import_after_failed_read_is_rejected() {
    let mut session = ImportSession::default();
    session.load_text(COMPLETE).unwrap();
    session.validate().unwrap();

    let ticket = session.begin_upload();
    let _ = session.complete_upload(
        ticket,
        Err(IngestError::Decode {
            path: PathBuf::from("newer.csv"),
        }),
    );
    assert_eq!(session.state(), SessionState::ReadFailed);

    let err = session.import().unwrap_err();
    assert!(matches!(
        err,
        SessionError::InvalidState {
            action: "import",
            state: SessionState::ReadFailed
        }
    ));
    assert_eq!(session.state(), SessionState::ReadFailed);
    assert!(session.records().is_empty());
    assert!(session.report().is_none());
    assert!(session.columns().is_empty());
}

#[test]
fn import_while_reading_is_rejected() {
    let mut session = ImportSession::default();
    session.load_text(COMPLETE).unwrap();
    session.validate().unwrap();

    let ticket = session.begin_upload();
    assert_eq!(session.row_count(), 0);
    assert!(matches!(
        session.import(),
        Err(SessionError::InvalidState {
            state: SessionState::Reading,
            ..
        })
    ));
    let mut called = false;
    assert!(session.import_with(|_| called = true).is_err());
    assert!(!called);
    assert_eq!(session.state(), SessionState::Reading);

    let newer = "Asset Name,Asset Type,Owner,Classification\n\
                 Router,Network,ops@corp.com,Internal\n";
    session.complete_upload(ticket, Ok(newer.to_string())).unwrap();
    let records = session.import().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].text(FieldKey::Name), Some("Router"));
    assert_eq!(session.state(), SessionState::Completed);
}
