mod common;

use std::sync::atomic::Ordering;

use common::{MockGateway, basic_draft, candidate, record, temp_store};
use wardbook::store::RecordStore;
use wardbook::types::{Gender, Role};
use wardbook::{
    Directory, NoticeLevel, ProfileDraft, SubmitKind, SubmitOutcome, WardbookError,
};

#[tokio::test]
async fn test_submit_into_empty_directory_creates_and_selects() {
    let (_guard, store) = temp_store();
    let (gateway, log) = MockGateway::new();
    let mut directory = Directory::new(store, gateway);

    let outcome = directory
        .submit(basic_draft(), SubmitKind::Basic)
        .await
        .unwrap();
    let id = match outcome {
        SubmitOutcome::Created(id) => id,
        other => panic!("expected create, got {other:?}"),
    };

    assert!(id > 0);
    assert_eq!(directory.records().len(), 1);
    assert_eq!(directory.records()[0].id, id);
    assert_eq!(directory.records()[0].email, "a@x.com");
    assert_eq!(directory.current_id(), Some(id));

    // Creates are local-only; nothing went over the wire.
    assert_eq!(log.create_calls.load(Ordering::SeqCst), 0);
    assert_eq!(log.update_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_update_is_gated_on_the_remote_call() {
    let (_guard, mut store) = temp_store();
    store.add(record(5, "Weaver")).unwrap();
    let (gateway, log) = MockGateway::new();
    let mut directory = Directory::new(store, gateway);

    let mut draft = ProfileDraft::from_record(&directory.records()[0]);
    draft.last_name = "Weaver-Smith".to_string();

    let outcome = directory.submit(draft, SubmitKind::Basic).await.unwrap();
    assert_eq!(outcome, SubmitOutcome::Updated(5));
    assert_eq!(log.update_calls.load(Ordering::SeqCst), 1);
    assert_eq!(directory.records()[0].last_name, "Weaver-Smith");
    assert_eq!(directory.current_id(), Some(5));

    let notices = directory.take_notices();
    assert!(notices.iter().any(|n| n.level == NoticeLevel::Success));
}

#[tokio::test]
async fn test_rejected_update_leaves_collection_unchanged() {
    let (_guard, mut store) = temp_store();
    store.add(record(5, "Weaver")).unwrap();
    let (gateway, log) = MockGateway::new();
    log.reject_remote(true);
    let mut directory = Directory::new(store, gateway);

    let mut draft = ProfileDraft::from_record(&directory.records()[0]);
    draft.last_name = "Weaver-Smith".to_string();

    let err = directory
        .submit(draft, SubmitKind::Basic)
        .await
        .unwrap_err();
    assert!(matches!(err, WardbookError::RemoteRejected(_)));
    assert_eq!(log.update_calls.load(Ordering::SeqCst), 1);
    assert_eq!(directory.records()[0].last_name, "Weaver");

    let notices = directory.take_notices();
    assert!(notices.iter().any(|n| n.level == NoticeLevel::Error));
}

#[tokio::test]
async fn test_minor_blocks_submission_before_any_mutation() {
    let (_guard, mut store) = temp_store();
    store.add(record(5, "Weaver")).unwrap();
    let (gateway, log) = MockGateway::new();
    let mut directory = Directory::new(store, gateway);

    let today = jiff::Zoned::now().date();
    let mut draft = ProfileDraft::from_record(&directory.records()[0]);
    draft.gender = Some(Gender::Female);
    draft.role = Some(Role::Doctor);
    draft.dob = Some(jiff::civil::date(today.year() - 17, 1, 1));

    let err = directory
        .submit(draft, SubmitKind::Profile)
        .await
        .unwrap_err();
    assert!(matches!(err, WardbookError::Validation(_)));

    // Blocked entirely: no gateway call, no collection mutation.
    assert_eq!(log.update_calls.load(Ordering::SeqCst), 0);
    assert_eq!(directory.records()[0].last_name, "Weaver");
    assert!(directory.take_notices().is_empty());
}

#[tokio::test]
async fn test_unknown_id_is_attached_without_remote_call() {
    let (_guard, mut store) = temp_store();
    store.add(record(5, "Weaver")).unwrap();
    let (gateway, log) = MockGateway::new();
    let mut directory = Directory::new(store, gateway);

    let mut draft = basic_draft();
    draft.id = Some(9);

    let outcome = directory.submit(draft, SubmitKind::Basic).await.unwrap();
    assert_eq!(outcome, SubmitOutcome::Attached(9));
    assert_eq!(directory.records().len(), 2);
    assert_eq!(directory.current_id(), Some(9));
    assert_eq!(log.create_calls.load(Ordering::SeqCst), 0);
    assert_eq!(log.update_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_register_round_trips_before_admitting_locally() {
    let (_guard, store) = temp_store();
    let (gateway, log) = MockGateway::new();
    let mut directory = Directory::new(store, gateway);

    let id = directory.register(basic_draft()).await.unwrap();
    assert_eq!(log.create_calls.load(Ordering::SeqCst), 1);
    assert_eq!(directory.records().len(), 1);
    assert_eq!(directory.current_id(), Some(id));
}

#[tokio::test]
async fn test_rejected_register_admits_nothing() {
    let (_guard, store) = temp_store();
    let (gateway, log) = MockGateway::new();
    log.reject_remote(true);
    let mut directory = Directory::new(store, gateway);

    let err = directory.register(basic_draft()).await.unwrap_err();
    assert!(matches!(err, WardbookError::RemoteRejected(_)));
    assert_eq!(log.create_calls.load(Ordering::SeqCst), 1);
    assert!(directory.records().is_empty());
    assert_eq!(directory.current_id(), None);

    let notices = directory.take_notices();
    assert!(notices.iter().any(|n| n.level == NoticeLevel::Error));
}

#[tokio::test]
async fn test_delete_clears_matching_selection() {
    let (_guard, mut store) = temp_store();
    store.add(record(1, "Bluth")).unwrap();
    store.add(record(2, "Weaver")).unwrap();
    let (gateway, log) = MockGateway::new();
    let mut directory = Directory::new(store, gateway);
    assert!(directory.select(2));

    directory.delete(2).await.unwrap();
    assert_eq!(log.delete_calls.load(Ordering::SeqCst), 1);
    assert_eq!(directory.records().len(), 1);
    assert_eq!(directory.current_id(), None);
}

#[tokio::test]
async fn test_rejected_delete_keeps_record_and_selection() {
    let (_guard, mut store) = temp_store();
    store.add(record(1, "Bluth")).unwrap();
    store.add(record(2, "Weaver")).unwrap();
    let (gateway, log) = MockGateway::new();
    log.reject_remote(true);
    let mut directory = Directory::new(store, gateway);
    assert!(directory.select(2));

    let err = directory.delete(2).await.unwrap_err();
    assert!(matches!(err, WardbookError::RemoteRejected(_)));
    assert_eq!(directory.records().len(), 2);
    assert_eq!(directory.current_id(), Some(2));

    let notices = directory.take_notices();
    assert!(notices.iter().any(|n| n.level == NoticeLevel::Error));
}

#[tokio::test]
async fn test_delete_of_unknown_record_never_reaches_the_gateway() {
    let (_guard, store) = temp_store();
    let (gateway, log) = MockGateway::new();
    let mut directory = Directory::new(store, gateway);

    let err = directory.delete(42).await.unwrap_err();
    assert!(matches!(err, WardbookError::RecordNotFound(42)));
    assert_eq!(log.delete_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_attach_candidate_is_local_only() {
    let (_guard, store) = temp_store();
    let (gateway, log) = MockGateway::new();
    let mut directory = Directory::new(store, gateway);

    let id = directory.attach_candidate(candidate(7)).unwrap();
    assert_eq!(id, 7);
    assert_eq!(directory.records().len(), 1);
    assert_eq!(directory.current_id(), Some(7));
    assert_eq!(log.create_calls.load(Ordering::SeqCst), 0);

    let err = directory.attach_candidate(candidate(7)).unwrap_err();
    assert!(matches!(err, WardbookError::DuplicateId(7)));
    assert_eq!(directory.records().len(), 1);
}

#[tokio::test]
async fn test_mutations_survive_a_session_restart() {
    let dir = tempfile::TempDir::new().unwrap();
    let open = || {
        RecordStore::open_at(
            dir.path().join("users.json"),
            dir.path().join("total_pages.json"),
        )
    };

    {
        let (gateway, _log) = MockGateway::new();
        let mut directory = Directory::new(open(), gateway);
        directory
            .submit(basic_draft(), SubmitKind::Basic)
            .await
            .unwrap();
        directory.attach_candidate(candidate(7)).unwrap();
    }

    let reopened = open();
    assert_eq!(reopened.records().len(), 2);
    assert!(reopened.contains(7));
}
