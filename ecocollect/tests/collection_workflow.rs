//! Integration tests for the collection-validation workflow.
//!
//! These tests verify the complete flow including:
//! - Scan-driven completion (scripted camera → decode → match → ledger)
//! - The manual completion fallback path
//! - Duplicate and unrecognized payload handling
//! - Camera release on every scan exit path
//! - Weighed-collection recording and validation
//!
//! Run with: `cargo test --test collection_workflow`

use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;

use ecocollect::matcher::DEMO_CODE;
use ecocollect::notify::{Audience, RecordingNotifier, Severity};
use ecocollect::reader::scripted::{
    blank_frame, text_frame, ScriptedFrameSource, TextPayloadDecoder,
};
use ecocollect::reader::{ReaderError, ScanOutcome, ScannerConfig};
use ecocollect::route::{Completion, SimulatedConfirmer, Stop};
use ecocollect::service::{CollectionService, ScanResolution, ServiceError};
use ecocollect::weigh::WeighRequest;

// ============================================================================
// Fixtures
// ============================================================================

fn todays_route() -> Vec<Stop> {
    vec![
        Stop::new(1, "Restaurant Le Jardin", "12 Rue des Lilas", "Organic", "08:30")
            .with_code("ECO-STOP-001"),
        Stop::new(2, "Café Riviera", "4 Quai des Arts", "Glass", "09:15")
            .with_code("ECO-STOP-002"),
        Stop::new(3, "Marché Central", "1 Place du Marché", "Household", "10:00"),
    ]
}

fn workflow(
    notifier: Arc<RecordingNotifier>,
    confirm_delay: Duration,
) -> CollectionService<SimulatedConfirmer> {
    CollectionService::builder(
        SimulatedConfirmer::new(confirm_delay),
        Arc::new(TextPayloadDecoder),
    )
    .route(todays_route())
    .notifier(notifier)
    .scanner_config(ScannerConfig {
        frame_interval: Duration::from_millis(1),
    })
    .build()
}

fn fast_workflow(notifier: Arc<RecordingNotifier>) -> CollectionService<SimulatedConfirmer> {
    workflow(notifier, Duration::from_millis(2))
}

// ============================================================================
// Scan-driven completion
// ============================================================================

#[tokio::test]
async fn scan_of_expected_code_completes_stop_with_certified_notice() {
    let notifier = Arc::new(RecordingNotifier::new());
    let service = fast_workflow(notifier.clone());

    let camera = ScriptedFrameSource::new(vec![blank_frame(), text_frame("ECO-STOP-001")]);
    let released = camera.release_flag();
    let mut handle = service.start_live_scan(camera).unwrap();

    let payload = match handle.wait().await {
        ScanOutcome::Decoded(payload) => payload,
        other => panic!("expected a decoded payload, got {:?}", other),
    };
    assert!(released.load(Ordering::SeqCst), "camera must be released");

    let resolution = service.resolve_payload(&payload).await.unwrap();
    match resolution {
        ScanResolution::Completed(stop) => {
            assert_eq!(stop.id, 1);
            assert!(stop.is_completed());
        }
        other => panic!("expected completion, got {:?}", other),
    }

    // Exactly one notification: scan-certified, success, to the stop's client.
    let sent = notifier.notifications();
    assert_eq!(sent.len(), 1);
    assert_eq!(
        sent[0].audience,
        Audience::Client("Restaurant Le Jardin".to_string())
    );
    assert_eq!(sent[0].severity, Severity::Success);
    assert!(sent[0].message.contains("certified by scan"));

    assert_eq!(service.pending().len(), 2);
    assert_eq!(service.completed().len(), 1);
}

#[tokio::test]
async fn scan_matching_completed_stop_reports_duplicate_without_renotifying() {
    let notifier = Arc::new(RecordingNotifier::new());
    let service = fast_workflow(notifier.clone());

    service.resolve_payload("ECO-STOP-001").await.unwrap();
    assert_eq!(notifier.count(), 1);
    let ledger_before = service.route();

    let resolution = service.resolve_payload("ECO-STOP-001").await.unwrap();
    match resolution {
        ScanResolution::AlreadyCollected(stop) => assert_eq!(stop.id, 1),
        other => panic!("expected duplicate notice, got {:?}", other),
    }

    // Ledger unchanged, no second notification.
    assert_eq!(service.route(), ledger_before);
    assert_eq!(notifier.count(), 1);
}

#[tokio::test]
async fn unrecognized_payload_leaves_everything_untouched() {
    let notifier = Arc::new(RecordingNotifier::new());
    let service = fast_workflow(notifier.clone());

    let resolution = service.resolve_payload("WRONG-PLATFORM-42").await.unwrap();
    assert_eq!(
        resolution,
        ScanResolution::Unrecognized {
            payload: "WRONG-PLATFORM-42".to_string()
        }
    );
    assert_eq!(service.pending().len(), 3);
    assert_eq!(notifier.count(), 0);
}

#[tokio::test]
async fn demo_code_completes_earliest_pending_stop() {
    let notifier = Arc::new(RecordingNotifier::new());
    let service = fast_workflow(notifier.clone());

    service.complete_manual(1).await.unwrap();
    notifier.clear();

    let resolution = service.resolve_payload(DEMO_CODE).await.unwrap();
    match resolution {
        ScanResolution::Completed(stop) => assert_eq!(stop.id, 2),
        other => panic!("expected completion of stop 2, got {:?}", other),
    }
}

#[tokio::test]
async fn still_image_upload_resolves_like_a_live_scan() {
    use image::codecs::png::PngEncoder;
    use image::{ExtendedColorType, ImageEncoder};

    let notifier = Arc::new(RecordingNotifier::new());
    let service = fast_workflow(notifier.clone());

    let payload = "ECO-STOP-002";
    let mut bytes = Vec::new();
    PngEncoder::new(&mut bytes)
        .write_image(payload.as_bytes(), payload.len() as u32, 1, ExtendedColorType::L8)
        .unwrap();

    let resolution = service.scan_still_image(&bytes).await.unwrap();
    match resolution {
        ScanResolution::Completed(stop) => assert_eq!(stop.id, 2),
        other => panic!("expected completion, got {:?}", other),
    }
    assert_eq!(notifier.count(), 1);
}

// ============================================================================
// Manual fallback and failure paths
// ============================================================================

#[tokio::test]
async fn camera_denial_still_allows_manual_completion() {
    let notifier = Arc::new(RecordingNotifier::new());
    let service = fast_workflow(notifier.clone());

    let camera = ScriptedFrameSource::new(vec![]).with_permission_denied();
    let released = camera.release_flag();
    let mut handle = service.start_live_scan(camera).unwrap();

    assert_eq!(
        handle.wait().await,
        ScanOutcome::Failed(ReaderError::PermissionDenied)
    );
    assert!(released.load(Ordering::SeqCst), "camera must be released");

    // The manual path is independent of scanning.
    let completion = service.complete_manual(3).await.unwrap();
    match completion {
        Completion::Confirmed(stop) => {
            assert_eq!(stop.id, 3);
            assert!(stop.is_completed());
        }
        other => panic!("expected confirmation, got {:?}", other),
    }

    let sent = notifier.notifications();
    assert_eq!(sent.len(), 1);
    assert!(sent[0].message.contains("manually"));
}

#[tokio::test]
async fn dismissing_a_scan_releases_the_camera() {
    let service = fast_workflow(Arc::new(RecordingNotifier::new()));

    // Nothing decodable: the session would run until dismissed.
    let camera = ScriptedFrameSource::new(vec![]);
    let released = camera.release_flag();
    let mut handle = service.start_live_scan(camera).unwrap();

    tokio::time::sleep(Duration::from_millis(10)).await;
    handle.stop();

    assert_eq!(handle.wait().await, ScanOutcome::Cancelled);
    assert!(released.load(Ordering::SeqCst), "camera must be released");
}

#[tokio::test]
async fn concurrent_completions_of_one_stop_apply_once() {
    let notifier = Arc::new(RecordingNotifier::new());
    let service = Arc::new(workflow(notifier.clone(), Duration::from_millis(50)));

    let racing = {
        let service = Arc::clone(&service);
        tokio::spawn(async move { service.complete_manual(1).await.unwrap() })
    };
    tokio::time::sleep(Duration::from_millis(10)).await;

    // Second attempt while the first confirmation is in flight.
    let second = service.complete_manual(1).await.unwrap();
    assert_eq!(second, Completion::InFlight);

    let first = racing.await.unwrap();
    assert!(first.is_confirmed());
    assert_eq!(notifier.count(), 1);
    assert_eq!(service.completed().len(), 1);
}

#[tokio::test]
async fn completion_is_monotonic_across_the_session() {
    let service = fast_workflow(Arc::new(RecordingNotifier::new()));

    service.complete_manual(1).await.unwrap();
    service.resolve_payload("ECO-STOP-001").await.unwrap();
    service.complete_manual(1).await.unwrap();

    let stop = service.stop(1).unwrap();
    assert!(stop.is_completed());
    // Every stop is always resolvably pending or completed.
    for stop in service.route() {
        assert!(stop.is_pending() || stop.is_completed());
    }
}

// ============================================================================
// Weighed collections
// ============================================================================

#[tokio::test]
async fn weighed_collection_computes_total_and_points() {
    let notifier = Arc::new(RecordingNotifier::new());
    let service = fast_workflow(notifier.clone());

    let record = service
        .record_weighed(&WeighRequest {
            client: "Hôtel des Pins".to_string(),
            category: "Organic".to_string(),
            weight_kg: "12.5".to_string(),
            unit_price: "500".to_string(),
        })
        .unwrap();

    assert_eq!(record.total, 6250.0);
    assert_eq!(record.points, 25);

    // Payment-due to the client, summary to the admin audience.
    let sent = notifier.notifications();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[0].audience, Audience::Client("Hôtel des Pins".to_string()));
    assert!(sent[0].message.contains("6250.00"));
    assert_eq!(sent[1].audience, Audience::Admin);
}

#[tokio::test]
async fn invalid_weighed_input_leaves_history_unchanged() {
    let notifier = Arc::new(RecordingNotifier::new());
    let service = fast_workflow(notifier.clone());

    let err = service
        .record_weighed(&WeighRequest {
            client: "Hôtel des Pins".to_string(),
            category: "Organic".to_string(),
            weight_kg: "a lot".to_string(),
            unit_price: "500".to_string(),
        })
        .unwrap_err();
    assert!(matches!(err, ServiceError::Weigh(_)));

    let err = service
        .record_weighed(&WeighRequest {
            client: "".to_string(),
            category: "Organic".to_string(),
            weight_kg: "3".to_string(),
            unit_price: "500".to_string(),
        })
        .unwrap_err();
    assert!(matches!(err, ServiceError::Weigh(_)));

    assert!(service.weighed_records().is_empty());
    assert_eq!(notifier.count(), 0);
}
