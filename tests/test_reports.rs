//! Report query integration tests.

mod common;

use price_tracker_sdk::models::{PriceReportForm, ReportStatus, ReportUpdate};
use price_tracker_sdk::{Method, PriceTrackerError};

#[test]
fn list_decodes_reports() {
    let (sdk, _transport, _tmp) = common::setup_sample_sdk();
    let reports = sdk.reports().list().unwrap();
    assert_eq!(reports.len(), 4);
    assert_eq!(reports[0].status, ReportStatus::Pending);
    assert_eq!(reports[0].user.display_name(), "Awa Diop");
    assert_eq!(reports[1].status, ReportStatus::Validated);
}

#[test]
fn filters_by_product_region_and_status() {
    let (sdk, _transport, _tmp) = common::setup_sample_sdk();
    let q = sdk.reports();
    assert_eq!(q.by_product(1).unwrap().len(), 2);
    assert_eq!(q.by_region(1).unwrap().len(), 3);
    assert_eq!(q.by_status(ReportStatus::Pending).unwrap().len(), 2);
    assert_eq!(q.by_user(7).unwrap().len(), 4);
    assert!(q.by_user(8).unwrap().is_empty());
}

#[test]
fn stats_count_by_status_product_and_region() {
    let (sdk, _transport, _tmp) = common::setup_sample_sdk();
    let stats = sdk.reports().stats().unwrap();
    assert_eq!(stats.total, 4);
    assert_eq!(stats.pending, 2);
    assert_eq!(stats.validated, 1);
    assert_eq!(stats.rejected, 1);
    assert_eq!(stats.by_product["Riz"], 2);
    assert_eq!(stats.by_product["Huile"], 1);
    assert_eq!(stats.by_region["Dakar"], 3);
    assert_eq!(stats.by_region["Thiès"], 1);
}

#[test]
fn submit_price_report_posts_pending_report_with_id_refs() {
    let (sdk, transport, _tmp) = common::setup_sample_sdk();
    transport.route(
        Method::Post,
        "/api/signalements",
        201,
        common::report_json(9, 1, 2, "EN_ATTENTE"),
    );

    let created = sdk
        .reports()
        .submit_price_report(PriceReportForm {
            product_id: 1,
            region_id: 2,
            user_id: 7,
            observed_price: 550.0,
            comment: None,
        })
        .unwrap();
    assert_eq!(created.id, 9);

    let req = transport.last_request();
    assert_eq!(req.method, Method::Post);
    assert_eq!(req.path, "/api/signalements");
    let body = req.body.unwrap();
    assert_eq!(body["produit"], serde_json::json!({"id": 1}));
    assert_eq!(body["region"], serde_json::json!({"id": 2}));
    assert_eq!(body["utilisateur"], serde_json::json!({"id": 7}));
    assert_eq!(body["prixObserve"], 550.0);
    assert_eq!(body["commentaire"], "");
    assert_eq!(body["statut"], "EN_ATTENTE");
    assert!(body["dateSignalement"].is_string());
}

#[test]
fn submit_rejects_non_positive_price_without_sending() {
    let (sdk, transport, _tmp) = common::setup_sample_sdk();
    let before = transport.requests().len();
    let err = sdk
        .reports()
        .submit_price_report(PriceReportForm {
            product_id: 1,
            region_id: 1,
            user_id: 7,
            observed_price: 0.0,
            comment: Some("gratuit ?".into()),
        })
        .unwrap_err();
    assert!(matches!(err, PriceTrackerError::InvalidArgument(_)));
    assert_eq!(transport.requests().len(), before);
}

#[test]
fn update_sends_only_set_fields() {
    let (sdk, transport, _tmp) = common::setup_sample_sdk();
    transport.route(
        Method::Put,
        "/api/signalements/1",
        200,
        common::report_json(1, 1, 1, "VALIDE"),
    );
    let update = ReportUpdate {
        status: Some(ReportStatus::Validated),
        ..ReportUpdate::default()
    };
    let updated = sdk.reports().update(1, &update).unwrap();
    assert_eq!(updated.status, ReportStatus::Validated);
    assert_eq!(
        transport.last_request().body.unwrap(),
        serde_json::json!({"statut": "VALIDE"})
    );
}

#[test]
fn server_error_surfaces_status_and_message() {
    let (sdk, transport, _tmp) = common::setup_sample_sdk();
    transport.route(
        Method::Get,
        "/api/signalements",
        500,
        serde_json::json!({"message": "database down"}),
    );
    match sdk.reports().list().unwrap_err() {
        PriceTrackerError::Api { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "database down");
        }
        other => panic!("unexpected error: {other}"),
    }
}
