//! Shared test fixtures for the price tracker SDK integration tests.
//!
//! Provides `setup_sample_sdk()` which builds an SDK over an in-memory
//! [`FakeTransport`] serving a small sample catalog (products, regions,
//! prices, reports) in the backend's wire format, with a temporary session
//! directory.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use price_tracker_sdk::{Method, PriceTrackerSdk, Response, Result, Transport};
use serde_json::{json, Value};

// ---------------------------------------------------------------------------
// FakeTransport
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
    pub bearer: Option<String>,
}

/// Canned replies keyed by `(method, path)`. Unknown routes answer 404.
#[derive(Default)]
pub struct FakeTransport {
    routes: Mutex<HashMap<(Method, String), Response>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(&self, method: Method, path: &str, status: u16, body: Value) {
        self.routes
            .lock()
            .unwrap()
            .insert((method, path.to_string()), Response::new(status, body));
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> RecordedRequest {
        self.requests().last().cloned().expect("no request recorded")
    }
}

impl Transport for FakeTransport {
    fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        bearer: Option<&str>,
    ) -> Result<Response> {
        self.requests.lock().unwrap().push(RecordedRequest {
            method,
            path: path.to_string(),
            body: body.cloned(),
            bearer: bearer.map(str::to_string),
        });
        let reply = self
            .routes
            .lock()
            .unwrap()
            .get(&(method, path.to_string()))
            .cloned()
            .unwrap_or_else(|| {
                Response::new(404, json!({ "message": format!("no route for {path}") }))
            });
        Ok(reply)
    }
}

// ---------------------------------------------------------------------------
// Sample SDK
// ---------------------------------------------------------------------------

/// Create an SDK backed by a [`FakeTransport`] loaded with the sample catalog.
///
/// Returns `(sdk, transport, tempdir)`. The caller must keep the `TempDir`
/// alive for the duration of the test so the session directory is not
/// deleted prematurely.
pub fn setup_sample_sdk() -> (PriceTrackerSdk, Arc<FakeTransport>, tempfile::TempDir) {
    let transport = Arc::new(FakeTransport::new());
    register_catalog(&transport);
    let (sdk, tmp) = sdk_with(Arc::clone(&transport));
    (sdk, transport, tmp)
}

pub fn sdk_with(transport: Arc<FakeTransport>) -> (PriceTrackerSdk, tempfile::TempDir) {
    let tmp = tempfile::tempdir().unwrap();
    let sdk = PriceTrackerSdk::builder()
        .session_dir(tmp.path().join("session"))
        .transport(transport)
        .build()
        .unwrap();
    (sdk, tmp)
}

pub fn register_catalog(transport: &FakeTransport) {
    let products = vec![
        product_json(1),
        product_json(2),
        product_json(3),
        product_json(4),
    ];
    transport.route(Method::Get, "/api/produits", 200, Value::Array(products));
    for id in 1..=4 {
        transport.route(Method::Get, &format!("/api/produits/{id}"), 200, product_json(id));
    }

    transport.route(
        Method::Get,
        "/api/regions",
        200,
        json!([region_json(1), region_json(2)]),
    );

    transport.route(Method::Get, "/api/prix", 200, Value::Array(sample_prices()));
    transport.route(
        Method::Get,
        "/api/signalements",
        200,
        Value::Array(sample_reports()),
    );
}

// -- products -----------------------------------------------------------------
//
// 1 Riz (Céréales)   — three prices across Dakar and Thiès, rising
// 2 Oignon (Légumes) — a single price
// 3 Huile (huiles)   — two prices, falling
// 4 Savon (Hygiène)  — no price at all

pub fn product_json(id: i64) -> Value {
    match id {
        1 => json!({"id": 1, "nom": "Riz", "categorie": "Céréales", "description": "Riz brisé parfumé", "unite": "kg"}),
        2 => json!({"id": 2, "nom": "Oignon", "categorie": "Légumes", "description": "Oignon local", "unite": "kg"}),
        3 => json!({"id": 3, "nom": "Huile", "categorie": "huiles", "description": "Huile d'arachide", "unite": "litre"}),
        _ => json!({"id": id, "nom": "Savon", "categorie": "Hygiène", "description": "Savon de Marseille", "unite": "pièce"}),
    }
}

pub fn region_json(id: i64) -> Value {
    match id {
        1 => json!({"id": 1, "nom": "Dakar"}),
        _ => json!({"id": id, "nom": "Thiès"}),
    }
}

pub fn price_json(
    id: i64,
    product: i64,
    region: i64,
    value: f64,
    at: &str,
    official: bool,
) -> Value {
    json!({
        "id": id,
        "produit": product_json(product),
        "region": region_json(region),
        "valeur": value,
        "dateMiseAJour": at,
        "source": if official { "Ministère du Commerce" } else { "Marché Sandaga" },
        "prixOfficiel": official,
    })
}

pub fn sample_prices() -> Vec<Value> {
    vec![
        price_json(101, 1, 1, 450.0, "2024-03-01T08:00:00", true),
        price_json(301, 3, 1, 1200.0, "2024-03-01T09:00:00Z", false),
        price_json(102, 1, 1, 500.0, "2024-03-05T08:00:00", false),
        price_json(201, 2, 2, 300.0, "2024-03-02T10:00:00Z", false),
        price_json(103, 1, 2, 475.0, "2024-03-03T08:00:00Z", false),
        price_json(302, 3, 1, 1000.0, "2024-03-04T09:00:00+00:00", true),
    ]
}

pub fn user_json(id: i64) -> Value {
    json!({
        "id": id,
        "nom": "Diop",
        "prenom": "Awa",
        "email": "awa.diop@example.sn",
        "telephone": "+221770000000",
        "motDePasse": "$2a$10$hash",
        "role": "CONSOMMATEUR",
        "region": region_json(1),
        "dateInscription": "2024-01-10T12:00:00"
    })
}

pub fn report_json(id: i64, product: i64, region: i64, status: &str) -> Value {
    json!({
        "id": id,
        "utilisateur": user_json(7),
        "produit": product_json(product),
        "region": region_json(region),
        "prixObserve": 550.0,
        "commentaire": "Plus cher qu'affiché",
        "dateSignalement": "2024-03-06T11:00:00",
        "statut": status
    })
}

pub fn sample_reports() -> Vec<Value> {
    vec![
        report_json(1, 1, 1, "EN_ATTENTE"),
        report_json(2, 1, 2, "VALIDE"),
        report_json(3, 3, 1, "REJETE"),
        report_json(4, 2, 1, "EN_ATTENTE"),
    ]
}
