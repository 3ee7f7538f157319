use axum::Router;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::routing::post;
use serde_json::{Value, json};
use seva_domain::registration::{Attachment, Gender, IdKind};
use seva_identity::Role;
use seva_kernel::api::ApiClient;
use seva_registration::{
    FlowKind, FormSession, RegistrationError, SubmissionAdapter, SubmissionError, SubmitStatus,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;

#[derive(Clone, Default)]
struct Recorder {
    requests: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

async fn record(State(recorder): State<Recorder>, mut multipart: Multipart) {
    let mut fields = HashMap::new();
    while let Some(field) = multipart.next_field().await.unwrap() {
        let name = field.name().unwrap_or_default().to_owned();
        let value = match field.file_name().map(str::to_owned) {
            Some(file) => {
                let ty = field.content_type().unwrap_or_default().to_owned();
                let len = field.bytes().await.unwrap().len();
                format!("{file}|{ty}|{len}")
            },
            None => field.text().await.unwrap(),
        };
        fields.insert(name, value);
    }
    recorder.requests.lock().unwrap().push(fields);
}

async fn serve(router: Router) -> SubmissionAdapter {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, router).await.unwrap() });
    let client = ApiClient::with_base_url(&format!("http://{addr}/api"), Duration::from_secs(5)).unwrap();
    SubmissionAdapter::new(client)
}

fn ready_arya_mitra() -> FormSession {
    let mut form = FormSession::new(FlowKind::AryaMitra);
    let draft = form.draft_mut();
    draft.full_name = "Sunita Patil".into();
    draft.email = "sunita@example.org".into();
    draft.phone = "9876543210".into();
    draft.age = "45".into();
    draft.gender = Some(Gender::Female);
    draft.address = "Near bus stand".into();
    draft.location.set_region("Jalna");
    draft.location.set_sub_region("Partur");
    draft.postal_code = "431501".into();
    draft.tags.toggle("medical_emergency");
    draft.tags.toggle("blood_donation");
    draft.id_kind = Some(IdKind::Aadhaar);
    draft.id_number = "123412341234".into();
    draft.id_document = Some(Attachment::new("aadhaar.png", "image/png", vec![9; 512]));
    draft.consent = true;
    assert!(form.next());
    assert!(form.next());
    assert!(form.navigator().is_last());
    form
}

#[tokio::test]
async fn successful_registration_clears_the_form() {
    let recorder = Recorder::default();
    let router = Router::new()
        .route(
            "/api/arya-mitra/register",
            post(|state: State<Recorder>, multipart: Multipart| async move {
                record(state, multipart).await;
                axum::Json(json!({
                    "success": true,
                    "message": "Welcome aboard",
                    "token": "jwt-123",
                    "user": { "_id": "am-1", "fullName": "Sunita Patil", "role": "aryaMitra" }
                }))
            }),
        )
        .with_state(recorder.clone());
    let adapter = serve(router).await;

    let mut form = ready_arya_mitra();
    let receipt = form.submit(&adapter).await.unwrap();

    assert_eq!(receipt.message, "Welcome aboard");
    let login = receipt.auto_login.as_ref().unwrap();
    assert_eq!(login.token, "jwt-123");
    assert_eq!(login.user.role, Role::AryaMitra);

    assert!(form.draft().is_blank());
    assert_eq!(form.navigator().current(), 1);
    assert!(matches!(form.status(), SubmitStatus::Succeeded(_)));

    let requests = recorder.requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    let sent = &requests[0];
    assert_eq!(sent["fullName"], "Sunita Patil");
    assert_eq!(sent["region"], "Jalna");
    assert_eq!(sent["subRegion"], "Partur");
    assert_eq!(sent["consent"], "true");
    let services: Value = serde_json::from_str(&sent["services"]).unwrap();
    assert_eq!(services, json!(["medical_emergency", "blood_donation"]));
    assert_eq!(sent["idDocument"], "aadhaar.png|image/png|512");
}

#[tokio::test]
async fn duplicate_email_message_is_shown_and_draft_kept() {
    let router = Router::new().route(
        "/api/arya-mitra/register",
        post(|| async {
            (
                StatusCode::CONFLICT,
                axum::Json(json!({ "success": false, "message": "Email already registered" })),
            )
        }),
    );
    let adapter = serve(router).await;

    let mut form = ready_arya_mitra();
    let before = form.draft().clone();
    let err = form.submit(&adapter).await.unwrap_err();

    assert!(matches!(
        err,
        RegistrationError::Submission { source: SubmissionError::Rejected { status: 409, .. }, .. }
    ));
    assert_eq!(form.status(), &SubmitStatus::Failed("Email already registered".into()));
    assert_eq!(form.draft(), &before);
    assert!(form.navigator().is_last());
}

#[tokio::test]
async fn rejection_without_message_uses_generic_text() {
    let router = Router::new().route(
        "/api/arya-mitra/register",
        post(|| async { axum::Json(json!({ "success": false })) }),
    );
    let adapter = serve(router).await;

    let mut form = ready_arya_mitra();
    form.submit(&adapter).await.unwrap_err();

    assert_eq!(
        form.status(),
        &SubmitStatus::Failed(seva_domain::constants::GENERIC_FAILURE_MESSAGE.into())
    );
    assert!(!form.draft().is_blank());
}

#[tokio::test]
async fn invalid_form_makes_no_request() {
    let recorder = Recorder::default();
    let router = Router::new()
        .route("/api/arya-mitra/register", post(record))
        .with_state(recorder.clone());
    let adapter = serve(router).await;

    let mut form = ready_arya_mitra();
    form.draft_mut().consent = false;
    let err = form.submit(&adapter).await.unwrap_err();

    assert!(matches!(err, RegistrationError::Refused { .. }));
    assert!(recorder.requests.lock().unwrap().is_empty());
    assert_eq!(form.status(), &SubmitStatus::Idle);
}

#[tokio::test]
async fn unreachable_backend_keeps_the_draft() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let client = ApiClient::with_base_url(&format!("http://{addr}/api"), Duration::from_secs(2)).unwrap();
    let adapter = SubmissionAdapter::new(client);

    let mut form = ready_arya_mitra();
    let err = form.submit(&adapter).await.unwrap_err();

    assert!(matches!(err, RegistrationError::Submission { source: SubmissionError::Api { .. }, .. }));
    assert!(matches!(form.status(), SubmitStatus::Failed(_)));
    assert_eq!(form.draft().full_name, "Sunita Patil");
}
