use reqwest::StatusCode;
use reqwest::multipart::{Form, Part};
use serde_json::Value;
use seva::domain::registration::{Attachment, Gender, IdKind};
use seva::features::directory::{DirectoryClient, DirectoryKind, Listing};
use seva::features::identity::{Role, Session};
use seva::features::registration::{FlowKind, FormSession, SubmissionAdapter, SubmitStatus};
use seva::kernel::api::ApiClient;
use seva_dev_api::{Server, Store};
use std::time::Duration;
use tokio::net::TcpListener;

async fn spawn(store: Store) -> String {
    let server = Server::builder().store(store).build();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = server.router();
    tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });
    format!("http://{addr}/api")
}

fn api(base: &str) -> ApiClient {
    ApiClient::with_base_url(base, Duration::from_secs(5)).unwrap()
}

fn arya_mitra_form(email: &str) -> Form {
    Form::new()
        .text("fullName", "Sunita Patil")
        .text("email", email.to_owned())
        .text("region", "Jalna")
        .text("subRegion", "Partur")
        .text("postalCode", "431501")
        .text("services", r#"["medical_emergency","blood_donation"]"#)
        .part(
            "idDocument",
            Part::bytes(vec![1u8; 256]).file_name("aadhaar.png").mime_str("image/png").unwrap(),
        )
}

#[tokio::test]
async fn health_reports_up() {
    let base = spawn(Store::new()).await;
    let body: Value = reqwest::get(format!("{base}/health")).await.unwrap().json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["status"], "up");
}

#[tokio::test]
async fn seeded_directories_are_served_under_resource_keys() {
    let base = spawn(Store::seeded()).await;

    let body: Value = reqwest::get(format!("{base}/arya-mitra")).await.unwrap().json().await.unwrap();
    assert!(body["aryaMitras"].as_array().is_some_and(|a| !a.is_empty()));

    let client = DirectoryClient::new(api(&base));
    let Listing::Loaded(volunteers) = client.fetch(DirectoryKind::Volunteers).await else {
        panic!("expected volunteers");
    };
    assert!(!volunteers.is_empty());
}

#[tokio::test]
async fn duplicate_email_is_a_conflict() {
    let base = spawn(Store::new()).await;
    let http = reqwest::Client::new();
    let url = format!("{base}/arya-mitra/register");

    let first = http.post(&url).multipart(arya_mitra_form("sunita@example.org")).send().await.unwrap();
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = http.post(&url).multipart(arya_mitra_form("SUNITA@example.org")).send().await.unwrap();
    assert_eq!(second.status(), StatusCode::CONFLICT);
    let body: Value = second.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Email already registered");
}

#[tokio::test]
async fn missing_name_is_a_bad_request() {
    let base = spawn(Store::new()).await;
    let form = Form::new().text("email", "x@example.org");
    let response = reqwest::Client::new()
        .post(format!("{base}/volunteers/register"))
        .multipart(form)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn registered_arya_mitra_appears_in_the_directory() {
    let base = spawn(Store::new()).await;

    let mut form = FormSession::new(FlowKind::AryaMitra);
    let draft = form.draft_mut();
    draft.full_name = "Sunita Patil".into();
    draft.email = "sunita@example.org".into();
    draft.phone = "+91 98765 43210".into();
    draft.age = "45".into();
    draft.gender = Some(Gender::Female);
    draft.address = "Near bus stand".into();
    draft.location.set_region("Jalna");
    draft.location.set_sub_region("Partur");
    draft.postal_code = "431501".into();
    draft.tags.toggle("medical_emergency");
    draft.tags.add_custom("Night shifts");
    draft.id_kind = Some(IdKind::Pan);
    draft.id_number = "ABCDE1234F".into();
    draft.id_document = Some(Attachment::new("pan.pdf", "application/pdf", vec![3; 2048]));
    draft.consent = true;
    assert!(form.next());
    assert!(form.next());

    let receipt = form.submit(&SubmissionAdapter::new(api(&base))).await.unwrap();
    assert!(matches!(form.status(), SubmitStatus::Succeeded(_)));
    assert!(form.draft().is_blank());

    let session = Session::new();
    session.login(receipt.auto_login.expect("dev backend signs the user in")).unwrap();
    assert!(session.has_role(Role::AryaMitra));

    let Listing::Loaded(entries) = DirectoryClient::new(api(&base)).fetch(DirectoryKind::AryaMitras).await
    else {
        panic!("expected arya mitras");
    };
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].sub_region, "Partur");
    assert_eq!(entries[0].tags, ["medical_emergency", "Night shifts"]);
}

#[tokio::test]
async fn volunteer_registration_bumps_stats() {
    let base = spawn(Store::new()).await;
    let form = Form::new()
        .text("fullName", "Rohan Kulkarni")
        .text("email", "rohan@example.org")
        .text("interests", "education, fundraising");
    let response = reqwest::Client::new()
        .post(format!("{base}/volunteers/register"))
        .multipart(form)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body: Value = reqwest::get(format!("{base}/stats")).await.unwrap().json().await.unwrap();
    assert_eq!(body["stats"]["volunteers"], 1);
}
