//! Multipart registration endpoints.
//!
//! Text parts arrive as plain strings; list values (`interests`, `services`,
//! `availability`) arrive as one part holding a JSON array. A comma separated string is
//! accepted as well so the endpoints can be poked with `curl -F`.

use crate::error::{DevApiError, DevApiErrorExt};
use crate::state::AppState;
use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use serde_json::{Value, json};
use seva::domain::constants::MAX_ATTACHMENT_BYTES;
use seva::domain::directory::DirectoryEntry;
use seva::features::directory::DirectoryKind;
use seva::features::identity::{AuthenticatedUser, Role};
use seva::features::registration::{Field, FlowKind};
use seva::kernel::safe_nanoid;
use std::collections::HashMap;

/// A received file; the bytes are counted and dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Upload {
    pub(crate) field: String,
    pub(crate) file_name: String,
    pub(crate) content_type: String,
    pub(crate) size: usize,
}

/// Every part of one registration body.
#[derive(Debug, Default)]
pub(crate) struct RegistrationForm {
    text: HashMap<String, String>,
    uploads: Vec<Upload>,
}

impl RegistrationForm {
    pub(crate) async fn read(mut multipart: Multipart) -> Result<Self, DevApiError> {
        let mut form = Self::default();
        while let Some(part) = multipart.next_field().await.context("Reading next part")? {
            let Some(name) = part.name().map(str::to_owned) else {
                continue;
            };

            if let Some(file_name) = part.file_name().map(str::to_owned) {
                let content_type =
                    part.content_type().unwrap_or("application/octet-stream").to_owned();
                let size = part.bytes().await.context(name.clone())?.len();
                form.uploads.push(Upload { field: name, file_name, content_type, size });
            } else {
                let value = part.text().await.context(name.clone())?;
                form.text.insert(name, value);
            }
        }
        Ok(form)
    }

    fn text(&self, field: Field) -> Option<&str> {
        let key: &'static str = field.into();
        self.text.get(key).map(|v| v.trim()).filter(|v| !v.is_empty())
    }

    fn owned(&self, field: Field) -> Option<String> {
        self.text(field).map(str::to_owned)
    }

    fn list(&self, field: Field) -> Vec<String> {
        self.text(field).map(parse_list).unwrap_or_default()
    }

    fn check(&self) -> Result<(), DevApiError> {
        if self.text(Field::FullName).is_none() || self.text(Field::Email).is_none() {
            return Err(DevApiError::BadRequest {
                message: "Full name and email are required".into(),
                context: None,
            });
        }
        if let Some(upload) = self.uploads.iter().find(|u| u.size > MAX_ATTACHMENT_BYTES) {
            return Err(DevApiError::BadRequest {
                message: "File must be 5 MB or smaller".into(),
                context: Some(upload.field.clone().into()),
            });
        }
        Ok(())
    }

    fn into_entry(self, flow: FlowKind) -> DirectoryEntry {
        DirectoryEntry {
            id: safe_nanoid!(),
            name: self.owned(Field::FullName).unwrap_or_default(),
            organisation: self.owned(Field::Organisation).or_else(|| self.owned(Field::Occupation)),
            region: self.owned(Field::Region).unwrap_or_default(),
            sub_region: self.owned(Field::SubRegion).unwrap_or_default(),
            postal_code: self.owned(Field::PostalCode).unwrap_or_default(),
            tags: self.list(flow.tag_field()),
            phone: self.owned(Field::Phone),
            email: self.owned(Field::Email),
            created_at: Some(chrono::Utc::now().to_rfc3339()),
        }
    }
}

/// A JSON string array, or failing that a comma separated list.
pub(crate) fn parse_list(raw: &str) -> Vec<String> {
    serde_json::from_str::<Vec<String>>(raw).unwrap_or_else(|_| {
        raw.split(',').map(str::trim).filter(|v| !v.is_empty()).map(str::to_owned).collect()
    })
}

pub(crate) async fn volunteer_handler(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<Value>), DevApiError> {
    register(&state, FlowKind::Volunteer, multipart).await
}

pub(crate) async fn arya_mitra_handler(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<Value>), DevApiError> {
    register(&state, FlowKind::AryaMitra, multipart).await
}

async fn register(
    state: &AppState,
    flow: FlowKind,
    multipart: Multipart,
) -> Result<(StatusCode, Json<Value>), DevApiError> {
    let form = RegistrationForm::read(multipart).await?;
    form.check()?;

    for upload in &form.uploads {
        tracing::debug!(
            field = %upload.field,
            file = %upload.file_name,
            content_type = %upload.content_type,
            size = upload.size,
            "Attachment received"
        );
    }
    let uploads = form.uploads.len();
    let entry = form.into_entry(flow);
    let (kind, role) = match flow {
        FlowKind::Volunteer => (DirectoryKind::Volunteers, Role::Volunteer),
        FlowKind::AryaMitra => (DirectoryKind::AryaMitras, Role::AryaMitra),
    };
    let user = AuthenticatedUser {
        id: entry.id.clone(),
        name: entry.name.clone(),
        email: entry.email.clone(),
        role,
    };

    state.store.insert(kind, entry.clone())?;
    tracing::info!(%flow, id = %entry.id, uploads, "Registration stored");

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "message": "Registration successful",
            "data": entry,
            "token": safe_nanoid!(32),
            "user": user,
        })),
    ))
}
