//! Form extractor for `POST /admin/home-manager`.
//!
//! The vision/mission editor posts `application/x-www-form-urlencoded` while the
//! banner uploader posts `multipart/form-data`; both land in [`ManagerForm`].
//! Any other body is treated as an empty form.

use std::collections::HashMap;

use axum::extract::{Form, FromRequest, Multipart, Request};
use axum::http::StatusCode;
use axum::http::header::CONTENT_TYPE;
use tracing::warn;

use crate::domain::types::{ManagerAction, UploadedFile};
use crate::error::SiteError;
use crate::usecase::banner::AddBannerInput;
use crate::usecase::vision_mission::SaveVisionMissionInput;

pub const ACTION_FIELD: &str = "action";
pub const VISION_FIELD: &str = "vision_description";
pub const MISSION_FIELD: &str = "mission_description";
pub const BANNER_IMAGE_FIELD: &str = "banner_image";
pub const BANNER_TITLE_FIELD: &str = "image_name";

#[derive(Debug, Default)]
pub struct ManagerForm {
    fields: HashMap<String, String>,
    banner_image: Option<UploadedFile>,
}

impl ManagerForm {
    pub fn action(&self) -> Option<ManagerAction> {
        self.fields
            .get(ACTION_FIELD)
            .and_then(|v| ManagerAction::from_form(v))
    }

    pub fn into_vision_mission_input(mut self) -> SaveVisionMissionInput {
        SaveVisionMissionInput {
            vision: self.fields.remove(VISION_FIELD),
            mission: self.fields.remove(MISSION_FIELD),
        }
    }

    pub fn into_add_banner_input(mut self) -> AddBannerInput {
        AddBannerInput {
            file: self.banner_image,
            title: self.fields.remove(BANNER_TITLE_FIELD),
        }
    }
}

enum BodyKind {
    Multipart,
    UrlEncoded,
    Other,
}

fn body_kind(req: &Request) -> BodyKind {
    let content_type = req
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    if content_type.starts_with("multipart/form-data") {
        BodyKind::Multipart
    } else if content_type.starts_with("application/x-www-form-urlencoded") {
        BodyKind::UrlEncoded
    } else {
        BodyKind::Other
    }
}

impl<S> FromRequest<S> for ManagerForm
where
    S: Send + Sync,
{
    type Rejection = SiteError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match body_kind(&req) {
            BodyKind::Multipart => {
                let multipart = Multipart::from_request(req, state).await.map_err(|e| {
                    warn!(error = %e, "rejected multipart body");
                    body_error(e.status())
                })?;
                read_multipart(multipart).await
            }
            BodyKind::UrlEncoded => {
                let Form(fields) = Form::<HashMap<String, String>>::from_request(req, state)
                    .await
                    .map_err(|e| {
                        warn!(error = %e, "rejected url-encoded body");
                        body_error(e.status())
                    })?;
                Ok(Self {
                    fields,
                    banner_image: None,
                })
            }
            BodyKind::Other => Ok(Self::default()),
        }
    }
}

/// Bodies cut off by the upload limit answer 413; every other failure is a bad form.
fn body_error(status: StatusCode) -> SiteError {
    if status == StatusCode::PAYLOAD_TOO_LARGE {
        SiteError::PayloadTooLarge
    } else {
        SiteError::InvalidForm
    }
}

async fn read_multipart(mut multipart: Multipart) -> Result<ManagerForm, SiteError> {
    let mut form = ManagerForm::default();
    while let Some(field) = multipart.next_field().await.map_err(|e| {
        warn!(error = %e, "malformed multipart field");
        body_error(e.status())
    })? {
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };
        if name == BANNER_IMAGE_FIELD {
            let filename = field.file_name().unwrap_or_default().to_owned();
            let bytes = field.bytes().await.map_err(|e| {
                warn!(error = %e, "failed to read uploaded file");
                body_error(e.status())
            })?;
            form.banner_image = Some(UploadedFile { filename, bytes });
        } else {
            let value = field.text().await.map_err(|e| {
                warn!(error = %e, field = %name, "failed to read form field");
                body_error(e.status())
            })?;
            form.fields.insert(name, value);
        }
    }
    Ok(form)
}
