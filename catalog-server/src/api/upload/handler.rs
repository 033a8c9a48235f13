//! Upload Handlers
//!
//! Accepts multipart uploads from the admin panel, stores the file,
//! then records it. MIME checks trust the declared content type; the
//! store never executes anything it holds.

use axum::{
    Json,
    extract::{Multipart, State},
    http::StatusCode,
};
use serde::Serialize;

use crate::core::ServerState;
use crate::db::repository::{banner, car, image};
use crate::services::ImageStore;
use crate::utils::{AppError, AppResult};

/// Maximum file size (5MB)
pub(super) const MAX_UPLOAD_SIZE: usize = 5 * 1024 * 1024;

/// Raster formats for catalog imagery
const ALLOWED_IMAGE_TYPES: &[&str] = &["image/jpeg", "image/png", "image/webp"];

/// Banner art may also be vector
const ALLOWED_BANNER_TYPES: &[&str] = &["image/jpeg", "image/png", "image/webp", "image/svg+xml"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UploadKind {
    Thumbnail,
    Variant,
    BannerMain,
    BannerBackground,
}

impl UploadKind {
    fn parse(value: &str) -> Option<Self> {
        match value {
            "thumbnail" => Some(Self::Thumbnail),
            "variant" => Some(Self::Variant),
            "banner-main" => Some(Self::BannerMain),
            "banner-background" => Some(Self::BannerBackground),
            _ => None,
        }
    }

    fn allowed_types(&self) -> &'static [&'static str] {
        match self {
            Self::BannerMain | Self::BannerBackground => ALLOWED_BANNER_TYPES,
            Self::Thumbnail | Self::Variant => ALLOWED_IMAGE_TYPES,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub id: i64,
    pub url: String,
}

struct UploadForm {
    kind: Option<String>,
    car_id: Option<String>,
    file: Option<(String, String, Vec<u8>)>,
}

async fn read_form(mut multipart: Multipart) -> AppResult<UploadForm> {
    let mut form = UploadForm {
        kind: None,
        car_id: None,
        file: None,
    };

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(|s| s.to_string());
        match name.as_deref() {
            Some("type") => form.kind = Some(field.text().await?),
            Some("carId") => form.car_id = Some(field.text().await?),
            Some("file") => {
                let file_name = field.file_name().unwrap_or("upload").to_string();
                let content_type = field.content_type().unwrap_or_default().to_string();
                let data = field.bytes().await?.to_vec();
                form.file = Some((file_name, content_type, data));
            }
            // Unknown fields are ignored
            _ => {}
        }
    }
    Ok(form)
}

/// POST /api/upload - store an image and record it
///
/// Form fields: `type` (thumbnail | variant | banner-main |
/// banner-background), `file`, and `carId` for variant uploads.
pub async fn upload(
    State(state): State<ServerState>,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<UploadResponse>)> {
    let form = read_form(multipart).await?;

    let kind_raw = form
        .kind
        .ok_or_else(|| AppError::validation("type field is required"))?;
    let kind = UploadKind::parse(&kind_raw)
        .ok_or_else(|| AppError::validation(format!("unknown upload type '{kind_raw}'")))?;

    let (file_name, content_type, data) = form
        .file
        .ok_or_else(|| AppError::validation("file field is required"))?;

    if data.is_empty() {
        return Err(AppError::validation("file is empty"));
    }
    if data.len() > MAX_UPLOAD_SIZE {
        return Err(AppError::validation("file is too large"));
    }
    if !kind.allowed_types().contains(&content_type.as_str()) {
        return Err(AppError::validation(format!(
            "unsupported file type '{content_type}'"
        )));
    }

    // Variant uploads attach to an existing car
    let car_id = match kind {
        UploadKind::Variant => {
            let raw = form
                .car_id
                .ok_or_else(|| AppError::validation("carId is required for variant uploads"))?;
            let id = raw
                .trim()
                .parse::<i64>()
                .map_err(|_| AppError::validation("carId is not a valid number"))?;
            if car::find_by_id(&state.pool, id).await?.is_none() {
                return Err(AppError::not_found(format!("Car {id} not found")));
            }
            Some(id)
        }
        _ => None,
    };

    let key = ImageStore::make_key(car_id, &file_name);
    let url = state.images.public_url(&key);

    if let Err(e) = state.images.put(&key, &data).await {
        tracing::error!(key = %key, error = %e, "Failed to store uploaded image");
        return Err(AppError::internal("Failed to store uploaded image"));
    }

    // A failure past this point leaves the stored file orphaned: the
    // store write is not compensated, only logged.
    let inserted = match (kind, car_id) {
        (UploadKind::Thumbnail, _) => image::create_thumbnail(&state.pool, &url)
            .await
            .map(|t| UploadResponse { id: t.id, url: t.url }),
        (UploadKind::Variant, Some(id)) => image::create_variant(&state.pool, id, &url)
            .await
            .map(|v| UploadResponse { id: v.id, url: v.url }),
        (UploadKind::Variant, None) => {
            return Err(AppError::validation("carId is required for variant uploads"));
        }
        (UploadKind::BannerMain | UploadKind::BannerBackground, _) => {
            banner::create_image(&state.pool, &url)
                .await
                .map(|b| UploadResponse { id: b.id, url: b.url })
        }
    };

    match inserted {
        Ok(response) => {
            tracing::info!(kind = %kind_raw, key = %key, size = data.len(), "Image uploaded");
            Ok((StatusCode::CREATED, Json(response)))
        }
        Err(e) => {
            tracing::warn!(key = %key, error = %e, "Image stored but row insert failed; file left orphaned");
            Err(AppError::database(format!("Image record insert failed: {e}")))
        }
    }
}
