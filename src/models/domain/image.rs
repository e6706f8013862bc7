use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::errors::{AppError, AppResult};

/// Upload formats the word extraction step accepts.
pub const ACCEPTED_IMAGE_TYPES: [&str; 3] = ["image/png", "image/jpeg", "image/jpg"];

/// An uploaded image, base64 encoded for transport to the model.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedImage {
    pub mime: &'static str,
    pub base64: String,
}

impl EncodedImage {
    pub fn from_upload(content_type: &str, bytes: &[u8]) -> AppResult<Self> {
        let mime = canonical_mime(content_type).ok_or_else(|| {
            AppError::UnsupportedMediaType(format!(
                "'{}' is not supported, upload one of: png, jpg, jpeg",
                content_type
            ))
        })?;

        if bytes.is_empty() {
            return Err(AppError::ValidationError(
                "Uploaded image is empty".to_string(),
            ));
        }

        Ok(Self {
            mime,
            base64: STANDARD.encode(bytes),
        })
    }

    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime, self.base64)
    }
}

fn canonical_mime(content_type: &str) -> Option<&'static str> {
    // Drop parameters such as "; charset=binary"
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    match essence.as_str() {
        "image/png" => Some("image/png"),
        "image/jpeg" | "image/jpg" => Some("image/jpeg"),
        _ => None,
    }
}
