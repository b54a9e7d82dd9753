use actix_multipart::form::MultipartForm;
use actix_multipart::form::tempfile::TempFile;
use actix_web::HttpResponse;
use std::env;
use std::path::Path;

use crate::auth::verification;
use crate::error::ApiError;

/// Where uploaded files land on disk; served back at `/uploads`.
pub const UPLOAD_DIR: &str = "uploads";

/// Multipart form for POST /upload.
#[derive(Debug, MultipartForm)]
pub struct UploadForm {
    #[multipart(rename = "file")]
    pub file: TempFile,
}

/// Rewrite a client-supplied filename to `[a-zA-Z0-9_.-]`; everything else
/// becomes an underscore.
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// POST /upload — store a file and return its public URL.
///
/// The stored name is the sanitized client name behind a random 6-digit
/// token so repeated uploads of the same name never collide.
pub async fn upload(
    MultipartForm(form): MultipartForm<UploadForm>,
) -> Result<HttpResponse, ApiError> {
    let original = form.file.file_name.as_deref().unwrap_or("file");
    let stored_name = format!(
        "{}_{}",
        verification::generate_code(),
        sanitize_filename(original)
    );

    let destination = Path::new(UPLOAD_DIR).join(&stored_name);
    tokio::fs::copy(form.file.file.path(), &destination).await?;

    let public_url =
        env::var("PUBLIC_URL").unwrap_or_else(|_| "http://localhost:8080".to_string());
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "url": format!("{public_url}/uploads/{stored_name}"),
    })))
}
