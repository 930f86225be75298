use axum::extract::Multipart;

use crate::dto::{file_dto::FileDto, form_fields::FormFields};
use crate::error::Result;

/// Decoded `multipart/form-data` body: text fields plus the optional `file`
/// part. A file part with no name and no bytes counts as absent.
pub struct UploadForm {
    pub fields: FormFields,
    pub file: Option<FileDto>,
}

pub async fn read_upload_form(mut multipart: Multipart) -> Result<UploadForm> {
    let mut fields = FormFields::default();
    let mut file = None;

    while let Some(field) = multipart.next_field().await? {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };
        if name == "file" {
            let file_name = field.file_name().unwrap_or_default().to_string();
            let data = field.bytes().await.map_err(|e| {
                tracing::error!("Failed to read attachment bytes: {}", e);
                e
            })?;
            if !file_name.is_empty() || !data.is_empty() {
                file = Some(FileDto::new(file_name, data.to_vec()));
            }
        } else {
            fields.insert(name, field.text().await?);
        }
    }

    Ok(UploadForm { fields, file })
}
