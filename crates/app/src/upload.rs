use dioxus::prelude::*;
use shared_types::UploadFile;

/// Read the first file chosen in a file input.
///
/// `Ok(None)` when the selection was cleared.
pub async fn read_first_file(evt: &FormEvent) -> Result<Option<UploadFile>, String> {
    let files = evt.files();
    let Some(file) = files.first() else {
        return Ok(None);
    };
    let name = file.name();
    match file.read_bytes().await {
        Ok(bytes) => Ok(Some(UploadFile::new(name, file.content_type(), bytes.to_vec()))),
        Err(e) => {
            tracing::warn!(file = %name, error = %e, "could not read selected file");
            Err(format!("Could not read {name}"))
        }
    }
}
