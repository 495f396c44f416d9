//! File selection and multipart request building.
//!
//! The browser `File` is read once into memory. The same bytes feed the local
//! preview and the `file` part of the upload.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::multipart::{Form, Part};

use crate::error::ApiError;

/// Value for the file input's `accept` attribute.
pub const ACCEPTED_EXTENSIONS: &str = ".pdf,.png,.jpg,.jpeg";

/// Advisory upload limit. The server enforces the real one.
pub const SOFT_SIZE_LIMIT_BYTES: usize = 20 * 1024 * 1024;

/// A drawing picked by the user, held in memory until the workflow resets.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile {
    pub name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl SelectedFile {
    /// Build from raw parts. An empty mime type is inferred from the extension.
    pub fn new(name: impl Into<String>, mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        let name = name.into();
        let mut mime = mime.into();
        if mime.is_empty() {
            mime = mime_from_name(&name).to_string();
        }
        Self { name, mime, bytes }
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    /// Size in megabytes with two decimals, e.g. `"1.50 MB"`.
    pub fn size_label(&self) -> String {
        format!("{:.2} MB", self.size() as f64 / 1024.0 / 1024.0)
    }

    pub fn exceeds_soft_limit(&self) -> bool {
        self.size() > SOFT_SIZE_LIMIT_BYTES
    }

    pub fn has_supported_extension(&self) -> bool {
        let lower = self.name.to_lowercase();
        [".pdf", ".png", ".jpg", ".jpeg"].iter().any(|ext| lower.ends_with(ext))
    }

    /// Whether the browser can show the preview as an `<img>`.
    pub fn is_image(&self) -> bool {
        self.mime.starts_with("image/")
    }

    /// `data:` URL of the file contents for the local preview.
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime, STANDARD.encode(&self.bytes))
    }
}

fn mime_from_name(name: &str) -> &'static str {
    let lower = name.to_lowercase();
    if lower.ends_with(".pdf") {
        "application/pdf"
    } else if lower.ends_with(".png") {
        "image/png"
    } else if lower.ends_with(".jpg") || lower.ends_with(".jpeg") {
        "image/jpeg"
    } else {
        "application/octet-stream"
    }
}

/// Multipart body: `file` first, then the option fields in order.
pub fn build_form(file: &SelectedFile, fields: Vec<(&'static str, String)>) -> Result<Form, ApiError> {
    let part = Part::bytes(file.bytes.clone())
        .file_name(file.name.clone())
        .mime_str(&file.mime)
        .map_err(|e| ApiError::Request(e.to_string()))?;

    let form = fields
        .into_iter()
        .fold(Form::new().part("file", part), |form, (name, value)| form.text(name, value));
    Ok(form)
}

/// Read a browser `File` into memory.
pub async fn read_file(file: web_sys::File) -> Result<SelectedFile, String> {
    use js_sys::{ArrayBuffer, Uint8Array};
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;

    let array_buffer: ArrayBuffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("Failed to read file: {:?}", e))?
        .dyn_into()
        .map_err(|_| "Failed to convert to ArrayBuffer".to_string())?;

    let bytes = Uint8Array::new(&array_buffer).to_vec();
    Ok(SelectedFile::new(file.name(), file.type_(), bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_inferred_from_extension() {
        assert_eq!(SelectedFile::new("part.PDF", "", vec![]).mime, "application/pdf");
        assert_eq!(SelectedFile::new("part.jpeg", "", vec![]).mime, "image/jpeg");
        assert_eq!(SelectedFile::new("part.png", "image/png", vec![]).mime, "image/png");
        assert_eq!(SelectedFile::new("part.dwg", "", vec![]).mime, "application/octet-stream");
    }

    #[test]
    fn test_data_url() {
        let file = SelectedFile::new("a.png", "image/png", b"abc".to_vec());
        assert_eq!(file.data_url(), "data:image/png;base64,YWJj");
        assert!(file.is_image());
    }

    #[test]
    fn test_pdf_is_not_image() {
        let file = SelectedFile::new("drawing.pdf", "application/pdf", vec![0; 10]);
        assert!(!file.is_image());
        assert!(file.has_supported_extension());
    }

    #[test]
    fn test_size_label_and_soft_limit() {
        let file = SelectedFile::new("big.png", "image/png", vec![0; 1024 * 1024 * 3 / 2]);
        assert_eq!(file.size_label(), "1.50 MB");
        assert!(!file.exceeds_soft_limit());

        let huge = SelectedFile::new("huge.png", "image/png", vec![0; SOFT_SIZE_LIMIT_BYTES + 1]);
        assert!(huge.exceeds_soft_limit());
    }

    #[test]
    fn test_unsupported_extension() {
        let file = SelectedFile::new("notes.txt", "text/plain", vec![1]);
        assert!(!file.has_supported_extension());
    }

    #[test]
    fn test_build_form_accepts_valid_mime() {
        let file = SelectedFile::new("a.png", "image/png", vec![1, 2, 3]);
        let fields = crate::options::AnalyzeOptions::default().form_fields();
        assert!(build_form(&file, fields).is_ok());
    }

    #[test]
    fn test_build_form_rejects_bad_mime() {
        let file = SelectedFile::new("a.png", "not a mime", vec![1, 2, 3]);
        let fields = crate::options::AnalyzeOptions::default().form_fields();
        assert!(matches!(build_form(&file, fields), Err(ApiError::Request(_))));
    }
}
