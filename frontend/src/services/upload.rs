//! HTTP service uploading PDF menus to the parsing endpoint.

use gloo_net::http::Request;
use web_sys::{File, FormData};

use crate::config::{MAX_FILE_SIZE, PDF_MIME, UPLOAD_FIELD};
use crate::services::notify::{notify_error, Notifier};
use crate::types::{AppError, AppResult, Menu, UploadPhase, UploadResponse};

/// A file the user picked for upload.
pub trait PdfSource {
    fn file_name(&self) -> String;
    fn byte_size(&self) -> u64;
}

impl PdfSource for File {
    fn file_name(&self) -> String {
        self.name()
    }

    fn byte_size(&self) -> u64 {
        self.size() as u64
    }
}

/// Whether a dropped file announces itself as a PDF.
pub fn is_pdf_mime(mime: &str) -> bool {
    mime.eq_ignore_ascii_case(PDF_MIME)
}

/// Reject files the server would refuse anyway.
pub fn validate_pdf(name: &str, size: u64) -> AppResult<()> {
    if !name.to_ascii_lowercase().ends_with(".pdf") {
        return Err(AppError::InvalidFile(
            "Please upload a valid PDF file".to_string(),
        ));
    }
    if size > MAX_FILE_SIZE {
        return Err(AppError::FileTooLarge {
            size,
            limit: MAX_FILE_SIZE,
        });
    }
    Ok(())
}

impl UploadPhase {
    /// Move to `Uploading` if `selected` is an acceptable PDF.
    ///
    /// On error the phase is left as it was and the file is not sent.
    pub fn try_start<F: PdfSource>(&mut self, selected: Option<F>) -> AppResult<F> {
        let file = selected.ok_or(AppError::NoFile)?;
        validate_pdf(&file.file_name(), file.byte_size())?;
        *self = UploadPhase::Uploading;
        Ok(file)
    }

    /// Leave `Uploading` once the request has settled.
    pub fn settle(&mut self, result: AppResult<Menu>) -> AppResult<Menu> {
        *self = match result {
            Ok(_) => UploadPhase::Loaded,
            Err(_) => UploadPhase::Idle,
        };
        result
    }
}

/// Hand back the menu, or alert the user about why there is none.
pub fn report_upload(result: AppResult<Menu>, notifier: &impl Notifier) -> Option<Menu> {
    match result {
        Ok(menu) => Some(menu),
        Err(e) => {
            notify_error(notifier, &e);
            None
        }
    }
}

/// Interpret the upload endpoint's body.
///
/// The server answers errors with a JSON `{error}` body and a non-2xx
/// status, so the body is decoded whatever the status.
pub fn decode_upload_response(status: u16, body: &str) -> AppResult<Menu> {
    let response: UploadResponse = serde_json::from_str(body).map_err(|e| {
        if (200..300).contains(&status) {
            AppError::Transport(format!("Failed to parse response: {}", e))
        } else {
            AppError::Transport(format!("Server error ({}): {}", status, body.trim()))
        }
    })?;

    response.into_menu()
}

/// Upload a PDF and return the parsed menu.
///
/// Callers run [`validate_pdf`] first; this only reports transport and
/// server failures.
pub async fn upload_pdf(file: &File, url: &str) -> AppResult<Menu> {
    let form_data = FormData::new()
        .map_err(|e| AppError::Transport(format!("Failed to create FormData: {:?}", e)))?;
    form_data
        .append_with_blob(UPLOAD_FIELD, file)
        .map_err(|e| AppError::Transport(format!("Failed to append file: {:?}", e)))?;

    log::info!("📤 Uploading {} ({} bytes) to {}", file.name(), file.size(), url);

    let response = Request::post(url)
        .body(form_data)
        .map_err(|e| AppError::Transport(format!("Failed to build request: {}", e)))?
        .send()
        .await
        .map_err(|e| AppError::Transport(format!("HTTP request failed: {}", e)))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| AppError::Transport(format!("Failed to read response: {}", e)))?;

    let menu = decode_upload_response(status, &body)?;
    log::info!(
        "✅ Menu received: {} categories, {} items",
        menu.len(),
        menu.values().map(Vec::len).sum::<usize>()
    );
    Ok(menu)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::notify::RecordingNotifier;
    use crate::types::MenuItem;

    #[derive(Debug)]
    struct FakePdf {
        name: &'static str,
        size: u64,
    }

    impl PdfSource for FakePdf {
        fn file_name(&self) -> String {
            self.name.to_string()
        }

        fn byte_size(&self) -> u64 {
            self.size
        }
    }

    fn one_item_menu() -> Menu {
        let mut menu = Menu::new();
        menu.insert(
            "Starters".into(),
            vec![MenuItem { name: "Samosa".into(), desc: String::new(), price: 40.0 }],
        );
        menu
    }

    #[test]
    fn starting_without_a_file_keeps_the_form() {
        let mut phase = UploadPhase::Idle;

        let err = phase.try_start(None::<FakePdf>).unwrap_err();

        assert_eq!(err, AppError::NoFile);
        assert_eq!(phase, UploadPhase::Idle);
        assert!(phase.shows_upload_form());
    }

    #[test]
    fn starting_with_an_invalid_file_keeps_the_form() {
        let mut phase = UploadPhase::Idle;

        let err = phase
            .try_start(Some(FakePdf { name: "menu.png", size: 10 }))
            .unwrap_err();

        assert!(matches!(err, AppError::InvalidFile(_)));
        assert_eq!(phase, UploadPhase::Idle);
    }

    #[test]
    fn starting_with_a_pdf_shows_the_spinner() {
        let mut phase = UploadPhase::Idle;

        let file = phase
            .try_start(Some(FakePdf { name: "menu.pdf", size: 2048 }))
            .unwrap();

        assert_eq!(file.name, "menu.pdf");
        assert_eq!(phase, UploadPhase::Uploading);
        assert!(phase.shows_spinner());
        assert!(!phase.shows_upload_form());
    }

    #[test]
    fn successful_upload_loads_the_menu() {
        let mut phase = UploadPhase::Uploading;
        let notifier = RecordingNotifier::default();

        let menu = report_upload(phase.settle(Ok(one_item_menu())), &notifier);

        assert_eq!(phase, UploadPhase::Loaded);
        assert!(phase.shows_menu());
        assert!(!phase.shows_spinner());
        assert_eq!(menu.unwrap()["Starters"][0].name, "Samosa");
        assert!(notifier.messages().is_empty());
    }

    #[test]
    fn failed_upload_restores_the_form_and_alerts() {
        let mut phase = UploadPhase::Uploading;
        let notifier = RecordingNotifier::default();

        let result = phase.settle(Err(AppError::Server("Could not extract text from PDF".into())));
        let menu = report_upload(result, &notifier);

        assert!(menu.is_none());
        assert_eq!(phase, UploadPhase::Idle);
        assert!(phase.shows_upload_form());
        assert_eq!(notifier.messages(), vec!["Error: Could not extract text from PDF".to_string()]);
    }

    #[test]
    fn transport_failure_restores_the_form_and_alerts() {
        let mut phase = UploadPhase::Uploading;
        let notifier = RecordingNotifier::default();

        let result = phase.settle(Err(AppError::Transport("HTTP request failed".into())));
        report_upload(result, &notifier);

        assert_eq!(phase, UploadPhase::Idle);
        assert_eq!(notifier.messages(), vec!["Error uploading file: HTTP request failed".to_string()]);
    }

    #[test]
    fn accepts_pdf_names_case_insensitively() {
        assert!(validate_pdf("menu.pdf", 1024).is_ok());
        assert!(validate_pdf("MENU.PDF", 1024).is_ok());
    }

    #[test]
    fn rejects_non_pdf_names() {
        assert_eq!(
            validate_pdf("menu.docx", 1024),
            Err(AppError::InvalidFile("Please upload a valid PDF file".into()))
        );
    }

    #[test]
    fn rejects_oversized_files() {
        let err = validate_pdf("menu.pdf", MAX_FILE_SIZE + 1).unwrap_err();
        assert!(matches!(err, AppError::FileTooLarge { limit, .. } if limit == MAX_FILE_SIZE));
        assert!(validate_pdf("menu.pdf", MAX_FILE_SIZE).is_ok());
    }

    #[test]
    fn pdf_mime_detection() {
        assert!(is_pdf_mime("application/pdf"));
        assert!(!is_pdf_mime("image/png"));
        assert!(!is_pdf_mime(""));
    }

    #[test]
    fn decodes_success_body() {
        let body = r#"{"success": true, "menu": {"Menu Items": [
            {"name": "Menu Item", "price": 100, "desc": "Freshly prepared dish"}
        ]}}"#;

        let menu = decode_upload_response(200, body).unwrap();
        assert_eq!(menu["Menu Items"][0].name, "Menu Item");
    }

    #[test]
    fn error_status_with_json_body_uses_server_message() {
        let err = decode_upload_response(400, r#"{"error": "No file selected"}"#).unwrap_err();
        assert_eq!(err, AppError::Server("No file selected".into()));
    }

    #[test]
    fn error_status_with_html_body_is_transport_error() {
        let err = decode_upload_response(413, "<h1>Request Entity Too Large</h1>").unwrap_err();
        assert_eq!(
            err,
            AppError::Transport("Server error (413): <h1>Request Entity Too Large</h1>".into())
        );
    }

    #[test]
    fn garbage_success_body_is_transport_error() {
        let err = decode_upload_response(200, "not json").unwrap_err();
        assert!(matches!(err, AppError::Transport(msg) if msg.starts_with("Failed to parse response")));
    }
}
