//! Resume upload form state

use crate::models::{ResumeFile, UploadResponse};
use crate::{ClientError, ClientResult};

pub const PDF_MIME: &str = "application/pdf";
pub const NOT_A_PDF: &str = "Please select a PDF file";
pub const UPLOAD_SUCCEEDED: &str = "Resume uploaded successfully!";
pub const UPLOAD_ERROR_FALLBACK: &str = "An error occurred while uploading";

/// A file picked by the user, before its bytes are read
pub trait CandidateFile {
    fn name(&self) -> String;

    /// MIME type as reported by the browser
    fn mime_type(&self) -> String;
}

impl CandidateFile for ResumeFile {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn mime_type(&self) -> String {
        self.mime_type.clone()
    }
}

/// Only `application/pdf` is accepted; extensions are not consulted.
pub fn validate_pdf(file: &impl CandidateFile) -> ClientResult<()> {
    if file.mime_type() == PDF_MIME {
        Ok(())
    } else {
        Err(ClientError::Validation(NOT_A_PDF.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UploadForm<F> {
    file: Option<F>,
    uploading: bool,
    error: Option<String>,
    success: Option<String>,
}

impl<F> Default for UploadForm<F> {
    fn default() -> Self {
        Self {
            file: None,
            uploading: false,
            error: None,
            success: None,
        }
    }
}

impl<F: CandidateFile + Clone> UploadForm<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a change of the file input
    pub fn select(&mut self, file: Option<F>) {
        match file {
            Some(file) if validate_pdf(&file).is_ok() => {
                self.file = Some(file);
                self.error = None;
            }
            other => {
                if let Some(rejected) = other {
                    tracing::debug!("Rejected {} ({})", rejected.name(), rejected.mime_type());
                }
                self.file = None;
                self.error = Some(NOT_A_PDF.to_string());
            }
        }
    }

    pub fn can_submit(&self) -> bool {
        self.file.is_some() && !self.uploading
    }

    /// Mark the upload as started and hand back the file to send
    pub fn begin_submit(&mut self) -> Option<F> {
        if !self.can_submit() {
            return None;
        }
        self.uploading = true;
        self.error = None;
        self.success = None;
        self.file.clone()
    }

    pub fn finish(&mut self, result: ClientResult<UploadResponse>) {
        self.uploading = false;
        match result {
            Ok(response) => {
                tracing::info!("Uploaded resume {:?}", response.resume_id);
                self.success = Some(UPLOAD_SUCCEEDED.to_string());
                self.file = None;
            }
            Err(e) => {
                self.error = Some(e.user_message(UPLOAD_ERROR_FALLBACK));
            }
        }
    }

    pub fn file(&self) -> Option<&F> {
        self.file.as_ref()
    }

    pub fn selected_name(&self) -> Option<String> {
        self.file.as_ref().map(CandidateFile::name)
    }

    pub fn is_uploading(&self) -> bool {
        self.uploading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn success(&self) -> Option<&str> {
        self.success.as_deref()
    }

    pub fn button_label(&self) -> &'static str {
        if self.uploading {
            "Uploading..."
        } else {
            "Upload Resume"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ResumeApi;
    use crate::models::UserId;
    use crate::view::testing::StubApi;

    fn pdf() -> ResumeFile {
        ResumeFile::pdf("cv.pdf", b"%PDF-1.7".to_vec())
    }

    fn docx() -> ResumeFile {
        ResumeFile {
            name: "cv.docx".into(),
            mime_type: "application/vnd.openxmlformats-officedocument.wordprocessingml.document".into(),
            bytes: vec![0x50, 0x4b],
        }
    }

    #[test]
    fn test_non_pdf_blocks_submission() {
        for file in [docx(), ResumeFile { mime_type: String::new(), ..pdf() }] {
            let mut form = UploadForm::new();
            form.select(Some(file));
            assert_eq!(form.error(), Some(NOT_A_PDF));
            assert!(!form.can_submit());
            assert!(form.begin_submit().is_none());
            assert!(!form.is_uploading());
        }
    }

    #[test]
    fn test_extension_is_not_enough() {
        let mut form = UploadForm::new();
        form.select(Some(ResumeFile {
            name: "resume.pdf".into(),
            mime_type: "application/octet-stream".into(),
            bytes: vec![],
        }));
        assert!(!form.can_submit());
    }

    #[test]
    fn test_non_pdf_replaces_previous_selection() {
        let mut form = UploadForm::new();
        form.select(Some(pdf()));
        assert!(form.can_submit());
        assert_eq!(form.selected_name().as_deref(), Some("cv.pdf"));

        form.select(Some(docx()));
        assert!(form.file().is_none());
        assert!(!form.can_submit());

        form.select(Some(pdf()));
        assert_eq!(form.error(), None);
        assert!(form.can_submit());
    }

    #[test]
    fn test_clearing_the_input_is_an_error() {
        let mut form = UploadForm::<ResumeFile>::new();
        form.select(None);
        assert_eq!(form.error(), Some(NOT_A_PDF));
    }

    #[test]
    fn test_no_double_submit() {
        let mut form = UploadForm::new();
        form.select(Some(pdf()));
        assert!(form.begin_submit().is_some());
        assert!(form.is_uploading());
        assert_eq!(form.button_label(), "Uploading...");
        assert!(form.begin_submit().is_none());
    }

    #[tokio::test]
    async fn test_successful_upload_clears_selection() {
        let api = StubApi::default();
        let mut form = UploadForm::new();
        form.select(Some(pdf()));

        let file = form.begin_submit().unwrap();
        let result = api.upload_resume(&file, &UserId::new("user_jane")).await;
        form.finish(result);

        assert_eq!(form.success(), Some(UPLOAD_SUCCEEDED));
        assert_eq!(form.error(), None);
        assert!(form.file().is_none());
        assert!(!form.is_uploading());
        assert_eq!(api.calls.borrow().as_slice(), ["POST /upload cv.pdf user_jane"]);
    }

    #[test]
    fn test_failed_upload_keeps_file_and_message() {
        let mut form = UploadForm::new();
        form.select(Some(pdf()));
        form.begin_submit();
        form.finish(Err(ClientError::Status {
            status: 400,
            message: "No file uploaded or missing user ID".into(),
        }));

        assert_eq!(form.error(), Some("No file uploaded or missing user ID"));
        assert_eq!(form.success(), None);
        assert_eq!(form.file(), Some(&pdf()));
        assert!(form.can_submit());
    }

    #[test]
    fn test_new_submit_clears_old_messages() {
        let mut form = UploadForm::new();
        form.select(Some(pdf()));
        form.begin_submit();
        form.finish(Err(ClientError::Validation(String::new())));
        assert_eq!(form.error(), Some(UPLOAD_ERROR_FALLBACK));

        form.begin_submit();
        assert_eq!(form.error(), None);
        form.finish(Ok(UploadResponse::default()));
        assert_eq!(form.success(), Some(UPLOAD_SUCCEEDED));

        form.select(Some(pdf()));
        form.begin_submit();
        assert_eq!(form.success(), None);
    }
}
