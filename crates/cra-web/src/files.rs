//! Files picked through `<input type="file">`

use cra_core::view::CandidateFile;
use cra_core::{ClientError, ClientResult, ResumeFile};
use wasm_bindgen_futures::JsFuture;

#[derive(Debug, Clone, PartialEq)]
pub struct BrowserFile(web_sys::File);

impl From<web_sys::File> for BrowserFile {
    fn from(file: web_sys::File) -> Self {
        Self(file)
    }
}

impl CandidateFile for BrowserFile {
    fn name(&self) -> String {
        self.0.name()
    }

    fn mime_type(&self) -> String {
        self.0.type_()
    }
}

impl BrowserFile {
    /// Read the whole file into memory for the multipart body
    pub async fn read(&self) -> ClientResult<ResumeFile> {
        let buffer = JsFuture::from(self.0.array_buffer())
            .await
            .map_err(|e| ClientError::Validation(format!("Could not read {}: {:?}", self.0.name(), e)))?;

        Ok(ResumeFile {
            name: self.name(),
            mime_type: self.mime_type(),
            bytes: js_sys::Uint8Array::new(&buffer).to_vec(),
        })
    }
}
