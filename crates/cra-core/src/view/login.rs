//! Login form validation

use crate::{ClientError, ClientResult};

pub const NAME_REQUIRED: &str = "Please enter your name";

/// Trimmed name to log in with; blank input is rejected.
pub fn validate_name(input: &str) -> ClientResult<String> {
    let name = input.trim();
    if name.is_empty() {
        return Err(ClientError::Validation(NAME_REQUIRED.to_string()));
    }
    Ok(name.to_string())
}
