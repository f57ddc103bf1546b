//! Input validation for site requests
//!
//! Site names are handed to the management binary as a single argv element,
//! never through a shell, so the only names rejected are ones that cannot be
//! passed to a process at all.

use crate::error::ValidationError;
use crate::models::SiteRequest;

/// Validate a site name.
///
/// # Examples
///
/// ```
/// use a2site_core::validation::validate_site_name;
///
/// assert!(validate_site_name("000-default").is_ok());
/// assert!(validate_site_name("example.com.conf").is_ok());
/// assert!(validate_site_name("").is_err());
/// assert!(validate_site_name("bad\0name").is_err());
/// ```
pub fn validate_site_name(name: &str) -> Result<(), ValidationError> {
    validate_not_empty(name)?;

    if name.contains('\0') {
        return Err(ValidationError::NullByteInInput);
    }

    Ok(())
}

/// Validate a whole request before dispatch.
pub fn validate_request(request: &SiteRequest) -> Result<(), ValidationError> {
    validate_site_name(&request.name)
}

/// Validate that a string is not empty.
pub fn validate_not_empty(input: &str) -> Result<(), ValidationError> {
    if input.trim().is_empty() {
        return Err(ValidationError::EmptyInput);
    }
    Ok(())
}

/// Render a command line for logs and diagnostics, quoting each part as a
/// shell would need it.
pub fn display_command(program: &str, args: &[&str]) -> String {
    std::iter::once(program)
        .chain(args.iter().copied())
        .map(|part| shell_escape::escape(part.into()).into_owned())
        .collect::<Vec<_>>()
        .join(" ")
}
