//! Decoding of directory responses.

use crate::domain::{Result, RolodexError, User};

/// Turns a raw HTTP response into the ordered list of users.
///
/// # Errors
///
/// - [`RolodexError::Status`] if `status` is outside `200..=299`
/// - [`RolodexError::Decode`] if the body is not a JSON array of objects with
///   at least `id`, `name` and `email`
///
/// # Examples
///
/// ```
/// use rolodex::directory::decode_response;
///
/// let body = br#"[{"id":1,"name":"A","email":"a@x.com","phone":"1"}]"#;
/// let users = decode_response(200, body)?;
/// assert_eq!(users.len(), 1);
/// # Ok::<(), rolodex::RolodexError>(())
/// ```
pub fn decode_response(status: u16, body: &[u8]) -> Result<Vec<User>> {
    if !(200..300).contains(&status) {
        tracing::debug!(status = status, body_len = body.len(), "directory returned error status");
        return Err(RolodexError::Status(status));
    }

    let users: Vec<User> = serde_json::from_slice(body)?;
    tracing::debug!(user_count = users.len(), "directory response decoded");
    Ok(users)
}
