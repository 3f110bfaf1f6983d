/// Alphabet used for generated identifiers
const ID_ALPHABET: [char; 36] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S',
    'T', 'U', 'V', 'W', 'X', 'Y', 'Z', '0', '1', '2', '3', '4', '5', '6', '7', '8', '9',
];

/// Generates a request correlation id
///
/// The id is 21 characters of `A-Z0-9`, produced by `nanoid`. It is sent in
/// the `X-Request-Id` header and logged with every attempt of a logical
/// request, so a retried call keeps the id of the original one.
///
/// # Examples
/// ```
/// use edu_cms_client::utils::id::request_id;
/// let id = request_id();
/// assert_eq!(id.len(), 21);
/// ```
#[must_use]
pub fn request_id() -> String {
    nanoid::nanoid!(21, &ID_ALPHABET)
}

/// Generates a file name for uploads that arrive without one
#[must_use]
pub fn upload_file_name(extension: Option<&str>) -> String {
    let stem = nanoid::nanoid!(12, &ID_ALPHABET).to_lowercase();
    match extension {
        Some(ext) if !ext.is_empty() => format!("upload-{stem}.{}", ext.trim_start_matches('.')),
        _ => format!("upload-{stem}"),
    }
}
