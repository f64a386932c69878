/// Collapse a search term to a single canonical percent-encoding.
///
/// `+` is read as a space and any existing escapes are decoded first, so
/// "the matrix", "the+matrix" and "the%20matrix" all become "the%20matrix".
pub fn normalize_term(term: &str) -> String {
    let spaced = term.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => urlencoding::encode(&decoded).into_owned(),
        Err(_) => urlencoding::encode(&spaced).into_owned(),
    }
}
