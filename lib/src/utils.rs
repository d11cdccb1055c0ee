use crate::error::Error;

/// Checks if a character may appear in a WHOIS query line.
///
/// The wire request is a single line terminated by CRLF, so CR and LF are
/// the only characters a query must not carry: an embedded line break would
/// smuggle a second line into the stream.
///
/// # Arguments
///
/// * `c` - The character to check.
///
/// # Returns
///
/// Returns `true` if the character is safe to send inside the query line,
/// and `false` otherwise.
pub fn is_line_safe(c: char) -> bool {
    c != '\r' && c != '\n'
}

/// Validates a query string before any connection is opened.
///
/// The check is deliberately minimal: the string must be non-empty and must
/// not contain an embedded CR or LF. Anything that passes is sent to the
/// server verbatim, with no trimming, case-folding, or length checks.
///
/// # Arguments
///
/// * `query` - The raw query string as the caller supplied it.
///
/// # Errors
///
/// Returns `Error::InvalidDomain` if the query is empty or carries a line
/// break.
pub fn check_query(query: &str) -> Result<(), Error> {
    if query.is_empty() || query.contains(|c: char| !is_line_safe(c)) {
        return Err(Error::InvalidDomain);
    }

    Ok(())
}
