//! Redirect target construction after a successful sign-in

use url::Url;

use crate::error::AuthError;
use crate::TOKEN_PARAM;

/// Append `token` to the absolute `callback` URL as a query parameter.
///
/// Existing query parameters and the fragment are kept. Relative or otherwise
/// unparseable callbacks are rejected.
pub fn callback_with_token(callback: &str, token: &str) -> Result<Url, AuthError> {
    let mut url = Url::parse(callback).map_err(|e| AuthError::InvalidCallback(e.to_string()))?;
    url.query_pairs_mut().append_pair(TOKEN_PARAM, token);
    Ok(url)
}
