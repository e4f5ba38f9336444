//! Endpoint URL validation

use url::Url;

/// Validate the root URL of the indexing backend
///
/// The URL must be absolute, use http or https, name a host, and carry no
/// query string or fragment since `/_bulk` is appended to it verbatim.
pub fn validate_endpoint_url(url_str: &str, context: &str) -> Result<(), String> {
    if url_str.trim().is_empty() {
        return Err(format!("{} cannot be empty", context));
    }

    let url =
        Url::parse(url_str).map_err(|e| format!("{} has invalid URL format: {}", context, e))?;

    match url.scheme() {
        "http" | "https" => {}
        scheme => {
            return Err(format!(
                "{} must use http:// or https:// scheme, got: {}",
                context, scheme
            ));
        }
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(format!("{} URL must have a valid host", context));
    }

    if url.query().is_some() || url.fragment().is_some() {
        return Err(format!(
            "{} must not contain a query string or fragment",
            context
        ));
    }

    Ok(())
}
