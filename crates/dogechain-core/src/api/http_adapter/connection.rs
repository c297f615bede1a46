use reqwest::Url;

use crate::endpoint::Endpoint;
use crate::error::ApiError;

/// Join `host` and `api_path` into the base every endpoint is appended to.
///
/// The result always ends in `/`, whether or not the inputs carried
/// leading/trailing slashes.
pub(super) fn parse_base_url(host: &str, api_path: &str) -> Result<Url, ApiError> {
    let host = host.trim_end_matches('/');
    let api_path = api_path.trim_matches('/');
    let joined = if api_path.is_empty() {
        format!("{host}/")
    } else {
        format!("{host}/{api_path}/")
    };

    let parsed = Url::parse(&joined).map_err(|e| {
        ApiError::Config(format!("invalid host `{host}`: expected HTTP(S) URL ({e})"))
    })?;
    match parsed.scheme() {
        "http" | "https" => {}
        other => {
            return Err(ApiError::Config(format!(
                "unsupported host scheme `{other}`; expected http or https"
            )));
        }
    }
    if parsed.query().is_some() || parsed.fragment().is_some() {
        return Err(ApiError::Config(format!(
            "host `{host}` must not carry a query or fragment"
        )));
    }
    Ok(parsed)
}

/// Append `endpoint` to `base`.
///
/// Verbatim mode concatenates the rendered endpoint onto the base string, so
/// a `/` inside an address becomes a path separator. Encoded mode pushes each
/// segment through the URL path-segment encoder instead. Empty segments are
/// kept in both modes, which preserves the `nethash` double slash.
///
/// In encoded mode a `.` or `..` segment is rejected: the encoder would skip
/// it, and URL parsing removes `%2E` forms as dot segments as well.
pub(super) fn resolve_url(base: &Url, endpoint: &Endpoint, encode: bool) -> Result<Url, ApiError> {
    if !encode {
        let raw = format!("{base}{endpoint}");
        return Url::parse(&raw).map_err(|e| ApiError::InvalidUrl(format!("`{raw}`: {e}")));
    }

    if let Some(dots) = endpoint
        .segments()
        .iter()
        .find(|segment| matches!(segment.as_str(), "." | ".."))
    {
        return Err(ApiError::InvalidUrl(format!(
            "`{dots}` cannot be sent as a `{}` path segment",
            endpoint.name()
        )));
    }

    let mut url = base.clone();
    {
        let mut segments = url
            .path_segments_mut()
            .map_err(|()| ApiError::InvalidUrl(format!("`{base}` cannot be a base URL")))?;
        segments.pop_if_empty();
        segments.extend(endpoint.segments());
    }
    url.set_query(endpoint.query());
    Ok(url)
}
