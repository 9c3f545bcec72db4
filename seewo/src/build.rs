use bytes::Bytes;
use http::header::CONTENT_TYPE;
use http::uri::{PathAndQuery, Scheme};
use http::{HeaderMap, HeaderValue, Method, Request, Uri};
use seewo_core::hash::hex_md5;
use seewo_core::time::{now, timestamp_millis, DateTime};
use seewo_core::Result;

use crate::constants::*;

/// RequestBuilder assembles an outgoing request ready to sign.
///
/// It resolves the target host, stamps the headers every signed request must
/// carry, and attaches the JSON body together with its content hash. The
/// stamped headers always win over caller-supplied values of the same name.
#[derive(Clone, Debug)]
pub struct RequestBuilder {
    app_id: String,
    time: Option<DateTime>,
}

impl RequestBuilder {
    /// Create a builder for the given app id.
    pub fn new(app_id: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            time: None,
        }
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    #[cfg(test)]
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }

    fn get_time(&self) -> DateTime {
        self.time.unwrap_or_else(now)
    }

    /// Build a fully-headered request.
    ///
    /// URIs without a host are pointed at `host` over HTTPS. A `Some` body is
    /// attached with `Content-Type: application/json` and an uppercase hex
    /// MD5 of its exact bytes in `x-sw-content-md5`.
    pub fn build(
        &self,
        host: &str,
        method: Method,
        uri: Uri,
        mut headers: HeaderMap,
        body: Option<Bytes>,
    ) -> Result<Request<Bytes>> {
        let uri = ensure_host(uri, host)?;
        let timestamp = timestamp_millis(self.get_time());

        headers.insert(HEADER_APP_ID, self.app_id.parse()?);
        headers.insert(HEADER_TIMESTAMP, timestamp.to_string().parse()?);
        headers.insert(HEADER_REQ_PATH, uri.path().parse()?);
        headers.insert(HEADER_SIGN_TYPE, HeaderValue::from_static(SIGN_TYPE_HMAC));
        headers.insert(HEADER_VERSION, HeaderValue::from_static(SIGN_VERSION));

        let body = match body {
            Some(bs) if !bs.is_empty() => {
                headers.insert(HEADER_CONTENT_MD5, hex_md5(&bs).to_uppercase().parse()?);
                headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
                bs
            }
            _ => Bytes::new(),
        };

        let mut req = Request::builder().method(method).uri(uri).body(body)?;
        *req.headers_mut() = headers;

        Ok(req)
    }
}

fn ensure_host(uri: Uri, host: &str) -> Result<Uri> {
    let mut parts = uri.into_parts();

    if parts.scheme.is_none() {
        parts.scheme = Some(Scheme::HTTPS);
    }
    if parts.authority.is_none() {
        parts.authority = Some(host.parse()?);
    }
    if parts.path_and_query.is_none() {
        parts.path_and_query = Some(PathAndQuery::from_static("/"));
    }

    Ok(Uri::from_parts(parts)?)
}

/// Merge query pairs into a URI, keeping any pairs already present.
pub(crate) fn merge_query(uri: Uri, query: &[(&str, &str)]) -> Result<Uri> {
    if query.is_empty() {
        return Ok(uri);
    }

    let mut parts = uri.into_parts();
    let (path, existing) = match parts.path_and_query.take() {
        Some(paq) => (paq.path().to_string(), paq.query().map(|q| q.to_string())),
        None => ("/".to_string(), None),
    };

    let mut serializer = form_urlencoded::Serializer::new(String::new());
    if let Some(q) = existing {
        serializer.extend_pairs(form_urlencoded::parse(q.as_bytes()));
    }
    serializer.extend_pairs(query.iter().copied());
    let query = serializer.finish();

    parts.path_and_query = Some(format!("{path}?{query}").parse::<PathAndQuery>()?);
    Ok(Uri::from_parts(parts)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    fn builder() -> RequestBuilder {
        RequestBuilder::new("A1").with_time(Utc.timestamp_millis_opt(1_700_000_000_000).unwrap())
    }

    #[test]
    fn test_build_stamps_required_headers() {
        let req = builder()
            .build(
                DEFAULT_HOST,
                Method::GET,
                "/x?q=v".parse().unwrap(),
                HeaderMap::new(),
                None,
            )
            .unwrap();

        assert_eq!(req.uri().to_string(), "https://openapi.seewo.com/x?q=v");
        assert_eq!(req.headers()["x-sw-app-id"], "A1");
        assert_eq!(req.headers()["x-sw-timestamp"], "1700000000000");
        assert_eq!(req.headers()["x-sw-req-path"], "/x");
        assert_eq!(req.headers()["x-sw-sign-type"], "hmac");
        assert_eq!(req.headers()["x-sw-version"], "2");
    }

    #[test]
    fn test_build_overrides_caller_headers() {
        let mut headers = HeaderMap::new();
        headers.insert("x-sw-app-id", "spoofed".parse().unwrap());
        headers.insert("x-sw-version", "9".parse().unwrap());

        let req = builder()
            .build(
                DEFAULT_HOST,
                Method::GET,
                "/x".parse().unwrap(),
                headers,
                None,
            )
            .unwrap();

        assert_eq!(req.headers()["x-sw-app-id"], "A1");
        assert_eq!(req.headers()["x-sw-version"], "2");
    }

    #[test]
    fn test_build_keeps_explicit_authority() {
        let req = builder()
            .build(
                DEFAULT_HOST,
                Method::GET,
                "https://other.example.com/x".parse().unwrap(),
                HeaderMap::new(),
                None,
            )
            .unwrap();

        assert_eq!(req.uri().host(), Some("other.example.com"));
    }

    #[test]
    fn test_build_hashes_body() {
        let req = builder()
            .build(
                DEFAULT_HOST,
                Method::POST,
                "/y".parse().unwrap(),
                HeaderMap::new(),
                Some(Bytes::from_static(br#"{"x":1}"#)),
            )
            .unwrap();

        assert_eq!(
            req.headers()["x-sw-content-md5"],
            "AC3EF48CAA08FA3ED5E025DA69EDC645"
        );
        assert_eq!(req.headers()["content-type"], "application/json");
        assert_eq!(req.body().as_ref(), br#"{"x":1}"#);
    }

    #[test]
    fn test_build_without_body_sets_no_hash() {
        let req = builder()
            .build(
                DEFAULT_HOST,
                Method::POST,
                "/y".parse().unwrap(),
                HeaderMap::new(),
                None,
            )
            .unwrap();

        assert!(req.headers().get("x-sw-content-md5").is_none());
        assert!(req.headers().get("content-type").is_none());
        assert!(req.body().is_empty());
    }

    #[test]
    fn test_req_path_excludes_query() {
        let req = builder()
            .build(
                DEFAULT_HOST,
                Method::GET,
                "/a/b?q=v".parse().unwrap(),
                HeaderMap::new(),
                None,
            )
            .unwrap();

        assert_eq!(req.headers()["x-sw-req-path"], "/a/b");
    }

    #[test]
    fn test_merge_query_keeps_existing_pairs() {
        let uri = merge_query("/x?a=1".parse().unwrap(), &[("b", "2")]).unwrap();
        assert_eq!(uri.path_and_query().unwrap().as_str(), "/x?a=1&b=2");
    }

    #[test]
    fn test_merge_query_encodes_values() {
        let uri = merge_query("/x".parse().unwrap(), &[("q", "a b")]).unwrap();
        assert_eq!(uri.path_and_query().unwrap().as_str(), "/x?q=a+b");
    }
}
