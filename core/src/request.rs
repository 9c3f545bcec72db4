use std::mem;
use std::str::FromStr;

use http::uri::Authority;
use http::uri::PathAndQuery;
use http::uri::Scheme;
use http::HeaderMap;
use http::Method;
use http::Uri;

use crate::{Error, Result};

/// Signing context for request.
///
/// The query is stored as decoded key/value pairs: values are decoded exactly
/// once when the context is built and re-encoded when it is applied back.
#[derive(Debug)]
pub struct SigningRequest {
    /// HTTP method.
    pub method: Method,
    /// HTTP scheme.
    pub scheme: Scheme,
    /// HTTP authority.
    pub authority: Authority,
    /// HTTP path.
    pub path: String,
    /// HTTP query parameters, percent-decoded.
    pub query: Vec<(String, String)>,
    /// HTTP headers.
    pub headers: HeaderMap,
}

impl SigningRequest {
    /// Build a signing context from http::request::Parts.
    pub fn build(parts: &mut http::request::Parts) -> Result<Self> {
        let uri = mem::take(&mut parts.uri).into_parts();
        let paq = uri
            .path_and_query
            .unwrap_or_else(|| PathAndQuery::from_static("/"));

        Ok(SigningRequest {
            method: parts.method.clone(),
            scheme: uri.scheme.unwrap_or(Scheme::HTTPS),
            authority: uri
                .authority
                .ok_or_else(|| Error::request_invalid("request without authority cannot be signed"))?,
            path: paq.path().to_string(),
            query: paq
                .query()
                .map(|v| {
                    form_urlencoded::parse(v.as_bytes())
                        .map(|(k, v)| (k.into_owned(), v.into_owned()))
                        .collect()
                })
                .unwrap_or_default(),

            // Take the headers out of the request to avoid copy.
            // We will return it back when apply the context.
            headers: mem::take(&mut parts.headers),
        })
    }

    /// Apply the signing context back to http::request::Parts.
    pub fn apply(mut self, parts: &mut http::request::Parts) -> Result<()> {
        // Return headers back.
        mem::swap(&mut parts.headers, &mut self.headers);
        parts.method = self.method;
        parts.uri = {
            let mut uri_parts = mem::take(&mut parts.uri).into_parts();
            uri_parts.scheme = Some(self.scheme);
            uri_parts.authority = Some(self.authority);
            uri_parts.path_and_query = {
                let paq = if self.query.is_empty() {
                    self.path
                } else {
                    let query = form_urlencoded::Serializer::new(String::new())
                        .extend_pairs(self.query.iter())
                        .finish();

                    format!("{}?{}", self.path, query)
                };

                Some(PathAndQuery::from_str(&paq)?)
            };
            Uri::from_parts(uri_parts)?
        };

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parts(uri: &str) -> http::request::Parts {
        http::Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(())
            .unwrap()
            .into_parts()
            .0
    }

    #[test]
    fn test_build_decodes_query_once() {
        let mut parts = parts("https://openapi.seewo.com/x?q=a%20b&areaId=42");
        let req = SigningRequest::build(&mut parts).unwrap();

        assert_eq!(req.path, "/x");
        assert_eq!(
            req.query,
            vec![
                ("q".to_string(), "a b".to_string()),
                ("areaId".to_string(), "42".to_string()),
            ]
        );
    }

    #[test]
    fn test_build_requires_authority() {
        let mut parts = parts("/x?q=v");
        assert!(SigningRequest::build(&mut parts).is_err());
    }

    #[test]
    fn test_apply_round_trips_uri() {
        let mut parts = parts("https://openapi.seewo.com/x?q=a%20b");
        let req = SigningRequest::build(&mut parts).unwrap();
        req.apply(&mut parts).unwrap();

        assert_eq!(parts.uri.path(), "/x");
        assert_eq!(parts.uri.query(), Some("q=a+b"));
        assert_eq!(parts.uri.host(), Some("openapi.seewo.com"));
    }

    #[test]
    fn test_apply_without_query() {
        let mut parts = parts("https://openapi.seewo.com/x");
        let req = SigningRequest::build(&mut parts).unwrap();
        req.apply(&mut parts).unwrap();

        assert_eq!(parts.uri.path_and_query().unwrap().as_str(), "/x");
    }
}
