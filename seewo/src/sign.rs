use std::collections::BTreeMap;

use log::debug;
use seewo_core::hash::hex_hmac_md5;
use seewo_core::{Result, SigningRequest};

use crate::constants::*;

/// Compute the `x-sw-sign` value for a request.
///
/// The digest is an HMAC-MD5 over the canonical payload, keyed by the
/// credential secret and rendered as uppercase hex. Signing is a pure
/// function of the request: the same method, path, headers and query always
/// produce the same signature.
pub fn signature(req: &SigningRequest, secret: &str) -> Result<String> {
    let payload = canonical_payload(req)?;
    debug!("canonical payload: {payload}");

    Ok(hex_hmac_md5(secret.as_bytes(), payload.as_bytes()).to_uppercase())
}

/// Serialize the signature-contributing fields of a request.
///
/// Contributing fields, later sources overwriting earlier ones:
///
/// 1. every header whose name contains `x-sw` (substring, on the lowercase
///    wire name), first value only
/// 2. headers opted in through `x-sw-sign-headers`, keyed by the name
///    exactly as listed
/// 3. every decoded query pair
///
/// Entries are sorted by key byte-wise, unsignable values are dropped, and
/// the survivors are concatenated as `keyvalue` with no separators. An empty
/// payload is valid and hashes to a well-defined signature.
pub(crate) fn canonical_payload(req: &SigningRequest) -> Result<String> {
    let mut payload = BTreeMap::new();

    for name in req.headers.keys() {
        if !name.as_str().contains(SIGN_HEADER_MARK) {
            continue;
        }

        // keys() only yields names that are present.
        let value = req.headers.get(name).expect("header must be present");
        payload.insert(name.as_str().to_string(), value.to_str()?.to_string());
    }

    if let Some(extend) = req.headers.get(HEADER_SIGN_HEADERS) {
        for name in extend.to_str()?.split(',') {
            if let Some(value) = req.headers.get(name) {
                payload.insert(name.to_string(), value.to_str()?.to_string());
            }
        }
    }

    for (key, value) in &req.query {
        payload.insert(key.clone(), value.clone());
    }

    let mut result = String::new();
    for (key, value) in &payload {
        if !is_signable(value) {
            continue;
        }

        result.push_str(key);
        result.push_str(value);
    }

    Ok(result)
}

/// The canonicalization predicate: whether a value participates in the
/// signed string.
///
/// The remote server drops falsy values before hashing; on string values
/// that means the empty string and the literal `"0"`. This rule is
/// interop-critical: loosening or tightening it breaks signature
/// compatibility silently.
fn is_signable(value: &str) -> bool {
    !value.is_empty() && value != "0"
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::{HeaderMap, Method, Request};
    use pretty_assertions::assert_eq;

    fn signing_request(uri: &str, headers: HeaderMap) -> SigningRequest {
        let mut parts = Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(())
            .unwrap()
            .into_parts()
            .0;
        parts.headers = headers;

        SigningRequest::build(&mut parts).unwrap()
    }

    fn base_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert("x-sw-app-id", "A1".parse().unwrap());
        headers.insert("x-sw-timestamp", "1700000000000".parse().unwrap());
        headers.insert("x-sw-req-path", "/x".parse().unwrap());
        headers.insert("x-sw-sign-type", "hmac".parse().unwrap());
        headers.insert("x-sw-version", "2".parse().unwrap());
        headers
    }

    #[test]
    fn test_canonical_payload_sorted_concatenation() {
        let req = signing_request("https://openapi.seewo.com/x?q=v", base_headers());

        assert_eq!(
            canonical_payload(&req).unwrap(),
            "qvx-sw-app-idA1x-sw-req-path/xx-sw-sign-typehmacx-sw-timestamp1700000000000x-sw-version2"
        );
    }

    #[test]
    fn test_signature_known_vector() {
        let req = signing_request("https://openapi.seewo.com/x?q=v", base_headers());

        assert_eq!(
            signature(&req, "S1").unwrap(),
            "6DE2409351980BDEF36E049D8ED62D34"
        );
    }

    #[test]
    fn test_signature_of_empty_payload() {
        let req = signing_request("https://openapi.seewo.com/x", HeaderMap::new());

        assert_eq!(canonical_payload(&req).unwrap(), "");
        assert_eq!(
            signature(&req, "S1").unwrap(),
            "F8FF219FDEC21B16FC313D43B8EAA8FC"
        );
    }

    #[test]
    fn test_falsy_values_are_excluded() {
        let with_empty = signing_request("https://openapi.seewo.com/x?a=1&b=", base_headers());
        let without = signing_request("https://openapi.seewo.com/x?a=1", base_headers());

        assert_eq!(
            signature(&with_empty, "S1").unwrap(),
            signature(&without, "S1").unwrap()
        );

        let with_zero = signing_request("https://openapi.seewo.com/x?a=1&b=0", base_headers());
        assert_eq!(
            signature(&with_zero, "S1").unwrap(),
            signature(&without, "S1").unwrap()
        );
    }

    #[test]
    fn test_key_order_does_not_matter() {
        let ab = signing_request("https://openapi.seewo.com/x?a=1&b=2", base_headers());
        let ba = signing_request("https://openapi.seewo.com/x?b=2&a=1", base_headers());

        assert_eq!(signature(&ab, "S1").unwrap(), signature(&ba, "S1").unwrap());
    }

    #[test]
    fn test_extend_headers_contribute_as_listed() {
        let mut headers = base_headers();
        headers.insert("x-sw-sign-headers", "x-tenant,x-missing".parse().unwrap());
        headers.insert("x-tenant", "t9".parse().unwrap());

        let req = signing_request("https://openapi.seewo.com/x", headers);
        let payload = canonical_payload(&req).unwrap();

        // Opted-in header is signed; names without a value are skipped.
        assert!(payload.ends_with("x-tenantt9"));
        assert!(payload.contains("x-sw-sign-headersx-tenant,x-missing"));
        assert!(!payload.contains("x-missing,"));
    }

    #[test]
    fn test_query_overwrites_header_entry() {
        let mut headers = base_headers();
        headers.insert("x-sw-sign-headers", "x-tenant".parse().unwrap());
        headers.insert("x-tenant", "from-header".parse().unwrap());

        let req = signing_request("https://openapi.seewo.com/x?x-tenant=from-query", headers);
        let payload = canonical_payload(&req).unwrap();

        assert!(payload.contains("x-tenantfrom-query"));
        assert!(!payload.contains("from-header"));
    }

    #[test]
    fn test_multi_value_header_takes_first() {
        let mut headers = base_headers();
        headers.append("x-sw-extra", "first".parse().unwrap());
        headers.append("x-sw-extra", "second".parse().unwrap());

        let req = signing_request("https://openapi.seewo.com/x", headers);
        let payload = canonical_payload(&req).unwrap();

        assert!(payload.contains("x-sw-extrafirst"));
        assert!(!payload.contains("second"));
    }

    #[test]
    fn test_substring_match_is_not_a_prefix_match() {
        let mut headers = base_headers();
        headers.insert("grpc-x-sw-trace", "t1".parse().unwrap());

        let req = signing_request("https://openapi.seewo.com/x", headers);

        assert!(canonical_payload(&req).unwrap().contains("grpc-x-sw-tracet1"));
    }
}
