use bytes::Bytes;
use http::{HeaderMap, HeaderValue, Method, Request, Response, Uri};
use log::debug;
use seewo_core::{Context, Error, Result, SigningRequest};
use serde_json::Value;

use crate::build::{merge_query, RequestBuilder};
use crate::constants::*;
use crate::sign;
use crate::{Config, Credential};

/// Client for the Seewo open platform.
///
/// Every call builds a request, signs it with the credential secret and
/// dispatches it through the transport configured on the [`Context`]. The
/// raw response is returned as-is: a non-2xx status is a normal return
/// value, not an error, and the body is fully buffered so it can always be
/// read from the beginning.
///
/// The client is cheap to clone and safe to share across tasks: requests
/// share nothing mutable, and the host override is only reachable through
/// `&mut self`.
///
/// ## Example
///
/// ```no_run
/// use seewo::Client;
/// use seewo_core::Context;
///
/// # async fn example() -> seewo_core::Result<()> {
/// let ctx = Context::new(); // configure a transport with with_http_send
/// let client = Client::new(ctx, "your-app-id", "your-secret")?;
///
/// let resp = client.get("/school-open/ping", &[]).await?;
/// println!("status: {}", resp.status());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Client {
    ctx: Context,
    credential: Credential,
    builder: RequestBuilder,
    host: Option<String>,
    is_sandbox: bool,
}

impl Client {
    /// Create a new client.
    ///
    /// Fails with `ConfigInvalid` when the app id or secret is empty. The
    /// HTTP transport comes from the context; pass a `Context` configured
    /// with [`Context::with_http_send`] to choose one.
    pub fn new(
        ctx: Context,
        app_id: impl Into<String>,
        secret: impl Into<String>,
    ) -> Result<Self> {
        let credential = Credential::new(app_id, secret);
        if !credential.is_valid() {
            return Err(Error::config_invalid("app id and secret must not be empty"));
        }

        Ok(Self {
            ctx,
            builder: RequestBuilder::new(credential.app_id.clone()),
            credential,
            host: None,
            is_sandbox: false,
        })
    }

    /// Create a new client from a config.
    pub fn from_config(ctx: Context, config: Config) -> Result<Self> {
        let mut client = Self::new(
            ctx,
            config.app_id.unwrap_or_default(),
            config.secret.unwrap_or_default(),
        )?;
        client.host = config.host.filter(|v| !v.is_empty());
        client.is_sandbox = config.is_sandbox;

        Ok(client)
    }

    /// Send requests to the sandbox host.
    ///
    /// An explicit host set via [`Client::set_host`] or config still wins.
    pub fn with_sandbox(mut self, is_sandbox: bool) -> Self {
        self.is_sandbox = is_sandbox;
        self
    }

    /// The host requests are sent to.
    ///
    /// Resolution order: explicit override, then the sandbox host when the
    /// sandbox flag is set, then the production host. Never empty.
    pub fn host(&self) -> &str {
        match &self.host {
            Some(host) => host,
            None if self.is_sandbox => SANDBOX_HOST,
            None => DEFAULT_HOST,
        }
    }

    /// Override the host requests are sent to.
    ///
    /// Empty values are ignored so the resolved host stays non-empty.
    pub fn set_host(&mut self, host: impl Into<String>) {
        let host = host.into();
        if !host.is_empty() {
            self.host = Some(host);
        }
    }

    /// Send a GET request.
    pub async fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<Response<Bytes>> {
        self.get_with_headers(path, query, HeaderMap::new()).await
    }

    /// Send a GET request with extra headers.
    pub async fn get_with_headers(
        &self,
        path: &str,
        query: &[(&str, &str)],
        headers: HeaderMap,
    ) -> Result<Response<Bytes>> {
        let uri = merge_query(parse_path(path)?, query)?;
        let req = self
            .builder
            .build(self.host(), Method::GET, uri, headers, None)?;

        self.send(req).await
    }

    /// Send a POST request with a JSON body.
    ///
    /// A null or empty body (`{}`, `[]`) is sent without content, matching
    /// how the platform treats bodyless posts.
    pub async fn post(&self, path: &str, body: Value) -> Result<Response<Bytes>> {
        self.post_with_headers(path, body, HeaderMap::new()).await
    }

    /// Send a POST request with a JSON body and extra headers.
    pub async fn post_with_headers(
        &self,
        path: &str,
        body: Value,
        headers: HeaderMap,
    ) -> Result<Response<Bytes>> {
        let req = self.builder.build(
            self.host(),
            Method::POST,
            parse_path(path)?,
            headers,
            serialize_body(&body)?,
        )?;

        self.send(req).await
    }

    /// Sign a built request and dispatch it.
    ///
    /// Any `x-sw-sign` already on the request is dropped before signing, so
    /// a caller can never smuggle in a forged or replayed signature.
    pub async fn send(&self, req: Request<Bytes>) -> Result<Response<Bytes>> {
        let (mut parts, body) = req.into_parts();

        parts.headers.remove(HEADER_SIGN);

        let mut sreq = SigningRequest::build(&mut parts)?;
        let signature = sign::signature(&sreq, &self.credential.secret)?;
        sreq.headers.insert(HEADER_SIGN, {
            let mut value: HeaderValue = signature.parse()?;
            value.set_sensitive(true);

            value
        });
        sreq.apply(&mut parts)?;

        let req = Request::from_parts(parts, body);
        debug!("sending signed request: {} {}", req.method(), req.uri());

        self.ctx.http_send(req).await
    }
}

fn parse_path(path: &str) -> Result<Uri> {
    if path.contains("://") || path.starts_with('/') {
        return Ok(path.parse()?);
    }

    // The platform documents some endpoint paths without a leading slash.
    Ok(format!("/{path}").parse()?)
}

fn serialize_body(body: &Value) -> Result<Option<Bytes>> {
    if is_empty_body(body) {
        return Ok(None);
    }

    let bs = serde_json::to_vec(body)
        .map_err(|e| Error::unexpected("failed to serialize request body").with_source(e))?;

    Ok(Some(Bytes::from(bs)))
}

fn is_empty_body(body: &Value) -> bool {
    match body {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}
