// Hosts for the Seewo open platform.
pub const DEFAULT_HOST: &str = "openapi.seewo.com";
pub const SANDBOX_HOST: &str = "openapi.test.seewo.com";

// Headers carried by every signed request.
pub const HEADER_APP_ID: &str = "x-sw-app-id";
pub const HEADER_TIMESTAMP: &str = "x-sw-timestamp";
pub const HEADER_REQ_PATH: &str = "x-sw-req-path";
pub const HEADER_SIGN_TYPE: &str = "x-sw-sign-type";
pub const HEADER_VERSION: &str = "x-sw-version";
pub const HEADER_SIGN: &str = "x-sw-sign";
pub const HEADER_CONTENT_MD5: &str = "x-sw-content-md5";
pub const HEADER_SIGN_HEADERS: &str = "x-sw-sign-headers";

pub const SIGN_TYPE_HMAC: &str = "hmac";
pub const SIGN_VERSION: &str = "2";

// Any header whose name contains this mark contributes to the signature.
pub const SIGN_HEADER_MARK: &str = "x-sw";

// Env values used by Config::from_env.
pub const SEEWO_APP_ID: &str = "SEEWO_APP_ID";
pub const SEEWO_SECRET: &str = "SEEWO_SECRET";
pub const SEEWO_HOST: &str = "SEEWO_HOST";
pub const SEEWO_SANDBOX: &str = "SEEWO_SANDBOX";
