use super::constants::*;
use seewo_core::Context;

/// Config carries all the configuration for the Seewo client.
#[derive(Clone, Debug, Default)]
pub struct Config {
    /// `app_id` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`SEEWO_APP_ID`]
    pub app_id: Option<String>,
    /// `secret` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`SEEWO_SECRET`]
    pub secret: Option<String>,
    /// `host` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`SEEWO_HOST`]
    ///
    /// An explicit host always wins over `is_sandbox`.
    pub host: Option<String>,
    /// `is_sandbox` selects the sandbox host when no explicit host is set.
    ///
    /// Loaded from env value [`SEEWO_SANDBOX`] (`true` or `1`) when not
    /// already set.
    pub is_sandbox: bool,
}

impl Config {
    /// Load config from env.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if let Some(v) = ctx.env_var(SEEWO_APP_ID) {
            self.app_id.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(SEEWO_SECRET) {
            self.secret.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(SEEWO_HOST) {
            self.host.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(SEEWO_SANDBOX) {
            self.is_sandbox = self.is_sandbox || v == "true" || v == "1";
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seewo_core::StaticEnv;
    use std::collections::HashMap;

    #[test]
    fn test_from_env() {
        let ctx = Context::new().with_env(StaticEnv {
            envs: HashMap::from([
                ("SEEWO_APP_ID".to_string(), "app".to_string()),
                ("SEEWO_SECRET".to_string(), "secret".to_string()),
                ("SEEWO_SANDBOX".to_string(), "true".to_string()),
            ]),
        });

        let config = Config::default().from_env(&ctx);
        assert_eq!(config.app_id.as_deref(), Some("app"));
        assert_eq!(config.secret.as_deref(), Some("secret"));
        assert_eq!(config.host, None);
        assert!(config.is_sandbox);
    }

    #[test]
    fn test_explicit_fields_win_over_env() {
        let ctx = Context::new().with_env(StaticEnv {
            envs: HashMap::from([("SEEWO_APP_ID".to_string(), "from-env".to_string())]),
        });

        let config = Config {
            app_id: Some("explicit".to_string()),
            ..Default::default()
        }
        .from_env(&ctx);

        assert_eq!(config.app_id.as_deref(), Some("explicit"));
    }
}
