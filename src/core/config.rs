use log::{info, warn};
use std::env;
use std::fmt;

/*-------------------------------------------------------------------------------------------------
  Client Configuration
-------------------------------------------------------------------------------------------------*/

const DEFAULT_URL: &str = "https://sandboxapic.cisco.com/api/v1";

/// Connection settings for the inventory controller, passed explicitly to
/// [Client::connect](crate::Client::connect).
///
/// ```
/// let mut config = ipdupcheck::ClientConfig::default();
/// config
///     .url("https://controller.example.net/api/v1")
///     .username("netops")
///     .password("secret")
///     .accept_invalid_certs(true);
///
/// assert_eq!(config.get_url(), "https://controller.example.net/api/v1");
/// assert_eq!(config.get_username(), "netops");
/// assert!(config.get_accept_invalid_certs());
/// ```
///
/// [ClientConfig::new] sources initial values from environment variables
/// when set; [ClientConfig::default] uses the built-in defaults only.
#[derive(Clone, Eq, PartialEq)]
pub struct ClientConfig {
    url: String,
    username: String,
    password: String,
    accept_invalid_certs: bool,
}

impl Default for ClientConfig {
    /// Create a [ClientConfig] with the built-in defaults and no credentials.
    ///
    /// ```
    /// let config = ipdupcheck::ClientConfig::default();
    ///
    /// assert_eq!(config.get_url(), "https://sandboxapic.cisco.com/api/v1");
    /// assert_eq!(config.get_username(), "");
    /// assert!(!config.get_accept_invalid_certs());
    /// ```
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            username: String::new(),
            password: String::new(),
            accept_invalid_certs: false,
        }
    }
}

impl ClientConfig {
    /// Create a [ClientConfig] reading initial values from environment
    /// variables when set and default values otherwise.
    ///
    /// The environment variables are:
    /// - `IPDUPCHECK_URL`
    /// - `IPDUPCHECK_USERNAME`
    /// - `IPDUPCHECK_PASSWORD`
    /// - `IPDUPCHECK_INSECURE`
    pub fn new() -> Self {
        let default = ClientConfig::default();

        Self {
            url: get_env_var("IPDUPCHECK_URL", default.url),
            username: get_env_var("IPDUPCHECK_USERNAME", default.username),
            password: get_secret_env_var("IPDUPCHECK_PASSWORD", default.password),
            accept_invalid_certs: get_env_var("IPDUPCHECK_INSECURE", default.accept_invalid_certs),
        }
    }

    /*-------------------------------------------------------------------------
      Setters
    -------------------------------------------------------------------------*/

    /// Set the controller API base URL.
    pub fn url(&mut self, url: &str) -> &mut Self {
        self.url = url.to_string();
        self
    }

    pub fn username(&mut self, username: &str) -> &mut Self {
        self.username = username.to_string();
        self
    }

    pub fn password(&mut self, password: &str) -> &mut Self {
        self.password = password.to_string();
        self
    }

    /// Skip TLS certificate validation; controllers are commonly deployed
    /// with self-signed certificates.
    pub fn accept_invalid_certs(&mut self, accept_invalid_certs: bool) -> &mut Self {
        self.accept_invalid_certs = accept_invalid_certs;
        self
    }

    /*-------------------------------------------------------------------------
      Getters
    -------------------------------------------------------------------------*/

    pub fn get_url(&self) -> &str {
        &self.url
    }

    pub fn get_username(&self) -> &str {
        &self.username
    }

    pub fn get_password(&self) -> &str {
        &self.password
    }

    pub fn get_accept_invalid_certs(&self) -> bool {
        self.accept_invalid_certs
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("url", &self.url)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("accept_invalid_certs", &self.accept_invalid_certs)
            .finish()
    }
}

/*-------------------------------------------------------------------------------------------------
  Helper Functions
-------------------------------------------------------------------------------------------------*/

/// Get and parse an environment variable value or return a default value.
fn get_env_var<T: std::str::FromStr>(env_var: &str, default: T) -> T {
    env::var(env_var)
        .ok()
        .and_then(|value| {
            value
                .parse::<T>()
                .inspect(|_| info!("Using {}: {}", env_var, value))
                .inspect_err(|_| warn!("Invalid {}: {}", env_var, value))
                .ok()
        })
        .unwrap_or(default)
}

/// Get an environment variable value without logging it.
fn get_secret_env_var(env_var: &str, default: String) -> String {
    env::var(env_var)
        .inspect(|_| info!("Using {}", env_var))
        .unwrap_or(default)
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/

#[cfg(test)]
mod tests {
    use super::*;
    use env::VarError;
    use test_log::test;

    /// ENV_VAR: IPDUPCHECK_URL
    /// ENV_VAR: IPDUPCHECK_USERNAME
    /// ENV_VAR: IPDUPCHECK_PASSWORD
    /// ENV_VAR: IPDUPCHECK_INSECURE
    #[test]
    fn test_environment_variable_configuration() {
        let test_env_vars = [
            ("IPDUPCHECK_URL", "https://controller.example.net/api/v1"),
            ("IPDUPCHECK_USERNAME", "netops"),
            ("IPDUPCHECK_PASSWORD", "secret"),
            ("IPDUPCHECK_INSECURE", "true"),
        ];

        let default = ClientConfig::default();

        // Store environment variable values
        let stored_env_vars: Vec<(String, std::result::Result<String, VarError>)> = test_env_vars
            .iter()
            .map(|(env_var, _)| (env_var.to_string(), env::var(env_var)))
            .collect();

        // Unset all environment variables
        test_env_vars.iter().for_each(|(env_var, _)| unsafe {
            std::env::remove_var(env_var);
        });

        // Test default cases
        assert_eq!(ClientConfig::new(), default);

        // Set all environment variables
        for (env_var, value) in test_env_vars.iter() {
            unsafe { std::env::set_var(env_var, value) };
        }

        let env_config = ClientConfig::new();
        assert_eq!(env_config.get_url(), "https://controller.example.net/api/v1");
        assert_eq!(env_config.get_username(), "netops");
        assert_eq!(env_config.get_password(), "secret");
        assert!(env_config.get_accept_invalid_certs());

        // Invalid values fall back to the default
        unsafe { std::env::set_var("IPDUPCHECK_INSECURE", "sometimes") };
        assert!(!ClientConfig::new().get_accept_invalid_certs());

        // Reset environment variables
        for (env_var, value) in stored_env_vars {
            match value {
                Ok(value) => unsafe { std::env::set_var(env_var, value) },
                Err(VarError::NotPresent) => unsafe { std::env::remove_var(env_var) },
                Err(VarError::NotUnicode(value)) => unsafe { std::env::set_var(env_var, value) },
            }
        }
    }

    #[test]
    fn test_getter_and_setter_methods() {
        let mut config = ClientConfig::default();
        config
            .url("https://10.93.140.80/api/v1")
            .username("admin")
            .password("hunter2")
            .accept_invalid_certs(true);

        assert_eq!(config.get_url(), "https://10.93.140.80/api/v1");
        assert_eq!(config.get_username(), "admin");
        assert_eq!(config.get_password(), "hunter2");
        assert!(config.get_accept_invalid_certs());
    }

    #[test]
    fn test_debug_redacts_password() {
        let mut config = ClientConfig::default();
        config.username("admin").password("hunter2");

        let debug = format!("{config:?}");
        assert!(debug.contains("admin"));
        assert!(!debug.contains("hunter2"));
    }
}
