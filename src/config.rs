use anyhow::Result;
use std::env;
use validator::ValidateEmail;

const DEFAULT_PRODUCT_NAME: &str = "fortifykey";
const DEFAULT_DEV_SENDER: &str = "noreply@fortifykey.local";
const DEFAULT_MAX_PASSWORD_LENGTH: usize = 4096;

#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    /// Detects the environment from the process variables
    pub fn detect() -> Self {
        Self::detect_with(|key| env::var(key).ok())
    }

    /// Lambda always means production, otherwise `APP_ENV` decides
    fn detect_with(lookup: impl Fn(&str) -> Option<String>) -> Self {
        if lookup("AWS_LAMBDA_FUNCTION_NAME").is_some() {
            return Self::Production;
        }

        match lookup("APP_ENV").as_deref() {
            Some("production" | "prod") => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }
}

/// Which mail transport the notifier is built with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportKind {
    /// Amazon SES v2
    Ses,
    /// Writes a log line instead of sending anything
    Log,
}

impl TransportKind {
    fn parse(value: &str) -> Result<Self> {
        match value.to_ascii_lowercase().as_str() {
            "ses" => Ok(Self::Ses),
            "log" => Ok(Self::Log),
            other => anyhow::bail!("Unknown MAIL_TRANSPORT '{other}' (expected 'ses' or 'log')"),
        }
    }
}

/// Mail settings, read once at startup and handed to the notifier.
#[derive(Debug, Clone)]
pub struct MailConfig {
    pub from_address: String,
    pub product_name: String,
    pub transport: TransportKind,
    /// Swallow delivery failures instead of reporting them to the caller.
    pub fail_silently: bool,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub environment: Environment,
    pub server_host: String,
    pub server_port: u16,
    pub frontend_url: Option<String>,
    pub max_password_length: usize,
    pub mail: MailConfig,
}

impl Config {
    /// Loads the configuration from the process environment
    pub fn from_env() -> Result<Self> {
        let environment = Environment::detect();

        tracing::info!(
            "🌍 Environment detected: {}",
            environment.as_str().to_uppercase()
        );

        let config = Self::from_lookup(environment, |key| env::var(key).ok())?;

        tracing::info!("✅ Configuration loaded successfully");
        tracing::debug!("   Server: {}:{}", config.server_host, config.server_port);
        tracing::debug!(
            "   Frontend: {}",
            config.frontend_url.as_deref().unwrap_or("<any>")
        );
        tracing::debug!(
            "   Mail: {:?} from {} (fail_silently={})",
            config.mail.transport,
            config.mail.from_address,
            config.mail.fail_silently
        );

        Ok(config)
    }

    fn from_lookup(
        environment: Environment,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let server_host = lookup("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let server_port = match lookup("SERVER_PORT") {
            Some(port) => port
                .parse()
                .map_err(|_| anyhow::anyhow!("SERVER_PORT must be a port number, got '{port}'"))?,
            None => 3000,
        };
        let frontend_url = Self::get_frontend_url(&environment, &lookup);
        let max_password_length = match lookup("MAX_PASSWORD_LENGTH") {
            Some(max) => max.parse().map_err(|_| {
                anyhow::anyhow!("MAX_PASSWORD_LENGTH must be a positive integer, got '{max}'")
            })?,
            None => DEFAULT_MAX_PASSWORD_LENGTH,
        };
        let mail = Self::get_mail_config(&environment, &lookup)?;

        Ok(Self {
            environment,
            server_host,
            server_port,
            frontend_url,
            max_password_length,
            mail,
        })
    }

    /// Reads the mail settings with production safeguards
    fn get_mail_config(
        environment: &Environment,
        lookup: &impl Fn(&str) -> Option<String>,
    ) -> Result<MailConfig> {
        let from_address = match lookup("MAIL_FROM") {
            Some(from) => from,
            None if environment.is_production() => {
                tracing::error!("❌ MAIL_FROM not set in production!");
                anyhow::bail!("MAIL_FROM is required in production");
            }
            None => {
                tracing::warn!("⚠️  MAIL_FROM not set, using {DEFAULT_DEV_SENDER} (DEVELOPMENT ONLY!)");
                DEFAULT_DEV_SENDER.to_string()
            }
        };

        if !from_address.validate_email() {
            anyhow::bail!("MAIL_FROM is not a valid email address: '{from_address}'");
        }

        let transport = match lookup("MAIL_TRANSPORT") {
            Some(kind) => TransportKind::parse(&kind)?,
            None if environment.is_production() => TransportKind::Ses,
            None => TransportKind::Log,
        };

        let fail_silently = match lookup("MAIL_FAIL_SILENTLY") {
            Some(flag) => parse_flag(&flag).ok_or_else(|| {
                anyhow::anyhow!("MAIL_FAIL_SILENTLY must be true or false, got '{flag}'")
            })?,
            None => true,
        };

        let product_name =
            lookup("PRODUCT_NAME").unwrap_or_else(|| DEFAULT_PRODUCT_NAME.to_string());

        Ok(MailConfig {
            from_address,
            product_name,
            transport,
            fail_silently,
        })
    }

    /// Allowed CORS origin; `None` lets any origin through (development only)
    fn get_frontend_url(
        environment: &Environment,
        lookup: &impl Fn(&str) -> Option<String>,
    ) -> Option<String> {
        lookup("FRONTEND_URL").or_else(|| {
            if environment.is_production() {
                Some("https://fortifykey.app".to_string())
            } else {
                None
            }
        })
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
