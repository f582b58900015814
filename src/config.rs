use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use portfolio_contact::{
    Credentials, PLACEHOLDER_PUBLIC_KEY, PLACEHOLDER_SERVICE_ID, PLACEHOLDER_TEMPLATE_ID,
};
use portfolio_notification::{EMAILJS_API_URL, SmtpConfig};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub contact: ContactConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    #[serde(default = "default_resume_url")]
    pub resume_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            resume_url: default_resume_url(),
        }
    }
}

fn default_resume_url() -> String {
    "https://drive.google.com/file/d/1Gt0q7_xuhOvuea3AOn381IGRnxgTVcAu/view?usp=drive_link"
        .to_string()
}

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    #[default]
    EmailJs,
    Smtp,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ContactConfig {
    #[serde(default)]
    pub provider: ProviderKind,
    #[serde(default)]
    pub emailjs: EmailJsConfig,
    #[serde(default)]
    pub smtp: SmtpConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EmailJsConfig {
    #[serde(default = "default_emailjs_url")]
    pub url: String,
    #[serde(default)]
    pub service_id: Option<String>,
    #[serde(default)]
    pub template_id: Option<String>,
    #[serde(default)]
    pub public_key: Option<String>,
    #[serde(default)]
    pub private_key: Option<String>,
}

impl Default for EmailJsConfig {
    fn default() -> Self {
        Self {
            url: default_emailjs_url(),
            service_id: None,
            template_id: None,
            public_key: None,
            private_key: None,
        }
    }
}

impl EmailJsConfig {
    /// Identifiers to send with, placeholders standing in for unset values.
    pub fn credentials(&self) -> Credentials {
        Credentials::from_optional(
            self.service_id.clone(),
            self.template_id.clone(),
            self.public_key.clone(),
        )
    }
}

fn default_emailjs_url() -> String {
    EMAILJS_API_URL.to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. EMAILJS_SERVICE_ID, EMAILJS_TEMPLATE_ID, EMAILJS_PUBLIC_KEY, EMAILJS_PRIVATE_KEY
    /// 2. Environment variables (PORTFOLIO__SERVER__PORT, etc.)
    /// 3. Config file specified by path
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("contact.provider", "emailjs")?
            .set_default("contact.emailjs.service_id", PLACEHOLDER_SERVICE_ID)?
            .set_default("contact.emailjs.template_id", PLACEHOLDER_TEMPLATE_ID)?
            .set_default("contact.emailjs.public_key", PLACEHOLDER_PUBLIC_KEY)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Optional, ignored when missing
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("PORTFOLIO")
                .separator("__")
                .try_parsing(true),
        );

        for (var, key) in [
            ("EMAILJS_SERVICE_ID", "contact.emailjs.service_id"),
            ("EMAILJS_TEMPLATE_ID", "contact.emailjs.template_id"),
            ("EMAILJS_PUBLIC_KEY", "contact.emailjs.public_key"),
            ("EMAILJS_PRIVATE_KEY", "contact.emailjs.private_key"),
        ] {
            if let Ok(value) = env::var(var) {
                builder = builder.set_override(key, value)?;
            }
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }

        match self.contact.provider {
            ProviderKind::EmailJs => {
                if self.contact.emailjs.url.trim().is_empty() {
                    return Err("EmailJS url must not be empty".to_string());
                }
            }
            ProviderKind::Smtp => {
                if self.contact.smtp.host.trim().is_empty() {
                    return Err("SMTP host is required when contact.provider = \"smtp\"".to_string());
                }
                if self.contact.smtp.contact_address.trim().is_empty() {
                    return Err(
                        "SMTP contact_address is required when contact.provider = \"smtp\""
                            .to_string(),
                    );
                }
            }
        }

        Ok(())
    }
}
