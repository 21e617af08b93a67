use lettre::message::Mailbox;
use secrecy::Secret;
use serde_aux::prelude::deserialize_number_from_string;

#[derive(Debug)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. Use either `local` or `production`.",
                other,
            )),
        }
    }
}

#[derive(serde::Deserialize, Clone)]
pub struct EmailClientSettings {
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    pub require_tls: bool,
    /// Account the relay authenticates as. Every inquiry is sent from and to it.
    pub operator_email: String,
    pub app_password: Secret<String>,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub timeout_milliseconds: u64,
}

impl EmailClientSettings {
    pub fn operator(&self) -> Result<Mailbox, lettre::address::AddressError> {
        self.operator_email.parse()
    }

    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.timeout_milliseconds)
    }
}

#[derive(serde::Deserialize, Clone)]
pub struct ApplicationSettings {
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
}

#[derive(serde::Deserialize, Clone)]
pub struct Configuration {
    pub application: ApplicationSettings,
    pub email_client: EmailClientSettings,
}

/// Variables the site has always been deployed with. They win over every file layer.
const OPERATOR_EMAIL_VARIABLE: &str = "GMAIL_USER";
const APP_PASSWORD_VARIABLE: &str = "GMAIL_APP_PASSWORD";

pub fn get_configuration() -> Result<Configuration, config::ConfigError> {
    let mut settings = config::Config::default();

    let base_path =
        std::env::current_dir().map_err(|e| config::ConfigError::Foreign(Box::new(e)))?;
    let configuration_directory = base_path.join("configuration");

    settings.merge(config::File::from(configuration_directory.join("base")).required(true))?;

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(config::ConfigError::Message)?;

    settings.merge(
        config::File::from(configuration_directory.join(environment.as_str())).required(true),
    )?;

    // e.g. `APP_APPLICATION__PORT=5001` sets `application.port`
    settings.merge(config::Environment::with_prefix("app").separator("__"))?;

    if let Ok(operator_email) = std::env::var(OPERATOR_EMAIL_VARIABLE) {
        settings.set("email_client.operator_email", operator_email)?;
    }
    if let Ok(app_password) = std::env::var(APP_PASSWORD_VARIABLE) {
        settings.set("email_client.app_password", app_password)?;
    }

    settings.try_into()
}
