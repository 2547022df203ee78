use docqa_client::ApiSettings;
use secrecy::Secret;
use serde::Deserialize;

#[derive(Deserialize, Clone)]
pub struct Settings {
    pub api: ApiSettings,
    #[serde(default)]
    pub auth: AuthSettings,
}

#[derive(Deserialize, Clone, Default)]
pub struct AuthSettings {
    /// Bearer token issued by the identity provider. Absent means the CLI
    /// runs signed out and every backend call fails as unauthenticated.
    pub token: Option<Secret<String>>,
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().expect("Failed to determine the current directory");

    // Check if we're already in docqa-cli directory or need to navigate to it
    let configuration_directory = if base_path.ends_with("docqa-cli") {
        base_path.join("config")
    } else {
        base_path.join("docqa-cli").join("config")
    };

    let settings = config::Config::builder()
        .add_source(config::File::from(configuration_directory.join("base.yaml")).required(true))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}
