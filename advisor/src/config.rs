use secrecy::SecretString;
use shared_utils::env::{MissingEnvVarError, get_env_var, get_env_var_or};

const DEFAULT_BASE_URL: &str = "https://api.openai.com";
const DEFAULT_MODEL: &str = "gpt-5";

/// Completion endpoint settings, read from the environment (a local `.env`
/// is loaded first by the binary).
pub struct AdvisorConfig {
    pub base_url: String,
    pub model: String,
    pub api_key: SecretString,
}

impl AdvisorConfig {
    /// Reads `OPEN_AI_BASE_URL`, `OPEN_AI_MODEL` and `OPEN_AI_API_KEY`;
    /// only the API key is required.
    pub fn from_env() -> Result<Self, MissingEnvVarError> {
        Ok(Self {
            base_url: get_env_var_or("OPEN_AI_BASE_URL", DEFAULT_BASE_URL),
            model: get_env_var_or("OPEN_AI_MODEL", DEFAULT_MODEL),
            api_key: get_env_var("OPEN_AI_API_KEY")?.into(),
        })
    }
}
