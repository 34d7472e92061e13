use hc_config::HealthConfig;

/// Load layered configuration, reading `.env` from the working directory first.
pub fn load_config() -> anyhow::Result<HealthConfig> {
    HealthConfig::load_with_dotenv().map_err(anyhow::Error::from)
}
