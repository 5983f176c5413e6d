use anyhow::Context;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    /// Read listen address from the environment. `PORT` defaults to 8080
    /// when unset, but a value that is present and non-numeric is a fatal
    /// startup error.
    pub fn from_env() -> anyhow::Result<Self> {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());
        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".into())
            .parse::<u16>()
            .context("PORT must be a valid port number")?;
        Ok(Self { host, port })
    }
}
