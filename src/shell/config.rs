use anyhow::Context;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl AppConfig {
    /// Reads `TODOS_HOST` and `TODOS_PORT`, falling back to `0.0.0.0:3000`.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let host = lookup("TODOS_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match lookup("TODOS_PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("TODOS_PORT is not a valid port: {raw:?}"))?,
            None => DEFAULT_PORT,
        };
        Ok(Self { host, port })
    }
}
