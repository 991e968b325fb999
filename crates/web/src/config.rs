use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub seed_demo_data: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: std::env::var("HOST").context("Cannot load HOST env variable")?,
            port: std::env::var("PORT")
                .context("Cannot load PORT env variable")?
                .parse()
                .context("PORT must be a number")?,
            seed_demo_data: match std::env::var("SEED_DEMO_DATA") {
                Ok(value) => value
                    .parse()
                    .context("SEED_DEMO_DATA must be true or false")?,
                Err(_) => false,
            },
        })
    }
}
