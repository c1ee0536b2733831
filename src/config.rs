use std::net::SocketAddr;

use anyhow::Context;

#[derive(Clone, Debug)]
pub struct Config {
    pub addr: SocketAddr,
    pub tmdb_api_key: String,
    pub tmdb_access_token: String,
    pub tmdb_base_url: String,
    pub secret_key: String,
    pub database_url: String,
    pub tmdb_rps: u32,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port: u16 =
            std::env::var("PORT").unwrap_or_else(|_| "3000".to_string()).parse().context("PORT")?;

        let tmdb_api_key = std::env::var("TMDB_API_KEY").context("TMDB_API_KEY is required")?;
        let tmdb_access_token =
            std::env::var("TMDB_ACCESS_TOKEN").context("TMDB_ACCESS_TOKEN is required")?;
        let tmdb_base_url = std::env::var("TMDB_BASE_URL")
            .unwrap_or_else(|_| "https://api.themoviedb.org/3".to_string());

        let secret_key = std::env::var("SECRET_KEY").context("SECRET_KEY is required")?;
        // The cookie signing key is derived from this value; shorter input panics.
        anyhow::ensure!(secret_key.len() >= 32, "SECRET_KEY must be at least 32 bytes");

        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://movies.db?mode=rwc".to_string());

        let tmdb_rps: u32 =
            std::env::var("TMDB_RPS").ok().and_then(|s| s.parse().ok()).unwrap_or(4);

        Ok(Self {
            addr: format!("{host}:{port}").parse().context("HOST/PORT")?,
            tmdb_api_key,
            tmdb_access_token,
            tmdb_base_url,
            secret_key,
            database_url,
            tmdb_rps,
        })
    }
}
