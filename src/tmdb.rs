use std::{num::NonZeroU32, sync::Arc};

use governor::{
    Quota, RateLimiter,
    clock::DefaultClock,
    state::{InMemoryState, NotKeyed},
};
use serde::Deserialize;

use crate::error::AppResult;

/// Fixed prefix poster paths are appended to when building `img_url`.
pub const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";

pub struct TmdbClient {
    client: reqwest::Client,
    access_token: String,
    api_key: String,
    base_url: String,
    limiter: Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct SearchMovie {
    pub id: i32,
    #[serde(default)]
    pub original_title: String,
    #[serde(default)]
    pub release_date: String,
    pub poster_path: Option<String>,
    #[serde(default)]
    pub overview: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    results: Vec<SearchMovie>,
}

impl TmdbClient {
    pub fn new(
        client: reqwest::Client,
        access_token: String,
        api_key: String,
        base_url: String,
        rps: u32,
    ) -> Self {
        // Warn once on app load if using mock data
        if access_token.trim().is_empty() && api_key.trim().is_empty() {
            tracing::warn!("Using mock TMDB data - no TMDB credentials provided");
        }

        let limiter =
            Arc::new(RateLimiter::direct(Quota::per_second(NonZeroU32::new(rps.max(1)).unwrap())));
        Self { client, access_token, api_key, base_url, limiter }
    }

    pub async fn search_movies(&self, query: &str) -> AppResult<Vec<SearchMovie>> {
        if self.access_token.trim().is_empty() && self.api_key.trim().is_empty() {
            return Ok(mock_search(query));
        }

        self.limiter.until_ready().await;

        let url = format!("{}/search/movie", self.base_url.trim_end_matches('/'));
        let mut req = self
            .client
            .get(url)
            .query(&[("query", query), ("language", "en-US")]);
        if !self.access_token.trim().is_empty() {
            req = req.bearer_auth(&self.access_token);
        } else {
            req = req.query(&[("api_key", &self.api_key)]);
        }

        let resp: SearchResponse = req.send().await?.error_for_status()?.json().await?;
        tracing::debug!(query = %query, results = resp.results.len(), "tmdb search");
        Ok(resp.results)
    }
}

fn mock_search(query: &str) -> Vec<SearchMovie> {
    let needle = query.trim().to_lowercase();
    mock_catalog()
        .into_iter()
        .filter(|m| m.original_title.to_lowercase().contains(&needle))
        .collect()
}

fn mock_catalog() -> Vec<SearchMovie> {
    vec![
        SearchMovie {
            id: 550,
            original_title: "Fight Club".to_string(),
            release_date: "1999-10-15".to_string(),
            poster_path: Some("/pB8BM7pdSp6B6Ih7QZ4DrQ3PmJK.jpg".to_string()),
            overview: "A ticking-time-bomb insomniac and a slippery soap salesman channel \
                       primal male aggression into a shocking new form of therapy."
                .to_string(),
        },
        SearchMovie {
            id: 603,
            original_title: "The Matrix".to_string(),
            release_date: "1999-03-31".to_string(),
            poster_path: Some("/f89U3ADr1oiB1s9GkdPOEpXUk5H.jpg".to_string()),
            overview: "Set in the 22nd century, The Matrix tells the story of a computer \
                       hacker who joins a group of underground insurgents."
                .to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_search_filters_by_title() {
        let hits = mock_search("fight");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 550);

        assert!(mock_search("no such film").is_empty());
    }

    #[tokio::test]
    async fn client_without_credentials_serves_mock_data() {
        let client = TmdbClient::new(
            reqwest::Client::new(),
            String::new(),
            String::new(),
            "https://api.themoviedb.org/3".to_string(),
            4,
        );
        let hits = client.search_movies("matrix").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].original_title, "The Matrix");
    }
}
