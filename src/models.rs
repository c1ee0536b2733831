use serde::Deserialize;

use crate::tmdb::{IMAGE_BASE_URL, SearchMovie};

#[derive(Debug, Deserialize)]
pub struct AddForm {
    pub title: String,
}

/// Raw edit-form submission. Validated into [`EditInput`] before any store write.
#[derive(Debug, Deserialize)]
pub struct EditForm {
    #[serde(default)]
    pub rating: String,
    #[serde(default)]
    pub review: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EditInput {
    pub rating: Option<f64>,
    pub review: Option<String>,
}

impl EditForm {
    pub fn validate(self) -> Result<EditInput, String> {
        let rating = match self.rating.trim() {
            "" => None,
            raw => {
                let value: f64 =
                    raw.parse().map_err(|_| format!("rating must be a number, got {raw:?}"))?;
                if !(0.0..=10.0).contains(&value) {
                    return Err("rating must be between 0 and 10".to_string());
                }
                Some(value)
            },
        };

        let review = self.review.trim();
        let review = (!review.is_empty()).then(|| review.to_string());

        Ok(EditInput { rating, review })
    }
}

#[derive(Debug, Deserialize)]
pub struct IdQuery {
    pub id: i32,
}

#[derive(Debug, Deserialize)]
pub struct FindQuery {
    pub id: i32,
    pub title: String,
}

/// Typed record a search result is mapped into before insertion.
#[derive(Clone, Debug, PartialEq)]
pub struct NewMovie {
    pub title: String,
    pub year: Option<i32>,
    pub description: String,
    pub img_url: Option<String>,
}

impl NewMovie {
    pub fn from_search(movie: SearchMovie) -> Self {
        Self {
            title: movie.original_title,
            year: release_year(&movie.release_date),
            description: movie.overview,
            img_url: movie.poster_path.map(|p| format!("{IMAGE_BASE_URL}{p}")),
        }
    }
}

fn release_year(release_date: &str) -> Option<i32> {
    release_date.split('-').next().and_then(|y| y.parse().ok())
}
