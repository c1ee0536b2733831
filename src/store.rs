use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryOrder, Set,
    TransactionTrait,
};
use tracing::debug;

use crate::{
    entities::movie,
    error::{AppError, AppResult},
    models::{EditInput, NewMovie},
};

/// Connection handle passed to every route handler. One scoped transaction
/// per mutating operation; dropping an uncommitted transaction rolls it back.
#[derive(Clone)]
pub struct MovieStore {
    db: DatabaseConnection,
}

impl MovieStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Reads every movie ordered by ascending rating and overwrites the stored
    /// ranking so the highest-rated movie ends up with rank 1. Unrated movies
    /// sort first (SQLite NULLs-first) and take the largest rank numbers.
    pub async fn list_ranked(&self) -> AppResult<Vec<movie::Model>> {
        let txn = self.db.begin().await?;

        let mut movies = movie::Entity::find()
            .order_by_asc(movie::Column::Rating)
            .order_by_asc(movie::Column::Id)
            .all(&txn)
            .await?;

        let total = movies.len() as i32;
        for (i, m) in movies.iter_mut().enumerate() {
            let rank = total - i as i32;
            if m.ranking != Some(rank) {
                let mut active = m.clone().into_active_model();
                active.ranking = Set(Some(rank));
                active.update(&txn).await?;
            }
            m.ranking = Some(rank);
        }

        txn.commit().await?;
        debug!(total = total, "ranked movie list");
        Ok(movies)
    }

    pub async fn get(&self, id: i32) -> AppResult<Option<movie::Model>> {
        Ok(movie::Entity::find_by_id(id).one(&self.db).await?)
    }

    pub async fn create(&self, new: NewMovie) -> AppResult<movie::Model> {
        let active = movie::ActiveModel {
            id: Default::default(),
            title: Set(new.title),
            year: Set(new.year),
            description: Set(new.description),
            rating: Set(None),
            ranking: Set(None),
            review: Set(None),
            img_url: Set(new.img_url),
        };
        let created = active.insert(&self.db).await?;
        debug!(id = created.id, title = %created.title, "created movie");
        Ok(created)
    }

    /// Persists exactly the submitted rating and review, leaving every other
    /// field untouched.
    pub async fn set_rating_review(&self, id: i32, input: EditInput) -> AppResult<movie::Model> {
        let txn = self.db.begin().await?;

        let Some(existing) = movie::Entity::find_by_id(id).one(&txn).await? else {
            return Err(AppError::NotFound(format!("movie {id} not found")));
        };

        let mut active = existing.into_active_model();
        active.rating = Set(input.rating);
        active.review = Set(input.review);
        let updated = active.update(&txn).await?;

        txn.commit().await?;
        debug!(id = id, rating = ?updated.rating, "updated rating and review");
        Ok(updated)
    }

    /// Deletes the movie and returns its title. Missing id is not-found.
    pub async fn delete(&self, id: i32) -> AppResult<String> {
        let txn = self.db.begin().await?;

        let Some(existing) = movie::Entity::find_by_id(id).one(&txn).await? else {
            return Err(AppError::NotFound(format!("movie {id} not found")));
        };

        let title = existing.title.clone();
        existing.into_active_model().delete(&txn).await?;

        txn.commit().await?;
        debug!(id = id, title = %title, "deleted movie");
        Ok(title)
    }
}
