use std::sync::Arc;

use axum::{
    extract::{Form, Query, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::{Cookie, SignedCookieJar};
use tracing::debug;

use crate::{
    AppState,
    error::{AppError, AppResult},
    models::{AddForm, EditForm, FindQuery, IdQuery, NewMovie},
    templates,
};

const FLASH_COOKIE: &str = "flash";

pub async fn index(
    State(state): State<Arc<AppState>>,
    jar: SignedCookieJar<crate::CookieKey>,
) -> AppResult<Response> {
    let movies = state.store.list_ranked().await?;
    let flash = jar.get(FLASH_COOKIE).map(|c| c.value().to_string());
    let jar = jar.remove(Cookie::build(FLASH_COOKIE).path("/"));
    Ok((jar, Html(templates::index_page(&movies, flash.as_deref()))).into_response())
}

pub async fn add_page() -> Html<String> {
    Html(templates::add_page())
}

pub async fn search(
    State(state): State<Arc<AppState>>,
    Form(form): Form<AddForm>,
) -> AppResult<Html<String>> {
    let title = form.title.trim();
    if title.is_empty() {
        return Err(AppError::InvalidInput("title is required".to_string()));
    }

    let results = state.tmdb.search_movies(title).await?;
    debug!(title = %title, candidates = results.len(), "search for new movie");
    Ok(Html(templates::select_page(title, &results)))
}

pub async fn find(
    State(state): State<Arc<AppState>>,
    Query(q): Query<FindQuery>,
) -> AppResult<Response> {
    let title = q.title.trim();
    if title.is_empty() {
        return Err(AppError::InvalidInput("title is required".to_string()));
    }

    let results = state.tmdb.search_movies(title).await?;
    let Some(first) = results.into_iter().next() else {
        debug!(tmdb_id = q.id, title = %title, "no search results for selection");
        return Ok(Html(templates::no_match_page(title)).into_response());
    };

    debug!(tmdb_id = q.id, chosen = %first.original_title, "creating movie from search result");
    let created = state.store.create(NewMovie::from_search(first)).await?;
    Ok(Redirect::to(&format!("/update?id={}", created.id)).into_response())
}

pub async fn edit_page(
    State(state): State<Arc<AppState>>,
    Query(q): Query<IdQuery>,
) -> AppResult<Html<String>> {
    let movie = state
        .store
        .get(q.id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("movie {} not found", q.id)))?;
    Ok(Html(templates::edit_page(&movie)))
}

pub async fn save(
    State(state): State<Arc<AppState>>,
    Query(q): Query<IdQuery>,
    jar: SignedCookieJar<crate::CookieKey>,
    Form(form): Form<EditForm>,
) -> AppResult<Response> {
    let input = form.validate().map_err(AppError::InvalidInput)?;
    let updated = state.store.set_rating_review(q.id, input).await?;

    let jar = jar.add(
        Cookie::build((FLASH_COOKIE, format!("Saved rating for {}", updated.title))).path("/"),
    );
    Ok((jar, Redirect::to("/")).into_response())
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    Query(q): Query<IdQuery>,
    jar: SignedCookieJar<crate::CookieKey>,
) -> AppResult<Response> {
    let title = state.store.delete(q.id).await?;

    let jar = jar.add(Cookie::build((FLASH_COOKIE, format!("Removed {title}"))).path("/"));
    Ok((jar, Redirect::to("/")).into_response())
}
