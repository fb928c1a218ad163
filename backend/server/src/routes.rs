use std::sync::Arc;

use axum::{
    Form, Json,
    extract::{Path, Query, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use bank::{Record, catalog::id_and_name, ordinal_of};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    error::AppError,
    render::{INDEX_TITLE, RESULTS_TITLE, browse_page, detail_page, index_page, search_page},
    state::AppState,
    utils::{EMPTY_QUERY, NO_MATCH, SearchCategory, SearchOutcome, detail_path, search_outcome},
};

#[derive(Deserialize)]
pub struct SearchForm {
    category: Option<String>,
    #[serde(default)]
    text: String,
}

#[derive(Deserialize)]
pub struct BrowseForm {
    pres_choice: String,
}

#[derive(Serialize)]
struct Summary<'a> {
    id: &'a str,
    name: &'a str,
}

#[derive(Serialize)]
struct Detail<'a> {
    #[serde(flatten)]
    record: &'a Record,
    ordinal: String,
}

pub async fn index_handler(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(index_page(INDEX_TITLE, &state.catalog.list()))
}

pub async fn detail_handler(
    State(state): State<Arc<AppState>>,
    Path(num): Path<String>,
) -> Result<Html<String>, AppError> {
    let record = state.catalog.get(&num)?;
    let ordinal = ordinal_of(&num)?;

    Ok(Html(detail_page(record, &ordinal)))
}

pub async fn search_form_handler() -> Html<String> {
    Html(search_page(SearchCategory::default(), "", ""))
}

pub async fn search_handler(
    State(state): State<Arc<AppState>>,
    Form(form): Form<SearchForm>,
) -> Result<Response, AppError> {
    let category = SearchCategory::from_form(form.category.as_deref())?;
    let text = form.text.as_str();

    // blank input is rejected, but the query itself is matched as typed
    if text.trim().is_empty() {
        return Ok(Html(search_page(category, "", EMPTY_QUERY)).into_response());
    }

    let matches = state.catalog.search(category.field(), text)?;
    info!("Search {}={text:?}: {} matches", category.field(), matches.len());

    let response = match search_outcome(&matches) {
        SearchOutcome::Redirect(id) => Redirect::to(&detail_path(id)).into_response(),
        SearchOutcome::Results(pairs) => Html(index_page(RESULTS_TITLE, &pairs)).into_response(),
        SearchOutcome::NoMatch => Html(search_page(category, text, NO_MATCH)).into_response(),
    };

    Ok(response)
}

pub async fn browse_handler(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(browse_page(&state.catalog.list()))
}

pub async fn browse_submit_handler(
    State(state): State<Arc<AppState>>,
    Form(form): Form<BrowseForm>,
) -> Result<Redirect, AppError> {
    let record = state.catalog.get(&form.pres_choice)?;
    let (id, _) = id_and_name(record);

    Ok(Redirect::to(&detail_path(id)))
}

pub async fn api_list_handler(State(state): State<Arc<AppState>>) -> Response {
    let summaries: Vec<Summary> = state
        .catalog
        .list()
        .into_iter()
        .map(|(id, name)| Summary { id, name })
        .collect();

    Json(summaries).into_response()
}

pub async fn api_detail_handler(
    State(state): State<Arc<AppState>>,
    Path(num): Path<String>,
) -> Result<Response, AppError> {
    let record = state.catalog.get(&num)?;
    let ordinal = ordinal_of(&num)?;

    Ok(Json(Detail { record, ordinal }).into_response())
}

pub async fn api_search_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchForm>,
) -> Result<Response, AppError> {
    let category = SearchCategory::from_form(query.category.as_deref())?;
    let matches = state.catalog.search(category.field(), &query.text)?;

    Ok(Json(matches).into_response())
}
