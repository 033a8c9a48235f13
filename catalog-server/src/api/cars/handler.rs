//! Car API Handlers
//!
//! The paginated listing is the storefront hot path: it carries a
//! Cache-Control header sized by [`crate::catalog::cache_ttl_seconds`]
//! so a CDN can absorb browse traffic.

use std::collections::HashMap;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::catalog::{cache_ttl_seconds, page_window, sort_by_price, CatalogQuery, SortField};
use crate::core::ServerState;
use crate::db::repository::{brand, car, car_model, color, image, status};
use crate::utils::validation::{
    validate_optional_text, validate_price, validate_required_text, MAX_DESCRIPTION_LEN,
    MAX_NAME_LEN, MAX_SHORT_TEXT_LEN,
};
use crate::utils::{AppError, AppJson, AppResult};
use shared::models::{Car, CarCreate, CarRow, CarUpdate, Deleted, IdPayload, VariantImage};
use shared::Paginated;

/// Storefront "popular" strip size
const POPULAR_LIMIT: u32 = 12;

/// Assemble [`Car`]s from flat rows, fetching variant images for the
/// whole set in one query.
async fn attach_images(state: &ServerState, rows: Vec<CarRow>) -> AppResult<Vec<Car>> {
    let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
    let variants = image::find_variants_by_cars(&state.pool, &ids).await?;

    let mut by_car: HashMap<i64, Vec<VariantImage>> = HashMap::new();
    for v in variants {
        by_car.entry(v.car_id).or_default().push(v);
    }

    Ok(rows
        .into_iter()
        .map(|row| {
            let images = by_car.remove(&row.id).unwrap_or_default();
            Car::from_parts(row, images)
        })
        .collect())
}

/// GET /api/cars - full catalog, id order
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Car>>> {
    let rows = car::find_all(&state.pool).await?;
    let cars = attach_images(&state, rows).await?;
    Ok(Json(cars))
}

/// GET /api/cars/paginated - filtered, sorted, paged listing
pub async fn paginated(
    State(state): State<ServerState>,
    Query(query): Query<CatalogQuery>,
) -> AppResult<Response> {
    let (filter, page) = query.into_parts()?;

    let total = car::count_filtered(&state.pool, &filter).await?;

    let rows = if page.sort == SortField::Price {
        // TEXT prices order lexicographically in SQL, so sort here
        let mut all = car::find_filtered(&state.pool, &filter).await?;
        sort_by_price(&mut all, page.order);
        page_window(all, page.page, page.limit)
    } else {
        car::find_page(&state.pool, &filter, &page).await?
    };

    let items = attach_images(&state, rows).await?;
    let body = Paginated::new(
        items,
        total,
        page.page,
        page.limit,
        page.sort.as_str(),
        page.order.as_str(),
    );

    let ttl = cache_ttl_seconds(&filter, page.page);
    let cache_control = format!(
        "public, s-maxage={ttl}, stale-while-revalidate={}",
        ttl * 2
    );
    Ok(([(header::CACHE_CONTROL, cache_control)], Json(body)).into_response())
}

/// GET /api/cars/popular - the first catalog entries, oldest first
pub async fn popular(State(state): State<ServerState>) -> AppResult<Json<Vec<Car>>> {
    let rows = car::find_popular(&state.pool, POPULAR_LIMIT).await?;
    let cars = attach_images(&state, rows).await?;
    Ok(Json(cars))
}

/// GET /api/cars/{id} - one car with its variant images
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Car>> {
    let row = car::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Car {id} not found")))?;
    let images = image::find_variants_by_car(&state.pool, id).await?;
    Ok(Json(Car::from_parts(row, images)))
}

/// Every referenced row must exist before a car insert/update touches
/// it; SQLite would otherwise report an opaque FK failure.
async fn validate_refs(
    state: &ServerState,
    brand_id: Option<i64>,
    model_id: Option<i64>,
    color_id: Option<i64>,
    status_id: Option<i64>,
    thumbnail_image_id: Option<i64>,
) -> AppResult<()> {
    if let Some(id) = brand_id
        && brand::find_by_id(&state.pool, id).await?.is_none()
    {
        return Err(AppError::validation(format!("Brand {id} does not exist")));
    }
    if let Some(id) = model_id
        && car_model::find_by_id(&state.pool, id).await?.is_none()
    {
        return Err(AppError::validation(format!("Model {id} does not exist")));
    }
    if let Some(id) = color_id
        && color::find_by_id(&state.pool, id).await?.is_none()
    {
        return Err(AppError::validation(format!("Color {id} does not exist")));
    }
    if let Some(id) = status_id
        && status::find_by_id(&state.pool, id).await?.is_none()
    {
        return Err(AppError::validation(format!("Status {id} does not exist")));
    }
    if let Some(id) = thumbnail_image_id
        && image::find_thumbnail(&state.pool, id).await?.is_none()
    {
        return Err(AppError::validation(format!(
            "Thumbnail image {id} does not exist"
        )));
    }
    Ok(())
}

/// POST /api/cars - create car
pub async fn create(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<CarCreate>,
) -> AppResult<(StatusCode, Json<Car>)> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_price(&payload.price)?;
    validate_required_text(&payload.scale, "scale", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(payload.description.as_deref(), "description", MAX_DESCRIPTION_LEN)?;
    validate_refs(
        &state,
        Some(payload.brand_id),
        Some(payload.model_id),
        Some(payload.color_id),
        Some(payload.status_id),
        payload.thumbnail_image_id,
    )
    .await?;

    let row = car::create(&state.pool, payload).await?;
    let images = image::find_variants_by_car(&state.pool, row.id).await?;
    Ok((StatusCode::CREATED, Json(Car::from_parts(row, images))))
}

/// PATCH /api/cars - partial update by id
pub async fn update(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<CarUpdate>,
) -> AppResult<Json<Car>> {
    validate_optional_text(payload.name.as_deref(), "name", MAX_NAME_LEN)?;
    if let Some(ref price) = payload.price {
        validate_price(price)?;
    }
    validate_optional_text(payload.scale.as_deref(), "scale", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(payload.description.as_deref(), "description", MAX_DESCRIPTION_LEN)?;
    validate_refs(
        &state,
        payload.brand_id,
        payload.model_id,
        payload.color_id,
        payload.status_id,
        payload.thumbnail_image_id,
    )
    .await?;

    let row = car::update(&state.pool, payload).await?;
    let images = image::find_variants_by_car(&state.pool, row.id).await?;
    Ok(Json(Car::from_parts(row, images)))
}

/// DELETE /api/cars - delete by id with images and homepage entry
pub async fn remove(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<IdPayload>,
) -> AppResult<Json<Deleted>> {
    let urls = car::delete(&state.pool, payload.id).await?;

    // Rows are gone; file removal is best-effort
    for url in &urls {
        state.images.remove_by_url(url).await;
    }

    tracing::info!(car_id = payload.id, images = urls.len(), "Car deleted");
    Ok(Json(Deleted { deleted: true }))
}
