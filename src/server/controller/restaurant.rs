use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, ErrorsDto},
        restaurant::{CreateRestaurantDto, RestaurantDto, UpdateRestaurantDto},
    },
    server::{
        error::AppError,
        model::restaurant::{CreateRestaurantParam, RestaurantWithPizzas, UpdateRestaurantParam},
        service::restaurant::RestaurantService,
        state::AppState,
    },
};

/// Tag for grouping restaurant endpoints in OpenAPI documentation
pub static RESTAURANT_TAG: &str = "restaurant";

/// List all restaurants.
///
/// Each restaurant is rendered in its detail view, menu entries included.
///
/// # Returns
/// - `200 OK` - Restaurants ordered by ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/restaurants",
    tag = RESTAURANT_TAG,
    responses(
        (status = 200, description = "Successfully retrieved restaurants", body = Vec<RestaurantDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_restaurants(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let restaurants = RestaurantService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(RestaurantWithPizzas::into_list_dto(restaurants)),
    ))
}

/// Create a new restaurant.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Restaurant name and optional address
///
/// # Returns
/// - `201 Created` - The new restaurant with an empty menu
/// - `400 Bad Request` - Malformed body or missing name
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/restaurants",
    tag = RESTAURANT_TAG,
    request_body = CreateRestaurantDto,
    responses(
        (status = 201, description = "Successfully created restaurant", body = RestaurantDto),
        (status = 400, description = "Invalid restaurant data", body = ErrorsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_restaurant(
    State(state): State<AppState>,
    payload: Result<Json<CreateRestaurantDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let param = CreateRestaurantParam::from_dto(payload);
    let restaurant = RestaurantService::new(&state.db).create(param).await?;

    Ok((StatusCode::CREATED, Json(restaurant.into_detail_dto())))
}

/// Get a restaurant with its menu.
///
/// # Returns
/// - `200 OK` - Restaurant detail view
/// - `404 Not Found` - No restaurant with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/restaurants/{id}",
    tag = RESTAURANT_TAG,
    params(
        ("id" = i32, Path, description = "Restaurant ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved restaurant", body = RestaurantDto),
        (status = 404, description = "Restaurant not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_restaurant(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = path?;
    let restaurant = RestaurantService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(restaurant.into_detail_dto())))
}

/// Partially update a restaurant.
///
/// Only `name` and `address` are accepted. An explicit `null` address clears it,
/// a missing field is left unchanged.
///
/// # Returns
/// - `200 OK` - Updated restaurant detail view
/// - `400 Bad Request` - Malformed body, unknown field or `null` name
/// - `404 Not Found` - No restaurant with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/restaurants/{id}",
    tag = RESTAURANT_TAG,
    params(
        ("id" = i32, Path, description = "Restaurant ID")
    ),
    request_body = UpdateRestaurantDto,
    responses(
        (status = 200, description = "Successfully updated restaurant", body = RestaurantDto),
        (status = 400, description = "Invalid restaurant data", body = ErrorsDto),
        (status = 404, description = "Restaurant not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_restaurant(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdateRestaurantDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = path?;
    let Json(payload) = payload?;

    let param = UpdateRestaurantParam::from_dto(id, payload);
    let restaurant = RestaurantService::new(&state.db).update(param).await?;

    Ok((StatusCode::OK, Json(restaurant.into_detail_dto())))
}

/// Delete a restaurant and its menu entries.
///
/// # Returns
/// - `204 No Content` - Restaurant deleted
/// - `404 Not Found` - No restaurant with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/restaurants/{id}",
    tag = RESTAURANT_TAG,
    params(
        ("id" = i32, Path, description = "Restaurant ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted restaurant"),
        (status = 404, description = "Restaurant not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_restaurant(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = path?;
    RestaurantService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
