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
        restaurant_pizza::{
            CreateRestaurantPizzaDto, RestaurantPizzaDto, UpdateRestaurantPizzaDto,
        },
    },
    server::{
        error::AppError,
        model::restaurant_pizza::{
            CreateRestaurantPizzaParam, RestaurantPizzaWithRelations, UpdateRestaurantPizzaParam,
        },
        service::restaurant_pizza::RestaurantPizzaService,
        state::AppState,
    },
};

/// Tag for grouping restaurant pizza endpoints in OpenAPI documentation
pub static RESTAURANT_PIZZA_TAG: &str = "restaurant_pizza";

/// List all menu entries with both parents.
///
/// # Returns
/// - `200 OK` - Menu entries ordered by ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/restaurant_pizzas",
    tag = RESTAURANT_PIZZA_TAG,
    responses(
        (status = 200, description = "Successfully retrieved restaurant pizzas", body = Vec<RestaurantPizzaDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_restaurant_pizzas(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let restaurant_pizzas = RestaurantPizzaService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(RestaurantPizzaWithRelations::into_list_dto(restaurant_pizzas)),
    ))
}

/// Put a pizza on a restaurant's menu.
///
/// The price must be between 1 and 30 inclusive. It is checked before the
/// references, so an out-of-range price is reported even when a parent is missing.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Price plus the restaurant and pizza IDs
///
/// # Returns
/// - `201 Created` - The new menu entry with both parents
/// - `400 Bad Request` - Price out of range or malformed body
/// - `404 Not Found` - Restaurant or pizza doesn't exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/restaurant_pizzas",
    tag = RESTAURANT_PIZZA_TAG,
    request_body = CreateRestaurantPizzaDto,
    responses(
        (status = 201, description = "Successfully created restaurant pizza", body = RestaurantPizzaDto),
        (status = 400, description = "Invalid restaurant pizza data", body = ErrorsDto),
        (status = 404, description = "Restaurant or pizza not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_restaurant_pizza(
    State(state): State<AppState>,
    payload: Result<Json<CreateRestaurantPizzaDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let param = CreateRestaurantPizzaParam::from_dto(payload)?;
    let restaurant_pizza = RestaurantPizzaService::new(&state.db)
        .create(param)
        .await?;

    Ok((StatusCode::CREATED, Json(restaurant_pizza.into_dto())))
}

/// Get a menu entry with both parents.
#[utoipa::path(
    get,
    path = "/restaurant_pizzas/{id}",
    tag = RESTAURANT_PIZZA_TAG,
    params(
        ("id" = i32, Path, description = "Restaurant pizza ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved restaurant pizza", body = RestaurantPizzaDto),
        (status = 404, description = "Restaurant pizza not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_restaurant_pizza(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = path?;
    let restaurant_pizza = RestaurantPizzaService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(restaurant_pizza.into_dto())))
}

/// Partially update a menu entry.
#[utoipa::path(
    patch,
    path = "/restaurant_pizzas/{id}",
    tag = RESTAURANT_PIZZA_TAG,
    params(
        ("id" = i32, Path, description = "Restaurant pizza ID")
    ),
    request_body = UpdateRestaurantPizzaDto,
    responses(
        (status = 200, description = "Successfully updated restaurant pizza", body = RestaurantPizzaDto),
        (status = 400, description = "Invalid restaurant pizza data", body = ErrorsDto),
        (status = 404, description = "Restaurant pizza, restaurant or pizza not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_restaurant_pizza(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdateRestaurantPizzaDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = path?;
    let Json(payload) = payload?;

    let param = UpdateRestaurantPizzaParam::from_dto(id, payload)?;
    let restaurant_pizza = RestaurantPizzaService::new(&state.db)
        .update(param)
        .await?;

    Ok((StatusCode::OK, Json(restaurant_pizza.into_dto())))
}

/// Remove a menu entry.
#[utoipa::path(
    delete,
    path = "/restaurant_pizzas/{id}",
    tag = RESTAURANT_PIZZA_TAG,
    params(
        ("id" = i32, Path, description = "Restaurant pizza ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted restaurant pizza"),
        (status = 404, description = "Restaurant pizza not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_restaurant_pizza(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = path?;
    RestaurantPizzaService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
