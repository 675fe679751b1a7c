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
        pizza::{CreatePizzaDto, PizzaDto, PizzaSummaryDto, UpdatePizzaDto},
    },
    server::{
        error::AppError,
        model::pizza::{CreatePizzaParam, PizzaParam, UpdatePizzaParam},
        service::pizza::PizzaService,
        state::AppState,
    },
};

/// Tag for grouping pizza endpoints in OpenAPI documentation
pub static PIZZA_TAG: &str = "pizza";

/// List all pizzas without the restaurants serving them.
#[utoipa::path(
    get,
    path = "/pizzas",
    tag = PIZZA_TAG,
    responses(
        (status = 200, description = "Successfully retrieved pizzas", body = Vec<PizzaSummaryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_pizzas(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let pizzas = PizzaService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(PizzaParam::into_list_dto(pizzas))))
}

/// Create a new pizza.
#[utoipa::path(
    post,
    path = "/pizzas",
    tag = PIZZA_TAG,
    request_body = CreatePizzaDto,
    responses(
        (status = 201, description = "Successfully created pizza", body = PizzaDto),
        (status = 400, description = "Invalid pizza data", body = ErrorsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_pizza(
    State(state): State<AppState>,
    payload: Result<Json<CreatePizzaDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let param = CreatePizzaParam::from_dto(payload);
    let pizza = PizzaService::new(&state.db).create(param).await?;

    Ok((StatusCode::CREATED, Json(pizza.into_detail_dto())))
}

/// Get a pizza with the restaurants serving it.
#[utoipa::path(
    get,
    path = "/pizzas/{id}",
    tag = PIZZA_TAG,
    params(
        ("id" = i32, Path, description = "Pizza ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved pizza", body = PizzaDto),
        (status = 404, description = "Pizza not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_pizza(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = path?;
    let pizza = PizzaService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(pizza.into_detail_dto())))
}

/// Partially update a pizza.
///
/// Only `name` and `ingredients` are accepted; `null` ingredients clears them.
#[utoipa::path(
    patch,
    path = "/pizzas/{id}",
    tag = PIZZA_TAG,
    params(
        ("id" = i32, Path, description = "Pizza ID")
    ),
    request_body = UpdatePizzaDto,
    responses(
        (status = 200, description = "Successfully updated pizza", body = PizzaDto),
        (status = 400, description = "Invalid pizza data", body = ErrorsDto),
        (status = 404, description = "Pizza not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_pizza(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdatePizzaDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = path?;
    let Json(payload) = payload?;

    let param = UpdatePizzaParam::from_dto(id, payload);
    let pizza = PizzaService::new(&state.db).update(param).await?;

    Ok((StatusCode::OK, Json(pizza.into_detail_dto())))
}

/// Delete a pizza and every menu entry serving it.
#[utoipa::path(
    delete,
    path = "/pizzas/{id}",
    tag = PIZZA_TAG,
    params(
        ("id" = i32, Path, description = "Pizza ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted pizza"),
        (status = 404, description = "Pizza not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_pizza(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = path?;
    PizzaService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
