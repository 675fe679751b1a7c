use axum::{routing::get, Router};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{index, pizza, restaurant, restaurant_pizza},
    state::AppState,
};

/// OpenAPI document for every catalog endpoint
#[derive(OpenApi)]
#[openapi(
    info(title = "Pizzeria API", description = "Restaurants, pizzas and the menus joining them"),
    paths(
        index::index,
        restaurant::get_restaurants,
        restaurant::create_restaurant,
        restaurant::get_restaurant,
        restaurant::update_restaurant,
        restaurant::delete_restaurant,
        pizza::get_pizzas,
        pizza::create_pizza,
        pizza::get_pizza,
        pizza::update_pizza,
        pizza::delete_pizza,
        restaurant_pizza::get_restaurant_pizzas,
        restaurant_pizza::create_restaurant_pizza,
        restaurant_pizza::get_restaurant_pizza,
        restaurant_pizza::update_restaurant_pizza,
        restaurant_pizza::delete_restaurant_pizza,
    ),
    tags(
        (name = "index", description = "Landing page"),
        (name = "restaurant", description = "Restaurants and their menus"),
        (name = "pizza", description = "Pizzas and where they are served"),
        (name = "restaurant_pizza", description = "Menu entries pricing a pizza at a restaurant"),
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index::index))
        .route(
            "/restaurants",
            get(restaurant::get_restaurants).post(restaurant::create_restaurant),
        )
        .route(
            "/restaurants/{id}",
            get(restaurant::get_restaurant)
                .patch(restaurant::update_restaurant)
                .delete(restaurant::delete_restaurant),
        )
        .route("/pizzas", get(pizza::get_pizzas).post(pizza::create_pizza))
        .route(
            "/pizzas/{id}",
            get(pizza::get_pizza)
                .patch(pizza::update_pizza)
                .delete(pizza::delete_pizza),
        )
        .route(
            "/restaurant_pizzas",
            get(restaurant_pizza::get_restaurant_pizzas)
                .post(restaurant_pizza::create_restaurant_pizza),
        )
        .route(
            "/restaurant_pizzas/{id}",
            get(restaurant_pizza::get_restaurant_pizza)
                .patch(restaurant_pizza::update_restaurant_pizza)
                .delete(restaurant_pizza::delete_restaurant_pizza),
        )
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", ApiDoc::openapi()))
}
