use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{pizza::PizzaSummaryDto, restaurant::RestaurantSummaryDto};

/// Flat view of a menu entry with both parents summarized.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RestaurantPizzaDto {
    pub id: i32,
    pub price: i32,
    pub restaurant_id: i32,
    pub pizza_id: i32,
    pub restaurant: RestaurantSummaryDto,
    pub pizza: PizzaSummaryDto,
}

/// Menu entry as listed under a restaurant.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RestaurantPizzaWithPizzaDto {
    pub id: i32,
    pub price: i32,
    pub restaurant_id: i32,
    pub pizza_id: i32,
    pub pizza: PizzaSummaryDto,
}

/// Menu entry as listed under a pizza.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RestaurantPizzaWithRestaurantDto {
    pub id: i32,
    pub price: i32,
    pub restaurant_id: i32,
    pub pizza_id: i32,
    pub restaurant: RestaurantSummaryDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateRestaurantPizzaDto {
    /// Wider than the stored column so oversized values reach range validation.
    pub price: i64,
    pub restaurant_id: i32,
    pub pizza_id: i32,
}

/// Partial update; only the listed fields are accepted.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateRestaurantPizzaDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restaurant_id: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pizza_id: Option<i32>,
}
