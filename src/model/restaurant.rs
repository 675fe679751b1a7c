use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::restaurant_pizza::RestaurantPizzaWithPizzaDto;

/// Detail view of a restaurant with its menu entries.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RestaurantDto {
    pub id: i32,
    pub name: String,
    pub address: Option<String>,
    pub restaurant_pizzas: Vec<RestaurantPizzaWithPizzaDto>,
}

/// Restaurant rendered inside another entity's view, without associations.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RestaurantSummaryDto {
    pub id: i32,
    pub name: String,
    pub address: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateRestaurantDto {
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
}

/// Partial update; only the listed fields are accepted.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateRestaurantDto {
    /// Required attribute; `null` is rejected.
    #[serde(
        default,
        deserialize_with = "super::deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,
    /// `null` clears the address, omitting the field keeps it.
    #[serde(
        default,
        deserialize_with = "super::deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<String>)]
    pub address: Option<Option<String>>,
}
