use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::restaurant_pizza::RestaurantPizzaWithRestaurantDto;

/// Detail view of a pizza with the restaurants serving it.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PizzaDto {
    pub id: i32,
    pub name: String,
    pub ingredients: Option<String>,
    pub restaurants: Vec<RestaurantPizzaWithRestaurantDto>,
}

/// Pizza without associations; used for the pizza list and for nesting.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PizzaSummaryDto {
    pub id: i32,
    pub name: String,
    pub ingredients: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreatePizzaDto {
    pub name: String,
    #[serde(default)]
    pub ingredients: Option<String>,
}

/// Partial update; only the listed fields are accepted.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdatePizzaDto {
    /// Required attribute; `null` is rejected.
    #[serde(
        default,
        deserialize_with = "super::deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,
    /// `null` clears the ingredients, omitting the field keeps them.
    #[serde(
        default,
        deserialize_with = "super::deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<String>)]
    pub ingredients: Option<Option<String>>,
}
