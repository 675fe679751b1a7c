//! Parameter models for restaurant data operations.

use crate::{
    model::restaurant::{
        CreateRestaurantDto, RestaurantDto, RestaurantSummaryDto, UpdateRestaurantDto,
    },
    server::model::restaurant_pizza::RestaurantPizzaWithPizza,
};

/// Represents a restaurant row.
#[derive(Debug, Clone, PartialEq)]
pub struct RestaurantParam {
    /// Unique identifier for the restaurant.
    pub id: i32,
    /// Display name; may be empty.
    pub name: String,
    /// Optional street address.
    pub address: Option<String>,
}

impl RestaurantParam {
    /// Converts an entity model to a restaurant param.
    ///
    /// This conversion happens at the data layer boundary to ensure entity models
    /// never leak into service or controller layers.
    pub fn from_entity(entity: entity::restaurant::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            address: entity.address,
        }
    }

    /// Projects the restaurant without any associations.
    ///
    /// This is the only shape a restaurant takes when nested under another entity.
    pub fn into_summary_dto(self) -> RestaurantSummaryDto {
        RestaurantSummaryDto {
            id: self.id,
            name: self.name,
            address: self.address,
        }
    }
}

/// A restaurant together with its menu entries and their pizzas.
#[derive(Debug, Clone, PartialEq)]
pub struct RestaurantWithPizzas {
    pub restaurant: RestaurantParam,
    pub restaurant_pizzas: Vec<RestaurantPizzaWithPizza>,
}

impl RestaurantWithPizzas {
    /// Projects the detail view.
    ///
    /// Each menu entry carries its pizza as a summary, so the nested pizza never
    /// lists restaurants again.
    pub fn into_detail_dto(self) -> RestaurantDto {
        RestaurantDto {
            id: self.restaurant.id,
            name: self.restaurant.name,
            address: self.restaurant.address,
            restaurant_pizzas: self
                .restaurant_pizzas
                .into_iter()
                .map(RestaurantPizzaWithPizza::into_dto)
                .collect(),
        }
    }

    /// Projects the restaurant list view, which renders each restaurant in detail.
    pub fn into_list_dto(restaurants: Vec<Self>) -> Vec<RestaurantDto> {
        restaurants
            .into_iter()
            .map(Self::into_detail_dto)
            .collect()
    }
}

/// Parameters for creating a new restaurant.
#[derive(Debug, Clone)]
pub struct CreateRestaurantParam {
    pub name: String,
    pub address: Option<String>,
}

impl CreateRestaurantParam {
    pub fn from_dto(dto: CreateRestaurantDto) -> Self {
        Self {
            name: dto.name,
            address: dto.address,
        }
    }
}

/// Parameters for a partial restaurant update.
///
/// `None` leaves an attribute unchanged; `address: Some(None)` clears the address.
#[derive(Debug, Clone, Default)]
pub struct UpdateRestaurantParam {
    /// ID of the restaurant to update.
    pub id: i32,
    pub name: Option<String>,
    pub address: Option<Option<String>>,
}

impl UpdateRestaurantParam {
    pub fn from_dto(id: i32, dto: UpdateRestaurantDto) -> Self {
        Self {
            id,
            name: dto.name,
            address: dto.address,
        }
    }

    /// Whether the update carries no attribute at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.address.is_none()
    }
}
