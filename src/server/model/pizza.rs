//! Parameter models for pizza data operations.

use crate::{
    model::pizza::{CreatePizzaDto, PizzaDto, PizzaSummaryDto, UpdatePizzaDto},
    server::model::restaurant_pizza::RestaurantPizzaWithRestaurant,
};

/// Represents a pizza row.
#[derive(Debug, Clone, PartialEq)]
pub struct PizzaParam {
    /// Unique identifier for the pizza.
    pub id: i32,
    /// Display name; may be empty.
    pub name: String,
    /// Free-form ingredients description.
    pub ingredients: Option<String>,
}

impl PizzaParam {
    /// Converts an entity model to a pizza param.
    pub fn from_entity(entity: entity::pizza::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            ingredients: entity.ingredients,
        }
    }

    /// Projects the pizza without any associations.
    pub fn into_summary_dto(self) -> PizzaSummaryDto {
        PizzaSummaryDto {
            id: self.id,
            name: self.name,
            ingredients: self.ingredients,
        }
    }

    /// Projects the pizza list view; associations are omitted entirely.
    pub fn into_list_dto(pizzas: Vec<Self>) -> Vec<PizzaSummaryDto> {
        pizzas.into_iter().map(Self::into_summary_dto).collect()
    }
}

/// A pizza together with its menu entries and the restaurants serving it.
#[derive(Debug, Clone, PartialEq)]
pub struct PizzaWithRestaurants {
    pub pizza: PizzaParam,
    pub restaurant_pizzas: Vec<RestaurantPizzaWithRestaurant>,
}

impl PizzaWithRestaurants {
    /// Projects the detail view.
    ///
    /// Each menu entry carries its restaurant as a summary, so the nested restaurant
    /// never lists pizzas again.
    pub fn into_detail_dto(self) -> PizzaDto {
        PizzaDto {
            id: self.pizza.id,
            name: self.pizza.name,
            ingredients: self.pizza.ingredients,
            restaurants: self
                .restaurant_pizzas
                .into_iter()
                .map(RestaurantPizzaWithRestaurant::into_dto)
                .collect(),
        }
    }
}

/// Parameters for creating a new pizza.
#[derive(Debug, Clone)]
pub struct CreatePizzaParam {
    pub name: String,
    pub ingredients: Option<String>,
}

impl CreatePizzaParam {
    pub fn from_dto(dto: CreatePizzaDto) -> Self {
        Self {
            name: dto.name,
            ingredients: dto.ingredients,
        }
    }
}

/// Parameters for a partial pizza update.
///
/// `None` leaves an attribute unchanged; `ingredients: Some(None)` clears the ingredients.
#[derive(Debug, Clone, Default)]
pub struct UpdatePizzaParam {
    /// ID of the pizza to update.
    pub id: i32,
    pub name: Option<String>,
    pub ingredients: Option<Option<String>>,
}

impl UpdatePizzaParam {
    pub fn from_dto(id: i32, dto: UpdatePizzaDto) -> Self {
        Self {
            id,
            name: dto.name,
            ingredients: dto.ingredients,
        }
    }

    /// Whether the update carries no attribute at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.ingredients.is_none()
    }
}
