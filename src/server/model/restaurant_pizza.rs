//! Parameter models and price validation for restaurant pizza operations.

use crate::{
    model::restaurant_pizza::{
        CreateRestaurantPizzaDto, RestaurantPizzaDto, RestaurantPizzaWithPizzaDto,
        RestaurantPizzaWithRestaurantDto, UpdateRestaurantPizzaDto,
    },
    server::{
        error::validation::ValidationError,
        model::{pizza::PizzaParam, restaurant::RestaurantParam},
    },
};

/// Lowest price a restaurant may charge for a pizza.
pub const MIN_PRICE: i32 = 1;

/// Highest price a restaurant may charge for a pizza.
pub const MAX_PRICE: i32 = 30;

/// Checks that a menu price lies within `MIN_PRICE..=MAX_PRICE`.
///
/// Takes the price as sent by the client, so values past the `i32` range get the
/// same rejection as any other out-of-range price.
///
/// # Returns
/// - `Ok(price)` - The price is accepted, narrowed to the column type
/// - `Err(ValidationError::PriceOutOfRange)` - The price is outside the accepted range
pub fn validate_price(price: i64) -> Result<i32, ValidationError> {
    match i32::try_from(price) {
        Ok(price) if (MIN_PRICE..=MAX_PRICE).contains(&price) => Ok(price),
        _ => Err(ValidationError::PriceOutOfRange {
            price,
            min: MIN_PRICE,
            max: MAX_PRICE,
        }),
    }
}

/// Represents a restaurant pizza row.
#[derive(Debug, Clone, PartialEq)]
pub struct RestaurantPizzaParam {
    pub id: i32,
    pub price: i32,
    pub restaurant_id: i32,
    pub pizza_id: i32,
}

impl RestaurantPizzaParam {
    /// Converts an entity model to a restaurant pizza param.
    pub fn from_entity(entity: entity::restaurant_pizza::Model) -> Self {
        Self {
            id: entity.id,
            price: entity.price,
            restaurant_id: entity.restaurant_id,
            pizza_id: entity.pizza_id,
        }
    }
}

/// A menu entry joined with its pizza, as seen from a restaurant.
#[derive(Debug, Clone, PartialEq)]
pub struct RestaurantPizzaWithPizza {
    pub restaurant_pizza: RestaurantPizzaParam,
    pub pizza: PizzaParam,
}

impl RestaurantPizzaWithPizza {
    pub fn into_dto(self) -> RestaurantPizzaWithPizzaDto {
        RestaurantPizzaWithPizzaDto {
            id: self.restaurant_pizza.id,
            price: self.restaurant_pizza.price,
            restaurant_id: self.restaurant_pizza.restaurant_id,
            pizza_id: self.restaurant_pizza.pizza_id,
            pizza: self.pizza.into_summary_dto(),
        }
    }
}

/// A menu entry joined with its restaurant, as seen from a pizza.
#[derive(Debug, Clone, PartialEq)]
pub struct RestaurantPizzaWithRestaurant {
    pub restaurant_pizza: RestaurantPizzaParam,
    pub restaurant: RestaurantParam,
}

impl RestaurantPizzaWithRestaurant {
    pub fn into_dto(self) -> RestaurantPizzaWithRestaurantDto {
        RestaurantPizzaWithRestaurantDto {
            id: self.restaurant_pizza.id,
            price: self.restaurant_pizza.price,
            restaurant_id: self.restaurant_pizza.restaurant_id,
            pizza_id: self.restaurant_pizza.pizza_id,
            restaurant: self.restaurant.into_summary_dto(),
        }
    }
}

/// A menu entry joined with both parents.
#[derive(Debug, Clone, PartialEq)]
pub struct RestaurantPizzaWithRelations {
    pub restaurant_pizza: RestaurantPizzaParam,
    pub restaurant: RestaurantParam,
    pub pizza: PizzaParam,
}

impl RestaurantPizzaWithRelations {
    /// Projects the flat view: both parents as summaries, nothing nested deeper.
    pub fn into_dto(self) -> RestaurantPizzaDto {
        RestaurantPizzaDto {
            id: self.restaurant_pizza.id,
            price: self.restaurant_pizza.price,
            restaurant_id: self.restaurant_pizza.restaurant_id,
            pizza_id: self.restaurant_pizza.pizza_id,
            restaurant: self.restaurant.into_summary_dto(),
            pizza: self.pizza.into_summary_dto(),
        }
    }

    pub fn into_list_dto(restaurant_pizzas: Vec<Self>) -> Vec<RestaurantPizzaDto> {
        restaurant_pizzas.into_iter().map(Self::into_dto).collect()
    }
}

/// Parameters for creating a new menu entry.
#[derive(Debug, Clone)]
pub struct CreateRestaurantPizzaParam {
    pub price: i32,
    pub restaurant_id: i32,
    pub pizza_id: i32,
}

impl CreateRestaurantPizzaParam {
    /// Fails when the price is out of range, before any reference is looked at.
    pub fn from_dto(dto: CreateRestaurantPizzaDto) -> Result<Self, ValidationError> {
        Ok(Self {
            price: validate_price(dto.price)?,
            restaurant_id: dto.restaurant_id,
            pizza_id: dto.pizza_id,
        })
    }
}

/// Parameters for a partial menu entry update. `None` leaves an attribute unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateRestaurantPizzaParam {
    /// ID of the menu entry to update.
    pub id: i32,
    pub price: Option<i32>,
    pub restaurant_id: Option<i32>,
    pub pizza_id: Option<i32>,
}

impl UpdateRestaurantPizzaParam {
    pub fn from_dto(id: i32, dto: UpdateRestaurantPizzaDto) -> Result<Self, ValidationError> {
        Ok(Self {
            id,
            price: dto.price.map(validate_price).transpose()?,
            restaurant_id: dto.restaurant_id,
            pizza_id: dto.pizza_id,
        })
    }

    /// Whether the update carries no attribute at all.
    pub fn is_empty(&self) -> bool {
        self.price.is_none() && self.restaurant_id.is_none() && self.pizza_id.is_none()
    }
}
