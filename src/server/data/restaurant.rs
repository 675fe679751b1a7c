use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use std::collections::HashMap;

use crate::server::model::{
    pizza::PizzaParam,
    restaurant::{CreateRestaurantParam, RestaurantParam, RestaurantWithPizzas, UpdateRestaurantParam},
    restaurant_pizza::{RestaurantPizzaParam, RestaurantPizzaWithPizza},
};

pub struct RestaurantRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RestaurantRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new restaurant
    pub async fn create(&self, param: CreateRestaurantParam) -> Result<RestaurantParam, DbErr> {
        let restaurant = entity::restaurant::ActiveModel {
            name: ActiveValue::Set(param.name),
            address: ActiveValue::Set(param.address),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(RestaurantParam::from_entity(restaurant))
    }

    /// Gets a restaurant by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<RestaurantParam>, DbErr> {
        let restaurant = entity::prelude::Restaurant::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(restaurant.map(RestaurantParam::from_entity))
    }

    /// Gets all restaurants ordered by ID
    pub async fn get_all(&self) -> Result<Vec<RestaurantParam>, DbErr> {
        let restaurants = entity::prelude::Restaurant::find()
            .order_by_asc(entity::restaurant::Column::Id)
            .all(self.db)
            .await?;

        Ok(restaurants
            .into_iter()
            .map(RestaurantParam::from_entity)
            .collect())
    }

    /// Checks whether a restaurant with the given ID exists
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Restaurant::find()
            .filter(entity::restaurant::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets a restaurant by ID with its menu entries and their pizzas
    pub async fn get_with_pizzas_by_id(
        &self,
        id: i32,
    ) -> Result<Option<RestaurantWithPizzas>, DbErr> {
        let Some(restaurant) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        let rows = entity::prelude::RestaurantPizza::find()
            .filter(entity::restaurant_pizza::Column::RestaurantId.eq(id))
            .find_also_related(entity::prelude::Pizza)
            .order_by_asc(entity::restaurant_pizza::Column::Id)
            .all(self.db)
            .await?;

        let restaurant_pizzas = rows
            .into_iter()
            .map(with_pizza)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Some(RestaurantWithPizzas {
            restaurant,
            restaurant_pizzas,
        }))
    }

    /// Gets all restaurants ordered by ID, each with its menu entries and their pizzas
    pub async fn get_all_with_pizzas(&self) -> Result<Vec<RestaurantWithPizzas>, DbErr> {
        let restaurants = self.get_all().await?;

        let rows = entity::prelude::RestaurantPizza::find()
            .find_also_related(entity::prelude::Pizza)
            .order_by_asc(entity::restaurant_pizza::Column::Id)
            .all(self.db)
            .await?;

        let mut by_restaurant: HashMap<i32, Vec<RestaurantPizzaWithPizza>> = HashMap::new();
        for row in rows {
            let entry = with_pizza(row)?;
            by_restaurant
                .entry(entry.restaurant_pizza.restaurant_id)
                .or_default()
                .push(entry);
        }

        Ok(restaurants
            .into_iter()
            .map(|restaurant| RestaurantWithPizzas {
                restaurant_pizzas: by_restaurant.remove(&restaurant.id).unwrap_or_default(),
                restaurant,
            })
            .collect())
    }

    /// Applies the supplied attributes to a restaurant
    ///
    /// Returns `None` if the restaurant doesn't exist.
    pub async fn update(
        &self,
        param: UpdateRestaurantParam,
    ) -> Result<Option<RestaurantParam>, DbErr> {
        let Some(restaurant) = entity::prelude::Restaurant::find_by_id(param.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        if param.is_empty() {
            return Ok(Some(RestaurantParam::from_entity(restaurant)));
        }

        let mut active_model: entity::restaurant::ActiveModel = restaurant.into();
        if let Some(name) = param.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(address) = param.address {
            active_model.address = ActiveValue::Set(address);
        }

        let restaurant = active_model.update(self.db).await?;

        Ok(Some(RestaurantParam::from_entity(restaurant)))
    }

    /// Deletes a restaurant; its menu entries go with it through the cascading foreign key
    ///
    /// Returns `false` if no restaurant had that ID.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Restaurant::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

fn with_pizza(
    (restaurant_pizza, pizza): (
        entity::restaurant_pizza::Model,
        Option<entity::pizza::Model>,
    ),
) -> Result<RestaurantPizzaWithPizza, DbErr> {
    let pizza = pizza.ok_or(DbErr::RecordNotFound(format!(
        "Pizza with id {} referenced by restaurant pizza {} not found",
        restaurant_pizza.pizza_id, restaurant_pizza.id
    )))?;

    Ok(RestaurantPizzaWithPizza {
        restaurant_pizza: RestaurantPizzaParam::from_entity(restaurant_pizza),
        pizza: PizzaParam::from_entity(pizza),
    })
}
