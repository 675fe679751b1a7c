use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};
use std::collections::{HashMap, HashSet};

use crate::server::model::{
    pizza::PizzaParam,
    restaurant::RestaurantParam,
    restaurant_pizza::{
        CreateRestaurantPizzaParam, RestaurantPizzaParam, RestaurantPizzaWithRelations,
        UpdateRestaurantPizzaParam,
    },
};

pub struct RestaurantPizzaRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RestaurantPizzaRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new menu entry
    ///
    /// Both referenced rows must exist; callers check them first so a missing parent
    /// surfaces as "not found" rather than a foreign key failure.
    pub async fn create(
        &self,
        param: CreateRestaurantPizzaParam,
    ) -> Result<RestaurantPizzaParam, DbErr> {
        let restaurant_pizza = entity::restaurant_pizza::ActiveModel {
            price: ActiveValue::Set(param.price),
            restaurant_id: ActiveValue::Set(param.restaurant_id),
            pizza_id: ActiveValue::Set(param.pizza_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(RestaurantPizzaParam::from_entity(restaurant_pizza))
    }

    /// Gets a menu entry by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<RestaurantPizzaParam>, DbErr> {
        let restaurant_pizza = entity::prelude::RestaurantPizza::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(restaurant_pizza.map(RestaurantPizzaParam::from_entity))
    }

    /// Gets a menu entry by ID with its restaurant and pizza
    pub async fn get_with_relations_by_id(
        &self,
        id: i32,
    ) -> Result<Option<RestaurantPizzaWithRelations>, DbErr> {
        let Some((restaurant_pizza, restaurant)) = entity::prelude::RestaurantPizza::find_by_id(id)
            .find_also_related(entity::prelude::Restaurant)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let pizza = entity::prelude::Pizza::find_by_id(restaurant_pizza.pizza_id)
            .one(self.db)
            .await?;

        with_relations(restaurant_pizza, restaurant, pizza).map(Some)
    }

    /// Gets all menu entries ordered by ID, each with its restaurant and pizza
    pub async fn get_all_with_relations(
        &self,
    ) -> Result<Vec<RestaurantPizzaWithRelations>, DbErr> {
        let rows = entity::prelude::RestaurantPizza::find()
            .find_also_related(entity::prelude::Restaurant)
            .order_by_asc(entity::restaurant_pizza::Column::Id)
            .all(self.db)
            .await?;

        let pizza_ids: HashSet<i32> = rows.iter().map(|(rp, _)| rp.pizza_id).collect();
        let pizzas: HashMap<i32, entity::pizza::Model> = entity::prelude::Pizza::find()
            .filter(entity::pizza::Column::Id.is_in(pizza_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|pizza| (pizza.id, pizza))
            .collect();

        rows.into_iter()
            .map(|(restaurant_pizza, restaurant)| {
                let pizza = pizzas.get(&restaurant_pizza.pizza_id).cloned();
                with_relations(restaurant_pizza, restaurant, pizza)
            })
            .collect()
    }

    /// Applies the supplied attributes to a menu entry
    ///
    /// Returns `None` if the menu entry doesn't exist. Price and references are
    /// expected to be checked by the caller.
    pub async fn update(
        &self,
        param: UpdateRestaurantPizzaParam,
    ) -> Result<Option<RestaurantPizzaParam>, DbErr> {
        let Some(restaurant_pizza) = entity::prelude::RestaurantPizza::find_by_id(param.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        if param.is_empty() {
            return Ok(Some(RestaurantPizzaParam::from_entity(restaurant_pizza)));
        }

        let mut active_model: entity::restaurant_pizza::ActiveModel = restaurant_pizza.into();
        if let Some(price) = param.price {
            active_model.price = ActiveValue::Set(price);
        }
        if let Some(restaurant_id) = param.restaurant_id {
            active_model.restaurant_id = ActiveValue::Set(restaurant_id);
        }
        if let Some(pizza_id) = param.pizza_id {
            active_model.pizza_id = ActiveValue::Set(pizza_id);
        }

        let restaurant_pizza = active_model.update(self.db).await?;

        Ok(Some(RestaurantPizzaParam::from_entity(restaurant_pizza)))
    }

    /// Deletes a menu entry
    ///
    /// Returns `false` if no menu entry had that ID.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::RestaurantPizza::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

/// Joins a menu entry with its parents; a missing parent means the row is dangling.
fn with_relations(
    restaurant_pizza: entity::restaurant_pizza::Model,
    restaurant: Option<entity::restaurant::Model>,
    pizza: Option<entity::pizza::Model>,
) -> Result<RestaurantPizzaWithRelations, DbErr> {
    let restaurant = restaurant.ok_or(DbErr::RecordNotFound(format!(
        "Restaurant with id {} referenced by restaurant pizza {} not found",
        restaurant_pizza.restaurant_id, restaurant_pizza.id
    )))?;
    let pizza = pizza.ok_or(DbErr::RecordNotFound(format!(
        "Pizza with id {} referenced by restaurant pizza {} not found",
        restaurant_pizza.pizza_id, restaurant_pizza.id
    )))?;

    Ok(RestaurantPizzaWithRelations {
        restaurant_pizza: RestaurantPizzaParam::from_entity(restaurant_pizza),
        restaurant: RestaurantParam::from_entity(restaurant),
        pizza: PizzaParam::from_entity(pizza),
    })
}
