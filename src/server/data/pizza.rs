use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{
    pizza::{CreatePizzaParam, PizzaParam, PizzaWithRestaurants, UpdatePizzaParam},
    restaurant::RestaurantParam,
    restaurant_pizza::{RestaurantPizzaParam, RestaurantPizzaWithRestaurant},
};

pub struct PizzaRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PizzaRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new pizza
    pub async fn create(&self, param: CreatePizzaParam) -> Result<PizzaParam, DbErr> {
        let pizza = entity::pizza::ActiveModel {
            name: ActiveValue::Set(param.name),
            ingredients: ActiveValue::Set(param.ingredients),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(PizzaParam::from_entity(pizza))
    }

    /// Gets a pizza by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<PizzaParam>, DbErr> {
        let pizza = entity::prelude::Pizza::find_by_id(id).one(self.db).await?;

        Ok(pizza.map(PizzaParam::from_entity))
    }

    /// Gets all pizzas ordered by ID
    pub async fn get_all(&self) -> Result<Vec<PizzaParam>, DbErr> {
        let pizzas = entity::prelude::Pizza::find()
            .order_by_asc(entity::pizza::Column::Id)
            .all(self.db)
            .await?;

        Ok(pizzas.into_iter().map(PizzaParam::from_entity).collect())
    }

    /// Checks whether a pizza with the given ID exists
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Pizza::find()
            .filter(entity::pizza::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets a pizza by ID with its menu entries and the restaurants serving it
    pub async fn get_with_restaurants_by_id(
        &self,
        id: i32,
    ) -> Result<Option<PizzaWithRestaurants>, DbErr> {
        let Some(pizza) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        let rows = entity::prelude::RestaurantPizza::find()
            .filter(entity::restaurant_pizza::Column::PizzaId.eq(id))
            .find_also_related(entity::prelude::Restaurant)
            .order_by_asc(entity::restaurant_pizza::Column::Id)
            .all(self.db)
            .await?;

        let mut restaurant_pizzas = Vec::with_capacity(rows.len());
        for (restaurant_pizza, restaurant) in rows {
            let restaurant = restaurant.ok_or(DbErr::RecordNotFound(format!(
                "Restaurant with id {} referenced by restaurant pizza {} not found",
                restaurant_pizza.restaurant_id, restaurant_pizza.id
            )))?;

            restaurant_pizzas.push(RestaurantPizzaWithRestaurant {
                restaurant_pizza: RestaurantPizzaParam::from_entity(restaurant_pizza),
                restaurant: RestaurantParam::from_entity(restaurant),
            });
        }

        Ok(Some(PizzaWithRestaurants {
            pizza,
            restaurant_pizzas,
        }))
    }

    /// Applies the supplied attributes to a pizza
    ///
    /// Returns `None` if the pizza doesn't exist.
    pub async fn update(&self, param: UpdatePizzaParam) -> Result<Option<PizzaParam>, DbErr> {
        let Some(pizza) = entity::prelude::Pizza::find_by_id(param.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        if param.is_empty() {
            return Ok(Some(PizzaParam::from_entity(pizza)));
        }

        let mut active_model: entity::pizza::ActiveModel = pizza.into();
        if let Some(name) = param.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(ingredients) = param.ingredients {
            active_model.ingredients = ActiveValue::Set(ingredients);
        }

        let pizza = active_model.update(self.db).await?;

        Ok(Some(PizzaParam::from_entity(pizza)))
    }

    /// Deletes a pizza; its menu entries go with it through the cascading foreign key
    ///
    /// Returns `false` if no pizza had that ID.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Pizza::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
