use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        pizza::PizzaRepository, restaurant::RestaurantRepository,
        restaurant_pizza::RestaurantPizzaRepository,
    },
    error::AppError,
    model::restaurant_pizza::{
        validate_price, CreateRestaurantPizzaParam, RestaurantPizzaWithRelations,
        UpdateRestaurantPizzaParam,
    },
    service::{pizza::PIZZA_NOT_FOUND, restaurant::RESTAURANT_NOT_FOUND},
};

const RESTAURANT_PIZZA_NOT_FOUND: &str = "RestaurantPizza not found";

pub struct RestaurantPizzaService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RestaurantPizzaService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all menu entries with both parents
    pub async fn get_all(&self) -> Result<Vec<RestaurantPizzaWithRelations>, AppError> {
        let restaurant_pizzas = RestaurantPizzaRepository::new(self.db)
            .get_all_with_relations()
            .await?;

        Ok(restaurant_pizzas)
    }

    /// Gets a menu entry with both parents
    pub async fn get_by_id(&self, id: i32) -> Result<RestaurantPizzaWithRelations, AppError> {
        RestaurantPizzaRepository::new(self.db)
            .get_with_relations_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(RESTAURANT_PIZZA_NOT_FOUND.to_string()))
    }

    /// Puts a pizza on a restaurant's menu
    ///
    /// The price is validated before the transaction starts, then both references
    /// are checked before the insert.
    pub async fn create(
        &self,
        param: CreateRestaurantPizzaParam,
    ) -> Result<RestaurantPizzaWithRelations, AppError> {
        validate_price(i64::from(param.price))?;

        let txn = self.db.begin().await?;

        ensure_references_exist(&txn, Some(param.restaurant_id), Some(param.pizza_id)).await?;

        let repo = RestaurantPizzaRepository::new(&txn);
        let created = repo.create(param).await?;
        let restaurant_pizza = repo
            .get_with_relations_by_id(created.id)
            .await?
            .ok_or_else(|| {
                AppError::InternalError(format!(
                    "Restaurant pizza {} missing right after insert",
                    created.id
                ))
            })?;

        txn.commit().await?;

        tracing::info!(
            "Added pizza {} to restaurant {} at price {}",
            created.pizza_id,
            created.restaurant_id,
            created.price
        );

        Ok(restaurant_pizza)
    }

    /// Applies a partial update to a menu entry
    ///
    /// A supplied price is validated and supplied references are checked before
    /// anything is written.
    pub async fn update(
        &self,
        param: UpdateRestaurantPizzaParam,
    ) -> Result<RestaurantPizzaWithRelations, AppError> {
        if let Some(price) = param.price {
            validate_price(i64::from(price))?;
        }

        let id = param.id;
        let txn = self.db.begin().await?;
        let repo = RestaurantPizzaRepository::new(&txn);

        if repo.get_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(RESTAURANT_PIZZA_NOT_FOUND.to_string()));
        }

        ensure_references_exist(&txn, param.restaurant_id, param.pizza_id).await?;

        repo.update(param).await?;
        let restaurant_pizza = repo
            .get_with_relations_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(RESTAURANT_PIZZA_NOT_FOUND.to_string()))?;

        txn.commit().await?;

        Ok(restaurant_pizza)
    }

    /// Removes a menu entry
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        if !RestaurantPizzaRepository::new(&txn).delete(id).await? {
            return Err(AppError::NotFound(RESTAURANT_PIZZA_NOT_FOUND.to_string()));
        }

        txn.commit().await?;

        tracing::info!("Deleted restaurant pizza {}", id);

        Ok(())
    }
}

/// Checks the supplied parent references, restaurant first.
async fn ensure_references_exist<C: ConnectionTrait>(
    db: &C,
    restaurant_id: Option<i32>,
    pizza_id: Option<i32>,
) -> Result<(), AppError> {
    if let Some(restaurant_id) = restaurant_id {
        if !RestaurantRepository::new(db).exists(restaurant_id).await? {
            return Err(AppError::NotFound(RESTAURANT_NOT_FOUND.to_string()));
        }
    }

    if let Some(pizza_id) = pizza_id {
        if !PizzaRepository::new(db).exists(pizza_id).await? {
            return Err(AppError::NotFound(PIZZA_NOT_FOUND.to_string()));
        }
    }

    Ok(())
}
