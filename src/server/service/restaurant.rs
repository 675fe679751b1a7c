use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::restaurant::RestaurantRepository,
    error::AppError,
    model::restaurant::{CreateRestaurantParam, RestaurantWithPizzas, UpdateRestaurantParam},
};

pub(crate) const RESTAURANT_NOT_FOUND: &str = "Restaurant not found";

pub struct RestaurantService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RestaurantService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all restaurants with their menu entries
    pub async fn get_all(&self) -> Result<Vec<RestaurantWithPizzas>, AppError> {
        let restaurants = RestaurantRepository::new(self.db)
            .get_all_with_pizzas()
            .await?;

        Ok(restaurants)
    }

    /// Gets a restaurant with its menu entries
    pub async fn get_by_id(&self, id: i32) -> Result<RestaurantWithPizzas, AppError> {
        RestaurantRepository::new(self.db)
            .get_with_pizzas_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(RESTAURANT_NOT_FOUND.to_string()))
    }

    /// Creates a restaurant; a new restaurant has an empty menu
    pub async fn create(
        &self,
        param: CreateRestaurantParam,
    ) -> Result<RestaurantWithPizzas, AppError> {
        let txn = self.db.begin().await?;

        let restaurant = RestaurantRepository::new(&txn).create(param).await?;

        txn.commit().await?;

        tracing::info!("Created restaurant {} ({})", restaurant.id, restaurant.name);

        Ok(RestaurantWithPizzas {
            restaurant,
            restaurant_pizzas: Vec::new(),
        })
    }

    /// Applies a partial update and returns the restaurant with its menu entries
    pub async fn update(
        &self,
        param: UpdateRestaurantParam,
    ) -> Result<RestaurantWithPizzas, AppError> {
        let id = param.id;
        let txn = self.db.begin().await?;
        let repo = RestaurantRepository::new(&txn);

        if repo.update(param).await?.is_none() {
            return Err(AppError::NotFound(RESTAURANT_NOT_FOUND.to_string()));
        }

        let restaurant = repo
            .get_with_pizzas_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(RESTAURANT_NOT_FOUND.to_string()))?;

        txn.commit().await?;

        Ok(restaurant)
    }

    /// Deletes a restaurant together with its menu entries
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        if !RestaurantRepository::new(&txn).delete(id).await? {
            return Err(AppError::NotFound(RESTAURANT_NOT_FOUND.to_string()));
        }

        txn.commit().await?;

        tracing::info!("Deleted restaurant {}", id);

        Ok(())
    }
}
