use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::pizza::PizzaRepository,
    error::AppError,
    model::pizza::{CreatePizzaParam, PizzaParam, PizzaWithRestaurants, UpdatePizzaParam},
};

pub(crate) const PIZZA_NOT_FOUND: &str = "Pizza not found";

pub struct PizzaService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PizzaService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all pizzas without their menu entries
    pub async fn get_all(&self) -> Result<Vec<PizzaParam>, AppError> {
        let pizzas = PizzaRepository::new(self.db).get_all().await?;

        Ok(pizzas)
    }

    /// Gets a pizza with the restaurants serving it
    pub async fn get_by_id(&self, id: i32) -> Result<PizzaWithRestaurants, AppError> {
        PizzaRepository::new(self.db)
            .get_with_restaurants_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(PIZZA_NOT_FOUND.to_string()))
    }

    /// Creates a pizza; a new pizza is not served anywhere yet
    pub async fn create(&self, param: CreatePizzaParam) -> Result<PizzaWithRestaurants, AppError> {
        let txn = self.db.begin().await?;

        let pizza = PizzaRepository::new(&txn).create(param).await?;

        txn.commit().await?;

        tracing::info!("Created pizza {} ({})", pizza.id, pizza.name);

        Ok(PizzaWithRestaurants {
            pizza,
            restaurant_pizzas: Vec::new(),
        })
    }

    /// Applies a partial update and returns the pizza with the restaurants serving it
    pub async fn update(&self, param: UpdatePizzaParam) -> Result<PizzaWithRestaurants, AppError> {
        let id = param.id;
        let txn = self.db.begin().await?;
        let repo = PizzaRepository::new(&txn);

        if repo.update(param).await?.is_none() {
            return Err(AppError::NotFound(PIZZA_NOT_FOUND.to_string()));
        }

        let pizza = repo
            .get_with_restaurants_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(PIZZA_NOT_FOUND.to_string()))?;

        txn.commit().await?;

        Ok(pizza)
    }

    /// Deletes a pizza together with its menu entries
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        if !PizzaRepository::new(&txn).delete(id).await? {
            return Err(AppError::NotFound(PIZZA_NOT_FOUND.to_string()));
        }

        txn.commit().await?;

        tracing::info!("Deleted pizza {}", id);

        Ok(())
    }
}
