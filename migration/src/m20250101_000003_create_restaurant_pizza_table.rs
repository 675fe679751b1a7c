use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250101_000001_create_restaurant_table::Restaurant,
    m20250101_000002_create_pizza_table::Pizza,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RestaurantPizza::Table)
                    .if_not_exists()
                    .col(pk_auto(RestaurantPizza::Id))
                    .col(integer(RestaurantPizza::Price))
                    .col(integer(RestaurantPizza::RestaurantId))
                    .col(integer(RestaurantPizza::PizzaId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_restaurant_pizzas_restaurant_id_restaurants")
                            .from(RestaurantPizza::Table, RestaurantPizza::RestaurantId)
                            .to(Restaurant::Table, Restaurant::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_restaurant_pizzas_pizza_id_pizzas")
                            .from(RestaurantPizza::Table, RestaurantPizza::PizzaId)
                            .to(Pizza::Table, Pizza::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RestaurantPizza::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RestaurantPizza {
    #[sea_orm(iden = "restaurant_pizzas")]
    Table,
    Id,
    Price,
    RestaurantId,
    PizzaId,
}
