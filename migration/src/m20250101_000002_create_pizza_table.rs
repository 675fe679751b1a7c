use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Pizza::Table)
                    .if_not_exists()
                    .col(pk_auto(Pizza::Id))
                    .col(string(Pizza::Name))
                    .col(string_null(Pizza::Ingredients))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Pizza::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Pizza {
    #[sea_orm(iden = "pizzas")]
    Table,
    Id,
    Name,
    Ingredients,
}
