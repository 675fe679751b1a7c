use crate::server::{
    data::restaurant_pizza::RestaurantPizzaRepository,
    model::restaurant_pizza::{CreateRestaurantPizzaParam, UpdateRestaurantPizzaParam},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all;
mod get_by_id;
mod update;
