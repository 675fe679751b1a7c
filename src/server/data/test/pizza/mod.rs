use crate::server::{
    data::pizza::PizzaRepository,
    model::pizza::{CreatePizzaParam, UpdatePizzaParam},
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all;
mod get_by_id;
mod update;
