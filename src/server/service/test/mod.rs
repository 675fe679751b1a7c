use crate::server::error::AppError;
use test_utils::{builder::TestBuilder, factory};
