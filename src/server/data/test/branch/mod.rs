use crate::server::data::branch::BranchRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_by_code;
mod get_by_codes;
