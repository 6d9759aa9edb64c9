use crate::server::data::student::StudentRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_by_roll_no;
mod get_by_roll_nos_with_branch;
