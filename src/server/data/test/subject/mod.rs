use crate::server::data::subject::SubjectRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
