use crate::server::data::exam_result::ExamResultRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_by_offering_ids;
