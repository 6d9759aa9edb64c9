use crate::{
    model::search::ResultSort,
    server::{error::AppError, service::teacher::TeacherService},
};
use test_utils::{builder::TestBuilder, factory};

mod get_dashboard;
