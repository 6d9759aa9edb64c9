use crate::{
    model::search::ResultFilter,
    server::{error::AppError, model::search::filter_results, service::admin::AdminService},
};
use test_utils::{builder::TestBuilder, factory};
