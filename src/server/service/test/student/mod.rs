use crate::server::{error::AppError, service::student::StudentService};
use test_utils::{builder::TestBuilder, factory};

mod get_profile;
