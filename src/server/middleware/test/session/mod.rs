use serde_json::json;

use crate::{
    model::auth::Role,
    server::{
        error::{auth::AuthError, AppError},
        middleware::session::AuthSession,
    },
};
use test_utils::builder::TestBuilder;

mod identity;
