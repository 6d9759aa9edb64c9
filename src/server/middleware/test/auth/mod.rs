use chrono::{Duration, Utc};
use serde_json::json;

use crate::{
    model::auth::Role,
    server::{
        error::{auth::AuthError, AppError},
        middleware::{auth::AuthGuard, session::AuthSession},
    },
};
use test_utils::builder::TestBuilder;
