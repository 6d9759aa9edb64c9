use super::*;
use crate::{
    model::auth::{AdminLoginDto, StudentLoginDto, TeacherLoginDto},
    server::{
        controller::auth::{admin_login, get_session, logout, student_login, teacher_login},
        error::AppError,
    },
};
use test_utils::{builder::TestBuilder, factory};

mod session;
