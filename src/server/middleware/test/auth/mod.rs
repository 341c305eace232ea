use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::{
        auth::{AuthGuard, Credentials, Permission},
        session::AuthSession,
    },
    model::user::{Role, User},
    util::jwt::JwtKeys,
};
use test_utils::{builder::TestBuilder, factory};

mod bearer;
mod permissions;
mod session;

fn keys() -> JwtKeys {
    JwtKeys::new("test-secret", 3600)
}
