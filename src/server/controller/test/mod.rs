use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;
use tower_sessions::Session;

use crate::{
    model::{
        api::BulkResultDto,
        auth::{LoginDto, LoginResponseDto},
        category::{CreateOuCategoryDto, OuCategoryDto},
        dashboard::DashboardFilterDto,
        dora::{DeploymentFrequencyRequestDto, DoraRequestDto, IntervalDto, TimeRangeDto},
        org_unit::CreateOrgUnitDto,
        user::UserDto,
    },
    server::{
        controller::{auth, category, dashboard, dora, org_unit},
        error::AppError,
        middleware::{auth::Credentials, session::AuthSession},
        model::user::User,
        state::AppState,
        util::jwt::JwtKeys,
    },
};
use test_utils::{
    builder::TestBuilder,
    factory::{
        self,
        dashboard::DashboardFactory,
        user::{UserFactory, DEFAULT_PASSWORD},
    },
};

mod auth_flow;
mod dashboard_visibility;
mod org_unit_bulk;

fn state(db: &sea_orm::DatabaseConnection) -> AppState {
    AppState::new(db.clone(), JwtKeys::new("controller-test-secret", 3600))
}

/// Credentials carrying a freshly issued bearer token for `user`.
fn bearer(state: &AppState, session: &Session, user: &entity::user::Model) -> Credentials {
    let user = User::from_entity(user.clone()).unwrap();

    Credentials {
        session: session.clone(),
        bearer: Some(state.jwt.issue(&user).unwrap()),
    }
}

fn anonymous(session: &Session) -> Credentials {
    Credentials {
        session: session.clone(),
        bearer: None,
    }
}

async fn body<T: DeserializeOwned>(response: Response) -> T {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn unit(name: &str) -> CreateOrgUnitDto {
    CreateOrgUnitDto {
        name: name.to_string(),
        description: None,
        parent_ref_id: None,
        tag_ids: Vec::new(),
        ou_category_id: None,
        default_dashboard_id: None,
        managers: Vec::new(),
        sections: Vec::new(),
    }
}
