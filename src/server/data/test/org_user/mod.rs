use crate::server::{
    data::org_user::OrgUserRepository,
    model::org_user::{OrgUserFilter, UpdateOrgUserParams},
};
use sea_orm::DbErr;
use serde_json::json;
use test_utils::{
    builder::TestBuilder,
    factory::{self, org_user::OrgUserFactory},
};

mod get_paginated;
mod update;
