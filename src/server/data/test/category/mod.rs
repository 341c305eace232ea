use crate::server::{
    data::category::OuCategoryRepository,
    model::category::{CreateOuCategoryParams, OuCategoryFilter, UpdateOuCategoryParams},
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{self, ou_category::OuCategoryFactory, org_unit::OrgUnitFactory},
};

mod create;
mod delete;
mod get_paginated;
mod update;
