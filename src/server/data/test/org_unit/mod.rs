use crate::server::{
    data::org_unit::{InsertOrgUnitVersion, OrgUnitRepository},
    model::org_unit::{OrgUnitFilter, OrgUnitParams, OrgUnitSection},
};
use sea_orm::DbErr;
use serde_json::json;
use test_utils::{
    builder::TestBuilder,
    factory::{
        self,
        org_unit::{add_manager, map_dashboard, OrgUnitFactory},
    },
};

mod get_paginated;
mod insert_version;
mod next_ref_id;
mod rewrite_descendant_paths;
