use crate::server::{
    data::org_unit::OrgUnitRepository,
    error::AppError,
    model::{
        org_unit::{DashboardMapping, OrgUnitFilter, OrgUnitParams, OrgUnitSection, UpdateOrgUnitParams},
        org_user::{CreateOrgUserParams, OrgUser, UpdateOrgUserParams},
    },
    service::{
        org_unit::{child_path, resolve_members, OrgUnitService},
        org_user::OrgUserService,
    },
};
use chrono::Utc;
use serde_json::json;
use test_utils::{
    builder::TestBuilder,
    factory::{
        self,
        org_unit::{add_section, map_dashboard, OrgUnitFactory},
        org_user::OrgUserFactory,
        ou_category::OuCategoryFactory,
    },
};

mod create;
mod delete;
mod members;

fn unit(name: &str) -> OrgUnitParams {
    OrgUnitParams {
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

fn child(name: &str, parent_ref_id: i32) -> OrgUnitParams {
    OrgUnitParams {
        parent_ref_id: Some(parent_ref_id),
        ..unit(name)
    }
}

fn section(user_ids: Vec<i32>, dynamic_users_definition: serde_json::Value) -> OrgUnitSection {
    OrgUnitSection {
        integration_id: None,
        integration_filters: json!({}),
        dynamic_users_definition,
        user_ids,
        default_section: false,
    }
}
