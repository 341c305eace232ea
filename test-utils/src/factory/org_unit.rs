//! Org unit factory.
//!
//! Inserts org unit version rows directly. The path is derived from the parent
//! set via [`OrgUnitFactory::parent`] at build time, mirroring what the service
//! computes, but no other hierarchy invariant is checked.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::{json, Value};

/// Factory for creating org unit versions.
///
/// # Example
///
/// ```rust,ignore
/// let root = OrgUnitFactory::new(&db, tenant.id).name("Engineering").build().await?;
/// let v2 = OrgUnitFactory::new(&db, tenant.id)
///     .ref_id(root.ref_id)
///     .version(2)
///     .active(false)
///     .name("Engineering (renamed)")
///     .build()
///     .await?;
/// ```
pub struct OrgUnitFactory<'a> {
    db: &'a DatabaseConnection,
    tenant_id: i32,
    ref_id: i32,
    version: i32,
    name: String,
    description: Option<String>,
    parent: Option<(i32, String)>,
    tag_ids: Vec<i32>,
    active: bool,
    ou_category_id: Option<i32>,
    default_dashboard_id: Option<i32>,
}

impl<'a> OrgUnitFactory<'a> {
    /// Creates a new OrgUnitFactory.
    ///
    /// Defaults:
    /// - ref_id: unique counter value
    /// - version: `1`
    /// - name: `"Unit {ref_id}"`
    /// - active: `true`
    /// - no parent, category, tags or default dashboard
    pub fn new(db: &'a DatabaseConnection, tenant_id: i32) -> Self {
        let ref_id = next_id() as i32;
        Self {
            db,
            tenant_id,
            ref_id,
            version: 1,
            name: format!("Unit {}", ref_id),
            description: None,
            parent: None,
            tag_ids: Vec::new(),
            active: true,
            ou_category_id: None,
            default_dashboard_id: None,
        }
    }

    pub fn ref_id(mut self, ref_id: i32) -> Self {
        self.ref_id = ref_id;
        self
    }

    pub fn version(mut self, version: i32) -> Self {
        self.version = version;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Places the unit under `parent`, deriving `parent_ref_id` and `path`.
    pub fn parent(mut self, parent: &entity::org_unit::Model) -> Self {
        self.parent = Some((parent.ref_id, parent.path.clone()));
        self
    }

    pub fn tag_ids(mut self, tag_ids: Vec<i32>) -> Self {
        self.tag_ids = tag_ids;
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn category(mut self, ou_category_id: i32) -> Self {
        self.ou_category_id = Some(ou_category_id);
        self
    }

    pub fn default_dashboard(mut self, dashboard_id: i32) -> Self {
        self.default_dashboard_id = Some(dashboard_id);
        self
    }

    pub async fn build(self) -> Result<entity::org_unit::Model, DbErr> {
        let now = Utc::now();
        let (parent_ref_id, path) = match self.parent {
            Some((ref_id, parent_path)) => (Some(ref_id), format!("{}/{}", parent_path, self.name)),
            None => (None, format!("/{}", self.name)),
        };

        entity::org_unit::ActiveModel {
            tenant_id: ActiveValue::Set(self.tenant_id),
            ref_id: ActiveValue::Set(self.ref_id),
            version: ActiveValue::Set(self.version),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            parent_ref_id: ActiveValue::Set(parent_ref_id),
            tag_ids: ActiveValue::Set(json!(self.tag_ids)),
            active: ActiveValue::Set(self.active),
            path: ActiveValue::Set(path),
            ou_category_id: ActiveValue::Set(self.ou_category_id),
            default_dashboard_id: ActiveValue::Set(self.default_dashboard_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Adds a content section to an org unit version.
///
/// # Arguments
/// - `integration_id` - Integration scoping the section, if any
/// - `user_ids` - Org user ids statically assigned to the section
/// - `dynamic_users_definition` - Attribute matcher object, `{}` for none
pub async fn add_section(
    db: &DatabaseConnection,
    org_unit_id: i32,
    integration_id: Option<i32>,
    user_ids: Vec<i32>,
    dynamic_users_definition: Value,
) -> Result<entity::org_unit_section::Model, DbErr> {
    entity::org_unit_section::ActiveModel {
        org_unit_id: ActiveValue::Set(org_unit_id),
        integration_id: ActiveValue::Set(integration_id),
        integration_filters: ActiveValue::Set(json!({})),
        dynamic_users_definition: ActiveValue::Set(dynamic_users_definition),
        user_ids: ActiveValue::Set(json!(user_ids)),
        default_section: ActiveValue::Set(false),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Assigns an org user as manager of an org unit version.
pub async fn add_manager(
    db: &DatabaseConnection,
    org_unit_id: i32,
    org_user_id: i32,
) -> Result<entity::org_unit_manager::Model, DbErr> {
    entity::org_unit_manager::ActiveModel {
        org_unit_id: ActiveValue::Set(org_unit_id),
        org_user_id: ActiveValue::Set(org_user_id),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Maps a dashboard onto an org unit version at the given order.
pub async fn map_dashboard(
    db: &DatabaseConnection,
    org_unit_id: i32,
    dashboard_id: i32,
    dashboard_order: i32,
) -> Result<entity::org_unit_dashboard::Model, DbErr> {
    entity::org_unit_dashboard::ActiveModel {
        org_unit_id: ActiveValue::Set(org_unit_id),
        dashboard_id: ActiveValue::Set(dashboard_id),
        dashboard_order: ActiveValue::Set(dashboard_order),
        ..Default::default()
    }
    .insert(db)
    .await
}
