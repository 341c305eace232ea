//! Org unit data repository.
//!
//! All methods take the connection generically so the service can run multi-step
//! version changes inside one transaction.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};
use serde_json::json;

use crate::server::{
    model::org_unit::{DashboardMapping, OrgUnitFilter, OrgUnitParams},
    util::parse::search_term,
};

/// Values for a new org unit version row.
pub struct InsertOrgUnitVersion<'p> {
    pub tenant_id: i32,
    pub ref_id: i32,
    pub version: i32,
    pub path: String,
    pub ou_category_id: Option<i32>,
    pub params: &'p OrgUnitParams,
}

pub struct OrgUnitRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OrgUnitRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Ref id for a brand new org unit: one past the tenant's highest, starting at 1.
    pub async fn next_ref_id(&self, tenant_id: i32) -> Result<i32, DbErr> {
        let last = entity::prelude::OrgUnit::find()
            .filter(entity::org_unit::Column::TenantId.eq(tenant_id))
            .order_by_desc(entity::org_unit::Column::RefId)
            .one(self.db)
            .await?;

        Ok(last.map_or(1, |unit| unit.ref_id + 1))
    }

    /// Highest stored version of a ref id, `None` when the ref id is unknown.
    pub async fn max_version(&self, tenant_id: i32, ref_id: i32) -> Result<Option<i32>, DbErr> {
        let last = entity::prelude::OrgUnit::find()
            .filter(entity::org_unit::Column::TenantId.eq(tenant_id))
            .filter(entity::org_unit::Column::RefId.eq(ref_id))
            .order_by_desc(entity::org_unit::Column::Version)
            .one(self.db)
            .await?;

        Ok(last.map(|unit| unit.version))
    }

    pub async fn find_by_id(
        &self,
        tenant_id: i32,
        id: i32,
    ) -> Result<Option<entity::org_unit::Model>, DbErr> {
        entity::prelude::OrgUnit::find_by_id(id)
            .filter(entity::org_unit::Column::TenantId.eq(tenant_id))
            .one(self.db)
            .await
    }

    pub async fn find_active(
        &self,
        tenant_id: i32,
        ref_id: i32,
    ) -> Result<Option<entity::org_unit::Model>, DbErr> {
        entity::prelude::OrgUnit::find()
            .filter(entity::org_unit::Column::TenantId.eq(tenant_id))
            .filter(entity::org_unit::Column::RefId.eq(ref_id))
            .filter(entity::org_unit::Column::Active.eq(true))
            .one(self.db)
            .await
    }

    pub async fn find_version(
        &self,
        tenant_id: i32,
        ref_id: i32,
        version: i32,
    ) -> Result<Option<entity::org_unit::Model>, DbErr> {
        entity::prelude::OrgUnit::find()
            .filter(entity::org_unit::Column::TenantId.eq(tenant_id))
            .filter(entity::org_unit::Column::RefId.eq(ref_id))
            .filter(entity::org_unit::Column::Version.eq(version))
            .one(self.db)
            .await
    }

    /// All versions of a ref id, newest first.
    pub async fn find_versions(
        &self,
        tenant_id: i32,
        ref_id: i32,
    ) -> Result<Vec<entity::org_unit::Model>, DbErr> {
        entity::prelude::OrgUnit::find()
            .filter(entity::org_unit::Column::TenantId.eq(tenant_id))
            .filter(entity::org_unit::Column::RefId.eq(ref_id))
            .order_by_desc(entity::org_unit::Column::Version)
            .all(self.db)
            .await
    }

    /// All active org units of the tenant ordered by ref id.
    pub async fn find_all_active(
        &self,
        tenant_id: i32,
    ) -> Result<Vec<entity::org_unit::Model>, DbErr> {
        entity::prelude::OrgUnit::find()
            .filter(entity::org_unit::Column::TenantId.eq(tenant_id))
            .filter(entity::org_unit::Column::Active.eq(true))
            .order_by_asc(entity::org_unit::Column::RefId)
            .all(self.db)
            .await
    }

    /// Active org units assigned to any of the given categories, ordered by ref id.
    pub async fn find_active_in_categories(
        &self,
        tenant_id: i32,
        category_ids: &[i32],
    ) -> Result<Vec<entity::org_unit::Model>, DbErr> {
        if category_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::OrgUnit::find()
            .filter(entity::org_unit::Column::TenantId.eq(tenant_id))
            .filter(entity::org_unit::Column::Active.eq(true))
            .filter(entity::org_unit::Column::OuCategoryId.is_in(category_ids.to_vec()))
            .order_by_asc(entity::org_unit::Column::RefId)
            .all(self.db)
            .await
    }

    /// Active org units whose parent is one of `parent_ref_ids`, ordered by ref id.
    pub async fn find_active_children(
        &self,
        tenant_id: i32,
        parent_ref_ids: &[i32],
    ) -> Result<Vec<entity::org_unit::Model>, DbErr> {
        if parent_ref_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::OrgUnit::find()
            .filter(entity::org_unit::Column::TenantId.eq(tenant_id))
            .filter(entity::org_unit::Column::Active.eq(true))
            .filter(entity::org_unit::Column::ParentRefId.is_in(parent_ref_ids.to_vec()))
            .order_by_asc(entity::org_unit::Column::RefId)
            .all(self.db)
            .await
    }

    /// Inserts an inactive version together with its managers and sections.
    ///
    /// Activation is a separate step so a failed insert never leaves a ref id
    /// without an active version.
    pub async fn insert_version(
        &self,
        row: InsertOrgUnitVersion<'_>,
    ) -> Result<entity::org_unit::Model, DbErr> {
        let now = Utc::now();
        let params = row.params;
        let unit = entity::org_unit::ActiveModel {
            tenant_id: ActiveValue::Set(row.tenant_id),
            ref_id: ActiveValue::Set(row.ref_id),
            version: ActiveValue::Set(row.version),
            name: ActiveValue::Set(params.name.clone()),
            description: ActiveValue::Set(params.description.clone()),
            parent_ref_id: ActiveValue::Set(params.parent_ref_id),
            tag_ids: ActiveValue::Set(json!(params.tag_ids)),
            active: ActiveValue::Set(false),
            path: ActiveValue::Set(row.path),
            ou_category_id: ActiveValue::Set(row.ou_category_id),
            default_dashboard_id: ActiveValue::Set(params.default_dashboard_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let mut manager_ids = params.managers.clone();
        manager_ids.sort_unstable();
        manager_ids.dedup();
        for org_user_id in manager_ids {
            entity::org_unit_manager::ActiveModel {
                org_unit_id: ActiveValue::Set(unit.id),
                org_user_id: ActiveValue::Set(org_user_id),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        for section in &params.sections {
            entity::org_unit_section::ActiveModel {
                org_unit_id: ActiveValue::Set(unit.id),
                integration_id: ActiveValue::Set(section.integration_id),
                integration_filters: ActiveValue::Set(section.integration_filters.clone()),
                dynamic_users_definition: ActiveValue::Set(
                    section.dynamic_users_definition.clone(),
                ),
                user_ids: ActiveValue::Set(json!(section.user_ids)),
                default_section: ActiveValue::Set(section.default_section),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        Ok(unit)
    }

    pub async fn set_active(
        &self,
        unit: entity::org_unit::Model,
        active: bool,
    ) -> Result<entity::org_unit::Model, DbErr> {
        let mut model: entity::org_unit::ActiveModel = unit.into();
        model.active = ActiveValue::Set(active);
        model.updated_at = ActiveValue::Set(Utc::now());
        model.update(self.db).await
    }

    pub async fn set_category(
        &self,
        unit: entity::org_unit::Model,
        ou_category_id: Option<i32>,
    ) -> Result<entity::org_unit::Model, DbErr> {
        let mut model: entity::org_unit::ActiveModel = unit.into();
        model.ou_category_id = ActiveValue::Set(ou_category_id);
        model.updated_at = ActiveValue::Set(Utc::now());
        model.update(self.db).await
    }

    /// Rewrites the path prefix of every version of the given descendants.
    ///
    /// Only rows whose ref id is in `ref_ids` are considered, so an unrelated
    /// subtree that happens to share the same path is left alone. A row at
    /// `{old_prefix}/rest` becomes `{new_prefix}/rest`; rows whose path is not
    /// below `old_prefix` keep their path.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows rewritten
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn rewrite_descendant_paths(
        &self,
        tenant_id: i32,
        ref_ids: &[i32],
        old_prefix: &str,
        new_prefix: &str,
    ) -> Result<u64, DbErr> {
        if ref_ids.is_empty() {
            return Ok(0);
        }

        let descendants = entity::prelude::OrgUnit::find()
            .filter(entity::org_unit::Column::TenantId.eq(tenant_id))
            .filter(entity::org_unit::Column::RefId.is_in(ref_ids.to_vec()))
            .all(self.db)
            .await?;

        let mut rewritten = 0;
        for unit in descendants {
            let Some(rest) = unit.path.strip_prefix(old_prefix) else {
                continue;
            };
            if !rest.starts_with('/') {
                continue;
            }

            let path = format!("{}{}", new_prefix, rest);
            let mut model: entity::org_unit::ActiveModel = unit.into();
            model.path = ActiveValue::Set(path);
            model.update(self.db).await?;
            rewritten += 1;
        }

        Ok(rewritten)
    }

    /// Sets the path of a single version row.
    pub async fn set_path(
        &self,
        unit: entity::org_unit::Model,
        path: String,
    ) -> Result<entity::org_unit::Model, DbErr> {
        let mut model: entity::org_unit::ActiveModel = unit.into();
        model.path = ActiveValue::Set(path);
        model.update(self.db).await
    }

    /// Detaches every version pointing at `parent_ref_id` as its parent.
    pub async fn clear_parent_links(&self, tenant_id: i32, parent_ref_id: i32) -> Result<u64, DbErr> {
        let children = entity::prelude::OrgUnit::find()
            .filter(entity::org_unit::Column::TenantId.eq(tenant_id))
            .filter(entity::org_unit::Column::ParentRefId.eq(parent_ref_id))
            .all(self.db)
            .await?;

        let mut cleared = 0;
        for child in children {
            let mut model: entity::org_unit::ActiveModel = child.into();
            model.parent_ref_id = ActiveValue::Set(None);
            model.update(self.db).await?;
            cleared += 1;
        }

        Ok(cleared)
    }

    /// Removes the integration scope from every section that uses it.
    pub async fn clear_section_integration(&self, integration_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::OrgUnitSection::update_many()
            .col_expr(
                entity::org_unit_section::Column::IntegrationId,
                Expr::value(Option::<i32>::None),
            )
            .filter(entity::org_unit_section::Column::IntegrationId.eq(integration_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Manager org user ids keyed by org unit row id.
    pub async fn managers_by_unit(
        &self,
        org_unit_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<i32>>, DbErr> {
        if org_unit_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = entity::prelude::OrgUnitManager::find()
            .filter(entity::org_unit_manager::Column::OrgUnitId.is_in(org_unit_ids.to_vec()))
            .order_by_asc(entity::org_unit_manager::Column::OrgUserId)
            .all(self.db)
            .await?;

        let mut managers: HashMap<i32, Vec<i32>> = HashMap::new();
        for row in rows {
            managers.entry(row.org_unit_id).or_default().push(row.org_user_id);
        }

        Ok(managers)
    }

    /// Sections keyed by org unit row id, in insertion order.
    pub async fn sections_by_unit(
        &self,
        org_unit_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<entity::org_unit_section::Model>>, DbErr> {
        if org_unit_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = entity::prelude::OrgUnitSection::find()
            .filter(entity::org_unit_section::Column::OrgUnitId.is_in(org_unit_ids.to_vec()))
            .order_by_asc(entity::org_unit_section::Column::Id)
            .all(self.db)
            .await?;

        let mut sections: HashMap<i32, Vec<entity::org_unit_section::Model>> = HashMap::new();
        for row in rows {
            sections.entry(row.org_unit_id).or_default().push(row);
        }

        Ok(sections)
    }

    /// Dashboards mapped onto a version ordered by `dashboard_order`.
    pub async fn dashboard_mappings(
        &self,
        org_unit_id: i32,
    ) -> Result<Vec<(entity::org_unit_dashboard::Model, entity::dashboard::Model)>, DbErr> {
        let rows = entity::prelude::OrgUnitDashboard::find()
            .filter(entity::org_unit_dashboard::Column::OrgUnitId.eq(org_unit_id))
            .find_also_related(entity::prelude::Dashboard)
            .order_by_asc(entity::org_unit_dashboard::Column::DashboardOrder)
            .order_by_asc(entity::org_unit_dashboard::Column::DashboardId)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(mapping, dashboard)| dashboard.map(|d| (mapping, d)))
            .collect())
    }

    /// Replaces all dashboard mappings of a version.
    pub async fn replace_dashboard_mappings(
        &self,
        org_unit_id: i32,
        mappings: &[DashboardMapping],
    ) -> Result<(), DbErr> {
        entity::prelude::OrgUnitDashboard::delete_many()
            .filter(entity::org_unit_dashboard::Column::OrgUnitId.eq(org_unit_id))
            .exec(self.db)
            .await?;

        for mapping in mappings {
            entity::org_unit_dashboard::ActiveModel {
                org_unit_id: ActiveValue::Set(org_unit_id),
                dashboard_id: ActiveValue::Set(mapping.dashboard_id),
                dashboard_order: ActiveValue::Set(mapping.dashboard_order),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        Ok(())
    }

    /// Copies the dashboard mappings of one version onto another.
    pub async fn copy_dashboard_mappings(&self, from_id: i32, to_id: i32) -> Result<(), DbErr> {
        let mappings: Vec<DashboardMapping> = entity::prelude::OrgUnitDashboard::find()
            .filter(entity::org_unit_dashboard::Column::OrgUnitId.eq(from_id))
            .all(self.db)
            .await?
            .into_iter()
            .map(|row| DashboardMapping {
                dashboard_id: row.dashboard_id,
                dashboard_order: row.dashboard_order,
            })
            .collect();

        self.replace_dashboard_mappings(to_id, &mappings).await
    }

    /// Row ids of the versions a dashboard is mapped onto.
    pub async fn unit_ids_with_dashboard(&self, dashboard_id: i32) -> Result<Vec<i32>, DbErr> {
        let rows = entity::prelude::OrgUnitDashboard::find()
            .filter(entity::org_unit_dashboard::Column::DashboardId.eq(dashboard_id))
            .all(self.db)
            .await?;

        Ok(rows.into_iter().map(|row| row.org_unit_id).collect())
    }

    /// Gets org units matching the filter ordered by ref id then version.
    ///
    /// Manager, dashboard and workspace filters are resolved to row or category
    /// ids first; an empty resolution short-circuits to an empty page.
    ///
    /// # Returns
    /// - `Ok((units, total))` - Units on the requested page and the total match count
    /// - `Err(DbErr)` - Database error during any lookup or the pagination query
    pub async fn get_paginated(
        &self,
        tenant_id: i32,
        filter: &OrgUnitFilter,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::org_unit::Model>, u64), DbErr> {
        let mut query = entity::prelude::OrgUnit::find()
            .filter(entity::org_unit::Column::TenantId.eq(tenant_id))
            .filter(entity::org_unit::Column::Active.eq(filter.active));

        if let Some(name) = search_term(filter.name.as_deref()) {
            query = query.filter(entity::org_unit::Column::Name.contains(name));
        }
        if let Some(ref_ids) = &filter.ref_ids {
            query = query.filter(entity::org_unit::Column::RefId.is_in(ref_ids.clone()));
        }
        if let Some(parent_ref_ids) = &filter.parent_ref_ids {
            query =
                query.filter(entity::org_unit::Column::ParentRefId.is_in(parent_ref_ids.clone()));
        }
        if let Some(version) = filter.version {
            query = query.filter(entity::org_unit::Column::Version.eq(version));
        }
        if let Some(path) = search_term(filter.path.as_deref()) {
            // Literal prefix compare; `%` and `_` are ordinary path characters here.
            query = query.filter(Expr::cust_with_values(
                "substr(\"path\", 1, length(?)) = ?",
                [path, path],
            ));
        }
        if let Some(category_ids) = &filter.ou_category_ids {
            query =
                query.filter(entity::org_unit::Column::OuCategoryId.is_in(category_ids.clone()));
        }
        if let Some(dashboard_id) = filter.default_dashboard_id {
            query = query.filter(entity::org_unit::Column::DefaultDashboardId.eq(dashboard_id));
        }

        if let Some(manager_ids) = &filter.manager_ids {
            let unit_ids: Vec<i32> = entity::prelude::OrgUnitManager::find()
                .filter(entity::org_unit_manager::Column::OrgUserId.is_in(manager_ids.clone()))
                .all(self.db)
                .await?
                .into_iter()
                .map(|row| row.org_unit_id)
                .collect();
            if unit_ids.is_empty() {
                return Ok((Vec::new(), 0));
            }
            query = query.filter(entity::org_unit::Column::Id.is_in(unit_ids));
        }

        if let Some(dashboard_id) = filter.dashboard_id {
            let unit_ids = self.unit_ids_with_dashboard(dashboard_id).await?;
            if unit_ids.is_empty() {
                return Ok((Vec::new(), 0));
            }
            query = query.filter(entity::org_unit::Column::Id.is_in(unit_ids));
        }

        if let Some(workspace_id) = filter.workspace_id {
            let category_ids: Vec<i32> = entity::prelude::OuCategory::find()
                .filter(entity::ou_category::Column::TenantId.eq(tenant_id))
                .filter(entity::ou_category::Column::WorkspaceId.eq(workspace_id))
                .all(self.db)
                .await?
                .into_iter()
                .map(|category| category.id)
                .collect();
            if category_ids.is_empty() {
                return Ok((Vec::new(), 0));
            }
            query = query.filter(entity::org_unit::Column::OuCategoryId.is_in(category_ids));
        }

        let paginator = query
            .order_by_asc(entity::org_unit::Column::RefId)
            .order_by_asc(entity::org_unit::Column::Version)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let units = paginator.fetch_page(page).await?;

        Ok((units, total))
    }
}

