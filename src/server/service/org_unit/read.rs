use std::collections::{BTreeMap, HashSet};

use crate::server::{
    data::{
        dashboard::DashboardRepository, org_unit::OrgUnitRepository,
        org_user::OrgUserRepository,
    },
    error::AppError,
    model::{
        org_unit::{
            DashboardMapping, FieldValues, OrgUnit, OrgUnitDashboard, OrgUnitFilter,
            OrgUnitVersion, PaginatedOrgUnits,
        },
        org_user::OrgUser,
        total_pages,
    },
};

use super::{load_unit, load_units, not_found, resolve_members, OrgUnitService};

/// Fields supported by [`OrgUnitService::values`].
const VALUE_FIELDS: [&str; 4] = ["name", "path", "parent_ref_id", "ou_category_id"];

impl<'a> OrgUnitService<'a> {
    /// Gets the active version of a unit, or a specific version when given.
    pub async fn get(
        &self,
        tenant_id: i32,
        ref_id: i32,
        version: Option<i32>,
    ) -> Result<OrgUnit, AppError> {
        let repo = OrgUnitRepository::new(self.db);
        let unit = match version {
            Some(version) => repo.find_version(tenant_id, ref_id, version).await?,
            None => repo.find_active(tenant_id, ref_id).await?,
        }
        .ok_or_else(not_found)?;

        load_unit(self.db, unit).await
    }

    pub async fn list(
        &self,
        tenant_id: i32,
        filter: &OrgUnitFilter,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedOrgUnits, AppError> {
        let (units, total) = OrgUnitRepository::new(self.db)
            .get_paginated(tenant_id, filter, page, per_page)
            .await?;

        Ok(PaginatedOrgUnits {
            org_units: load_units(self.db, units).await?,
            total,
            page,
            per_page,
            total_pages: total_pages(total, per_page),
        })
    }

    /// Lists every version of a unit, newest first.
    pub async fn list_versions(
        &self,
        tenant_id: i32,
        ref_id: i32,
    ) -> Result<Vec<OrgUnitVersion>, AppError> {
        let versions = OrgUnitRepository::new(self.db)
            .find_versions(tenant_id, ref_id)
            .await?;
        if versions.is_empty() {
            return Err(not_found());
        }

        Ok(versions.iter().map(OrgUnitVersion::from_entity).collect())
    }

    /// Counts distinct values of each requested field over active units.
    ///
    /// Values are ordered by descending count, then by value. Units with no
    /// value for a nullable field are skipped.
    ///
    /// # Returns
    /// - `Ok(Vec<FieldValues>)` - One entry per requested field, in request order
    /// - `Err(AppError::BadRequest)` - A field is not one of `name`, `path`,
    ///   `parent_ref_id` or `ou_category_id`
    pub async fn values(
        &self,
        tenant_id: i32,
        fields: &[String],
    ) -> Result<Vec<FieldValues>, AppError> {
        if let Some(field) = fields.iter().find(|f| !VALUE_FIELDS.contains(&f.as_str())) {
            return Err(AppError::BadRequest(format!(
                "Unsupported field '{}'",
                field
            )));
        }

        let units = OrgUnitRepository::new(self.db)
            .find_all_active(tenant_id)
            .await?;

        let results = fields
            .iter()
            .map(|field| {
                let mut counts: BTreeMap<String, u64> = BTreeMap::new();
                for unit in &units {
                    let value = match field.as_str() {
                        "name" => Some(unit.name.clone()),
                        "path" => Some(unit.path.clone()),
                        "parent_ref_id" => unit.parent_ref_id.map(|id| id.to_string()),
                        _ => unit.ou_category_id.map(|id| id.to_string()),
                    };
                    if let Some(value) = value {
                        *counts.entry(value).or_default() += 1;
                    }
                }

                let mut values: Vec<(String, u64)> = counts.into_iter().collect();
                values.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

                FieldValues {
                    field: field.clone(),
                    values,
                }
            })
            .collect();

        Ok(results)
    }

    /// Ancestors of a unit within its category, root first.
    pub async fn parents(&self, tenant_id: i32, ref_id: i32) -> Result<Vec<OrgUnit>, AppError> {
        let repo = OrgUnitRepository::new(self.db);
        let unit = repo
            .find_active(tenant_id, ref_id)
            .await?
            .ok_or_else(not_found)?;

        let mut ancestors = Vec::new();
        let mut visited = HashSet::from([unit.ref_id]);
        let mut next = unit.parent_ref_id;

        while let Some(parent_ref_id) = next {
            if !visited.insert(parent_ref_id) {
                break;
            }
            let Some(parent) = repo.find_active(tenant_id, parent_ref_id).await? else {
                break;
            };
            if parent.ou_category_id != unit.ou_category_id {
                break;
            }
            next = parent.parent_ref_id;
            ancestors.push(parent);
        }
        ancestors.reverse();

        load_units(self.db, ancestors).await
    }

    /// Ref ids of active children, or of all active descendants when `recursive`.
    pub async fn children(
        &self,
        tenant_id: i32,
        ref_id: i32,
        recursive: bool,
    ) -> Result<Vec<i32>, AppError> {
        let repo = OrgUnitRepository::new(self.db);
        repo.find_active(tenant_id, ref_id)
            .await?
            .ok_or_else(not_found)?;

        let mut visited = HashSet::from([ref_id]);
        let mut descendants = Vec::new();
        let mut frontier = vec![ref_id];

        while !frontier.is_empty() {
            let children = repo.find_active_children(tenant_id, &frontier).await?;
            frontier = children
                .into_iter()
                .map(|child| child.ref_id)
                .filter(|id| visited.insert(*id))
                .collect();
            descendants.extend(frontier.iter().copied());

            if !recursive {
                break;
            }
        }
        descendants.sort_unstable();

        Ok(descendants)
    }

    /// Org users that are members of the active version, ascending by id.
    ///
    /// Membership is resolved against the current org users on every call, so
    /// attribute changes and new org users are reflected immediately.
    pub async fn members(&self, tenant_id: i32, ref_id: i32) -> Result<Vec<OrgUser>, AppError> {
        let unit = self.get(tenant_id, ref_id, None).await?;
        let org_users = OrgUserRepository::new(self.db).get_all(tenant_id).await?;

        let member_ids: HashSet<i32> = resolve_members(&unit.sections, &org_users)
            .into_iter()
            .collect();

        Ok(org_users
            .into_iter()
            .filter(|user| member_ids.contains(&user.id))
            .collect())
    }

    /// Dashboards mapped onto the active version, ordered by `dashboard_order`.
    pub async fn dashboards(
        &self,
        tenant_id: i32,
        ref_id: i32,
    ) -> Result<Vec<OrgUnitDashboard>, AppError> {
        let repo = OrgUnitRepository::new(self.db);
        let unit = repo
            .find_active(tenant_id, ref_id)
            .await?
            .ok_or_else(not_found)?;

        let mappings = repo.dashboard_mappings(unit.id).await?;

        Ok(mappings
            .into_iter()
            .map(|(mapping, dashboard)| OrgUnitDashboard {
                dashboard_id: dashboard.id,
                name: dashboard.name,
                dashboard_order: mapping.dashboard_order,
            })
            .collect())
    }

    /// Replaces the dashboard mappings of the active version.
    ///
    /// # Returns
    /// - `Ok(Vec<OrgUnitDashboard>)` - The mappings now stored
    /// - `Err(AppError::NotFound)` - The unit has no active version
    /// - `Err(AppError::BadRequest)` - A dashboard is unknown in the tenant or repeated
    pub async fn set_dashboards(
        &self,
        tenant_id: i32,
        ref_id: i32,
        mappings: &[DashboardMapping],
    ) -> Result<Vec<OrgUnitDashboard>, AppError> {
        let repo = OrgUnitRepository::new(self.db);
        let unit = repo
            .find_active(tenant_id, ref_id)
            .await?
            .ok_or_else(not_found)?;

        let mut requested: Vec<i32> = mappings.iter().map(|m| m.dashboard_id).collect();
        requested.sort_unstable();
        if let Some(pair) = requested.windows(2).find(|pair| pair[0] == pair[1]) {
            return Err(AppError::BadRequest(format!(
                "Dashboard {} is mapped more than once",
                pair[0]
            )));
        }
        let known: HashSet<i32> = DashboardRepository::new(self.db)
            .find_by_ids(tenant_id, &requested)
            .await?
            .into_iter()
            .map(|dashboard| dashboard.id)
            .collect();
        if let Some(missing) = requested.iter().find(|id| !known.contains(id)) {
            return Err(AppError::BadRequest(format!(
                "Dashboard {} not found",
                missing
            )));
        }

        repo.replace_dashboard_mappings(unit.id, mappings).await?;

        self.dashboards(tenant_id, ref_id).await
    }
}
