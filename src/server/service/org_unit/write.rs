use std::collections::HashSet;

use sea_orm::{ConnectionTrait, TransactionTrait};

use crate::server::{
    data::org_unit::OrgUnitRepository,
    error::AppError,
    model::org_unit::{OrgUnit, OrgUnitParams, UpdateOrgUnitParams},
};

use super::{
    activate, child_path, ensure_not_ancestor, insert_version, load_unit, not_found,
    OrgUnitService,
};

impl<'a> OrgUnitService<'a> {
    /// Creates a single org unit as version 1 of a new ref id.
    pub async fn create_unit(
        &self,
        tenant_id: i32,
        params: OrgUnitParams,
    ) -> Result<OrgUnit, AppError> {
        let txn = self.db.begin().await?;
        let unit = insert_version(&txn, tenant_id, None, &params).await?;
        let unit = activate(&txn, unit).await?;
        txn.commit().await?;

        load_unit(self.db, unit).await
    }

    /// Creates several org units in one transaction.
    ///
    /// Units are written in order, so a later unit may use an earlier one as its
    /// parent. Any failure rolls back the whole batch.
    ///
    /// # Returns
    /// - `Ok(Vec<i32>)` - Ref ids of the created units, in input order
    /// - `Err(AppError::BadRequest)` - Any unit failed validation
    pub async fn create_units(
        &self,
        tenant_id: i32,
        units: Vec<OrgUnitParams>,
    ) -> Result<Vec<i32>, AppError> {
        let txn = self.db.begin().await?;

        let mut ref_ids = Vec::with_capacity(units.len());
        for params in &units {
            let unit = insert_version(&txn, tenant_id, None, params).await?;
            let unit = activate(&txn, unit).await?;
            ref_ids.push(unit.ref_id);
        }

        txn.commit().await?;
        tracing::info!(tenant_id, count = ref_ids.len(), "Created org units");

        Ok(ref_ids)
    }

    /// Writes a new active version for each unit in one transaction.
    ///
    /// Descendant paths follow a path change, category changes are pushed down to
    /// active descendants and dashboard mappings carry over to the new version.
    ///
    /// # Returns
    /// - `Ok(Vec<i32>)` - Ref ids of the updated units, in input order
    /// - `Err(AppError::BadRequest)` - A unit is missing its ref id or failed validation
    /// - `Err(AppError::NotFound)` - A ref id has no active version
    pub async fn update_units(
        &self,
        tenant_id: i32,
        units: Vec<UpdateOrgUnitParams>,
    ) -> Result<Vec<i32>, AppError> {
        let txn = self.db.begin().await?;
        let repo = OrgUnitRepository::new(&txn);

        let mut ref_ids = Vec::with_capacity(units.len());
        for update in &units {
            let ref_id = update.ref_id.ok_or_else(|| {
                AppError::BadRequest("ref_id is required to update an org unit".to_string())
            })?;
            let current = repo
                .find_active(tenant_id, ref_id)
                .await?
                .ok_or_else(not_found)?;

            let next = insert_version(&txn, tenant_id, Some(ref_id), &update.unit).await?;

            if next.path != current.path {
                let descendants = descendant_ref_ids(&txn, tenant_id, ref_id).await?;
                repo.rewrite_descendant_paths(tenant_id, &descendants, &current.path, &next.path)
                    .await?;
            }
            if next.ou_category_id != current.ou_category_id {
                propagate_category(&txn, tenant_id, ref_id, next.ou_category_id).await?;
            }
            repo.copy_dashboard_mappings(current.id, next.id).await?;

            activate(&txn, next).await?;
            ref_ids.push(ref_id);
        }

        txn.commit().await?;
        tracing::info!(tenant_id, count = ref_ids.len(), "Updated org units");

        Ok(ref_ids)
    }

    /// Deactivates each unit in one transaction.
    ///
    /// Children lose their parent link and the deleted unit's path is dropped from
    /// descendant paths, so direct children become roots. Versions are kept.
    ///
    /// # Returns
    /// - `Ok(())` - All units were deactivated
    /// - `Err(AppError::NotFound)` - A ref id has no active version
    pub async fn delete_units(&self, tenant_id: i32, ref_ids: &[i32]) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let repo = OrgUnitRepository::new(&txn);

        for ref_id in ref_ids {
            let active = repo
                .find_active(tenant_id, *ref_id)
                .await?
                .ok_or_else(not_found)?;
            let path = active.path.clone();
            let descendants = descendant_ref_ids(&txn, tenant_id, *ref_id).await?;

            repo.set_active(active, false).await?;
            repo.clear_parent_links(tenant_id, *ref_id).await?;
            repo.rewrite_descendant_paths(tenant_id, &descendants, &path, "")
                .await?;
        }

        txn.commit().await?;
        tracing::info!(tenant_id, count = ref_ids.len(), "Deleted org units");

        Ok(())
    }

    /// Makes an existing version the active one.
    ///
    /// The version's stored parent is validated against the current hierarchy
    /// the same way a new version is: the parent must be active, must not be
    /// the unit or one of its descendants, and must share the unit's category.
    /// The path is recomputed from the parent's current path and descendant
    /// paths follow it. Already active versions are returned unchanged.
    ///
    /// # Returns
    /// - `Ok(OrgUnit)` - The now active version
    /// - `Err(AppError::NotFound)` - Unknown ref id or version
    /// - `Err(AppError::BadRequest)` - The stored parent is missing, would form a
    ///   cycle or belongs to another category
    pub async fn activate_version(
        &self,
        tenant_id: i32,
        ref_id: i32,
        version: i32,
    ) -> Result<OrgUnit, AppError> {
        let target = OrgUnitRepository::new(self.db)
            .find_version(tenant_id, ref_id, version)
            .await?
            .ok_or_else(|| AppError::NotFound("OU version not found".to_string()))?;
        if target.active {
            return load_unit(self.db, target).await;
        }

        let txn = self.db.begin().await?;
        let repo = OrgUnitRepository::new(&txn);

        let parent = match target.parent_ref_id {
            Some(parent_ref_id) => {
                ensure_not_ancestor(&txn, tenant_id, ref_id, parent_ref_id).await?;
                let parent = repo
                    .find_active(tenant_id, parent_ref_id)
                    .await?
                    .ok_or_else(|| {
                        AppError::BadRequest(format!(
                            "Parent org unit {} not found",
                            parent_ref_id
                        ))
                    })?;
                Some(parent)
            }
            None => None,
        };

        if let (Some(own), Some(inherited)) = (
            target.ou_category_id,
            parent.as_ref().and_then(|p| p.ou_category_id),
        ) {
            if own != inherited {
                return Err(AppError::BadRequest(
                    "Parent and Child Org Units should belong to the same Org Unit Category"
                        .to_string(),
                ));
            }
        }

        let path = child_path(parent.as_ref().map(|p| p.path.as_str()), &target.name);
        let target = if target.path != path {
            repo.set_path(target, path).await?
        } else {
            target
        };

        if let Some(current) = repo.find_active(tenant_id, ref_id).await? {
            if current.path != target.path {
                let descendants = descendant_ref_ids(&txn, tenant_id, ref_id).await?;
                repo.rewrite_descendant_paths(
                    tenant_id,
                    &descendants,
                    &current.path,
                    &target.path,
                )
                .await?;
            }
        }
        let unit = activate(&txn, target).await?;

        txn.commit().await?;

        load_unit(self.db, unit).await
    }
}

/// Active descendants of `ref_id`, found by following `parent_ref_id` links.
async fn active_descendants<C: ConnectionTrait>(
    db: &C,
    tenant_id: i32,
    ref_id: i32,
) -> Result<Vec<entity::org_unit::Model>, AppError> {
    let repo = OrgUnitRepository::new(db);
    let mut visited = HashSet::from([ref_id]);
    let mut frontier = vec![ref_id];
    let mut descendants = Vec::new();

    while !frontier.is_empty() {
        let children = repo.find_active_children(tenant_id, &frontier).await?;
        frontier = Vec::new();

        for child in children {
            if !visited.insert(child.ref_id) {
                continue;
            }
            frontier.push(child.ref_id);
            descendants.push(child);
        }
    }

    Ok(descendants)
}

async fn descendant_ref_ids<C: ConnectionTrait>(
    db: &C,
    tenant_id: i32,
    ref_id: i32,
) -> Result<Vec<i32>, AppError> {
    Ok(active_descendants(db, tenant_id, ref_id)
        .await?
        .into_iter()
        .map(|unit| unit.ref_id)
        .collect())
}

/// Sets `ou_category_id` on every active descendant of `ref_id`.
async fn propagate_category<C: ConnectionTrait>(
    db: &C,
    tenant_id: i32,
    ref_id: i32,
    ou_category_id: Option<i32>,
) -> Result<(), AppError> {
    let repo = OrgUnitRepository::new(db);

    for unit in active_descendants(db, tenant_id, ref_id).await? {
        if unit.ou_category_id != ou_category_id {
            repo.set_category(unit, ou_category_id).await?;
        }
    }

    Ok(())
}
