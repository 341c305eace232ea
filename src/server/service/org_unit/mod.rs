//! Versioned org unit hierarchy.
//!
//! Every write produces a new version row under the same `ref_id` and activates it,
//! keeping older versions for history. Hierarchy links use `ref_id`s, while the
//! materialized `path` of every descendant is rewritten whenever an ancestor's path
//! changes. Multi-step changes run in a single transaction.

mod read;
mod write;

#[cfg(test)]
mod test;

use std::collections::HashSet;

use sea_orm::{ConnectionTrait, DatabaseConnection};

use crate::server::{
    data::{
        category::OuCategoryRepository,
        dashboard::DashboardRepository,
        org_unit::{InsertOrgUnitVersion, OrgUnitRepository},
        org_user::OrgUserRepository,
    },
    error::AppError,
    model::{
        org_unit::{OrgUnit, OrgUnitParams, OrgUnitSection},
        org_user::OrgUser,
    },
    service::integration::ensure_integrations_exist,
};

pub struct OrgUnitService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrgUnitService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }
}

pub(crate) fn not_found() -> AppError {
    AppError::NotFound("OU not found".to_string())
}

/// Converts stored versions to domain models, loading managers and sections in bulk.
pub(crate) async fn load_units<C: ConnectionTrait>(
    db: &C,
    entities: Vec<entity::org_unit::Model>,
) -> Result<Vec<OrgUnit>, AppError> {
    let ids: Vec<i32> = entities.iter().map(|unit| unit.id).collect();
    let repo = OrgUnitRepository::new(db);
    let mut managers = repo.managers_by_unit(&ids).await?;
    let mut sections = repo.sections_by_unit(&ids).await?;

    entities
        .into_iter()
        .map(|entity| {
            let unit_managers = managers.remove(&entity.id).unwrap_or_default();
            let unit_sections = sections
                .remove(&entity.id)
                .unwrap_or_default()
                .into_iter()
                .map(OrgUnitSection::from_entity)
                .collect::<Result<Vec<_>, _>>()?;

            OrgUnit::from_entity(entity, unit_managers, unit_sections)
        })
        .collect()
}

pub(crate) async fn load_unit<C: ConnectionTrait>(
    db: &C,
    entity: entity::org_unit::Model,
) -> Result<OrgUnit, AppError> {
    load_units(db, vec![entity])
        .await?
        .pop()
        .ok_or_else(not_found)
}

/// Org user ids that belong to a unit with the given sections.
///
/// A user is a member when listed statically in any section or when their
/// attributes satisfy any section's dynamic definition. Result is ascending.
pub fn resolve_members(sections: &[OrgUnitSection], org_users: &[OrgUser]) -> Vec<i32> {
    let mut members: Vec<i32> = sections
        .iter()
        .flat_map(|section| section.user_ids.iter().copied())
        .collect();

    for user in org_users {
        if sections
            .iter()
            .any(|section| section.matches_dynamically(&user.attributes))
        {
            members.push(user.id);
        }
    }

    members.sort_unstable();
    members.dedup();
    members
}

/// Path of a unit named `name` below a parent path, or at the root.
pub fn child_path(parent_path: Option<&str>, name: &str) -> String {
    match parent_path {
        Some(parent) => format!("{}/{}", parent, name),
        None => format!("/{}", name),
    }
}

/// Validates `params` and inserts an inactive version.
///
/// `ref_id` of `None` allocates a new unit; otherwise the next version of that
/// unit is written.
///
/// # Returns
/// - `Ok(Model)` - The inserted, still inactive, version
/// - `Err(AppError::BadRequest)` - Blank or invalid name, unknown parent, category,
///   dashboard, org user or section integration, category conflict with the
///   parent, or a cycle
pub(crate) async fn insert_version<C: ConnectionTrait>(
    db: &C,
    tenant_id: i32,
    ref_id: Option<i32>,
    params: &OrgUnitParams,
) -> Result<entity::org_unit::Model, AppError> {
    if params.name.is_empty() {
        return Err(AppError::BadRequest(
            "Org unit name must not be empty".to_string(),
        ));
    }
    if params.name.contains('/') {
        return Err(AppError::BadRequest(
            "Org unit name must not contain '/'".to_string(),
        ));
    }

    let repo = OrgUnitRepository::new(db);

    let (ref_id, version) = match ref_id {
        Some(ref_id) => {
            let version = repo.max_version(tenant_id, ref_id).await?.unwrap_or(0) + 1;
            (ref_id, version)
        }
        None => (repo.next_ref_id(tenant_id).await?, 1),
    };

    let parent = match params.parent_ref_id {
        Some(parent_ref_id) => {
            ensure_not_ancestor(db, tenant_id, ref_id, parent_ref_id).await?;
            let parent = repo
                .find_active(tenant_id, parent_ref_id)
                .await?
                .ok_or_else(|| {
                    AppError::BadRequest(format!("Parent org unit {} not found", parent_ref_id))
                })?;
            Some(parent)
        }
        None => None,
    };

    if let Some(category_id) = params.ou_category_id {
        OuCategoryRepository::new(db)
            .get_by_id(tenant_id, category_id)
            .await?
            .ok_or_else(|| {
                AppError::BadRequest(format!("Org unit category {} not found", category_id))
            })?;
    }

    let parent_category = parent.as_ref().and_then(|p| p.ou_category_id);
    if let (Some(own), Some(inherited)) = (params.ou_category_id, parent_category) {
        if own != inherited {
            return Err(AppError::BadRequest(
                "Parent and Child Org Units should belong to the same Org Unit Category"
                    .to_string(),
            ));
        }
    }
    let ou_category_id = parent_category.or(params.ou_category_id);

    if let Some(dashboard_id) = params.default_dashboard_id {
        let found = DashboardRepository::new(db)
            .find_by_ids(tenant_id, &[dashboard_id])
            .await?;
        if found.is_empty() {
            return Err(AppError::BadRequest(format!(
                "Dashboard {} not found",
                dashboard_id
            )));
        }
    }

    ensure_org_users_exist(db, tenant_id, params).await?;
    let integration_ids: Vec<i32> = params
        .sections
        .iter()
        .filter_map(|section| section.integration_id)
        .collect();
    ensure_integrations_exist(db, tenant_id, &integration_ids).await?;

    let path = child_path(parent.as_ref().map(|p| p.path.as_str()), &params.name);
    let unit = repo
        .insert_version(InsertOrgUnitVersion {
            tenant_id,
            ref_id,
            version,
            path,
            ou_category_id,
            params,
        })
        .await?;

    Ok(unit)
}

/// Makes `unit` the only active version of its ref id.
pub(crate) async fn activate<C: ConnectionTrait>(
    db: &C,
    unit: entity::org_unit::Model,
) -> Result<entity::org_unit::Model, AppError> {
    let repo = OrgUnitRepository::new(db);
    if let Some(current) = repo.find_active(unit.tenant_id, unit.ref_id).await? {
        if current.id == unit.id {
            return Ok(current);
        }
        repo.set_active(current, false).await?;
    }

    Ok(repo.set_active(unit, true).await?)
}

/// Rejects making `parent_ref_id` the parent of `ref_id` when `ref_id` is
/// `parent_ref_id` itself or one of its ancestors.
async fn ensure_not_ancestor<C: ConnectionTrait>(
    db: &C,
    tenant_id: i32,
    ref_id: i32,
    parent_ref_id: i32,
) -> Result<(), AppError> {
    let repo = OrgUnitRepository::new(db);
    let mut visited = HashSet::new();
    let mut current = Some(parent_ref_id);

    while let Some(candidate) = current {
        if candidate == ref_id {
            return Err(AppError::BadRequest(
                "An org unit cannot be its own ancestor".to_string(),
            ));
        }
        if !visited.insert(candidate) {
            break;
        }
        current = repo
            .find_active(tenant_id, candidate)
            .await?
            .and_then(|unit| unit.parent_ref_id);
    }

    Ok(())
}

async fn ensure_org_users_exist<C: ConnectionTrait>(
    db: &C,
    tenant_id: i32,
    params: &OrgUnitParams,
) -> Result<(), AppError> {
    let mut referenced: Vec<i32> = params
        .managers
        .iter()
        .chain(params.sections.iter().flat_map(|s| s.user_ids.iter()))
        .copied()
        .collect();
    referenced.sort_unstable();
    referenced.dedup();
    if referenced.is_empty() {
        return Ok(());
    }

    let found: HashSet<i32> = OrgUserRepository::new(db)
        .find_by_ids(tenant_id, &referenced)
        .await?
        .into_iter()
        .map(|user| user.id)
        .collect();
    let missing: Vec<i32> = referenced
        .into_iter()
        .filter(|id| !found.contains(id))
        .collect();

    if !missing.is_empty() {
        return Err(AppError::BadRequest(format!(
            "Unknown org user ids: {:?}",
            missing
        )));
    }

    Ok(())
}
