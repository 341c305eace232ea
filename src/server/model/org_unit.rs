//! Org unit domain models and parameters.
//!
//! Org units are versioned: every update writes a new row under the same `ref_id`
//! and at most one version per `ref_id` is active. Hierarchy links point at the
//! parent's `ref_id` so they survive re-versioning of the parent.

use chrono::{DateTime, Utc};
use serde_json::{json, Value};

use crate::{
    model::org_unit::{
        CreateOrgUnitDto, DashboardMappingDto, FieldValuesDto, OrgUnitDashboardDto, OrgUnitDto,
        OrgUnitFilterFieldsDto, OrgUnitSectionDto, OrgUnitVersionDto, PaginatedOrgUnitsDto,
        UpdateOrgUnitDto, ValueCountDto,
    },
    server::{error::AppError, util::parse::parse_id_array},
};

/// Integration scope attached to an org unit, plus the users it contributes.
#[derive(Debug, Clone, PartialEq)]
pub struct OrgUnitSection {
    pub integration_id: Option<i32>,
    pub integration_filters: Value,
    pub dynamic_users_definition: Value,
    pub user_ids: Vec<i32>,
    pub default_section: bool,
}

impl OrgUnitSection {
    pub fn from_entity(entity: entity::org_unit_section::Model) -> Result<Self, AppError> {
        Ok(Self {
            integration_id: entity.integration_id,
            user_ids: parse_id_array("org_unit_section.user_ids", &entity.user_ids)?,
            integration_filters: entity.integration_filters,
            dynamic_users_definition: entity.dynamic_users_definition,
            default_section: entity.default_section,
        })
    }

    pub fn from_dto(dto: OrgUnitSectionDto) -> Self {
        Self {
            integration_id: dto.integration_id,
            integration_filters: object_or_empty(dto.integration_filters),
            dynamic_users_definition: object_or_empty(dto.dynamic_users_definition),
            user_ids: dto.user_ids,
            default_section: dto.default_section,
        }
    }

    pub fn into_dto(self) -> OrgUnitSectionDto {
        OrgUnitSectionDto {
            integration_id: self.integration_id,
            integration_filters: self.integration_filters,
            dynamic_users_definition: self.dynamic_users_definition,
            user_ids: self.user_ids,
            default_section: self.default_section,
        }
    }

    /// Whether an org user with `attributes` is matched by the dynamic definition.
    ///
    /// An empty definition matches nobody.
    pub fn matches_dynamically(&self, attributes: &Value) -> bool {
        let Some(definition) = self.dynamic_users_definition.as_object() else {
            return false;
        };
        if definition.is_empty() {
            return false;
        }

        definition
            .iter()
            .all(|(key, expected)| attributes.get(key) == Some(expected))
    }
}

fn object_or_empty(value: Value) -> Value {
    if value.is_object() {
        value
    } else {
        json!({})
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrgUnit {
    pub id: i32,
    pub tenant_id: i32,
    pub ref_id: i32,
    pub version: i32,
    pub name: String,
    pub description: Option<String>,
    pub parent_ref_id: Option<i32>,
    pub tag_ids: Vec<i32>,
    pub active: bool,
    pub path: String,
    pub ou_category_id: Option<i32>,
    pub default_dashboard_id: Option<i32>,
    pub managers: Vec<i32>,
    pub sections: Vec<OrgUnitSection>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl OrgUnit {
    /// Converts a stored version together with its manager ids and sections.
    pub fn from_entity(
        entity: entity::org_unit::Model,
        managers: Vec<i32>,
        sections: Vec<OrgUnitSection>,
    ) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            tenant_id: entity.tenant_id,
            ref_id: entity.ref_id,
            version: entity.version,
            tag_ids: parse_id_array("org_unit.tag_ids", &entity.tag_ids)?,
            name: entity.name,
            description: entity.description,
            parent_ref_id: entity.parent_ref_id,
            active: entity.active,
            path: entity.path,
            ou_category_id: entity.ou_category_id,
            default_dashboard_id: entity.default_dashboard_id,
            managers,
            sections,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> OrgUnitDto {
        OrgUnitDto {
            id: self.id,
            ref_id: self.ref_id,
            version: self.version,
            name: self.name,
            description: self.description,
            parent_ref_id: self.parent_ref_id,
            tag_ids: self.tag_ids,
            active: self.active,
            path: self.path,
            ou_category_id: self.ou_category_id,
            default_dashboard_id: self.default_dashboard_id,
            managers: self.managers,
            sections: self
                .sections
                .into_iter()
                .map(OrgUnitSection::into_dto)
                .collect(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Definition of one org unit version as written by create and update.
#[derive(Debug, Clone, PartialEq)]
pub struct OrgUnitParams {
    pub name: String,
    pub description: Option<String>,
    pub parent_ref_id: Option<i32>,
    pub tag_ids: Vec<i32>,
    pub ou_category_id: Option<i32>,
    /// `Some(0)` from clients is normalized to `None`.
    pub default_dashboard_id: Option<i32>,
    pub managers: Vec<i32>,
    pub sections: Vec<OrgUnitSection>,
}

impl OrgUnitParams {
    pub fn from_create_dto(dto: CreateOrgUnitDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            description: dto.description,
            parent_ref_id: dto.parent_ref_id,
            tag_ids: dto.tag_ids,
            ou_category_id: dto.ou_category_id,
            default_dashboard_id: dto.default_dashboard_id.filter(|id| *id != 0),
            managers: dto.managers,
            sections: dto
                .sections
                .into_iter()
                .map(OrgUnitSection::from_dto)
                .collect(),
        }
    }

    /// Root unit created alongside a new category.
    pub fn root(name: String, ou_category_id: i32) -> Self {
        Self {
            name,
            description: None,
            parent_ref_id: None,
            tag_ids: Vec::new(),
            ou_category_id: Some(ou_category_id),
            default_dashboard_id: None,
            managers: Vec::new(),
            sections: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateOrgUnitParams {
    pub ref_id: Option<i32>,
    pub unit: OrgUnitParams,
}

impl UpdateOrgUnitParams {
    pub fn from_dto(dto: UpdateOrgUnitDto) -> Self {
        Self {
            ref_id: dto.ref_id,
            unit: OrgUnitParams::from_create_dto(CreateOrgUnitDto {
                name: dto.name,
                description: dto.description,
                parent_ref_id: dto.parent_ref_id,
                tag_ids: dto.tag_ids,
                ou_category_id: dto.ou_category_id,
                default_dashboard_id: dto.default_dashboard_id,
                managers: dto.managers,
                sections: dto.sections,
            }),
        }
    }
}

/// List filter. Every set field narrows the result.
#[derive(Debug, Clone, PartialEq)]
pub struct OrgUnitFilter {
    pub name: Option<String>,
    pub ref_ids: Option<Vec<i32>>,
    pub parent_ref_ids: Option<Vec<i32>>,
    pub manager_ids: Option<Vec<i32>>,
    pub version: Option<i32>,
    pub active: bool,
    pub path: Option<String>,
    pub ou_category_ids: Option<Vec<i32>>,
    pub default_dashboard_id: Option<i32>,
    pub dashboard_id: Option<i32>,
    pub workspace_id: Option<i32>,
}

impl Default for OrgUnitFilter {
    fn default() -> Self {
        Self {
            name: None,
            ref_ids: None,
            parent_ref_ids: None,
            manager_ids: None,
            version: None,
            active: true,
            path: None,
            ou_category_ids: None,
            default_dashboard_id: None,
            dashboard_id: None,
            workspace_id: None,
        }
    }
}

impl OrgUnitFilter {
    pub fn from_dto(dto: OrgUnitFilterFieldsDto) -> Self {
        Self {
            name: dto.name,
            ref_ids: dto.ref_ids,
            parent_ref_ids: dto.parent_ref_ids,
            manager_ids: dto.manager_ids,
            version: dto.version,
            active: dto.active.unwrap_or(true),
            path: dto.path,
            ou_category_ids: dto.ou_category_ids,
            default_dashboard_id: dto.default_dashboard_id,
            dashboard_id: dto.dashboard_id,
            workspace_id: dto.workspace_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedOrgUnits {
    pub org_units: Vec<OrgUnit>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedOrgUnits {
    pub fn into_dto(self) -> PaginatedOrgUnitsDto {
        PaginatedOrgUnitsDto {
            org_units: self.org_units.into_iter().map(OrgUnit::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrgUnitVersion {
    pub id: i32,
    pub version: i32,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl OrgUnitVersion {
    pub fn from_entity(entity: &entity::org_unit::Model) -> Self {
        Self {
            id: entity.id,
            version: entity.version,
            active: entity.active,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> OrgUnitVersionDto {
        OrgUnitVersionDto {
            id: self.id,
            version: self.version,
            active: self.active,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Distinct values of one field over active org units.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldValues {
    pub field: String,
    pub values: Vec<(String, u64)>,
}

impl FieldValues {
    pub fn into_dto(self) -> FieldValuesDto {
        FieldValuesDto {
            field: self.field,
            values: self
                .values
                .into_iter()
                .map(|(key, count)| ValueCountDto { key, count })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrgUnitDashboard {
    pub dashboard_id: i32,
    pub name: String,
    pub dashboard_order: i32,
}

impl OrgUnitDashboard {
    pub fn into_dto(self) -> OrgUnitDashboardDto {
        OrgUnitDashboardDto {
            dashboard_id: self.dashboard_id,
            name: self.name,
            dashboard_order: self.dashboard_order,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashboardMapping {
    pub dashboard_id: i32,
    pub dashboard_order: i32,
}

impl DashboardMapping {
    pub fn from_dto(dto: DashboardMappingDto) -> Self {
        Self {
            dashboard_id: dto.dashboard_id,
            dashboard_order: dto.dashboard_order,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use test_utils::fixture;

    use super::*;
    use crate::server::error::internal::InternalError;

    /// Expect stored tag ids and version metadata to carry over to the domain model
    #[test]
    fn converts_stored_version() {
        let entity = fixture::org_unit::entity();

        let unit = OrgUnit::from_entity(entity.clone(), vec![3], Vec::new()).unwrap();

        assert_eq!(unit.tag_ids, vec![7, 9]);
        assert_eq!(unit.managers, vec![3]);
        assert_eq!(unit.path, "/Engineering");

        let version = OrgUnitVersion::from_entity(&entity);
        assert_eq!(version.version, 1);
        assert!(version.active);
    }

    /// Expect a tag id column that is not an integer array to be reported as malformed
    #[test]
    fn rejects_malformed_tag_ids() {
        let mut entity = fixture::org_unit::entity();
        entity.tag_ids = json!(["7"]);

        let result = OrgUnit::from_entity(entity, Vec::new(), Vec::new());

        assert!(matches!(
            result,
            Err(AppError::InternalErr(InternalError::MalformedJson { .. }))
        ));
    }

    /// Expect a dashboard id of 0 to be treated as no default dashboard
    #[test]
    fn normalizes_zero_default_dashboard() {
        let params = OrgUnitParams::from_create_dto(CreateOrgUnitDto {
            name: "  Platform ".to_string(),
            description: None,
            parent_ref_id: None,
            tag_ids: Vec::new(),
            ou_category_id: None,
            default_dashboard_id: Some(0),
            managers: Vec::new(),
            sections: Vec::new(),
        });

        assert_eq!(params.name, "Platform");
        assert_eq!(params.default_dashboard_id, None);
    }

    /// Expect every key of the dynamic definition to be required for a match
    #[test]
    fn dynamic_definition_requires_all_keys() {
        let section = OrgUnitSection {
            integration_id: None,
            integration_filters: json!({}),
            dynamic_users_definition: json!({"team": "web", "site": "berlin"}),
            user_ids: Vec::new(),
            default_section: false,
        };

        assert!(section.matches_dynamically(&json!({"team": "web", "site": "berlin", "level": 3})));
        assert!(!section.matches_dynamically(&json!({"team": "web"})));
    }
}
