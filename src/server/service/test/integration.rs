use super::*;

use chrono::{TimeZone, Utc};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::factory::deployment::create_incident;

fn params(tenant_id: i32, name: &str) -> CreateIntegrationParams {
    CreateIntegrationParams {
        tenant_id,
        name: name.to_string(),
        application: "github".to_string(),
        description: None,
        url: Some("https://github.example".to_string()),
        status: "active".to_string(),
        metadata: json!({}),
    }
}

async fn deployments_of(db: &sea_orm::DatabaseConnection, integration_id: i32) -> u64 {
    entity::prelude::Deployment::find()
        .filter(entity::deployment::Column::IntegrationId.eq(integration_id))
        .count(db)
        .await
        .unwrap()
}

/// Tests integration name validation and uniqueness.
///
/// Expected: Err(BadRequest) for empty, 51 character and taken names, Ok for
/// 50 characters and for the same name in another tenant
#[tokio::test]
async fn create_validates_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_org_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tenant = factory::create_tenant(db).await?;
    let other = factory::create_tenant(db).await?;

    let service = IntegrationService::new(db);

    let empty = service.create(params(tenant.id, "")).await;
    assert!(matches!(empty, Err(AppError::BadRequest(_))));

    let long = service.create(params(tenant.id, &"x".repeat(51))).await;
    assert!(matches!(long, Err(AppError::BadRequest(_))));

    let created = service.create(params(tenant.id, &"x".repeat(50))).await?;
    assert_eq!(created.status, "active");

    let taken = service.create(params(tenant.id, &"x".repeat(50))).await;
    assert!(matches!(taken, Err(AppError::BadRequest(_))));

    service.create(params(other.id, &"x".repeat(50))).await?;

    Ok(())
}

/// Tests renaming an integration and clashing with another name.
///
/// Expected: Ok for a fresh name with the application unchanged, Err(BadRequest)
/// for a name held by another integration
#[tokio::test]
async fn update_renames_unless_taken() -> Result<(), AppError> {
    let test = TestBuilder::new().with_org_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tenant = factory::create_tenant(db).await?;

    let service = IntegrationService::new(db);
    let github = service.create(params(tenant.id, "GitHub")).await?;
    service.create(params(tenant.id, "Jira")).await?;

    let renamed = service
        .update(
            tenant.id,
            github.id,
            UpdateIntegrationParams {
                name: Some("GitHub Cloud".to_string()),
                ..Default::default()
            },
        )
        .await?;
    assert_eq!(renamed.name, "GitHub Cloud");
    assert_eq!(renamed.application, "github");

    let clash = service
        .update(
            tenant.id,
            github.id,
            UpdateIntegrationParams {
                name: Some("Jira".to_string()),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(clash, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests deleting an integration that records, sections and workspaces use.
///
/// Verifies its deployments and incidents are removed, sections lose the scope
/// and workspace links are dropped while another integration's records stay.
///
/// Expected: Ok, then Err(NotFound) on lookup
#[tokio::test]
async fn delete_cascades_to_references() -> Result<(), AppError> {
    let test = TestBuilder::new().with_dora_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tenant = factory::create_tenant(db).await?;
    let doomed = factory::create_integration(db, tenant.id).await?;
    let kept = factory::create_integration(db, tenant.id).await?;
    let at = Utc.with_ymd_and_hms(2026, 3, 2, 0, 0, 0).unwrap();

    DeploymentFactory::new(db, tenant.id, at)
        .integration_id(doomed.id)
        .build()
        .await?;
    DeploymentFactory::new(db, tenant.id, at)
        .integration_id(kept.id)
        .build()
        .await?;
    create_incident(db, tenant.id, doomed.id, at, None).await?;

    let unit = OrgUnitFactory::new(db, tenant.id).name("Web").build().await?;
    add_section(db, unit.id, Some(doomed.id), vec![], json!({})).await?;
    let workspace = WorkspaceFactory::new(db, tenant.id)
        .integrations(vec![doomed.id, kept.id])
        .build()
        .await?;

    let service = IntegrationService::new(db);
    service.delete(tenant.id, doomed.id).await?;

    assert!(matches!(
        service.get(tenant.id, doomed.id).await,
        Err(AppError::NotFound(_))
    ));
    assert_eq!(deployments_of(db, doomed.id).await, 0);
    assert_eq!(deployments_of(db, kept.id).await, 1);
    let incidents = entity::prelude::Incident::find()
        .filter(entity::incident::Column::IntegrationId.eq(doomed.id))
        .count(db)
        .await?;
    assert_eq!(incidents, 0);

    let loaded = OrgUnitService::new(db).get(tenant.id, unit.ref_id, None).await?;
    assert_eq!(loaded.sections[0].integration_id, None);
    let workspace = WorkspaceService::new(db).get(tenant.id, workspace.id).await?;
    assert_eq!(workspace.integration_ids, vec![kept.id]);

    Ok(())
}

/// Tests deleting an integration of another tenant.
///
/// Expected: Err(NotFound) and the integration kept
#[tokio::test]
async fn delete_is_tenant_scoped() -> Result<(), AppError> {
    let test = TestBuilder::new().with_dora_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tenant = factory::create_tenant(db).await?;
    let other = factory::create_tenant(db).await?;
    let foreign = factory::create_integration(db, other.id).await?;

    let service = IntegrationService::new(db);
    let result = service.delete(tenant.id, foreign.id).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert_eq!(service.get(other.id, foreign.id).await?.id, foreign.id);

    Ok(())
}

/// Tests listing with the application filter.
///
/// Expected: Ok with only the pagerduty integration
#[tokio::test]
async fn list_filters_application() -> Result<(), AppError> {
    let test = TestBuilder::new().with_org_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tenant = factory::create_tenant(db).await?;

    let service = IntegrationService::new(db);
    service.create(params(tenant.id, "GitHub")).await?;
    service
        .create(CreateIntegrationParams {
            application: "pagerduty".to_string(),
            ..params(tenant.id, "On-call")
        })
        .await?;

    let page = service
        .list(
            tenant.id,
            &IntegrationFilter {
                application: Some("pagerduty".to_string()),
                per_page: 10,
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.integrations[0].name, "On-call");

    Ok(())
}
