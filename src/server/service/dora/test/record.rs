use super::*;

/// Tests recording a deployment.
///
/// Expected: Ok with the stored row carrying the tenant and failure flag
#[tokio::test]
async fn records_deployment() -> Result<(), AppError> {
    let test = TestBuilder::new().with_dora_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tenant = factory::create_tenant(db).await?;
    let integration = factory::create_integration(db, tenant.id).await?;

    let stored = DoraService::new(db)
        .record_deployment(RecordDeploymentParams {
            tenant_id: tenant.id,
            integration_id: integration.id,
            service: "billing".to_string(),
            environment: "production".to_string(),
            deployed_at: day(4),
            first_commit_at: Some(day(3)),
            failed: true,
        })
        .await?;

    assert_eq!(stored.tenant_id, tenant.id);
    assert!(stored.failed);
    assert_eq!(stored.first_commit_at, Some(day(3)));

    Ok(())
}

/// Tests recording a deployment without a service name.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_blank_service() -> Result<(), AppError> {
    let test = TestBuilder::new().with_dora_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tenant = factory::create_tenant(db).await?;
    let integration = factory::create_integration(db, tenant.id).await?;

    let result = DoraService::new(db)
        .record_deployment(RecordDeploymentParams {
            tenant_id: tenant.id,
            integration_id: integration.id,
            service: " ".to_string(),
            environment: "production".to_string(),
            deployed_at: day(4),
            first_commit_at: None,
            failed: false,
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests recording deployments and incidents for integrations that are not
/// registered in the tenant.
///
/// Expected: Err(BadRequest) for both record kinds
#[tokio::test]
async fn rejects_unknown_integration() -> Result<(), AppError> {
    let test = TestBuilder::new().with_dora_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tenant = factory::create_tenant(db).await?;
    let other = factory::create_tenant(db).await?;
    let foreign = factory::create_integration(db, other.id).await?;

    let service = DoraService::new(db);
    let deployment = service
        .record_deployment(RecordDeploymentParams {
            tenant_id: tenant.id,
            integration_id: foreign.id,
            service: "billing".to_string(),
            environment: "production".to_string(),
            deployed_at: day(4),
            first_commit_at: None,
            failed: false,
        })
        .await;
    assert!(matches!(deployment, Err(AppError::BadRequest(_))));

    let incident = service
        .record_incident(RecordIncidentParams {
            tenant_id: tenant.id,
            integration_id: foreign.id + 100,
            service: "billing".to_string(),
            opened_at: day(4),
            resolved_at: None,
        })
        .await;
    assert!(matches!(incident, Err(AppError::BadRequest(_))));

    Ok(())
}
