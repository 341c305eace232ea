use super::*;

/// Tests deleting a dashboard removes its widgets.
///
/// Expected: Ok(1) and no widgets remain for the dashboard
#[tokio::test]
async fn removes_widgets() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_org_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tenant = factory::create_tenant(db).await?;
    let dashboard = factory::create_dashboard(db, tenant.id).await?;
    create_widget(db, dashboard.id).await?;
    create_widget(db, dashboard.id).await?;

    let repo = DashboardRepository::new(db);
    let deleted = repo.delete(tenant.id, &[dashboard.id]).await?;

    assert_eq!(deleted, 1);
    assert!(repo.get_by_id(tenant.id, dashboard.id).await?.is_none());
    assert!(repo.get_widgets(dashboard.id).await?.is_empty());

    Ok(())
}
