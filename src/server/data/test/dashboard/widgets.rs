use super::*;

/// Tests widgets are loaded with their dashboard in id order.
///
/// Expected: Ok(Some) with both widgets
#[tokio::test]
async fn get_by_id_includes_widgets() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_org_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tenant = factory::create_tenant(db).await?;
    let dashboard = factory::create_dashboard(db, tenant.id).await?;
    let first = create_widget(db, dashboard.id).await?;
    let second = create_widget(db, dashboard.id).await?;

    let repo = DashboardRepository::new(db);
    let loaded = repo.get_by_id(tenant.id, dashboard.id).await?.unwrap();

    assert_eq!(
        loaded.widgets.iter().map(|w| w.id).collect::<Vec<_>>(),
        vec![first.id, second.id]
    );

    Ok(())
}

/// Tests widget updates are scoped to their dashboard.
///
/// Expected: Ok(None) through another dashboard, Ok(Some) through the owner
#[tokio::test]
async fn update_widget_requires_owning_dashboard() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_org_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tenant = factory::create_tenant(db).await?;
    let dashboard = factory::create_dashboard(db, tenant.id).await?;
    let other = factory::create_dashboard(db, tenant.id).await?;
    let widget = create_widget(db, dashboard.id).await?;

    let repo = DashboardRepository::new(db);
    let params = UpdateWidgetParams {
        name: Some("Lead time".to_string()),
        precalculate: Some(true),
        ..Default::default()
    };

    let wrong = repo
        .update_widget(other.id, widget.id, params.clone())
        .await?;
    assert!(wrong.is_none());

    let updated = repo
        .update_widget(dashboard.id, widget.id, params)
        .await?
        .unwrap();
    assert_eq!(updated.name, "Lead time");
    assert!(updated.precalculate);
    assert_eq!(updated.widget_type, widget.widget_type);

    Ok(())
}
