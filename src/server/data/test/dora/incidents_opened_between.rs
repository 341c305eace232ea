use super::*;

/// Tests incidents are selected by opening time regardless of resolution.
///
/// Expected: Ok with both incidents opened in range, oldest first
#[tokio::test]
async fn selects_by_opened_at() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_dora_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tenant = factory::create_tenant(db).await?;
    let start = Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap();
    let end = start + Duration::days(1);

    let open = create_incident(db, tenant.id, 1, start + Duration::hours(5), None).await?;
    let resolved = create_incident(
        db,
        tenant.id,
        1,
        start + Duration::hours(1),
        Some(end + Duration::hours(3)),
    )
    .await?;
    create_incident(db, tenant.id, 1, start - Duration::hours(1), Some(start)).await?;

    let repo = DoraRepository::new(db);
    let incidents = repo
        .incidents_opened_between(tenant.id, None, start, end)
        .await?;

    assert_eq!(
        incidents.iter().map(|i| i.id).collect::<Vec<_>>(),
        vec![resolved.id, open.id]
    );

    Ok(())
}
