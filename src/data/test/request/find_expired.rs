use super::*;

/// Tests the expired-request query.
///
/// Only requests whose check-in is strictly before today qualify; one
/// checking in today is still actionable.
#[tokio::test]
async fn finds_requests_with_past_check_in() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, client, apartment) = factory::helpers::create_booking_dependencies(db).await?;

    let today = date(2024, 6, 15);
    let stale = factory::request::RequestFactory::new(db, apartment.id, client.id)
        .window(date(2024, 6, 12), date(2024, 6, 20))
        .build()
        .await?;
    factory::request::RequestFactory::new(db, apartment.id, client.id)
        .window(today, date(2024, 6, 20))
        .build()
        .await?;
    factory::request::RequestFactory::new(db, apartment.id, client.id)
        .window(date(2024, 6, 18), date(2024, 6, 20))
        .build()
        .await?;

    let repo = RequestRepository::new(db);
    let expired = repo.find_expired(today).await?;

    assert_eq!(expired.len(), 1);
    assert_eq!(expired[0].id, stale.id);

    Ok(())
}
