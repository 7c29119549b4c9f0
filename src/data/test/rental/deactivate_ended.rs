use super::*;

/// Tests bulk deactivation of rentals whose window has ended.
///
/// A rental with check_out strictly before today is deactivated; one ending
/// today is left active.
#[tokio::test]
async fn deactivates_only_ended_rentals() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, client, apartment) = factory::helpers::create_booking_dependencies(db).await?;

    let today = date(2024, 6, 15);
    let ended = factory::rental::RentalFactory::new(db, apartment.id, client.id)
        .window(date(2024, 6, 10), date(2024, 6, 14))
        .build()
        .await?;
    let ends_today = factory::rental::RentalFactory::new(db, apartment.id, client.id)
        .window(date(2024, 6, 12), today)
        .build()
        .await?;

    let repo = RentalRepository::new(db);
    let affected = repo.deactivate_ended(today).await?;

    assert_eq!(affected, 1);
    assert!(!repo.get_by_id(ended.id).await?.unwrap().is_active);
    assert!(repo.get_by_id(ends_today.id).await?.unwrap().is_active);

    Ok(())
}

/// Tests that a second pass over unchanged data touches nothing.
#[tokio::test]
async fn second_pass_is_noop() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, client, apartment) = factory::helpers::create_booking_dependencies(db).await?;

    let today = date(2024, 6, 15);
    factory::rental::RentalFactory::new(db, apartment.id, client.id)
        .window(date(2024, 6, 10), date(2024, 6, 14))
        .build()
        .await?;

    let repo = RentalRepository::new(db);
    assert_eq!(repo.deactivate_ended(today).await?, 1);
    assert_eq!(repo.deactivate_ended(today).await?, 0);

    Ok(())
}
