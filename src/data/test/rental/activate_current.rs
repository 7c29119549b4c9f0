use super::*;

/// Tests bulk activation of rentals whose window is in effect.
///
/// An inactive rental with check_in < today <= check_out is activated.
#[tokio::test]
async fn activates_rentals_inside_window() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, client, apartment) = factory::helpers::create_booking_dependencies(db).await?;

    let today = date(2024, 6, 15);
    let current = factory::rental::RentalFactory::new(db, apartment.id, client.id)
        .window(date(2024, 6, 12), date(2024, 6, 18))
        .is_active(false)
        .build()
        .await?;

    let repo = RentalRepository::new(db);
    let affected = repo.activate_current(today).await?;

    assert_eq!(affected, 1);
    assert!(repo.get_by_id(current.id).await?.unwrap().is_active);

    Ok(())
}

/// Tests that cancelled rentals are never reactivated, even when their
/// window overlaps today.
#[tokio::test]
async fn skips_cancelled_rentals() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, client, apartment) = factory::helpers::create_booking_dependencies(db).await?;

    let today = date(2024, 6, 15);
    let cancelled = factory::rental::RentalFactory::new(db, apartment.id, client.id)
        .window(date(2024, 6, 12), date(2024, 6, 18))
        .is_active(false)
        .cancelled(true)
        .build()
        .await?;

    let repo = RentalRepository::new(db);
    let affected = repo.activate_current(today).await?;

    assert_eq!(affected, 0);
    assert!(!repo.get_by_id(cancelled.id).await?.unwrap().is_active);

    Ok(())
}

/// Tests that an ended rental is not reactivated.
///
/// Without the check_out bound an ended, deactivated rental would flip back
/// to active on the next pass.
#[tokio::test]
async fn skips_ended_rentals() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, client, apartment) = factory::helpers::create_booking_dependencies(db).await?;

    let today = date(2024, 6, 15);
    let ended = factory::rental::RentalFactory::new(db, apartment.id, client.id)
        .window(date(2024, 6, 1), date(2024, 6, 5))
        .is_active(false)
        .build()
        .await?;

    let repo = RentalRepository::new(db);
    let affected = repo.activate_current(today).await?;

    assert_eq!(affected, 0);
    assert!(!repo.get_by_id(ended.id).await?.unwrap().is_active);

    Ok(())
}

/// Tests that a rental starting today is not yet activated.
///
/// Activation requires check_in strictly before today.
#[tokio::test]
async fn skips_rentals_starting_today() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, client, apartment) = factory::helpers::create_booking_dependencies(db).await?;

    let today = date(2024, 6, 15);
    factory::rental::RentalFactory::new(db, apartment.id, client.id)
        .window(today, date(2024, 6, 18))
        .is_active(false)
        .build()
        .await?;

    let repo = RentalRepository::new(db);
    assert_eq!(repo.activate_current(today).await?, 0);

    Ok(())
}
