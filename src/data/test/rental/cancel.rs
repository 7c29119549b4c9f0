use super::*;

/// Tests rental cancellation.
///
/// Expected: cancelled flag set, rental deactivated
#[tokio::test]
async fn cancels_and_deactivates_rental() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, client, apartment) = factory::helpers::create_booking_dependencies(db).await?;
    let rental = factory::rental::create_rental(db, apartment.id, client.id).await?;

    let repo = RentalRepository::new(db);
    let cancelled = repo.cancel(rental.id).await?;

    assert!(cancelled.cancelled);
    assert!(!cancelled.is_active);

    Ok(())
}

/// Tests cancelling a missing rental.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_rental() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RentalRepository::new(db);
    let result = repo.cancel(999999).await;

    assert!(result.is_err());

    Ok(())
}
