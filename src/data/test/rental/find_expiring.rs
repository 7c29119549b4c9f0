use super::*;

/// Tests the expiry window query.
///
/// Only ongoing rentals ending within the window that have not been
/// reminded yet qualify.
#[tokio::test]
async fn finds_ongoing_rentals_ending_within_window() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, client, apartment) = factory::helpers::create_booking_dependencies(db).await?;

    let today = date(2024, 6, 15);

    // Ends within the window and has started.
    let qualifying = factory::rental::RentalFactory::new(db, apartment.id, client.id)
        .window(date(2024, 6, 10), date(2024, 6, 20))
        .build()
        .await?;
    // Ends beyond the window.
    factory::rental::RentalFactory::new(db, apartment.id, client.id)
        .window(date(2024, 6, 10), date(2024, 7, 20))
        .build()
        .await?;
    // Has not started yet.
    factory::rental::RentalFactory::new(db, apartment.id, client.id)
        .window(date(2024, 6, 18), date(2024, 6, 22))
        .build()
        .await?;
    // Already reminded.
    factory::rental::RentalFactory::new(db, apartment.id, client.id)
        .window(date(2024, 6, 10), date(2024, 6, 19))
        .expiry_reminder_sent(true)
        .build()
        .await?;

    let repo = RentalRepository::new(db);
    let expiring = repo.find_expiring(today, 10).await?;

    assert_eq!(expiring.len(), 1);
    assert_eq!(expiring[0].id, qualifying.id);

    Ok(())
}

/// Tests that a rental ending today qualifies.
#[tokio::test]
async fn includes_rental_ending_today() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, client, apartment) = factory::helpers::create_booking_dependencies(db).await?;

    let today = date(2024, 6, 15);
    let ends_today = factory::rental::RentalFactory::new(db, apartment.id, client.id)
        .window(date(2024, 6, 10), today)
        .build()
        .await?;

    let repo = RentalRepository::new(db);
    let expiring = repo.find_expiring(today, 10).await?;

    assert_eq!(expiring.len(), 1);
    assert_eq!(expiring[0].id, ends_today.id);

    Ok(())
}

/// Tests that marking the reminder sent removes the rental from the query.
#[tokio::test]
async fn mark_reminder_sent_excludes_rental() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, client, apartment) = factory::helpers::create_booking_dependencies(db).await?;

    let today = date(2024, 6, 15);
    let rental = factory::rental::RentalFactory::new(db, apartment.id, client.id)
        .window(date(2024, 6, 10), date(2024, 6, 20))
        .build()
        .await?;

    let repo = RentalRepository::new(db);
    assert_eq!(repo.find_expiring(today, 10).await?.len(), 1);

    repo.mark_reminder_sent(rental.id).await?;

    assert!(repo.find_expiring(today, 10).await?.is_empty());

    Ok(())
}
