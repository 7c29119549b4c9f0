use super::*;

/// Tests creating a confirmed rental from params.
///
/// Expected: Ok with an active, non-cancelled rental
#[tokio::test]
async fn creates_active_rental() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, client, apartment) = factory::helpers::create_booking_dependencies(db).await?;

    let repo = RentalRepository::new(db);
    let rental = repo
        .create(CreateRentalParams {
            apartment_id: apartment.id,
            client_id: client.id,
            check_in: date(2024, 6, 10),
            check_out: date(2024, 6, 12),
            rooms: 2,
            final_price: 270.0,
        })
        .await?;

    assert_eq!(rental.apartment_id, apartment.id);
    assert_eq!(rental.client_id, client.id);
    assert_eq!(rental.check_in, date(2024, 6, 10));
    assert_eq!(rental.check_out, date(2024, 6, 12));
    assert_eq!(rental.rooms, 2);
    assert_eq!(rental.final_price, 270.0);
    assert!(rental.is_active);
    assert!(!rental.cancelled);
    assert!(!rental.expiry_reminder_sent);

    Ok(())
}

/// Tests the foreign key constraint on apartment_id.
///
/// Expected: Err(DbErr) for an apartment that does not exist
#[tokio::test]
async fn fails_for_nonexistent_apartment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let client = factory::user::create_user(db).await?;

    let repo = RentalRepository::new(db);
    let result = repo
        .create(CreateRentalParams {
            apartment_id: 999999,
            client_id: client.id,
            check_in: date(2024, 6, 10),
            check_out: date(2024, 6, 12),
            rooms: 1,
            final_price: 100.0,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
