use super::*;

/// Tests fetching an existing apartment.
///
/// Expected: Ok(Some) with the stored fields mapped into the domain model
#[tokio::test]
async fn returns_apartment_when_present() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let apartment = factory::apartment::ApartmentFactory::new(db, owner.id)
        .location("Strada Mihai Viteazu 7")
        .total_rooms(3)
        .price(45.0)
        .build()
        .await?;

    let repo = ApartmentRepository::new(db);
    let found = repo.get_by_id(apartment.id).await?;

    let found = found.expect("apartment should exist");
    assert_eq!(found.id, apartment.id);
    assert_eq!(found.owner_id, owner.id);
    assert_eq!(found.location, "Strada Mihai Viteazu 7");
    assert_eq!(found.total_rooms, 3);
    assert_eq!(found.price, 45.0);

    Ok(())
}

/// Tests fetching a missing apartment.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_apartment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ApartmentRepository::new(db);
    let found = repo.get_by_id(999999).await?;

    assert!(found.is_none());

    Ok(())
}
