use super::*;

/// Tests creating a notification record.
///
/// Expected: Ok with an unread notification for the receiver
#[tokio::test]
async fn creates_unread_notification() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = NotificationRepository::new(db);
    let notification = repo.create(user.id, "Your stay ends today").await?;

    assert_eq!(notification.receiver_id, user.id);
    assert_eq!(notification.message, "Your stay ends today");
    assert!(!notification.read);

    Ok(())
}

/// Tests the foreign key constraint on receiver_id.
///
/// Expected: Err(DbErr) for a receiver that does not exist
#[tokio::test]
async fn fails_for_nonexistent_receiver() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = NotificationRepository::new(db);
    let result = repo.create(999999, "Hello").await;

    assert!(result.is_err());

    Ok(())
}
