use chrono::NaiveDate;
use sea_orm::{ColumnTrait, DbErr, EntityTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

use crate::{
    data::{rental::RentalRepository, request::RequestRepository},
    error::AppError,
    service::booking::{BookingService, SubmitRequestParams},
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Submitting a request computes the final price from the apartment's
/// per-room daily price and the inclusive day count.
#[tokio::test]
async fn submit_computes_final_price() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let client = factory::user::create_user(db).await?;
    let apartment = factory::apartment::ApartmentFactory::new(db, owner.id)
        .price(50.0)
        .total_rooms(3)
        .build()
        .await?;

    let service = BookingService::new(db);
    let request = service
        .submit_request(SubmitRequestParams {
            apartment_id: apartment.id,
            client_id: client.id,
            check_in: date(2024, 6, 10),
            check_out: date(2024, 6, 12),
            rooms: 2,
        })
        .await
        .unwrap();

    // 50.0 per room per day, 2 rooms, 3 days.
    assert_eq!(request.final_price, 300.0);
    assert_eq!(request.rooms, 2);

    Ok(())
}

/// Inverted date windows are rejected before touching the store.
#[tokio::test]
async fn submit_rejects_inverted_window() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, client, apartment) = factory::helpers::create_booking_dependencies(db).await?;

    let service = BookingService::new(db);
    let result = service
        .submit_request(SubmitRequestParams {
            apartment_id: apartment.id,
            client_id: client.id,
            check_in: date(2024, 6, 12),
            check_out: date(2024, 6, 10),
            rooms: 1,
        })
        .await;

    assert!(matches!(result, Err(AppError::InvalidRequest(_))));

    Ok(())
}

/// Accepting a request promotes it to an active rental, removes the request,
/// and notifies the client.
#[tokio::test]
async fn accept_promotes_request_to_rental() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, client, apartment) = factory::helpers::create_booking_dependencies(db).await?;
    let request = factory::request::RequestFactory::new(db, apartment.id, client.id)
        .window(date(2024, 6, 10), date(2024, 6, 12))
        .rooms(2)
        .final_price(270.0)
        .build()
        .await?;

    let service = BookingService::new(db);
    let rental = service.accept_request(request.id).await.unwrap();

    assert_eq!(rental.apartment_id, apartment.id);
    assert_eq!(rental.client_id, client.id);
    assert_eq!(rental.check_in, request.check_in);
    assert_eq!(rental.check_out, request.check_out);
    assert_eq!(rental.rooms, request.rooms);
    assert_eq!(rental.final_price, request.final_price);
    assert!(rental.is_active);

    assert!(RequestRepository::new(db)
        .get_by_id(request.id)
        .await?
        .is_none());

    let notifications = entity::prelude::Notification::find()
        .filter(entity::notification::Column::ReceiverId.eq(client.id))
        .all(db)
        .await?;
    assert_eq!(notifications.len(), 1);
    assert!(notifications[0].message.contains("accepted"));

    Ok(())
}

/// Declining a request removes it and notifies the client.
#[tokio::test]
async fn decline_removes_request() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, client, apartment) = factory::helpers::create_booking_dependencies(db).await?;
    let request = factory::request::create_request(db, apartment.id, client.id).await?;

    let service = BookingService::new(db);
    service.decline_request(request.id).await.unwrap();

    assert!(RequestRepository::new(db)
        .get_by_id(request.id)
        .await?
        .is_none());

    let notifications = entity::prelude::Notification::find()
        .filter(entity::notification::Column::ReceiverId.eq(client.id))
        .all(db)
        .await?;
    assert_eq!(notifications.len(), 1);
    assert!(notifications[0].message.contains("declined"));

    Ok(())
}

/// Cancelling a rental is terminal.
#[tokio::test]
async fn cancel_sets_terminal_state() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, client, apartment) = factory::helpers::create_booking_dependencies(db).await?;
    let rental = factory::rental::create_rental(db, apartment.id, client.id).await?;

    let service = BookingService::new(db);
    let cancelled = service.cancel_rental(rental.id).await.unwrap();

    assert!(cancelled.cancelled);
    assert!(!cancelled.is_active);

    let stored = RentalRepository::new(db)
        .get_by_id(rental.id)
        .await?
        .unwrap();
    assert!(stored.cancelled);

    Ok(())
}

/// Accepting a missing request surfaces NotFound.
#[tokio::test]
async fn accept_fails_for_missing_request() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = BookingService::new(db);
    let result = service.accept_request(999999).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
