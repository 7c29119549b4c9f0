use super::*;

/// Tests deleting a request.
///
/// Expected: request absent from the store afterwards
#[tokio::test]
async fn removes_request() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, client, apartment) = factory::helpers::create_booking_dependencies(db).await?;
    let request = factory::request::create_request(db, apartment.id, client.id).await?;

    let repo = RequestRepository::new(db);
    repo.delete(request.id).await?;

    assert!(repo.get_by_id(request.id).await?.is_none());

    Ok(())
}
