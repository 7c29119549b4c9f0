pub use super::apartment::Entity as Apartment;
pub use super::notification::Entity as Notification;
pub use super::rental::Entity as Rental;
pub use super::rental_request::Entity as RentalRequest;
pub use super::user::Entity as User;
