pub mod prelude;

pub mod apartment;
pub mod notification;
pub mod rental;
pub mod rental_request;
pub mod user;
