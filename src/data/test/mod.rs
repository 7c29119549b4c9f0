mod apartment;
mod notification;
mod rental;
mod request;
