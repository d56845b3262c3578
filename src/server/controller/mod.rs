pub mod booking;
pub mod car;
pub mod manager;
pub mod user;
