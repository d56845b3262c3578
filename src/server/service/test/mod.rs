mod booking;
mod credential;
mod link;
mod user;
