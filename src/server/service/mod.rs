pub mod booking;
pub mod car;
pub mod credential;
pub mod link;
pub mod manager;
pub mod user;

#[cfg(test)]
mod test;
