pub mod discord;
pub mod signature;
