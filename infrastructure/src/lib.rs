pub mod database;
pub mod discord;
pub mod operator_role;
pub mod signature;
