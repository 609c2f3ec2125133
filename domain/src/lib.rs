pub mod operator_role;
pub mod ports;
