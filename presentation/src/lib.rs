pub mod api;
pub mod application_ports;
