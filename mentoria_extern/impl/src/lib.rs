pub mod delivery;
pub mod http;
