pub mod use_api;
pub mod use_remote;
pub mod use_route;
