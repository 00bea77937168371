pub mod application;
pub mod dto;
pub mod embed;
pub mod error;
pub mod routing;
pub mod service;
