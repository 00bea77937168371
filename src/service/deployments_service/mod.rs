mod deployments_service;
mod deployments_service_impl;

pub use deployments_service::*;
pub use deployments_service_impl::*;
