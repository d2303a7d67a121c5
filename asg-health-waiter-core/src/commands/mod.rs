//! Commands module - service layer for waiting on target group health

mod resolve;
pub(crate) mod service;
mod wait;

pub use service::HealthWaiterService;
