//! Screen implementations

pub mod helpers;
pub mod register;
