//! Domain logic: invocation config resolution and message dispatch

pub mod communication;
pub mod invocation;
