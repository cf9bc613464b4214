//! Network layer: the REST adapter and the wire DTOs it speaks.

pub mod api;
pub mod types;
