//! Domain layer - entities, value objects, and domain errors.

pub mod foundation;
pub mod purchase;
