//! Domain entities and pure logic for the blogs domain

pub mod entities;
pub mod stats;
