//! Data models for the PLU catalog.

pub mod produce;

pub use produce::ProduceItem;
