//! Controller layer: UI error modeling and intent queueing between widgets and the catalog.

pub mod events;
pub mod orchestration;
