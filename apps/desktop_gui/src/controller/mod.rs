//! Controller layer: notice classification and dispatch of queued UI actions.

pub mod events;
pub mod orchestration;
