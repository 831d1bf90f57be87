//! Background services.

pub mod broadcast;

pub use broadcast::BroadcastWorker;
