/// Travel concierge core
/// Turns the event list of one agent run into points of interest and reply text.
/// Pure and synchronous: no I/O, safe to call from any number of request tasks.

pub mod aggregator;
pub mod error;
pub mod event;
pub mod place;

pub use aggregator::{aggregate, aggregate_events, AggregationResult};
pub use error::AggregateError;
pub use event::AgentEvent;
pub use place::{Place, PlaceRecord};
