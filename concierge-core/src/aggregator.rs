/// Response aggregation for one agent run
///
/// Single forward pass over the events: places from state deltas and reply
/// text from content parts are appended in event order, then part order.
/// Duplicates are kept; an agent that sets the same `poi` twice yields the
/// same places twice.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::AggregateError;
use crate::event::AgentEvent;
use crate::place::Place;

/// Flattened result of one agent run, serialized as `{"reply": [...], "text": [...]}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregationResult {
    #[serde(rename = "reply")]
    pub places: Vec<Place>,
    #[serde(rename = "text")]
    pub texts: Vec<String>,
}

impl AggregationResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one event into the result
    pub fn absorb(&mut self, event: &Value) {
        let event = AgentEvent::new(event);
        self.places
            .extend(event.places().iter().cloned().map(Place::from_value));
        self.texts.extend(event.texts().map(str::to_string));
    }

    /// All reply fragments concatenated without a separator
    pub fn joined_text(&self) -> String {
        self.texts.concat()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty() && self.texts.is_empty()
    }
}

/// Aggregate the raw body returned by the agent runtime.
///
/// Fails only when the top level is not an array.
pub fn aggregate(events: &Value) -> Result<AggregationResult, AggregateError> {
    match events {
        Value::Array(events) => Ok(aggregate_events(events)),
        other => Err(AggregateError::InvalidInput {
            found: json_type_name(other),
        }),
    }
}

pub fn aggregate_events(events: &[Value]) -> AggregationResult {
    events
        .iter()
        .fold(AggregationResult::new(), |mut result, event| {
            result.absorb(event);
            result
        })
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
