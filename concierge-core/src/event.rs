/// Read-only view over one event of an agent run
///
/// Every accessor walks the loosely-typed JSON with optional chaining: a
/// missing key or an unexpected type at any step yields an empty result
/// instead of an error.

use serde_json::Value;

#[derive(Debug, Clone, Copy)]
pub struct AgentEvent<'a> {
    raw: &'a Value,
}

impl<'a> AgentEvent<'a> {
    pub fn new(raw: &'a Value) -> Self {
        Self { raw }
    }

    /// Places from `actions.stateDelta.poi.places`
    pub fn places(&self) -> &'a [Value] {
        self.place_list().map(Vec::as_slice).unwrap_or(&[])
    }

    /// String `text` values of `content.parts`, in part order
    pub fn texts(&self) -> impl Iterator<Item = &'a str> + 'a {
        self.parts()
            .iter()
            .filter_map(|part| part.get("text").and_then(Value::as_str))
    }

    /// Tool names from `content.parts[].functionCall.name`
    pub fn function_call_names(&self) -> impl Iterator<Item = &'a str> + 'a {
        self.parts().iter().filter_map(|part| {
            part.get("functionCall")?
                .as_object()?
                .get("name")?
                .as_str()
        })
    }

    pub fn author(&self) -> Option<&'a str> {
        self.raw.get("author").and_then(Value::as_str)
    }

    fn place_list(&self) -> Option<&'a Vec<Value>> {
        self.raw
            .as_object()?
            .get("actions")?
            .as_object()?
            .get("stateDelta")?
            .as_object()?
            .get("poi")?
            .as_object()?
            .get("places")?
            .as_array()
    }

    fn parts(&self) -> &'a [Value] {
        self.raw
            .get("content")
            .and_then(Value::as_object)
            .and_then(|content| content.get("parts"))
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
