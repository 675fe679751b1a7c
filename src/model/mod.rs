//! Request and response bodies exchanged over the HTTP API.
//!
//! Every response view is a fixed-shape struct. Summary views carry no association
//! fields, which is what keeps nested projections from looping back on themselves.

pub mod api;
pub mod pizza;
pub mod restaurant;
pub mod restaurant_pizza;

use serde::{Deserialize, Deserializer};

/// Deserializes a field that was present in the body, keeping an explicit `null` as `Some(None)`.
///
/// Paired with `#[serde(default)]` so an absent field stays `None`, which lets partial
/// updates tell "clear this value" apart from "leave it unchanged".
fn deserialize_present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}
