//! Response-shape negotiation for list endpoints.
//!
//! `GET /usuarios` has been seen answering with a bare array or with the list
//! wrapped under `usuarios` or `clientes`. Shapes are tried in order and the
//! first one that matches wins.

use serde::de::DeserializeOwned;
use serde_json::Value;

use skypass_core::UserRecord;

use crate::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListShape {
    /// `{ "<key>": [...] }` with a non-null value under `key`.
    Wrapped(&'static str),
    /// `[...]`
    BareArray,
}

/// Strategies for the user list, in priority order.
pub const USER_LIST_SHAPES: &[ListShape] = &[
    ListShape::Wrapped("usuarios"),
    ListShape::Wrapped("clientes"),
    ListShape::BareArray,
];

impl ListShape {
    fn extract<'a>(&self, body: &'a Value) -> Option<&'a Value> {
        match self {
            ListShape::Wrapped(key) => body.get(key).filter(|v| !v.is_null()),
            ListShape::BareArray => body.is_array().then_some(body),
        }
    }
}

/// First shape in `shapes` that matches `body`, with the list it selects.
pub fn negotiate<'a>(body: &'a Value, shapes: &[ListShape]) -> Option<(ListShape, &'a Value)> {
    shapes
        .iter()
        .find_map(|shape| shape.extract(body).map(|list| (*shape, list)))
}

/// Decode a list body. A `null` body is an empty list; any other body that no
/// shape recognises is a parse error.
pub fn extract_list<T: DeserializeOwned>(body: Value, shapes: &[ListShape]) -> Result<Vec<T>, ApiError> {
    if body.is_null() {
        return Ok(Vec::new());
    }

    let Some((shape, list)) = negotiate(&body, shapes) else {
        return Err(ApiError::Parse("unrecognized list response shape".to_string()));
    };
    tracing::debug!(?shape, "negotiated list response shape");

    serde_json::from_value(list.clone()).map_err(|e| ApiError::Parse(e.to_string()))
}

pub fn extract_users(body: Value) -> Result<Vec<UserRecord>, ApiError> {
    extract_list(body, USER_LIST_SHAPES)
}
