//! Opaque pagination cursors
//!
//! A cursor pins the last-seen position in a collection's ordering
//! (`create_time` descending, then id). It is serialized to an opaque
//! base64 token so callers cannot depend on its structure, and it
//! carries the collection name so a token cannot be replayed against a
//! different collection.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

use super::{StoreError, StoreResult};

/// Position of the last item of a delivered page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageCursor {
    pub collection: String,
    /// Raw `create_time` value of the last item (empty if unset)
    pub create_time: String,
    pub id: String,
}

impl PageCursor {
    pub fn new(collection: &str, create_time: &str, id: &str) -> Self {
        Self {
            collection: collection.to_string(),
            create_time: create_time.to_string(),
            id: id.to_string(),
        }
    }

    /// Encode into the opaque token handed to clients
    pub fn encode(&self) -> String {
        let raw = format!("{}\n{}\n{}", self.collection, self.create_time, self.id);
        URL_SAFE_NO_PAD.encode(raw.as_bytes())
    }

    /// Decode a client-supplied token, validating it against the
    /// collection being paged
    pub fn decode(token: &str, expected_collection: &str) -> StoreResult<Self> {
        let raw = URL_SAFE_NO_PAD
            .decode(token.as_bytes())
            .map_err(|_| StoreError::InvalidCursor(token.to_string()))?;
        let raw = String::from_utf8(raw)
            .map_err(|_| StoreError::InvalidCursor(token.to_string()))?;

        let mut parts = raw.splitn(3, '\n');
        let (Some(collection), Some(create_time), Some(id)) =
            (parts.next(), parts.next(), parts.next())
        else {
            return Err(StoreError::InvalidCursor(token.to_string()));
        };

        if collection != expected_collection {
            return Err(StoreError::InvalidCursor(format!(
                "cursor belongs to collection '{collection}', not '{expected_collection}'"
            )));
        }

        Ok(Self::new(collection, create_time, id))
    }
}
