use std::collections::BTreeMap;

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

/// Collection envelope: `{message, results}`
#[derive(Debug, Serialize)]
pub struct ListResponse<T: Serialize> {
    pub message: String,
    pub results: T,
}

impl<T: Serialize> ListResponse<T> {
    pub fn new(message: impl Into<String>, results: T) -> Self {
        Self {
            message: message.into(),
            results,
        }
    }
}

/// Single-row envelope: `{message, result}`
#[derive(Debug, Serialize)]
pub struct ItemResponse<T: Serialize> {
    pub message: String,
    pub result: T,
}

impl<T: Serialize> ItemResponse<T> {
    pub fn new(message: impl Into<String>, result: T) -> Self {
        Self {
            message: message.into(),
            result,
        }
    }
}

/// Deletion envelope: `{message, "<entity> delete": row}`
#[derive(Debug, Serialize)]
pub struct DeletedResponse<T: Serialize> {
    pub message: String,
    #[serde(flatten)]
    pub deleted: BTreeMap<String, T>,
}

impl<T: Serialize> DeletedResponse<T> {
    /// `entity` is the lowercase singular name, e.g. `film`
    pub fn new(message: impl Into<String>, entity: &str, row: T) -> Self {
        Self {
            message: message.into(),
            deleted: BTreeMap::from([(format!("{} delete", entity), row)]),
        }
    }
}

/// Created response helper: serializes the body with status 201
pub struct Created<T: Serialize>(pub T);

impl<T: Serialize> IntoResponse for Created<T> {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::CREATED, Json(self.0)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deleted_row_is_keyed_by_entity() {
        let body = DeletedResponse::new("Film deleted", "film", json!({"id": 1, "name": "A New Hope"}));

        assert_eq!(
            serde_json::to_value(body).unwrap(),
            json!({
                "message": "Film deleted",
                "film delete": {"id": 1, "name": "A New Hope"}
            })
        );
    }

    #[test]
    fn created_sets_status_201() {
        let response = Created(ItemResponse::new("done", 1)).into_response();
        assert_eq!(response.status(), StatusCode::CREATED);
    }
}
