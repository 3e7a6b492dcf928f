use serde::{Deserialize, Deserializer, Serialize};

use crate::api::errors::TodoApiError;
use crate::models::todo_model::Todo;

/// `null` and a missing field both read as the type's default
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Deserialize, Serialize)]
pub struct CreateTodoDTO {
    #[serde(default, deserialize_with = "null_as_default")]
    pub subject: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
}

impl CreateTodoDTO {
    pub fn validate(&self) -> Result<(), TodoApiError> {
        if self.subject.is_empty() {
            return Err(TodoApiError::BadRequest("subject is required".into()));
        }

        Ok(())
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct CreateTodoResponseDTO {
    pub todo: Todo,
}

#[derive(Debug, PartialEq)]
pub struct ReadTodoDTO {
    pub prev_id: Option<i64>,
    /// Zero means "use the default page size"
    pub size: i64,
}

/// Built from the raw `GET /todos` query pairs. Values that aren't numbers
/// read as "not given" and the first numeric value of a repeated key wins,
/// so a query string never rejects the request.
impl From<Vec<(String, String)>> for ReadTodoDTO {
    fn from(pairs: Vec<(String, String)>) -> Self {
        let first = |key: &str| -> Option<i64> {
            pairs
                .iter()
                .filter(|(name, _)| name == key)
                .find_map(|(_, value)| value.trim().parse().ok())
        };

        Self {
            prev_id: first("prev_id").filter(|prev_id| *prev_id > 0),
            size: first("size").unwrap_or(0),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ReadTodoResponseDTO {
    pub todos: Vec<Todo>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct UpdateTodoDTO {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub subject: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
}

impl UpdateTodoDTO {
    pub fn validate(&self) -> Result<(), TodoApiError> {
        if self.subject.is_empty() {
            return Err(TodoApiError::BadRequest("subject is required".into()));
        }

        if self.id == 0 {
            return Err(TodoApiError::BadRequest("id is required".into()));
        }

        Ok(())
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct UpdateTodoResponseDTO {
    pub todo: Todo,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct DeleteTodoDTO {
    #[serde(default, deserialize_with = "null_as_default")]
    pub ids: Vec<i64>,
}

impl DeleteTodoDTO {
    pub fn validate(&self) -> Result<(), TodoApiError> {
        if self.ids.is_empty() {
            return Err(TodoApiError::BadRequest("ids must not be empty".into()));
        }

        Ok(())
    }
}

/// Serializes as `{}`
#[derive(Debug, Deserialize, Serialize)]
pub struct DeleteTodoResponseDTO {}

#[cfg(test)]
mod test {
    use super::{CreateTodoDTO, DeleteTodoDTO, ReadTodoDTO, UpdateTodoDTO};

    fn query(prev_id: Option<&str>, size: Option<&str>) -> ReadTodoDTO {
        let mut pairs = Vec::new();

        if let Some(prev_id) = prev_id {
            pairs.push(("prev_id".to_string(), prev_id.to_string()));
        }
        if let Some(size) = size {
            pairs.push(("size".to_string(), size.to_string()));
        }

        pairs.into()
    }

    #[test]
    fn test_read_query_is_lenient() {
        assert_eq!(
            query(None, None),
            ReadTodoDTO {
                prev_id: None,
                size: 0
            }
        );
        assert_eq!(
            query(Some("12"), Some("3")),
            ReadTodoDTO {
                prev_id: Some(12),
                size: 3
            }
        );
        assert_eq!(
            query(Some("abc"), Some("")),
            ReadTodoDTO {
                prev_id: None,
                size: 0
            }
        );
        assert_eq!(query(Some("0"), None).prev_id, None);
        assert_eq!(query(Some("-4"), None).prev_id, None);
    }

    #[test]
    fn test_repeated_query_keys() {
        let pairs = vec![
            ("size".to_string(), "1".to_string()),
            ("size".to_string(), "2".to_string()),
            ("prev_id".to_string(), "x".to_string()),
            ("prev_id".to_string(), "9".to_string()),
        ];

        assert_eq!(
            ReadTodoDTO::from(pairs),
            ReadTodoDTO {
                prev_id: Some(9),
                size: 1
            }
        );
    }

    #[test]
    fn test_null_fields_default() {
        let create: CreateTodoDTO =
            serde_json::from_str(r#"{"subject": "buy milk", "description": null}"#).unwrap();
        assert_eq!(create.description, "");
        assert!(create.validate().is_ok());

        let update: UpdateTodoDTO =
            serde_json::from_str(r#"{"id": 3, "subject": "buy milk", "description": null}"#)
                .unwrap();
        assert_eq!(update.description, "");
        assert!(update.validate().is_ok());

        let delete: DeleteTodoDTO = serde_json::from_str(r#"{"ids": null}"#).unwrap();
        assert!(delete.validate().is_err());
    }

    #[test]
    fn test_missing_fields_default() {
        let create: CreateTodoDTO = serde_json::from_str(r#"{"subject": "buy milk"}"#).unwrap();
        assert_eq!(create.description, "");
        assert!(create.validate().is_ok());

        let update: UpdateTodoDTO = serde_json::from_str(r#"{"subject": "buy milk"}"#).unwrap();
        assert_eq!(update.id, 0);
        assert!(update.validate().is_err());

        let delete: DeleteTodoDTO = serde_json::from_str("{}").unwrap();
        assert!(delete.ids.is_empty());
        assert!(delete.validate().is_err());
    }

    #[test]
    fn test_empty_subject_rejected() {
        let create = CreateTodoDTO {
            subject: String::new(),
            description: "whatever".into(),
        };
        assert!(create.validate().is_err());

        let update = UpdateTodoDTO {
            id: 1,
            subject: String::new(),
            description: String::new(),
        };
        assert!(update.validate().is_err());
    }
}
