//! Data Transfer Objects - request/response types for the API.
//!
//! Field names are camelCase on the wire.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use validator::{Validate, ValidationError};

/// Request to create a blog post.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(custom(function = "not_blank"), length(max = 50))]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(custom(function = "not_blank"), length(max = 100))]
    pub content: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(custom(function = "not_blank"), length(max = 30))]
    pub author: String,
    #[serde(default)]
    pub is_published: bool,
}

/// Request to replace the mutable fields of an existing blog post.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePostRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(custom(function = "not_blank"), length(max = 50))]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(custom(function = "not_blank"), length(max = 100))]
    pub content: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(custom(function = "not_blank"), length(max = 30))]
    pub author: String,
    #[serde(default)]
    pub published_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_published: bool,
}

/// Full read projection of a blog post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created_date: DateTime<Utc>,
    pub updated_date: Option<DateTime<Utc>>,
    pub published_date: Option<DateTime<Utc>>,
    pub is_published: bool,
}

/// Reads an explicit JSON `null` as an empty string, so it fails the
/// required check like a missing field does.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Rejects empty and whitespace-only strings.
fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create(title: &str) -> CreatePostRequest {
        CreatePostRequest {
            title: title.to_string(),
            content: "Some content".to_string(),
            author: "John Doe".to_string(),
            is_published: false,
        }
    }

    #[test]
    fn test_create_request_within_limits_is_valid() {
        assert!(create(&"a".repeat(50)).validate().is_ok());
    }

    #[test]
    fn test_create_request_rejects_long_title() {
        let errors = create(&"a".repeat(51)).validate().unwrap_err();
        let fields = errors.field_errors();
        assert_eq!(fields.len(), 1);
        assert_eq!(fields["title"][0].code, "length");
    }

    #[test]
    fn test_create_request_rejects_blank_title() {
        let errors = create("   ").validate().unwrap_err();
        assert_eq!(errors.field_errors()["title"][0].code, "required");
    }

    #[test]
    fn test_update_request_validates_each_field() {
        let request = UpdatePostRequest {
            title: String::new(),
            content: "c".repeat(101),
            author: "a".repeat(31),
            published_date: None,
            is_published: true,
        };

        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();
        assert_eq!(fields.len(), 3);
        assert!(fields.contains_key("title"));
        assert!(fields.contains_key("content"));
        assert!(fields.contains_key("author"));
    }

    #[test]
    fn test_missing_fields_deserialize_to_defaults() {
        let request: CreatePostRequest = serde_json::from_str(r#"{"title":"Hello"}"#).unwrap();
        assert_eq!(request.content, "");
        assert!(!request.is_published);
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_null_fields_deserialize_to_empty() {
        let request: UpdatePostRequest =
            serde_json::from_str(r#"{"title":null,"content":"Body","author":null}"#).unwrap();
        assert_eq!(request.title, "");
        assert_eq!(request.author, "");

        let errors = request.validate().unwrap_err();
        assert_eq!(errors.field_errors()["title"][0].code, "required");
    }

    #[test]
    fn test_response_uses_camel_case() {
        let response = PostResponse {
            id: 7,
            title: "t".to_string(),
            content: "c".to_string(),
            author: "a".to_string(),
            created_date: Utc::now(),
            updated_date: None,
            published_date: None,
            is_published: true,
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["isPublished"], true);
        assert!(json.get("createdDate").is_some());
        assert!(json["updatedDate"].is_null());
    }
}
