use crate::types::DbId;
use crate::validation::FieldViolation;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} not found with id: {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {}", summarize(.0))]
    Validation(Vec<FieldViolation>),

    #[error("Storage error: {0}")]
    Storage(String),
}

fn summarize(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| v.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_entity_and_id() {
        let err = CoreError::NotFound {
            entity: "Hotel",
            id: 99,
        };
        assert_eq!(err.to_string(), "Hotel not found with id: 99");
    }

    #[test]
    fn validation_message_joins_violations() {
        let err = CoreError::Validation(vec![
            FieldViolation::new("name", "name must not be blank"),
            FieldViolation::new("stars", "stars must be between 1 and 5"),
        ]);
        assert_eq!(
            err.to_string(),
            "Validation failed: name must not be blank; stars must be between 1 and 5"
        );
    }
}
