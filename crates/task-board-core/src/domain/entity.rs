//! Domain Layer - Core Entity Trait
//!
//! This trait defines the basic contract for all domain entities,
//! plus the error type shared by every layer.

/// Core trait for all domain entities
pub trait Entity: Sized + Clone {
    /// The type of the entity's unique identifier
    type Id: Copy + Eq + std::hash::Hash;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}

/// Index of the entity with `id`, if present
pub fn position_of<E: Entity>(items: &[E], id: E::Id) -> Option<usize> {
    items.iter().position(|item| item.id() == id)
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
///
/// Two families matter to callers: validation failures (blocked before any
/// request is sent) and request failures (transport, non-2xx, bad payload).
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Request {endpoint} failed: {source}")]
    Http {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Request {endpoint} returned {status}: {body}")]
    Api {
        endpoint: String,
        status: u16,
        body: String,
    },

    #[error("Could not decode response of {endpoint}: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct Tag(u8);

    impl Entity for Tag {
        type Id = u8;

        fn id(&self) -> u8 {
            self.0
        }
    }

    #[test]
    fn test_position_of() {
        let tags = [Tag(4), Tag(9), Tag(2)];
        assert_eq!(position_of(&tags, 9), Some(1));
        assert_eq!(position_of(&tags, 7), None);
    }

    #[test]
    fn test_error_messages() {
        let api = DomainError::Api {
            endpoint: "GET /".into(),
            status: 500,
            body: "boom".into(),
        };
        assert_eq!(api.to_string(), "Request GET / returned 500: boom");
    }
}
