//! Load Bar State
//!
//! Title filter typed above the columns.

use crate::domain::DomainResult;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoadQuery {
    pub text: String,
}

impl LoadQuery {
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Apply the outcome of a load: success empties the input, failure
    /// leaves it for another try.
    pub fn settle<T>(&mut self, result: &DomainResult<T>) {
        if result.is_ok() {
            self.text.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;

    #[test]
    fn test_settle() {
        let mut query = LoadQuery { text: "Groceries".into() };
        query.settle::<()>(&Err(DomainError::NotFound("board".into())));
        assert_eq!(query.text(), "Groceries");

        query.settle(&Ok(()));
        assert_eq!(query, LoadQuery::default());
    }
}
