use crate::Item;

/// Result of one fetch attempt, kept at the rank of the id it was fetched for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<E> {
    Success(Item),
    Failure(E),
}

impl<E> Outcome<E> {
    pub fn item(&self) -> Option<&Item> {
        match self {
            Outcome::Success(item) => Some(item),
            Outcome::Failure(_) => None,
        }
    }

    pub fn error(&self) -> Option<&E> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(err) => Some(err),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }
}

impl<E> From<Result<Item, E>> for Outcome<E> {
    fn from(result: Result<Item, E>) -> Self {
        match result {
            Ok(item) => Outcome::Success(item),
            Err(err) => Outcome::Failure(err),
        }
    }
}
