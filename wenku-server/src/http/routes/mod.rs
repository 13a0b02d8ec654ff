//! Route handlers organized by content domain

pub mod astronomy;
pub mod calendar;
pub mod counter;
pub mod culture;
pub mod etymology;
pub mod health;
pub mod index;
pub mod poetry;
pub mod seed;

use serde::Serialize;

/// Response of every `add` endpoint
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: i64,
}

/// Treat an empty query value the same as an absent one.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_values_count_as_absent() {
        assert_eq!(non_empty(Some(String::new())), None);
        assert_eq!(non_empty(None), None);
        assert_eq!(non_empty(Some("李白".into())), Some("李白".into()));
    }
}
