//! Query parameters
//!
//! Filter and list requests travel as query parameters named after the fields
//! of the record that produced them. Unset fields are never sent.

/// Ordered list of query parameters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query(Vec<(&'static str, String)>);

impl Query {
    /// Create an empty query
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a text parameter, skipping `None` and empty strings
    pub fn text(mut self, key: &'static str, value: Option<&str>) -> Self {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            self.0.push((key, value.to_string()));
        }
        self
    }

    /// Add a numeric parameter, skipping `None`
    pub fn number(mut self, key: &'static str, value: Option<i64>) -> Self {
        if let Some(value) = value {
            self.0.push((key, value.to_string()));
        }
        self
    }

    /// The parameters in insertion order
    pub fn pairs(&self) -> &[(&'static str, String)] {
        &self.0
    }

    /// Look up a parameter by name
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Types that can be sent as query parameters
pub trait ToQuery {
    fn to_query(&self) -> Query;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_values_are_skipped() {
        let query = Query::new()
            .text("email", None)
            .text("user_id", Some(""))
            .number("page", None);
        assert!(query.is_empty());
    }

    #[test]
    fn test_pairs_keep_insertion_order() {
        let query = Query::new()
            .number("page", Some(2))
            .text("tag_id", Some("t1"));
        assert_eq!(
            query.pairs(),
            &[("page", "2".to_string()), ("tag_id", "t1".to_string())]
        );
        assert_eq!(query.get("tag_id"), Some("t1"));
        assert_eq!(query.get("segment_id"), None);
    }
}
