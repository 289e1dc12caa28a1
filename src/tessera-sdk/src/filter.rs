use serde::Serialize;
use serde_json::Value;

/// Relation-inclusion payload the API accepts in its `filter` query parameter
///
/// Serialises to the JSON the server expects, e.g.
/// `{"include":[{"relation":"currencies","scope":{"order":"priority ASC"}}]}`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Filter {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    include: Vec<Include>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a relation to expand
    #[must_use]
    pub fn include(mut self, include: Include) -> Self {
        self.include.push(include);
        self
    }

    /// JSON string for the `filter` query parameter
    pub(crate) fn to_query(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// One relation expansion, with an optional nested scope
#[derive(Debug, Clone, Serialize)]
pub struct Include {
    relation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    scope: Option<Scope>,
}

#[derive(Debug, Clone, Default, Serialize)]
struct Scope {
    #[serde(rename = "where", skip_serializing_if = "Option::is_none")]
    where_clause: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    order: Option<String>,
}

impl Include {
    /// Expand the named relation
    pub fn relation(name: impl Into<String>) -> Self {
        Self {
            relation: name.into(),
            scope: None,
        }
    }

    /// Constrain the expanded relation (e.g. `json!({"primary": true})`)
    #[must_use]
    pub fn where_clause(mut self, clause: Value) -> Self {
        self.scope.get_or_insert_with(Scope::default).where_clause = Some(clause);
        self
    }

    /// Order the expanded relation (e.g. `"priority ASC"`)
    #[must_use]
    pub fn order(mut self, order: impl Into<String>) -> Self {
        self.scope.get_or_insert_with(Scope::default).order = Some(order.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bare_relation_serialises_without_scope() {
        let filter = Filter::new().include(Include::relation("network"));
        assert_eq!(
            filter.to_query().unwrap(),
            r#"{"include":[{"relation":"network"}]}"#
        );
    }

    #[test]
    fn where_clause_nests_under_scope() {
        let filter = Filter::new()
            .include(Include::relation("people"))
            .include(Include::relation("wallets").where_clause(json!({"primary": true})));
        assert_eq!(
            filter.to_query().unwrap(),
            r#"{"include":[{"relation":"people"},{"relation":"wallets","scope":{"where":{"primary":true}}}]}"#
        );
    }

    #[test]
    fn order_nests_under_scope() {
        let filter = Filter::new().include(Include::relation("currencies").order("priority ASC"));
        assert_eq!(
            filter.to_query().unwrap(),
            r#"{"include":[{"relation":"currencies","scope":{"order":"priority ASC"}}]}"#
        );
    }

    #[test]
    fn empty_filter_serialises_to_empty_object() {
        assert_eq!(Filter::new().to_query().unwrap(), "{}");
    }
}
