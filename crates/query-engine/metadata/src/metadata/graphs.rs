//! Graph definitions: which metrics are displayed together, and how they are labeled.

use std::collections::BTreeMap;

use pg_query_metrics_configuration::QueryDefinition;
use serde::Serialize;

/// Graph metadata keyed by graph key.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize)]
pub struct GraphDefinitions(pub BTreeMap<String, Graph>);

/// One graph: a label, a unit, and the metrics plotted on it.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct Graph {
    pub label: String,
    pub unit: String,
    pub metrics: Vec<Metric>,
}

/// A metric shown on a graph, by its snapshot name.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct Metric {
    pub name: String,
    pub label: String,
}

impl GraphDefinitions {
    pub fn empty() -> Self {
        GraphDefinitions(BTreeMap::new())
    }

    pub fn get(&self, key: &str) -> Option<&Graph> {
        self.0.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Graph)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Derive the graph definitions of a configuration.
///
/// Every definition produces a graph under its key holding exactly its own metric. When two
/// definitions share a key, the later one replaces the earlier graph. This never touches the
/// database.
pub fn build_graph_definitions(definitions: &[QueryDefinition]) -> GraphDefinitions {
    GraphDefinitions(
        definitions
            .iter()
            .map(|definition| {
                (
                    definition.key.clone(),
                    Graph {
                        label: definition.label.clone(),
                        unit: definition.unit.clone(),
                        metrics: vec![Metric {
                            name: definition.metric_name.clone(),
                            label: definition.metric_label.clone(),
                        }],
                    },
                )
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pg_query_metrics_configuration::QuerySource;
    use similar_asserts::assert_eq;

    fn definition(key: &str, metric_name: &str) -> QueryDefinition {
        QueryDefinition {
            key: key.into(),
            label: format!("{key} label"),
            metric_name: metric_name.into(),
            metric_label: format!("{metric_name} label"),
            unit: "integer".into(),
            source: QuerySource::Sql("SELECT 1".into()),
        }
    }

    #[test]
    fn one_graph_per_definition() {
        let graphs = build_graph_definitions(&[
            definition("connections", "connections"),
            definition("errors", "errors"),
        ]);

        insta::assert_json_snapshot!(graphs, @r###"
        {
          "connections": {
            "label": "connections label",
            "unit": "integer",
            "metrics": [
              {
                "name": "connections",
                "label": "connections label"
              }
            ]
          },
          "errors": {
            "label": "errors label",
            "unit": "integer",
            "metrics": [
              {
                "name": "errors",
                "label": "errors label"
              }
            ]
          }
        }
        "###);
    }

    #[test]
    fn later_definition_replaces_graph_with_same_key() {
        let graphs = build_graph_definitions(&[
            definition("activity", "active"),
            definition("activity", "idle"),
        ]);

        assert_eq!(graphs.len(), 1);
        assert_eq!(
            graphs.get("activity").map(|graph| graph.metrics.clone()),
            Some(vec![Metric {
                name: "idle".into(),
                label: "idle label".into(),
            }])
        );
    }

    #[test]
    fn single_query_mode_yields_one_graph() {
        let mut single = definition("custom", "value");
        single.source = QuerySource::Select {
            column: "count(*)".into(),
            table: "pg_stat_activity".into(),
            condition: None,
        };

        let graphs = build_graph_definitions(&[single]);

        assert_eq!(graphs.len(), 1);
        assert_eq!(graphs.get("custom").map(|graph| graph.metrics.len()), Some(1));
    }

    #[test]
    fn empty_key_produces_a_degenerate_graph() {
        let graphs = build_graph_definitions(&[definition("", "value")]);

        assert!(graphs.get("").is_some());
    }

    #[test]
    fn building_is_repeatable() {
        let definitions = vec![definition("a", "a"), definition("b", "b")];

        assert_eq!(
            build_graph_definitions(&definitions),
            build_graph_definitions(&definitions)
        );
    }

    #[test]
    fn no_definitions_no_graphs() {
        assert_eq!(build_graph_definitions(&[]), GraphDefinitions::empty());
    }
}
