//! Rendering for the monitoring agent: tab-separated metric lines, or the graph
//! definition document.

use std::collections::BTreeMap;
use std::io::Write;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;

use query_engine_execution::MetricSnapshot;
use query_engine_metadata::metadata::{Graph, GraphDefinitions};

use crate::plugin::MetricsPlugin;

/// Set by the agent when it wants graph definitions instead of values.
pub const PLUGIN_META_VARIABLE: &str = "MACKEREL_AGENT_PLUGIN_META";
pub const PLUGIN_META_HEADER: &str = "# mackerel-agent-plugin";

/// What one invocation prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Metrics,
    GraphDefinitions,
}

impl OutputMode {
    pub fn from_environment() -> Self {
        Self::from_meta_variable(std::env::var(PLUGIN_META_VARIABLE).ok().as_deref())
    }

    /// Graph definitions when the variable is set to any non-empty value.
    pub fn from_meta_variable(value: Option<&str>) -> Self {
        match value {
            None | Some("") => OutputMode::Metrics,
            Some(_) => OutputMode::GraphDefinitions,
        }
    }
}

#[derive(Serialize)]
struct PluginMeta<'a> {
    graphs: BTreeMap<String, &'a Graph>,
}

/// Write one `<prefix>.<key>.<metric>\t<value>\t<timestamp>` line per graphed metric that has
/// a value in `snapshot`.
pub fn render_metrics(
    out: &mut impl Write,
    prefix: &str,
    graphs: &GraphDefinitions,
    snapshot: &MetricSnapshot,
    timestamp: u64,
) -> std::io::Result<()> {
    for (key, graph) in graphs.iter() {
        for metric in &graph.metrics {
            if let Some(value) = snapshot.get(&metric.name) {
                writeln!(
                    out,
                    "{prefix}.{key}.{name}\t{value:.6}\t{timestamp}",
                    name = metric.name
                )?;
            }
        }
    }
    Ok(())
}

/// Write the header line followed by the graph definitions as JSON, with every graph key
/// prefixed.
pub fn render_graph_definitions(
    out: &mut impl Write,
    prefix: &str,
    graphs: &GraphDefinitions,
) -> anyhow::Result<()> {
    let meta = PluginMeta {
        graphs: graphs
            .iter()
            .map(|(key, graph)| (format!("{prefix}.{key}"), graph))
            .collect(),
    };
    writeln!(out, "{PLUGIN_META_HEADER}")?;
    serde_json::to_writer(&mut *out, &meta)?;
    writeln!(out)?;
    Ok(())
}

/// Run one invocation of `plugin` and print its result.
pub async fn emit<P: MetricsPlugin + Sync>(
    plugin: &P,
    mode: OutputMode,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let graphs = plugin.graph_definitions();
    match mode {
        OutputMode::GraphDefinitions => {
            render_graph_definitions(out, plugin.metric_key_prefix(), &graphs)?;
        }
        OutputMode::Metrics => {
            let snapshot = plugin.fetch_metrics().await?;
            let timestamp = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|elapsed| elapsed.as_secs())
                .unwrap_or_default();
            render_metrics(
                out,
                plugin.metric_key_prefix(),
                &graphs,
                &snapshot,
                timestamp,
            )?;
        }
    }
    out.flush()?;
    Ok(())
}
