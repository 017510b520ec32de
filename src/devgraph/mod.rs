//! Developer collaboration graph: one node per author, one unweighted
//! edge per unique co-editing pair.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::error::Error;
use std::fs;
use std::path::Path;

use petgraph::graph::{Graph, NodeIndex, UnGraph};
use serde::Serialize;

use crate::affiliation;
use crate::changelog;
use crate::config::PipelineConfig;
use crate::connect::{self, UniqueConnection};
use crate::graphml;
use crate::stats::{self, ProcessingStatistics};

/// Node payload of the developer graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Developer {
    pub email: String,
    pub affiliation: String,
}

/// Undirected, unweighted. Nodes exist only for emails that appear in
/// at least one unique connection.
pub type DeveloperGraph = UnGraph<Developer, ()>;

/// Build the graph from the deduplicated connection set, resolving each
/// node's affiliation once. In email filtering mode, filtered nodes are
/// removed afterwards together with the isolates that removal creates.
pub fn build(connections: &BTreeSet<UniqueConnection>, config: &PipelineConfig) -> DeveloperGraph {
    let mut graph: DeveloperGraph = Graph::new_undirected();
    let mut nodes: HashMap<String, NodeIndex> = HashMap::new();

    for conn in connections {
        let a = node_for(&mut graph, &mut nodes, &conn.a, config);
        let b = node_for(&mut graph, &mut nodes, &conn.b, config);
        graph.add_edge(a, b, ());
    }

    if let Some(filter) = &config.email_filter {
        remove_filtered_nodes(&mut graph, filter);
    }
    graph
}

fn node_for(
    graph: &mut DeveloperGraph,
    nodes: &mut HashMap<String, NodeIndex>,
    email: &str,
    config: &PipelineConfig,
) -> NodeIndex {
    *nodes.entry(email.to_string()).or_insert_with(|| {
        let affiliation = affiliation::resolve(
            email,
            &config.aggregation,
            config.email_filter.as_ref(),
        );
        graph.add_node(Developer {
            email: email.to_string(),
            affiliation,
        })
    })
}

/// Remove every node whose email is in the filter set, then the nodes
/// that became isolated because of those removals. Nodes that were
/// already isolated beforehand are kept unless filtered directly.
pub fn remove_filtered_nodes(graph: &mut DeveloperGraph, filter: &HashSet<String>) {
    let prior_isolates: HashSet<String> = graph
        .node_indices()
        .filter(|&n| graph.neighbors(n).next().is_none())
        .map(|n| graph[n].email.clone())
        .collect();

    // remove_node swaps in the highest index, so delete in descending order.
    let mut filtered: Vec<NodeIndex> = graph
        .node_indices()
        .filter(|&n| filter.contains(&graph[n].email))
        .collect();
    filtered.sort();
    for idx in filtered.into_iter().rev() {
        graph.remove_node(idx);
    }

    let mut cascaded: Vec<NodeIndex> = graph
        .node_indices()
        .filter(|&n| {
            graph.neighbors(n).next().is_none() && !prior_isolates.contains(&graph[n].email)
        })
        .collect();
    cascaded.sort();
    for idx in cascaded.into_iter().rev() {
        graph.remove_node(idx);
    }
}

/// Run the full changelog → developer-graph pipeline and write GraphML.
pub fn build_from_input(
    changelog_path: Option<&Path>,
    saved_commits: Option<&Path>,
    config: &PipelineConfig,
    statistics: &mut ProcessingStatistics,
) -> Result<DeveloperGraph, Box<dyn Error>> {
    let commits = changelog::load_input(changelog_path, saved_commits, config, statistics)?;
    let index = connect::aggregate(&commits);
    let observed = connect::connections(&index);
    let unique = connect::dedupe(&observed);
    Ok(build(&unique, config))
}

#[derive(Serialize)]
struct GraphSummary<'a> {
    stats: &'a ProcessingStatistics,
    nodes: usize,
    edges: usize,
    output: String,
}

/// Entry point for `tw graph`.
pub fn run(
    changelog_path: Option<&Path>,
    saved_commits: Option<&Path>,
    config: &PipelineConfig,
    output: &Path,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let mut statistics = ProcessingStatistics::default();
    let graph = build_from_input(changelog_path, saved_commits, config, &mut statistics)?;

    let xml = graphml::developer_graphml(&graph);
    fs::write(output, xml)
        .map_err(|e| format!("cannot write graph {}: {e}", output.display()))?;

    if json {
        stats::print_json_stdout(&GraphSummary {
            stats: &statistics,
            nodes: graph.node_count(),
            edges: graph.edge_count(),
            output: output.display().to_string(),
        })?;
    } else {
        statistics.print_summary();
        println!(
            " developer graph: {} nodes, {} edges → {}",
            graph.node_count(),
            graph.edge_count(),
            output.display()
        );
    }
    Ok(())
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
