//! Organization roll-up: project the developer graph onto affiliations.
//!
//! Intra-organization edges vanish; each cross-organization developer
//! edge adds 1 to the weight of its affiliation pair. Organizations with
//! no surviving inter-org edge do not appear at all (nodes are implicit
//! from edges).

use std::collections::{BTreeMap, HashMap};
use std::error::Error;
use std::fs;
use std::path::Path;

use petgraph::graph::{Graph, NodeIndex, UnGraph};
use serde::Serialize;

use crate::config::PipelineConfig;
use crate::devgraph::{self, DeveloperGraph};
use crate::graphml;
use crate::stats::{self, ProcessingStatistics};

/// Undirected; node payload is the affiliation name, edge weight the
/// number of developer edges crossing that organization pair.
pub type OrganizationGraph = UnGraph<String, usize>;

pub fn rollup(dev: &DeveloperGraph) -> OrganizationGraph {
    // Accumulate weights under an order-independent (sorted) pair key.
    let mut weights: BTreeMap<(String, String), usize> = BTreeMap::new();
    for edge in dev.edge_indices() {
        let Some((u, v)) = dev.edge_endpoints(edge) else {
            continue;
        };
        let a = &dev[u].affiliation;
        let b = &dev[v].affiliation;
        if a == b {
            continue;
        }
        let key = if a <= b {
            (a.clone(), b.clone())
        } else {
            (b.clone(), a.clone())
        };
        *weights.entry(key).or_insert(0) += 1;
    }

    let mut graph: OrganizationGraph = Graph::new_undirected();
    let mut nodes: HashMap<String, NodeIndex> = HashMap::new();
    for ((a, b), weight) in weights {
        let na = *nodes
            .entry(a.clone())
            .or_insert_with(|| graph.add_node(a.clone()));
        let nb = *nodes
            .entry(b.clone())
            .or_insert_with(|| graph.add_node(b.clone()));
        graph.add_edge(na, nb, weight);
    }
    graph
}

#[derive(Serialize)]
struct OrgSummary<'a> {
    stats: &'a ProcessingStatistics,
    developer_nodes: usize,
    developer_edges: usize,
    organization_nodes: usize,
    organization_edges: usize,
    output: String,
}

/// Entry point for `tw orgs`.
pub fn run(
    changelog_path: Option<&Path>,
    saved_commits: Option<&Path>,
    config: &PipelineConfig,
    output: &Path,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let mut statistics = ProcessingStatistics::default();
    let dev = devgraph::build_from_input(changelog_path, saved_commits, config, &mut statistics)?;
    let orgs = rollup(&dev);

    let xml = graphml::organization_graphml(&orgs);
    fs::write(output, xml)
        .map_err(|e| format!("cannot write graph {}: {e}", output.display()))?;

    if json {
        stats::print_json_stdout(&OrgSummary {
            stats: &statistics,
            developer_nodes: dev.node_count(),
            developer_edges: dev.edge_count(),
            organization_nodes: orgs.node_count(),
            organization_edges: orgs.edge_count(),
            output: output.display().to_string(),
        })?;
    } else {
        statistics.print_summary();
        println!(
            " developer graph: {} nodes, {} edges",
            dev.node_count(),
            dev.edge_count()
        );
        println!(
            " organization graph: {} nodes, {} edges → {}",
            orgs.node_count(),
            orgs.edge_count(),
            output.display()
        );
    }
    Ok(())
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
