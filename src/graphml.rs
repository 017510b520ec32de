//! GraphML serialization for both graph flavors.
//!
//! The attribute key is `email` (the legacy scripts disagreed between
//! `e-mail` and `email`; this writer normalizes to the latter). Weights
//! on the organization graph are integers serialized as numeric text.

use petgraph::visit::EdgeRef;

use crate::devgraph::DeveloperGraph;
use crate::orggraph::OrganizationGraph;

/// Developer graph: string `email` and `affiliation` node attributes,
/// unweighted undirected edges.
pub fn developer_graphml(graph: &DeveloperGraph) -> String {
    let mut out = String::new();
    push_prologue(&mut out);
    out.push_str("  <key id=\"d0\" for=\"node\" attr.name=\"email\" attr.type=\"string\"/>\n");
    out.push_str(
        "  <key id=\"d1\" for=\"node\" attr.name=\"affiliation\" attr.type=\"string\"/>\n",
    );
    out.push_str("  <graph id=\"G\" edgedefault=\"undirected\">\n");

    for idx in graph.node_indices() {
        let dev = &graph[idx];
        out.push_str(&format!(
            "    <node id=\"n{}\">\n      <data key=\"d0\">{}</data>\n      <data key=\"d1\">{}</data>\n    </node>\n",
            idx.index(),
            escape(&dev.email),
            escape(&dev.affiliation)
        ));
    }
    for edge in graph.edge_references() {
        out.push_str(&format!(
            "    <edge source=\"n{}\" target=\"n{}\"/>\n",
            edge.source().index(),
            edge.target().index()
        ));
    }

    push_epilogue(&mut out);
    out
}

/// Organization graph: string `affiliation` node attribute, integer
/// `weight` edge attribute.
pub fn organization_graphml(graph: &OrganizationGraph) -> String {
    let mut out = String::new();
    push_prologue(&mut out);
    out.push_str(
        "  <key id=\"d0\" for=\"node\" attr.name=\"affiliation\" attr.type=\"string\"/>\n",
    );
    out.push_str("  <key id=\"d1\" for=\"edge\" attr.name=\"weight\" attr.type=\"int\"/>\n");
    out.push_str("  <graph id=\"G\" edgedefault=\"undirected\">\n");

    for idx in graph.node_indices() {
        out.push_str(&format!(
            "    <node id=\"n{}\">\n      <data key=\"d0\">{}</data>\n    </node>\n",
            idx.index(),
            escape(&graph[idx])
        ));
    }
    for edge in graph.edge_references() {
        out.push_str(&format!(
            "    <edge source=\"n{}\" target=\"n{}\">\n      <data key=\"d1\">{}</data>\n    </edge>\n",
            edge.source().index(),
            edge.target().index(),
            edge.weight()
        ));
    }

    push_epilogue(&mut out);
    out
}

fn push_prologue(out: &mut String) {
    out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    out.push_str("<graphml xmlns=\"http://graphml.graphdrawing.org/xmlns\">\n");
}

fn push_epilogue(out: &mut String) {
    out.push_str("  </graph>\n</graphml>\n");
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
