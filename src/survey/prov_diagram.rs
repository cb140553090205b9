//! Nodes and edges for drawing a provenance graph as a vis.js network.

use crate::rdf::vocab::*;
use crate::rdf::{Node, Object, RdfGraph};
use serde::Serialize;

/// Relations drawn as edges.
const EDGE_PREDICATES: [&str; 6] = [
    PROV_WAS_ATTRIBUTED_TO,
    PROV_WAS_GENERATED_BY,
    PROV_USED,
    PROV_WAS_DERIVED_FROM,
    PROV_WAS_INFORMED_BY,
    PROV_WAS_ASSOCIATED_WITH,
];

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DiagramNode {
    pub id: String,
    pub label: String,
    pub shape: &'static str,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DiagramEdge {
    pub from: String,
    pub to: String,
    pub label: String,
    pub arrows: &'static str,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ProvDiagram {
    pub nodes: Vec<DiagramNode>,
    pub edges: Vec<DiagramEdge>,
}

impl ProvDiagram {
    pub fn from_graph(graph: &RdfGraph) -> ProvDiagram {
        let mut diagram = ProvDiagram::default();

        for subject in graph.subject_nodes() {
            let is_a =
                |class: &str| graph.contains(subject, RDF_TYPE, &Object::Node(Node::named(class)));

            // An activity that is also an agent is drawn as the activity
            let (class_name, shape) = if is_a(PROV_ACTIVITY) {
                ("Activity", "box")
            } else if is_a(PROV_ENTITY) {
                ("Entity", "ellipse")
            } else if is_a(PROV_AGENT) {
                ("Agent", "circle")
            } else {
                continue;
            };

            let label = graph
                .objects(subject, RDFS_LABEL)
                .find_map(|o| match o {
                    Object::Literal(l) => Some(l.value.clone()),
                    Object::Node(_) => None,
                })
                .unwrap_or_else(|| String::from(class_name));

            diagram.nodes.push(DiagramNode {
                id: subject.to_string(),
                label,
                shape,
            });
        }

        for triple in graph.triples() {
            if !EDGE_PREDICATES.contains(&triple.predicate.as_str()) {
                continue;
            }
            if let Object::Node(to) = &triple.object {
                diagram.edges.push(DiagramEdge {
                    from: triple.subject.to_string(),
                    to: to.to_string(),
                    label: local_name(&triple.predicate),
                    arrows: "to",
                });
            }
        }

        diagram
    }
}

fn local_name(iri: &str) -> String {
    iri.rsplit(|c: char| c == '#' || c == '/')
        .next()
        .map(String::from)
        .unwrap_or_default()
}
