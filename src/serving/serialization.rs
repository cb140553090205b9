use crate::errors::{Error, ErrorKind, Result};
use crate::rdf::vocab::RDF_TYPE;
use crate::rdf::{Node, Object, RdfGraph};
use crate::serving::response_type::ResponseType;
use rio_api::formatter::TriplesFormatter;
use rio_api::model::{BlankNode, Literal, NamedNode, NamedOrBlankNode, Term, Triple};
use rio_turtle::{NTriplesFormatter, TurtleFormatter};
use rio_xml::RdfXmlFormatter;
use serde_json::{json, Map, Value};
use std::io::Write;

/// Writes `graph` in the RDF syntax of `response_type`.
pub fn serialize_graph(graph: &RdfGraph, response_type: ResponseType) -> Result<Vec<u8>> {
    match response_type {
        ResponseType::TURTLE => graph_to_turtle(graph),
        ResponseType::NTRIPLES => graph_to_ntriples(graph),
        ResponseType::RDFXML => graph_to_rdf_xml(graph),
        ResponseType::JSONLD => graph_to_json_ld(graph),
        ResponseType::HTML | ResponseType::XML => {
            Err(ErrorKind::UnsupportedSerialization(response_type.to_mime()).into())
        }
    }
}

pub fn graph_to_turtle(graph: &RdfGraph) -> Result<Vec<u8>> {
    let mut output = Vec::new();
    for (prefix, namespace) in graph.prefixes() {
        writeln!(output, "@prefix {}: <{}> .", prefix, namespace)?;
    }
    if !graph.prefixes().is_empty() {
        writeln!(output)?;
    }

    let mut formatter = TurtleFormatter::new(output);
    format_graph(&mut formatter, graph)?;

    Ok(formatter.finish()?)
}

pub fn graph_to_ntriples(graph: &RdfGraph) -> Result<Vec<u8>> {
    let mut formatter = NTriplesFormatter::new(Vec::default());

    format_graph(&mut formatter, graph)?;

    Ok(formatter.finish())
}

pub fn graph_to_rdf_xml(graph: &RdfGraph) -> Result<Vec<u8>> {
    let mut formatter = RdfXmlFormatter::new(Vec::default())?;

    format_graph(&mut formatter, graph)?;

    Ok(formatter.finish()?)
}

/// Expanded JSON-LD: one node object per subject, in order of appearance.
pub fn graph_to_json_ld(graph: &RdfGraph) -> Result<Vec<u8>> {
    let mut nodes = Vec::new();

    for subject in graph.subject_nodes() {
        let mut object = Map::new();
        object.insert(String::from("@id"), Value::String(node_id(subject)));

        for triple in graph.triples().iter().filter(|t| &t.subject == subject) {
            let (key, value) = if triple.predicate == RDF_TYPE {
                match &triple.object {
                    Object::Node(n) => (String::from("@type"), Value::String(node_id(n))),
                    Object::Literal(l) => (
                        triple.predicate.clone(),
                        json!({ "@value": l.value, "@type": l.datatype }),
                    ),
                }
            } else {
                let value = match &triple.object {
                    Object::Node(n) => json!({ "@id": node_id(n) }),
                    Object::Literal(l) => json!({ "@value": l.value, "@type": l.datatype }),
                };
                (triple.predicate.clone(), value)
            };

            if let Value::Array(values) = object
                .entry(key)
                .or_insert_with(|| Value::Array(Vec::new()))
            {
                values.push(value);
            }
        }

        nodes.push(Value::Object(object));
    }

    Ok(serde_json::to_vec_pretty(&Value::Array(nodes))?)
}

fn node_id(node: &Node) -> String {
    match node {
        Node::Named(iri) => iri.clone(),
        Node::Blank(id) => format!("_:{}", id),
    }
}

fn format_graph<T>(formatter: &mut T, graph: &RdfGraph) -> Result<()>
where
    T: TriplesFormatter,
    Error: From<T::Error>,
{
    for triple in graph.triples() {
        formatter.format(&Triple {
            subject: to_named_or_blanknode(&triple.subject),
            predicate: NamedNode {
                iri: &triple.predicate,
            },
            object: to_object(&triple.object),
        })?;
    }

    Ok(())
}

fn to_named_or_blanknode(node: &Node) -> NamedOrBlankNode {
    match node {
        Node::Named(iri) => NamedOrBlankNode::NamedNode(NamedNode { iri }),
        Node::Blank(id) => NamedOrBlankNode::BlankNode(BlankNode { id }),
    }
}

fn to_object(object: &Object) -> Term {
    match object {
        Object::Node(Node::Named(iri)) => Term::NamedNode(NamedNode { iri }),
        Object::Node(Node::Blank(id)) => Term::BlankNode(BlankNode { id }),
        Object::Literal(l) => Term::Literal(Literal::Typed {
            value: &l.value,
            datatype: NamedNode { iri: &l.datatype },
        }),
    }
}
