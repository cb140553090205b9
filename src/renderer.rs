use crate::errors::{ErrorKind, Result};
use crate::ldapi::CapabilityTable;
use crate::rdf::RdfGraph;
use crate::serving::response_type::ResponseType;
use crate::serving::serialization::serialize_graph;
use crate::templates::Templates;
use serde::Serialize;
use std::str::FromStr;

pub const ALTERNATES_VIEW: &str = "alternates";

/// A rendered resource, ready to be sent.
#[derive(Debug, PartialEq)]
pub enum Representation {
    Rdf {
        body: Vec<u8>,
        response_type: ResponseType,
        /// Suggested download name
        filename: String,
    },
    Html(String),
    Xml(String),
    /// See other
    Redirect(String),
}

/// A resource type that can render itself in each of its views.
pub trait Renderer {
    /// `view` and `mimetype` are expected to be negotiated already.
    fn render(&self, view: &str, mimetype: &str) -> Result<Representation>;
}

/// Serializes `graph` for an RDF mimetype, naming the download after `stem`.
pub fn rdf_representation(graph: &RdfGraph, mimetype: &str, stem: &str) -> Result<Representation> {
    let response_type = ResponseType::from_str(mimetype)
        .map_err(|_| ErrorKind::UnsupportedSerialization(String::from(mimetype)))?;
    let body = serialize_graph(graph, response_type)?;

    Ok(Representation::Rdf {
        body,
        response_type,
        filename: format!("{}.{}", stem, response_type.to_ext()),
    })
}

#[derive(Serialize)]
struct AlternateView<'a> {
    name: &'a str,
    mimetypes: &'a [String],
    default_mimetype: &'a str,
}

#[derive(Serialize)]
struct AlternatesPage<'a> {
    title: String,
    uri: &'a str,
    base: &'a str,
    default_view: &'a str,
    views: Vec<AlternateView<'a>>,
}

/// The HTML listing of every view of a resource type. `base` is the path the
/// view links are made relative to.
pub fn render_alternates(
    templates: &Templates,
    table: &CapabilityTable,
    uri: &str,
    base: &str,
) -> Result<Representation> {
    let views = table
        .views
        .iter()
        .map(|v| AlternateView {
            name: &v.name,
            mimetypes: &v.mimetypes,
            default_mimetype: v.default_mimetype(),
        })
        .collect();

    let page = AlternatesPage {
        title: format!("Alternate views of {}", uri),
        uri,
        base,
        default_view: &table.default,
        views,
    };

    Ok(Representation::Html(templates.render("alternates", &page)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ldapi::capabilities::{Capabilities, SURVEY_CLASS};
    use crate::rdf::Node;

    #[test]
    fn test_alternates_lists_every_view() {
        let capabilities = Capabilities::load(None).unwrap();
        let table = capabilities.for_type(SURVEY_CLASS).unwrap();
        let templates = Templates::new().unwrap();

        let html = match render_alternates(
            &templates,
            table,
            "http://pid.geoscience.gov.au/survey/921",
            "/survey/921",
        )
        .unwrap()
        {
            Representation::Html(html) => html,
            other => panic!("Unexpected {:?}", other),
        };

        for view in table.view_names() {
            assert!(html.contains(&format!("/survey/921?_view={}", view)), "{}", view);
        }
        assert!(html.contains("Default view: <a href=\"/survey/921?_view=gapd\">gapd</a>"));
        assert!(html.contains("_view=sosa&amp;_format=text/turtle"));
    }

    #[test]
    fn test_rdf_representation_names_file() {
        let mut graph = RdfGraph::new();
        let s = Node::named("http://example.com/s");
        graph.add(&s, "http://example.com/p", Node::named("http://example.com/o"));

        match rdf_representation(&graph, "text/turtle", "921").unwrap() {
            Representation::Rdf {
                response_type,
                filename,
                ..
            } => {
                assert_eq!(response_type, ResponseType::TURTLE);
                assert_eq!(filename, "921.ttl");
            }
            other => panic!("Unexpected {:?}", other),
        }
    }

    #[test]
    fn test_rdf_representation_rejects_html() {
        let err = rdf_representation(&RdfGraph::new(), "text/html", "921").unwrap_err();

        assert!(matches!(err.kind(), ErrorKind::UnsupportedSerialization(_)));
    }
}
