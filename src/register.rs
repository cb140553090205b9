//! The paged listing of all surveys.

use crate::errors::{ErrorKind, Result};
use crate::ldapi::CapabilityTable;
use crate::rdf::vocab::*;
use crate::rdf::{Literal, Node, RdfGraph};
use crate::renderer::{rdf_representation, render_alternates, Renderer, Representation, ALTERNATES_VIEW};
use crate::serving::pagination::Page;
use crate::serving::response_type::HTML_MIME;
use crate::survey::parsing::parse_payload;
use crate::templates::Templates;
use serde::Serialize;

pub const REGISTER_VIEW: &str = "reg";
const REGISTER_PATH: &str = "/survey/";

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RegisterItem {
    pub id: String,
    pub label: String,
}

/// Reads the items of one upstream listing page. A page past the end of the
/// listing comes back as the no-data sentinel and yields no items.
pub fn parse_register(payload: &[u8]) -> Result<Vec<RegisterItem>> {
    let rows = match parse_payload(payload) {
        Ok(rows) => rows,
        Err(e) if matches!(e.kind(), ErrorKind::NoData) => return Ok(Vec::new()),
        Err(e) => return Err(e),
    };

    let mut items = Vec::with_capacity(rows.len());
    for row in rows {
        let id = match row.get("SURVEYID") {
            Some(id) => id.clone(),
            None => {
                warn!(target: "surveys", "Skipping register row without SURVEYID");
                continue;
            }
        };
        let label = row
            .get("SURVEYNAME")
            .cloned()
            .unwrap_or_else(|| format!("Survey {}", id));

        items.push(RegisterItem { id, label });
    }

    Ok(items)
}

pub fn build_register_graph(register_uri: &str, items: &[RegisterItem]) -> RdfGraph {
    let mut graph = RdfGraph::new();
    graph.bind("rdf", RDF);
    graph.bind("rdfs", RDFS);
    graph.bind("xsd", XSD);
    graph.bind("reg", REG);
    graph.bind("gapd", GAPD);

    let register = Node::named(register_uri);
    graph.add(&register, RDF_TYPE, Node::named(REG_REGISTER));
    graph.add(&register, RDFS_LABEL, Literal::typed("Survey register", XSD_STRING));
    graph.add(&register, REG_CONTAINED_ITEM_CLASS, Node::named(GAPD_SURVEY));

    for item in items {
        let node = Node::named(format!("{}{}", register_uri, item.id));
        graph.add(&node, RDF_TYPE, Node::named(GAPD_SURVEY));
        graph.add(&node, RDFS_LABEL, Literal::typed(item.label.as_str(), XSD_STRING));
        graph.add(&node, REG_REGISTER_PROP, &register);
    }

    graph
}

#[derive(Serialize)]
struct ItemLink<'a> {
    label: &'a str,
    href: String,
}

#[derive(Serialize)]
struct NavLink {
    rel: &'static str,
    href: String,
}

#[derive(Serialize)]
struct RegisterPage<'a> {
    title: &'static str,
    uri: &'a str,
    page: u32,
    per_page: u32,
    items: Vec<ItemLink<'a>>,
    links: Vec<NavLink>,
    alternates_href: &'static str,
}

pub struct RegisterRenderer<'a> {
    /// Survey IRIs are formed by appending an id to this
    register_uri: &'a str,
    items: Vec<RegisterItem>,
    page: Page,
    table: &'a CapabilityTable,
    templates: &'a Templates,
}

impl<'a> RegisterRenderer<'a> {
    pub fn new(
        register_uri: &'a str,
        items: Vec<RegisterItem>,
        page: Page,
        table: &'a CapabilityTable,
        templates: &'a Templates,
    ) -> RegisterRenderer<'a> {
        RegisterRenderer {
            register_uri,
            items,
            page,
            table,
            templates,
        }
    }

    pub fn link_header(&self) -> String {
        self.page.link_header(REGISTER_PATH, self.items.len())
    }

    fn render_html(&self) -> Result<Representation> {
        let page = RegisterPage {
            title: "Survey register",
            uri: self.register_uri,
            page: self.page.page,
            per_page: self.page.per_page,
            items: self
                .items
                .iter()
                .map(|item| ItemLink {
                    label: &item.label,
                    href: format!("{}{}", REGISTER_PATH, item.id),
                })
                .collect(),
            links: self
                .page
                .links(self.items.len())
                .into_iter()
                .map(|(rel, page)| NavLink {
                    rel,
                    href: self.page.href(REGISTER_PATH, page),
                })
                .collect(),
            alternates_href: "/survey/?_view=alternates",
        };

        Ok(Representation::Html(self.templates.render("register", &page)?))
    }
}

impl<'a> Renderer for RegisterRenderer<'a> {
    fn render(&self, view: &str, mimetype: &str) -> Result<Representation> {
        match view {
            ALTERNATES_VIEW => {
                render_alternates(self.templates, self.table, self.register_uri, REGISTER_PATH)
            }
            REGISTER_VIEW if mimetype == HTML_MIME => self.render_html(),
            REGISTER_VIEW => rdf_representation(
                &build_register_graph(self.register_uri, &self.items),
                mimetype,
                "register",
            ),
            _ => Err(ErrorKind::InvalidView(self.table.view_names()).into()),
        }
    }
}
