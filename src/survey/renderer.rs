use crate::app_config::AppConfig;
use crate::errors::{ErrorKind, Result};
use crate::ldapi::CapabilityTable;
use crate::rdf::RdfGraph;
use crate::renderer::{rdf_representation, render_alternates, Renderer, Representation, ALTERNATES_VIEW};
use crate::serving::response_type::HTML_MIME;
use crate::serving::serialization::graph_to_turtle;
use crate::survey::builder::{Construction, GraphBuilder, SurveyView};
use crate::survey::html::{display_fields, DisplayField};
use crate::survey::prov_diagram::ProvDiagram;
use crate::survey::record::SurveyRecord;
use crate::templates::Templates;
use serde::Serialize;
use std::str::FromStr;

#[derive(Serialize)]
struct SurveyPage<'a> {
    title: String,
    identifier: &'a str,
    name: Option<&'a str>,
    uri: String,
    alternates_href: String,
    fields: Vec<DisplayField>,
    wkt: Option<String>,
}

#[derive(Serialize)]
struct ProvPage<'a> {
    #[serde(flatten)]
    survey: SurveyPage<'a>,
    nodes_json: String,
    edges_json: String,
    turtle: String,
}

/// JSON that can be placed inside a `<script>` element. Labels come from
/// upstream, so markup characters are written as unicode escapes.
fn script_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026"))
}

/// Renders one survey record in any of the survey views.
pub struct SurveyRenderer<'a> {
    record: SurveyRecord,
    config: &'a AppConfig,
    table: &'a CapabilityTable,
    templates: &'a Templates,
}

impl<'a> SurveyRenderer<'a> {
    pub fn new(
        record: SurveyRecord,
        config: &'a AppConfig,
        table: &'a CapabilityTable,
        templates: &'a Templates,
    ) -> SurveyRenderer<'a> {
        SurveyRenderer {
            record,
            config,
            table,
            templates,
        }
    }

    fn uri(&self) -> String {
        self.config.survey_iri(&self.record.identifier)
    }

    fn page(&self, view: SurveyView) -> SurveyPage {
        let name = self.record.name.as_deref();

        SurveyPage {
            title: match name {
                Some(name) => format!("Survey {}: {}", self.record.identifier, name),
                None => format!("Survey {}", self.record.identifier),
            },
            identifier: &self.record.identifier,
            name,
            uri: self.uri(),
            alternates_href: format!("/survey/{}?_view=alternates", self.record.identifier),
            fields: display_fields(&self.record, view),
            wkt: self.record.wkt_polygon(),
        }
    }

    fn render_html(&self, view: SurveyView, graph: &RdfGraph) -> Result<Representation> {
        let html = match view {
            SurveyView::Gapd => self.templates.render("survey_gapd", &self.page(view))?,
            SurveyView::Prov => {
                let diagram = ProvDiagram::from_graph(graph);
                let turtle = String::from_utf8_lossy(&graph_to_turtle(graph)?).into_owned();
                let page = ProvPage {
                    survey: SurveyPage {
                        wkt: None,
                        ..self.page(view)
                    },
                    nodes_json: script_json(&diagram.nodes)?,
                    edges_json: script_json(&diagram.edges)?,
                    turtle,
                };
                self.templates.render("survey_prov", &page)?
            }
            SurveyView::Sosa | SurveyView::Argus => {
                bail!(ErrorKind::UnsupportedSerialization(String::from(HTML_MIME)))
            }
        };

        Ok(Representation::Html(html))
    }
}

impl<'a> Renderer for SurveyRenderer<'a> {
    fn render(&self, view: &str, mimetype: &str) -> Result<Representation> {
        if view == ALTERNATES_VIEW {
            let base = format!("/survey/{}", self.record.identifier);
            return render_alternates(self.templates, self.table, &self.uri(), &base);
        }

        let survey_view =
            SurveyView::from_str(view).map_err(|_| ErrorKind::InvalidView(self.table.view_names()))?;
        let builder = GraphBuilder::new(&self.config.base_uri_survey, &self.config.survey_url);

        match builder.build(&self.record, survey_view) {
            Construction::Redirect(url) => Ok(Representation::Redirect(url)),
            Construction::Graph(graph) => {
                debug!(
                    target: "surveys",
                    "Built {} view of survey {} with {} triples",
                    view,
                    self.record.identifier,
                    graph.len()
                );
                if mimetype == HTML_MIME {
                    self.render_html(survey_view, &graph)
                } else {
                    rdf_representation(&graph, mimetype, &self.record.identifier)
                }
            }
        }
    }
}
