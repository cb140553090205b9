use crate::app_config::fill_survey_url;
use crate::rdf::iri_utils::mint_iri;
use crate::rdf::vocab::*;
use crate::rdf::{Literal, Node, RdfGraph};
use crate::survey::record::SurveyRecord;
use chrono::NaiveDateTime;
use std::str::FromStr;

pub const URI_GA: &str = "http://pid.geoscience.gov.au/org/ga";
const GA_LABEL: &str = "Geoscience Australia";

const PLATFORM_BASE: &str = "http://pid.geoscience.gov.au/platform/";
const INSTRUMENT_BASE: &str = "http://pid.geoscience.gov.au/instrument/";
/// Published identifier of the feature all surveys sample; the spelling is
/// part of the identifier.
pub const URI_EARTH_SUBSURFACE: &str = "http://pid.geoscience.gov.au/feature/earthSusbsurface";

/// The survey views this service knows how to produce.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SurveyView {
    /// GA Public Data model: provenance roles, location and survey class
    Gapd,
    /// Provenance, with direct association edges for diagramming
    Prov,
    /// Sampling/observation model
    Sosa,
    /// The upstream XML itself
    Argus,
}

impl FromStr for SurveyView {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gapd" => Ok(SurveyView::Gapd),
            "prov" => Ok(SurveyView::Prov),
            "sosa" => Ok(SurveyView::Sosa),
            "argus" => Ok(SurveyView::Argus),
            _ => Err(()),
        }
    }
}

/// What building a view yields.
#[derive(Debug)]
pub enum Construction {
    Graph(RdfGraph),
    /// The view is the upstream document; the caller should send a 303 here.
    Redirect(String),
}

pub struct GraphBuilder<'a> {
    base_uri: &'a str,
    upstream_url: &'a str,
}

impl<'a> GraphBuilder<'a> {
    /// `base_uri` prefixes the survey id to form its IRI. `upstream_url` is the
    /// upstream record URL with an `{id}` placeholder.
    pub fn new(base_uri: &'a str, upstream_url: &'a str) -> GraphBuilder<'a> {
        GraphBuilder {
            base_uri,
            upstream_url,
        }
    }

    pub fn survey_node(&self, record: &SurveyRecord) -> Node {
        Node::named(format!("{}{}", self.base_uri, record.identifier))
    }

    pub fn build(&self, record: &SurveyRecord, view: SurveyView) -> Construction {
        let mut graph = RdfGraph::new();
        let survey = self.survey_node(record);

        match view {
            SurveyView::Argus => {
                return Construction::Redirect(fill_survey_url(
                    self.upstream_url,
                    &record.identifier,
                ))
            }
            SurveyView::Gapd => build_gapd(&mut graph, &survey, record),
            SurveyView::Prov => build_prov(&mut graph, &survey, record),
            SurveyView::Sosa => build_sosa(&mut graph, &survey, record),
        }

        Construction::Graph(graph)
    }
}

fn bind_common(graph: &mut RdfGraph) {
    graph.bind("rdf", RDF);
    graph.bind("rdfs", RDFS);
    graph.bind("xsd", XSD);
    graph.bind("prov", PROV);
    graph.bind("aurole", AUROLE);
}

fn string_literal(value: &str) -> Literal {
    Literal::typed(value, XSD_STRING)
}

fn date_literal(value: &NaiveDateTime) -> Literal {
    Literal::typed(value.date().format("%Y-%m-%d").to_string(), XSD_DATE)
}

/// Links `subject` to `agent` in `role` through an anonymous prov:Attribution.
fn attribute(graph: &mut RdfGraph, subject: &Node, agent: &Node, role: &str) -> Node {
    let attribution = graph.blank();
    graph.add(&attribution, RDF_TYPE, Node::named(PROV_ATTRIBUTION));
    graph.add(&attribution, PROV_AGENT_PROP, agent);
    graph.add(&attribution, PROV_HAD_ROLE, Node::named(role));
    graph.add(subject, PROV_QUALIFIED_ATTRIBUTION, &attribution);

    attribution
}

/// Geoscience Australia, publisher of every survey.
fn add_publisher(graph: &mut RdfGraph, survey: &Node) -> Node {
    let ga = Node::named(URI_GA);
    graph.add(&ga, RDF_TYPE, Node::named(PROV_ORG));
    graph.add(&ga, RDFS_LABEL, string_literal(GA_LABEL));
    attribute(graph, survey, &ga, AUROLE_PUBLISHER);

    ga
}

/// The contractor, operator and processor as anonymous agents. Roles whose
/// field is empty upstream are left out.
fn add_survey_agents(graph: &mut RdfGraph, survey: &Node, record: &SurveyRecord) -> Vec<Node> {
    let roles = [
        (&record.contractor, AUROLE_PRINCIPAL_INVESTIGATOR),
        (&record.operator, AUROLE_SPONSOR),
        (&record.processor, AUROLE_PROCESSOR),
    ];

    let mut agents = Vec::with_capacity(roles.len());
    for (name, role) in roles.iter() {
        if let Some(name) = name {
            let agent = graph.blank();
            graph.add(&agent, RDF_TYPE, Node::named(PROV_AGENT));
            graph.add(&agent, RDFS_LABEL, string_literal(name));
            attribute(graph, survey, &agent, role);
            agents.push(agent);
        }
    }

    agents
}

fn build_gapd(graph: &mut RdfGraph, survey: &Node, record: &SurveyRecord) {
    bind_common(graph);
    graph.bind("gapd", GAPD);

    graph.add(survey, RDF_TYPE, Node::named(PROV_ACTIVITY));
    graph.add(survey, RDF_TYPE, Node::named(GAPD_PUBLIC_SURVEY));

    add_survey_agents(graph, survey, record);
    add_publisher(graph, survey);

    if let Some(wkt) = record.wkt_polygon() {
        graph.bind("geosp", GEOSP);
        graph.bind("samfl", SAMFL);

        let geometry = graph.blank();
        graph.add(survey, PROV_HAD_LOCATION, &geometry);
        graph.add(&geometry, RDF_TYPE, Node::named(SAMFL_POLYGON));
        graph.add(&geometry, GEOSP_AS_WKT, Literal::typed(wkt, GEOSP_WKT_LITERAL));
    }
}

fn build_prov(graph: &mut RdfGraph, survey: &Node, record: &SurveyRecord) {
    bind_common(graph);

    graph.add(survey, RDF_TYPE, Node::named(PROV_ACTIVITY));
    graph.add(
        survey,
        RDFS_LABEL,
        string_literal(&format!("Survey {}", record.identifier)),
    );

    let mut agents = add_survey_agents(graph, survey, record);
    let ga = add_publisher(graph, survey);
    graph.add(&ga, RDF_TYPE, Node::named(PROV_AGENT));
    agents.push(ga);

    // Repeats the attributions as plain edges, which diagrams can draw
    for agent in &agents {
        graph.add(survey, PROV_WAS_ASSOCIATED_WITH, agent);
    }
}

fn build_sosa(graph: &mut RdfGraph, survey: &Node, record: &SurveyRecord) {
    bind_common(graph);
    graph.bind("sosa", SOSA);
    graph.bind("time", TIME);
    graph.bind("geosp", GEOSP);

    graph.add(survey, RDF_TYPE, Node::named(SOSA_SAMPLING));
    add_publisher(graph, survey);

    match (&record.start_date, &record.end_date) {
        (Some(start), Some(end)) => {
            let interval = graph.blank();
            graph.add(&interval, RDF_TYPE, Node::named(TIME_PROPER_INTERVAL));
            let beginning = add_instant(graph, start);
            graph.add(&interval, TIME_HAS_BEGINNING, &beginning);
            let finish = add_instant(graph, end);
            graph.add(&interval, TIME_HAS_END, &finish);
            graph.add(survey, TIME_HAS_TIME, &interval);
        }
        (Some(start), None) => {
            let instant = add_instant(graph, start);
            graph.add(survey, TIME_HAS_TIME, &instant);
        }
        _ => (),
    }

    let platform = graph.blank();
    if let Some(vessel_type) = &record.vessel_type {
        graph.add(
            &platform,
            RDF_TYPE,
            Node::named(mint_iri(PLATFORM_BASE, vessel_type)),
        );
    }
    graph.add(&platform, RDFS_SUB_CLASS_OF, Node::named(SOSA_PLATFORM));
    if let Some(vessel) = &record.vessel {
        graph.add(&platform, RDFS_LABEL, string_literal(vessel));
    }

    let instruments: Vec<&String> = record
        .mag_instrument
        .iter()
        .chain(record.rad_instrument.iter())
        .collect();
    for instrument in &instruments {
        let sampler = graph.blank();
        graph.add(
            &sampler,
            RDF_TYPE,
            Node::named(mint_iri(INSTRUMENT_BASE, instrument)),
        );
        graph.add(&sampler, RDFS_SUB_CLASS_OF, Node::named(SOSA_SAMPLER));
        graph.add(&sampler, RDFS_LABEL, string_literal(instrument));
        graph.add(&sampler, SOSA_MADE_SAMPLING, survey);
        graph.add(&sampler, SOSA_IS_HOSTED_BY, &platform);
    }
    if instruments.is_empty() {
        let sampler = graph.blank();
        graph.add(&sampler, RDF_TYPE, Node::named(SOSA_SAMPLER));
        graph.add(&sampler, SOSA_IS_HOSTED_BY, &platform);
    }

    let foi = Node::named(URI_EARTH_SUBSURFACE);
    graph.add(&foi, RDFS_LABEL, string_literal("Earth Subsurface"));
    graph.add(
        &foi,
        RDFS_COMMENT,
        string_literal("Below the earth's terrestrial surface"),
    );
    graph.add(survey, SOSA_HAS_FEATURE_OF_INTEREST, &foi);

    let sample = graph.blank();
    graph.add(&sample, RDF_TYPE, Node::named(SOSA_SAMPLE));
    graph.add(survey, SOSA_HAS_RESULT, &sample);
    graph.add(&foi, SOSA_HAS_SAMPLE, &sample);

    if let Some(wkt) = record.wkt_polygon() {
        let geometry = graph.blank();
        graph.add(&geometry, RDF_TYPE, Node::named(GEOSP_GEOMETRY));
        graph.add(&geometry, GEOSP_AS_WKT, Literal::typed(wkt, GEOSP_WKT_LITERAL));
        graph.add(&sample, GEOSP_HAS_GEOMETRY, &geometry);
    }
}

fn add_instant(graph: &mut RdfGraph, at: &NaiveDateTime) -> Node {
    let instant = graph.blank();
    graph.add(&instant, RDF_TYPE, Node::named(TIME_INSTANT));
    graph.add(&instant, TIME_IN_XSD_DATE_TIME, date_literal(at));

    instant
}
