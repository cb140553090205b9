extern crate surveys_api;

use clap::{App, Arg};
use std::io::Write;
use std::process;
use std::{fs, io};
use surveys_api::app_config::DateFormat;
use surveys_api::errors::{ErrorKind, Result};
use surveys_api::serving::response_type::ResponseType;
use surveys_api::serving::serialization::serialize_graph;
use surveys_api::survey::{parse_survey, Construction, GraphBuilder, SurveyView};

/// Converts an upstream survey XML document into RDF without running the server.
fn main() {
    let matches = App::new("survey2rdf")
        .version("1.0")
        .about("Renders a survey XML document as an RDF view")
        .arg(
            Arg::with_name("input")
                .value_name("FILE")
                .help("The upstream XML document")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("view")
                .long("view")
                .value_name("VIEW")
                .possible_values(&["gapd", "prov", "sosa"])
                .default_value("gapd")
                .help("The view to build"),
        )
        .arg(
            Arg::with_name("format")
                .long("format")
                .value_name("MIMETYPE")
                .default_value("text/turtle")
                .help("The RDF serialization to write"),
        )
        .arg(
            Arg::with_name("base-uri")
                .long("base-uri")
                .value_name("URI")
                .default_value("http://pid.geoscience.gov.au/survey/")
                .help("Prefix survey IRIs are minted from"),
        )
        .arg(
            Arg::with_name("date-format")
                .long("date-format")
                .value_name("NOTATION")
                .possible_values(&["iso", "dd-mon-yy"])
                .default_value("iso")
                .help("Date notation used in the document"),
        )
        .get_matches();

    let result = convert(
        matches.value_of("input").unwrap_or_default(),
        matches.value_of("view").unwrap_or("gapd"),
        matches.value_of("format").unwrap_or("text/turtle"),
        matches.value_of("base-uri").unwrap_or_default(),
        matches.value_of("date-format").unwrap_or("iso"),
    );

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn convert(input: &str, view: &str, format: &str, base_uri: &str, date_format: &str) -> Result<()> {
    let view = view
        .parse::<SurveyView>()
        .map_err(|_| ErrorKind::Msg(format!("Unknown view {}", view)))?;
    let response_type = ResponseType::from_mime(format)
        .map_err(|_| ErrorKind::UnsupportedSerialization(String::from(format)))?;
    let date_format = date_format
        .parse::<DateFormat>()
        .map_err(|_| ErrorKind::Msg(format!("Unknown date notation {}", date_format)))?;

    let payload = fs::read(input)?;
    let record = parse_survey(&payload, date_format)?;

    match GraphBuilder::new(base_uri, "").build(&record, view) {
        Construction::Graph(graph) => {
            let body = serialize_graph(&graph, response_type)?;
            io::stdout().write_all(&body)?;

            Ok(())
        }
        Construction::Redirect(url) => {
            Err(ErrorKind::Msg(format!("This view is served from {}", url)).into())
        }
    }
}
