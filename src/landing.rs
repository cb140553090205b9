//! The service root: a landing page and the LDAPI capabilities document.

use crate::app_config::AppConfig;
use crate::errors::{Error, ErrorKind, Result};
use crate::ldapi::capabilities::{Capabilities, REGISTER_CLASS, SURVEY_CLASS};
use crate::ldapi::CapabilityTable;
use crate::renderer::{render_alternates, Renderer, Representation, ALTERNATES_VIEW};
use crate::templates::Templates;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use serde::Serialize;
use std::fmt::Display;

pub const LANDING_VIEW: &str = "landingpage";
pub const CAPABILITIES_VIEW: &str = "getcapabilities";

const LDAPI_NS: &str = "http://fake.com/_ldapi";
const XLINK_NS: &str = "http://www.w3.org/1999/xlink";

const ACCESS_CONSTRAINTS: &str = "(c) Commonwealth of Australia (Geoscience Australia) 2016. \
    This product is released under the Creative Commons Attribution 4.0 International Licence. \
    http://creativecommons.org/licenses/by/4.0/legalcode";

#[derive(Serialize)]
struct LandingPage<'a> {
    title: &'static str,
    service_url: &'a str,
    register_href: &'static str,
    capabilities_href: String,
}

pub struct LandingRenderer<'a> {
    config: &'a AppConfig,
    capabilities: &'a Capabilities,
    table: &'a CapabilityTable,
    templates: &'a Templates,
}

impl<'a> LandingRenderer<'a> {
    pub fn new(
        config: &'a AppConfig,
        capabilities: &'a Capabilities,
        table: &'a CapabilityTable,
        templates: &'a Templates,
    ) -> LandingRenderer<'a> {
        LandingRenderer {
            config,
            capabilities,
            table,
            templates,
        }
    }
}

impl<'a> Renderer for LandingRenderer<'a> {
    fn render(&self, view: &str, _mimetype: &str) -> Result<Representation> {
        match view {
            ALTERNATES_VIEW => {
                render_alternates(self.templates, self.table, &self.config.service_url, "/")
            }
            LANDING_VIEW => {
                let page = LandingPage {
                    title: "Surveys API",
                    service_url: &self.config.service_url,
                    register_href: "/survey/",
                    capabilities_href: format!("/?_view={}", CAPABILITIES_VIEW),
                };
                Ok(Representation::Html(self.templates.render("landing", &page)?))
            }
            CAPABILITIES_VIEW => Ok(Representation::Xml(capabilities_document(
                &self.config.service_url,
                self.capabilities,
            )?)),
            _ => Err(ErrorKind::InvalidView(self.table.view_names()).into()),
        }
    }
}

fn xml_error<E: Display>(e: E) -> Error {
    ErrorKind::Msg(format!("Error writing capabilities document: {}", e)).into()
}

struct DocumentWriter {
    writer: Writer<Vec<u8>>,
}

impl DocumentWriter {
    fn new() -> DocumentWriter {
        DocumentWriter {
            writer: Writer::new_with_indent(Vec::new(), b' ', 2),
        }
    }

    fn event(&mut self, event: Event) -> Result<()> {
        self.writer.write_event(event).map_err(xml_error)
    }

    fn start(&mut self, name: &str, attributes: &[(&str, &str)]) -> Result<()> {
        let mut element = BytesStart::new(name);
        for attribute in attributes {
            element.push_attribute(*attribute);
        }
        self.event(Event::Start(element))
    }

    fn end(&mut self, name: &str) -> Result<()> {
        self.event(Event::End(BytesEnd::new(name)))
    }

    fn empty(&mut self, name: &str, attributes: &[(&str, &str)]) -> Result<()> {
        let mut element = BytesStart::new(name);
        for attribute in attributes {
            element.push_attribute(*attribute);
        }
        self.event(Event::Empty(element))
    }

    fn text_element(&mut self, name: &str, text: &str) -> Result<()> {
        self.start(name, &[])?;
        self.event(Event::Text(BytesText::new(text)))?;
        self.end(name)
    }

    fn online_resource(&mut self, href: &str) -> Result<()> {
        self.empty(
            "OnlineResource",
            &[("xlink:type", "simple"), ("xlink:href", href)],
        )
    }

    /// A request type, its formats and the URL to GET it from.
    fn request(&mut self, name: &str, formats: &[String], href: &str) -> Result<()> {
        self.start(name, &[])?;
        for format in formats {
            self.text_element("Format", format)?;
        }
        self.start("DCPType", &[])?;
        self.start("HTTP", &[])?;
        self.start("Get", &[])?;
        self.online_resource(href)?;
        self.end("Get")?;
        self.end("HTTP")?;
        self.end("DCPType")?;
        self.end(name)
    }

    fn finish(self) -> Result<String> {
        String::from_utf8(self.writer.into_inner()).map_err(xml_error)
    }
}

fn default_formats(capabilities: &Capabilities, class: &str) -> Result<Vec<String>> {
    let table = capabilities.require(class)?;

    Ok(table
        .default_view()
        .map(|v| v.mimetypes.clone())
        .unwrap_or_default())
}

/// The `LDAPI_Capabilities` document describing the requests this service
/// answers, rooted at `service_url`.
pub fn capabilities_document(service_url: &str, capabilities: &Capabilities) -> Result<String> {
    let mut doc = DocumentWriter::new();

    doc.event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    doc.start(
        "LDAPI_Capabilities",
        &[("xmlns", LDAPI_NS), ("xmlns:xlink", XLINK_NS)],
    )?;

    doc.start("Service", &[])?;
    doc.text_element("Name", "Linked Data API")?;
    doc.text_element("Title", "Geoscience Australia's Surveys")?;
    doc.start("KeywordList", &[])?;
    for keyword in &["survey", "geophysics", "Linked Data", "XML", "RDF"] {
        doc.text_element("Keyword", keyword)?;
    }
    doc.end("KeywordList")?;
    doc.online_resource(service_url)?;

    doc.start("ContactInformation", &[])?;
    doc.start("ContactPersonPrimary", &[])?;
    doc.text_element("ContactOrganization", "Geoscience Australia")?;
    doc.end("ContactPersonPrimary")?;
    doc.start("ContactAddress", &[])?;
    doc.text_element("AddressType", "Postal")?;
    doc.text_element("Address", "GPO Box 378")?;
    doc.text_element("City", "Canberra")?;
    doc.text_element("StateOrProvince", "ACT")?;
    doc.text_element("PostCode", "2601")?;
    doc.text_element("Country", "Australia")?;
    doc.text_element("ContactVoiceTelephone", "+61 2 6249 9111")?;
    doc.text_element("ContactElectronicMailAddress", "clientservices@ga.gov.au")?;
    doc.end("ContactAddress")?;
    doc.end("ContactInformation")?;

    doc.text_element("Fees", "none")?;
    doc.text_element("AccessConstraints", ACCESS_CONSTRAINTS)?;
    doc.end("Service")?;

    doc.start("Capability", &[])?;
    doc.start("Request", &[])?;
    doc.request(
        "GetCapabilities",
        &[String::from("text/xml")],
        &format!("{}?_view=getcapabilities&_format=text/xml", service_url),
    )?;
    doc.request(
        "Survey",
        &default_formats(capabilities, SURVEY_CLASS)?,
        &format!("{}{{SURVEY_ID}}", service_url),
    )?;
    doc.request(
        "SurveyRegister",
        &default_formats(capabilities, REGISTER_CLASS)?,
        service_url,
    )?;
    doc.end("Request")?;
    doc.end("Capability")?;

    doc.end("LDAPI_Capabilities")?;

    doc.finish()
}
