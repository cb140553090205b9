use std::str::FromStr;

pub const HTML_MIME: &str = "text/html";
const HTML_EXT: &str = "html";

pub const XML_MIME: &str = "text/xml";
pub const APPLICATION_XML_MIME: &str = "application/xml";
const XML_EXT: &str = "xml";

pub const TURTLE_MIME: &str = "text/turtle";
const TURTLE_EXT: &str = "ttl";

pub const RDF_XML_MIME: &str = "application/rdf+xml";
const RDF_XML_EXT: &str = "rdf";

pub const JSON_LD_MIME: &str = "application/rdf+json";
const JSON_LD_ALIASES: [&str; 2] = ["application/json", "application/ld+json"];
const JSON_LD_EXT: &str = "json";

pub const NTRIPLES_MIME: &str = "application/n-triples";
const NTRIPLES_ALIASES: [&str; 3] = ["text/ntriples", "text/nt", "text/n3"];
const NTRIPLES_EXT: &str = "nt";

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ResponseType {
    HTML,
    XML,
    TURTLE,
    RDFXML,
    JSONLD,
    NTRIPLES,
}

impl ResponseType {
    pub fn to_ext(&self) -> String {
        match self {
            ResponseType::HTML => String::from(HTML_EXT),
            ResponseType::XML => String::from(XML_EXT),
            ResponseType::TURTLE => String::from(TURTLE_EXT),
            ResponseType::RDFXML => String::from(RDF_XML_EXT),
            ResponseType::JSONLD => String::from(JSON_LD_EXT),
            ResponseType::NTRIPLES => String::from(NTRIPLES_EXT),
        }
    }

    pub fn from_mime(mime: &str) -> Result<Self, ()> {
        match mime {
            HTML_MIME => Ok(ResponseType::HTML),
            XML_MIME | APPLICATION_XML_MIME => Ok(ResponseType::XML),
            TURTLE_MIME => Ok(ResponseType::TURTLE),
            RDF_XML_MIME => Ok(ResponseType::RDFXML),
            JSON_LD_MIME => Ok(ResponseType::JSONLD),
            NTRIPLES_MIME => Ok(ResponseType::NTRIPLES),
            m if JSON_LD_ALIASES.contains(&m) => Ok(ResponseType::JSONLD),
            m if NTRIPLES_ALIASES.contains(&m) => Ok(ResponseType::NTRIPLES),
            _ => Err(()),
        }
    }

    pub fn to_mime(&self) -> String {
        match self {
            ResponseType::HTML => String::from(HTML_MIME),
            ResponseType::XML => String::from(XML_MIME),
            ResponseType::TURTLE => String::from(TURTLE_MIME),
            ResponseType::RDFXML => String::from(RDF_XML_MIME),
            ResponseType::JSONLD => String::from(JSON_LD_MIME),
            ResponseType::NTRIPLES => String::from(NTRIPLES_MIME),
        }
    }
}

impl ToString for ResponseType {
    fn to_string(&self) -> String {
        self.to_mime()
    }
}

impl FromStr for ResponseType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResponseType::from_mime(s)
    }
}
