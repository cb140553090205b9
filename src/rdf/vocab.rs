//! Namespaces and terms used by the survey and register models.

pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";

pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
pub const RDFS_LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";
pub const RDFS_COMMENT: &str = "http://www.w3.org/2000/01/rdf-schema#comment";
pub const RDFS_SUB_CLASS_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subClassOf";

pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";
pub const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
pub const XSD_DATE: &str = "http://www.w3.org/2001/XMLSchema#date";

pub const PROV: &str = "http://www.w3.org/ns/prov#";
pub const PROV_ACTIVITY: &str = "http://www.w3.org/ns/prov#Activity";
pub const PROV_AGENT: &str = "http://www.w3.org/ns/prov#Agent";
pub const PROV_ENTITY: &str = "http://www.w3.org/ns/prov#Entity";
pub const PROV_ORG: &str = "http://www.w3.org/ns/prov#Org";
pub const PROV_ATTRIBUTION: &str = "http://www.w3.org/ns/prov#Attribution";
pub const PROV_AGENT_PROP: &str = "http://www.w3.org/ns/prov#agent";
pub const PROV_HAD_ROLE: &str = "http://www.w3.org/ns/prov#hadRole";
pub const PROV_HAD_LOCATION: &str = "http://www.w3.org/ns/prov#hadLocation";
pub const PROV_QUALIFIED_ATTRIBUTION: &str = "http://www.w3.org/ns/prov#qualifiedAttribution";
pub const PROV_WAS_ASSOCIATED_WITH: &str = "http://www.w3.org/ns/prov#wasAssociatedWith";
pub const PROV_WAS_ATTRIBUTED_TO: &str = "http://www.w3.org/ns/prov#wasAttributedTo";
pub const PROV_WAS_GENERATED_BY: &str = "http://www.w3.org/ns/prov#wasGeneratedBy";
pub const PROV_USED: &str = "http://www.w3.org/ns/prov#used";
pub const PROV_WAS_DERIVED_FROM: &str = "http://www.w3.org/ns/prov#wasDerivedFrom";
pub const PROV_WAS_INFORMED_BY: &str = "http://www.w3.org/ns/prov#wasInformedBy";

pub const AUROLE: &str = "http://communications.data.gov.au/def/role/";
pub const AUROLE_PRINCIPAL_INVESTIGATOR: &str =
    "http://communications.data.gov.au/def/role/PrincipalInvestigator";
pub const AUROLE_SPONSOR: &str = "http://communications.data.gov.au/def/role/Sponsor";
pub const AUROLE_PROCESSOR: &str = "http://communications.data.gov.au/def/role/Processor";
pub const AUROLE_PUBLISHER: &str = "http://communications.data.gov.au/def/role/Publisher";

pub const GEOSP: &str = "http://www.opengis.net/ont/geosparql#";
pub const GEOSP_GEOMETRY: &str = "http://www.opengis.net/ont/geosparql#Geometry";
pub const GEOSP_AS_WKT: &str = "http://www.opengis.net/ont/geosparql#asWKT";
pub const GEOSP_HAS_GEOMETRY: &str = "http://www.opengis.net/ont/geosparql#hasGeometry";
pub const GEOSP_WKT_LITERAL: &str = "http://www.opengis.net/ont/geosparql#wktLiteral";

pub const SAMFL: &str = "http://def.seegrid.csiro.au/ontology/om/sam-lite#";
pub const SAMFL_POLYGON: &str = "http://def.seegrid.csiro.au/ontology/om/sam-lite#Polygon";

pub const GAPD: &str = "http://pid.geoscience.gov.au/def/ont/gapd#";
pub const GAPD_PUBLIC_SURVEY: &str = "http://pid.geoscience.gov.au/def/ont/gapd#PublicSurvey";
pub const GAPD_SURVEY: &str = "http://pid.geoscience.gov.au/def/ont/gapd#Survey";

pub const SOSA: &str = "http://www.w3.org/ns/sosa/";
pub const SOSA_SAMPLING: &str = "http://www.w3.org/ns/sosa/Sampling";
pub const SOSA_SAMPLER: &str = "http://www.w3.org/ns/sosa/Sampler";
pub const SOSA_SAMPLE: &str = "http://www.w3.org/ns/sosa/Sample";
pub const SOSA_PLATFORM: &str = "http://www.w3.org/ns/sosa/Platform";
pub const SOSA_MADE_SAMPLING: &str = "http://www.w3.org/ns/sosa/madeSampling";
pub const SOSA_IS_HOSTED_BY: &str = "http://www.w3.org/ns/sosa/isHostedBy";
pub const SOSA_HAS_FEATURE_OF_INTEREST: &str = "http://www.w3.org/ns/sosa/hasFeatureOfInterest";
pub const SOSA_HAS_RESULT: &str = "http://www.w3.org/ns/sosa/hasResult";
pub const SOSA_HAS_SAMPLE: &str = "http://www.w3.org/ns/sosa/hasSample";

pub const TIME: &str = "http://www.w3.org/2006/time#";
pub const TIME_PROPER_INTERVAL: &str = "http://www.w3.org/2006/time#ProperInterval";
pub const TIME_INSTANT: &str = "http://www.w3.org/2006/time#Instant";
pub const TIME_IN_XSD_DATE_TIME: &str = "http://www.w3.org/2006/time#inXSDDateTime";
pub const TIME_HAS_BEGINNING: &str = "http://www.w3.org/2006/time#hasBeginning";
pub const TIME_HAS_END: &str = "http://www.w3.org/2006/time#hasEnd";
pub const TIME_HAS_TIME: &str = "http://www.w3.org/2006/time#hasTime";

pub const REG: &str = "http://purl.org/linked-data/registry#";
pub const REG_REGISTER: &str = "http://purl.org/linked-data/registry#Register";
pub const REG_REGISTER_PROP: &str = "http://purl.org/linked-data/registry#register";
pub const REG_CONTAINED_ITEM_CLASS: &str =
    "http://purl.org/linked-data/registry#containedItemClass";
