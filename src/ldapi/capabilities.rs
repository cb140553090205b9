use crate::errors::{ErrorKind, Result};
use crate::serving::response_type::{ResponseType, HTML_MIME};
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

pub const SURVEY_CLASS: &str = "http://pid.geoscience.gov.au/def/ont/gapd#Survey";
pub const REGISTER_CLASS: &str = "http://purl.org/linked-data/registry#Register";
pub const CATALOG_CLASS: &str = "http://www.w3.org/ns/dcat#Catalog";

const BUNDLED_TABLE: &str = include_str!("../../config/classes_views_mimetypes.json");

/// A named model perspective and the mimetypes it can be rendered in.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ViewSpec {
    pub name: String,
    pub mimetypes: Vec<String>,
    #[serde(default)]
    pub default_mimetype: Option<String>,
}

impl ViewSpec {
    /// The mimetype served when the request doesn't name one.
    pub fn default_mimetype(&self) -> &str {
        self.default_mimetype.as_deref().unwrap_or(HTML_MIME)
    }
}

/// The legal views of a single resource type, in declaration order.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct CapabilityTable {
    pub default: String,
    pub views: Vec<ViewSpec>,
}

impl CapabilityTable {
    pub fn view(&self, name: &str) -> Option<&ViewSpec> {
        self.views.iter().find(|v| v.name == name)
    }

    pub fn view_names(&self) -> Vec<String> {
        self.views.iter().map(|v| v.name.clone()).collect()
    }

    pub fn default_view(&self) -> Option<&ViewSpec> {
        self.view(&self.default)
    }

    fn validate(&self, class: &str) -> Result<()> {
        let mut seen = HashSet::new();
        for view in &self.views {
            if view.name.is_empty() || !seen.insert(view.name.as_str()) {
                return Err(ErrorKind::InvalidCapabilities(format!(
                    "{} declares an empty or duplicate view name '{}'",
                    class, view.name
                ))
                .into());
            }
            if view.mimetypes.is_empty() {
                return Err(ErrorKind::InvalidCapabilities(format!(
                    "view '{}' of {} has no mimetypes",
                    view.name, class
                ))
                .into());
            }
            if let Some(mime) = view.mimetypes.iter().find(|m| ResponseType::from_mime(m).is_err()) {
                return Err(ErrorKind::UnsupportedSerialization(mime.clone()).into());
            }
            if let Some(default) = &view.default_mimetype {
                if !view.mimetypes.contains(default) {
                    return Err(ErrorKind::InvalidCapabilities(format!(
                        "default mimetype {} of view '{}' is not one of its mimetypes",
                        default, view.name
                    ))
                    .into());
                }
            }
        }

        if self.default_view().is_none() {
            return Err(ErrorKind::InvalidCapabilities(format!(
                "default view '{}' of {} is not declared",
                self.default, class
            ))
            .into());
        }

        Ok(())
    }
}

/// Process-wide capability tables, keyed by resource type URI. Loaded once at
/// startup and only read afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Capabilities(HashMap<String, CapabilityTable>);

impl Capabilities {
    /// Loads the table from `path`, or the bundled table when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Capabilities> {
        let json = match path {
            Some(path) => {
                info!(target: "surveys", "Loading capability table from {}", path.display());
                fs::read_to_string(path)?
            }
            None => String::from(BUNDLED_TABLE),
        };

        Capabilities::from_json(&json)
    }

    pub fn from_json(json: &str) -> Result<Capabilities> {
        let tables: HashMap<String, CapabilityTable> = serde_json::from_str(json)?;
        for (class, table) in &tables {
            table.validate(class)?;
        }

        Ok(Capabilities(tables))
    }

    pub fn for_type(&self, class: &str) -> Option<&CapabilityTable> {
        self.0.get(class)
    }

    /// Like `for_type`, for the resource types this service is built around.
    pub fn require(&self, class: &str) -> Result<&CapabilityTable> {
        self.for_type(class).ok_or_else(|| {
            ErrorKind::InvalidCapabilities(format!("no views declared for {}", class)).into()
        })
    }
}
