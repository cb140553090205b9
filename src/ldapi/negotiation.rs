//! Resolution of the `_view` and `_format` request parameters against a
//! resource type's capability table.

use crate::errors::{ErrorKind, Result};
use crate::ldapi::capabilities::CapabilityTable;

/// Returns the requested view if the table declares it, or the table's default
/// view when none was requested. An empty view name never matches.
pub fn resolve_view(requested: Option<&str>, table: &CapabilityTable) -> Result<String> {
    match requested {
        None => Ok(table.default.clone()),
        Some(view) => match table.view(view) {
            Some(spec) => Ok(spec.name.clone()),
            None => Err(ErrorKind::InvalidView(table.view_names()).into()),
        },
    }
}

/// Returns the requested mimetype if `view` accepts it, after turning spaces
/// back into `+` (a `+` in a query string decodes to a space).
pub fn resolve_mimetype(
    requested: Option<&str>,
    view: &str,
    table: &CapabilityTable,
) -> Result<String> {
    let spec = table
        .view(view)
        .ok_or_else(|| ErrorKind::InvalidView(table.view_names()))?;

    match requested {
        None => Ok(String::from(spec.default_mimetype())),
        Some(mimetype) => {
            let normalized = normalize_mimetype(mimetype);
            if spec.mimetypes.contains(&normalized) {
                Ok(normalized)
            } else {
                Err(ErrorKind::InvalidMimetype(spec.mimetypes.clone()).into())
            }
        }
    }
}

/// Resolves both parameters. The mimetype is only checked once the view is
/// known, since the allowed mimetypes differ per view.
pub fn resolve(
    requested_view: Option<&str>,
    requested_mimetype: Option<&str>,
    table: &CapabilityTable,
) -> Result<(String, String)> {
    let view = resolve_view(requested_view, table)?;
    let mimetype = resolve_mimetype(requested_mimetype, &view, table)?;
    debug!(target: "surveys", "Negotiated view '{}' as {}", view, mimetype);

    Ok((view, mimetype))
}

pub fn normalize_mimetype(mimetype: &str) -> String {
    mimetype.replace(' ', "+")
}
