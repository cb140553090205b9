use crate::errors::{Error, ErrorKind};
use crate::renderer::Representation;
use crate::serving::response_type::{ResponseType, HTML_MIME};
use crate::serving::ua::basic_ua;
use crate::templates::Templates;
use actix_web::dev::HttpResponseBuilder;
use actix_web::http::header;
use actix_web::HttpResponse;
use serde_json::json;

const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";
const PLAIN_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

pub(crate) fn set_default_headers<'a>(
    res: &'a mut HttpResponseBuilder,
    response_type: &'a ResponseType,
) -> &'a mut HttpResponseBuilder {
    set_default_headers_str(res, response_type.to_string().as_ref())
}

pub(crate) fn set_default_headers_str<'a>(
    res: &'a mut HttpResponseBuilder,
    content_type: &str,
) -> &'a mut HttpResponseBuilder {
    res.set_header(header::SERVER, basic_ua())
        .set_header(header::CONTENT_TYPE, content_type)
        .set_header(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*")
        .set_header(header::ACCESS_CONTROL_ALLOW_METHODS, "GET, OPTIONS")
        .set_header(header::ACCESS_CONTROL_MAX_AGE, 86400u32.to_string())
        .set_header(header::VARY, "Accept, Accept-Encoding, Origin")
}

pub(crate) fn representation_response(representation: Representation) -> HttpResponse {
    match representation {
        Representation::Rdf {
            body,
            response_type,
            filename,
        } => set_default_headers(&mut HttpResponse::Ok(), &response_type)
            .set_header(
                header::CONTENT_DISPOSITION,
                format!("inline; filename={}", filename),
            )
            .body(body),
        Representation::Html(html) => {
            set_default_headers_str(&mut HttpResponse::Ok(), HTML_CONTENT_TYPE).body(html)
        }
        Representation::Xml(xml) => {
            set_default_headers(&mut HttpResponse::Ok(), &ResponseType::XML).body(xml)
        }
        Representation::Redirect(url) => HttpResponse::SeeOther()
            .set_header(header::SERVER, basic_ua())
            .set_header(header::LOCATION, url)
            .finish(),
    }
}

fn plain(res: &mut HttpResponseBuilder, message: String) -> HttpResponse {
    set_default_headers_str(res, PLAIN_CONTENT_TYPE).body(message)
}

/// Turns an error into its response. `not_found` is the message shown when
/// the upstream had no data, `mimetype` the negotiated one if negotiation got
/// that far.
pub(crate) fn error_response(
    templates: &Templates,
    err: &Error,
    mimetype: Option<&str>,
    not_found: &str,
) -> HttpResponse {
    let wants_html = mimetype.map_or(true, |m| m == HTML_MIME);

    match err.kind() {
        ErrorKind::InvalidView(_)
        | ErrorKind::InvalidMimetype(_)
        | ErrorKind::InvalidPagination(_) => {
            debug!(target: "surveys", "Rejected request: {}", err);
            plain(&mut HttpResponse::BadRequest(), err.to_string())
        }
        ErrorKind::NoData => {
            debug!(target: "surveys", "{}", not_found);
            if wants_html {
                let page = json!({ "title": "Not found", "message": not_found });
                if let Ok(html) = templates.render("not_found", &page) {
                    return set_default_headers_str(&mut HttpResponse::NotFound(), HTML_CONTENT_TYPE)
                        .body(html);
                }
            }
            plain(&mut HttpResponse::NotFound(), String::from(not_found))
        }
        ErrorKind::Timeout => {
            warn!(target: "surveys", "Upstream timed out");
            plain(
                &mut HttpResponse::GatewayTimeout(),
                String::from("The upstream survey service did not respond in time."),
            )
        }
        ErrorKind::UpstreamUnavailable(reason) => {
            warn!(target: "surveys", "Upstream unavailable: {}", reason);
            plain(
                &mut HttpResponse::BadGateway(),
                String::from("The upstream survey service is unavailable."),
            )
        }
        _ => {
            error!(target: "surveys", "Error handling request: {}", err);
            let page = json!({ "title": "Error" });
            match templates.render("error", &page) {
                Ok(html) => {
                    set_default_headers_str(&mut HttpResponse::InternalServerError(), HTML_CONTENT_TYPE)
                        .body(html)
                }
                Err(_) => HttpResponse::InternalServerError().finish(),
            }
        }
    }
}
