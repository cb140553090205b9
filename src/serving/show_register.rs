use crate::errors::Result;
use crate::ldapi::capabilities::REGISTER_CLASS;
use crate::ldapi::{resolve, CapabilityTable};
use crate::register::{parse_register, RegisterRenderer, REGISTER_VIEW};
use crate::renderer::{render_alternates, Renderer, Representation, ALTERNATES_VIEW};
use crate::serving::app_state::AppState;
use crate::serving::pagination::Page;
use crate::serving::params::{
    param, QueryParams, FORMAT_PARAM, PAGE_PARAM, PER_PAGE_PARAM, VIEW_PARAM,
};
use crate::serving::responses::{error_response, representation_response};
use actix_web::http::{header, HeaderValue};
use actix_web::{get, web, HttpResponse};

const NOT_FOUND: &str = "No surveys found.";

#[get("/survey/")]
pub(crate) async fn show_register(
    state: web::Data<AppState>,
    query: web::Query<QueryParams>,
) -> HttpResponse {
    let negotiated = state.capabilities.require(REGISTER_CLASS).and_then(|table| {
        let (view, mimetype) =
            resolve(param(&query, VIEW_PARAM), param(&query, FORMAT_PARAM), table)?;
        let page = Page::from_params(
            param(&query, PAGE_PARAM),
            param(&query, PER_PAGE_PARAM),
            state.config.survey_count_estimate,
        )?;

        Ok((table, view, mimetype, page))
    });
    let (table, view, mimetype, page) = match negotiated {
        Ok(negotiated) => negotiated,
        Err(e) => return error_response(&state.templates, &e, None, NOT_FOUND),
    };

    match render_register(&state, table, &view, &mimetype, page).await {
        Ok((representation, link)) => {
            let mut response = representation_response(representation);
            if let Some(link) = link.and_then(|l| HeaderValue::from_str(&l).ok()) {
                response.headers_mut().insert(header::LINK, link);
            }

            response
        }
        Err(e) => error_response(&state.templates, &e, Some(&mimetype), NOT_FOUND),
    }
}

/// Renders one page of the register, along with its `Link` header value.
async fn render_register(
    state: &AppState,
    table: &CapabilityTable,
    view: &str,
    mimetype: &str,
    page: Page,
) -> Result<(Representation, Option<String>)> {
    if view == ALTERNATES_VIEW {
        let alternates = render_alternates(
            &state.templates,
            table,
            &state.config.base_uri_survey,
            "/survey/",
        )?;
        return Ok((alternates, None));
    }

    let url = state.config.register_url_for(page.page, page.per_page);
    let payload = state.upstream.fetch(&url).await?;
    let items = parse_register(&payload)?;
    debug!(
        target: "surveys",
        "Register page {} holds {} surveys",
        page.page,
        items.len()
    );

    let renderer = RegisterRenderer::new(
        &state.config.base_uri_survey,
        items,
        page,
        table,
        &state.templates,
    );
    let link = if view == REGISTER_VIEW {
        Some(renderer.link_header())
    } else {
        None
    };

    Ok((renderer.render(view, mimetype)?, link))
}

#[cfg(test)]
mod tests {
    use crate::serving::app_state::test_support::{test_config, test_state};
    use crate::serving::routes;
    use crate::serving::upstream::stub::{StubReply, StubUpstream};
    use crate::survey::fixtures::REGISTER_XML;
    use actix_web::dev::ServiceResponse;
    use actix_web::http::{header, StatusCode};
    use actix_web::{test, App};
    use std::sync::Arc;

    async fn get(upstream: Arc<StubUpstream>, uri: &str) -> ServiceResponse {
        let state = test_state(test_config(), upstream);
        let mut app = test::init_service(App::new().data(state).configure(routes)).await;

        let req = test::TestRequest::get().uri(uri).to_request();
        test::call_service(&mut app, req).await
    }

    fn header_value(resp: &ServiceResponse, name: header::HeaderName) -> Option<String> {
        resp.headers()
            .get(name)
            .map(|v| v.to_str().unwrap().to_string())
    }

    #[actix_rt::test]
    async fn test_oversized_page_is_rejected_before_fetching() {
        let upstream = StubUpstream::body(REGISTER_XML);
        let resp = get(upstream.clone(), "/survey/?per_page=500").await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body = test::read_body(resp).await;
        assert_eq!(
            String::from_utf8(body.to_vec()).unwrap(),
            "The per_page parameter must be at most 100."
        );
        assert_eq!(upstream.calls(), 0);
    }

    #[actix_rt::test]
    async fn test_non_numeric_page_is_rejected() {
        let upstream = StubUpstream::body(REGISTER_XML);
        let resp = get(upstream.clone(), "/survey/?page=two").await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(upstream.calls(), 0);
    }

    #[actix_rt::test]
    async fn test_register_page_with_links() {
        let upstream = StubUpstream::body(REGISTER_XML);
        let resp = get(upstream.clone(), "/survey/?page=2&per_page=3").await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            header_value(&resp, header::LINK).unwrap(),
            "</survey/?page=1&per_page=3>; rel=\"first\", \
             </survey/?page=1&per_page=3>; rel=\"prev\", \
             </survey/?page=3&per_page=3>; rel=\"next\""
        );
        assert_eq!(
            upstream.urls(),
            vec![String::from("http://upstream/list?p=2&n=3")]
        );

        let body = test::read_body(resp).await;
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("Kalgoorlie, WA, 1996"));
    }

    #[actix_rt::test]
    async fn test_register_as_turtle() {
        let upstream = StubUpstream::body(REGISTER_XML);
        let resp = get(upstream, "/survey/?_format=text/turtle").await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(header_value(&resp, header::CONTENT_TYPE).unwrap(), "text/turtle");

        let body = test::read_body(resp).await;
        let turtle = String::from_utf8(body.to_vec()).unwrap();
        assert!(turtle.contains("<http://pid.geoscience.gov.au/survey/921>"));
    }

    #[actix_rt::test]
    async fn test_page_past_the_end_is_empty() {
        let upstream = StubUpstream::body("No data");
        let resp = get(upstream, "/survey/?page=9000").await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            header_value(&resp, header::LINK).unwrap(),
            "</survey/?page=1&per_page=20>; rel=\"first\", \
             </survey/?page=8999&per_page=20>; rel=\"prev\""
        );
    }

    #[actix_rt::test]
    async fn test_register_alternates() {
        let upstream = StubUpstream::body(REGISTER_XML);
        let resp = get(upstream.clone(), "/survey/?_view=alternates").await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert!(header_value(&resp, header::LINK).is_none());
        assert_eq!(upstream.calls(), 0);
    }

    #[actix_rt::test]
    async fn test_upstream_timeout() {
        let resp = get(StubUpstream::new(StubReply::Timeout), "/survey/").await;

        assert_eq!(resp.status(), StatusCode::GATEWAY_TIMEOUT);
    }
}
