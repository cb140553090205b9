use crate::errors::Result;
use crate::ldapi::capabilities::SURVEY_CLASS;
use crate::ldapi::{resolve, CapabilityTable};
use crate::renderer::{render_alternates, Renderer, Representation, ALTERNATES_VIEW};
use crate::serving::app_state::AppState;
use crate::serving::params::{param, QueryParams, FORMAT_PARAM, VIEW_PARAM};
use crate::serving::responses::{error_response, representation_response};
use crate::survey::{parse_survey, SurveyRenderer, SurveyView};
use actix_web::{get, web, HttpResponse};

#[get("/survey/{id}")]
pub(crate) async fn show_survey(
    state: web::Data<AppState>,
    info: web::Path<(String,)>,
    query: web::Query<QueryParams>,
) -> HttpResponse {
    let id = info.into_inner().0;
    let not_found = format!("Survey with ID {} not found.", id);

    let negotiated = state
        .capabilities
        .require(SURVEY_CLASS)
        .and_then(|table| {
            resolve(param(&query, VIEW_PARAM), param(&query, FORMAT_PARAM), table)
                .map(|(view, mimetype)| (table, view, mimetype))
        });
    let (table, view, mimetype) = match negotiated {
        Ok(negotiated) => negotiated,
        Err(e) => return error_response(&state.templates, &e, None, &not_found),
    };

    match render_survey(&state, table, &id, &view, &mimetype).await {
        Ok(representation) => representation_response(representation),
        Err(e) => error_response(&state.templates, &e, Some(&mimetype), &not_found),
    }
}

async fn render_survey(
    state: &AppState,
    table: &CapabilityTable,
    id: &str,
    view: &str,
    mimetype: &str,
) -> Result<Representation> {
    // Neither of these needs the record
    if view == ALTERNATES_VIEW {
        return render_alternates(
            &state.templates,
            table,
            &state.config.survey_iri(id),
            &format!("/survey/{}", id),
        );
    }
    if view.parse::<SurveyView>() == Ok(SurveyView::Argus) {
        return Ok(Representation::Redirect(state.config.survey_url_for(id)));
    }

    let payload = state.upstream.fetch(&state.config.survey_url_for(id)).await?;
    let record = parse_survey(&payload, state.config.date_format)?;

    SurveyRenderer::new(record, &state.config, table, &state.templates).render(view, mimetype)
}

#[cfg(test)]
mod tests {
    use crate::serving::app_state::test_support::{test_config, test_state};
    use crate::serving::routes;
    use crate::serving::upstream::stub::{StubReply, StubUpstream};
    use crate::survey::fixtures::SURVEY_921_XML;
    use actix_web::http::{header, StatusCode};
    use actix_web::{test, App};
    use rio_api::parser::TriplesParser;
    use rio_turtle::TurtleParser;
    use std::sync::Arc;

    async fn get(upstream: Arc<StubUpstream>, uri: &str) -> (StatusCode, String, Option<String>, String) {
        let state = test_state(test_config(), upstream);
        let mut app = test::init_service(App::new().data(state).configure(routes)).await;

        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&mut app, req).await;
        let status = resp.status();
        let content_type = resp
            .headers()
            .get(header::CONTENT_TYPE)
            .map(|v| v.to_str().unwrap().to_string())
            .unwrap_or_default();
        let location = resp
            .headers()
            .get(header::LOCATION)
            .map(|v| v.to_str().unwrap().to_string());
        let body = test::read_body(resp).await;

        (
            status,
            content_type,
            location,
            String::from_utf8(body.to_vec()).unwrap(),
        )
    }

    #[actix_rt::test]
    async fn test_bogus_view_lists_views() {
        let upstream = StubUpstream::body(SURVEY_921_XML);
        let (status, content_type, _, body) = get(upstream.clone(), "/survey/921?_view=bogus").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(content_type.starts_with("text/plain"));
        assert_eq!(
            body,
            "The _view parameter is invalid. For this object, it must be one of \
             alternates, gapd, prov, sosa, argus."
        );
        assert_eq!(upstream.calls(), 0);
    }

    #[actix_rt::test]
    async fn test_bad_format_for_view() {
        let upstream = StubUpstream::body(SURVEY_921_XML);
        let (status, _, _, body) =
            get(upstream.clone(), "/survey/921?_view=sosa&_format=text/html").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            "The _format parameter is invalid. For this view, the format should be one of \
             text/turtle, application/rdf+xml, application/rdf+json."
        );
        assert_eq!(upstream.calls(), 0);
    }

    #[actix_rt::test]
    async fn test_no_data_is_not_found() {
        let upstream = StubUpstream::body("No data");
        let (status, content_type, _, body) = get(upstream.clone(), "/survey/999999").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(content_type.starts_with("text/html"));
        assert!(body.contains("Survey with ID 999999 not found."));
        assert_eq!(
            upstream.urls(),
            vec![String::from("http://upstream/survey?pSurveyNo=999999")]
        );
    }

    #[actix_rt::test]
    async fn test_no_data_as_turtle_is_plain() {
        let upstream = StubUpstream::body("No data");
        let (status, _, _, body) = get(upstream, "/survey/999999?_format=text/turtle").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, "Survey with ID 999999 not found.");
    }

    #[actix_rt::test]
    async fn test_default_view_is_gapd_html() {
        let upstream = StubUpstream::body(SURVEY_921_XML);
        let (status, content_type, _, body) = get(upstream.clone(), "/survey/921").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type, "text/html; charset=utf-8");
        assert!(body.contains("Goomalling, WA, 1996"));
        assert_eq!(upstream.calls(), 1);
    }

    #[actix_rt::test]
    async fn test_sosa_turtle_parses() {
        let upstream = StubUpstream::body(SURVEY_921_XML);
        let (status, content_type, _, body) =
            get(upstream, "/survey/921?_view=sosa&_format=text/turtle").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type, "text/turtle");

        let mut count = 0;
        TurtleParser::new(body.as_bytes(), "")
            .unwrap()
            .parse_all(&mut |_| -> Result<(), rio_turtle::TurtleError> {
                count += 1;
                Ok(())
            })
            .unwrap();
        assert!(count > 0);
    }

    #[actix_rt::test]
    async fn test_sosa_defaults_to_turtle() {
        let upstream = StubUpstream::body(SURVEY_921_XML);
        let (status, content_type, _, _) = get(upstream, "/survey/921?_view=sosa").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type, "text/turtle");
    }

    #[actix_rt::test]
    async fn test_plus_in_format_survives_decoding() {
        let upstream = StubUpstream::body(SURVEY_921_XML);
        let (status, content_type, _, _) =
            get(upstream, "/survey/921?_view=gapd&_format=application/rdf+xml").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type, "application/rdf+xml");
    }

    #[actix_rt::test]
    async fn test_argus_redirects_without_fetching() {
        let upstream = StubUpstream::body(SURVEY_921_XML);
        let (status, _, location, _) = get(upstream.clone(), "/survey/921?_view=argus").await;

        assert_eq!(status, StatusCode::SEE_OTHER);
        assert_eq!(
            location.as_deref(),
            Some("http://upstream/survey?pSurveyNo=921")
        );
        assert_eq!(upstream.calls(), 0);
    }

    #[actix_rt::test]
    async fn test_alternates_without_fetching() {
        let upstream = StubUpstream::body(SURVEY_921_XML);
        let (status, _, _, body) = get(upstream.clone(), "/survey/921?_view=alternates").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("/survey/921?_view=prov"));
        assert_eq!(upstream.calls(), 0);
    }

    #[actix_rt::test]
    async fn test_upstream_failures() {
        let (status, _, _, _) = get(StubUpstream::new(StubReply::Timeout), "/survey/921").await;
        assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);

        let (status, _, _, _) = get(StubUpstream::new(StubReply::Unavailable), "/survey/921").await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);

        let (status, _, _, body) = get(StubUpstream::body("<ROWSET><ROW>"), "/survey/921").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!body.contains("ROWSET"));
    }
}
