use crate::landing::LandingRenderer;
use crate::ldapi::capabilities::CATALOG_CLASS;
use crate::ldapi::resolve;
use crate::renderer::Renderer;
use crate::serving::app_state::AppState;
use crate::serving::params::{param, QueryParams, FORMAT_PARAM, VIEW_PARAM};
use crate::serving::responses::{error_response, representation_response};
use actix_web::{get, web, HttpResponse};

const NOT_FOUND: &str = "Not found.";

#[get("/")]
pub(crate) async fn welcome(
    state: web::Data<AppState>,
    query: web::Query<QueryParams>,
) -> HttpResponse {
    let rendered = state.capabilities.require(CATALOG_CLASS).and_then(|table| {
        let (view, mimetype) =
            resolve(param(&query, VIEW_PARAM), param(&query, FORMAT_PARAM), table)?;

        LandingRenderer::new(&state.config, &state.capabilities, table, &state.templates)
            .render(&view, &mimetype)
    });

    match rendered {
        Ok(representation) => representation_response(representation),
        Err(e) => error_response(&state.templates, &e, None, NOT_FOUND),
    }
}

#[cfg(test)]
mod tests {
    use crate::serving::app_state::test_support::{test_config, test_state};
    use crate::serving::routes;
    use crate::serving::upstream::stub::StubUpstream;
    use actix_web::dev::ServiceResponse;
    use actix_web::http::{header, StatusCode};
    use actix_web::{test, App};

    async fn get(uri: &str) -> ServiceResponse {
        let state = test_state(test_config(), StubUpstream::body("No data"));
        let mut app = test::init_service(App::new().data(state).configure(routes)).await;

        test::call_service(&mut app, test::TestRequest::get().uri(uri).to_request()).await
    }

    fn content_type(resp: &ServiceResponse) -> String {
        resp.headers()
            .get(header::CONTENT_TYPE)
            .map(|v| v.to_str().unwrap().to_string())
            .unwrap_or_default()
    }

    #[actix_rt::test]
    async fn test_landing_page() {
        let resp = get("/").await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(content_type(&resp), "text/html; charset=utf-8");
        let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
        assert!(body.contains("href=\"/survey/\""));
    }

    #[actix_rt::test]
    async fn test_capabilities_document() {
        let resp = get("/?_view=getcapabilities").await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(content_type(&resp), "text/xml");
        let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
        assert!(body.contains("<LDAPI_Capabilities"));
        assert!(body.contains("<SurveyRegister>"));
    }

    #[actix_rt::test]
    async fn test_landing_rejects_register_view() {
        let resp = get("/?_view=reg").await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
        assert_eq!(
            body,
            "The _view parameter is invalid. For this object, it must be one of \
             alternates, landingpage, getcapabilities."
        );
    }
}
