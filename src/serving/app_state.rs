use crate::app_config::AppConfig;
use crate::errors::Result;
use crate::ldapi::Capabilities;
use crate::serving::upstream::SharedUpstream;
use crate::templates::Templates;
use std::path::Path;
use std::sync::Arc;

/// Read-only state shared by every worker.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub capabilities: Arc<Capabilities>,
    pub templates: Arc<Templates>,
    pub upstream: SharedUpstream,
}

impl AppState {
    /// Validates the configuration, loads the capability table and compiles
    /// the templates. Fails when any of them is inconsistent.
    pub fn new(config: AppConfig, upstream: SharedUpstream) -> Result<AppState> {
        config.validate()?;
        let capabilities = Capabilities::load(config.capabilities_path.as_deref().map(Path::new))?;
        let templates = Templates::new()?;

        Ok(AppState {
            config: Arc::new(config),
            capabilities: Arc::new(capabilities),
            templates: Arc::new(templates),
            upstream,
        })
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::app_config::DateFormat;

    pub(crate) fn test_config() -> AppConfig {
        AppConfig {
            binding: String::from("127.0.0.1"),
            port: String::from("0"),
            base_uri_survey: String::from("http://pid.geoscience.gov.au/survey/"),
            service_url: String::from("http://pid.geoscience.gov.au/service/survey/"),
            survey_url: String::from("http://upstream/survey?pSurveyNo={id}"),
            register_url: String::from("http://upstream/list?p={page}&n={per_page}"),
            upstream_timeout: 1,
            date_format: DateFormat::Iso,
            date_format_setting: None,
            capabilities_path: None,
            survey_count_estimate: None,
        }
    }

    pub(crate) fn test_state(config: AppConfig, upstream: SharedUpstream) -> AppState {
        AppState::new(config, upstream).unwrap()
    }
}
