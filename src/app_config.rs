use crate::errors::{ErrorKind, Result};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use std::env;
use std::str::FromStr;
use url::Url;

/// Date notation used by the upstream XML API.
///
/// The upstream has switched notation between releases and the two overlap
/// ("05-DEC-96" is not ISO, but "2016-05-12" style prefixes are ambiguous
/// to a guesser), so the notation is fixed per deployment.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum DateFormat {
    /// `YYYY-MM-DDTHH:MM:SS`
    Iso,
    /// `DD-MON-YY`, as emitted by older Oracle views
    DayMonthYear,
}

impl DateFormat {
    pub fn pattern(self) -> &'static str {
        match self {
            DateFormat::Iso => "%Y-%m-%dT%H:%M:%S",
            DateFormat::DayMonthYear => "%d-%b-%y",
        }
    }
}

impl FromStr for DateFormat {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "iso" => Ok(DateFormat::Iso),
            "dd-mon-yy" => Ok(DateFormat::DayMonthYear),
            _ => Err(()),
        }
    }
}

/// Fills the `{id}` placeholder of an upstream record URL template.
pub fn fill_survey_url(template: &str, id: &str) -> String {
    template.replace("{id}", &utf8_percent_encode(id, NON_ALPHANUMERIC).to_string())
}

#[derive(Clone, PartialEq, Debug)]
pub struct AppConfig {
    /// The address the server should listen to
    pub binding: String,
    /// The port the server should listen to
    pub port: String,
    /// Prefix minted survey IRIs are formed from
    pub base_uri_survey: String,
    /// Public root of this service, used in the capabilities document
    pub service_url: String,
    /// Upstream record URL, `{id}` is replaced by the survey id
    pub survey_url: String,
    /// Upstream listing URL, with `{page}` and `{per_page}` placeholders
    pub register_url: String,
    /// The timeout for upstream requests in seconds
    pub upstream_timeout: u64,
    pub date_format: DateFormat,
    /// `UPSTREAM_DATE_FORMAT` as given, checked by `validate`
    pub date_format_setting: Option<String>,
    /// Overrides the bundled capability table
    pub capabilities_path: Option<String>,
    /// Estimated number of surveys upstream, used for the `last` page link
    pub survey_count_estimate: Option<u64>,
}

impl AppConfig {
    pub fn survey_url_for(&self, id: &str) -> String {
        fill_survey_url(&self.survey_url, id)
    }

    pub fn register_url_for(&self, page: u32, per_page: u32) -> String {
        self.register_url
            .replace("{page}", &page.to_string())
            .replace("{per_page}", &per_page.to_string())
    }

    pub fn survey_iri(&self, id: &str) -> String {
        format!("{}{}", self.base_uri_survey, id)
    }

    /// Checks that every configured URL parses, that the upstream record
    /// URL has a place for the survey id and that a given date notation is
    /// one we know.
    pub fn validate(&self) -> Result<()> {
        if let Some(setting) = &self.date_format_setting {
            if setting.parse::<DateFormat>().is_err() {
                bail!(ErrorKind::Msg(format!(
                    "UPSTREAM_DATE_FORMAT must be one of iso, dd-mon-yy, not {}",
                    setting
                )))
            }
        }

        let urls = [
            ("BASE_URI_SURVEY", &self.base_uri_survey),
            ("SERVICE_URL", &self.service_url),
            ("XML_API_URL_SURVEY", &self.survey_url),
            ("XML_API_URL_SURVEY_REGISTER", &self.register_url),
        ];
        for (name, value) in urls.iter() {
            if let Err(e) = Url::parse(value) {
                bail!(ErrorKind::Msg(format!("{} is not a valid URL ({}): {}", name, e, value)))
            }
        }
        if !self.survey_url.contains("{id}") {
            bail!(ErrorKind::Msg(String::from(
                "XML_API_URL_SURVEY must contain an {id} placeholder"
            )))
        }

        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            binding: env::var("BINDING").unwrap_or("0.0.0.0".into()),
            port: env::var("PORT").unwrap_or("3030".into()),
            base_uri_survey: env::var("BASE_URI_SURVEY")
                .unwrap_or("http://pid.geoscience.gov.au/survey/".into()),
            service_url: env::var("SERVICE_URL")
                .unwrap_or("http://pid.geoscience.gov.au/service/survey/".into()),
            survey_url: env::var("XML_API_URL_SURVEY").unwrap_or(
                "http://dbforms.ga.gov.au/www/argus.argus_api.survey?pSurveyNo={id}".into(),
            ),
            register_url: env::var("XML_API_URL_SURVEY_REGISTER").unwrap_or(
                "http://dbforms.ga.gov.au/www/argus.argus_api.SearchSurveys\
                 ?pOrder=SURVEYID&pPageno={page}&pNoOfRecordsPerPage={per_page}"
                    .into(),
            ),
            upstream_timeout: env::var("UPSTREAM_TIMEOUT")
                .ok()
                .and_then(|v| v.parse::<u64>().ok())
                .unwrap_or(20),
            date_format: env::var("UPSTREAM_DATE_FORMAT")
                .ok()
                .and_then(|v| v.parse::<DateFormat>().ok())
                .unwrap_or(DateFormat::Iso),
            date_format_setting: env::var("UPSTREAM_DATE_FORMAT").ok(),
            capabilities_path: env::var("CAPABILITIES_PATH").ok(),
            survey_count_estimate: env::var("SURVEY_COUNT_ESTIMATE")
                .ok()
                .and_then(|v| v.parse::<u64>().ok()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_templates() {
        let config = AppConfig {
            survey_url: "http://upstream/survey?pSurveyNo={id}".into(),
            register_url: "http://upstream/list?p={page}&n={per_page}".into(),
            ..AppConfig::default()
        };

        assert_eq!(
            config.survey_url_for("921"),
            "http://upstream/survey?pSurveyNo=921"
        );
        assert_eq!(
            config.survey_url_for("9&x=1"),
            "http://upstream/survey?pSurveyNo=9%26x%3D1"
        );
        assert_eq!(
            config.register_url_for(3, 50),
            "http://upstream/list?p=3&n=50"
        );
    }

    #[test]
    fn test_validate() {
        assert!(AppConfig::default().validate().is_ok());

        let relative = AppConfig {
            service_url: "/service/survey/".into(),
            ..AppConfig::default()
        };
        assert!(relative.validate().is_err());

        let no_placeholder = AppConfig {
            survey_url: "http://upstream/survey".into(),
            ..AppConfig::default()
        };
        assert!(no_placeholder.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_unknown_date_notation() {
        let typo = AppConfig {
            date_format: DateFormat::Iso,
            date_format_setting: Some("dd/mon/yy".into()),
            ..AppConfig::default()
        };
        let err = typo.validate().unwrap_err();
        assert!(err.to_string().contains("dd/mon/yy"));

        let known = AppConfig {
            date_format: DateFormat::DayMonthYear,
            date_format_setting: Some("DD-MON-YY".into()),
            ..AppConfig::default()
        };
        assert!(known.validate().is_ok());

        let unset = AppConfig {
            date_format_setting: None,
            ..AppConfig::default()
        };
        assert!(unset.validate().is_ok());
    }

    #[test]
    fn test_date_format_from_str() {
        assert_eq!("ISO".parse::<DateFormat>(), Ok(DateFormat::Iso));
        assert_eq!(
            "dd-mon-yy".parse::<DateFormat>(),
            Ok(DateFormat::DayMonthYear)
        );
        assert!("auto".parse::<DateFormat>().is_err());
    }
}
