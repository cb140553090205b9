pub(crate) static SURVEYS_UA_BASE: &str = "SurveysApi";
pub(crate) static SURVEYS_UA_VERSION: &str = "1";

#[inline]
pub fn basic_ua() -> String {
    format!("{}/{}", SURVEYS_UA_BASE, SURVEYS_UA_VERSION)
}
