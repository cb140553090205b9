//! Upstream payloads shared by the tests.

use crate::app_config::DateFormat;
use crate::survey::parsing::parse_survey;
use crate::survey::record::SurveyRecord;

pub(crate) const SURVEY_921_XML: &str = r#"<?xml version="1.0" ?>
<ROWSET>
    <ROW>
        <SURVEYID>921</SURVEYID>
        <SURVEYNAME>Goomalling, WA, 1996</SURVEYNAME>
        <STATE>WA</STATE>
        <OPERATOR>Stockdale Prospecting Ltd.</OPERATOR>
        <CONTRACTOR>Kevron Geophysics Pty Ltd</CONTRACTOR>
        <PROCESSOR>Kevron Geophysics Pty Ltd</PROCESSOR>
        <SURVEY_TYPE>Detailed</SURVEY_TYPE>
        <DATATYPES>MAG,RAL,ELE</DATATYPES>
        <VESSEL>Aero Commander</VESSEL>
        <VESSEL_TYPE>Plane</VESSEL_TYPE>
        <RELEASEDATE/>
        <ONSHORE_OFFSHORE>Onshore</ONSHORE_OFFSHORE>
        <STARTDATE>1996-12-05T00:00:00</STARTDATE>
        <ENDDATE>1996-12-22T00:00:00</ENDDATE>
        <WLONG>116.366662</WLONG>
        <ELONG>117.749996</ELONG>
        <SLAT>-31.483336</SLAT>
        <NLAT>-30.566668</NLAT>
        <LINE_KM>35665</LINE_KM>
        <TOTAL_KM/>
        <LINE_SPACING>250</LINE_SPACING>
        <LINE_DIRECTION>180</LINE_DIRECTION>
        <TIE_SPACING></TIE_SPACING>
        <SQUARE_KM/>
        <CRYSTAL_VOLUME>33.6</CRYSTAL_VOLUME>
        <UP_CRYSTAL_VOLUME>4.2</UP_CRYSTAL_VOLUME>
        <DIGITAL_DATA>MAG,RAL,ELE</DIGITAL_DATA>
        <GEODETIC_DATUM>WGS84</GEODETIC_DATUM>
        <ASL/>
        <AGL>60</AGL>
        <MAG_INSTRUMENT>Scintrex CS2</MAG_INSTRUMENT>
        <RAD_INSTRUMENT>Exploranium GR820</RAD_INSTRUMENT>
    </ROW>
</ROWSET>
"#;

pub(crate) const SURVEY_921_ORACLE_XML: &str = r#"<?xml version="1.0" ?>
<ROWSET>
    <ROW>
        <SURVEYID>921</SURVEYID>
        <SURVEYNAME>Goomalling, WA, 1996</SURVEYNAME>
        <STARTDATE>05-DEC-96</STARTDATE>
        <ENDDATE>22-DEC-96</ENDDATE>
    </ROW>
</ROWSET>
"#;

pub(crate) const REGISTER_XML: &str = r#"<?xml version="1.0" ?>
<ROWSET>
    <ROW>
        <SURVEYID>920</SURVEYID>
        <SURVEYNAME>Kalgoorlie, WA, 1996</SURVEYNAME>
    </ROW>
    <ROW>
        <SURVEYID>921</SURVEYID>
        <SURVEYNAME>Goomalling, WA, 1996</SURVEYNAME>
    </ROW>
    <ROW>
        <SURVEYID>922</SURVEYID>
        <SURVEYNAME/>
    </ROW>
</ROWSET>
"#;

pub(crate) fn survey_921() -> SurveyRecord {
    parse_survey(SURVEY_921_XML.as_bytes(), DateFormat::Iso).unwrap()
}
