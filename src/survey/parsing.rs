use crate::app_config::DateFormat;
use crate::errors::{Error, ErrorKind, Result};
use crate::survey::record::SurveyRecord;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::collections::HashMap;

/// The upstream answers unknown ids with a plain text body containing this
/// instead of an error status.
pub const NO_DATA_SENTINEL: &str = "No data";

const ROW_TAG: &str = "ROW";

/// The non-empty fields of a single `ROW` element, keyed by tag name.
pub type Row = HashMap<String, String>;

/// Parses an upstream survey response into its record.
pub fn parse_survey(payload: &[u8], date_format: DateFormat) -> Result<SurveyRecord> {
    let rows = parse_payload(payload)?;

    match rows.first() {
        Some(row) => SurveyRecord::from_row(row, date_format),
        None => Err(ErrorKind::NoData.into()),
    }
}

/// Checks the payload for the no-data sentinel, then reads every `ROW` of a
/// `ROWSET` document.
pub fn parse_payload(payload: &[u8]) -> Result<Vec<Row>> {
    let xml = std::str::from_utf8(payload)
        .map_err(|e| ErrorKind::MalformedXml(format!("payload is not UTF-8: {}", e)))?;

    if xml.contains(NO_DATA_SENTINEL) {
        debug!(target: "surveys", "Upstream reported no data");
        return Err(ErrorKind::NoData.into());
    }

    parse_rows(xml)
}

/// Reads the flat `ROW` records of a document. Fields are the direct children
/// of a `ROW`; empty fields are left out and unknown tags are kept as-is for
/// the caller to ignore.
pub fn parse_rows(xml: &str) -> Result<Vec<Row>> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut rows = Vec::new();
    let mut depth = 0usize;
    let mut seen_root = false;
    // Depth of the open ROW element, with the fields collected so far
    let mut row: Option<(usize, Row)> = None;
    // Tag and text of the open field element
    let mut field: Option<(String, String)> = None;

    loop {
        let event = reader.read_event().map_err(|e| {
            malformed(format!(
                "at position {}: {}",
                reader.buffer_position(),
                e
            ))
        })?;

        match event {
            Event::Start(e) => {
                if depth == 0 {
                    if seen_root {
                        return Err(malformed("more than one root element"));
                    }
                    seen_root = true;
                }
                depth += 1;

                let name = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();
                match &row {
                    None if name == ROW_TAG => row = Some((depth, Row::new())),
                    Some((row_depth, _)) if depth == row_depth + 1 => {
                        field = Some((name, String::new()))
                    }
                    _ => (),
                }
            }
            Event::Empty(e) => {
                if depth == 0 {
                    if seen_root {
                        return Err(malformed("more than one root element"));
                    }
                    seen_root = true;
                }

                if row.is_none() && e.local_name().as_ref() == ROW_TAG.as_bytes() {
                    rows.push(Row::new());
                }
            }
            Event::Text(e) => {
                let text = e
                    .unescape()
                    .map_err(|e| malformed(format!("bad text content: {}", e)))?;
                match field.as_mut() {
                    Some((_, value)) => value.push_str(&text),
                    None if depth == 0 && !text.trim().is_empty() => {
                        return Err(malformed("text outside of the root element"));
                    }
                    None => (),
                }
            }
            Event::CData(e) => {
                if let Some((_, value)) = field.as_mut() {
                    value.push_str(&String::from_utf8_lossy(&e.into_inner()));
                }
            }
            Event::End(_) => {
                match row.take() {
                    Some((row_depth, mut fields)) if depth == row_depth + 1 => {
                        if let Some((tag, value)) = field.take() {
                            let value = value.trim();
                            if !value.is_empty() {
                                fields.insert(tag, String::from(value));
                            }
                        }
                        row = Some((row_depth, fields));
                    }
                    Some((row_depth, fields)) if depth == row_depth => rows.push(fields),
                    other => row = other,
                }
                depth = depth.saturating_sub(1);
            }
            Event::Eof => break,
            _ => (),
        }
    }

    if !seen_root {
        return Err(malformed("no root element"));
    }
    if depth != 0 {
        return Err(malformed("document ended inside an element"));
    }

    Ok(rows)
}

fn malformed<T: Into<String>>(reason: T) -> Error {
    ErrorKind::MalformedXml(reason.into()).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::survey::fixtures::{SURVEY_921_ORACLE_XML, SURVEY_921_XML};
    use chrono::NaiveDate;

    #[test]
    fn test_parse_survey_921() {
        let record = parse_survey(SURVEY_921_XML.as_bytes(), DateFormat::Iso).unwrap();

        assert_eq!(record.identifier, "921");
        assert_eq!(record.name.as_deref(), Some("Goomalling, WA, 1996"));
        assert_eq!(record.contractor.as_deref(), Some("Kevron Geophysics Pty Ltd"));
        assert_eq!(record.w_long, Some(116.366662));
        assert_eq!(record.n_lat, Some(-30.566668));
        assert_eq!(
            record.start_date.map(|d| d.date()),
            NaiveDate::from_ymd_opt(1996, 12, 5)
        );
        assert_eq!(record.mag_instrument.as_deref(), Some("Scintrex CS2"));
    }

    #[test]
    fn test_empty_fields_are_absent() {
        let record = parse_survey(SURVEY_921_XML.as_bytes(), DateFormat::Iso).unwrap();

        assert_eq!(record.release_date, None);
        assert_eq!(record.total_km, None);
        assert_eq!(record.asl, None);
        // <TIE_SPACING></TIE_SPACING> is written out but empty
        assert_eq!(record.tie_spacing, None);
    }

    #[test]
    fn test_oracle_dates_need_configuration() {
        let err = parse_survey(SURVEY_921_ORACLE_XML.as_bytes(), DateFormat::Iso).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::InvalidDate(_)));

        let record =
            parse_survey(SURVEY_921_ORACLE_XML.as_bytes(), DateFormat::DayMonthYear).unwrap();
        assert_eq!(
            record.end_date.map(|d| d.date()),
            NaiveDate::from_ymd_opt(1996, 12, 22)
        );
    }

    #[test]
    fn test_no_data_sentinel() {
        let err = parse_survey(b"No data found for survey 999999", DateFormat::Iso).unwrap_err();

        assert!(matches!(err.kind(), ErrorKind::NoData));
    }

    #[test]
    fn test_empty_rowset_is_no_data() {
        let err = parse_survey(b"<?xml version=\"1.0\"?><ROWSET/>", DateFormat::Iso).unwrap_err();

        assert!(matches!(err.kind(), ErrorKind::NoData));
    }

    #[test]
    fn test_mismatched_tags_are_malformed() {
        let err = parse_survey(
            b"<ROWSET><ROW><SURVEYID>1</SURVEYNAME></ROW></ROWSET>",
            DateFormat::Iso,
        )
        .unwrap_err();

        assert!(matches!(err.kind(), ErrorKind::MalformedXml(_)));
    }

    #[test]
    fn test_truncated_document_is_malformed() {
        let err = parse_rows("<ROWSET><ROW><SURVEYID>1</SURVEYID>").unwrap_err();

        assert!(matches!(err.kind(), ErrorKind::MalformedXml(_)));
    }

    #[test]
    fn test_plain_text_is_malformed() {
        let err = parse_rows("Service temporarily unavailable").unwrap_err();

        assert!(matches!(err.kind(), ErrorKind::MalformedXml(_)));
    }

    #[test]
    fn test_unknown_tags_and_escapes() {
        let rows = parse_rows(
            "<ROWSET><ROW><SURVEYID>7</SURVEYID><NEW_FIELD>x</NEW_FIELD>\
             <OPERATOR>Smith &amp; Sons</OPERATOR></ROW><ROW><SURVEYID>8</SURVEYID></ROW></ROWSET>",
        )
        .unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["OPERATOR"], "Smith & Sons");
        assert_eq!(rows[1]["SURVEYID"], "8");

        let record = SurveyRecord::from_row(&rows[0], DateFormat::Iso).unwrap();
        assert_eq!(record.operator.as_deref(), Some("Smith & Sons"));
    }

    #[test]
    fn test_non_numeric_bound_is_malformed() {
        let err = parse_survey(
            b"<ROWSET><ROW><SURVEYID>1</SURVEYID><WLONG>west</WLONG></ROW></ROWSET>",
            DateFormat::Iso,
        )
        .unwrap_err();

        assert!(matches!(err.kind(), ErrorKind::MalformedXml(_)));
    }
}
