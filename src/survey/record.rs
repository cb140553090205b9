use crate::app_config::DateFormat;
use crate::errors::{Error, ErrorKind, Result};
use crate::survey::parsing::Row;
use chrono::{NaiveDate, NaiveDateTime};

/// Spatial reference the upstream reports bounding coordinates in.
pub const SRID: u32 = 8311;

/// A survey as reported by the upstream XML API. `None` marks a field the
/// upstream left empty.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SurveyRecord {
    pub identifier: String,
    pub name: Option<String>,
    pub state: Option<String>,
    pub operator: Option<String>,
    pub contractor: Option<String>,
    pub processor: Option<String>,
    pub survey_type: Option<String>,
    pub data_types: Option<String>,
    pub vessel: Option<String>,
    pub vessel_type: Option<String>,
    pub release_date: Option<NaiveDateTime>,
    pub onshore_offshore: Option<String>,
    pub start_date: Option<NaiveDateTime>,
    pub end_date: Option<NaiveDateTime>,
    pub w_long: Option<f64>,
    pub e_long: Option<f64>,
    pub s_lat: Option<f64>,
    pub n_lat: Option<f64>,
    pub line_km: Option<String>,
    pub total_km: Option<String>,
    pub line_spacing: Option<String>,
    pub line_direction: Option<String>,
    pub tie_spacing: Option<String>,
    pub square_km: Option<String>,
    pub crystal_volume: Option<String>,
    pub up_crystal_volume: Option<String>,
    pub digital_data: Option<String>,
    pub geodetic_datum: Option<String>,
    pub asl: Option<String>,
    pub agl: Option<String>,
    pub mag_instrument: Option<String>,
    pub rad_instrument: Option<String>,
}

impl SurveyRecord {
    pub fn from_row(row: &Row, date_format: DateFormat) -> Result<SurveyRecord> {
        let text = |tag: &str| row.get(tag).cloned();
        let date = |tag: &str| -> Result<Option<NaiveDateTime>> {
            row.get(tag)
                .map(|value| parse_date(value, date_format))
                .transpose()
        };
        let coordinate = |tag: &str| -> Result<Option<f64>> {
            row.get(tag)
                .map(|value| {
                    value.parse::<f64>().map_err(|_| {
                        Error::from(ErrorKind::MalformedXml(format!(
                            "{} is not a number: {}",
                            tag, value
                        )))
                    })
                })
                .transpose()
        };

        let identifier = text("SURVEYID")
            .ok_or_else(|| ErrorKind::MalformedXml(String::from("record has no SURVEYID")))?;

        Ok(SurveyRecord {
            identifier,
            name: text("SURVEYNAME"),
            state: text("STATE"),
            operator: text("OPERATOR"),
            contractor: text("CONTRACTOR"),
            processor: text("PROCESSOR"),
            survey_type: text("SURVEY_TYPE"),
            data_types: text("DATATYPES"),
            vessel: text("VESSEL"),
            vessel_type: text("VESSEL_TYPE"),
            release_date: date("RELEASEDATE")?,
            onshore_offshore: text("ONSHORE_OFFSHORE"),
            start_date: date("STARTDATE")?,
            end_date: date("ENDDATE")?,
            w_long: coordinate("WLONG")?,
            e_long: coordinate("ELONG")?,
            s_lat: coordinate("SLAT")?,
            n_lat: coordinate("NLAT")?,
            line_km: text("LINE_KM"),
            total_km: text("TOTAL_KM"),
            line_spacing: text("LINE_SPACING"),
            line_direction: text("LINE_DIRECTION"),
            tie_spacing: text("TIE_SPACING"),
            square_km: text("SQUARE_KM"),
            crystal_volume: text("CRYSTAL_VOLUME"),
            up_crystal_volume: text("UP_CRYSTAL_VOLUME"),
            digital_data: text("DIGITAL_DATA"),
            geodetic_datum: text("GEODETIC_DATUM"),
            asl: text("ASL"),
            agl: text("AGL"),
            mag_instrument: text("MAG_INSTRUMENT"),
            rad_instrument: text("RAD_INSTRUMENT"),
        })
    }

    /// The survey extent, if the upstream reported all four bounds.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        Some(BoundingBox {
            west: self.w_long?,
            east: self.e_long?,
            south: self.s_lat?,
            north: self.n_lat?,
        })
    }

    /// The survey extent as an EWKT polygon, if the bounds are known.
    pub fn wkt_polygon(&self) -> Option<String> {
        self.bounding_box().map(|b| b.to_wkt(SRID))
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoundingBox {
    pub west: f64,
    pub east: f64,
    pub south: f64,
    pub north: f64,
}

impl BoundingBox {
    /// Corners clockwise from the north-west one, closed by repeating it.
    pub fn ring(&self) -> [(f64, f64); 5] {
        [
            (self.west, self.north),
            (self.east, self.north),
            (self.east, self.south),
            (self.west, self.south),
            (self.west, self.north),
        ]
    }

    pub fn to_wkt(&self, srid: u32) -> String {
        let points: Vec<String> = self
            .ring()
            .iter()
            .map(|(x, y)| format!("{} {}", x, y))
            .collect();

        format!("SRID={};POLYGON(({}))", srid, points.join(", "))
    }
}

pub fn parse_date(value: &str, format: DateFormat) -> Result<NaiveDateTime> {
    let parsed = match format {
        DateFormat::Iso => NaiveDateTime::parse_from_str(value, format.pattern()).ok(),
        DateFormat::DayMonthYear => NaiveDate::parse_from_str(value, format.pattern())
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0)),
    };

    parsed.ok_or_else(|| {
        ErrorKind::InvalidDate(format!(
            "'{}' does not match {}",
            value,
            format.pattern()
        ))
        .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::survey::fixtures::survey_921;

    #[test]
    fn test_polygon_for_921() {
        let record = survey_921();

        let ring = record.bounding_box().unwrap().ring();
        assert_eq!(ring.len(), 5);
        assert_eq!(ring[0], ring[4]);
        assert_eq!(ring[0], (116.366662, -30.566668));
        assert_eq!(
            record.wkt_polygon().unwrap(),
            "SRID=8311;POLYGON((116.366662 -30.566668, 117.749996 -30.566668, \
             117.749996 -31.483336, 116.366662 -31.483336, 116.366662 -30.566668))"
        );
    }

    #[test]
    fn test_missing_bound_has_no_geometry() {
        let mut record = survey_921();
        record.s_lat = None;

        assert!(record.bounding_box().is_none());
        assert!(record.wkt_polygon().is_none());
    }

    #[test]
    fn test_parse_iso_date() {
        let date = parse_date("1996-12-05T00:00:00", DateFormat::Iso).unwrap();
        assert_eq!(date.date(), NaiveDate::from_ymd_opt(1996, 12, 5).unwrap());
    }

    #[test]
    fn test_parse_oracle_date() {
        let date = parse_date("05-DEC-96", DateFormat::DayMonthYear).unwrap();
        assert_eq!(date.date(), NaiveDate::from_ymd_opt(1996, 12, 5).unwrap());
    }

    #[test]
    fn test_date_format_is_not_guessed() {
        let err = parse_date("05-DEC-96", DateFormat::Iso).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::InvalidDate(_)));

        let err = parse_date("1996-12-05T00:00:00", DateFormat::DayMonthYear).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::InvalidDate(_)));
    }
}
