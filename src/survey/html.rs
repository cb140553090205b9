use crate::survey::builder::SurveyView;
use crate::survey::record::SurveyRecord;
use chrono::NaiveDateTime;
use serde::Serialize;

/// A labelled value shown on a survey page.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DisplayField {
    pub label: &'static str,
    pub value: String,
}

fn date(value: &Option<NaiveDateTime>) -> Option<String> {
    value.map(|d| d.format("%Y-%m-%d").to_string())
}

fn number(value: Option<f64>) -> Option<String> {
    value.map(|n| n.to_string())
}

/// The fields a view shows, in display order. Fields the upstream left empty
/// are not listed at all.
pub fn display_fields(record: &SurveyRecord, view: SurveyView) -> Vec<DisplayField> {
    let r = record;
    let candidates: Vec<(&'static str, Option<String>)> = match view {
        SurveyView::Prov => vec![
            ("Contractor", r.contractor.clone()),
            ("Operator", r.operator.clone()),
            ("Processor", r.processor.clone()),
            ("Start date", date(&r.start_date)),
            ("End date", date(&r.end_date)),
        ],
        _ => vec![
            ("State", r.state.clone()),
            ("Operator", r.operator.clone()),
            ("Contractor", r.contractor.clone()),
            ("Processor", r.processor.clone()),
            ("Survey type", r.survey_type.clone()),
            ("Data types", r.data_types.clone()),
            ("Vessel", r.vessel.clone()),
            ("Vessel type", r.vessel_type.clone()),
            ("Release date", date(&r.release_date)),
            ("Onshore/offshore", r.onshore_offshore.clone()),
            ("Start date", date(&r.start_date)),
            ("End date", date(&r.end_date)),
            ("West longitude", number(r.w_long)),
            ("East longitude", number(r.e_long)),
            ("South latitude", number(r.s_lat)),
            ("North latitude", number(r.n_lat)),
            ("Line km", r.line_km.clone()),
            ("Total km", r.total_km.clone()),
            ("Line spacing", r.line_spacing.clone()),
            ("Line direction", r.line_direction.clone()),
            ("Tie spacing", r.tie_spacing.clone()),
            ("Area (km²)", r.square_km.clone()),
            ("Crystal volume", r.crystal_volume.clone()),
            ("Upward crystal volume", r.up_crystal_volume.clone()),
            ("Digital data", r.digital_data.clone()),
            ("Geodetic datum", r.geodetic_datum.clone()),
            ("ASL", r.asl.clone()),
            ("AGL", r.agl.clone()),
            ("Magnetic instrument", r.mag_instrument.clone()),
            ("Radiometric instrument", r.rad_instrument.clone()),
        ],
    };

    candidates
        .into_iter()
        .filter_map(|(label, value)| value.map(|value| DisplayField { label, value }))
        .collect()
}
