pub mod builder;
pub mod html;
pub mod parsing;
pub mod prov_diagram;
pub mod record;
pub mod renderer;

#[cfg(test)]
pub(crate) mod fixtures;

pub use builder::{Construction, GraphBuilder, SurveyView};
pub use parsing::parse_survey;
pub use record::SurveyRecord;
pub use renderer::SurveyRenderer;
