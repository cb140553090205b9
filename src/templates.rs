use crate::errors::{ErrorKind, Result};
use handlebars::Handlebars;
use serde::Serialize;

const PARTIALS: [(&str, &str); 2] = [
    ("header", include_str!("../templates/header.hbs")),
    ("footer", include_str!("../templates/footer.hbs")),
];

const TEMPLATES: [(&str, &str); 7] = [
    ("survey_gapd", include_str!("../templates/survey_gapd.hbs")),
    ("survey_prov", include_str!("../templates/survey_prov.hbs")),
    ("register", include_str!("../templates/register.hbs")),
    ("alternates", include_str!("../templates/alternates.hbs")),
    ("landing", include_str!("../templates/landing.hbs")),
    ("not_found", include_str!("../templates/not_found.hbs")),
    ("error", include_str!("../templates/error.hbs")),
];

/// The compiled HTML templates, registered once at startup.
pub struct Templates {
    registry: Handlebars<'static>,
}

impl Templates {
    pub fn new() -> Result<Templates> {
        let mut registry = Handlebars::new();

        for (name, source) in PARTIALS.iter() {
            registry
                .register_partial(name, *source)
                .map_err(|e| ErrorKind::Template(format!("partial {}: {}", name, e)))?;
        }
        for (name, source) in TEMPLATES.iter() {
            registry
                .register_template_string(name, *source)
                .map_err(|e| ErrorKind::Template(format!("template {}: {}", name, e)))?;
        }

        Ok(Templates { registry })
    }

    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String> {
        self.registry
            .render(name, data)
            .map_err(|e| ErrorKind::Template(format!("rendering {}: {}", name, e)).into())
    }
}
