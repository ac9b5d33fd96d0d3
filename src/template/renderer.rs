use crate::config::VagrantConfig;
use crate::error::GenerateError;
use handlebars::Handlebars;

/// Vagrantfile template compiled into the binary
pub const VAGRANTFILE_TEMPLATE: &str = include_str!("../../templates/Vagrantfile.hbs");

const TEMPLATE_NAME: &str = "Vagrantfile";

/// Renders a [`VagrantConfig`] using Handlebars
pub struct TemplateRenderer {
    handlebars: Handlebars<'static>,
}

impl TemplateRenderer {
    /// Create a renderer for the embedded Vagrantfile template
    pub fn new() -> Result<Self, GenerateError> {
        Self::with_template(VAGRANTFILE_TEMPLATE)
    }

    /// Create a renderer for an arbitrary template source
    pub fn with_template(source: &str) -> Result<Self, GenerateError> {
        let mut handlebars = Handlebars::new();

        // Undefined fields are errors, and output is Ruby, not HTML
        handlebars.set_strict_mode(true);
        handlebars.register_escape_fn(handlebars::no_escape);
        handlebars.register_template_string(TEMPLATE_NAME, source)?;

        Ok(Self { handlebars })
    }

    /// Render the template with the collected configuration
    pub fn render(&self, config: &VagrantConfig) -> Result<String, GenerateError> {
        Ok(self.handlebars.render(TEMPLATE_NAME, config)?)
    }
}
