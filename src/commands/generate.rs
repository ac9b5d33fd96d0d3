use crate::config::{ConfigAssembler, VagrantDefaults};
use crate::template::TemplateRenderer;
use anyhow::{Context, Result};
use std::path::Path;

/// Default name of the generated file, relative to the working directory
pub const DEFAULT_OUTPUT: &str = "Vagrantfile";

/// Handles the 'generate' flow - prompts for values and writes a Vagrantfile
pub struct GenerateCommand;

impl GenerateCommand {
    /// Execute the generate command
    pub fn execute(
        ctx: &crate::context::Context,
        defaults: &VagrantDefaults,
        output_path: &Path,
    ) -> Result<()> {
        // Step 1: Preflight and prompts
        let config = ConfigAssembler::assemble(ctx, defaults)?;

        // Step 2: Render, only once every answer is in
        let renderer = TemplateRenderer::new().context("parsing template")?;
        let rendered = renderer.render(&config).context("executing template")?;

        // Step 3: Write the file
        ctx.fs
            .write(output_path, &rendered)
            .context("creating file")?;

        ctx.output
            .success(&format!("{} successfully generated.", output_path.display()));

        Ok(())
    }
}
