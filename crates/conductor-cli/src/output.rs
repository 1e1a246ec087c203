use conductor_core::responses::SaveReceipt;

use crate::cli::OutputFormat;

/// Render a save receipt in the requested format.
pub fn render(receipt: &SaveReceipt, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(format!(
            "Saved successfully.\nproject_id: {}\nspec_id: {}\nartifact_id: {}",
            receipt.project_id, receipt.spec_id, receipt.artifact_id
        )),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(receipt)?),
    }
}
