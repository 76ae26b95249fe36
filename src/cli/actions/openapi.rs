use crate::backend;
use anyhow::Result;

/// Print the backend OpenAPI document as pretty JSON.
/// # Errors
/// Returns an error if the document cannot be serialized.
pub fn execute() -> Result<()> {
    println!("{}", backend::openapi().to_pretty_json()?);
    Ok(())
}
