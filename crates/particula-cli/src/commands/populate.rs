use crate::config::AppConfig;
use crate::error::Result;
use particula::workflows::error::WorkflowError;
use particula::workflows::populate;
use std::io::Write;
use tracing::info;

pub fn run(config: &AppConfig, out: &mut impl Write) -> Result<()> {
    let populated = populate::run(&config.scenario)?;
    let lines = populated.render_lines().map_err(WorkflowError::from)?;

    info!("Rendering {} particles.", lines.len());
    match &config.separator {
        Some(separator) => writeln!(out, "{}", lines.join(separator.as_str()))?,
        None => {
            for line in &lines {
                writeln!(out, "{}", line)?;
            }
        }
    }
    out.flush()?;
    Ok(())
}
