//! Roster rendering for `university show`.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::core::member::Member;
use crate::core::person::Profile;
use crate::io::config::OutputFormat;
use crate::io::roster::load_roster;

/// Render `members` in the requested format.
pub fn render_members(members: &[Member], format: OutputFormat) -> Result<String> {
    let rendered = match format {
        OutputFormat::Text => members
            .iter()
            .map(Profile::describe)
            .collect::<Vec<_>>()
            .join("\n"),
        OutputFormat::Label => members
            .iter()
            .map(|member| format!("{}\n", member.to_label()))
            .collect(),
        OutputFormat::Json => {
            let mut buf = serde_json::to_string_pretty(members).context("serialize members")?;
            buf.push('\n');
            buf
        }
    };
    Ok(rendered)
}

/// Load a roster file and write it to `out`.
pub fn show_roster<W: Write>(out: &mut W, roster: &Path, format: OutputFormat) -> Result<()> {
    let members = load_roster(roster)?;
    info!(members = members.len(), ?format, "rendering roster");
    let rendered = render_members(&members, format)?;
    out.write_all(rendered.as_bytes())
        .context("write roster output")?;
    Ok(())
}
