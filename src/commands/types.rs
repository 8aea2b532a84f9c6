use crate::io::OutputFormat;
use crate::schema::registry::{self, VariantSpec};
use anyhow::Result;
use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use std::io::Write;

pub fn list_types(format: OutputFormat) -> Result<()> {
    let stdout = std::io::stdout();
    write_types(&mut stdout.lock(), format)
}

pub fn write_types<W: Write>(out: &mut W, format: OutputFormat) -> Result<()> {
    let specs = registry::all();
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, specs)?;
            writeln!(out)?;
        }
        OutputFormat::Markdown => {
            writeln!(out, "| Type | Baseline | Post-IA | Computed |")?;
            writeln!(out, "|------|----------|---------|----------|")?;
            for spec in specs {
                writeln!(
                    out,
                    "| {} (`{}`) | {} | {} | {} |",
                    spec.label,
                    spec.indicator_type.tag(),
                    spec.baseline_fields.join(", "),
                    spec.post_ia_fields.join(", "),
                    spec.computed_fields.join(", ")
                )?;
            }
        }
        OutputFormat::Terminal => {
            writeln!(out, "{}", "Indicator types".bold().blue())?;
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["Type", "Baseline", "Post-IA", "Optional fields"]);
            for spec in specs {
                table.add_row(vec![
                    format!("{}\n{}", spec.label, spec.indicator_type.tag()),
                    spec.baseline_fields.join("\n"),
                    spec.post_ia_fields.join("\n"),
                    visibility(spec),
                ]);
            }
            writeln!(out, "{table}")?;
        }
    }
    Ok(())
}

fn visibility(spec: &VariantSpec) -> String {
    spec.visibility
        .iter()
        .map(|flag| {
            let state = if flag.visible_by_default { "on" } else { "off" };
            format!("{} ({})", flag.name, state)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
