use std::fmt::Write;

use crate::config::OutputFormat;
use crate::error::Result;
use crate::model::FilePatch;

pub fn render(patches: &[FilePatch], format: OutputFormat, show_diff: bool) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(patches, show_diff)),
        OutputFormat::Json => render_json(patches, show_diff),
    }
}

/// The patch array; each object's `diff` key is present only with `show_diff`.
fn render_json(patches: &[FilePatch], show_diff: bool) -> Result<String> {
    let mut value = serde_json::to_value(patches)?;
    if !show_diff {
        if let Some(items) = value.as_array_mut() {
            for item in items.iter_mut().filter_map(|item| item.as_object_mut()) {
                item.remove("diff");
            }
        }
    }

    let mut json = serde_json::to_string_pretty(&value)?;
    json.push('\n');
    Ok(json)
}

/// One `<status> +<added> -<deleted> <path>` line per file, then a totals line.
fn render_text(patches: &[FilePatch], show_diff: bool) -> String {
    if patches.is_empty() {
        return "No changes\n".to_string();
    }

    let mut out = String::new();
    let mut added = 0;
    let mut deleted = 0;

    for patch in patches {
        added += patch.lines_added;
        deleted += patch.lines_deleted;

        let _ = writeln!(
            out,
            "{:<11} +{:<5} -{:<5} {}",
            patch.change_type.as_str(),
            patch.lines_added,
            patch.lines_deleted,
            patch.path
        );

        if show_diff && !patch.diff.is_empty() {
            out.push_str(&patch.diff);
            if !patch.diff.ends_with('\n') {
                out.push('\n');
            }
        }
    }

    let _ = writeln!(
        out,
        "{} file(s) changed, {} insertion(s)(+), {} deletion(s)(-)",
        patches.len(),
        added,
        deleted
    );

    out
}
