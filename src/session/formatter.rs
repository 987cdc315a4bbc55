use crate::controller::ControllerView;
use crate::session::executor::StepRecord;

/// One JSON object per line, suitable for piping
pub fn format_json_lines(records: &[StepRecord]) -> String {
    records
        .iter()
        .filter_map(|record| serde_json::to_string(record).ok())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Human-readable transcript followed by the final field state
pub fn format_report(records: &[StepRecord], view: &ControllerView) -> String {
    let width = records
        .iter()
        .map(|r| r.command.len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for record in records {
        match &record.event {
            Some(event) => out.push_str(&format!(
                "{:<width$}  -> {}\n",
                record.command,
                event,
                width = width
            )),
            None => out.push_str(&format!("{}\n", record.command)),
        }
    }

    out.push_str(&format!(
        "\nFinal: {} {} (text: \"{}\"{})\n",
        crate::units::format_value(view.value),
        view.unit,
        view.text,
        if view.editing { ", editing" } else { "" }
    ));
    if let Some(hint) = &view.decrement.hint {
        out.push_str(&format!("  - disabled: {}\n", hint));
    }
    if let Some(hint) = &view.increment.hint {
        out.push_str(&format!("  + disabled: {}\n", hint));
    }
    out
}

pub fn format_view(view: &ControllerView) -> String {
    serde_json::to_string_pretty(view).unwrap_or_else(|_| format!("{:?}", view))
}
