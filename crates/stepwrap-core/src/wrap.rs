use crate::indent::{IndentUnit, baseline_depth, expand_tabs, is_blank};
use crate::line_ending::LineEnding;
use crate::template::WrapperTemplate;

/// Wrap the selected lines in the template, indenting them one level deeper.
///
/// The wrapper lines are placed at the shallowest indentation found among the
/// non-blank selected lines. Blank lines are kept as they are.
pub fn wrap(
    text: &str,
    template: &WrapperTemplate,
    unit: &IndentUnit,
    line_ending: LineEnding,
) -> String {
    let terminator = line_ending.as_str();
    let expanded = expand_tabs(text, unit);
    let lines: Vec<&str> = expanded.split(terminator).collect();

    let baseline = baseline_depth(lines.iter().copied(), unit).unwrap_or(0);
    let outer = unit.repeat(baseline);

    let mut interior = lines
        .iter()
        .map(|line| {
            if is_blank(line) {
                (*line).to_string()
            } else {
                format!("{unit}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join(terminator);
    // A selection running to the end of an unterminated buffer still needs
    // the closing marker on a line of its own.
    if !interior.is_empty() && !interior.ends_with(terminator) {
        interior.push_str(terminator);
    }

    let mut out = String::with_capacity(interior.len() + 128);
    for line in &template.before {
        out.push_str(&outer);
        out.push_str(line);
        out.push_str(terminator);
    }
    out.push_str(&interior);
    for line in &template.after {
        out.push_str(&outer);
        out.push_str(line);
        out.push_str(terminator);
    }

    tracing::debug!(lines = lines.len(), baseline, "wrapped selection");
    out
}
