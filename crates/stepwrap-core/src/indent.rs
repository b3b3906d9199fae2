use crate::error::{Result, StepwrapError};

/// One level of indentation, always expressed as literal spaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndentUnit(String);

impl IndentUnit {
    pub fn new(width: usize) -> Result<Self> {
        if width == 0 {
            return Err(StepwrapError::InvalidConfig(
                "indent width must be at least 1".to_string(),
            ));
        }
        Ok(Self(" ".repeat(width)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn width(&self) -> usize {
        self.0.len()
    }

    /// The indentation string for `depth` levels.
    pub fn repeat(&self, depth: usize) -> String {
        self.0.repeat(depth)
    }
}

impl std::fmt::Display for IndentUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Replace every tab with exactly one indent unit.
pub fn expand_tabs(text: &str, unit: &IndentUnit) -> String {
    text.replace('\t', unit.as_str())
}

/// Count the full indent units at the start of `line`. A trailing run of
/// spaces shorter than one unit does not count.
pub fn measure_depth(line: &str, unit: &IndentUnit) -> usize {
    let mut rest = line;
    let mut depth = 0;
    while let Some(stripped) = rest.strip_prefix(unit.as_str()) {
        rest = stripped;
        depth += 1;
    }
    depth
}

pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Minimum indent depth over the non-blank lines, or `None` when all lines are blank.
/// An unindented line counts, so it pins the baseline to zero.
pub fn baseline_depth<'a, I>(lines: I, unit: &IndentUnit) -> Option<usize>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .filter(|line| !is_blank(line))
        .map(|line| measure_depth(line, unit))
        .min()
}

/// Remove exactly one leading indent unit. Lines indented by less are returned as-is.
pub fn strip_one_unit<'a>(line: &'a str, unit: &IndentUnit) -> &'a str {
    line.strip_prefix(unit.as_str()).unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn four() -> IndentUnit {
        IndentUnit::new(4).unwrap()
    }

    #[test]
    fn zero_width_is_rejected() {
        assert!(IndentUnit::new(0).is_err());
    }

    #[test]
    fn tabs_expand_to_one_unit_each() {
        assert_eq!(expand_tabs("\t\tx = 1;", &four()), "        x = 1;");
        assert_eq!(expand_tabs("a\tb", &IndentUnit::new(2).unwrap()), "a  b");
    }

    #[test]
    fn depth_counts_whole_units_only() {
        let unit = four();
        assert_eq!(measure_depth("x", &unit), 0);
        assert_eq!(measure_depth("    x", &unit), 1);
        assert_eq!(measure_depth("       x", &unit), 1);
        assert_eq!(measure_depth("        x", &unit), 2);
        assert_eq!(measure_depth("   ", &unit), 0);
        assert_eq!(measure_depth("", &unit), 0);
    }

    #[test]
    fn baseline_ignores_blank_lines() {
        let unit = four();
        let lines = ["        a", "", "   ", "    b", "            c"];
        assert_eq!(baseline_depth(lines, &unit), Some(1));
        assert_eq!(baseline_depth(["", "  "], &unit), None);
    }

    #[test]
    fn baseline_honours_unindented_lines() {
        let unit = four();
        assert_eq!(baseline_depth(["x", "        y"], &unit), Some(0));
    }

    #[test]
    fn strip_removes_a_single_unit() {
        let unit = four();
        assert_eq!(strip_one_unit("        x", &unit), "    x");
        assert_eq!(strip_one_unit("  x", &unit), "  x");
        assert_eq!(strip_one_unit("", &unit), "");
    }
}
