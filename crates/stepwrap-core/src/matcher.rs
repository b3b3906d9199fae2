//! Whitespace- and name-insensitive recognition of wrapper marker lines.

use crate::template::{WrapperTemplate, strip_whitespace};

/// The recognised layouts of an opening marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpeningShape {
    /// Name line ends with the opening brace.
    SameLine,
    /// Name line followed by a line holding only the opening brace.
    BraceOnNextLine,
}

impl OpeningShape {
    pub const ALL: [OpeningShape; 2] = [Self::SameLine, Self::BraceOnNextLine];

    pub fn line_count(&self) -> usize {
        match self {
            Self::SameLine => 1,
            Self::BraceOnNextLine => 2,
        }
    }
}

/// Compares candidate lines against one template's opening and closing signatures.
#[derive(Debug, Clone)]
pub struct LineMatcher {
    placeholder: String,
    opening: String,
    opening_without_brace: String,
    closing: String,
}

impl LineMatcher {
    pub fn new(template: &WrapperTemplate) -> Self {
        let opening = strip_whitespace(template.opening_line());
        let opening_without_brace = opening
            .strip_suffix('{')
            .unwrap_or(opening.as_str())
            .to_string();
        Self {
            placeholder: template.placeholder_name().to_string(),
            opening,
            opening_without_brace,
            closing: strip_whitespace(template.closing_line()),
        }
    }

    /// Whether a one- or two-line window forms an opening marker.
    pub fn matches_opening(&self, window: &[&str]) -> bool {
        let Some(first) = window.first() else {
            return false;
        };
        let Some(candidate) = self.canonical_name_line(first) else {
            return false;
        };

        match candidate.strip_suffix('{') {
            Some(head) => window.len() == 1 && head == self.opening_without_brace,
            None => {
                window.len() == 2
                    && candidate == self.opening
                    && strip_whitespace(window[1]) == "{"
            }
        }
    }

    pub fn matches_closing(&self, line: &str) -> bool {
        strip_whitespace(line) == self.closing
    }

    /// The opening shape that starts at `index`, if any. Shorter shapes win.
    pub fn opening_at(&self, lines: &[String], index: usize) -> Option<OpeningShape> {
        OpeningShape::ALL.into_iter().find(|shape| {
            let end = index + shape.line_count();
            if end > lines.len() {
                return false;
            }
            let window: Vec<&str> = lines[index..end].iter().map(String::as_str).collect();
            self.matches_opening(&window)
        })
    }

    /// Substitute the canonical name into the quoted field and drop whitespace.
    fn canonical_name_line(&self, line: &str) -> Option<String> {
        let begin = line.find('"')?;
        let end = line.rfind('"')?;
        let substituted = format!("{}{}{}", &line[..=begin], self.placeholder, &line[end..]);
        Some(strip_whitespace(&substituted))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher() -> LineMatcher {
        let template =
            WrapperTemplate::new(["Check.Step(\"NAME\", delegate", "{"], ["});"]).unwrap();
        LineMatcher::new(&template)
    }

    #[test]
    fn same_line_brace_matches_alone() {
        let m = matcher();
        assert!(m.matches_opening(&["Check.Step(\"Open the door\", delegate {"]));
        assert!(m.matches_opening(&["\t  Check.Step( \"x\" ,delegate{"]));
    }

    #[test]
    fn same_line_brace_rejects_second_line() {
        let m = matcher();
        assert!(!m.matches_opening(&["Check.Step(\"x\", delegate {", "{"]));
    }

    #[test]
    fn brace_on_next_line_needs_both_lines() {
        let m = matcher();
        assert!(m.matches_opening(&["    Check.Step(\"x\", delegate", "    {"]));
        assert!(!m.matches_opening(&["Check.Step(\"x\", delegate"]));
        assert!(!m.matches_opening(&["Check.Step(\"x\", delegate", "{ int a;"]));
    }

    #[test]
    fn step_name_and_whitespace_do_not_matter() {
        let m = matcher();
        let a = ["Check.Step(\"first\", delegate", "{"];
        let b = ["\t\tCheck.Step (\"a completely different name\",  delegate", "\t{"];
        assert!(m.matches_opening(&a));
        assert!(m.matches_opening(&b));
    }

    #[test]
    fn similar_lines_are_rejected() {
        let m = matcher();
        assert!(!m.matches_opening(&["Check.Steps(\"x\", delegate {"]));
        assert!(!m.matches_opening(&["Check.Step(x, delegate {"]));
        assert!(!m.matches_opening(&[""]));
        assert!(!m.matches_opening(&[]));
    }

    #[test]
    fn closing_ignores_whitespace_only() {
        let m = matcher();
        assert!(m.matches_closing("});"));
        assert!(m.matches_closing("\t  } ) ;  "));
        assert!(!m.matches_closing("})"));
        assert!(!m.matches_closing("}); // done"));
    }

    #[test]
    fn opening_at_prefers_single_line() {
        let m = matcher();
        let lines: Vec<String> = [
            "Check.Step(\"a\", delegate {",
            "Check.Step(\"b\", delegate",
            "{",
            "Check.Step(\"c\", delegate",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();
        assert_eq!(m.opening_at(&lines, 0), Some(OpeningShape::SameLine));
        assert_eq!(m.opening_at(&lines, 1), Some(OpeningShape::BraceOnNextLine));
        assert_eq!(m.opening_at(&lines, 2), None);
        assert_eq!(m.opening_at(&lines, 3), None);
    }
}
