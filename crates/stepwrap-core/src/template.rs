use serde::{Deserialize, Serialize};

use crate::error::{Result, StepwrapError};

const DEFAULT_OPENING: &str = "Check.Step(\"Edit this string to make a unique descriptive name for the step in the check context.\", delegate";
const DEFAULT_OPENING_BRACE: &str = "{";
const DEFAULT_CLOSING: &str = "});";

/// The lines inserted before and after a wrapped selection.
///
/// The first `before` line carries the step name between its first and last
/// double quote. Everything else is literal text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WrapperTemplate {
    pub before: Vec<String>,
    pub after: Vec<String>,
}

impl Default for WrapperTemplate {
    fn default() -> Self {
        Self {
            before: vec![DEFAULT_OPENING.to_string(), DEFAULT_OPENING_BRACE.to_string()],
            after: vec![DEFAULT_CLOSING.to_string()],
        }
    }
}

impl WrapperTemplate {
    pub fn new<B, A>(before: B, after: A) -> Result<Self>
    where
        B: IntoIterator,
        B::Item: Into<String>,
        A: IntoIterator,
        A::Item: Into<String>,
    {
        let template = Self {
            before: before.into_iter().map(Into::into).collect(),
            after: after.into_iter().map(Into::into).collect(),
        };
        template.validate()?;
        Ok(template)
    }

    /// Check that the template can be matched at all. Deserialized templates
    /// bypass `new`, so loaders call this explicitly.
    pub fn validate(&self) -> Result<()> {
        let opening = self.before.first().ok_or_else(|| {
            StepwrapError::MalformedTemplate("the before section has no lines".to_string())
        })?;
        if placeholder_bounds(opening).is_none() {
            return Err(StepwrapError::MalformedTemplate(format!(
                "the first before line has no quoted step name field: {opening}"
            )));
        }
        match self.after.first() {
            Some(closing) if !strip_whitespace(closing).is_empty() => Ok(()),
            Some(_) => Err(StepwrapError::MalformedTemplate(
                "the first after line is blank".to_string(),
            )),
            None => Err(StepwrapError::MalformedTemplate(
                "the after section has no lines".to_string(),
            )),
        }
    }

    pub fn opening_line(&self) -> &str {
        self.before.first().map(String::as_str).unwrap_or_default()
    }

    pub fn closing_line(&self) -> &str {
        self.after.first().map(String::as_str).unwrap_or_default()
    }

    /// The canonical step name written by the template.
    pub fn placeholder_name(&self) -> &str {
        step_name(self.opening_line()).unwrap_or_default()
    }
}

/// Byte positions of the first and last double quote, when they differ.
pub(crate) fn placeholder_bounds(line: &str) -> Option<(usize, usize)> {
    let begin = line.find('"')?;
    let end = line.rfind('"')?;
    (begin < end).then_some((begin, end))
}

/// The text between the first and last double quote of `line`.
pub fn step_name(line: &str) -> Option<&str> {
    placeholder_bounds(line).map(|(begin, end)| &line[begin + 1..end])
}

/// Drop every space and tab.
pub(crate) fn strip_whitespace(line: &str) -> String {
    line.chars().filter(|c| *c != ' ' && *c != '\t').collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_template_is_valid() {
        let template = WrapperTemplate::default();
        template.validate().unwrap();
        assert_eq!(template.before.len(), 2);
        assert_eq!(template.closing_line(), "});");
        assert!(template.placeholder_name().starts_with("Edit this string"));
    }

    #[test]
    fn new_rejects_missing_placeholder() {
        let err = WrapperTemplate::new(["Check.Step(delegate", "{"], ["});"]).unwrap_err();
        assert!(matches!(err, StepwrapError::MalformedTemplate(_)));
    }

    #[test]
    fn new_rejects_single_quote_character() {
        assert!(WrapperTemplate::new(["Step(\"oops, delegate"], ["});"]).is_err());
    }

    #[test]
    fn new_rejects_empty_sections() {
        assert!(WrapperTemplate::new(Vec::<String>::new(), ["});"]).is_err());
        assert!(WrapperTemplate::new(["Step(\"x\") {"], Vec::<String>::new()).is_err());
        assert!(WrapperTemplate::new(["Step(\"x\") {"], ["  \t"]).is_err());
    }

    #[test]
    fn step_name_spans_first_to_last_quote() {
        assert_eq!(
            step_name(r#"Check.Step("Load "cfg" file", delegate"#),
            Some(r#"Load "cfg" file"#)
        );
        assert_eq!(step_name(r#"Check.Step("", delegate"#), Some(""));
        assert_eq!(step_name("no quotes"), None);
    }

    #[test]
    fn whitespace_strip_keeps_other_characters() {
        assert_eq!(strip_whitespace(" a\tb c\n"), "abc\n");
    }
}
