use crate::config::StepwrapConfig;
use crate::error::Result;
use crate::indent::IndentUnit;
use crate::line_ending::{LineEnding, LineEndingPolicy};
use crate::scan::{StepSummary, list_blocks};
use crate::template::WrapperTemplate;
use crate::{unwrap, wrap};

/// A validated template and indent unit, ready to transform selections.
///
/// Holds no per-call state, so one engine can serve any number of callers.
#[derive(Debug, Clone)]
pub struct Engine {
    template: WrapperTemplate,
    unit: IndentUnit,
    line_ending: LineEndingPolicy,
}

impl Engine {
    pub fn new(template: WrapperTemplate, indent_width: usize) -> Result<Self> {
        template.validate()?;
        Ok(Self {
            template,
            unit: IndentUnit::new(indent_width)?,
            line_ending: LineEndingPolicy::Auto,
        })
    }

    pub fn from_config(config: &StepwrapConfig) -> Result<Self> {
        Ok(Self::new(config.template.clone(), config.indent_width)?
            .with_line_ending(config.line_ending))
    }

    pub fn with_line_ending(mut self, policy: LineEndingPolicy) -> Self {
        self.line_ending = policy;
        self
    }

    pub fn template(&self) -> &WrapperTemplate {
        &self.template
    }

    pub fn indent_unit(&self) -> &IndentUnit {
        &self.unit
    }

    /// Terminator used for `buffer` under the configured policy.
    pub fn line_ending_for(&self, buffer: &str) -> LineEnding {
        self.line_ending.resolve(buffer)
    }

    /// Wrap a standalone piece of text, taking its terminator from the text itself.
    pub fn wrap(&self, selection: &str) -> String {
        self.wrap_with(selection, self.line_ending_for(selection))
    }

    /// Wrap a selection cut from a larger buffer whose terminator is already known.
    pub fn wrap_with(&self, selection: &str, line_ending: LineEnding) -> String {
        wrap::wrap(selection, &self.template, &self.unit, line_ending)
    }

    pub fn unwrap(&self, selection: &str) -> Result<String> {
        self.unwrap_with(selection, self.line_ending_for(selection))
    }

    pub fn unwrap_with(&self, selection: &str, line_ending: LineEnding) -> Result<String> {
        unwrap::unwrap(selection, &self.template, &self.unit, line_ending)
    }

    pub fn list_blocks(&self, selection: &str) -> Result<Vec<StepSummary>> {
        self.list_blocks_with(selection, self.line_ending_for(selection))
    }

    pub fn list_blocks_with(
        &self,
        selection: &str,
        line_ending: LineEnding,
    ) -> Result<Vec<StepSummary>> {
        list_blocks(selection, &self.template, &self.unit, line_ending)
    }
}
