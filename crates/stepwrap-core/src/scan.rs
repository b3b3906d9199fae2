//! The stack pass that pairs opening and closing markers.

use serde::Serialize;

use crate::error::{Imbalance, Result, StepwrapError};
use crate::indent::{IndentUnit, expand_tabs};
use crate::line_ending::LineEnding;
use crate::matcher::{LineMatcher, OpeningShape};
use crate::template::{WrapperTemplate, step_name};

/// The consecutive line indices that form one opening marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineGroup {
    pub first: usize,
    pub shape: OpeningShape,
}

impl LineGroup {
    pub fn last(&self) -> usize {
        self.first + self.shape.line_count() - 1
    }

    pub fn indices(&self) -> std::ops::RangeInclusive<usize> {
        self.first..=self.last()
    }
}

/// A matched opening/closing pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockSpan {
    pub opening: LineGroup,
    pub closing: usize,
    /// Number of enclosing blocks inside the scanned lines.
    pub depth: usize,
}

impl BlockSpan {
    /// Indices strictly between the opening marker and the closing marker.
    pub fn interior(&self) -> std::ops::Range<usize> {
        self.opening.last() + 1..self.closing
    }
}

/// Pair every opening marker with its closing marker.
///
/// Blocks are returned in the order they close, so inner blocks precede the
/// blocks that contain them.
pub fn scan_blocks(lines: &[String], matcher: &LineMatcher) -> Result<Vec<BlockSpan>> {
    let mut open: Vec<LineGroup> = Vec::new();
    let mut blocks = Vec::new();
    let mut index = 0;

    while index < lines.len() {
        if let Some(shape) = matcher.opening_at(lines, index) {
            open.push(LineGroup { first: index, shape });
            index += shape.line_count();
            continue;
        }

        if matcher.matches_closing(&lines[index]) {
            let opening = open.pop().ok_or(StepwrapError::UnbalancedSelection(
                Imbalance::UnmatchedClosing { line: index + 1 },
            ))?;
            tracing::trace!(
                opening = opening.first + 1,
                closing = index + 1,
                depth = open.len(),
                "matched block"
            );
            blocks.push(BlockSpan {
                opening,
                closing: index,
                depth: open.len(),
            });
        }
        index += 1;
    }

    if let Some(unclosed) = open.last() {
        return Err(StepwrapError::UnbalancedSelection(
            Imbalance::UnclosedOpening {
                line: unclosed.first + 1,
            },
        ));
    }

    Ok(blocks)
}

/// One wrapped block as presented to a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepSummary {
    pub name: String,
    /// 1-based line of the opening marker.
    pub first_line: usize,
    /// 1-based line of the closing marker.
    pub last_line: usize,
    pub depth: usize,
}

/// Describe the wrapped blocks in `text`, in document order.
pub fn list_blocks(
    text: &str,
    template: &WrapperTemplate,
    unit: &IndentUnit,
    line_ending: LineEnding,
) -> Result<Vec<StepSummary>> {
    let expanded = expand_tabs(text, unit);
    let lines: Vec<String> = expanded
        .split(line_ending.as_str())
        .map(str::to_string)
        .collect();
    let matcher = LineMatcher::new(template);

    let mut summaries: Vec<StepSummary> = scan_blocks(&lines, &matcher)?
        .into_iter()
        .map(|block| StepSummary {
            name: step_name(&lines[block.opening.first])
                .unwrap_or_default()
                .to_string(),
            first_line: block.opening.first + 1,
            last_line: block.closing + 1,
            depth: block.depth,
        })
        .collect();
    summaries.sort_by_key(|s| s.first_line);
    Ok(summaries)
}
