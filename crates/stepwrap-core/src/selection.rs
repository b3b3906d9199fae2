use crate::error::{Result, StepwrapError};

/// A half-open byte range of whole lines inside a buffer.
///
/// `start` is always at a line start; `end` is the start of the line after the
/// last selected line, or the end of the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionSpan {
    pub start: usize,
    pub end: usize,
}

impl SelectionSpan {
    pub fn whole(buffer: &str) -> Self {
        Self {
            start: 0,
            end: buffer.len(),
        }
    }

    /// Snap a raw selection outward to line boundaries. The two points may be
    /// given in either order.
    pub fn from_offsets(buffer: &str, anchor: usize, active: usize) -> Result<Self> {
        for offset in [anchor, active] {
            if offset > buffer.len() || !buffer.is_char_boundary(offset) {
                return Err(StepwrapError::InvalidSelection(format!(
                    "offset {offset} is not a character position in a buffer of {} bytes",
                    buffer.len()
                )));
            }
        }
        let (earlier, later) = if anchor <= active {
            (anchor, active)
        } else {
            (active, anchor)
        };

        let start = buffer[..earlier].rfind('\n').map_or(0, |idx| idx + 1);
        let end = buffer[later..]
            .find('\n')
            .map_or(buffer.len(), |idx| later + idx + 1);
        Ok(Self { start, end })
    }

    /// The span covering 1-based lines `first..=last`.
    pub fn from_lines(buffer: &str, first: usize, last: usize) -> Result<Self> {
        if first == 0 || last < first {
            return Err(StepwrapError::InvalidSelection(format!(
                "line range {first}:{last} is empty or not 1-based"
            )));
        }

        let mut line_starts = std::iter::once(0)
            .chain(buffer.match_indices('\n').map(|(idx, _)| idx + 1))
            .filter(|start| *start < buffer.len() || *start == 0);
        let line_count = line_starts.clone().count();
        if last > line_count {
            return Err(StepwrapError::InvalidSelection(format!(
                "line {last} is past the end of the buffer ({line_count} lines)"
            )));
        }

        let start = line_starts.nth(first - 1).unwrap_or(0);
        let end = buffer[start..]
            .match_indices('\n')
            .map(|(idx, _)| start + idx + 1)
            .nth(last - first)
            .unwrap_or(buffer.len());
        Ok(Self { start, end })
    }

    pub fn text<'a>(&self, buffer: &'a str) -> &'a str {
        &buffer[self.start..self.end]
    }

    /// The buffer with this span replaced as one edit.
    pub fn replace(&self, buffer: &str, replacement: &str) -> String {
        let mut out =
            String::with_capacity(buffer.len() - (self.end - self.start) + replacement.len());
        out.push_str(&buffer[..self.start]);
        out.push_str(replacement);
        out.push_str(&buffer[self.end..]);
        out
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}
