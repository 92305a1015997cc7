//! Text layout collaborator.
//!
//! The editing core never measures glyphs itself. Vertical movement and
//! line-mode Home/End go through a [`TextLayout`], which answers three
//! questions about a snapshot: what the visual lines are, where an offset is
//! drawn, and which offset lies under a point.
//!
//! [`MonospaceLayout`] is a fixed-cell implementation (every char one cell,
//! tabs to the next tab stop) with optional wrapping at a column limit. Hosts
//! with real text shaping provide their own implementation.

use serde::{Deserialize, Serialize};

use crate::util::{cell_width, char_col_to_visual_col};

use super::buffer::TextSnapshot;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// One visual line. Lengths of all lines sum to the text length.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LineInfo {
    /// Length in chars, line terminator included
    pub length: usize,
    /// Chars of `length` taken by the terminator (0, 1 or 2)
    pub newline_length: usize,
    pub height: f32,
}

/// Line wrapping mode of the field. Horizontal scrolling is only possible
/// when lines are not wrapped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextWrapping {
    #[default]
    NoWrap,
    Wrap,
}

/// Result of hit-testing a point
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HitResult {
    /// Offset of the char under the point
    pub offset: usize,
    /// The point lies on the trailing half of that char
    pub is_trailing: bool,
}

impl HitResult {
    /// Caret offset this hit resolves to
    pub fn caret_offset(&self) -> usize {
        self.offset + usize::from(self.is_trailing)
    }
}

/// Line geometry provider consumed by the editing core.
pub trait TextLayout {
    /// Visual lines of `text`, in order
    fn lines(&self, text: &TextSnapshot) -> Vec<LineInfo>;

    /// Caret rectangle for `offset`
    fn hit_test_offset(&self, text: &TextSnapshot, offset: usize) -> Rect;

    /// Offset under `point`
    fn hit_test_point(&self, text: &TextSnapshot, point: Point) -> HitResult;
}

/// Index of the line containing `offset`. Offsets past the end land on the
/// last line.
pub fn line_index_at(lines: &[LineInfo], offset: usize) -> usize {
    let mut pos = 0;
    for (i, line) in lines.iter().enumerate().take(lines.len().saturating_sub(1)) {
        pos += line.length;
        if pos > offset {
            return i;
        }
    }
    lines.len().saturating_sub(1)
}

/// Offset at which line `index` starts
pub fn line_start(lines: &[LineInfo], index: usize) -> usize {
    lines.iter().take(index).map(|l| l.length).sum()
}

/// Cell metrics for [`MonospaceLayout`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutMetrics {
    pub char_width: f32,
    pub line_height: f32,
    /// Wrap lines longer than this many cells (None = no wrapping)
    pub wrap_column: Option<usize>,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            char_width: 8.0,
            line_height: 16.0,
            wrap_column: None,
        }
    }
}

/// Fixed-cell layout. Tabs expand to the next multiple of
/// [`crate::util::TABULATOR_WIDTH`] cells.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MonospaceLayout {
    pub metrics: LayoutMetrics,
}

impl MonospaceLayout {
    pub fn new(metrics: LayoutMetrics) -> Self {
        let metrics = LayoutMetrics {
            char_width: metrics.char_width.max(f32::EPSILON),
            line_height: metrics.line_height.max(f32::EPSILON),
            wrap_column: metrics.wrap_column.filter(|&w| w > 0),
        };
        Self { metrics }
    }

    pub fn wrapping(mut self, wrap_column: Option<usize>) -> Self {
        self.metrics.wrap_column = wrap_column.filter(|&w| w > 0);
        self
    }

    fn line(&self, length: usize, newline_length: usize) -> LineInfo {
        LineInfo {
            length,
            newline_length,
            height: self.metrics.line_height,
        }
    }

    /// Split one logical line (content plus terminator) into visual lines.
    fn push_wrapped(&self, lines: &mut Vec<LineInfo>, content: &[char], newline_length: usize) {
        let Some(wrap) = self.metrics.wrap_column else {
            lines.push(self.line(content.len() + newline_length, newline_length));
            return;
        };

        let mut start = 0;
        let mut cells = 0;
        for (i, &ch) in content.iter().enumerate() {
            let width = cell_width(ch, cells);
            if cells + width > wrap && i > start {
                lines.push(self.line(i - start, 0));
                start = i;
                cells = 0;
            }
            cells += cell_width(ch, cells);
        }
        lines.push(self.line(content.len() - start + newline_length, newline_length));
    }

    /// Chars of the visual line `index`, terminator excluded
    fn line_chars(text: &TextSnapshot, lines: &[LineInfo], index: usize) -> Vec<char> {
        let start = line_start(lines, index);
        let line = lines[index];
        let end = start + line.length - line.newline_length;
        text.rope().slice(start..end).chars().collect()
    }
}

impl TextLayout for MonospaceLayout {
    fn lines(&self, text: &TextSnapshot) -> Vec<LineInfo> {
        let mut lines = Vec::new();
        let mut content: Vec<char> = Vec::new();
        let mut chars = text.rope().chars().peekable();

        while let Some(ch) = chars.next() {
            match ch {
                '\r' if chars.peek() == Some(&'\n') => {
                    chars.next();
                    self.push_wrapped(&mut lines, &content, 2);
                    content.clear();
                }
                '\r' | '\n' => {
                    self.push_wrapped(&mut lines, &content, 1);
                    content.clear();
                }
                _ => content.push(ch),
            }
        }
        self.push_wrapped(&mut lines, &content, 0);

        lines
    }

    fn hit_test_offset(&self, text: &TextSnapshot, offset: usize) -> Rect {
        let lines = self.lines(text);
        let offset = offset.min(text.len_chars());
        let index = line_index_at(&lines, offset);
        let chars = Self::line_chars(text, &lines, index);
        let column = (offset - line_start(&lines, index)).min(chars.len());
        let visual = char_col_to_visual_col(chars.iter().copied(), column);

        Rect::new(
            visual as f32 * self.metrics.char_width,
            index as f32 * self.metrics.line_height,
            self.metrics.char_width,
            self.metrics.line_height,
        )
    }

    fn hit_test_point(&self, text: &TextSnapshot, point: Point) -> HitResult {
        let lines = self.lines(text);
        let row = if point.y <= 0.0 {
            0
        } else {
            ((point.y / self.metrics.line_height) as usize).min(lines.len() - 1)
        };
        let start = line_start(&lines, row);
        let chars = Self::line_chars(text, &lines, row);

        if point.x <= 0.0 {
            return HitResult {
                offset: start,
                is_trailing: false,
            };
        }

        let target = point.x / self.metrics.char_width;
        let mut cells = 0;
        for (i, &ch) in chars.iter().enumerate() {
            let width = cell_width(ch, cells);
            let right = (cells + width) as f32;
            if target < right {
                let middle = cells as f32 + width as f32 / 2.0;
                return HitResult {
                    offset: start + i,
                    is_trailing: target >= middle,
                };
            }
            cells += width;
        }

        // Past the end of the line: stay before the terminator, or on the last
        // char of a wrapped segment so the caret keeps to this visual line.
        let line = lines[row];
        let is_last = row + 1 == lines.len();
        if line.newline_length == 0 && !is_last && !chars.is_empty() {
            HitResult {
                offset: start + chars.len() - 1,
                is_trailing: false,
            }
        } else {
            HitResult {
                offset: start + chars.len(),
                is_trailing: false,
            }
        }
    }
}
