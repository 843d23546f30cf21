//! In-memory document tree: body → paragraphs / tables → runs.
//!
//! The `Document` exclusively owns every node. Builder primitives return
//! `&mut` handles into the tree so a composer can keep decorating the node it
//! just appended; nothing is shared between two documents.

use serde::Serialize;

use super::style::{Alignment, BorderSet, DocumentDefaults, Length, PageSetup};

// ────────────────────────────────────────────────────────────────────────────
// Runs and paragraphs
// ────────────────────────────────────────────────────────────────────────────

/// A span of text sharing one formatting set.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Run {
    pub text: String,
    pub bold: bool,
    /// `None` inherits the document default size.
    pub size: Option<Length>,
}

impl Run {
    pub fn bold(&mut self, bold: bool) -> &mut Self {
        self.bold = bold;
        self
    }

    pub fn size(&mut self, size: Length) -> &mut Self {
        self.size = Some(size);
        self
    }
}

/// Paragraph-level formatting. Unset fields inherit from the paragraph style.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParagraphFormat {
    /// Named paragraph style id declared by the serializer. Carries no
    /// visual formatting of its own.
    pub style: Option<String>,
    pub alignment: Option<Alignment>,
    pub space_before: Option<Length>,
    pub space_after: Option<Length>,
    pub left_indent: Option<Length>,
    pub right_indent: Option<Length>,
    pub borders: BorderSet,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Paragraph {
    pub runs: Vec<Run>,
    pub format: ParagraphFormat,
}

impl Paragraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// A paragraph holding `text` as a single plain run. Empty text yields a
    /// paragraph with no runs.
    pub fn with_text(text: &str) -> Self {
        let mut p = Self::new();
        if !text.is_empty() {
            p.add_run(text);
        }
        p
    }

    pub fn add_run(&mut self, text: &str) -> &mut Run {
        self.runs.push(Run {
            text: text.to_string(),
            ..Run::default()
        });
        let last = self.runs.len() - 1;
        &mut self.runs[last]
    }

    #[cfg(test)]
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    pub fn style(&mut self, style_id: &str) -> &mut Self {
        self.format.style = Some(style_id.to_string());
        self
    }

    pub fn align(&mut self, alignment: Alignment) -> &mut Self {
        self.format.alignment = Some(alignment);
        self
    }

    pub fn space_before(&mut self, length: Length) -> &mut Self {
        self.format.space_before = Some(length);
        self
    }

    pub fn space_after(&mut self, length: Length) -> &mut Self {
        self.format.space_after = Some(length);
        self
    }

    pub fn left_indent(&mut self, length: Length) -> &mut Self {
        self.format.left_indent = Some(length);
        self
    }

    pub fn right_indent(&mut self, length: Length) -> &mut Self {
        self.format.right_indent = Some(length);
        self
    }

    /// Attaches borders to this paragraph, merging with any already present.
    ///
    /// Paragraphs only have outer edges; inside edges are a programmer error.
    pub fn borders(&mut self, borders: BorderSet) -> &mut Self {
        for (edge, border) in borders.iter() {
            debug_assert!(!edge.is_inside(), "paragraphs have no {edge:?} edge");
            self.format.borders.set(edge, border.clone());
        }
        self
    }

    #[cfg(test)]
    pub fn has_border(&self, edge: super::style::BorderEdge) -> bool {
        self.format
            .borders
            .get(edge)
            .is_some_and(|b| b.is_visible())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tables
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableCell {
    pub width: Option<Length>,
    pub paragraphs: Vec<Paragraph>,
}

impl TableCell {
    /// Every cell owns at least one paragraph; a fresh cell starts with an
    /// empty one.
    fn new() -> Self {
        Self {
            width: None,
            paragraphs: vec![Paragraph::new()],
        }
    }

    pub fn set_width(&mut self, width: Length) -> &mut Self {
        self.width = Some(width);
        self
    }

    pub fn first_paragraph_mut(&mut self) -> &mut Paragraph {
        &mut self.paragraphs[0]
    }

    pub fn add_paragraph(&mut self) -> &mut Paragraph {
        self.push(Paragraph::new())
    }

    pub fn add_paragraph_with_text(&mut self, text: &str) -> &mut Paragraph {
        self.push(Paragraph::with_text(text))
    }

    fn push(&mut self, paragraph: Paragraph) -> &mut Paragraph {
        self.paragraphs.push(paragraph);
        let last = self.paragraphs.len() - 1;
        &mut self.paragraphs[last]
    }

    #[cfg(test)]
    pub fn text(&self) -> String {
        self.paragraphs
            .iter()
            .map(Paragraph::text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A table with a grid fixed at creation time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    rows: usize,
    cols: usize,
    /// Row-major, `rows * cols` long.
    cells: Vec<TableCell>,
    pub borders: BorderSet,
}

impl Table {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: (0..rows * cols).map(|_| TableCell::new()).collect(),
            borders: BorderSet::new(),
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows
    }

    #[cfg(test)]
    pub fn column_count(&self) -> usize {
        self.cols
    }

    pub fn cell(&self, row: usize, col: usize) -> &TableCell {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) outside {}x{} grid",
            self.rows,
            self.cols
        );
        &self.cells[row * self.cols + col]
    }

    /// # Panics
    /// If `(row, col)` lies outside the grid.
    pub fn cell_mut(&mut self, row: usize, col: usize) -> &mut TableCell {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) outside {}x{} grid",
            self.rows,
            self.cols
        );
        &mut self.cells[row * self.cols + col]
    }

    pub fn row(&self, row: usize) -> &[TableCell] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    pub fn set_borders(&mut self, borders: BorderSet) -> &mut Self {
        self.borders = borders;
        self
    }

    /// Width of each grid column: the widest explicit cell width in that
    /// column, or an even share of `available` when no cell sets one.
    pub fn column_widths(&self, available: Length) -> Vec<Length> {
        let even = if self.cols == 0 {
            Length::ZERO
        } else {
            Length::from_twips(available.twips() / self.cols as u32)
        };
        (0..self.cols)
            .map(|col| {
                (0..self.rows)
                    .filter_map(|row| self.cell(row, col).width)
                    .max()
                    .unwrap_or(even)
            })
            .collect()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Document
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Block {
    Paragraph(Paragraph),
    Table(Table),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Document {
    pub page: PageSetup,
    pub defaults: DocumentDefaults,
    pub body: Vec<Block>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_paragraph(&mut self) -> &mut Paragraph {
        self.add_paragraph_with_text("")
    }

    pub fn add_paragraph_with_text(&mut self, text: &str) -> &mut Paragraph {
        self.body.push(Block::Paragraph(Paragraph::with_text(text)));
        match self.body.last_mut() {
            Some(Block::Paragraph(p)) => p,
            _ => unreachable!("a paragraph was just pushed"),
        }
    }

    pub fn add_table(&mut self, rows: usize, cols: usize) -> &mut Table {
        self.body.push(Block::Table(Table::new(rows, cols)));
        match self.body.last_mut() {
            Some(Block::Table(t)) => t,
            _ => unreachable!("a table was just pushed"),
        }
    }

    #[cfg(test)]
    pub fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.body.iter().filter_map(|b| match b {
            Block::Paragraph(p) => Some(p),
            Block::Table(_) => None,
        })
    }

    #[cfg(test)]
    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.body.iter().filter_map(|b| match b {
            Block::Table(t) => Some(t),
            Block::Paragraph(_) => None,
        })
    }

    /// Every paragraph in reading order, descending into table cells
    /// row by row.
    pub fn all_paragraphs(&self) -> Vec<&Paragraph> {
        let mut out = Vec::new();
        for block in &self.body {
            match block {
                Block::Paragraph(p) => out.push(p),
                Block::Table(t) => {
                    for row in 0..t.row_count() {
                        for cell in t.row(row) {
                            out.extend(cell.paragraphs.iter());
                        }
                    }
                }
            }
        }
        out
    }

    /// Paragraphs carrying the given style id, in reading order.
    #[cfg(test)]
    pub fn paragraphs_with_style(&self, style_id: &str) -> Vec<&Paragraph> {
        self.all_paragraphs()
            .into_iter()
            .filter(|p| p.format.style.as_deref() == Some(style_id))
            .collect()
    }
}
