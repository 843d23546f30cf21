//! Serializer. Maps a `Document` onto `docx-rs` elements and packs the result
//! into a WordprocessingML (.docx) package.
//!
//! Document defaults (font, size) go into the package's `docDefaults`. The
//! default paragraph spacing is applied to each paragraph that does not set
//! its own, so every paragraph carries its effective spacing explicitly.

use std::collections::BTreeSet;
use std::io::Cursor;

use docx_rs::{
    AlignmentType, BorderType, BreakType, Docx, LineSpacing, LineSpacingType, PageMargin,
    Paragraph as DocxParagraph, ParagraphBorder, ParagraphBorderPosition, ParagraphBorders,
    Run as DocxRun, RunFonts, Style, StyleType, Table as DocxTable, TableBorder,
    TableBorderPosition, TableBorders, TableCell as DocxCell, TableLayoutType, TableRow,
    WidthType,
};
use tracing::debug;

use super::error::DocumentError;
use super::model::{Block, Document, Paragraph, Run, Table};
use super::style::{
    Alignment, Border, BorderEdge, BorderSet, BorderStyle, DocumentDefaults, Length, Margins,
};

/// Base line pitch for `lineRule="auto"` (240 = single spacing).
const SINGLE_LINE: f32 = 240.0;
/// Header and footer distance from the page edge, half an inch.
const HEADER_FOOTER_DISTANCE: i32 = 720;

impl Document {
    /// Serializes the document into `.docx` bytes.
    ///
    /// Either the whole package is produced or an error is returned; a
    /// partially written buffer is never handed back.
    pub fn to_docx_bytes(&self) -> Result<Vec<u8>, DocumentError> {
        let defaults = &self.defaults;
        let text_width = self.page.text_width();

        let mut docx = Docx::new()
            .page_size(self.page.width.twips(), self.page.height.twips())
            .page_margin(page_margin(&self.page.margins))
            .default_fonts(fonts(&defaults.font_family))
            .default_size(defaults.font_size.half_points() as usize)
            .add_style(Style::new("Normal", StyleType::Paragraph).name("Normal"));

        for style_id in declared_styles(self) {
            docx = docx.add_style(
                Style::new(style_id.as_str(), StyleType::Paragraph)
                    .name(style_id.as_str())
                    .based_on("Normal"),
            );
        }

        for block in &self.body {
            docx = match block {
                Block::Paragraph(p) => docx.add_paragraph(paragraph(p, defaults)),
                Block::Table(t) => docx.add_table(table(t, text_width, defaults)),
            };
        }

        let mut cursor = Cursor::new(Vec::new());
        docx.build()
            .pack(&mut cursor)
            .map_err(|e| DocumentError::Package(e.to_string()))?;
        let bytes = cursor.into_inner();

        debug!(
            "Serialized document: {} blocks, {} bytes",
            self.body.len(),
            bytes.len()
        );
        Ok(bytes)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Package-level settings
// ────────────────────────────────────────────────────────────────────────────

fn page_margin(margins: &Margins) -> PageMargin {
    PageMargin::new()
        .top(margins.top.twips() as i32)
        .bottom(margins.bottom.twips() as i32)
        .left(margins.left.twips() as i32)
        .right(margins.right.twips() as i32)
        .header(HEADER_FOOTER_DISTANCE)
        .footer(HEADER_FOOTER_DISTANCE)
        .gutter(0)
}

fn fonts(family: &str) -> RunFonts {
    RunFonts::new()
        .ascii(family)
        .hi_ansi(family)
        .east_asia(family)
        .cs(family)
}

/// Distinct paragraph style ids used anywhere in the document, sorted.
fn declared_styles(doc: &Document) -> BTreeSet<String> {
    doc.all_paragraphs()
        .into_iter()
        .filter_map(|p| p.format.style.clone())
        .filter(|id| id != "Normal")
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Paragraphs and runs
// ────────────────────────────────────────────────────────────────────────────

fn paragraph(p: &Paragraph, defaults: &DocumentDefaults) -> DocxParagraph {
    let f = &p.format;
    let mut out = DocxParagraph::new();

    if let Some(style) = &f.style {
        out = out.style(style);
    }
    if let Some(alignment) = f.alignment {
        out = out.align(match alignment {
            Alignment::Left => AlignmentType::Left,
            Alignment::Center => AlignmentType::Center,
        });
    }
    if f.left_indent.is_some() || f.right_indent.is_some() {
        out = out.indent(
            f.left_indent.map(|l| l.twips() as i32),
            None,
            f.right_indent.map(|l| l.twips() as i32),
            None,
        );
    }
    if let Some(spacing) = line_spacing(
        f.space_before,
        f.space_after.or(defaults.space_after),
        defaults.line_spacing,
    ) {
        out = out.line_spacing(spacing);
    }
    if !f.borders.is_empty() {
        out = out.set_borders(paragraph_borders(&f.borders));
    }

    for run in &p.runs {
        out = out.add_run(run_element(run));
    }
    out
}

fn line_spacing(
    before: Option<Length>,
    after: Option<Length>,
    multiple: Option<f32>,
) -> Option<LineSpacing> {
    if before.is_none() && after.is_none() && multiple.is_none() {
        return None;
    }
    let mut spacing = LineSpacing::new();
    if let Some(before) = before {
        spacing = spacing.before(before.twips() as _);
    }
    if let Some(after) = after {
        spacing = spacing.after(after.twips() as _);
    }
    if let Some(multiple) = multiple {
        spacing = spacing
            .line((multiple * SINGLE_LINE).round() as _)
            .line_rule(LineSpacingType::Auto);
    }
    Some(spacing)
}

/// All four outer edges are written. An edge the set leaves out is drawn as
/// `nil` so no inherited rule leaks through.
fn paragraph_borders(borders: &BorderSet) -> ParagraphBorders {
    [
        (BorderEdge::Top, ParagraphBorderPosition::Top),
        (BorderEdge::Left, ParagraphBorderPosition::Left),
        (BorderEdge::Bottom, ParagraphBorderPosition::Bottom),
        (BorderEdge::Right, ParagraphBorderPosition::Right),
    ]
    .into_iter()
    .fold(ParagraphBorders::new(), |set, (edge, position)| {
        let border = borders.get(edge).cloned().unwrap_or_else(Border::none);
        set.set(
            ParagraphBorder::new(position)
                .val(border_type(&border))
                .size(border.weight as usize)
                .space(border.space as usize)
                .color("auto"),
        )
    })
}

fn run_element(run: &Run) -> DocxRun {
    let mut out = DocxRun::new();
    if run.bold {
        out = out.bold();
    }
    if let Some(size) = run.size {
        out = out.size(size.half_points() as usize);
    }
    append_text(out, &run.text)
}

/// Appends `text` to `run`, splitting it around the characters that are
/// elements rather than text in the package format.
///
/// `\n`, `\r\n`, `\r` and vertical tab become line breaks, form feed becomes a
/// page break and `\t` a tab. Any other character XML 1.0 cannot carry is
/// dropped.
fn append_text(mut run: DocxRun, text: &str) -> DocxRun {
    let mut segment = String::new();
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        let element = match c {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                Some(BreakType::TextWrapping)
            }
            '\n' | '\u{0b}' => Some(BreakType::TextWrapping),
            '\u{0c}' => Some(BreakType::Page),
            '\t' => None,
            other if is_xml_char(other) => {
                segment.push(other);
                continue;
            }
            other => {
                debug!("Dropping character U+{:04X} from run text", other as u32);
                continue;
            }
        };

        if !segment.is_empty() {
            run = run.add_text(segment.as_str());
            segment.clear();
        }
        run = match element {
            Some(kind) => run.add_break(kind),
            None => run.add_tab(),
        };
    }

    if !segment.is_empty() {
        run = run.add_text(segment.as_str());
    }
    run
}

/// Characters allowed in XML 1.0 character data.
fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\r'
            | '\u{20}'..='\u{D7FF}'
            | '\u{E000}'..='\u{FFFD}'
            | '\u{10000}'..='\u{10FFFF}'
    )
}

// ────────────────────────────────────────────────────────────────────────────
// Tables
// ────────────────────────────────────────────────────────────────────────────

fn table(t: &Table, text_width: Length, defaults: &DocumentDefaults) -> DocxTable {
    let widths = t.column_widths(text_width);

    let rows = (0..t.row_count())
        .map(|row| {
            let cells = t
                .row(row)
                .iter()
                .enumerate()
                .map(|(col, cell)| {
                    let width = cell.width.unwrap_or(widths[col]);
                    cell.paragraphs.iter().fold(
                        DocxCell::new().width(width.twips() as usize, WidthType::Dxa),
                        |out, p| out.add_paragraph(paragraph(p, defaults)),
                    )
                })
                .collect();
            TableRow::new(cells)
        })
        .collect();

    DocxTable::new(rows)
        .set_grid(widths.iter().map(|w| w.twips() as usize).collect())
        .layout(TableLayoutType::Fixed)
        .set_borders(table_borders(&t.borders))
}

/// All six table edges are written; an edge the set leaves out is `nil`, so
/// a table without borders draws no grid lines.
fn table_borders(borders: &BorderSet) -> TableBorders {
    BorderEdge::TABLE_EDGES
        .into_iter()
        .fold(TableBorders::new(), |set, edge| {
            let border = borders.get(edge).cloned().unwrap_or_else(Border::none);
            set.set(
                TableBorder::new(table_position(edge))
                    .border_type(border_type(&border))
                    .size(border.weight as usize)
                    .color("auto"),
            )
        })
}

fn table_position(edge: BorderEdge) -> TableBorderPosition {
    match edge {
        BorderEdge::Top => TableBorderPosition::Top,
        BorderEdge::Left => TableBorderPosition::Left,
        BorderEdge::Bottom => TableBorderPosition::Bottom,
        BorderEdge::Right => TableBorderPosition::Right,
        BorderEdge::InsideHorizontal => TableBorderPosition::InsideH,
        BorderEdge::InsideVertical => TableBorderPosition::InsideV,
    }
}

fn border_type(border: &Border) -> BorderType {
    match border.style {
        BorderStyle::Single => BorderType::Single,
        BorderStyle::Nil => BorderType::Nil,
    }
}
