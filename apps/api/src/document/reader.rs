//! Re-opens a produced `.docx` package with `docx_rs::read_docx` and recovers
//! a flat view of its body: paragraph text and style, table grids and cell
//! text. Formatting is asserted on the `Document` model instead.

use anyhow::{anyhow, Result};
use docx_rs::{
    DocumentChild, Paragraph, ParagraphChild, RunChild, Table, TableCellContent, TableChild,
    TableRowChild,
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReadParagraph {
    pub style: Option<String>,
    /// Run text with line and page breaks as `\n` and tabs as `\t`.
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReadCell {
    pub paragraphs: Vec<ReadParagraph>,
}

impl ReadCell {
    pub fn texts(&self) -> Vec<&str> {
        self.paragraphs.iter().map(|p| p.text.as_str()).collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReadTable {
    /// Column widths in twips.
    pub grid: Vec<usize>,
    pub rows: Vec<Vec<ReadCell>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReadBlock {
    Paragraph(ReadParagraph),
    Table(ReadTable),
}

#[derive(Debug, Clone, Default)]
pub struct ReadDocument {
    pub blocks: Vec<ReadBlock>,
}

impl ReadDocument {
    pub fn tables(&self) -> Vec<&ReadTable> {
        self.blocks
            .iter()
            .filter_map(|b| match b {
                ReadBlock::Table(t) => Some(t),
                ReadBlock::Paragraph(_) => None,
            })
            .collect()
    }

    /// Every paragraph in reading order, descending into table cells.
    pub fn all_paragraphs(&self) -> Vec<&ReadParagraph> {
        let mut out = Vec::new();
        for block in &self.blocks {
            match block {
                ReadBlock::Paragraph(p) => out.push(p),
                ReadBlock::Table(t) => {
                    for cell in t.rows.iter().flatten() {
                        out.extend(cell.paragraphs.iter());
                    }
                }
            }
        }
        out
    }

    pub fn with_style(&self, style_id: &str) -> Vec<&ReadParagraph> {
        self.all_paragraphs()
            .into_iter()
            .filter(|p| p.style.as_deref() == Some(style_id))
            .collect()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.all_paragraphs()
            .into_iter()
            .map(|p| p.text.as_str())
            .collect()
    }
}

pub fn read_docx(bytes: &[u8]) -> Result<ReadDocument> {
    let docx = docx_rs::read_docx(bytes).map_err(|e| anyhow!("unreadable package: {e:?}"))?;

    let blocks = docx
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(p) => Some(ReadBlock::Paragraph(read_paragraph(p))),
            DocumentChild::Table(t) => Some(ReadBlock::Table(read_table(t))),
            _ => None,
        })
        .collect();
    Ok(ReadDocument { blocks })
}

fn read_paragraph(p: &Paragraph) -> ReadParagraph {
    let mut text = String::new();
    for child in &p.children {
        if let ParagraphChild::Run(run) = child {
            for content in &run.children {
                match content {
                    RunChild::Text(t) => text.push_str(&t.text),
                    RunChild::Break(_) => text.push('\n'),
                    RunChild::Tab(_) => text.push('\t'),
                    _ => {}
                }
            }
        }
    }
    ReadParagraph {
        style: p.property.style.as_ref().map(|s| s.val.clone()),
        text,
    }
}

fn read_table(t: &Table) -> ReadTable {
    let mut rows = Vec::new();
    for child in &t.rows {
        let TableChild::TableRow(row) = child else {
            continue;
        };
        let mut cells = Vec::new();
        for cell_child in &row.cells {
            let TableRowChild::TableCell(cell) = cell_child else {
                continue;
            };
            let paragraphs = cell
                .children
                .iter()
                .filter_map(|content| match content {
                    TableCellContent::Paragraph(p) => Some(read_paragraph(p)),
                    _ => None,
                })
                .collect();
            cells.push(ReadCell { paragraphs });
        }
        rows.push(cells);
    }
    ReadTable {
        grid: t.grid.clone(),
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;

    #[test]
    fn test_reads_styles_and_table_cells() {
        let mut doc = Document::new();
        doc.add_paragraph_with_text("Heading").style("SectionHeader");
        let table = doc.add_table(1, 2);
        table.cell_mut(0, 0).add_paragraph_with_text("left");
        table.cell_mut(0, 1).add_paragraph_with_text("right");

        let read = read_docx(&doc.to_docx_bytes().expect("serialize")).expect("read back");
        assert_eq!(read.with_style("SectionHeader")[0].text, "Heading");

        let tables = read.tables();
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].grid.len(), 2);
        assert_eq!(tables[0].rows[0][0].texts(), vec!["", "left"]);
        assert_eq!(tables[0].rows[0][1].texts(), vec!["", "right"]);
    }

    #[test]
    fn test_rejects_non_package_bytes() {
        assert!(read_docx(b"not a zip").is_err());
    }
}
