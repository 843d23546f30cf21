//! Section header decoration shared by both résumé templates.
//!
//! A header is an ordinary paragraph that receives an uppercased bold title
//! run, fixed spacing and, optionally, a single-line rule on one edge.

use crate::document::{Border, BorderEdge, BorderSet, Length, Paragraph};

/// Paragraph style id carried by every section header.
pub const SECTION_HEADER_STYLE: &str = "SectionHeader";
/// Paragraph style id carried by the name line at the top of a résumé.
pub const NAME_HEADING_STYLE: &str = "NameHeading";

/// One of the two decoration protocols.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderDecoration {
    /// Edge the rule is drawn on.
    pub rule_edge: BorderEdge,
    /// Rule weight in eighths of a point.
    pub rule_weight: u8,
    /// Gap between rule and text, in points.
    pub rule_space: u8,
    pub space_before_pt: f32,
    pub space_after_pt: f32,
    /// Explicit title size; `None` keeps the document default.
    pub title_size_pt: Option<f32>,
    /// Start the title with a line break so a top rule sits clear of the text.
    pub leading_break: bool,
}

/// Single-column template: bottom rule under every header.
pub const PROFESSIONAL: HeaderDecoration = HeaderDecoration {
    rule_edge: BorderEdge::Bottom,
    rule_weight: 6,
    rule_space: 1,
    space_before_pt: 18.0,
    space_after_pt: 8.0,
    title_size_pt: None,
    leading_break: false,
};

/// Two-column template: thin top rule, skipped for the first header in a column.
pub const MODERN: HeaderDecoration = HeaderDecoration {
    rule_edge: BorderEdge::Top,
    rule_weight: 4,
    rule_space: 0,
    space_before_pt: 12.0,
    space_after_pt: 6.0,
    title_size_pt: Some(11.0),
    leading_break: true,
};

/// Turns `paragraph` into a section header.
///
/// The paragraph should be freshly added; the title run is appended after
/// whatever runs it already holds.
pub fn decorate(
    paragraph: &mut Paragraph,
    title: &str,
    decoration: &HeaderDecoration,
    draw_rule: bool,
) {
    let title = if decoration.leading_break {
        format!("\n{}", title.to_uppercase())
    } else {
        title.to_uppercase()
    };

    let run = paragraph.add_run(&title);
    run.bold(true);
    if let Some(size) = decoration.title_size_pt {
        run.size(Length::pt(size));
    }

    paragraph
        .style(SECTION_HEADER_STYLE)
        .space_before(Length::pt(decoration.space_before_pt))
        .space_after(Length::pt(decoration.space_after_pt));

    if draw_rule {
        paragraph.borders(BorderSet::new().with(
            decoration.rule_edge,
            Border::single(decoration.rule_weight).with_space(decoration.rule_space),
        ));
    }
}

/// Title text of a decorated header, without the leading break.
#[cfg(test)]
pub fn header_title(paragraph: &Paragraph) -> String {
    paragraph.text().trim_start_matches('\n').to_string()
}
