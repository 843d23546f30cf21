//! Modern two-column template.
//!
//! Layout is a single-row, two-column table used purely for positioning. All
//! table borders are suppressed except the vertical divider between columns.
//!
//! Left (narrow): contact, education, skills, certifications.
//! Right (wide): profile summary, work experience.
//!
//! Uses the AI-optimized summary but the raw, user-entered experience.

use crate::document::{
    Alignment, Border, BorderEdge, BorderSet, Document, Length, Margins, TableCell,
};
use crate::models::resume::ResumeInputs;
use crate::templates::headers::{decorate, MODERN, NAME_HEADING_STYLE};

const NAME_SIZE_PT: f32 = 24.0;
const NAME_SPACE_AFTER_PT: f32 = 10.0;
const DEFAULT_SPACE_AFTER_PT: f32 = 4.0;
const DEFAULT_LINE_SPACING: f32 = 1.15;
const DIVIDER_WEIGHT: u8 = 4;

const LEFT_COLUMN_IN: f32 = 2.8;
const RIGHT_COLUMN_IN: f32 = 4.2;
/// Gutter each column keeps from the divider on its first line.
const GUTTER_IN: f32 = 0.2;
/// Indent applied to every paragraph in the right column.
const RIGHT_INDENT_IN: f32 = 0.25;

pub fn compose_modern(inputs: &ResumeInputs) -> Document {
    let mut doc = Document::new();
    doc.page.margins = Margins::symmetric(Length::inches(0.7), Length::inches(0.75));
    doc.defaults.space_after = Some(Length::pt(DEFAULT_SPACE_AFTER_PT));
    doc.defaults.line_spacing = Some(DEFAULT_LINE_SPACING);

    let name = doc.add_paragraph();
    name.style(NAME_HEADING_STYLE)
        .align(Alignment::Center)
        .space_after(Length::pt(NAME_SPACE_AFTER_PT));
    name.add_run(&inputs.full_name.to_uppercase())
        .bold(true)
        .size(Length::pt(NAME_SIZE_PT));

    let table = doc.add_table(1, 2);
    table.set_borders(BorderSet::only(
        BorderEdge::InsideVertical,
        Border::single(DIVIDER_WEIGHT),
    ));

    let left = table.cell_mut(0, 0);
    left.set_width(Length::inches(LEFT_COLUMN_IN));
    left.first_paragraph_mut().right_indent(Length::inches(GUTTER_IN));
    fill_left_column(left, inputs);

    let right = table.cell_mut(0, 1);
    right.set_width(Length::inches(RIGHT_COLUMN_IN));
    right.first_paragraph_mut().left_indent(Length::inches(GUTTER_IN));
    fill_right_column(right, inputs);

    doc
}

fn fill_right_column(cell: &mut TableCell, inputs: &ResumeInputs) {
    let indent = Length::inches(RIGHT_INDENT_IN);

    decorate(
        cell.add_paragraph().left_indent(indent),
        "Profile Summary",
        &MODERN,
        false,
    );
    cell.add_paragraph_with_text(&inputs.summary.display_text("the summary"))
        .left_indent(indent);

    decorate(
        cell.add_paragraph().left_indent(indent),
        "Work Experience",
        &MODERN,
        true,
    );
    cell.add_paragraph_with_text(&inputs.experience).left_indent(indent);
}

fn fill_left_column(cell: &mut TableCell, inputs: &ResumeInputs) {
    decorate(cell.add_paragraph(), "Contact", &MODERN, false);
    cell.add_paragraph_with_text(&inputs.phone_number);
    cell.add_paragraph_with_text(&inputs.email);
    cell.add_paragraph_with_text(&inputs.linkedin_profile);

    for (title, body) in [
        ("Education", &inputs.education),
        ("Skills", &inputs.skills),
        ("Certifications", &inputs.certifications),
    ] {
        decorate(cell.add_paragraph(), title, &MODERN, true);
        cell.add_paragraph_with_text(body);
    }
}
