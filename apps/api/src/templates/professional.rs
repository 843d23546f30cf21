//! Professional template: single-column flow.
//!
//! Name, contact line, then five headed sections in fixed order. Uses the
//! AI-optimized summary and the AI-optimized experience.

use crate::document::{Alignment, Document, Length, Margins};
use crate::models::resume::ResumeInputs;
use crate::templates::headers::{decorate, NAME_HEADING_STYLE, PROFESSIONAL};

const NAME_SIZE_PT: f32 = 24.0;
const CONTACT_SPACE_AFTER_PT: f32 = 18.0;

/// Section titles in the order they are rendered.
pub const SECTION_TITLES: [&str; 5] = [
    "Professional Summary",
    "Work Experience",
    "Education",
    "Skills",
    "Certifications",
];

pub fn compose_professional(inputs: &ResumeInputs) -> Document {
    let mut doc = Document::new();
    doc.page.margins = Margins::symmetric(Length::inches(0.5), Length::inches(0.75));

    let name = doc.add_paragraph();
    name.style(NAME_HEADING_STYLE).align(Alignment::Center);
    name.add_run(&inputs.full_name.to_uppercase())
        .bold(true)
        .size(Length::pt(NAME_SIZE_PT));

    let contact = doc.add_paragraph();
    contact
        .align(Alignment::Center)
        .space_after(Length::pt(CONTACT_SPACE_AFTER_PT));
    contact.add_run(&format!(
        "Email: {} | Phone Number: {}\n LinkedIn Profile: {}",
        inputs.email, inputs.phone_number, inputs.linkedin_profile
    ));

    let bodies = [
        inputs.summary.display_text("the summary"),
        inputs.optimized_experience.display_text("experience points"),
        inputs.education.clone(),
        inputs.skills.clone(),
        inputs.certifications.clone(),
    ];

    for (title, body) in SECTION_TITLES.iter().zip(bodies.iter()) {
        decorate(doc.add_paragraph(), title, &PROFESSIONAL, true);
        doc.add_paragraph_with_text(body);
    }

    doc
}
