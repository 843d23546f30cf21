use serde::{Deserialize, Serialize};

/// MIME type for the rendered résumé download.
pub const DOCX_MIME_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

// ────────────────────────────────────────────────────────────────────────────
// Generated text
// ────────────────────────────────────────────────────────────────────────────

/// Outcome of one text-generation call.
///
/// Failures are data, not errors: the composer decides what to render for a
/// `Failed` field instead of the failure aborting the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum GeneratedText {
    Ok(String),
    Failed(String),
}

impl GeneratedText {
    /// The text to show for this field. `what` names the content for the
    /// failure notice, e.g. "the summary".
    pub fn display_text(&self, what: &str) -> String {
        match self {
            GeneratedText::Ok(text) => text.clone(),
            GeneratedText::Failed(reason) => {
                format!("An error occurred while generating {what}: {reason}")
            }
        }
    }

    /// The text when generation succeeded, otherwise an empty string.
    pub fn ok_or_empty(&self) -> &str {
        match self {
            GeneratedText::Ok(text) => text,
            GeneratedText::Failed(_) => "",
        }
    }

    #[cfg(test)]
    pub fn is_failed(&self) -> bool {
        matches!(self, GeneratedText::Failed(_))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Template variant
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateVariant {
    Professional,
    ModernTwoColumn,
}

impl TemplateVariant {
    pub fn all() -> [TemplateVariant; 2] {
        [TemplateVariant::Professional, TemplateVariant::ModernTwoColumn]
    }

    pub fn label(self) -> &'static str {
        match self {
            TemplateVariant::Professional => "Professional",
            TemplateVariant::ModernTwoColumn => "Modern Two-Column",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Form input and composer input
// ────────────────────────────────────────────────────────────────────────────

/// The nine fields a user fills in before generation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeForm {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub linkedin_profile: String,
    pub job_title: String,
    pub skills: String,
    pub education: String,
    pub certifications: String,
    pub work_experience: String,
}

impl ResumeForm {
    /// Labels of fields that are empty or whitespace-only, in form order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("Full Name", &self.full_name),
            ("Email Address", &self.email),
            ("Phone Number", &self.phone_number),
            ("LinkedIn Profile URL", &self.linkedin_profile),
            ("Target Job Title", &self.job_title),
            ("Skills", &self.skills),
            ("Education", &self.education),
            ("Certifications", &self.certifications),
            ("Work Experience", &self.work_experience),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(label, _)| label)
        .collect()
    }

    /// Combines the form with generated content into composer input.
    pub fn into_inputs(
        self,
        summary: GeneratedText,
        optimized_experience: GeneratedText,
    ) -> ResumeInputs {
        ResumeInputs {
            full_name: self.full_name,
            email: self.email,
            phone_number: self.phone_number,
            linkedin_profile: self.linkedin_profile,
            job_title: self.job_title,
            skills: self.skills,
            education: self.education,
            certifications: self.certifications,
            experience: self.work_experience,
            optimized_experience,
            summary,
        }
    }
}

/// Everything a composer needs. All text is opaque and rendered verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeInputs {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub linkedin_profile: String,
    pub job_title: String,
    pub skills: String,
    pub education: String,
    pub certifications: String,
    /// Raw, user-entered work experience.
    pub experience: String,
    pub optimized_experience: GeneratedText,
    pub summary: GeneratedText,
}

/// Download filename convention: `Resume_<Full_Name>.docx`.
pub fn download_filename(full_name: &str) -> String {
    format!("Resume_{}.docx", full_name.replace(' ', "_"))
}
