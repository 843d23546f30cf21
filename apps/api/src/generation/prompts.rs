// All LLM prompt templates for the Generation module.
// Reuses cross-cutting fragments from llm_client::prompts.

/// Experience rewrite prompt.
/// Replace: {persona}, {no_preamble}, {job_title}, {work_experience}
pub const EXPERIENCE_PROMPT_TEMPLATE: &str = r#"{persona}

Your task is to rewrite and enhance ONLY the achievement bullet points under each job title in the provided work experience. You MUST PRESERVE the original job titles, company names, locations, and dates exactly as they are written.

**Instructions for rewriting bullet points:**
1.  Use strong action verbs and quantify results with numbers or metrics (e.g., "increased efficiency by 15%").
2.  Apply the STAR method (Situation-Task-Action-Result) where possible.
3.  Tailor the language and keywords to align with the **Target Job Title: {job_title}**.

**Strict Formatting Rules:**
- Your response must contain ONLY the rewritten work experience section.
- {no_preamble}

**Example:**

**User Input:**
`Project Analyst - TechSolutions India (June 2022 - Present)
- Coordinated project activities.
- Tracked timelines and deliverables in Jira.
- Facilitated daily meetings.`

**Your Desired Output:**
`Project Analyst - TechSolutions India, Bangalore (June 2022 - Present)
- Coordinated project activities for multiple software development teams using Agile methodologies.
- Tracked project timelines, milestones, and deliverables in Jira, improving on-time task completion by 15%.
- Facilitated daily scrum meetings and prepared weekly status reports for stakeholders.`

---

Now, rewrite the following work experience based on all the rules above:

**Work Experience to Rewrite:**
{work_experience}"#;

/// Résumé summary prompt.
/// Replace: {job_title}, {skills}, {work_experience}, {education}
pub const SUMMARY_PROMPT_TEMPLATE: &str = r#"Based on the following comprehensive information, write a compelling and professional resume summary of 3-4 lines.

**Target Job Title:** {job_title}
**Key Skills:** {skills}
**Work Experience Highlights:** {work_experience}
**Education:** {education}

**Instructions:**
-   Synthesize all the provided information into a brief, compelling narrative for the top of a resume.
-   Start with a strong, descriptive title that aligns with the target job (e.g., "Results-driven Data Scientist" or "Innovative Software Engineer").
-   Incorporate high-value keywords from the skills list and reflect the experience and education provided.
-   No need on any title or heading, just the summary text."#;

/// Cover letter prompt.
/// Replace: {full_name}, {job_title}, {summary}, {experience}
pub const COVER_LETTER_PROMPT_TEMPLATE: &str = r#"Write a professional and tailored one-page cover letter.

**Applicant's Name:** {full_name}
**Target Job Title:** {job_title}
**Optimized Resume Summary for Context:**
{summary}
**Optimized Experience Bullet Points for Context:**
{experience}

**Instructions:**
1.  **Structure:** 3-4 paragraphs (Introduction, Body, Conclusion with a call to action).
2.  **Sign-off:** The sign-off must be "Sincerely," followed by the applicant's name: {full_name}."#;
