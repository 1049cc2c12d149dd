//! Sample candidate used by the front-end's "Load Demo Data" action.

use crate::analysis::analyzer::CandidateInput;

pub const DEMO_EXPERIENCE_YEARS: u32 = 6;

pub const DEMO_RESUME: &str = "John Doe
Senior Software Developer

Summary:
Experienced developer with 6 years in full-stack web development. Proficient in React, Node.js, and Python. Strong background in cloud architecture (AWS) and CI/CD pipelines.

Experience:
- Senior Developer at TechCorp (2020-Present): Led a team of 5, optimized legacy API reducing latency by 40%.
- Developer at StartupInc (2017-2020): Built MVP for fintech product using Django and React.

Skills: JavaScript, TypeScript, Python, AWS, Docker, Git, Agile.";

pub const DEMO_JOB_DESCRIPTION: &str = "Job Title: Senior Full Stack Engineer

Requirements:
- 5+ years of experience in software development
- Strong proficiency in React.js and TypeScript
- Backend experience with Python/Django or Node.js
- Experience with cloud platforms (AWS/GCP)
- Excellent problem-solving skills and leadership ability.";

pub fn demo_input() -> CandidateInput {
    CandidateInput {
        resume_text: DEMO_RESUME.to_string(),
        experience_years: DEMO_EXPERIENCE_YEARS,
        job_description: DEMO_JOB_DESCRIPTION.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyzer::{MAX_JOB_DESCRIPTION_CHARS, MAX_RESUME_CHARS};

    #[test]
    fn test_demo_fits_within_caps() {
        let input = demo_input();
        assert!(input.resume_text.chars().count() < MAX_RESUME_CHARS);
        assert!(input.job_description.chars().count() < MAX_JOB_DESCRIPTION_CHARS);
        assert_eq!(input.experience_years, 6);
    }
}
