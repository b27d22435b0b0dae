use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    domain::{
        EducationRecord, ExperienceEntry, ImageRef, Profile, ProjectCard, SkillGroup, SocialLink,
        TabEntry, TabId,
    },
    error::ContentError,
};

pub const EXPERIENCE_IMAGE_WIDTH: u32 = 250;
pub const EXPERIENCE_IMAGE_HEIGHT: u32 = 150;

/// Read-only description of everything the viewer shows.
///
/// Parsed documents are validated before they are returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resume {
    profile: Profile,
    tabs: Vec<TabEntry>,
    experience: ExperienceEntry,
    projects: Vec<ProjectCard>,
    skills: Vec<SkillGroup>,
    education: EducationRecord,
}

impl Resume {
    pub fn builtin() -> Self {
        Self {
            profile: builtin_profile(),
            tabs: TabId::ALL
                .iter()
                .map(|&id| TabEntry {
                    id,
                    label: id.label().to_string(),
                })
                .collect(),
            experience: builtin_experience(),
            projects: builtin_projects(),
            skills: builtin_skills(),
            education: builtin_education(),
        }
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, ContentError> {
        let resume: Resume = toml::from_str(raw)?;
        resume.validate()?;
        Ok(resume)
    }

    pub fn load(path: &Path) -> Result<Self, ContentError> {
        let raw = fs::read_to_string(path).map_err(|source| ContentError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    /// Each of the four tab identifiers must appear exactly once.
    pub fn validate(&self) -> Result<(), ContentError> {
        let mut seen = [false; TabId::ALL.len()];
        for tab in &self.tabs {
            let slot = &mut seen[tab.id.ordinal()];
            if *slot {
                return Err(ContentError::DuplicateTab(tab.id));
            }
            *slot = true;
        }
        if let Some(missing) = TabId::ALL.iter().find(|id| !seen[id.ordinal()]) {
            return Err(ContentError::MissingTab(*missing));
        }
        Ok(())
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn tabs(&self) -> &[TabEntry] {
        &self.tabs
    }

    /// Display label for `id`, falling back to the built-in label.
    pub fn tab_label(&self, id: TabId) -> &str {
        self.tabs
            .iter()
            .find(|tab| tab.id == id)
            .map(|tab| tab.label.as_str())
            .unwrap_or_else(|| id.label())
    }

    pub fn experience(&self) -> &ExperienceEntry {
        &self.experience
    }

    pub fn projects(&self) -> &[ProjectCard] {
        &self.projects
    }

    pub fn skills(&self) -> &[SkillGroup] {
        &self.skills
    }

    pub fn education(&self) -> &EducationRecord {
        &self.education
    }
}

fn builtin_profile() -> Profile {
    Profile {
        name: "Aiko Lindsay J. Pahuyo".into(),
        title: "Computer Science Student".into(),
        bio: "Passionate student developer seeking opportunities to apply foundational knowledge \
              in full-stack development. Proficient in modern programming languages and \
              collaborative development tools."
            .into(),
        photo_path: "my_photo.png".into(),
        primary_link: SocialLink {
            label: "Connect on LinkedIn".into(),
            url: "https://www.linkedin.com/in/aiko-pahuyo-196191373/".into(),
        },
        secondary_link: SocialLink {
            label: "GitHub".into(),
            url: "https://github.com/misuuwu".into(),
        },
    }
}

fn builtin_experience() -> ExperienceEntry {
    let screenshot = |path: &str| ImageRef {
        path: path.into(),
        width: EXPERIENCE_IMAGE_WIDTH,
        height: EXPERIENCE_IMAGE_HEIGHT,
    };
    ExperienceEntry {
        title: "Full-Stack E-commerce Platform".into(),
        subtitle: "Personal Project / Capstone | Sept 2023 - Present".into(),
        bullets: vec![
            "Developed a responsive e-commerce site using \"React, Node.js, and MongoDB\"".into(),
            "Implemented user authentication, product catalog management, and secure payment \
             processing."
                .into(),
            "Utilized \"Tailwind CSS\" for modern UI/UX design.".into(),
        ],
        visuals_heading: "Project Visuals".into(),
        images: vec![
            screenshot("ecommerce_project.png"),
            screenshot("flutter_project.png"),
            screenshot("blender_project.png"),
        ],
    }
}

fn builtin_projects() -> Vec<ProjectCard> {
    vec![
        ProjectCard {
            title: "E-Commerce Platform (HTML, CSS, and JavaScript)".into(),
            description: "A fully functional mobile e-commerce application built with HTML, CSS, \
                          and JavaScript, showcasing clean architecture and smooth animations."
                .into(),
            repo_url: "https://github.com/misuuwu/Ecommerce-API".into(),
        },
        ProjectCard {
            title: "Expense-Tracker".into(),
            description: "My personal Expense-Tracker built with React and TypeScript, \
                          demonstrating responsive design, modern hooks, and state management."
                .into(),
            repo_url: "https://github.com/Pragmatyst/Expense-Tracker".into(),
        },
        ProjectCard {
            title: "Flashwise V1".into(),
            description: "Your electrifying new study sidekick that zaps away boredom and \
                          supercharges your brain!"
                .into(),
            repo_url: "https://github.com/misuuwu/Flashwise_V1".into(),
        },
    ]
}

fn builtin_skills() -> Vec<SkillGroup> {
    vec![
        SkillGroup {
            category: "<> Programming Languages".into(),
            tags: vec![
                "Python (Advanced)".into(),
                "JavaScript (ES6+)".into(),
                "Java".into(),
                "C++".into(),
                "SQL / MySQL".into(),
            ],
        },
        SkillGroup {
            category: "Frontend Development".into(),
            tags: vec![
                "React".into(),
                "Next.js (Basics)".into(),
                "Tailwind CSS".into(),
                "Responsive Design".into(),
            ],
        },
    ]
}

fn builtin_education() -> EducationRecord {
    EducationRecord {
        program: "Technical Vocation Major in Computer Harwdare Servicing".into(),
        metric: "3.9 GPA".into(),
        institution: "Technological University of the Philippines".into(),
        detail_line: "Major in Software Development | Expected May 2026".into(),
        coursework_heading: "Key Coursework:".into(),
        coursework: vec![
            "Data Structures".into(),
            "Algorithms & Analysis".into(),
            "Operating Systems".into(),
            "Database Systems".into(),
            "Full-Stack Web Dev".into(),
        ],
    }
}
