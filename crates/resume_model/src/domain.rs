use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TabId {
    Experience,
    Projects,
    Skills,
    Education,
}

impl TabId {
    /// Every tab, in navigation order.
    pub const ALL: [TabId; 4] = [
        TabId::Experience,
        TabId::Projects,
        TabId::Skills,
        TabId::Education,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TabId::Experience => "Experience",
            TabId::Projects => "Projects",
            TabId::Skills => "Skills",
            TabId::Education => "Education",
        }
    }

    pub fn ordinal(self) -> usize {
        match self {
            TabId::Experience => 0,
            TabId::Projects => 1,
            TabId::Skills => 2,
            TabId::Education => 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub photo_path: String,
    /// Rendered as the primary button.
    pub primary_link: SocialLink,
    /// Rendered as the secondary button.
    pub secondary_link: SocialLink,
}

impl Profile {
    /// First letter of the first and last name, upper-cased ("AP" for
    /// "Aiko Lindsay J. Pahuyo").
    pub fn initials(&self) -> String {
        let mut words = self.name.split_whitespace();
        let first = words.next().and_then(|w| w.chars().next());
        let last = words.last().and_then(|w| w.chars().next());
        first
            .into_iter()
            .chain(last)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabEntry {
    pub id: TabId,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageRef {
    pub path: String,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub title: String,
    pub subtitle: String,
    pub bullets: Vec<String>,
    pub visuals_heading: String,
    #[serde(default)]
    pub images: Vec<ImageRef>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectCard {
    pub title: String,
    pub description: String,
    pub repo_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub category: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationRecord {
    pub program: String,
    pub metric: String,
    pub institution: String,
    pub detail_line: String,
    pub coursework_heading: String,
    pub coursework: Vec<String>,
}
