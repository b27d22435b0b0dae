//! Panel builder: turns the résumé content into one immutable block list per tab.

pub mod layout;

use std::{collections::BTreeMap, sync::Arc};

use resume_model::{Resume, TabId};

use crate::assets::{AssetKey, AssetLoader, Bitmap};

pub const BULLET_WRAP_WIDTH: f32 = 320.0;
pub const DESCRIPTION_WRAP_WIDTH: f32 = 300.0;
pub const SKILL_TAGS_PER_ROW: usize = 3;
pub const COURSEWORK_TAGS_PER_ROW: usize = 2;
pub const REPOSITORY_LINK_LABEL: &str = "<> View Repository";

#[derive(Debug, Clone)]
pub struct Thumbnail {
    pub key: AssetKey,
    pub bitmap: Arc<Bitmap>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone)]
pub enum Block {
    /// Bold section title.
    Title(String),
    /// Accent-coloured heading.
    Subtitle(String),
    Body(String),
    /// Muted secondary line.
    Detail(String),
    Bullet { text: String, wrap_width: f32 },
    Visuals(Vec<Thumbnail>),
    ProjectCard {
        title: String,
        description: String,
        wrap_width: f32,
        link: Link,
    },
    TagRows(Vec<Vec<String>>),
    TitleWithBadge { title: String, badge: String },
}

#[derive(Debug, Clone)]
pub struct Panel {
    pub tab: TabId,
    pub blocks: Vec<Block>,
}

impl Panel {
    pub fn thumbnails(&self) -> impl Iterator<Item = &Thumbnail> {
        self.blocks
            .iter()
            .filter_map(|block| match block {
                Block::Visuals(thumbnails) => Some(thumbnails.iter()),
                _ => None,
            })
            .flatten()
    }

    pub fn links(&self) -> impl Iterator<Item = &Link> {
        self.blocks.iter().filter_map(|block| match block {
            Block::ProjectCard { link, .. } => Some(link),
            _ => None,
        })
    }
}

/// All four panels keyed by tab.
#[derive(Debug, Clone)]
pub struct Panels(BTreeMap<TabId, Panel>);

impl Panels {
    pub fn get(&self, tab: TabId) -> Option<&Panel> {
        self.0.get(&tab)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&TabId, &Panel)> {
        self.0.iter()
    }
}

pub fn build_all(content: &Resume, loader: &mut AssetLoader) -> Panels {
    Panels(
        TabId::ALL
            .into_iter()
            .map(|tab| (tab, build_panel(tab, content, loader)))
            .collect(),
    )
}

pub fn build_panel(tab: TabId, content: &Resume, loader: &mut AssetLoader) -> Panel {
    let blocks = match tab {
        TabId::Experience => experience_blocks(content, loader),
        TabId::Projects => project_blocks(content),
        TabId::Skills => skill_blocks(content),
        TabId::Education => education_blocks(content),
    };
    tracing::debug!(?tab, blocks = blocks.len(), "built panel");
    Panel { tab, blocks }
}

fn experience_blocks(content: &Resume, loader: &mut AssetLoader) -> Vec<Block> {
    let entry = content.experience();
    let mut blocks = vec![
        Block::Title(entry.title.clone()),
        Block::Detail(entry.subtitle.clone()),
    ];
    blocks.extend(entry.bullets.iter().map(|bullet| Block::Bullet {
        text: format!("• {bullet}"),
        wrap_width: BULLET_WRAP_WIDTH,
    }));
    blocks.push(Block::Subtitle(entry.visuals_heading.clone()));

    let thumbnails = entry
        .images
        .iter()
        .map(|image| Thumbnail {
            key: loader.key(&image.path, image.width, image.height),
            bitmap: loader.load_image(&image.path, image.width, image.height),
        })
        .collect();
    blocks.push(Block::Visuals(thumbnails));
    blocks
}

fn project_blocks(content: &Resume) -> Vec<Block> {
    let mut blocks = vec![Block::Title("My Featured Projects".to_string())];
    blocks.extend(content.projects().iter().map(|card| Block::ProjectCard {
        title: card.title.clone(),
        description: card.description.clone(),
        wrap_width: DESCRIPTION_WRAP_WIDTH,
        link: Link {
            label: REPOSITORY_LINK_LABEL.to_string(),
            url: card.repo_url.clone(),
        },
    }));
    blocks
}

fn skill_blocks(content: &Resume) -> Vec<Block> {
    content
        .skills()
        .iter()
        .flat_map(|group| {
            [
                Block::Title(group.category.clone()),
                Block::TagRows(layout::tag_rows(&group.tags, SKILL_TAGS_PER_ROW)),
            ]
        })
        .collect()
}

fn education_blocks(content: &Resume) -> Vec<Block> {
    let record = content.education();
    vec![
        Block::TitleWithBadge {
            title: record.program.clone(),
            badge: record.metric.clone(),
        },
        Block::Body(record.institution.clone()),
        Block::Detail(record.detail_line.clone()),
        Block::Title(record.coursework_heading.clone()),
        Block::TagRows(layout::tag_rows(
            &record.coursework,
            COURSEWORK_TAGS_PER_ROW,
        )),
    ]
}

#[cfg(test)]
#[path = "../tests/panels_tests.rs"]
mod tests;
