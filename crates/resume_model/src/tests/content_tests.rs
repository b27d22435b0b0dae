use std::fs;

use super::{content::EXPERIENCE_IMAGE_HEIGHT, ContentError, Resume, TabId};

const BODY: &str = r#"
[profile]
name = "Grace Brewster Hopper"
title = "Rear Admiral"
bio = "Compilers."
photo_path = "grace.png"

[profile.primary_link]
label = "Connect on LinkedIn"
url = "https://example.com/in/grace"

[profile.secondary_link]
label = "GitHub"
url = "https://example.com/grace"

[experience]
title = "COBOL"
subtitle = "1959 - Present"
bullets = ["Wrote the first compiler"]
visuals_heading = "Project Visuals"

[[experience.images]]
path = "a0.png"
width = 120
height = 90

[[projects]]
title = "A-0"
description = "Arithmetic language"
repo_url = "https://example.com/a0"

[[skills]]
category = "Languages"
tags = ["FLOW-MATIC", "COBOL"]

[education]
program = "PhD Mathematics"
metric = "Yale"
institution = "Yale University"
detail_line = "1934"
coursework_heading = "Key Coursework:"
coursework = ["Algebra"]
"#;

fn document(tabs: &[&str]) -> String {
    let mut doc = String::from(BODY);
    for id in tabs {
        doc.push_str(&format!("\n[[tabs]]\nid = \"{id}\"\nlabel = \"{id}\"\n"));
    }
    doc
}

#[test]
fn builtin_content_is_valid() {
    let resume = Resume::builtin();
    resume.validate().expect("builtin content validates");

    let ids: Vec<TabId> = resume.tabs().iter().map(|tab| tab.id).collect();
    assert_eq!(ids, TabId::ALL);
    assert_eq!(resume.experience().images.len(), 3);
    assert!(resume
        .experience()
        .images
        .iter()
        .all(|image| image.width == 250 && image.height == EXPERIENCE_IMAGE_HEIGHT));
    assert_eq!(resume.projects().len(), 3);
}

#[test]
fn builtin_profile_links_are_the_configured_urls() {
    let profile = Resume::builtin().profile().clone();
    assert_eq!(profile.primary_link.label, "Connect on LinkedIn");
    assert_eq!(
        profile.primary_link.url,
        "https://www.linkedin.com/in/aiko-pahuyo-196191373/"
    );
    assert_eq!(profile.secondary_link.url, "https://github.com/misuuwu");
}

#[test]
fn initials_use_first_and_last_name() {
    let mut profile = Resume::builtin().profile().clone();
    assert_eq!(profile.initials(), "AP");

    profile.name = "madonna".into();
    assert_eq!(profile.initials(), "M");

    profile.name = "   ".into();
    assert_eq!(profile.initials(), "");
}

#[test]
fn tab_metadata_is_ordered() {
    for (position, id) in TabId::ALL.iter().enumerate() {
        assert_eq!(id.ordinal(), position);
    }
    assert_eq!(TabId::Skills.label(), "Skills");
}

#[test]
fn parses_complete_document() {
    let resume = Resume::from_toml_str(&document(&[
        "experience",
        "projects",
        "skills",
        "education",
    ]))
    .expect("valid document");

    assert_eq!(resume.profile().initials(), "GH");
    assert_eq!(resume.experience().images[0].width, 120);
    assert_eq!(resume.skills()[0].tags, vec!["FLOW-MATIC", "COBOL"]);
    assert_eq!(resume.tab_label(TabId::Projects), "projects");
}

#[test]
fn rejects_duplicate_tab() {
    let err = Resume::from_toml_str(&document(&[
        "experience",
        "projects",
        "projects",
        "education",
    ]))
    .expect_err("duplicate tab must fail");
    assert!(matches!(err, ContentError::DuplicateTab(TabId::Projects)));
}

#[test]
fn rejects_missing_tab() {
    let err = Resume::from_toml_str(&document(&["experience", "projects", "skills"]))
        .expect_err("missing tab must fail");
    assert!(matches!(err, ContentError::MissingTab(TabId::Education)));
}

#[test]
fn rejects_unknown_tab_identifier() {
    let err = Resume::from_toml_str(&document(&[
        "experience",
        "projects",
        "skills",
        "education",
        "hobbies",
    ]))
    .expect_err("unknown tab must fail");
    assert!(matches!(err, ContentError::Parse(_)));
}

#[test]
fn load_reports_missing_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = Resume::load(&dir.path().join("absent.toml")).expect_err("missing file");
    assert!(matches!(err, ContentError::Read { .. }));
}

#[test]
fn load_reads_document_from_disk() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("resume.toml");
    fs::write(
        &path,
        document(&["education", "skills", "projects", "experience"]),
    )
    .expect("write document");

    let resume = Resume::load(&path).expect("load");
    assert_eq!(resume.tabs()[0].id, TabId::Education);
}
