use image::{Rgb, RgbImage};
use resume_model::{Resume, TabId};

use super::{ButtonEmphasis, HeaderPhoto, ResumeApp, PHOTO_SIZE};
use crate::{
    assets::AssetLoader,
    controller::{
        events::UiAction,
        links::{testing::RecordingOpener, LinkDispatcher},
    },
};

struct Fixture {
    _dir: tempfile::TempDir,
    app: ResumeApp,
    opener: RecordingOpener,
}

fn fixture(with_photo: bool) -> Fixture {
    let dir = tempfile::tempdir().expect("tempdir");
    if with_photo {
        RgbImage::from_pixel(320, 240, Rgb([200, 40, 40]))
            .save(dir.path().join("my_photo.png"))
            .expect("write photo");
    }
    let opener = RecordingOpener::default();
    let app = ResumeApp::new(
        Resume::builtin(),
        AssetLoader::new(dir.path()),
        LinkDispatcher::new(opener.clone()),
    );
    Fixture {
        _dir: dir,
        app,
        opener,
    }
}

fn active_buttons(app: &ResumeApp) -> Vec<TabId> {
    app.tab_buttons()
        .into_iter()
        .filter(|(_, _, active)| *active)
        .map(|(id, _, _)| id)
        .collect()
}

#[test]
fn fresh_start_shows_only_experience() {
    let Fixture { app, .. } = fixture(false);

    assert_eq!(app.tabs().active(), TabId::Experience);
    assert_eq!(app.tabs().visible_tabs(), vec![TabId::Experience]);
    assert_eq!(active_buttons(&app), vec![TabId::Experience]);
}

#[test]
fn clicking_projects_switches_panel_and_button_state() {
    let Fixture { mut app, .. } = fixture(false);

    app.apply(UiAction::SelectTab(TabId::Projects));

    assert!(app.tabs().is_visible(TabId::Projects));
    assert!(!app.tabs().is_visible(TabId::Experience));
    assert_eq!(app.tabs().visible_tabs(), vec![TabId::Projects]);
    assert_eq!(active_buttons(&app), vec![TabId::Projects]);
}

#[test]
fn every_tab_selection_keeps_one_visible_panel() {
    let Fixture { mut app, .. } = fixture(false);

    for id in TabId::ALL {
        app.apply(UiAction::SelectTab(id));
        assert_eq!(app.tabs().visible_tabs(), vec![id]);
        assert_eq!(active_buttons(&app), vec![id]);
        assert!(app.panels().get(id).is_some());
    }
}

#[test]
fn tab_buttons_follow_content_order_and_labels() {
    let Fixture { app, .. } = fixture(false);

    let labels: Vec<String> = app
        .tab_buttons()
        .into_iter()
        .map(|(_, label, _)| label)
        .collect();
    assert_eq!(labels, vec!["Experience", "Projects", "Skills", "Education"]);
}

#[test]
fn tab_buttons_use_labels_from_content_document() {
    let dir = tempfile::tempdir().expect("tempdir");
    let raw = toml::to_string(&Resume::builtin())
        .expect("serialize builtin")
        .replace("label = \"Projects\"", "label = \"Portfolio\"");
    let content = Resume::from_toml_str(&raw).expect("relabelled content");
    let app = ResumeApp::new(
        content,
        AssetLoader::new(dir.path()),
        LinkDispatcher::new(RecordingOpener::default()),
    );

    let projects = app
        .tab_buttons()
        .into_iter()
        .find(|(id, _, _)| *id == TabId::Projects)
        .map(|(_, label, _)| label);
    assert_eq!(projects.as_deref(), Some("Portfolio"));
}

#[test]
fn clicking_linkedin_opens_configured_url() {
    let Fixture { mut app, opener, .. } = fixture(false);

    let button = app
        .header_buttons()
        .iter()
        .find(|button| button.label == "Connect on LinkedIn")
        .cloned()
        .expect("linkedin button");
    assert_eq!(button.emphasis, ButtonEmphasis::Primary);

    app.apply(button.action);
    assert_eq!(
        opener.requests(),
        vec!["https://www.linkedin.com/in/aiko-pahuyo-196191373/"]
    );
}

#[test]
fn project_link_is_dispatched_once() {
    let Fixture { mut app, opener, .. } = fixture(false);

    let url = app
        .panels()
        .get(TabId::Projects)
        .and_then(|panel| panel.links().nth(1))
        .map(|link| link.url.clone())
        .expect("second project link");
    app.apply(UiAction::OpenLink(url.clone()));

    assert_eq!(opener.requests(), vec![url]);
    assert_eq!(app.tabs().active(), TabId::Experience);
}

#[test]
fn missing_photo_renders_initials_badge() {
    let Fixture { app, .. } = fixture(false);

    match app.header_photo() {
        HeaderPhoto::Initials(initials) => assert_eq!(initials, "AP"),
        HeaderPhoto::Photo(_) => panic!("expected initials fallback"),
    }
}

#[test]
fn present_photo_is_resized_to_square() {
    let Fixture { app, .. } = fixture(true);

    match app.header_photo() {
        HeaderPhoto::Photo(photo) => {
            assert!(!photo.bitmap.is_placeholder());
            assert_eq!(
                (photo.bitmap.width, photo.bitmap.height),
                (PHOTO_SIZE, PHOTO_SIZE)
            );
        }
        HeaderPhoto::Initials(_) => panic!("expected decoded photo"),
    }
}

#[test]
fn missing_screenshots_still_fill_visuals_region() {
    let Fixture { app, .. } = fixture(false);

    let panel = app.panels().get(TabId::Experience).expect("experience panel");
    let sizes: Vec<(u32, u32)> = panel
        .thumbnails()
        .map(|t| (t.bitmap.width, t.bitmap.height))
        .collect();
    assert_eq!(sizes, vec![(250, 150); 3]);
    assert!(panel.thumbnails().all(|t| t.bitmap.is_placeholder()));
}

#[test]
fn failing_browser_does_not_disturb_app_state() {
    let dir = tempfile::tempdir().expect("tempdir");
    let opener = RecordingOpener::failing();
    let mut app = ResumeApp::new(
        Resume::builtin(),
        AssetLoader::new(dir.path()),
        LinkDispatcher::new(opener.clone()),
    );

    app.apply(UiAction::SelectTab(TabId::Skills));
    app.apply(UiAction::OpenLink("https://github.com/misuuwu".into()));

    assert_eq!(opener.requests().len(), 1);
    assert_eq!(app.tabs().visible_tabs(), vec![TabId::Skills]);
}
