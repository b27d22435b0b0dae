//! Which of the four pre-built panels is on screen.

use std::collections::BTreeMap;

use resume_model::TabId;

#[derive(Debug, Clone)]
pub struct TabController {
    active: TabId,
    panel_visible: BTreeMap<TabId, bool>,
    button_active: BTreeMap<TabId, bool>,
}

impl Default for TabController {
    fn default() -> Self {
        Self::new()
    }
}

impl TabController {
    pub fn new() -> Self {
        let mut controller = Self {
            active: TabId::Experience,
            panel_visible: BTreeMap::new(),
            button_active: BTreeMap::new(),
        };
        controller.select_tab(TabId::Experience);
        controller
    }

    pub fn active(&self) -> TabId {
        self.active
    }

    pub fn select_tab(&mut self, tab: TabId) {
        let previous = self.active;
        self.active = tab;
        for id in TabId::ALL {
            self.panel_visible.insert(id, id == tab);
            self.button_active.insert(id, id == tab);
        }
        if previous != tab {
            tracing::debug!(from = ?previous, to = ?tab, "switched tab");
        }
    }

    pub fn is_visible(&self, tab: TabId) -> bool {
        self.panel_visible.get(&tab).copied().unwrap_or(false)
    }

    pub fn is_button_active(&self, tab: TabId) -> bool {
        self.button_active.get(&tab).copied().unwrap_or(false)
    }

    pub fn visible_tabs(&self) -> Vec<TabId> {
        TabId::ALL
            .into_iter()
            .filter(|&id| self.is_visible(id))
            .collect()
    }

    pub fn active_buttons(&self) -> Vec<TabId> {
        TabId::ALL
            .into_iter()
            .filter(|&id| self.is_button_active(id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_experience() {
        let tabs = TabController::new();
        assert_eq!(tabs.active(), TabId::Experience);
        assert_eq!(tabs.visible_tabs(), vec![TabId::Experience]);
        assert_eq!(tabs.active_buttons(), vec![TabId::Experience]);
    }

    #[test]
    fn exactly_one_panel_and_button_after_every_selection() {
        let mut tabs = TabController::new();
        for id in TabId::ALL {
            tabs.select_tab(id);
            assert_eq!(tabs.active(), id);
            assert_eq!(tabs.visible_tabs(), vec![id]);
            assert_eq!(tabs.active_buttons(), vec![id]);
        }
    }

    #[test]
    fn reselecting_active_tab_keeps_state() {
        let mut tabs = TabController::new();
        tabs.select_tab(TabId::Skills);
        tabs.select_tab(TabId::Skills);
        assert_eq!(tabs.visible_tabs(), vec![TabId::Skills]);
        assert!(!tabs.is_button_active(TabId::Experience));
    }
}
