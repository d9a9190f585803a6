// src/app/mod.rs — movie listing page: catalog + search bar + read-only grid

// ---- Crates ----
use eframe::egui as eg;
use tracing::{debug, info};

// ---- Local modules ----
pub mod catalog;
pub mod data;
pub mod filters;
pub mod theme;
pub mod ui;

pub use catalog::Catalog;
pub use data::MovieRecord;

use crate::config::ListLayout;
use filters::normalize_query;

pub struct MovieListApp {
    // data
    catalog: Catalog,

    // chrome
    layout: ListLayout,

    // search bar text; only applied on Search / Enter
    search_query: String,
    last_applied_query: String,

    // catalog positions currently in the grid, in catalog order
    visible: Vec<usize>,
    selected_idx: Option<usize>,

    did_init: bool,
}

impl MovieListApp {
    pub fn new(catalog: Catalog, layout: ListLayout) -> Self {
        let visible = (0..catalog.len()).collect();
        Self {
            catalog,
            layout,
            search_query: String::new(),
            last_applied_query: String::new(),
            visible,
            selected_idx: None,
            did_init: false,
        }
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn set_search_query(&mut self, q: impl Into<String>) {
        self.search_query = q.into();
    }

    pub fn visible_indices(&self) -> &[usize] {
        &self.visible
    }

    pub fn visible_records(&self) -> impl Iterator<Item = &MovieRecord> + '_ {
        self.visible.iter().filter_map(|&i| self.catalog.get(i))
    }

    pub const fn selected(&self) -> Option<usize> {
        self.selected_idx
    }

    /// Applies the current search text to the grid.
    pub fn run_search(&mut self) {
        self.visible = self.catalog.search_indices(&self.search_query);
        self.last_applied_query = self.search_query.clone();

        if let Some(sel) = self.selected_idx {
            if !self.visible.contains(&sel) {
                self.selected_idx = None;
            }
        }

        debug!(
            "Search {:?}: {} of {} movies",
            self.search_query,
            self.visible.len(),
            self.catalog.len()
        );
    }

    pub fn reset_search(&mut self) {
        self.search_query.clear();
        self.run_search();
    }

    /// Single-row selection by catalog position; hidden rows are ignored.
    pub fn select(&mut self, catalog_idx: usize) {
        if self.visible.contains(&catalog_idx) {
            self.selected_idx = Some(catalog_idx);
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected_idx = None;
    }

    pub fn status_line(&self) -> String {
        format!("{} of {} movies", self.visible.len(), self.catalog.len())
    }

    /// True when the text field differs from what the grid is showing.
    pub fn search_pending(&self) -> bool {
        normalize_query(&self.search_query) != normalize_query(&self.last_applied_query)
    }
}

// ========== App impl ==========
impl eframe::App for MovieListApp {
    fn update(&mut self, ctx: &eg::Context, _frame: &mut eframe::Frame) {
        if !self.did_init {
            self.did_init = true;
            info!(
                "Loaded {} movies ({} layout)",
                self.catalog.len(),
                self.layout.as_str()
            );
        }

        eg::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(eg::RichText::new(self.status_line()).weak());
                if self.search_pending() {
                    ui.label(eg::RichText::new("(press Search to apply)").italics().weak());
                }
            });
        });

        eg::CentralPanel::default().show(ctx, |ui| {
            if self.layout.has_search_bar() {
                self.ui_render_search_bar(ui);
                ui.add_space(8.0);
            }
            self.ui_render_table(ui);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> MovieListApp {
        MovieListApp::new(Catalog::demo(), ListLayout::Searchable)
    }

    fn shown_titles(app: &MovieListApp) -> Vec<&str> {
        app.visible_records().map(|m| m.title.as_str()).collect()
    }

    #[test]
    fn starts_with_everything_visible() {
        let a = app();
        assert_eq!(a.visible_indices(), &[0, 1, 2, 3]);
        assert_eq!(a.selected(), None);
        assert_eq!(a.status_line(), "4 of 4 movies");
        assert!(!a.search_pending());
    }

    #[test]
    fn search_only_applies_when_run() {
        let mut a = app();
        a.set_search_query("dark");
        assert!(a.search_pending());
        assert_eq!(a.visible_indices().len(), 4);

        a.run_search();
        assert!(!a.search_pending());
        assert_eq!(shown_titles(&a), vec!["The Dark Knight"]);
        assert_eq!(a.status_line(), "1 of 4 movies");
    }

    #[test]
    fn search_keeps_visible_selection() {
        let mut a = app();
        a.select(1);
        a.set_search_query("THE");
        a.run_search();
        assert_eq!(a.visible_indices(), &[0, 1, 2]);
        assert_eq!(a.selected(), Some(1));
    }

    #[test]
    fn search_drops_hidden_selection() {
        let mut a = app();
        a.select(3);
        a.set_search_query("godfather");
        a.run_search();
        assert_eq!(a.selected(), None);
    }

    #[test]
    fn no_match_empties_grid() {
        let mut a = app();
        a.set_search_query("xyz");
        a.run_search();
        assert_eq!(a.visible_records().count(), 0);
        assert_eq!(a.status_line(), "0 of 4 movies");
    }

    #[test]
    fn select_ignores_hidden_rows() {
        let mut a = app();
        a.set_search_query("pulp");
        a.run_search();
        a.select(0);
        assert_eq!(a.selected(), None);
        a.select(3);
        assert_eq!(a.selected(), Some(3));
        a.select(3);
        assert_eq!(a.selected(), Some(3));
        a.clear_selection();
        assert_eq!(a.selected(), None);
    }

    #[test]
    fn reset_restores_full_listing() {
        let mut a = app();
        a.set_search_query("knight");
        a.run_search();
        a.reset_search();
        assert_eq!(a.search_query(), "");
        assert_eq!(a.visible_indices(), &[0, 1, 2, 3]);
    }

    #[test]
    fn whitespace_only_edit_is_not_pending() {
        let mut a = app();
        a.set_search_query("   ");
        assert!(!a.search_pending());
    }

    #[test]
    fn trailing_space_is_a_different_search() {
        let mut a = app();
        a.set_search_query("godfather");
        a.run_search();
        assert_eq!(shown_titles(&a), vec!["The Godfather"]);

        a.set_search_query("godfather ");
        assert!(a.search_pending());
        a.run_search();
        assert_eq!(a.visible_records().count(), 0);

        a.set_search_query("GODFATHER ");
        assert!(!a.search_pending());
    }
}
