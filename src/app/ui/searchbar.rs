// src/app/ui/searchbar.rs
use eframe::egui as eg;

use crate::app::theme;

const BUTTON_W: f32 = 96.0;
const FIELD_H: f32 = 30.0;

impl crate::app::MovieListApp {
    // ---------- SEARCH BAR ----------
    pub(crate) fn ui_render_search_bar(&mut self, ui: &mut eg::Ui) {
        theme::search_frame().show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 10.0;

                let clear_w = if self.search_query.is_empty() { 0.0 } else { 28.0 };
                let field_w = (ui.available_width() - BUTTON_W - clear_w - 20.0).max(80.0);
                let resp = ui.add(
                    eg::TextEdit::singleline(&mut self.search_query)
                        .hint_text("Title")
                        .desired_width(field_w)
                        .min_size(eg::vec2(field_w, FIELD_H))
                        .margin(eg::vec2(10.0, 6.0)),
                );
                let submitted = resp.lost_focus() && ui.input(|i| i.key_pressed(eg::Key::Enter));

                if !self.search_query.is_empty()
                    && ui
                        .small_button("✖")
                        .on_hover_text("Clear the search and show every movie")
                        .clicked()
                {
                    self.reset_search();
                }

                let clicked = ui
                    .add(eg::Button::new("🔍 Search").min_size(eg::vec2(BUTTON_W, FIELD_H)))
                    .clicked();

                if submitted || clicked {
                    self.run_search();
                }
            });
        });
    }
}
