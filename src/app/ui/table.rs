// src/app/ui/table.rs
use eframe::egui as eg;
use egui_extras::{Column, TableBuilder};

use crate::app::theme;

pub const TITLE_COL_W: f32 = 300.0;
pub const YEAR_COL_W: f32 = 100.0;
pub const DURATION_COL_W: f32 = 100.0;
pub const HEADER_H: f32 = 24.0;
pub const ROW_H: f32 = 22.0;

pub const HEADERS: [&str; 3] = ["Title", "Year", "Duration"];

/// Fixed widths with the search bar, draggable otherwise.
fn column(width: f32, resizable: bool) -> Column {
    if resizable {
        Column::initial(width).at_least(40.0).clip(true)
    } else {
        Column::exact(width).clip(true)
    }
}

fn header_cell(ui: &mut eg::Ui, label: &str) {
    let rect = ui.max_rect().expand(2.0);
    ui.painter().rect_filled(rect, 0.0, theme::HEADER_BG);
    ui.painter()
        .rect_stroke(rect, 0.0, eg::Stroke::new(1.0, theme::GRID_LINE));
    ui.with_layout(
        eg::Layout::centered_and_justified(eg::Direction::LeftToRight),
        |ui| ui.strong(label),
    );
}

/// Read-only cell; returns true when clicked.
fn body_cell(ui: &mut eg::Ui, selected: bool, text: &str, align: eg::Align) -> bool {
    let layout =
        eg::Layout::centered_and_justified(eg::Direction::LeftToRight).with_main_align(align);
    ui.with_layout(layout, |ui| {
        ui.add(eg::SelectableLabel::new(selected, text)).clicked()
    })
    .inner
}

impl crate::app::MovieListApp {
    // ---------- MOVIE GRID ----------
    pub(crate) fn ui_render_table(&mut self, ui: &mut eg::Ui) {
        let resizable = !self.layout.has_search_bar();
        let available_height = ui.available_height();
        let selected = self.selected_idx;
        let mut clicked: Option<usize> = None;

        TableBuilder::new(ui)
            .striped(true)
            .resizable(resizable)
            .cell_layout(eg::Layout::left_to_right(eg::Align::Center))
            .column(column(TITLE_COL_W, resizable))
            .column(column(YEAR_COL_W, resizable))
            .column(column(DURATION_COL_W, resizable))
            .min_scrolled_height(0.0)
            .max_scroll_height(available_height)
            .header(HEADER_H, |mut header| {
                for label in HEADERS {
                    header.col(|ui| header_cell(ui, label));
                }
            })
            .body(|body| {
                body.rows(ROW_H, self.visible.len(), |mut row| {
                    let Some(&idx) = self.visible.get(row.index()) else {
                        return;
                    };
                    let Some(movie) = self.catalog.get(idx) else {
                        return;
                    };
                    let is_selected = selected == Some(idx);
                    row.set_selected(is_selected);

                    row.col(|ui| {
                        if body_cell(ui, is_selected, &movie.title, eg::Align::Min) {
                            clicked = Some(idx);
                        }
                    });
                    row.col(|ui| {
                        if body_cell(ui, is_selected, &movie.year_label(), eg::Align::Center) {
                            clicked = Some(idx);
                        }
                    });
                    row.col(|ui| {
                        if body_cell(ui, is_selected, &movie.duration_label(), eg::Align::Center) {
                            clicked = Some(idx);
                        }
                    });
                });
            });

        if let Some(idx) = clicked {
            self.select(idx);
        }
    }
}
