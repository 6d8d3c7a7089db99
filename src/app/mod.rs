use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use eframe::egui::{self, Context};

use crate::opentargets::Transport;

mod charts;
mod loader;
mod render_utils;
mod resize;
mod row_state;
mod table;
mod ui;

use loader::{DataLoader, LoadState};
use resize::ResizeBus;
use row_state::RowViewState;
use table::TableBody;

pub struct AssocLensApp {
    loader: DataLoader,
    view: Option<ViewModel>,
}

struct ViewModel {
    body: TableBody,
    rows: Vec<RowViewState>,
    resize_bus: ResizeBus,
    search: String,
    search_match_cache: Option<SearchMatchCache>,
}

struct SearchMatchCache {
    query: String,
    matches: Arc<HashSet<usize>>,
}

impl AssocLensApp {
    pub fn new<T: Transport>(_cc: &eframe::CreationContext<'_>, transport: T) -> Self {
        Self {
            loader: DataLoader::spawn(transport),
            view: None,
        }
    }

    fn on_state_changed(&mut self) {
        self.view = view_for(self.loader.state());
    }
}

fn view_for(state: &LoadState) -> Option<ViewModel> {
    match state {
        LoadState::Ready(page) => Some(ViewModel::new(page)),
        LoadState::Loading | LoadState::Error(_) => None,
    }
}

impl eframe::App for AssocLensApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        if self.loader.poll() {
            self.on_state_changed();
        } else if !self.loader.is_settled() {
            ctx.request_repaint_after(Duration::from_millis(50));
        }

        match (self.loader.state(), self.view.as_mut()) {
            (LoadState::Loading, _) => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.add_space(120.0);
                        ui.heading("Loading target associations...");
                        ui.add_space(8.0);
                        ui.spinner();
                    });
                });
            }
            (LoadState::Error(error), _) => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.heading("Failed to load target associations");
                    ui.add_space(6.0);
                    ui.label(error.as_str());
                });
            }
            (LoadState::Ready(page), Some(view)) => view.show(ctx, page),
            (LoadState::Ready(_), None) => {}
        }
    }
}
