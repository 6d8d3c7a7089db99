use eframe::egui::{self, Align, Context, Layout};

use crate::opentargets::AssociationPage;

use super::super::resize::ResizeBus;
use super::super::row_state::RowViewState;
use super::super::table::TableBody;
use super::super::ViewModel;

impl ViewModel {
    pub(in crate::app) fn new(page: &AssociationPage) -> Self {
        Self {
            body: TableBody::from_page(page),
            rows: (0..page.row_count()).map(|_| RowViewState::default()).collect(),
            resize_bus: ResizeBus::default(),
            search: String::new(),
            search_match_cache: None,
        }
    }

    pub(in crate::app) fn show(&mut self, ctx: &Context, page: &AssociationPage) {
        #[allow(deprecated)]
        let viewport = ctx.screen_rect().size();
        self.resize_bus.notify_viewport(viewport);

        egui::TopBottomPanel::top("top_bar")
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading("assoc-lens");
                    ui.separator();
                    if let Some(disease) = &page.disease {
                        ui.label(format!("disease: {} ({})", disease.name, disease.id));
                    }
                    ui.label(page.summary());
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        self.draw_controls(ui);
                    });
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("association_table_scroll")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    self.draw_table(ui, page);
                });
        });
    }
}
