use std::time::Duration;

use client_core::{
    render::{AppointmentRow, LIST_HEADING},
    AppointmentsController,
};
use eframe::egui;
use tokio::runtime::Runtime;

const PENDING_REPAINT_INTERVAL: Duration = Duration::from_millis(100);

pub struct CitasApp {
    // Dropped before the runtime so the fetch task is aborted while it still
    // has a runtime to be aborted on.
    controller: AppointmentsController,
    _runtime: Runtime,
}

impl CitasApp {
    pub fn new(controller: AppointmentsController, runtime: Runtime) -> Self {
        Self {
            controller,
            _runtime: runtime,
        }
    }

    fn show_rows(&self, ui: &mut egui::Ui) {
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for row in self.controller.rows() {
                    ui.push_id(row.key, |ui| show_row(ui, &row));
                    ui.add_space(8.0);
                }
            });
    }
}

fn show_row(ui: &mut egui::Ui, row: &AppointmentRow) {
    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            for (label, value) in row.labelled_fields() {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(label).strong());
                    ui.label(value);
                });
            }
        });
}

impl eframe::App for CitasApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.controller.poll();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(egui::RichText::new(LIST_HEADING).strong());
            ui.add_space(12.0);
            self.show_rows(ui);
        });

        if self.controller.is_pending() {
            ctx.request_repaint_after(PENDING_REPAINT_INTERVAL);
        }
    }
}
