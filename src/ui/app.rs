use eframe::{self, egui};
use egui::ViewportBuilder;
use log::{info, warn};
use std::cell::Cell;
use std::rc::Rc;

use super::{
    screens::{AddProductScreen, InventoryScreen, InventoryView},
    state::{AddProductForm, AppState, Screen, StatusKind, StatusMessage},
};
use crate::config::{Settings, APP_TITLE};
use crate::controller::{InventoryController, InventoryObserver};
use crate::store::JsonFileStore;

/// Marks the inventory view stale and asks egui for another frame
struct RepaintObserver {
    ctx: egui::Context,
    changed: Rc<Cell<bool>>,
}

impl InventoryObserver for RepaintObserver {
    fn on_inventory_changed(&self) {
        self.changed.set(true);
        self.ctx.request_repaint();
    }
}

pub struct InventoryApp {
    app_state: AppState,
    form: AddProductForm,
    controller: InventoryController,
    view: InventoryView,
    changed: Rc<Cell<bool>>,
    data_file: String,
}

impl InventoryApp {
    fn new(cc: &eframe::CreationContext<'_>, settings: Settings) -> Self {
        let mut app_state = AppState::default();
        let mut controller =
            InventoryController::new(Box::new(JsonFileStore::new(&settings.data_file)));

        match controller.load() {
            Ok(count) => info!("Inventory ready with {} products", count),
            Err(e) => {
                warn!("Could not load inventory: {}", e);
                app_state.status = Some(StatusMessage::warning(format!(
                    "{}. Starting with empty inventory.",
                    e
                )));
            }
        }

        // Start stale so the first frame builds the view
        let changed = Rc::new(Cell::new(true));
        controller.set_observer(Box::new(RepaintObserver {
            ctx: cc.egui_ctx.clone(),
            changed: Rc::clone(&changed),
        }));

        Self {
            app_state,
            form: AddProductForm::default(),
            controller,
            view: InventoryView::default(),
            changed,
            data_file: settings.data_file.display().to_string(),
        }
    }

    fn show_status_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if let Some(status) = &self.app_state.status {
                    let color = match status.kind {
                        StatusKind::Info => ui.visuals().text_color(),
                        StatusKind::Warning => egui::Color32::from_rgb(255, 159, 28),
                        StatusKind::Error => egui::Color32::RED,
                    };
                    ui.colored_label(color, &status.text);
                    if ui.small_button("✕").clicked() {
                        self.app_state.status = None;
                    }
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.small(&self.data_file);
                });
            });
        });
    }
}

impl eframe::App for InventoryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show_status_bar(ctx);

        match self.app_state.current_screen {
            Screen::Inventory => {
                let inventory_changed = self.changed.replace(false);
                InventoryScreen::show(
                    ctx,
                    &mut self.app_state,
                    &mut self.controller,
                    &mut self.view,
                    inventory_changed,
                );
            }
            Screen::AddProduct => {
                AddProductScreen::show(
                    ctx,
                    &mut self.app_state,
                    &mut self.form,
                    &mut self.controller,
                );
            }
        }
    }
}

pub fn launch_gui(settings: Settings) -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([1000.0, 700.0]),
        ..Default::default()
    };

    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(InventoryApp::new(cc, settings)))),
    )
}
