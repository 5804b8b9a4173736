use eframe::egui;
use log::{error, info};

use crate::controller::InventoryController;
use crate::formatters::{format_count, format_empty_message, format_money};
use crate::io::export_csv;
use crate::models::{Product, StockStatus};
use crate::query::{self, InventoryStats, SortOrder};
use crate::ui::components::{status_color, ProductAction, ProductTable, SearchBar, StatCard};
use crate::ui::state::{AppState, Screen, StatusMessage};

pub struct InventoryScreen;

/// Filtered, sorted product names plus figures, rebuilt only when the
/// inventory or the search/sort settings change
#[derive(Default)]
pub struct InventoryView {
    pub visible: Vec<String>,
    pub stats: InventoryStats,
}

impl InventoryView {
    pub fn rebuild(&mut self, controller: &InventoryController, term: &str, order: SortOrder) {
        let mut products = query::filter(controller.get_all().values(), term);
        query::sort(&mut products, order);
        self.visible = products.iter().map(|p| p.name.clone()).collect();
        self.stats = controller.stats();
    }
}

impl InventoryScreen {
    pub fn show(
        ctx: &egui::Context,
        app_state: &mut AppState,
        controller: &mut InventoryController,
        view: &mut InventoryView,
        inventory_changed: bool,
    ) {
        let mut filters_changed = false;

        egui::TopBottomPanel::top("inventory_toolbar").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.heading("Inventory");
                ui.add_space(20.0);
                filters_changed |= SearchBar::new(&mut app_state.search_term)
                    .with_placeholder("Search by name or category...")
                    .show(ui);

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("+ Add Product").clicked() {
                        app_state.current_screen = Screen::AddProduct;
                    }
                });
            });
            ui.add_space(6.0);
        });

        if filters_changed || inventory_changed {
            view.rebuild(controller, &app_state.search_term, app_state.sort_order);
        }

        let mut actions = Vec::new();
        egui::CentralPanel::default().show(ctx, |ui| {
            Self::show_statistics(ui, &view.stats);
            ui.add_space(10.0);
            ui.separator();

            let products: Vec<&Product> = view
                .visible
                .iter()
                .filter_map(|name| controller.get(name))
                .collect();

            let mut relist = false;
            ui.horizontal(|ui| {
                ui.strong("Products");
                ui.label(format_count(products.len(), controller.len()));

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .add_enabled(!products.is_empty(), egui::Button::new("Export CSV"))
                        .on_hover_text("Export the products currently shown")
                        .clicked()
                    {
                        app_state.status = Some(Self::export(&products));
                    }

                    let previous = app_state.sort_order;
                    egui::ComboBox::from_id_salt("sort_order")
                        .selected_text(app_state.sort_order.as_str())
                        .show_ui(ui, |ui| {
                            for order in SortOrder::all() {
                                ui.selectable_value(
                                    &mut app_state.sort_order,
                                    *order,
                                    order.as_str(),
                                );
                            }
                        });
                    ui.label("Sort by:");
                    relist = previous != app_state.sort_order;
                });
            });
            ui.add_space(6.0);

            if products.is_empty() {
                ui.vertical_centered(|ui| {
                    ui.add_space(40.0);
                    ui.label(format_empty_message(
                        controller.len(),
                        &app_state.search_term,
                    ));
                    if !app_state.search_term.trim().is_empty() && ui.button("Clear search").clicked() {
                        app_state.search_term.clear();
                        relist = true;
                    }
                });
            } else {
                egui::ScrollArea::horizontal().show(ui, |ui| {
                    actions = ProductTable::new(&products).show(ui);
                });
            }

            if relist {
                ctx.request_repaint();
            }
            filters_changed = relist;
        });

        if filters_changed {
            view.rebuild(controller, &app_state.search_term, app_state.sort_order);
        }

        for action in actions {
            match action {
                ProductAction::Adjust { name, delta } => {
                    if let Err(e) = controller.update_quantity(&name, delta) {
                        app_state.status = Some(StatusMessage::from_error(&e));
                    }
                }
                ProductAction::Delete(name) => {
                    app_state.pending_delete = Some(name);
                }
            }
        }

        Self::show_delete_confirmation(ctx, app_state, controller);
    }

    fn show_statistics(ui: &mut egui::Ui, stats: &InventoryStats) {
        ui.add_space(10.0);
        ui.horizontal(|ui| {
            StatCard::new(
                "Total Products",
                stats.total_products.to_string(),
                egui::Color32::from_rgb(102, 126, 234),
            )
            .show(ui);
            StatCard::new(
                "Low Stock",
                stats.low_stock.to_string(),
                status_color(StockStatus::LowStock),
            )
            .show(ui);
            StatCard::new(
                "Out of Stock",
                stats.out_of_stock.to_string(),
                status_color(StockStatus::OutOfStock),
            )
            .show(ui);
            StatCard::new(
                "Total Value",
                format_money(stats.total_value),
                status_color(StockStatus::InStock),
            )
            .show(ui);
        });
    }

    fn show_delete_confirmation(
        ctx: &egui::Context,
        app_state: &mut AppState,
        controller: &mut InventoryController,
    ) {
        let Some(name) = app_state.pending_delete.clone() else {
            return;
        };

        let mut confirmed = false;
        let mut cancelled = false;
        egui::Window::new("Confirm Delete")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(format!("Delete '{}'?", name));
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("Delete").clicked() {
                        confirmed = true;
                    }
                    if ui.button("Cancel").clicked() {
                        cancelled = true;
                    }
                });
            });

        if confirmed {
            app_state.pending_delete = None;
            match controller.delete(&name) {
                Ok(true) => {
                    app_state.status = Some(StatusMessage::info(format!("Deleted '{}'", name)))
                }
                Ok(false) => {}
                Err(e) => app_state.status = Some(StatusMessage::from_error(&e)),
            }
        } else if cancelled {
            app_state.pending_delete = None;
        }
    }

    fn export(products: &[&Product]) -> StatusMessage {
        let Some(path) = rfd::FileDialog::new()
            .set_file_name("inventory.csv")
            .add_filter("CSV Files", &["csv"])
            .save_file()
        else {
            return StatusMessage::info("Export cancelled");
        };

        match export_csv(&path, products.iter().copied()) {
            Ok(rows) => {
                info!("Exported inventory to {}", path.display());
                StatusMessage::info(format!("Exported {} products to {}", rows, path.display()))
            }
            Err(e) => {
                error!("Failed to export inventory: {}", e);
                StatusMessage::error(format!("Export failed: {}", e))
            }
        }
    }
}
