use eframe::egui;

use crate::controller::InventoryController;
use crate::ui::state::{AddProductForm, AppState, Screen, StatusMessage};

pub struct AddProductScreen;

impl AddProductScreen {
    pub fn show(
        ctx: &egui::Context,
        app_state: &mut AppState,
        form: &mut AddProductForm,
        controller: &mut InventoryController,
    ) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("← Back to Inventory").clicked() {
                    app_state.current_screen = Screen::Inventory;
                }
            });
            ui.add_space(10.0);

            ui.heading("Add New Product");
            ui.add_space(10.0);

            egui::Grid::new("add_product_form")
                .num_columns(2)
                .spacing([20.0, 8.0])
                .show(ui, |ui| {
                    Self::text_row(ui, "Product Name *", &mut form.name, "e.g. Blue Widget");
                    Self::text_row(ui, "Quantity *", &mut form.quantity, "0");
                    Self::text_row(ui, "Value ($)", &mut form.value, "0.00");
                    Self::text_row(ui, "Category", &mut form.category, "Uncategorized");
                    Self::text_row(ui, "Min Stock", &mut form.min_stock, "optional");
                    Self::text_row(ui, "Max Stock", &mut form.max_stock, "optional");

                    ui.label("Description");
                    ui.add(
                        egui::TextEdit::multiline(&mut form.description)
                            .desired_rows(4)
                            .desired_width(300.0),
                    );
                    ui.end_row();
                });

            ui.add_space(15.0);
            ui.horizontal(|ui| {
                if ui.button("Add Product").clicked() {
                    app_state.status = Some(Self::submit(form, controller));
                }
                if ui.button("Clear").clicked() {
                    form.clear();
                }
            });
        });
    }

    fn text_row(ui: &mut egui::Ui, label: &str, value: &mut String, hint: &str) {
        ui.label(label);
        ui.add(
            egui::TextEdit::singleline(value)
                .hint_text(hint)
                .desired_width(300.0),
        );
        ui.end_row();
    }

    fn submit(form: &mut AddProductForm, controller: &mut InventoryController) -> StatusMessage {
        let product = match form.to_new_product() {
            Ok(product) => product,
            Err(e) => return StatusMessage::warning(e.to_string()),
        };

        let name = product.name.clone();
        match controller.add(product) {
            Ok(()) => {
                form.clear();
                StatusMessage::info(format!("Product '{}' added successfully!", name))
            }
            Err(e) => StatusMessage::from_error(&e),
        }
    }
}
