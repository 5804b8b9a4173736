use eframe::egui;
use egui_extras::{Column, TableBuilder};

use crate::formatters::{format_limits, format_money, format_timestamp, format_unit_value};
use crate::models::{Product, StockStatus};

/// User request raised from a table row, applied after the frame is drawn
#[derive(Debug, Clone, PartialEq)]
pub enum ProductAction {
    Adjust { name: String, delta: i64 },
    Delete(String),
}

pub fn status_color(status: StockStatus) -> egui::Color32 {
    match status {
        StockStatus::OutOfStock => egui::Color32::from_rgb(220, 53, 69),
        StockStatus::LowStock => egui::Color32::from_rgb(255, 159, 28),
        StockStatus::AtCapacity => egui::Color32::from_rgb(66, 133, 244),
        StockStatus::InStock => egui::Color32::from_rgb(40, 167, 69),
    }
}

pub struct ProductTable<'a> {
    products: &'a [&'a Product],
}

impl<'a> ProductTable<'a> {
    pub fn new(products: &'a [&'a Product]) -> Self {
        Self { products }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> Vec<ProductAction> {
        let mut actions = Vec::new();

        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::initial(180.0).at_least(100.0)) // name
            .column(Column::initial(110.0)) // category
            .column(Column::auto()) // sku
            .column(Column::initial(90.0)) // value
            .column(Column::initial(140.0)) // quantity + limits
            .column(Column::auto()) // status
            .column(Column::remainder()) // actions
            .header(22.0, |mut header| {
                for title in ["Name", "Category", "SKU", "Value", "Quantity", "Status", ""] {
                    header.col(|ui| {
                        ui.strong(title);
                    });
                }
            })
            .body(|mut body| {
                for product in self.products {
                    body.row(26.0, |mut row| {
                        row.col(|ui| {
                            let label = ui.label(&product.name);
                            let mut hover = format!(
                                "Stock value: {}\nCreated: {}\nUpdated: {}",
                                format_money(product.stock_value()),
                                format_timestamp(&product.created_at),
                                format_timestamp(&product.updated_at),
                            );
                            if !product.description.is_empty() {
                                hover = format!("{}\n\n{}", product.description, hover);
                            }
                            label.on_hover_text(hover);
                        });
                        row.col(|ui| {
                            ui.label(&product.category);
                        });
                        row.col(|ui| {
                            ui.monospace(&product.sku);
                        });
                        row.col(|ui| {
                            ui.label(format_unit_value(product));
                        });
                        row.col(|ui| {
                            let status = product.stock_status();
                            ui.label(
                                egui::RichText::new(product.quantity.to_string())
                                    .strong()
                                    .color(status_color(status)),
                            );
                            if let Some(limits) = format_limits(product) {
                                ui.small(limits);
                            }
                        });
                        row.col(|ui| {
                            let status = product.stock_status();
                            if status != StockStatus::InStock {
                                ui.colored_label(status_color(status), status.as_str());
                            }
                        });
                        row.col(|ui| {
                            if ui.button("−").on_hover_text("Remove one").clicked() {
                                actions.push(ProductAction::Adjust {
                                    name: product.name.clone(),
                                    delta: -1,
                                });
                            }
                            if ui.button("+").on_hover_text("Add one").clicked() {
                                actions.push(ProductAction::Adjust {
                                    name: product.name.clone(),
                                    delta: 1,
                                });
                            }
                            if ui
                                .button(egui::RichText::new("Delete").color(egui::Color32::RED))
                                .clicked()
                            {
                                actions.push(ProductAction::Delete(product.name.clone()));
                            }
                        });
                    });
                }
            });

        actions
    }
}
