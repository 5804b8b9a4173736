use eframe::egui;

/// One figure in the statistics row
pub struct StatCard<'a> {
    pub title: &'a str,
    pub value: String,
    pub color: egui::Color32,
}

impl<'a> StatCard<'a> {
    pub fn new(title: &'a str, value: impl Into<String>, color: egui::Color32) -> Self {
        Self {
            title,
            value: value.into(),
            color,
        }
    }

    pub fn show(&self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_min_width(140.0);
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new(&self.value)
                        .size(22.0)
                        .strong()
                        .color(self.color),
                );
                ui.label(self.title);
            });
        });
    }
}
