use eframe::egui;

pub struct SearchBar<'a> {
    pub term: &'a mut String,
    pub placeholder: &'a str,
}

impl<'a> SearchBar<'a> {
    pub fn new(term: &'a mut String) -> Self {
        Self {
            term,
            placeholder: "Search products...",
        }
    }

    pub fn with_placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// Shows the search field. Returns `true` if the term changed this frame.
    pub fn show(&mut self, ui: &mut egui::Ui) -> bool {
        let mut changed = false;
        ui.horizontal(|ui| {
            ui.label("🔍");
            let response = ui.add(
                egui::TextEdit::singleline(&mut *self.term)
                    .hint_text(self.placeholder)
                    .desired_width(250.0),
            );
            changed = response.changed();

            if !self.term.is_empty() && ui.button("✕").on_hover_text("Clear search").clicked() {
                self.term.clear();
                changed = true;
            }
        });
        changed
    }
}
