use super::EguiApp;
use super::style;
use crate::passenger::{
    AGE_RANGE, EmbarkPort, FARE_RANGE, PARENTS_CHILDREN_RANGE, PassengerClass,
    SIBLINGS_SPOUSES_RANGE, Sex,
};
use eframe::egui::{self, Frame, Margin, RichText, SliderClamping, Stroke};

const DESCRIPTION: &str = "Predict whether a Titanic passenger survived or not based on their \
                           details. Fill in the inputs below and click Predict to see the result!";

impl EguiApp {
    pub(super) fn render_form(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::CentralPanel::default()
            .frame(
                Frame::new()
                    .fill(palette.bg_secondary)
                    .inner_margin(Margin::same(16)),
            )
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt("passenger_form")
                    .show(ui, |ui| {
                        ui.spacing_mut().slider_width = 280.0;
                        ui.heading(RichText::new("Passenger details").color(palette.text_primary));
                        ui.label(RichText::new(DESCRIPTION).color(palette.text_muted));
                        ui.add_space(12.0);
                        self.render_class_combo(ui);
                        self.render_age_slider(ui);
                        self.render_family_counts(ui);
                        self.render_fare_slider(ui);
                        self.render_sex_choice(ui);
                        self.render_embarkation_choice(ui);
                        ui.add_space(16.0);
                        if ui.button(RichText::new("Predict").strong()).clicked() {
                            self.controller.predict();
                        }
                        ui.add_space(12.0);
                        self.render_outcome(ui);
                    });
            });
    }

    fn render_class_combo(&mut self, ui: &mut egui::Ui) {
        let palette = style::palette();
        ui.label(RichText::new("Passenger Class").color(palette.text_muted));
        let current = self.controller.ui.details.class;
        egui::ComboBox::from_id_salt("passenger_class_combo")
            .width(160.0)
            .selected_text(current.label())
            .show_ui(ui, |ui| {
                for class in PassengerClass::ALL {
                    if ui
                        .selectable_label(class == current, class.label())
                        .clicked()
                    {
                        self.controller.set_class(class);
                    }
                }
            })
            .response
            .on_hover_text("1 = First, 2 = Second, 3 = Third");
        ui.add_space(10.0);
    }

    fn render_age_slider(&mut self, ui: &mut egui::Ui) {
        let palette = style::palette();
        ui.label(RichText::new("Age").color(palette.text_muted));
        let mut age = self.controller.ui.details.age;
        let slider = egui::Slider::new(&mut age, AGE_RANGE)
            .suffix(" years")
            .clamping(SliderClamping::Always);
        let response = ui.add(slider).on_hover_text("Age of the passenger");
        if response.changed() {
            self.controller.set_age(age);
        }
        ui.add_space(10.0);
    }

    fn render_family_counts(&mut self, ui: &mut egui::Ui) {
        let palette = style::palette();
        ui.horizontal(|ui| {
            ui.label(RichText::new("Siblings/Spouses Aboard").color(palette.text_muted));
            let mut count = self.controller.ui.details.siblings_spouses;
            let drag = egui::DragValue::new(&mut count)
                .speed(0.05)
                .range(SIBLINGS_SPOUSES_RANGE);
            if ui.add(drag).changed() {
                self.controller.set_siblings_spouses(count);
            }
        });
        ui.horizontal(|ui| {
            ui.label(RichText::new("Parents/Children Aboard").color(palette.text_muted));
            let mut count = self.controller.ui.details.parents_children;
            let drag = egui::DragValue::new(&mut count)
                .speed(0.05)
                .range(PARENTS_CHILDREN_RANGE);
            if ui.add(drag).changed() {
                self.controller.set_parents_children(count);
            }
        });
        ui.add_space(10.0);
    }

    fn render_fare_slider(&mut self, ui: &mut egui::Ui) {
        let palette = style::palette();
        ui.label(RichText::new("Fare").color(palette.text_muted));
        let mut fare = self.controller.ui.details.fare;
        let slider = egui::Slider::new(&mut fare, FARE_RANGE)
            .fixed_decimals(2)
            .clamping(SliderClamping::Always);
        let response = ui
            .add(slider)
            .on_hover_text("Ticket fare paid by the passenger");
        if response.changed() {
            self.controller.set_fare(fare);
        }
        ui.add_space(10.0);
    }

    fn render_sex_choice(&mut self, ui: &mut egui::Ui) {
        let palette = style::palette();
        ui.label(RichText::new("Gender").color(palette.text_muted))
            .on_hover_text("Select the passenger's gender");
        let current = self.controller.ui.details.sex;
        ui.horizontal(|ui| {
            for sex in [Sex::Male, Sex::Female] {
                if ui.radio(sex == current, sex.label()).clicked() {
                    self.controller.set_sex(sex);
                }
            }
        });
        ui.add_space(10.0);
    }

    fn render_embarkation_choice(&mut self, ui: &mut egui::Ui) {
        let palette = style::palette();
        ui.label(RichText::new("Port of Embarkation").color(palette.text_muted))
            .on_hover_text("Port where the passenger embarked");
        let current = self.controller.ui.details.embarked;
        ui.horizontal(|ui| {
            for port in [EmbarkPort::Queenstown, EmbarkPort::Southampton] {
                if ui.radio(port == current, port.label()).clicked() {
                    self.controller.set_embarked(port);
                }
            }
        });
        ui.add_space(10.0);
    }

    fn render_outcome(&mut self, ui: &mut egui::Ui) {
        let Some(outcome) = self.controller.ui.outcome.clone() else {
            return;
        };
        let color = style::verdict_color(outcome.survived);
        Frame::new()
            .fill(style::compartment_fill())
            .stroke(Stroke::new(1.0, color))
            .inner_margin(Margin::symmetric(12, 10))
            .show(ui, |ui| {
                ui.label(RichText::new(&outcome.message).color(color).strong());
            });
    }
}
