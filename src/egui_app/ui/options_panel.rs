use eframe::egui::Ui;

use super::cards::card;
use crate::egui_app::controller::EguiController;
use crate::session::{Gender, Purpose};

pub(super) fn render(ui: &mut Ui, controller: &mut EguiController) {
    let mut purpose = controller.session().purpose();
    card(
        ui,
        "Image Purpose",
        Some("Choose whether to optimize for dating or professional profile images"),
        |ui| {
            ui.horizontal(|ui| {
                for option in Purpose::ALL {
                    ui.radio_value(&mut purpose, option, option.label());
                    ui.add_space(16.0);
                }
            });
        },
    );
    if purpose != controller.session().purpose() {
        controller.set_purpose(purpose);
    }

    let mut gender = controller.session().gender();
    card(
        ui,
        "Gender",
        Some("Tell us your gender to optimize the model training"),
        |ui| {
            ui.horizontal(|ui| {
                for option in Gender::ALL {
                    ui.radio_value(&mut gender, option, option.label());
                    ui.add_space(16.0);
                }
            });
        },
    );
    if gender != controller.session().gender() {
        controller.set_gender(gender);
    }
}
