//! The example window declared every frame
//!
//! egui is immediate-mode: nothing here is retained between frames apart from
//! the counter passed in by the caller.

use crate::app::counter::ClickCounter;
use crate::constants::{PANEL_BUTTON, PANEL_TEXT, PANEL_TITLE};
use eframe::egui;

/// Where the example window first appears inside the native window
const PANEL_DEFAULT_POS: [f32; 2] = [60.0, 60.0];

/// What happened to the example window during one frame
#[derive(Debug, Default, Clone, Copy)]
pub struct HelloWindowOutput {
    /// Screen rect of the button, `None` while the window is collapsed
    pub button_rect: Option<egui::Rect>,
    pub clicked: bool,
}

/// Counter readout shown next to the button
pub fn counter_text(value: u64) -> String {
    format!("counter = {value}")
}

/// Declare the example window: a text label, a button, and the counter on the
/// same line as the button. A completed click increments `counter`.
pub fn hello_window(ctx: &egui::Context, counter: &mut ClickCounter) -> HelloWindowOutput {
    let mut output = HelloWindowOutput::default();

    egui::Window::new(PANEL_TITLE)
        .default_pos(PANEL_DEFAULT_POS)
        .show(ctx, |ui| {
            ui.label(PANEL_TEXT);
            ui.horizontal(|ui| {
                let button = ui.button(PANEL_BUTTON);
                if button.clicked() {
                    counter.record_click();
                    output.clicked = true;
                }
                output.button_rect = Some(button.rect);

                ui.label(counter_text(counter.value()));
            });
        });

    output
}
