//! Parameter panel: the two orbit knobs plus a loading bar.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::assets::LoadTracker;
use crate::types::OrbitParameters;

/// Render the parameter window.
///
/// The scale slider writes through the clamping setter so the knob can
/// never reach a value the orbit model would divide by zero with.
pub fn parameter_panel(
    mut contexts: EguiContexts,
    mut params: ResMut<OrbitParameters>,
    tracker: Option<Res<LoadTracker>>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::Window::new("Parameters")
        .anchor(egui::Align2::LEFT_TOP, [12.0, 12.0])
        .resizable(false)
        .show(ctx, |ui| {
            let mut scale = params.orbit_scale();
            let changed = ui
                .add(
                    egui::Slider::new(&mut scale, 1.0..=5.0)
                        .step_by(0.1)
                        .text("Orbit Scale"),
                )
                .changed();
            if changed {
                params.set_orbit_scale(scale);
            }

            ui.add(
                egui::Slider::new(&mut params.orbit_velocity, 0.1..=10.0)
                    .step_by(0.1)
                    .text("Orbit Velocity"),
            );

            if let Some(tracker) = tracker {
                if !tracker.complete() {
                    ui.separator();
                    ui.label("Loading models...");
                    ui.add(egui::ProgressBar::new(tracker.progress()).desired_width(160.0));
                }
            }
        });
}
