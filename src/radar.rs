//! Top-down radar indicator.
//!
//! A repeating wall-clock timer resamples the tracked positions into a
//! small snapshot, decoupled from the frame rate; the egui window then
//! paints whatever the latest snapshot holds. Runs for the whole
//! session.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts, EguiPrimaryContextPass};

use crate::flight::Spaceship;
use crate::registry::{SceneKey, SceneRegistry};

/// Side length of the square radar indicator, in pixels.
pub const RADAR_SIZE: f32 = 160.0;

/// Seconds between radar resamples.
pub const RADAR_INTERVAL_SECS: f32 = 1.5;

/// World distance is shrunk by this divisor before plotting.
pub const RADAR_RANGE_DIVISOR: f32 = 3.0;

/// Latest radar snapshot plus the resample timer.
#[derive(Resource)]
pub struct RadarState {
    timer: Timer,
    /// Sun present in the registry at the last sample.
    pub sun_visible: bool,
    /// Projected ship marker in radar pixels, if inside the bounds.
    pub ship_marker: Option<Vec2>,
}

impl Default for RadarState {
    fn default() -> Self {
        Self {
            timer: Timer::from_seconds(RADAR_INTERVAL_SECS, TimerMode::Repeating),
            sun_visible: false,
            ship_marker: None,
        }
    }
}

/// Plugin providing the radar overlay.
pub struct RadarPlugin;

impl Plugin for RadarPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RadarState>()
            .add_systems(Update, refresh_radar)
            .add_systems(EguiPrimaryContextPass, radar_panel);
    }
}

/// Project a world position onto the radar via polar coordinates.
///
/// Returns the pixel position inside a `size`-square indicator, or
/// `None` when the projected point falls outside the visible bounds.
pub fn project_marker(world_x: f32, world_z: f32, size: f32, divisor: f32) -> Option<Vec2> {
    let center = size / 2.0;
    let distance = (world_x * world_x + world_z * world_z).sqrt();
    let angle = world_z.atan2(world_x);

    let px = center + angle.cos() * distance / divisor;
    let py = center + angle.sin() * distance / divisor;

    if px > 0.0 && px < size && py > 0.0 && py < size {
        Some(Vec2::new(px, py))
    } else {
        None
    }
}

/// Resample tracked positions on the fixed interval.
pub fn refresh_radar(
    time: Res<Time>,
    mut state: ResMut<RadarState>,
    registry: Res<SceneRegistry>,
    ships: Query<&Transform, With<Spaceship>>,
) {
    state.timer.tick(time.delta());
    if !state.timer.just_finished() {
        return;
    }

    state.sun_visible = registry.contains(SceneKey::Sun);
    state.ship_marker = ships.single().ok().and_then(|transform| {
        project_marker(
            transform.translation.x,
            transform.translation.z,
            RADAR_SIZE,
            RADAR_RANGE_DIVISOR,
        )
    });
}

/// Paint the latest snapshot in a fixed corner window.
fn radar_panel(mut contexts: EguiContexts, state: Res<RadarState>) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::Window::new("Radar")
        .anchor(egui::Align2::RIGHT_TOP, [-12.0, 12.0])
        .title_bar(false)
        .resizable(false)
        .show(ctx, |ui| {
            let (response, painter) = ui.allocate_painter(
                egui::vec2(RADAR_SIZE, RADAR_SIZE),
                egui::Sense::hover(),
            );
            let origin = response.rect.min;

            painter.rect_filled(
                response.rect,
                2.0,
                egui::Color32::from_rgba_premultiplied(10, 20, 10, 220),
            );

            if state.sun_visible {
                let center = origin + egui::vec2(RADAR_SIZE / 2.0, RADAR_SIZE / 2.0);
                painter.rect_filled(
                    egui::Rect::from_center_size(center, egui::vec2(16.0, 12.0)),
                    0.0,
                    egui::Color32::RED,
                );
            }

            if let Some(marker) = state.ship_marker {
                let at = origin + egui::vec2(marker.x, marker.y);
                painter.rect_filled(
                    egui::Rect::from_center_size(at, egui::vec2(8.0, 8.0)),
                    0.0,
                    egui::Color32::WHITE,
                );
            }
        });
}
