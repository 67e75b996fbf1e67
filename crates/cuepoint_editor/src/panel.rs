// SPDX-License-Identifier: MIT OR Apache-2.0
//! Event editor panel - authoring fields and the clip preview viewport.

use crate::host::{AssetStore, PreviewRenderer};
use crate::session::{EditorSession, SelectionKind, SessionError};
use cuepoint_events::record::{ConditionMode, ConditionParamKind, ParamKind};
use cuepoint_events::{functions, StateEventData};
use cuepoint_preview::{ClipSampler, PointerButton, PointerEvent};
use std::time::Instant;

/// Minimum height reserved for the preview viewport
const PREVIEW_MIN_HEIGHT: f32 = 200.0;
/// Spacing of the placeholder grid lines
const GRID_SPACING: f32 = 32.0;

/// Event editor panel.
///
/// Owns only UI scratch; all domain state lives on the session and the
/// host-owned asset.
pub struct EventEditorPanel {
    /// Most recent operation error, shown until the next successful pass
    last_error: Option<String>,
}

impl EventEditorPanel {
    /// Create a new event editor panel
    pub fn new() -> Self {
        Self { last_error: None }
    }

    /// Render the panel and drive the session for this refresh
    pub fn ui(
        &mut self,
        ui: &mut egui::Ui,
        session: &mut EditorSession,
        asset: Option<&mut StateEventData>,
        store: &mut dyn AssetStore,
        sampler: &mut dyn ClipSampler,
        renderer: &mut dyn PreviewRenderer,
    ) {
        ui.heading("Event Data");

        match asset {
            Some(asset) => self.draw_record_editor(ui, session, asset, store),
            None => {
                ui.colored_label(
                    egui::Color32::YELLOW,
                    SelectionKind::Asset.advisory(),
                );
            }
        }

        ui.separator();
        self.draw_preview(ui, session, sampler, renderer);

        if let Some(error) = &self.last_error {
            ui.separator();
            ui.colored_label(egui::Color32::YELLOW, error);
        }
    }

    fn draw_record_editor(
        &mut self,
        ui: &mut egui::Ui,
        session: &mut EditorSession,
        asset: &mut StateEventData,
        store: &mut dyn AssetStore,
    ) {
        // Addressing fields
        ui.horizontal(|ui| {
            ui.label("Collection");
            ui.add(egui::DragValue::new(&mut session.collection_index).range(0..=i64::MAX));
            ui.label("Record");
            ui.add(egui::DragValue::new(&mut session.record_index).range(0..=i64::MAX));
        });

        // Function picker
        egui::ComboBox::from_label("Function")
            .selected_text(session.selected_function_spec().name)
            .show_ui(ui, |ui| {
                for (index, spec) in functions::FUNCTIONS.iter().enumerate() {
                    ui.selectable_value(&mut session.selected_function, index, spec.name);
                }
            });

        ui.checkbox(&mut session.show_conditions, "Edit Conditions");

        match session.resolve_record(asset) {
            Ok(record) => {
                if session.selected_function_spec().has_parameter {
                    ui.label(egui::RichText::new("Event Parameter").strong());
                    let parameter = record.ensure_parameter();

                    egui::ComboBox::from_label("Param Type")
                        .selected_text(parameter.kind.name())
                        .show_ui(ui, |ui| {
                            for kind in ParamKind::all() {
                                ui.selectable_value(&mut parameter.kind, *kind, kind.name());
                            }
                        });
                    ui.checkbox(&mut parameter.bool_value, "Bool Value");
                    ui.horizontal(|ui| {
                        ui.label("Float Value");
                        ui.add(egui::DragValue::new(&mut parameter.float_value).speed(0.1));
                    });
                    ui.horizontal(|ui| {
                        ui.label("Int Value");
                        ui.add(egui::DragValue::new(&mut parameter.int_value));
                    });
                    ui.horizontal(|ui| {
                        ui.label("String Value");
                        ui.text_edit_singleline(&mut parameter.string_value);
                    });
                }

                if session.show_conditions {
                    ui.label(egui::RichText::new("Conditions").strong());
                    ui.horizontal(|ui| {
                        ui.label("Condition");
                        ui.add(
                            egui::DragValue::new(&mut session.condition_index).range(0..=i64::MAX),
                        );
                    });

                    // the index field above may have moved this frame
                    match record.condition_at(session.condition_index) {
                        Ok(condition) => {
                            ui.horizontal(|ui| {
                                ui.label("Param Name");
                                ui.text_edit_singleline(&mut condition.param_name);
                            });
                            egui::ComboBox::from_label("Param Kind")
                                .selected_text(condition.param_kind.name())
                                .show_ui(ui, |ui| {
                                    for kind in ConditionParamKind::all() {
                                        ui.selectable_value(
                                            &mut condition.param_kind,
                                            *kind,
                                            kind.name(),
                                        );
                                    }
                                });
                            egui::ComboBox::from_label("Compare")
                                .selected_text(condition.compare.name())
                                .show_ui(ui, |ui| {
                                    for mode in ConditionMode::all() {
                                        ui.selectable_value(
                                            &mut condition.compare,
                                            *mode,
                                            mode.name(),
                                        );
                                    }
                                });
                            ui.checkbox(&mut condition.bool_value, "Bool Value");
                            ui.horizontal(|ui| {
                                ui.label("Float Value");
                                ui.add(egui::DragValue::new(&mut condition.float_value).speed(0.1));
                            });
                            ui.horizontal(|ui| {
                                ui.label("Int Value");
                                ui.add(egui::DragValue::new(&mut condition.int_value));
                            });
                        }
                        Err(error) => {
                            self.last_error = Some(error.to_string());
                        }
                    }
                }
            }
            Err(error) => {
                self.last_error = Some(error.to_string());
            }
        }

        if ui.button("Add Event").clicked() {
            match session.commit(asset, store) {
                Ok(()) => self.last_error = None,
                Err(error) => {
                    tracing::warn!(error = %error, "event commit failed");
                    self.last_error = Some(error.to_string());
                }
            }
        }
    }

    fn draw_preview(
        &mut self,
        ui: &mut egui::Ui,
        session: &mut EditorSession,
        sampler: &mut dyn ClipSampler,
        renderer: &mut dyn PreviewRenderer,
    ) {
        ui.label(egui::RichText::new("Preview").strong());

        match session.clip() {
            Some(clip) => {
                ui.label(format!("{} ({:.2}s)", clip.name, clip.length));
                if clip.length <= 0.0 {
                    ui.colored_label(
                        egui::Color32::YELLOW,
                        "Clip has zero length; the timeline is frozen.",
                    );
                }
            }
            None => {
                ui.colored_label(egui::Color32::YELLOW, SelectionKind::Clip.advisory());
                return;
            }
        }

        let now = Instant::now();

        // Transport controls. Both stay enabled while playing; the clock
        // decides which writer owns the timeline.
        ui.horizontal(|ui| {
            let label = if session.clock.is_playing() { "Stop" } else { "Play" };
            if ui.button(label).clicked() {
                if let Err(error) = session.toggle_playback(now) {
                    self.last_error = Some(error.to_string());
                }
            }

            let mut progress = session.clock.progress();
            let response = ui.add(egui::Slider::new(&mut progress, 0.0..=1.0).text("Progress"));
            if response.changed() {
                if let Err(error) = session.scrub(progress, sampler) {
                    self.last_error = Some(error.to_string());
                }
            }

            ui.label(format!(
                "{:.2}s / {:.2}s",
                session.clock.time(),
                session.clock.clip_length()
            ));
        });

        // Viewport
        let available = ui.available_size();
        let size = egui::vec2(available.x, available.y.max(PREVIEW_MIN_HEIGHT));
        let (response, painter) = ui.allocate_painter(size, egui::Sense::click_and_drag());
        let rect = response.rect;

        let inside = response
            .hover_pos()
            .is_some_and(|pos| rect.contains(pos));

        if response.dragged_by(egui::PointerButton::Primary) {
            let delta = response.drag_delta();
            session.handle_pointer(
                &PointerEvent::Drag {
                    button: PointerButton::Primary,
                    delta: [delta.x, delta.y],
                },
                inside,
            );
        }
        if response.dragged_by(egui::PointerButton::Secondary) {
            let delta = response.drag_delta();
            session.handle_pointer(
                &PointerEvent::Drag {
                    button: PointerButton::Secondary,
                    delta: [delta.x, delta.y],
                },
                inside,
            );
        }
        if response.hovered() {
            let scroll = ui.input(|i| i.raw_scroll_delta.y);
            if scroll != 0.0 {
                session.handle_pointer(&PointerEvent::Scroll { delta: scroll }, inside);
            }
        }

        painter.rect_filled(rect, 0.0, egui::Color32::from_rgb(30, 30, 30));

        match session.refresh(now, sampler, renderer, [rect.width(), rect.height()]) {
            Ok(Some(texture)) => {
                let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
                painter.image(texture, rect, uv, egui::Color32::WHITE);
            }
            Ok(None) => {
                draw_placeholder_grid(&painter, rect);
            }
            Err(error @ SessionError::MissingSelection(_)) => {
                draw_placeholder_grid(&painter, rect);
                painter.text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    error.to_string(),
                    egui::FontId::proportional(14.0),
                    egui::Color32::YELLOW,
                );
            }
            Err(error) => {
                self.last_error = Some(error.to_string());
            }
        }

        if session.clock.is_playing() {
            ui.ctx().request_repaint();
        }
    }
}

impl Default for EventEditorPanel {
    fn default() -> Self {
        Self::new()
    }
}

fn draw_placeholder_grid(painter: &egui::Painter, rect: egui::Rect) {
    let grid_color = egui::Color32::from_rgb(50, 50, 50);

    let mut x = rect.left();
    while x < rect.right() {
        painter.line_segment(
            [egui::pos2(x, rect.top()), egui::pos2(x, rect.bottom())],
            egui::Stroke::new(1.0, grid_color),
        );
        x += GRID_SPACING;
    }

    let mut y = rect.top();
    while y < rect.bottom() {
        painter.line_segment(
            [egui::pos2(rect.left(), y), egui::pos2(rect.right(), y)],
            egui::Stroke::new(1.0, grid_color),
        );
        y += GRID_SPACING;
    }
}
