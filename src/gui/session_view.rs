use std::time::{
    Duration,
    Instant,
};

use eframe::egui::{
    self,
    vec2,
    Sense,
    Stroke,
    UiBuilder,
};
use serde_json::Value;

use super::theme::Theme;
use crate::{
    i18n::{
        tr,
        Language,
        Text,
    },
    session::{
        CardTransform,
        DragRelease,
        DragUpdate,
        SessionController,
        SessionPhase,
        SessionStatus,
        SnapBack,
        SwipeDirection,
    },
};

const CARD_MAX_WIDTH: f32 = 420.0;
const CARD_MIN_HEIGHT: f32 = 240.0;
const FLASH_DURATION: Duration = Duration::from_millis(600);

pub enum SessionAction {
    Exit,
}

/// Presentation state for the review screen. Everything that decides
/// anything lives in `SessionController`; this only remembers how far the
/// card has been dragged, the running snap-back and the entry flash.
pub struct SessionView {
    drag_transform: CardTransform,
    preview: Option<SwipeDirection>,
    snap_back: Option<SnapBack>,
    flash: Option<Instant>,
    last_card_id: Option<String>,
}

impl SessionView {
    pub fn new() -> Self {
        Self {
            drag_transform: CardTransform::RESET,
            preview: None,
            snap_back: None,
            flash: None,
            last_card_id: None,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Drop any in-progress card motion without animating. Used after a
    /// failed commit so the card never appears moved when the score is not.
    pub fn settle(&mut self) {
        self.drag_transform = CardTransform::RESET;
        self.preview = None;
        self.snap_back = None;
    }

    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        theme: &Theme,
        lang: Language,
        controller: &mut SessionController,
        now: Instant,
    ) -> Option<SessionAction> {
        let mut action = None;
        let ctx = ui.ctx().clone();

        ui.add_space(6.0);
        ui.horizontal(|ui| {
            if ui.button(tr(lang, &Text::ExitSession)).clicked() {
                action = Some(SessionAction::Exit);
            }
            ui.label(theme.heading(&ctx, &controller.session().deck_name));
        });
        let subtitle = match controller.session().status() {
            SessionStatus::NegativeReview { count } => tr(lang, &Text::NegativeReview { count }),
            SessionStatus::Round { round } => tr(lang, &Text::RoundLabel { round }),
        };
        ui.label(theme.muted(&ctx, &subtitle));
        ui.add_space(16.0);

        if controller.session().finished() {
            self.show_finished(ui, theme, lang, controller);
            return action;
        }

        self.track_card_entry(controller, now);

        let card_width = ui.available_width().min(CARD_MAX_WIDTH);
        let transform = self.current_transform(controller, card_width, now);
        let animating = controller.swiping().is_some() || self.snap_back.is_some();

        ui.vertical_centered(|ui| {
            let (outer_rect, _) =
                ui.allocate_exact_size(vec2(card_width, CARD_MIN_HEIGHT), Sense::hover());
            let card_rect = outer_rect.translate(vec2(transform.offset_x, 0.0));

            let mut card_ui = ui.new_child(UiBuilder::new().max_rect(card_rect));
            self.draw_card(&mut card_ui, theme, lang, controller, now);

            if !animating {
                let response =
                    ui.interact(card_rect, ui.id().with("card_drag"), Sense::drag());
                self.handle_drag(&response, controller, card_width, now);
            }

            ui.add_space(14.0);
            let step = tr(
                lang,
                &Text::Step {
                    index: controller.session().index() + 1,
                    total: controller.session().round_len(),
                },
            );
            ui.label(theme.muted(&ctx, &step));
            ui.add_space(10.0);

            let enabled = controller.controls_enabled();
            ui.horizontal(|ui| {
                ui.add_space((ui.available_width() - card_width).max(0.0) / 2.0);
                let incorrect = egui::Button::new(
                    egui::RichText::new(tr(lang, &Text::MarkIncorrect))
                        .color(theme.danger(ui.ctx())),
                )
                .min_size(vec2(card_width / 2.0 - 6.0, 36.0));
                if ui.add_enabled(enabled, incorrect).clicked() {
                    controller.trigger_swipe(SwipeDirection::Left, now);
                }
                let correct = egui::Button::new(
                    egui::RichText::new(tr(lang, &Text::MarkCorrect))
                        .color(theme.success(ui.ctx())),
                )
                .min_size(vec2(card_width / 2.0 - 6.0, 36.0));
                if ui.add_enabled(enabled, correct).clicked() {
                    controller.trigger_swipe(SwipeDirection::Right, now);
                }
            });
        });

        if animating || self.flash.is_some() || controller.locked() {
            ctx.request_repaint();
        }

        action
    }

    fn show_finished(
        &mut self,
        ui: &mut egui::Ui,
        theme: &Theme,
        lang: Language,
        controller: &SessionController,
    ) {
        let ctx = ui.ctx().clone();
        let message = match controller.session().phase() {
            SessionPhase::AllPositiveCleared => tr(lang, &Text::AllPositive),
            _ => tr(lang, &Text::SessionCompleted),
        };
        ui.add_space(40.0);
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new(message).size(18.0).color(theme.success(&ctx)).strong(),
            );
        });
    }

    /// Start the entry flash whenever a different card becomes current.
    fn track_card_entry(&mut self, controller: &SessionController, now: Instant) {
        let current_id = controller.session().current_card().map(|card| card.id.clone());
        if current_id != self.last_card_id {
            self.last_card_id = current_id;
            if self.last_card_id.is_some() {
                self.flash = Some(now);
            }
        }
        if let Some(started) = self.flash {
            if now.duration_since(started) >= FLASH_DURATION {
                self.flash = None;
            }
        }
    }

    /// Exit slide wins over the live drag, which wins over the snap-back.
    fn current_transform(
        &mut self,
        controller: &SessionController,
        card_width: f32,
        now: Instant,
    ) -> CardTransform {
        if let Some(swipe) = controller.swiping() {
            return swipe.transform(card_width, now);
        }
        if self.drag_transform != CardTransform::RESET {
            return self.drag_transform;
        }
        if let Some(snap) = self.snap_back {
            if snap.done(now) {
                self.snap_back = None;
                return CardTransform::RESET;
            }
            return snap.transform(now);
        }
        CardTransform::RESET
    }

    fn draw_card(
        &self,
        ui: &mut egui::Ui,
        theme: &Theme,
        lang: Language,
        controller: &SessionController,
        now: Instant,
    ) {
        let ctx = ui.ctx().clone();
        let stroke = self.card_stroke(theme, &ctx, now);

        egui::Frame::group(ui.style())
            .fill(theme.card_fill(&ctx))
            .stroke(stroke)
            .corner_radius(10)
            .inner_margin(18)
            .show(ui, |ui| {
                ui.set_min_height(CARD_MIN_HEIGHT - 36.0);
                ui.set_width(ui.available_width());

                let Some(card) = controller.session().current_card() else {
                    return;
                };
                for (field, value) in &card.content {
                    ui.label(theme.muted(&ctx, field));
                    ui.label(egui::RichText::new(display_value(value)).size(16.0));
                    ui.add_space(8.0);
                }
                ui.with_layout(egui::Layout::bottom_up(egui::Align::Min), |ui| {
                    ui.label(theme.muted(&ctx, &tr(lang, &Text::Score { score: card.score })));
                });
            });
    }

    /// Border color: commit preview while dragging, accent flash on entry,
    /// otherwise invisible.
    fn card_stroke(&self, theme: &Theme, ctx: &egui::Context, now: Instant) -> Stroke {
        match self.preview {
            Some(SwipeDirection::Right) => return Stroke::new(2.0, theme.success(ctx)),
            Some(SwipeDirection::Left) => return Stroke::new(2.0, theme.danger(ctx)),
            None => {}
        }
        if let Some(started) = self.flash {
            let remaining =
                1.0 - now.duration_since(started).as_secs_f32() / FLASH_DURATION.as_secs_f32();
            if remaining > 0.0 {
                let color = theme.accent(ctx).linear_multiply(remaining.clamp(0.0, 1.0));
                return Stroke::new(2.0, color);
            }
        }
        Stroke::NONE
    }

    fn handle_drag(
        &mut self,
        response: &egui::Response,
        controller: &mut SessionController,
        card_width: f32,
        now: Instant,
    ) {
        // egui reports a single pointer stream, so the id is fixed.
        let pointer = 0;

        if response.drag_started() {
            if let Some(pos) = response.interact_pointer_pos() {
                controller.drag_start(pointer, pos.x);
            }
        }
        if response.dragged() {
            if let Some(pos) = response.interact_pointer_pos() {
                if let DragUpdate::Moved { transform, preview } =
                    controller.drag_move(pointer, pos.x, card_width)
                {
                    self.drag_transform = transform;
                    self.preview = preview;
                }
            }
        }
        if response.drag_stopped() {
            let release = controller.drag_end(pointer, card_width, now);
            let from = self.drag_transform;
            self.drag_transform = CardTransform::RESET;
            self.preview = None;
            match release {
                DragRelease::SnapBack => {
                    self.snap_back = Some(SnapBack::new(from, now));
                }
                DragRelease::LockedReset => self.settle(),
                DragRelease::Commit(_) | DragRelease::Ignored => {}
            }
        }
    }
}

impl Default for SessionView {
    fn default() -> Self {
        Self::new()
    }
}

/// Card fields are free-form JSON; strings render bare, anything else as
/// compact JSON the way the reference client prints it.
fn display_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
