//! Desktop preview app for the MIDI light engine
//!
//! Renders the engine in a window at the firmware frame rate. Every control
//! goes through the event channel as a MIDI message, the same path a USB or
//! network transport would use.

use std::time::Instant as StdInstant;

use eframe::egui::{self};
use midi_light_engine::{
    BackgroundMode, EngineConfig, EventChannel, EventSender, ForegroundMode, FrameScheduler, Hsv,
    Instant, LightEngine, OutputDriver, Parameter, write_template_csv,
};

/// Buffer capacity; the floppy rig uses all of it
const MAX_LEDS: usize = 108;

/// Event channel size
const EVENT_CHANNEL_SIZE: usize = 64;

/// Size of each LED rectangle in pixels
const LED_SIZE: f32 = 12.0;

/// Gap between LEDs
const LED_GAP: f32 = 2.0;

/// Note sent by the channel buttons
const PREVIEW_NOTE: u8 = 60;

const PREVIEW_VELOCITY: u8 = 100;

/// Static event channel between the UI and the engine
static EVENTS: EventChannel<EVENT_CHANNEL_SIZE> = EventChannel::<EVENT_CHANNEL_SIZE>::new();

/// Keeps the last frame for painting
#[derive(Default)]
struct FrameCapture {
    pixels: Vec<Hsv>,
}

impl OutputDriver for FrameCapture {
    fn write(&mut self, pixels: &[Hsv]) {
        self.pixels.clear();
        self.pixels.extend_from_slice(pixels);
    }
}

/// Send a CC for a control that just moved.
///
/// When the queue is full the control snaps back to `old`, so it keeps
/// showing what the engine will actually render.
fn send_or_revert<const SIZE: usize>(
    sender: &EventSender<'_, SIZE>,
    cc: u8,
    value: &mut u8,
    old: u8,
) -> bool {
    if sender.control_change(1, cc, *value).is_ok() {
        return true;
    }
    *value = old;
    false
}

/// Note-On/Off pair queued by the trigger button
///
/// Whatever did not fit into the queue is sent again on the next frame.
#[derive(Default)]
struct NoteTrigger {
    pending_on: bool,
    pending_off: bool,
}

impl NoteTrigger {
    fn press(&mut self) {
        self.pending_on = true;
    }

    fn is_pending(&self) -> bool {
        self.pending_on || self.pending_off
    }

    fn flush<const SIZE: usize>(&mut self, sender: &EventSender<'_, SIZE>, channel: u8) {
        if self.pending_off && sender.note_off(channel, PREVIEW_NOTE, 0).is_ok() {
            self.pending_off = false;
        }
        if self.pending_on
            && !self.pending_off
            && sender.note_on(channel, PREVIEW_NOTE, PREVIEW_VELOCITY).is_ok()
        {
            self.pending_on = false;
            self.pending_off = sender.note_off(channel, PREVIEW_NOTE, 0).is_err();
        }
    }
}

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 700.0])
            .with_title("MIDI Light Engine Preview"),
        ..Default::default()
    };

    eframe::run_native(
        "midi-light-preview",
        options,
        Box::new(|_cc| Ok(Box::new(PreviewApp::new()))),
    )
}

struct PreviewApp {
    scheduler: FrameScheduler<'static, FrameCapture, MAX_LEDS, EVENT_CHANNEL_SIZE>,
    sender: EventSender<'static, EVENT_CHANNEL_SIZE>,

    /// Wall-clock origin for the scheduler's time base
    started: StdInstant,
    /// Deadline returned by the last tick
    next_deadline: Instant,

    /// Slider positions, indexed by CC number - 1
    cc_values: [u8; 15],
    /// Channels whose Note-On has been queued
    held: [bool; 16],
    trigger: NoteTrigger,
    /// LED pixel size for display
    led_size: f32,
}

impl PreviewApp {
    fn new() -> Self {
        let engine = LightEngine::<MAX_LEDS>::new(&EngineConfig::default());
        let scheduler = FrameScheduler::new(engine, EVENTS.receiver(), FrameCapture::default());

        let mut app = Self {
            scheduler,
            sender: EVENTS.sender(),
            started: StdInstant::now(),
            next_deadline: Instant::from_millis(0),
            cc_values: [0; 15],
            held: [false; 16],
            trigger: NoteTrigger::default(),
            led_size: LED_SIZE,
        };
        app.sync_controls();
        app
    }

    fn now(&self) -> Instant {
        let elapsed = self.started.elapsed().as_millis();
        Instant::from_millis(u64::try_from(elapsed).unwrap_or(u64::MAX))
    }

    /// Pull slider positions from the engine.
    ///
    /// Only done with an empty queue, otherwise a slider would jump back
    /// to its old value until the next frame applies the pending event.
    fn sync_controls(&mut self) {
        if !EVENTS.is_empty() {
            return;
        }
        let engine = self.scheduler.engine();
        for parameter in Parameter::ALL {
            if let Some(value) = engine.get_cc(parameter.cc()) {
                self.cc_values[usize::from(parameter.cc() - 1)] = value;
            }
        }
    }

    fn send_cc(&self, cc: u8, value: u8) -> bool {
        self.sender.control_change(1, cc, value).is_ok()
    }

    fn copy_template(ctx: &egui::Context) {
        let mut csv = String::new();
        if write_template_csv(&mut csv).is_ok() {
            ctx.copy_text(csv);
        }
    }

    fn mode_controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Foreground:");
            let fg_index = usize::from(Parameter::ForegroundMode.cc() - 1);
            let current = ForegroundMode::from_raw(self.cc_values[fg_index]);
            let mut selected = current;
            egui::ComboBox::from_id_salt("foreground_selector")
                .selected_text(current.map_or("(none)", ForegroundMode::display_name))
                .show_ui(ui, |ui| {
                    for mode in ForegroundMode::ALL {
                        ui.selectable_value(&mut selected, Some(mode), mode.display_name());
                    }
                });
            if let Some(mode) = selected.filter(|&mode| Some(mode) != current)
                && self.send_cc(Parameter::ForegroundMode.cc(), mode.id())
            {
                self.cc_values[fg_index] = mode.id();
            }

            ui.add_space(16.0);

            ui.label("Background:");
            let bg_index = usize::from(Parameter::BackgroundMode.cc() - 1);
            let current = BackgroundMode::from_raw_or_flat(self.cc_values[bg_index]);
            let mut selected = current;
            egui::ComboBox::from_id_salt("background_selector")
                .selected_text(current.display_name())
                .show_ui(ui, |ui| {
                    for mode in BackgroundMode::ALL {
                        ui.selectable_value(&mut selected, mode, mode.display_name());
                    }
                });
            if selected != current && self.send_cc(Parameter::BackgroundMode.cc(), selected.id()) {
                self.cc_values[bg_index] = selected.id();
            }
        });
    }

    fn parameter_sliders(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("cc_sliders")
            .num_columns(2)
            .spacing([12.0, 4.0])
            .show(ui, |ui| {
                for parameter in Parameter::ALL {
                    let info = parameter.info();
                    let label = if info.layer.as_str().is_empty() {
                        format!("CC{} {}", parameter.cc(), info.name)
                    } else {
                        format!("CC{} {} {}", parameter.cc(), info.layer.as_str(), info.name)
                    };
                    ui.label(label).on_hover_text(info.tooltip);

                    let index = usize::from(parameter.cc() - 1);
                    let old_value = self.cc_values[index];
                    ui.add(egui::Slider::new(&mut self.cc_values[index], 0u8..=127u8));
                    if self.cc_values[index] != old_value {
                        send_or_revert(&self.sender, parameter.cc(), &mut self.cc_values[index], old_value);
                    }
                    ui.end_row();
                }
            });
    }

    fn note_controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal_wrapped(|ui| {
            ui.label("Drives:");
            for (index, held) in self.held.iter_mut().enumerate() {
                #[allow(clippy::cast_possible_truncation)]
                let channel = index as u8 + 1;
                let button = ui.add(egui::Button::new(format!("{channel}")).selected(*held));
                let pressed = button.is_pointer_button_down_on();
                // Left unchanged on a full queue, so the next frame retries
                if pressed != *held {
                    let sent = if pressed {
                        self.sender.note_on(channel, PREVIEW_NOTE, PREVIEW_VELOCITY)
                    } else {
                        self.sender.note_off(channel, PREVIEW_NOTE, 0)
                    };
                    if sent.is_ok() {
                        *held = pressed;
                    }
                }
            }
        });

        ui.add_space(4.0);

        ui.horizontal(|ui| {
            if ui
                .button("Note On")
                .on_hover_text("Single Note-On/Off pair on channel 1")
                .clicked()
            {
                self.trigger.press();
            }
        });
        self.trigger.flush(&self.sender, 1);
    }

    fn draw_strip(&self, ui: &mut egui::Ui) {
        let frame = &self.scheduler.output().pixels;
        let available_width = ui.available_width();
        let led_pitch = self.led_size + LED_GAP;

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let leds_per_row = (available_width / led_pitch).floor().max(1.0) as usize;
        let rows = frame.len().max(1).div_ceil(leds_per_row);
        #[allow(clippy::cast_precision_loss)]
        let height = rows as f32 * led_pitch;

        let (response, painter) =
            ui.allocate_painter(egui::vec2(available_width, height), egui::Sense::hover());
        let origin = response.rect.min;

        #[allow(clippy::cast_precision_loss)]
        for (i, pixel) in frame.iter().enumerate() {
            let row = i / leds_per_row;
            let col = i % leds_per_row;
            let x = origin.x + col as f32 * led_pitch;
            let y = origin.y + row as f32 * led_pitch;

            let rect = egui::Rect::from_min_size(
                egui::pos2(x, y),
                egui::vec2(self.led_size, self.led_size),
            );
            let rgb = pixel.to_rgb();
            painter.rect_filled(rect, 3.0, egui::Color32::from_rgb(rgb.r, rgb.g, rgb.b));
        }
    }
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = self.now();
        if now >= self.next_deadline {
            let result = self.scheduler.tick(now);
            self.next_deadline = result.next_deadline;
            self.sync_controls();
        }

        if self.trigger.is_pending() {
            ctx.request_repaint();
        }
        let wait = self.next_deadline.as_millis().saturating_sub(self.now().as_millis());
        ctx.request_repaint_after(std::time::Duration::from_millis(wait));

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!("Frame: {}", self.scheduler.engine().frame_count()));
                ui.add_space(16.0);
                ui.label("Size:");
                ui.add(egui::Slider::new(&mut self.led_size, 4.0..=32.0));
                ui.add_space(16.0);
                if ui.button("Copy template CSV").clicked() {
                    Self::copy_template(ctx);
                }
            });

            ui.add_space(8.0);
            self.draw_strip(ui);
            ui.add_space(16.0);

            self.mode_controls(ui);
            ui.add_space(8.0);
            self.note_controls(ui);
            ui.add_space(8.0);

            egui::ScrollArea::vertical().show(ui, |ui| {
                self.parameter_sliders(ui);
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use midi_light_engine::MidiEvent;

    #[test]
    fn test_full_queue_reverts_slider() {
        let channel = EventChannel::<1>::new();
        let sender = channel.sender();

        let mut value = 10;
        assert!(send_or_revert(&sender, 3, &mut value, 5));
        assert_eq!(value, 10);

        value = 20;
        assert!(!send_or_revert(&sender, 3, &mut value, 10));
        assert_eq!(value, 10);
        assert_eq!(channel.len(), 1);
    }

    #[test]
    fn test_trigger_retries_until_queued() {
        let channel = EventChannel::<1>::new();
        let sender = channel.sender();
        let receiver = channel.receiver();
        sender.control_change(1, 3, 0).unwrap();

        let mut trigger = NoteTrigger::default();
        trigger.press();
        trigger.flush(&sender, 1);
        assert!(trigger.is_pending());

        // room for the Note-On only
        receiver.try_receive().unwrap();
        trigger.flush(&sender, 1);
        assert!(trigger.is_pending());
        assert!(matches!(receiver.try_receive(), Ok(MidiEvent::NoteOn { .. })));

        trigger.flush(&sender, 1);
        assert!(!trigger.is_pending());
        assert!(matches!(receiver.try_receive(), Ok(MidiEvent::NoteOff { .. })));
    }
}
