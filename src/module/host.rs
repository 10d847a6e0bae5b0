//! The host collaborator seam.
//!
//! The module never renders or plays sounds itself. It tells a `ModuleHost`
//! what happened and what each button should look like; the host decides
//! how. Every method has a no-op default so hosts implement only what
//! they need.

use std::time::Duration;

use crate::core::grid::GRID_SIZE;
use crate::core::{Color, Position};

/// What a button should look like.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Swatch {
    /// One of the four button colors.
    Lit(Color),
    /// The unlit material.
    Dark,
}

/// Button appearance after the suspicious command has been used.
pub const SUSPICIOUS_PATTERN: [Swatch; GRID_SIZE] = {
    use Color::{Blue, Red};
    use Swatch::{Dark as D, Lit};
    const R: Swatch = Lit(Red);
    const B: Swatch = Lit(Blue);
    [
        D, R, R, R, D, //
        R, R, B, B, D, //
        R, R, R, R, D, //
        D, R, D, R, D, //
    ]
};

/// Notifications and rendering requests sent by a module.
pub trait ModuleHost {
    /// A group of presses was wrong.
    fn on_strike(&mut self) {}

    /// The module is solved.
    fn on_pass(&mut self) {}

    /// Paint a button.
    fn render_button(&mut self, _position: Position, _swatch: Swatch) {}

    /// Set or clear a button's colorblind letter.
    fn render_label(&mut self, _position: Position, _label: Option<char>) {}

    /// Light the first `lit` stage LEDs and turn off the rest.
    fn render_progress(&mut self, _lit: usize) {}

    /// Reply to the sender of a text command.
    fn send_chat_error(&mut self, _message: &str) {}

    /// Wait between replayed presses.
    fn pause(&mut self, _duration: Duration) {}
}

/// A host that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullHost;

impl ModuleHost for NullHost {}

/// Something a module asked its host to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HostEvent {
    Strike,
    Pass,
    Button(Position, Swatch),
    Label(Position, Option<char>),
    Progress(usize),
    ChatError(String),
    Pause(Duration),
}

/// A host that records every call, for headless runs and tests.
#[derive(Clone, Debug, Default)]
pub struct RecordingHost {
    pub events: Vec<HostEvent>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of strikes recorded.
    #[must_use]
    pub fn strikes(&self) -> usize {
        self.events.iter().filter(|e| **e == HostEvent::Strike).count()
    }

    /// Number of passes recorded.
    #[must_use]
    pub fn passes(&self) -> usize {
        self.events.iter().filter(|e| **e == HostEvent::Pass).count()
    }

    /// The most recent swatch painted on every button, if all were painted.
    #[must_use]
    pub fn buttons(&self) -> Option<[Swatch; GRID_SIZE]> {
        let mut painted = [None; GRID_SIZE];
        for event in &self.events {
            if let HostEvent::Button(pos, swatch) = event {
                painted[pos.index()] = Some(*swatch);
            }
        }
        let mut out = [Swatch::Dark; GRID_SIZE];
        for (slot, swatch) in out.iter_mut().zip(painted) {
            *slot = swatch?;
        }
        Some(out)
    }

    /// The most recent progress value.
    #[must_use]
    pub fn progress(&self) -> Option<usize> {
        self.events.iter().rev().find_map(|e| match e {
            HostEvent::Progress(lit) => Some(*lit),
            _ => None,
        })
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl ModuleHost for RecordingHost {
    fn on_strike(&mut self) {
        self.events.push(HostEvent::Strike);
    }

    fn on_pass(&mut self) {
        self.events.push(HostEvent::Pass);
    }

    fn render_button(&mut self, position: Position, swatch: Swatch) {
        self.events.push(HostEvent::Button(position, swatch));
    }

    fn render_label(&mut self, position: Position, label: Option<char>) {
        self.events.push(HostEvent::Label(position, label));
    }

    fn render_progress(&mut self, lit: usize) {
        self.events.push(HostEvent::Progress(lit));
    }

    fn send_chat_error(&mut self, message: &str) {
        self.events.push(HostEvent::ChatError(message.to_string()));
    }

    fn pause(&mut self, duration: Duration) {
        self.events.push(HostEvent::Pause(duration));
    }
}

impl<H: ModuleHost + ?Sized> ModuleHost for &mut H {
    fn on_strike(&mut self) {
        (**self).on_strike();
    }

    fn on_pass(&mut self) {
        (**self).on_pass();
    }

    fn render_button(&mut self, position: Position, swatch: Swatch) {
        (**self).render_button(position, swatch);
    }

    fn render_label(&mut self, position: Position, label: Option<char>) {
        (**self).render_label(position, label);
    }

    fn render_progress(&mut self, lit: usize) {
        (**self).render_progress(lit);
    }

    fn send_chat_error(&mut self, message: &str) {
        (**self).send_chat_error(message);
    }

    fn pause(&mut self, duration: Duration) {
        (**self).pause(duration);
    }
}
