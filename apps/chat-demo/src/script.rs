//! Scripted gesture timeline played against the chat view.

use anyhow::Result;
use infiniscroll_core::{Placement, Point, PointerButton, ScrollView, Size};

use crate::messages::{message, Message, MessagePool};

pub const FRAME: f32 = 1.0 / 60.0;

#[derive(Debug, Clone, Copy)]
pub enum Step {
    /// Let the view run for this many frames.
    Wait(usize),
    /// Drag by `dy` over `frames` frames, then release mid-motion.
    Fling { dy: f32, frames: usize },
    /// Drag by `dy` and stop before releasing.
    Drag { dy: f32, frames: usize },
    /// New messages arrive at the newest end of the log.
    Receive(usize),
    /// Older history is loaded in front of everything else.
    LoadHistory(usize),
    ScrollTo(usize),
    Resize(Size),
}

/// The default timeline. Gesture directions are given for a bottom-anchored
/// log and flipped for a top-anchored one so both read older history first.
pub fn default_script(placement: Placement) -> Vec<Step> {
    let toward_history = match placement {
        Placement::BottomToTop => -1.0,
        Placement::TopToBottom => 1.0,
    };
    vec![
        Step::Wait(10),
        Step::Fling {
            dy: 600.0 * toward_history,
            frames: 8,
        },
        Step::Wait(240),
        Step::Receive(5),
        Step::Wait(30),
        Step::Drag {
            dy: -300.0 * toward_history,
            frames: 12,
        },
        Step::Wait(120),
        Step::LoadHistory(10),
        Step::ScrollTo(0),
        Step::Wait(60),
        Step::Resize(Size::new(420.0, 640.0)),
        Step::Wait(60),
    ]
}

/// Plays steps against `view`, numbering new messages from `next_id`.
pub struct Player {
    next_id: usize,
    frames: usize,
}

impl Player {
    pub fn new(next_id: usize) -> Self {
        Self { next_id, frames: 0 }
    }

    pub fn frames(&self) -> usize {
        self.frames
    }

    pub fn play(&mut self, view: &mut ScrollView<Message, MessagePool>, step: Step) -> Result<()> {
        log::debug!("step {step:?}");
        match step {
            Step::Wait(frames) => self.wait(view, frames),
            Step::Fling { dy, frames } => {
                let last = self.drag(view, dy, frames);
                view.end_drag(PointerButton::Primary, last);
            }
            Step::Drag { dy, frames } => {
                self.drag(view, dy, frames);
                view.end_drag(PointerButton::Primary, 0.0);
            }
            Step::Receive(count) => {
                for _ in 0..count {
                    view.add(message(self.next_id));
                    self.next_id += 1;
                    self.wait(view, 1);
                }
            }
            Step::LoadHistory(count) => {
                for _ in 0..count {
                    view.add_front(message(self.next_id));
                    self.next_id += 1;
                }
            }
            Step::ScrollTo(index) => view.scroll_to_cell(index)?,
            Step::Resize(size) => view.set_viewport(size),
        }
        Ok(())
    }

    fn wait(&mut self, view: &mut ScrollView<Message, MessagePool>, frames: usize) {
        for _ in 0..frames {
            view.tick(FRAME);
            self.frames += 1;
        }
    }

    fn drag(&mut self, view: &mut ScrollView<Message, MessagePool>, dy: f32, frames: usize) -> f32 {
        let frames = frames.max(1);
        let step = dy / frames as f32;
        view.pointer_down(PointerButton::Primary);
        view.begin_drag(PointerButton::Primary, Point::ZERO);
        for i in 1..=frames {
            view.drag(PointerButton::Primary, Point::new(0.0, step * i as f32), FRAME);
            self.wait(view, 1);
        }
        step
    }
}
