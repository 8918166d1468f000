//! Chat messages and the cells that show them.

use infiniscroll_core::{CellView, KeyedPool, StackPool};

const CHAR_WIDTH: f32 = 7.5;
const LINE_HEIGHT: f32 = 18.0;
const BUBBLE_PADDING: f32 = 12.0;
/// Own messages sit in a narrower bubble pushed to the right.
const OWN_BUBBLE_INSET: f32 = 48.0;

const WORDS: &[&str] = &[
    "ship", "it", "tomorrow", "lunch", "review", "the", "patch", "looks", "good", "but", "tests",
    "are", "flaky", "again", "can", "you", "rebase", "on", "main", "please", "thanks", "done",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sender {
    Me,
    Them,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub id: usize,
    pub sender: Sender,
    pub text: String,
}

/// Deterministic conversation so every run scrolls the same content.
pub fn conversation(count: usize) -> Vec<Message> {
    (0..count).map(message).collect()
}

pub fn message(id: usize) -> Message {
    let mut seed = (id as u64).wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    let mut next = || {
        seed ^= seed >> 33;
        seed = seed.wrapping_mul(0xff51afd7ed558ccd);
        seed ^= seed >> 33;
        seed as usize
    };

    let words = 1 + next() % 40;
    let text = (0..words)
        .map(|_| WORDS[next() % WORDS.len()])
        .collect::<Vec<_>>()
        .join(" ");
    let sender = if next() % 3 == 0 { Sender::Me } else { Sender::Them };
    Message { id, sender, text }
}

/// Bubble for one message. Height follows the wrapped text.
#[derive(Debug)]
pub struct MessageCell {
    inset: f32,
    id: Option<usize>,
    chars: usize,
    active: bool,
}

impl MessageCell {
    pub fn new(sender: Sender) -> Self {
        let inset = match sender {
            Sender::Me => OWN_BUBBLE_INSET,
            Sender::Them => 0.0,
        };
        Self {
            inset,
            id: None,
            chars: 0,
            active: false,
        }
    }

    pub fn id(&self) -> Option<usize> {
        self.id
    }
}

impl CellView<Message> for MessageCell {
    fn bind(&mut self, item: &Message) {
        self.id = Some(item.id);
        self.chars = item.text.chars().count();
    }

    fn measure_height(&self, width: f32) -> f32 {
        let per_line = ((width - self.inset - BUBBLE_PADDING) / CHAR_WIDTH).floor().max(1.0) as usize;
        let lines = self.chars.div_ceil(per_line).max(1);
        lines as f32 * LINE_HEIGHT + BUBBLE_PADDING
    }

    fn set_active(&mut self, active: bool) {
        if !active {
            self.id = None;
        }
        self.active = active;
    }
}

pub type MessagePool = KeyedPool<Message, Sender, StackPool<Message, MessageCell>>;

/// One recycling stack per sender, since the two bubble styles differ.
pub fn message_pool() -> MessagePool {
    KeyedPool::new(
        |message: &Message| message.sender,
        |sender: &Sender| {
            let sender = *sender;
            StackPool::with_factory(move |_: &Message| MessageCell::new(sender))
        },
    )
}
