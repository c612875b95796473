//! Host input, queued between frames and handed to `Game::update`.

/// One input event. Pointer coordinates are viewport pixels, origin top-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerDown { x: f32, y: f32 },
    PointerUp { x: f32, y: f32 },
    PointerMove { x: f32, y: f32 },
    /// Positive `delta` scrolls away from the user (zoom out).
    Wheel { delta: f32 },
    /// DOM `keyCode`; see `input::keys`.
    KeyDown { key_code: u32 },
    /// UI-layer event (panel close, resize). `kind` picks the meaning of
    /// `a`, `b` and `c`.
    Custom { kind: u32, a: f32, b: f32, c: f32 },
}

/// Events pushed by the host since the last frame, in arrival order.
#[derive(Debug, Default)]
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    /// Forget this frame's events once the game has seen them.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}
