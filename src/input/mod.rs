use egui::{Context, Pos2, Response};

/// Phase of a pointer gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
}

/// A pointer event in canvas-local coordinates.
///
/// `time` is monotonic, in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub pos: Pos2,
    pub time: f64,
}

impl PointerEvent {
    pub fn down(pos: Pos2, time: f64) -> Self {
        Self {
            kind: PointerEventKind::Down,
            pos,
            time,
        }
    }

    pub fn moved(pos: Pos2, time: f64) -> Self {
        Self {
            kind: PointerEventKind::Move,
            pos,
            time,
        }
    }

    pub fn up(pos: Pos2, time: f64) -> Self {
        Self {
            kind: PointerEventKind::Up,
            pos,
            time,
        }
    }
}

/// Primary-button pointer state for one frame, already in canvas coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerFrame {
    pub pos: Option<Pos2>,
    /// The button went down this frame over the canvas
    pub pressed: bool,
    pub down: bool,
    pub released: bool,
    pub time: f64,
}

/// Turns per-frame egui pointer state into [`PointerEvent`]s.
///
/// Moves closer together than `min_move_interval` are coalesced, keeping the
/// newest position. Down and up are never dropped, and a pending move is
/// flushed before the up so the last sampled point is kept.
#[derive(Debug, Clone)]
pub struct InputHandler {
    min_move_interval: f64,
    pressed: bool,
    last_pos: Option<Pos2>,
    last_move_time: Option<f64>,
    pending_move: Option<Pos2>,
}

impl InputHandler {
    pub fn new(min_move_interval: f64) -> Self {
        Self {
            min_move_interval,
            pressed: false,
            last_pos: None,
            last_move_time: None,
            pending_move: None,
        }
    }

    /// Whether a gesture started on the canvas is still in progress
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Read the pointer from egui and convert it relative to the canvas rect
    pub fn process_input(&mut self, ctx: &Context, response: &Response) -> Vec<PointerEvent> {
        let origin = response.rect.min;
        let over_canvas = response.contains_pointer();
        let frame = ctx.input(|input| PointerFrame {
            pos: input
                .pointer
                .interact_pos()
                .map(|pos| (pos - origin).to_pos2()),
            pressed: input.pointer.primary_pressed() && over_canvas,
            down: input.pointer.primary_down(),
            released: input.pointer.primary_released(),
            time: input.time,
        });
        self.feed(frame)
    }

    pub fn feed(&mut self, frame: PointerFrame) -> Vec<PointerEvent> {
        let mut events = Vec::new();

        if frame.pressed && !self.pressed {
            if let Some(pos) = frame.pos {
                self.pressed = true;
                self.last_pos = Some(pos);
                self.last_move_time = Some(frame.time);
                self.pending_move = None;
                events.push(PointerEvent::down(pos, frame.time));
            }
        } else if self.pressed {
            if let Some(pos) = frame.pos {
                if self.last_pos != Some(pos) {
                    self.last_pos = Some(pos);
                    self.pending_move = Some(pos);
                }
            }
            if let Some(pos) = self.pending_move {
                if self.move_due(frame.time) {
                    events.push(PointerEvent::moved(pos, frame.time));
                    self.last_move_time = Some(frame.time);
                    self.pending_move = None;
                }
            }
        }

        if self.pressed && (frame.released || !frame.down) {
            if let Some(pos) = self.pending_move.take() {
                events.push(PointerEvent::moved(pos, frame.time));
            }
            let pos = frame.pos.or(self.last_pos).unwrap_or(Pos2::ZERO);
            events.push(PointerEvent::up(pos, frame.time));
            self.pressed = false;
            self.last_pos = None;
            self.last_move_time = None;
        }

        events
    }

    fn move_due(&self, now: f64) -> bool {
        self.last_move_time
            .is_none_or(|last| now - last >= self.min_move_interval)
    }
}
