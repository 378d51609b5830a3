use log::debug;

use crate::{corner_at, Corner, SelectRect};

/// Pointer shape the host should show after a pointer-move.
///
/// The state machine never touches cursor state itself; it reports a hint
/// and the widget (or any other host) applies it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorHint {
    Default,
    /// Inside the selection but not over a corner: the selection can be
    /// dragged as a whole.
    Draggable,
    Resize(Corner),
}

/// Result of a pointer-move: the cursor hint, and whether the selection
/// geometry changed so the overlay needs a repaint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub hint: CursorHint,
    pub repaint: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Gesture {
    #[default]
    Idle,
    Selecting,
    Dragging,
    Resizing(Corner),
}

/// Pointer-driven selection state machine.
///
/// Tracks one rectangular selection through select / drag / corner-resize
/// gestures. Each gesture is scoped to a single press: pointer-up always
/// returns to idle. Coordinates are widget-local integers; the pressed
/// state of the primary button is passed in rather than read from input,
/// so the machine runs without a UI attached.
#[derive(Debug)]
pub struct SelectionArea {
    rect: SelectRect,
    gesture: Gesture,
    /// First corner of a new selection while `Selecting`.
    start: (i32, i32),
    /// Last observed pointer position while `Dragging` or `Resizing`.
    anchor: (i32, i32),
    margin: (i32, i32),
}

impl SelectionArea {
    pub fn new(margin: (i32, i32)) -> Self {
        Self {
            rect: SelectRect::default(),
            gesture: Gesture::Idle,
            start: (0, 0),
            anchor: (0, 0),
            margin,
        }
    }

    /// The current selection, or `None` while absent.
    pub fn rect(&self) -> Option<SelectRect> {
        self.rect.is_present().then_some(self.rect)
    }

    pub fn clear(&mut self) {
        self.rect = SelectRect::default();
        self.gesture = Gesture::Idle;
    }

    /// Classify the gesture a press starts. A press outside an existing
    /// selection clears it instead of starting anything; the return value
    /// is true when that happened and the overlay must be repainted.
    pub fn pointer_down(&mut self, p: (i32, i32)) -> bool {
        if self.rect.is_present() {
            if !self.rect.contains(p) {
                debug!("press at {p:?} outside selection, clearing");
                self.clear();
                return true;
            }
            self.gesture = match corner_at(&self.rect, p, self.margin) {
                Some(corner) => Gesture::Resizing(corner),
                None => Gesture::Dragging,
            };
            self.anchor = p;
        } else {
            self.gesture = Gesture::Selecting;
            self.start = p;
        }
        false
    }

    pub fn pointer_move(&mut self, p: (i32, i32), primary_down: bool) -> MoveOutcome {
        let hint = if self.rect.is_present() && self.rect.contains(p) {
            match corner_at(&self.rect, p, self.margin) {
                Some(corner) => CursorHint::Resize(corner),
                None => CursorHint::Draggable,
            }
        } else {
            CursorHint::Default
        };

        if !primary_down {
            return MoveOutcome {
                hint,
                repaint: false,
            };
        }

        let repaint = match self.gesture {
            Gesture::Idle => false,
            Gesture::Selecting => {
                self.rect.x = self.start.0.min(p.0);
                self.rect.y = self.start.1.min(p.1);
                // Horizontal movement drives both dimensions: the selection
                // stays square.
                let side = (self.start.0 - p.0).abs();
                self.rect.width = side;
                self.rect.height = side;
                true
            }
            Gesture::Dragging => {
                self.rect.translate(p.0 - self.anchor.0, p.1 - self.anchor.1);
                self.anchor = p;
                true
            }
            Gesture::Resizing(corner) => {
                // Only the horizontal delta is used, keeping the selection
                // square while a corner is pulled.
                let dx = p.0 - self.anchor.0;
                match corner {
                    Corner::NorthEast => {
                        self.rect.width += dx;
                        self.rect.height += dx;
                        self.rect.translate(0, -dx);
                    }
                    Corner::NorthWest => {
                        self.rect.width -= dx;
                        self.rect.height -= dx;
                        self.rect.translate(dx, dx);
                    }
                    Corner::SouthEast => {
                        self.rect.width += dx;
                        self.rect.height += dx;
                    }
                    Corner::SouthWest => {
                        self.rect.width -= dx;
                        self.rect.height -= dx;
                        self.rect.translate(dx, 0);
                    }
                }
                self.anchor = p;
                true
            }
        };

        MoveOutcome { hint, repaint }
    }

    /// Gestures are scoped to one press: release always returns to idle,
    /// whatever was active.
    pub fn pointer_up(&mut self) {
        self.gesture = Gesture::Idle;
    }
}
