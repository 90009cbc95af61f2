use smallvec::SmallVec;
use touchdeck_core::{PointerEvent, PointerId, Vec2};
use web_time::{Duration, Instant};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureConfig {
    /// Pixels a pointer must travel before a press becomes a drag.
    pub touch_slop: f32,
    /// Longest press that still counts as a tap.
    pub tap_timeout: Duration,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            touch_slop: 8.0,
            tap_timeout: Duration::from_millis(300),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EditGesture {
    Tap { position: Vec2 },
    DragStart { position: Vec2 },
    Drag { delta: Vec2 },
    DragEnd,
    DragCancel,
}

pub type Gestures = SmallVec<[EditGesture; 2]>;

struct Tracking {
    id: PointerId,
    start: Vec2,
    last: Vec2,
    started_at: Instant,
    dragging: bool,
}

/// Splits edit-mode pointer input into taps and drags. Follows the first
/// pointer that goes down; others are ignored until it lifts.
pub struct EditGestureDetector {
    config: GestureConfig,
    tracking: Option<Tracking>,
}

impl Default for EditGestureDetector {
    fn default() -> Self {
        Self::new(GestureConfig::default())
    }
}

impl EditGestureDetector {
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            tracking: None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.tracking.as_ref().is_some_and(|t| t.dragging)
    }

    pub fn handle_pointer(&mut self, event: &PointerEvent) -> Gestures {
        self.handle_pointer_at(event, Instant::now())
    }

    pub fn handle_pointer_at(&mut self, event: &PointerEvent, now: Instant) -> Gestures {
        let mut out = Gestures::new();
        let Some(t) = self.tracking.as_mut() else {
            if event.pressed {
                self.tracking = Some(Tracking {
                    id: event.id,
                    start: event.position,
                    last: event.position,
                    started_at: now,
                    dragging: false,
                });
            }
            return out;
        };
        if t.id != event.id {
            return out;
        }

        if event.pressed {
            if !t.dragging && (event.position - t.start).length() > self.config.touch_slop {
                t.dragging = true;
                out.push(EditGesture::DragStart { position: t.start });
                out.push(EditGesture::Drag {
                    delta: event.position - t.start,
                });
            } else if t.dragging {
                out.push(EditGesture::Drag {
                    delta: event.position - t.last,
                });
            }
            t.last = event.position;
            return out;
        }

        if t.dragging {
            out.push(EditGesture::DragEnd);
        } else if now.duration_since(t.started_at) < self.config.tap_timeout {
            out.push(EditGesture::Tap { position: t.start });
        }
        self.tracking = None;
        out
    }

    /// Abandons the current gesture, e.g. when edit mode is left mid-drag.
    pub fn cancel(&mut self) -> Option<EditGesture> {
        match self.tracking.take() {
            Some(t) if t.dragging => Some(EditGesture::DragCancel),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(id: u64, x: f32, y: f32, pressed: bool) -> PointerEvent {
        PointerEvent::touch(id, Vec2::new(x, y), pressed)
    }

    #[test]
    fn test_short_press_is_tap() {
        let mut d = EditGestureDetector::default();
        let t0 = Instant::now();
        assert!(d.handle_pointer_at(&at(1, 10.0, 10.0, true), t0).is_empty());
        assert!(d.handle_pointer_at(&at(1, 12.0, 11.0, true), t0).is_empty());
        let out = d.handle_pointer_at(&at(1, 12.0, 11.0, false), t0 + Duration::from_millis(100));
        assert_eq!(
            out.as_slice(),
            &[EditGesture::Tap {
                position: Vec2::new(10.0, 10.0)
            }]
        );
    }

    #[test]
    fn test_long_press_is_not_tap() {
        let mut d = EditGestureDetector::default();
        let t0 = Instant::now();
        d.handle_pointer_at(&at(1, 10.0, 10.0, true), t0);
        let out = d.handle_pointer_at(&at(1, 10.0, 10.0, false), t0 + Duration::from_millis(900));
        assert!(out.is_empty());
    }

    #[test]
    fn test_drag_reports_incremental_deltas() {
        let mut d = EditGestureDetector::default();
        let t0 = Instant::now();
        d.handle_pointer_at(&at(1, 10.0, 10.0, true), t0);
        let out = d.handle_pointer_at(&at(1, 30.0, 10.0, true), t0);
        assert_eq!(
            out.as_slice(),
            &[
                EditGesture::DragStart {
                    position: Vec2::new(10.0, 10.0)
                },
                EditGesture::Drag {
                    delta: Vec2::new(20.0, 0.0)
                },
            ]
        );
        assert!(d.is_dragging());

        let out = d.handle_pointer_at(&at(1, 35.0, 5.0, true), t0);
        assert_eq!(
            out.as_slice(),
            &[EditGesture::Drag {
                delta: Vec2::new(5.0, -5.0)
            }]
        );

        // a second finger does not interfere
        assert!(d.handle_pointer_at(&at(2, 500.0, 500.0, true), t0).is_empty());

        let out = d.handle_pointer_at(&at(1, 35.0, 5.0, false), t0);
        assert_eq!(out.as_slice(), &[EditGesture::DragEnd]);
        assert!(!d.is_dragging());
    }

    #[test]
    fn test_cancel_only_reports_drags() {
        let mut d = EditGestureDetector::default();
        d.handle_pointer(&at(1, 0.0, 0.0, true));
        assert_eq!(d.cancel(), None);

        d.handle_pointer(&at(1, 0.0, 0.0, true));
        d.handle_pointer(&at(1, 50.0, 0.0, true));
        assert_eq!(d.cancel(), Some(EditGesture::DragCancel));
    }
}
