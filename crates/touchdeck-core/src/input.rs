use crate::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointerId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerKind {
    Mouse,
    Touch,
    Pen,
}

/// One pointer sample as fed by the platform layer.
///
/// `pressed` stays `true` for every sample while the pointer is down (moves
/// included) and is `false` exactly once, when it lifts or is cancelled.
#[derive(Clone, Copy, Debug)]
pub struct PointerEvent {
    pub id: PointerId,
    pub kind: PointerKind,
    pub position: Vec2,
    pub pressed: bool,
}

impl PointerEvent {
    pub fn touch(id: u64, position: Vec2, pressed: bool) -> Self {
        Self {
            id: PointerId(id),
            kind: PointerKind::Touch,
            position,
            pressed,
        }
    }
}
