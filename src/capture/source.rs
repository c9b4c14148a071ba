//! Cursor position sources
//!
//! A [`CursorSource`] yields the current cursor position in raw screen
//! coordinates. The production backend queries the OS through `device_query`;
//! tests use [`ScriptedSource`] to replay a fixed trajectory.

use device_query::{DeviceQuery, DeviceState};

/// Anything that can report the current cursor position.
///
/// Coordinates are signed because the OS can report positions left of or
/// above the primary display origin; the recorder decides what to do with
/// those.
pub trait CursorSource {
    /// Current cursor position, or `None` if the position cannot be queried.
    fn position(&mut self) -> Option<(i32, i32)>;
}

/// Production source backed by `device_query`.
pub struct DeviceStateSource {
    state: DeviceState,
}

impl DeviceStateSource {
    pub fn new() -> Self {
        Self {
            state: DeviceState::new(),
        }
    }
}

impl Default for DeviceStateSource {
    fn default() -> Self {
        Self::new()
    }
}

impl CursorSource for DeviceStateSource {
    fn position(&mut self) -> Option<(i32, i32)> {
        let mouse = self.state.get_mouse();
        Some(mouse.coords)
    }
}

/// Replays a fixed list of positions, then keeps returning the last one.
/// Intended for tests and the capture benchmarks.
pub struct ScriptedSource {
    positions: Vec<(i32, i32)>,
    index: usize,
}

impl ScriptedSource {
    pub fn new(positions: Vec<(i32, i32)>) -> Self {
        Self {
            positions,
            index: 0,
        }
    }
}

impl CursorSource for ScriptedSource {
    fn position(&mut self) -> Option<(i32, i32)> {
        if self.positions.is_empty() {
            return None;
        }
        let i = self.index.min(self.positions.len() - 1);
        self.index += 1;
        Some(self.positions[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_source_replays_in_order() {
        let mut source = ScriptedSource::new(vec![(1, 2), (3, 4)]);
        assert_eq!(source.position(), Some((1, 2)));
        assert_eq!(source.position(), Some((3, 4)));
        // Exhausted: sticks to the last position
        assert_eq!(source.position(), Some((3, 4)));
    }

    #[test]
    fn test_scripted_source_empty() {
        let mut source = ScriptedSource::new(vec![]);
        assert_eq!(source.position(), None);
    }
}
