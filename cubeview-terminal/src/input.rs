/// Translates terminal mouse and key input into cube gestures
use crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind};
use cubeview_core::{CubeController, GestureState};

/// Terminal cells are roughly twice as tall as they are wide
const CELL_ASPECT: f32 = 2.0;

/// Drag distance, in points, of one arrow key press
const NUDGE_POINTS: f32 = 9.0;

/// Overall cube scale the scroll wheel may reach. Above the maximum the cube
/// corners come within the camera's near plane.
const MIN_SCALE: f32 = 0.25;
const MAX_SCALE: f32 = 4.0;

/// Recognizer for drag (left button) and pinch (scroll wheel) gestures
#[derive(Debug)]
pub struct GestureInput {
    points_per_cell: f32,
    zoom_step: f32,
    pan_origin: Option<(u16, u16)>,
    pinch_factor: Option<f32>,
    pinch_start_scale: f32,
}

impl GestureInput {
    pub fn new(points_per_cell: f32, zoom_step: f32) -> Self {
        Self {
            points_per_cell,
            zoom_step,
            pan_origin: None,
            pinch_factor: None,
            pinch_start_scale: 1.0,
        }
    }

    pub fn is_active(&self) -> bool {
        self.pan_origin.is_some() || self.pinch_factor.is_some()
    }

    pub fn handle_mouse(&mut self, event: &MouseEvent, controller: &mut CubeController) {
        match event.kind {
            MouseEventKind::ScrollUp => self.scroll(self.zoom_step, controller),
            MouseEventKind::ScrollDown => self.scroll(1.0 / self.zoom_step, controller),
            kind => {
                self.end_pinch(controller);
                self.pointer(kind, event.column, event.row, controller);
            }
        }
    }

    /// Arrow keys drive a one-step pan; any key ends a pinch in progress
    pub fn handle_key(&mut self, code: KeyCode, controller: &mut CubeController) {
        self.end_pinch(controller);
        if self.pan_origin.is_some() {
            return;
        }

        let (dx, dy) = match code {
            KeyCode::Left => (-NUDGE_POINTS, 0.0),
            KeyCode::Right => (NUDGE_POINTS, 0.0),
            KeyCode::Up => (0.0, -NUDGE_POINTS),
            KeyCode::Down => (0.0, NUDGE_POINTS),
            _ => return,
        };
        controller.handle_pan(GestureState::Began, 0.0, 0.0);
        controller.handle_pan(GestureState::Changed, dx, dy);
        controller.handle_pan(GestureState::Ended, dx, dy);
    }

    fn pointer(&mut self, kind: MouseEventKind, column: u16, row: u16, controller: &mut CubeController) {
        match (kind, self.pan_origin) {
            (MouseEventKind::Down(MouseButton::Left), origin) => {
                // A press while a drag is active means its release was lost
                if let Some(origin) = origin {
                    let (dx, dy) = self.delta(origin, column, row);
                    controller.handle_pan(GestureState::Cancelled, dx, dy);
                }
                self.pan_origin = Some((column, row));
                controller.handle_pan(GestureState::Began, 0.0, 0.0);
            }
            (MouseEventKind::Drag(MouseButton::Left), Some(origin)) => {
                let (dx, dy) = self.delta(origin, column, row);
                controller.handle_pan(GestureState::Changed, dx, dy);
            }
            (MouseEventKind::Up(MouseButton::Left), Some(origin)) => {
                let (dx, dy) = self.delta(origin, column, row);
                controller.handle_pan(GestureState::Ended, dx, dy);
                self.pan_origin = None;
            }
            _ => {}
        }
    }

    fn delta(&self, origin: (u16, u16), column: u16, row: u16) -> (f32, f32) {
        let dx = (column as f32 - origin.0 as f32) * self.points_per_cell;
        let dy = (row as f32 - origin.1 as f32) * self.points_per_cell * CELL_ASPECT;
        (dx, dy)
    }

    fn scroll(&mut self, step: f32, controller: &mut CubeController) {
        let factor = match self.pinch_factor {
            Some(factor) => factor * step,
            None => {
                controller.handle_pinch(GestureState::Began, 1.0);
                self.pinch_start_scale = controller.scale();
                step
            }
        };
        let factor = factor.clamp(
            MIN_SCALE / self.pinch_start_scale,
            MAX_SCALE / self.pinch_start_scale,
        );
        self.pinch_factor = Some(factor);
        controller.handle_pinch(GestureState::Changed, factor);
    }

    pub fn end_pinch(&mut self, controller: &mut CubeController) {
        if let Some(factor) = self.pinch_factor.take() {
            controller.handle_pinch(GestureState::Ended, factor);
        }
    }

    /// Abandon any drag or pinch in progress
    pub fn cancel(&mut self, controller: &mut CubeController) {
        if self.pan_origin.take().is_some() {
            controller.handle_pan(GestureState::Cancelled, 0.0, 0.0);
        }
        if let Some(factor) = self.pinch_factor.take() {
            controller.handle_pinch(GestureState::Cancelled, factor);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use cubeview_core::Transform;
    use nalgebra::Matrix4;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_drag_rotates_from_press_point() {
        let mut input = GestureInput::new(4.0, 1.1);
        let mut controller = CubeController::new();

        input.handle_mouse(&mouse(MouseEventKind::Down(MouseButton::Left), 10, 10), &mut controller);
        assert!(input.is_active());
        input.handle_mouse(&mouse(MouseEventKind::Drag(MouseButton::Left), 20, 10), &mut controller);
        input.handle_mouse(&mouse(MouseEventKind::Drag(MouseButton::Left), 32, 10), &mut controller);

        // 22 columns * 4 points = 88 points of horizontal drag
        let expected = Transform::rotation_y(88.0 / 90.0);
        assert!((controller.transform() - expected).norm() < 1e-6);

        input.handle_mouse(&mouse(MouseEventKind::Up(MouseButton::Left), 32, 10), &mut controller);
        assert!(!input.is_active());
    }

    #[test]
    fn test_vertical_drag_uses_cell_aspect() {
        let mut input = GestureInput::new(4.0, 1.1);
        let mut controller = CubeController::new();

        input.handle_mouse(&mouse(MouseEventKind::Down(MouseButton::Left), 0, 0), &mut controller);
        input.handle_mouse(&mouse(MouseEventKind::Drag(MouseButton::Left), 0, 9), &mut controller);

        let expected = Transform::rotation_x(72.0 / 90.0);
        assert!((controller.transform() - expected).norm() < 1e-6);
    }

    #[test]
    fn test_drag_without_press_is_ignored() {
        let mut input = GestureInput::new(4.0, 1.1);
        let mut controller = CubeController::new();
        input.handle_mouse(&mouse(MouseEventKind::Drag(MouseButton::Left), 5, 5), &mut controller);
        assert_eq!(*controller.transform(), Matrix4::identity());
    }

    #[test]
    fn test_scroll_accumulates_pinch() {
        let mut input = GestureInput::new(4.0, 2.0);
        let mut controller = CubeController::new();

        input.handle_mouse(&mouse(MouseEventKind::ScrollUp, 0, 0), &mut controller);
        input.handle_mouse(&mouse(MouseEventKind::ScrollUp, 0, 0), &mut controller);
        input.handle_mouse(&mouse(MouseEventKind::ScrollDown, 0, 0), &mut controller);

        assert!((controller.transform() - Transform::uniform_scale(2.0)).norm() < 1e-6);

        input.handle_mouse(&mouse(MouseEventKind::Moved, 0, 0), &mut controller);
        assert!(!input.is_active());
        assert!((controller.transform() - Transform::uniform_scale(2.0)).norm() < 1e-6);
    }

    #[test]
    fn test_scroll_during_drag_keeps_rotation() {
        let mut input = GestureInput::new(4.0, 2.0);
        let mut controller = CubeController::new();

        input.handle_mouse(&mouse(MouseEventKind::Down(MouseButton::Left), 0, 0), &mut controller);
        input.handle_mouse(&mouse(MouseEventKind::Drag(MouseButton::Left), 10, 0), &mut controller);
        input.handle_mouse(&mouse(MouseEventKind::ScrollUp, 10, 0), &mut controller);
        input.handle_mouse(&mouse(MouseEventKind::Drag(MouseButton::Left), 20, 0), &mut controller);

        let expected = Transform::uniform_scale(2.0) * Transform::rotation_y(80.0 / 90.0);
        assert!((controller.transform() - expected).norm() < 1e-5);
    }

    #[test]
    fn test_press_after_lost_release_starts_new_drag() {
        let mut input = GestureInput::new(4.0, 1.1);
        let mut controller = CubeController::new();

        input.handle_mouse(&mouse(MouseEventKind::Down(MouseButton::Left), 0, 0), &mut controller);
        input.handle_mouse(&mouse(MouseEventKind::Drag(MouseButton::Left), 10, 0), &mut controller);
        // no Up arrives
        input.handle_mouse(&mouse(MouseEventKind::Down(MouseButton::Left), 50, 0), &mut controller);
        input.handle_mouse(&mouse(MouseEventKind::Drag(MouseButton::Left), 55, 0), &mut controller);

        let expected = Transform::rotation_y(60.0 / 90.0);
        assert!((controller.transform() - expected).norm() < 1e-5);
    }

    #[test]
    fn test_cancel_then_reset_ignores_stale_drag() {
        let mut input = GestureInput::new(4.0, 1.1);
        let mut controller = CubeController::new();

        input.handle_mouse(&mouse(MouseEventKind::Down(MouseButton::Left), 0, 0), &mut controller);
        input.handle_mouse(&mouse(MouseEventKind::Drag(MouseButton::Left), 10, 0), &mut controller);
        input.cancel(&mut controller);
        controller.reset();
        assert!(!input.is_active());

        input.handle_mouse(&mouse(MouseEventKind::Drag(MouseButton::Left), 30, 0), &mut controller);
        assert_eq!(*controller.transform(), Matrix4::identity());
    }

    #[test]
    fn test_scroll_scale_is_clamped() {
        let mut input = GestureInput::new(4.0, 1.1);
        let mut controller = CubeController::new();

        for _ in 0..40 {
            input.handle_mouse(&mouse(MouseEventKind::ScrollUp, 0, 0), &mut controller);
        }
        assert!((controller.scale() - MAX_SCALE).abs() < 1e-4);

        // A second pinch continues from the committed scale
        input.handle_key(KeyCode::Char('x'), &mut controller);
        input.handle_mouse(&mouse(MouseEventKind::ScrollUp, 0, 0), &mut controller);
        assert!((controller.scale() - MAX_SCALE).abs() < 1e-4);

        for _ in 0..80 {
            input.handle_mouse(&mouse(MouseEventKind::ScrollDown, 0, 0), &mut controller);
        }
        assert!((controller.scale() - MIN_SCALE).abs() < 1e-4);
    }

    #[test]
    fn test_arrow_key_nudges() {
        let mut input = GestureInput::new(4.0, 1.1);
        let mut controller = CubeController::new();
        input.handle_key(KeyCode::Right, &mut controller);
        input.handle_key(KeyCode::Char('x'), &mut controller);

        let expected = Transform::rotation_y(NUDGE_POINTS / 90.0);
        assert!((controller.transform() - expected).norm() < 1e-6);
    }
}
