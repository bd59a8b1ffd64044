/// cubeview web - the cube as six DOM panels placed with CSS 3D transforms
///
/// JS glue owns the pointer/touch listeners and forwards recognizer states
/// (0 possible, 1 began, 2 changed, 3 ended, 4 cancelled, 5 failed) to
/// `WebCube::pan` and `WebCube::pinch`.

use cubeview_core::{cube_layout, CubeController, Face, GestureState, Transform};
use nalgebra::Matrix4;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement};

/// Distance, in CSS pixels, from the viewer to the z = 0 plane
const PERSPECTIVE_PX: f32 = 500.0;

#[wasm_bindgen]
pub struct WebCube {
    controller: CubeController,
    cube_element: Option<HtmlElement>,
}

#[wasm_bindgen]
impl WebCube {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WebCube {
        WebCube {
            controller: CubeController::new(),
            cube_element: None,
        }
    }

    /// Build the cube inside the element with the given id
    pub fn mount(&mut self, container_id: &str) -> Result<(), JsValue> {
        let document = document()?;
        let container = document
            .get_element_by_id(container_id)
            .ok_or_else(|| JsValue::from_str(&format!("no element with id '{}'", container_id)))?
            .dyn_into::<HtmlElement>()?;

        let style = container.style();
        style.set_property("perspective", &format!("{}px", PERSPECTIVE_PX))?;

        let cube = create_div(&document)?;
        let cube_style = cube.style();
        cube_style.set_property("position", "absolute")?;
        cube_style.set_property("left", "50%")?;
        cube_style.set_property("top", "50%")?;
        cube_style.set_property("transform-style", "preserve-3d")?;

        for (face, placement) in cube_layout() {
            let panel = create_face(&document, face, &placement)?;
            cube.append_child(&panel)?;
        }

        container.append_child(&cube)?;
        self.cube_element = Some(cube);
        self.apply_transform()?;

        tracing::info!(container_id, "cube mounted");
        Ok(())
    }

    /// Drag handler; `dx`/`dy` are the cumulative translation in CSS pixels
    pub fn pan(&mut self, state: u32, dx: f32, dy: f32) -> Result<(), JsValue> {
        let state = gesture_state(state)?;
        self.controller.handle_pan(state, dx, dy);
        self.apply_transform()
    }

    /// Pinch handler; `scale` is the cumulative pinch factor
    pub fn pinch(&mut self, state: u32, scale: f32) -> Result<(), JsValue> {
        let state = gesture_state(state)?;
        self.controller.handle_pinch(state, scale);
        self.apply_transform()
    }

    pub fn reset(&mut self) -> Result<(), JsValue> {
        self.controller.reset();
        self.apply_transform()
    }

    /// Current cube transform, column-major, Y-up world frame
    pub fn transform(&self) -> Vec<f32> {
        self.controller.transform().as_slice().to_vec()
    }

    fn apply_transform(&self) -> Result<(), JsValue> {
        if let Some(cube) = &self.cube_element {
            cube.style()
                .set_property("transform", &css_matrix3d(self.controller.transform()))?;
        }
        Ok(())
    }
}

impl Default for WebCube {
    fn default() -> Self {
        Self::new()
    }
}

fn gesture_state(code: u32) -> Result<GestureState, JsValue> {
    GestureState::from_raw(code).map_err(|e| {
        tracing::error!(code, "rejected gesture state");
        JsValue::from_str(&e.to_string())
    })
}

fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no document available"))
}

fn create_div(document: &Document) -> Result<HtmlElement, JsValue> {
    document.create_element("div")?.dyn_into::<HtmlElement>().map_err(JsValue::from)
}

fn create_face(document: &Document, face: Face, placement: &Matrix4<f32>) -> Result<HtmlElement, JsValue> {
    let (width, height) = face.size();
    let element = create_div(document)?;
    element.set_class_name(&format!("cube-face cube-face-{:?}", face).to_lowercase());

    let style = element.style();
    style.set_property("position", "absolute")?;
    style.set_property("width", &format!("{}px", width))?;
    style.set_property("height", &format!("{}px", height))?;
    // Center the panel on the cube origin before the layout transform
    style.set_property("left", &format!("{}px", -width / 2.0))?;
    style.set_property("top", &format!("{}px", -height / 2.0))?;
    style.set_property("background-color", &face.color().css())?;
    style.set_property("opacity", "0.9")?;
    style.set_property("text-align", "center")?;
    style.set_property("line-height", &format!("{}px", height))?;
    style.set_property("font", "bold 32px sans-serif")?;
    style.set_property("color", "white")?;
    style.set_property("transform", &css_matrix3d(placement))?;

    if let Some(label) = face.label() {
        element.set_text_content(Some(label));
    }

    Ok(element)
}

/// CSS `matrix3d(...)` for a Y-up transform
pub fn css_matrix3d(matrix: &Matrix4<f32>) -> String {
    let values: Vec<String> = Transform::to_y_down(matrix)
        .as_slice()
        .iter()
        // Avoid printing "-0"
        .map(|v| format!("{}", if *v == 0.0 { 0.0 } else { *v }))
        .collect();
    format!("matrix3d({})", values.join(", "))
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_matrix3d() {
        assert_eq!(
            css_matrix3d(&Matrix4::identity()),
            "matrix3d(1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1)"
        );
    }

    #[test]
    fn test_matrix3d_translation_is_y_down() {
        let css = css_matrix3d(&Transform::translation_matrix(10.0, 20.0, 30.0));
        assert!(css.ends_with("10, -20, 30, 1)"), "{}", css);
    }

    #[test]
    fn test_transform_is_column_major() {
        let mut cube = WebCube::new();
        cube.pinch(1, 1.0).unwrap();
        cube.pinch(2, 2.0).unwrap();
        let m = cube.transform();
        assert_eq!(m.len(), 16);
        assert!((m[0] - 2.0).abs() < 1e-6);
        assert!((m[5] - 2.0).abs() < 1e-6);
        assert!((m[10] - 2.0).abs() < 1e-6);
        assert!((m[15] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_pan_without_mount_updates_state() {
        let mut cube = WebCube::new();
        cube.pan(1, 0.0, 0.0).unwrap();
        cube.pan(2, 90.0, 0.0).unwrap();
        let expected = Transform::rotation_y(1.0);
        let m = cube.transform();
        for (a, b) in m.iter().zip(expected.as_slice()) {
            assert!((a - b).abs() < 1e-6);
        }
    }

    #[test]
    fn test_two_finger_pan_and_pinch_overlap() {
        let mut cube = WebCube::new();
        cube.pan(1, 0.0, 0.0).unwrap();
        cube.pan(2, 45.0, 0.0).unwrap();
        cube.pinch(1, 1.0).unwrap();
        cube.pinch(2, 2.0).unwrap();
        cube.pinch(3, 2.0).unwrap();
        cube.pan(2, 90.0, 0.0).unwrap();
        cube.pan(3, 90.0, 0.0).unwrap();

        let expected = Transform::rotation_y(1.0) * Transform::uniform_scale(2.0);
        for (a, b) in cube.transform().iter().zip(expected.as_slice()) {
            assert!((a - b).abs() < 1e-5);
        }
    }
}
