use linkwork::{sample_scene, Hinge, HingeId, Scene, Vector2};
use wasm_bindgen::prelude::*;

/// Pick radius around the cursor when selecting hinges.
const PICK_RADIUS: f64 = 20.0;

// ---- Linkage Demo ----

/// Browser-facing wrapper around the sample scene.
///
/// Handles never cross the boundary: hinges and links are addressed by their
/// position in insertion order, matching the flat arrays returned below.
#[wasm_bindgen]
pub struct LinkageDemo {
    scene: Scene<f64>,
    selected: Option<HingeId>,
}

#[wasm_bindgen]
impl LinkageDemo {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<LinkageDemo, JsError> {
        let scene = sample_scene().map_err(|e| JsError::new(&e.to_string()))?;
        Ok(LinkageDemo { scene, selected: None })
    }

    pub fn update(&mut self) {
        self.scene.advance();
    }

    pub fn toggle_running(&mut self) {
        self.scene.toggle_running();
    }

    pub fn is_running(&self) -> bool {
        self.scene.is_running()
    }

    /// Returns flat [x0, y0, x1, y1, ...] hinge positions
    pub fn hinge_positions(&self) -> Vec<f64> {
        let mut out = Vec::with_capacity(self.scene.simulation.hinge_count() * 2);
        for (_, h) in self.scene.simulation.hinges() {
            out.push(h.position.x);
            out.push(h.position.y);
        }
        out
    }

    /// Returns flat [ax, ay, bx, by, ...] per link
    pub fn link_segments(&self) -> Vec<f64> {
        let mut out = Vec::with_capacity(self.scene.simulation.link_count() * 4);
        for (a, b) in self.scene.simulation.link_segments() {
            out.extend_from_slice(&[a.x, a.y, b.x, b.y]);
        }
        out
    }

    /// Returns 1 for each fixed hinge, 0 otherwise, in hinge order
    pub fn fixed_flags(&self) -> Vec<u8> {
        self.scene
            .simulation
            .hinges()
            .map(|(_, h)| u8::from(h.is_fixed()))
            .collect()
    }

    /// Select the hinge under the cursor. Returns its index or -1.
    pub fn select(&mut self, x: f64, y: f64) -> i32 {
        self.selected = self.scene.simulation.hinge_near(Vector2::new(x, y), PICK_RADIUS);
        self.selected.map_or(-1, |id| self.index_of(id))
    }

    /// Add a free hinge and select it. Returns its index.
    pub fn add_hinge(&mut self, x: f64, y: f64) -> i32 {
        let id = self.scene.simulation.add_hinge(Hinge::new(Vector2::new(x, y)));
        self.selected = Some(id);
        self.index_of(id)
    }

    /// Rigidly link the selected hinge to the one under the cursor.
    pub fn link_to(&mut self, x: f64, y: f64) -> bool {
        let Some(from) = self.selected else { return false };
        let Some(to) = self.scene.simulation.hinge_near(Vector2::new(x, y), PICK_RADIUS) else {
            return false;
        };
        self.scene.simulation.connect(from, to).is_ok()
    }

    pub fn drag_selected(&mut self, x: f64, y: f64) -> bool {
        match self.selected {
            Some(id) => self.scene.simulation.drag_hinge(id, Vector2::new(x, y)),
            None => false,
        }
    }

    pub fn delete_selected(&mut self) {
        if let Some(id) = self.selected.take() {
            self.scene.simulation.remove_hinge(id);
        }
    }

    /// Apply inspector values to the selected hinge. NaN clears an axis lock.
    pub fn configure_selected(&mut self, x: f64, y: f64, fixed: bool, lock_x: f64, lock_y: f64) -> bool {
        let Some(id) = self.selected else { return false };
        let lock = |v: f64| if v.is_nan() { None } else { Some(v) };
        let sim = &mut self.scene.simulation;
        sim.set_hinge_position(id, Vector2::new(x, y))
            && sim.set_hinge_fixed(id, fixed)
            && sim.set_hinge_locks(id, lock(lock_x), lock(lock_y))
    }

    pub fn hinge_count(&self) -> usize {
        self.scene.simulation.hinge_count()
    }

    pub fn link_count(&self) -> usize {
        self.scene.simulation.link_count()
    }
}

impl LinkageDemo {
    fn index_of(&self, id: HingeId) -> i32 {
        self.scene
            .simulation
            .hinges()
            .position(|(h, _)| h == id)
            .map_or(-1, |i| i as i32)
    }
}
