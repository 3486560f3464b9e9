//! Document Model
//!
//! Owns the ordered list of sketches, the construction plane flags used by
//! picking, and the single "active sketch" back-reference.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::plane::ConstructionPlane;
use crate::sketch::Sketch;

/// Errors that can occur when working with a document
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    #[error("Sketch not found: index {0}")]
    SketchNotFound(usize),
}

/// Result type for document operations
pub type DocumentResult<T> = Result<T, DocumentError>;

/// Visibility and selection flags of one construction plane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaneState {
    /// The plane these flags belong to
    pub plane: ConstructionPlane,
    /// Whether the plane is shown (and pickable)
    pub visible: bool,
    /// Whether the plane is selected
    #[serde(skip)]
    pub selected: bool,
}

impl PlaneState {
    fn new(plane: ConstructionPlane) -> Self {
        Self {
            plane,
            visible: true,
            selected: false,
        }
    }
}

/// In-memory CAD document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    planes: Vec<PlaneState>,
    sketches: Vec<Sketch>,
    #[serde(skip)]
    active_sketch: Option<usize>,
}

impl Default for Document {
    fn default() -> Self {
        Self {
            planes: ConstructionPlane::all()
                .into_iter()
                .map(PlaneState::new)
                .collect(),
            sketches: Vec::new(),
            active_sketch: None,
        }
    }
}

impl Document {
    /// Create a new document with all construction planes visible
    pub fn new() -> Self {
        Self::default()
    }

    // ============== Plane Flags ==============

    /// Get the flags of every construction plane
    pub fn planes(&self) -> &[PlaneState] {
        &self.planes
    }

    fn plane_state(&self, plane: ConstructionPlane) -> Option<&PlaneState> {
        self.planes.iter().find(|p| p.plane == plane)
    }

    fn plane_state_mut(&mut self, plane: ConstructionPlane) -> Option<&mut PlaneState> {
        self.planes.iter_mut().find(|p| p.plane == plane)
    }

    /// Show or hide a plane
    pub fn set_plane_visibility(&mut self, plane: ConstructionPlane, visible: bool) {
        if let Some(state) = self.plane_state_mut(plane) {
            state.visible = visible;
        }
    }

    /// Check whether a plane is visible
    pub fn is_plane_visible(&self, plane: ConstructionPlane) -> bool {
        self.plane_state(plane).is_some_and(|p| p.visible)
    }

    /// Select a plane, replacing the current selection unless
    /// `add_to_selection` is set
    pub fn select_plane(&mut self, plane: ConstructionPlane, add_to_selection: bool) {
        if !add_to_selection {
            self.deselect_all();
        }
        if let Some(state) = self.plane_state_mut(plane) {
            state.selected = true;
        }
    }

    /// Clear the plane selection
    pub fn deselect_all(&mut self) {
        for state in &mut self.planes {
            state.selected = false;
        }
    }

    /// Check whether a plane is selected
    pub fn is_plane_selected(&self, plane: ConstructionPlane) -> bool {
        self.plane_state(plane).is_some_and(|p| p.selected)
    }

    /// Iterate over the planes that are currently visible
    pub fn visible_planes(&self) -> impl Iterator<Item = ConstructionPlane> + '_ {
        self.planes.iter().filter(|p| p.visible).map(|p| p.plane)
    }

    /// Iterate over the planes that are currently selected
    pub fn selected_planes(&self) -> impl Iterator<Item = ConstructionPlane> + '_ {
        self.planes.iter().filter(|p| p.selected).map(|p| p.plane)
    }

    // ============== Sketch Management ==============

    /// Add a sketch and return its index
    pub fn add_sketch(&mut self, name: impl Into<String>, plane: ConstructionPlane) -> usize {
        self.sketches.push(Sketch::new(name, plane));
        self.sketches.len() - 1
    }

    /// Get all sketches
    pub fn sketches(&self) -> &[Sketch] {
        &self.sketches
    }

    /// Number of sketches in the document
    pub fn sketch_count(&self) -> usize {
        self.sketches.len()
    }

    /// Get a sketch by index
    pub fn sketch(&self, index: usize) -> Option<&Sketch> {
        self.sketches.get(index)
    }

    /// Get a mutable sketch by index
    pub fn sketch_mut(&mut self, index: usize) -> Option<&mut Sketch> {
        self.sketches.get_mut(index)
    }

    // ============== Active Sketch ==============

    /// Designate the sketch receiving pointer input.
    ///
    /// Every editing flag is cleared before the new one is set, so at most one
    /// sketch is ever editing. An invalid index leaves no sketch active.
    pub fn set_active_sketch(&mut self, index: Option<usize>) -> DocumentResult<()> {
        for sketch in &mut self.sketches {
            sketch.is_editing = false;
        }
        self.active_sketch = None;

        let Some(index) = index else {
            return Ok(());
        };
        let sketch = self
            .sketches
            .get_mut(index)
            .ok_or(DocumentError::SketchNotFound(index))?;
        sketch.is_editing = true;
        self.active_sketch = Some(index);
        Ok(())
    }

    /// Index of the sketch being edited
    pub fn active_sketch_index(&self) -> Option<usize> {
        self.active_sketch
    }

    /// The sketch being edited
    pub fn active_sketch(&self) -> Option<&Sketch> {
        self.active_sketch.and_then(|i| self.sketches.get(i))
    }

    /// The sketch being edited, mutably
    pub fn active_sketch_mut(&mut self) -> Option<&mut Sketch> {
        self.active_sketch.and_then(|i| self.sketches.get_mut(i))
    }
}
