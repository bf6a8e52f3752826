use crate::geometry::Rect;
use crate::panel::FaceRect;

/// The shared seam between two abutting faces, expressed once per side.
///
/// Both rects describe the same physical region, each in its own panel's frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Overlap {
    pub on_a: Rect,
    pub on_b: Rect,
}

impl Overlap {
    pub fn new(on_a: Rect, on_b: Rect) -> Self {
        Self { on_a, on_b }
    }

    /// Splits into `(self, other)` mutable rects, seen from side A when `from_a` is set.
    pub fn sides_mut(&mut self, from_a: bool) -> (&mut Rect, &mut Rect) {
        let Overlap { on_a, on_b } = self;
        if from_a { (on_a, on_b) } else { (on_b, on_a) }
    }
}

/// A physical abutment between two panel faces.
///
/// Edges with `propagate` unset are kept for visualization only: they never
/// forward resize deltas and the engine does not realign across them.
#[derive(Clone, Debug, PartialEq)]
pub struct Edge {
    pub(crate) id: String,
    pub(crate) face_a: FaceRect,
    pub(crate) face_b: FaceRect,
    pub(crate) propagate: bool,
    pub(crate) overlap: Overlap,
}

impl Edge {
    pub fn new(
        id: impl Into<String>,
        face_a: FaceRect,
        face_b: FaceRect,
        overlap: Overlap,
    ) -> Self {
        Self {
            id: id.into(),
            face_a,
            face_b,
            propagate: true,
            overlap,
        }
    }

    /// Marks this edge as visualization-only.
    pub fn visual_only(mut self) -> Self {
        self.propagate = false;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn face_a(&self) -> &FaceRect {
        &self.face_a
    }

    pub fn face_b(&self) -> &FaceRect {
        &self.face_b
    }

    pub fn propagates(&self) -> bool {
        self.propagate
    }

    pub fn overlap(&self) -> &Overlap {
        &self.overlap
    }

    pub fn touches(&self, panel_id: &str) -> bool {
        self.face_a.panel_id == panel_id || self.face_b.panel_id == panel_id
    }

    /// Id of the panel across the edge from `panel_id`.
    ///
    /// For an edge joining a panel to itself this is the panel's own id.
    pub fn other(&self, panel_id: &str) -> &str {
        if self.face_a.panel_id == panel_id {
            &self.face_b.panel_id
        } else {
            &self.face_a.panel_id
        }
    }
}
