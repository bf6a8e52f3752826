use crate::geometry::{FaceSide, Rect};

/// Euler orientation of a panel, in radians about the x, y and z axes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rotation(pub [f64; 3]);

impl Rotation {
    pub const IDENTITY: Rotation = Rotation([0.0, 0.0, 0.0]);

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Rotation([x, y, z])
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

/// A rigid rectangular board.
///
/// `x`, `y`, `z` is the world position of the panel center. Width and height
/// are the in-plane extents; the depth is the graph-wide thickness.
#[derive(Clone, Debug, PartialEq)]
pub struct Panel {
    id: String,
    pub width: f64,
    pub height: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub rotation: Rotation,
}

impl Panel {
    /// Creates a panel centered at the origin with identity rotation.
    pub fn new(id: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            width,
            height,
            x: 0.0,
            y: 0.0,
            z: 0.0,
            rotation: Rotation::IDENTITY,
        }
    }

    pub fn at(mut self, x: f64, y: f64, z: f64) -> Self {
        self.x = x;
        self.y = y;
        self.z = z;
        self
    }

    pub fn rotated(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

/// One face of a panel and its extent in that panel's local frame.
#[derive(Clone, Debug, PartialEq)]
pub struct FaceRect {
    pub panel_id: String,
    pub side: FaceSide,
    pub rect: Rect,
}

impl FaceRect {
    pub fn new(panel_id: impl Into<String>, side: FaceSide, rect: Rect) -> Self {
        Self {
            panel_id: panel_id.into(),
            side,
            rect,
        }
    }
}
