use crate::geometry::{FaceSide, Rect};
use crate::panel::Panel;

/// Moves `target` so the overlap band it shares with `anchor` stays coincident.
///
/// Uses the current sizes of both panels and the current overlap rects. Along
/// the separation axis the faces are kept flush (less the overlap depth); along
/// the seam the overlap centers are lined up. Only opposite-side pairings are
/// modeled; anything else leaves `target` untouched and returns `false`.
pub fn align_panels(
    anchor: &Panel,
    anchor_face: FaceSide,
    anchor_overlap: &Rect,
    target: &mut Panel,
    target_face: FaceSide,
    target_overlap: &Rect,
) -> bool {
    let depth_x = anchor_overlap.w.min(target_overlap.w);
    let depth_y = anchor_overlap.h.min(target_overlap.h);

    match (anchor_face, target_face) {
        (FaceSide::Right, FaceSide::Left) => {
            target.x = anchor.x + anchor.width / 2.0 + target.width / 2.0 - depth_x;
            target.y = anchor.y + (anchor_overlap.y - target_overlap.y);
        }
        (FaceSide::Left, FaceSide::Right) => {
            target.x = anchor.x - anchor.width / 2.0 - target.width / 2.0 + depth_x;
            target.y = anchor.y + (anchor_overlap.y - target_overlap.y);
        }
        (FaceSide::Top, FaceSide::Bottom) => {
            target.y = anchor.y + anchor.height / 2.0 + target.height / 2.0 - depth_y;
            target.x = anchor.x + (anchor_overlap.x - target_overlap.x);
        }
        (FaceSide::Bottom, FaceSide::Top) => {
            target.y = anchor.y - anchor.height / 2.0 - target.height / 2.0 + depth_y;
            target.x = anchor.x + (anchor_overlap.x - target_overlap.x);
        }
        _ => return false,
    }
    true
}
