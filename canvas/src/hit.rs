#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::camera::Point;
use crate::doc::{Canvas, ItemId};
use crate::group::DraggableGroup;

/// Find the topmost group under `world_pt`.
///
/// Groups are tested against their full bounds, so a sprite clipped away
/// entirely can still be grabbed by its outline area.
#[must_use]
pub fn hit_test(world_pt: Point, canvas: &Canvas) -> Option<ItemId> {
    let local = canvas.map_from_scene(world_pt);
    canvas
        .sorted_children()
        .into_iter()
        .rev()
        .find(|g| g.parent_bounds().contains(local))
        .map(DraggableGroup::id)
}
