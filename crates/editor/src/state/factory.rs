//! Part construction: new parts from a type tag and duplicates of existing parts

use shared::{Part, PartId, PartType, Vec3};

use super::parts::PartCollection;
use crate::error::Result;

/// Offset applied on X and Z when duplicating
pub const DUPLICATE_OFFSET: f64 = 0.5;

/// Create a part of `part_type` at the origin with unit scale.
///
/// The default name counts the existing parts of the same kind, so the third
/// gear added is "Gear 3".
pub fn create_part(part_type: PartType, existing: &PartCollection) -> Part {
    let n = existing.count_of_type(part_type) + 1;
    Part {
        id: new_part_id(existing),
        part_type,
        name: format!("{} {}", part_type.display_name(), n),
        position: Vec3::ZERO,
        rotation: Vec3::ZERO,
        scale: Vec3::ONE,
    }
}

/// Same as [`create_part`], parsing the type tag first
pub fn create_part_from_tag(tag: &str, existing: &PartCollection) -> Result<Part> {
    let part_type: PartType = tag.parse()?;
    Ok(create_part(part_type, existing))
}

/// Copy of `source` with a fresh id, a " (Copy)" suffix and a small X/Z offset
pub fn duplicate_part(source: &Part) -> Part {
    duplicate_part_with_offset(source, DUPLICATE_OFFSET)
}

pub fn duplicate_part_with_offset(source: &Part, offset: f64) -> Part {
    Part {
        id: uuid::Uuid::new_v4().to_string(),
        part_type: source.part_type,
        name: format!("{} (Copy)", source.name),
        position: source.position.offset(offset, 0.0, offset),
        rotation: source.rotation,
        scale: source.scale,
    }
}

fn new_part_id(existing: &PartCollection) -> PartId {
    loop {
        let id = uuid::Uuid::new_v4().to_string();
        if !existing.contains(&id) {
            return id;
        }
    }
}
