//! Factory functions for creating test data.
//!
//! Convenient helpers to construct `Part` and `ProjectDocument` values used in
//! tests and example command scripts.

use shared::*;

// ── Part factories ──────────────────────────────────────────────

/// Part of the given kind at the origin with unit scale.
pub fn part(id: &str, part_type: PartType, name: &str) -> Part {
    Part {
        id: id.to_string(),
        part_type,
        name: name.to_string(),
        position: Vec3::ZERO,
        rotation: Vec3::ZERO,
        scale: Vec3::ONE,
    }
}

/// Part at a specific position.
pub fn part_at(id: &str, part_type: PartType, name: &str, pos: [f64; 3]) -> Part {
    Part {
        position: Vec3::new(pos[0], pos[1], pos[2]),
        ..part(id, part_type, name)
    }
}

/// Gear named "Gear {n}".
pub fn gear(id: &str, n: usize) -> Part {
    part(id, PartType::Gear, &format!("Gear {n}"))
}

/// Shaft named "Shaft {n}".
pub fn shaft(id: &str, n: usize) -> Part {
    part(id, PartType::Shaft, &format!("Shaft {n}"))
}

// ── Document factories ──────────────────────────────────────────

/// Stored project with an id.
pub fn stored_project(id: &str, name: &str, parts: Vec<Part>) -> ProjectDocument {
    ProjectDocument {
        id: Some(id.to_string()),
        name: name.to_string(),
        description: Some(format!("{name} description")),
        parts,
        updated_date: None,
    }
}

/// Small gear train: motor, shaft, two gears.
pub fn gear_train_project(id: &str) -> ProjectDocument {
    stored_project(
        id,
        "Gear Train",
        vec![
            part("m1", PartType::Motor, "Motor 1"),
            part_at("s1", PartType::Shaft, "Shaft 1", [1.0, 0.0, 0.0]),
            part_at("g1", PartType::Gear, "Gear 1", [1.0, 0.5, 0.0]),
            part_at("g2", PartType::Gear, "Gear 2", [2.0, 0.5, 0.0]),
        ],
    )
}
