use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod catalog;

pub use catalog::{PartCategory, PartType, UnknownPartType};

/// Unique part identifier (uuid v4 string)
pub type PartId = String;

/// Identifier assigned by the persistence service to a stored project
pub type ProjectId = String;

/// 3-component vector in scene space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 { x: 0.0, y: 0.0, z: 0.0 };
    pub const ONE: Vec3 = Vec3 { x: 1.0, y: 1.0, z: 1.0 };

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Translate by the given deltas
    pub fn offset(&self, dx: f64, dy: f64, dz: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            z: self.z + dz,
        }
    }

    /// Overwrite the axes present in `patch`, keep the rest
    pub fn apply(&mut self, patch: &Vec3Patch) {
        if let Some(x) = patch.x {
            self.x = x;
        }
        if let Some(y) = patch.y {
            self.y = y;
        }
        if let Some(z) = patch.z {
            self.z = z;
        }
    }

    /// Clamp every component to at least `floor`
    pub fn clamp_min(&mut self, floor: f64) {
        self.x = self.x.max(floor);
        self.y = self.y.max(floor);
        self.z = self.z.max(floor);
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

/// Per-axis partial update of a [`Vec3`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Vec3Patch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<f64>,
}

impl Vec3Patch {
    pub fn x(x: f64) -> Self {
        Self {
            x: Some(x),
            ..Default::default()
        }
    }

    pub fn y(y: f64) -> Self {
        Self {
            y: Some(y),
            ..Default::default()
        }
    }

    pub fn z(z: f64) -> Self {
        Self {
            z: Some(z),
            ..Default::default()
        }
    }

    /// Patch that sets all three axes
    pub fn all(v: Vec3) -> Self {
        Self {
            x: Some(v.x),
            y: Some(v.y),
            z: Some(v.z),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_none() && self.y.is_none() && self.z.is_none()
    }
}

impl From<Vec3> for Vec3Patch {
    fn from(v: Vec3) -> Self {
        Self::all(v)
    }
}

/// One placed mechanical component
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    pub id: PartId,
    #[serde(rename = "type")]
    pub part_type: PartType,
    pub name: String,
    pub position: Vec3,
    /// Euler angles in radians
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Part {
    /// Name of the first transform field holding a NaN or infinite value
    pub fn non_finite_field(&self) -> Option<&'static str> {
        if !self.position.is_finite() {
            Some("position")
        } else if !self.rotation.is_finite() {
            Some("rotation")
        } else if !self.scale.is_finite() {
            Some("scale")
        } else {
            None
        }
    }
}

/// Partial update of a part. `name` replaces, vectors merge per axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PartPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Vec3Patch>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<Vec3Patch>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<Vec3Patch>,
}

impl PartPatch {
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn position(patch: impl Into<Vec3Patch>) -> Self {
        Self {
            position: Some(patch.into()),
            ..Default::default()
        }
    }

    pub fn rotation(patch: impl Into<Vec3Patch>) -> Self {
        Self {
            rotation: Some(patch.into()),
            ..Default::default()
        }
    }

    pub fn scale(patch: impl Into<Vec3Patch>) -> Self {
        Self {
            scale: Some(patch.into()),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.position.map_or(true, |p| p.is_empty())
            && self.rotation.map_or(true, |p| p.is_empty())
            && self.scale.map_or(true, |p| p.is_empty())
    }
}

/// Stored project as exchanged with the persistence service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ProjectDocument {
    /// Assigned by the service on first save
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ProjectId>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_date: Option<DateTime<Utc>>,
}

impl ProjectDocument {
    pub fn new(name: impl Into<String>, description: impl Into<String>, parts: Vec<Part>) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: Some(description.into()),
            parts,
            updated_date: None,
        }
    }
}

/// Downloadable export: `{name, parts}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportDocument {
    pub name: String,
    pub parts: Vec<Part>,
}
