use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Library category a part kind is listed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PartCategory {
    Transmission,
    Power,
    Mechanical,
    Structure,
    Fasteners,
    Robotics,
    LinearMotion,
    Linkages,
}

impl PartCategory {
    /// All categories in library order
    pub fn all() -> &'static [PartCategory] {
        &[
            PartCategory::Transmission,
            PartCategory::Power,
            PartCategory::Mechanical,
            PartCategory::Structure,
            PartCategory::Fasteners,
            PartCategory::Robotics,
            PartCategory::LinearMotion,
            PartCategory::Linkages,
        ]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PartCategory::Transmission => "Transmission",
            PartCategory::Power => "Power",
            PartCategory::Mechanical => "Mechanical",
            PartCategory::Structure => "Structure",
            PartCategory::Fasteners => "Fasteners",
            PartCategory::Robotics => "Robotics",
            PartCategory::LinearMotion => "Linear Motion",
            PartCategory::Linkages => "Linkages",
        }
    }
}

/// Closed vocabulary of mechanical part kinds.
///
/// The serialized form is the kebab-case tag (`"gear"`, `"bevel-gear"`, ...)
/// used by saved projects, exports and the command protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PartType {
    // Transmission
    Gear,
    BevelGear,
    WormGear,
    Rack,
    Sprocket,
    Shaft,
    Bearing,
    Pulley,
    Belt,
    Chain,
    Coupler,
    Flywheel,
    Cam,
    // Power
    Motor,
    ServoMotor,
    StepperMotor,
    Piston,
    PneumaticCylinder,
    HydraulicCylinder,
    // Mechanical
    Spring,
    Damper,
    Crankshaft,
    // Structure
    Bracket,
    Plate,
    Beam,
    Frame,
    Enclosure,
    // Fasteners
    Bolt,
    Nut,
    Washer,
    Screw,
    Rivet,
    // Robotics
    ArmSegment,
    RoboticJoint,
    Gripper,
    EndEffector,
    RobotBase,
    // Linear motion
    LinearActuator,
    LinearRail,
    LeadScrew,
    Slider,
    // Linkages
    ConnectingRod,
    Lever,
    RockerArm,
    LinkageBar,
    BallJoint,
    UniversalJoint,
    Hinge,
}

const ALL_PART_TYPES: [PartType; 48] = [
    PartType::Gear,
    PartType::BevelGear,
    PartType::WormGear,
    PartType::Rack,
    PartType::Sprocket,
    PartType::Shaft,
    PartType::Bearing,
    PartType::Pulley,
    PartType::Belt,
    PartType::Chain,
    PartType::Coupler,
    PartType::Flywheel,
    PartType::Cam,
    PartType::Motor,
    PartType::ServoMotor,
    PartType::StepperMotor,
    PartType::Piston,
    PartType::PneumaticCylinder,
    PartType::HydraulicCylinder,
    PartType::Spring,
    PartType::Damper,
    PartType::Crankshaft,
    PartType::Bracket,
    PartType::Plate,
    PartType::Beam,
    PartType::Frame,
    PartType::Enclosure,
    PartType::Bolt,
    PartType::Nut,
    PartType::Washer,
    PartType::Screw,
    PartType::Rivet,
    PartType::ArmSegment,
    PartType::RoboticJoint,
    PartType::Gripper,
    PartType::EndEffector,
    PartType::RobotBase,
    PartType::LinearActuator,
    PartType::LinearRail,
    PartType::LeadScrew,
    PartType::Slider,
    PartType::ConnectingRod,
    PartType::Lever,
    PartType::RockerArm,
    PartType::LinkageBar,
    PartType::BallJoint,
    PartType::UniversalJoint,
    PartType::Hinge,
];

impl PartType {
    /// Every supported part kind, in library order
    pub fn all() -> &'static [PartType] {
        &ALL_PART_TYPES
    }

    /// Part kinds listed under a category
    pub fn in_category(category: PartCategory) -> impl Iterator<Item = PartType> {
        ALL_PART_TYPES
            .iter()
            .copied()
            .filter(move |t| t.category() == category)
    }

    /// Serialized tag (`"bevel-gear"`)
    pub fn tag(&self) -> &'static str {
        match self {
            PartType::Gear => "gear",
            PartType::BevelGear => "bevel-gear",
            PartType::WormGear => "worm-gear",
            PartType::Rack => "rack",
            PartType::Sprocket => "sprocket",
            PartType::Shaft => "shaft",
            PartType::Bearing => "bearing",
            PartType::Pulley => "pulley",
            PartType::Belt => "belt",
            PartType::Chain => "chain",
            PartType::Coupler => "coupler",
            PartType::Flywheel => "flywheel",
            PartType::Cam => "cam",
            PartType::Motor => "motor",
            PartType::ServoMotor => "servo-motor",
            PartType::StepperMotor => "stepper-motor",
            PartType::Piston => "piston",
            PartType::PneumaticCylinder => "pneumatic-cylinder",
            PartType::HydraulicCylinder => "hydraulic-cylinder",
            PartType::Spring => "spring",
            PartType::Damper => "damper",
            PartType::Crankshaft => "crankshaft",
            PartType::Bracket => "bracket",
            PartType::Plate => "plate",
            PartType::Beam => "beam",
            PartType::Frame => "frame",
            PartType::Enclosure => "enclosure",
            PartType::Bolt => "bolt",
            PartType::Nut => "nut",
            PartType::Washer => "washer",
            PartType::Screw => "screw",
            PartType::Rivet => "rivet",
            PartType::ArmSegment => "arm-segment",
            PartType::RoboticJoint => "robotic-joint",
            PartType::Gripper => "gripper",
            PartType::EndEffector => "end-effector",
            PartType::RobotBase => "robot-base",
            PartType::LinearActuator => "linear-actuator",
            PartType::LinearRail => "linear-rail",
            PartType::LeadScrew => "lead-screw",
            PartType::Slider => "slider",
            PartType::ConnectingRod => "connecting-rod",
            PartType::Lever => "lever",
            PartType::RockerArm => "rocker-arm",
            PartType::LinkageBar => "linkage-bar",
            PartType::BallJoint => "ball-joint",
            PartType::UniversalJoint => "universal-joint",
            PartType::Hinge => "hinge",
        }
    }

    /// Name used for default part labels ("Gear 1", "Bevel Gear 2")
    pub fn display_name(&self) -> &'static str {
        match self {
            PartType::Gear => "Gear",
            PartType::BevelGear => "Bevel Gear",
            PartType::WormGear => "Worm Gear",
            PartType::Rack => "Gear Rack",
            PartType::Sprocket => "Sprocket",
            PartType::Shaft => "Shaft",
            PartType::Bearing => "Bearing",
            PartType::Pulley => "Pulley",
            PartType::Belt => "Belt",
            PartType::Chain => "Chain",
            PartType::Coupler => "Coupler",
            PartType::Flywheel => "Flywheel",
            PartType::Cam => "Cam",
            PartType::Motor => "Motor",
            PartType::ServoMotor => "Servo Motor",
            PartType::StepperMotor => "Stepper Motor",
            PartType::Piston => "Piston",
            PartType::PneumaticCylinder => "Pneumatic Cylinder",
            PartType::HydraulicCylinder => "Hydraulic Cylinder",
            PartType::Spring => "Spring",
            PartType::Damper => "Damper",
            PartType::Crankshaft => "Crankshaft",
            PartType::Bracket => "Bracket",
            PartType::Plate => "Plate",
            PartType::Beam => "I-Beam",
            PartType::Frame => "Frame",
            PartType::Enclosure => "Enclosure",
            PartType::Bolt => "Bolt",
            PartType::Nut => "Nut",
            PartType::Washer => "Washer",
            PartType::Screw => "Screw",
            PartType::Rivet => "Rivet",
            PartType::ArmSegment => "Arm Segment",
            PartType::RoboticJoint => "Robotic Joint",
            PartType::Gripper => "Gripper",
            PartType::EndEffector => "End Effector",
            PartType::RobotBase => "Robot Base",
            PartType::LinearActuator => "Linear Actuator",
            PartType::LinearRail => "Linear Rail",
            PartType::LeadScrew => "Lead Screw",
            PartType::Slider => "Slider Block",
            PartType::ConnectingRod => "Connecting Rod",
            PartType::Lever => "Lever",
            PartType::RockerArm => "Rocker Arm",
            PartType::LinkageBar => "Linkage Bar",
            PartType::BallJoint => "Ball Joint",
            PartType::UniversalJoint => "U-Joint",
            PartType::Hinge => "Hinge",
        }
    }

    /// Label shown on the library button (differs from the display name for a few kinds)
    pub fn library_label(&self) -> &'static str {
        match self {
            PartType::Gear => "Spur Gear",
            PartType::Motor => "DC Motor",
            PartType::PneumaticCylinder => "Pneumatic Cyl",
            PartType::HydraulicCylinder => "Hydraulic Cyl",
            other => other.display_name(),
        }
    }

    pub fn category(&self) -> PartCategory {
        use PartType::*;
        match self {
            Gear | BevelGear | WormGear | Rack | Sprocket | Shaft | Bearing | Pulley | Belt
            | Chain | Coupler | Flywheel | Cam => PartCategory::Transmission,
            Motor | ServoMotor | StepperMotor | Piston | PneumaticCylinder
            | HydraulicCylinder => PartCategory::Power,
            Spring | Damper | Crankshaft => PartCategory::Mechanical,
            Bracket | Plate | Beam | Frame | Enclosure => PartCategory::Structure,
            Bolt | Nut | Washer | Screw | Rivet => PartCategory::Fasteners,
            ArmSegment | RoboticJoint | Gripper | EndEffector | RobotBase => {
                PartCategory::Robotics
            }
            LinearActuator | LinearRail | LeadScrew | Slider => PartCategory::LinearMotion,
            ConnectingRod | Lever | RockerArm | LinkageBar | BallJoint | UniversalJoint
            | Hinge => PartCategory::Linkages,
        }
    }
}

impl std::fmt::Display for PartType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// Tag that is not part of the part vocabulary
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown part type '{0}'")]
pub struct UnknownPartType(pub String);

impl FromStr for PartType {
    type Err = UnknownPartType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        ALL_PART_TYPES
            .iter()
            .copied()
            .find(|t| t.tag() == tag)
            .ok_or_else(|| UnknownPartType(s.to_string()))
    }
}
