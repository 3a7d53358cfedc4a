use glam::DVec3;
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeMap, SerializeStruct, Serializer};
use serde_json::Value;

use crate::error::PoseError;

/// A joint rotation at the pose-data boundary, one angle per axis in
/// degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EulerDegrees {
    /// Rotation about the local X (pitch) axis.
    pub x: f64,
    /// Rotation about the local Y (yaw) axis.
    pub y: f64,
    /// Rotation about the local Z (depth) axis.
    pub z: f64,
}

impl EulerDegrees {
    /// Construct from three angles in degrees.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Convert radians (as stored on a joint) to degrees.
    #[must_use]
    pub fn from_radians(radians: DVec3) -> Self {
        Self {
            x: radians.x.to_degrees(),
            y: radians.y.to_degrees(),
            z: radians.z.to_degrees(),
        }
    }

    /// Convert to radians for storage on a joint.
    #[must_use]
    pub fn to_radians(self) -> DVec3 {
        DVec3::new(
            self.x.to_radians(),
            self.y.to_radians(),
            self.z.to_radians(),
        )
    }

    /// Round every axis to the nearest whole degree, halves toward +∞.
    #[must_use]
    pub fn rounded(self) -> Self {
        let round = |v: f64| {
            let r = (v + 0.5).floor();
            // collapse -0.0 so it serializes as 0
            if r == 0.0 {
                0.0
            } else {
                r
            }
        };
        Self {
            x: round(self.x),
            y: round(self.y),
            z: round(self.z),
        }
    }

    /// Permissive decode of a single `{ "x", "y", "z" }` record.
    ///
    /// Returns `None` when the value is not a JSON object. Inside an
    /// object, a missing or non-numeric axis reads as `0`.
    fn from_value(value: &Value) -> Option<Self> {
        let record = value.as_object()?;
        let axis = |key: &str| record.get(key).and_then(Value::as_f64).unwrap_or(0.0);
        Some(Self {
            x: axis("x"),
            y: axis("y"),
            z: axis("z"),
        })
    }
}

/// Whole-valued angles are written as JSON integers so exports read
/// `15`, not `15.0`.
fn serialize_angle<S: Serializer>(value: f64, serializer: S) -> Result<S::Ok, S::Error> {
    const LIMIT: f64 = 9_007_199_254_740_992.0; // 2^53
    if value.fract() == 0.0 && value.abs() < LIMIT {
        serializer.serialize_i64(value as i64)
    } else {
        serializer.serialize_f64(value)
    }
}

struct Angle(f64);

impl Serialize for Angle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_angle(self.0, serializer)
    }
}

impl Serialize for EulerDegrees {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut record = serializer.serialize_struct("EulerDegrees", 3)?;
        record.serialize_field("x", &Angle(self.x))?;
        record.serialize_field("y", &Angle(self.y))?;
        record.serialize_field("z", &Angle(self.z))?;
        record.end()
    }
}

/// Serializable joint rotations keyed by joint name.
///
/// Keys are kept as plain strings: decoding never rejects a name, and the
/// skeleton decides at import time which ones it recognizes. Entries keep
/// insertion order so exports list joints in a stable order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PoseData {
    entries: Vec<(String, EulerDegrees)>,
}

impl PoseData {
    /// An empty pose (importing it changes nothing).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the rotation for `name`.
    pub fn insert(&mut self, name: impl Into<String>, rotation: EulerDegrees) {
        let name = name.into();
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == name) {
            entry.1 = rotation;
        } else {
            self.entries.push((name, rotation));
        }
    }

    /// Rotation recorded for `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<EulerDegrees> {
        self.entries
            .iter()
            .find(|(k, _)| k == name)
            .map(|&(_, rotation)| rotation)
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, EulerDegrees)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the pose carries no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parse pose text.
    ///
    /// Text that is not valid JSON is rejected with
    /// [`PoseError::MalformedJson`]. Anything that does parse is decoded
    /// permissively (see [`from_value`](Self::from_value)).
    pub fn from_json_str(text: &str) -> Result<Self, PoseError> {
        let value: Value = serde_json::from_str(text)?;
        Ok(Self::from_value(&value))
    }

    /// Permissive decode of an already-parsed JSON value.
    ///
    /// This step never fails:
    /// - a non-object root yields an empty pose,
    /// - an entry whose value is not an object is dropped,
    /// - a missing or non-numeric axis reads as `0`,
    /// - unknown joint names are kept (import ignores them),
    /// - fractional and out-of-range angles are kept as-is.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let mut pose = Self::new();
        let Some(root) = value.as_object() else {
            log::warn!("pose JSON root is not an object; nothing to apply");
            return pose;
        };
        for (name, record) in root {
            match EulerDegrees::from_value(record) {
                Some(rotation) => pose.insert(name.clone(), rotation),
                None => log::warn!("skipping pose entry {name:?}: not an object"),
            }
        }
        pose
    }

    /// Serialize as JSON with two-space indentation.
    pub fn to_pretty_json(&self) -> Result<String, PoseError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Serialize for PoseData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, rotation) in &self.entries {
            map.serialize_entry(name, rotation)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for PoseData {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}
