//! Struct definitions and implementations for [`Location`].
//!
//! A `Location` lives in graph space: the planar coordinate system the
//! road network was projected into. Converting graph units into meters
//! is the job of the model's metric scale, see
//! [`RouteModel::metric_scale`](crate::model::RouteModel::metric_scale).

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use vecmath::{vec2_len, vec2_sub};

/// A [`Location`] is an interface type that represents the position of
/// an object in graph space. Typically, this type is used in tandem
/// with the [`Node`](`super::node::Node`) type.
///
/// Coordinates are wrapped in [`OrderedFloat`] so that locations can be
/// hashed and compared.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub x: OrderedFloat<f32>,
    pub y: OrderedFloat<f32>,
}

impl Location {
    /// Creates a location from raw coordinates.
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x: OrderedFloat(x),
            y: OrderedFloat(y),
        }
    }

    /// Straight-line (euclidean) distance to `other`, in graph units.
    pub fn distance(&self, other: &Location) -> f32 {
        vec2_len(vec2_sub(self.as_vec(), other.as_vec()))
    }

    fn as_vec(&self) -> [f32; 2] {
        [self.x.into_inner(), self.y.into_inner()]
    }
}
