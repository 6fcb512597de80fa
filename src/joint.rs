/*
  Copyright 2017 Takashi Ogura

  Licensed under the Apache License, Version 2.0 (the "License");
  you may not use this file except in compliance with the License.
  You may obtain a copy of the License at

      http://www.apache.org/licenses/LICENSE-2.0

  Unless required by applicable law or agreed to in writing, software
  distributed under the License is distributed on an "AS IS" BASIS,
  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
  See the License for the specific language governing permissions and
  limitations under the License.
*/
//! Joint axis codes and per-joint parameters
use nalgebra as na;

use na::{Matrix4, RealField};
use simba::scalar::SupersetOf;
use std::fmt::{self, Display};

/// Axis of rotation of a joint, `X` (roll), `Y` (pitch), `Z` (yaw), or
/// `Identity` for a prismatic joint / fixed offset.
///
/// Each variant maps to one matrix-construction function, so adding a joint
/// type is a new variant plus a new builder, not another branch in callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisCode {
    X,
    Y,
    Z,
    Identity,
}

impl AxisCode {
    /// Parse a single-letter axis code, case-insensitively.
    ///
    /// # Examples
    ///
    /// ```
    /// use armkin::AxisCode;
    ///
    /// assert_eq!(AxisCode::from_code("z"), Some(AxisCode::Z));
    /// assert_eq!(AxisCode::from_code("I"), Some(AxisCode::Identity));
    /// assert_eq!(AxisCode::from_code("w"), None);
    /// ```
    pub fn from_code(code: &str) -> Option<AxisCode> {
        match code.to_ascii_uppercase().as_str() {
            "X" => Some(AxisCode::X),
            "Y" => Some(AxisCode::Y),
            "Z" => Some(AxisCode::Z),
            "I" => Some(AxisCode::Identity),
            _ => None,
        }
    }

    /// Returns true for the rotational variants, which need an angle.
    pub fn requires_angle(self) -> bool {
        !matches!(self, AxisCode::Identity)
    }

    /// Build the 4x4 homogeneous transform for this axis.
    ///
    /// `theta` is in radians and is ignored by `Identity`. The link is
    /// assumed to initially lie along the local X axis.
    pub(crate) fn build<T>(self, length: T, theta: T) -> Matrix4<T>
    where
        T: RealField + SupersetOf<f64>,
    {
        match self {
            AxisCode::X => roll(length, theta),
            AxisCode::Y => pitch(length, theta),
            AxisCode::Z => yaw(length, theta),
            AxisCode::Identity => offset(length),
        }
    }
}

impl Display for AxisCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxisCode::X => write!(f, "X"),
            AxisCode::Y => write!(f, "Y"),
            AxisCode::Z => write!(f, "Z"),
            AxisCode::Identity => write!(f, "I"),
        }
    }
}

/// Kinematic parameters of one joint: a diagnostic name, an axis code,
/// the link length, and the rotation angle in degrees (rotational axes only).
///
/// Lengths may be zero or negative; validation of the axis code and of the
/// angle's presence happens when the frame is built.
#[derive(Debug, Clone)]
pub struct JointParams<T: RealField> {
    pub name: String,
    pub axis_code: String,
    pub link_length: T,
    pub angle_degrees: Option<T>,
}

impl<T: RealField> JointParams<T> {
    /// Parameters for a rotational joint about the given axis.
    pub fn revolute(name: &str, axis_code: &str, link_length: T, angle_degrees: T) -> Self {
        Self {
            name: name.to_owned(),
            axis_code: axis_code.to_owned(),
            link_length,
            angle_degrees: Some(angle_degrees),
        }
    }

    /// Parameters for a prismatic joint or fixed offset along X.
    pub fn prismatic(name: &str, link_length: T) -> Self {
        Self {
            name: name.to_owned(),
            axis_code: "I".to_owned(),
            link_length,
            angle_degrees: None,
        }
    }
}

impl<T: RealField> Display for JointParams<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{} L={}]", self.name, self.axis_code, self.link_length)?;
        if let Some(deg) = &self.angle_degrees {
            write!(f, " {deg}deg")?;
        }
        Ok(())
    }
}

/// Round to 5 decimal places, for display-stable matrix entries.
fn round5<T>(x: T) -> T
where
    T: RealField + SupersetOf<f64>,
{
    let scale: T = na::convert(1.0e5);
    (x * scale.clone()).round() / scale
}

fn roll<T>(length: T, theta: T) -> Matrix4<T>
where
    T: RealField + SupersetOf<f64>,
{
    let c = round5(theta.clone().cos());
    let s = round5(theta.sin());
    // translation stays on the pre-rotation X axis
    #[rustfmt::skip]
    let mat = Matrix4::new(
        T::one(),  T::zero(), T::zero(),  length,
        T::zero(), c.clone(), -s.clone(), T::zero(),
        T::zero(), s,         c,          T::zero(),
        T::zero(), T::zero(), T::zero(),  T::one(),
    );
    mat
}

fn pitch<T>(length: T, theta: T) -> Matrix4<T>
where
    T: RealField + SupersetOf<f64>,
{
    let c = round5(theta.clone().cos());
    let s = round5(theta.sin());
    #[rustfmt::skip]
    let mat = Matrix4::new(
        c.clone(),  T::zero(), s.clone(), length.clone() * c.clone(),
        T::zero(),  T::one(),  T::zero(), T::zero(),
        -s.clone(), T::zero(), c,         length * s,
        T::zero(),  T::zero(), T::zero(), T::one(),
    );
    mat
}

fn yaw<T>(length: T, theta: T) -> Matrix4<T>
where
    T: RealField + SupersetOf<f64>,
{
    let c = round5(theta.clone().cos());
    let s = round5(theta.sin());
    #[rustfmt::skip]
    let mat = Matrix4::new(
        c.clone(), -s.clone(), T::zero(), length.clone() * c.clone(),
        s.clone(), c,          T::zero(), length * s,
        T::zero(), T::zero(),  T::one(),  T::zero(),
        T::zero(), T::zero(),  T::zero(), T::one(),
    );
    mat
}

fn offset<T: RealField>(length: T) -> Matrix4<T> {
    let mut mat = Matrix4::identity();
    mat[(0, 3)] = length;
    mat
}
