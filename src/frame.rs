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
//! Named homogeneous transformation frames
use nalgebra as na;

use na::{DMatrix, Matrix4, Point3, RealField, Vector3};
use simba::scalar::SupersetOf;
use std::fmt::{self, Display};

use crate::errors::{Error, JointSpecError, Result};
use crate::joint::{AxisCode, JointParams};

/// A named coordinate frame given by a 4x4 homogeneous transformation matrix.
///
/// The top-left 3x3 block is the rotation, the rightmost column holds the
/// translation, and the bottom row is `[0, 0, 0, 1]`. A `Frame` is immutable
/// once built; composition creates new frames.
///
/// # Examples
///
/// ```
/// use armkin::Frame;
///
/// // yaw joint, link length 5, rotated 150 degrees
/// let t_01 = Frame::<f64>::elementary("T_01", "z", 5.0, Some(150.0)).unwrap();
/// assert!((t_01.matrix()[(1, 0)] - 0.5).abs() < 1e-9);
///
/// // unknown axis codes are rejected
/// assert!(Frame::<f64>::elementary("bad", "w", 1.0, None).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Frame<T: RealField> {
    /// Name of this frame, used for diagnostics only
    pub name: String,
    matrix: Matrix4<T>,
}

impl<T> Frame<T>
where
    T: RealField + SupersetOf<f64>,
{
    /// The world frame: the identity transform every pose is relative to.
    pub fn world() -> Self {
        Self {
            name: "world".to_owned(),
            matrix: Matrix4::identity(),
        }
    }

    /// Build the transform of a single joint relative to its predecessor.
    ///
    /// `axis_code` is one of `X`, `Y`, `Z`, `I` (case-insensitive) and
    /// `angle_degrees` must be given exactly when the axis is rotational.
    /// The link is assumed to initially lie along the local X axis; the
    /// trigonometric entries are rounded to 5 decimal places.
    ///
    /// # Examples
    ///
    /// ```
    /// use armkin::Frame;
    ///
    /// let t = Frame::elementary("T_01", "x", 5.0, Some(0.0)).unwrap();
    /// assert_eq!(t.origin(), armkin::Point3::new(5.0, 0.0, 0.0));
    /// ```
    pub fn elementary(
        name: &str,
        axis_code: &str,
        link_length: T,
        angle_degrees: Option<T>,
    ) -> Result<Self> {
        let invalid = |reason| Error::InvalidJointSpecification {
            joint: name.to_owned(),
            reason,
        };
        let axis = AxisCode::from_code(axis_code)
            .ok_or_else(|| invalid(JointSpecError::UnknownAxisCode(axis_code.to_owned())))?;
        let theta = match (axis.requires_angle(), angle_degrees) {
            (true, Some(deg)) => to_radians(deg),
            (true, None) => return Err(invalid(JointSpecError::AngleRequired(axis))),
            (false, Some(_)) => return Err(invalid(JointSpecError::AngleForbidden)),
            (false, None) => T::zero(),
        };
        Ok(Self {
            name: name.to_owned(),
            matrix: axis.build(link_length, theta),
        })
    }

    /// Build the transform of one joint from its parameter set.
    pub fn from_joint(params: &JointParams<T>) -> Result<Self> {
        Self::elementary(
            &params.name,
            &params.axis_code,
            params.link_length.clone(),
            params.angle_degrees.clone(),
        )
    }

    /// Compose two frames: `left` is the accumulated world-relative pose of
    /// the preceding frame, `right` the next joint's transform relative to
    /// it. The result is the standard matrix product `left * right`, a new
    /// frame; neither input is touched.
    ///
    /// Composition of valid homogeneous transforms is again a valid
    /// homogeneous transform.
    pub fn composed(name: &str, left: &Frame<T>, right: &Frame<T>) -> Self {
        Self {
            name: name.to_owned(),
            matrix: &left.matrix * &right.matrix,
        }
    }

    /// Adopt a raw matrix coming from outside the crate.
    ///
    /// Anything that is not exactly 4x4 is rejected with
    /// [`Error::DimensionMismatch`], and a bottom row other than
    /// `[0, 0, 0, 1]` with [`Error::NotHomogeneous`]. The rotation block is
    /// taken as-is; entries rounded the way the elementary builders round
    /// them stay within tolerance of orthonormal.
    pub fn from_matrix(name: &str, matrix: &DMatrix<T>) -> Result<Self> {
        if matrix.nrows() != 4 || matrix.ncols() != 4 {
            return Err(Error::DimensionMismatch {
                rows: matrix.nrows(),
                cols: matrix.ncols(),
            });
        }
        let bottom_row_ok = matrix[(3, 0)] == T::zero()
            && matrix[(3, 1)] == T::zero()
            && matrix[(3, 2)] == T::zero()
            && matrix[(3, 3)] == T::one();
        if !bottom_row_ok {
            return Err(Error::NotHomogeneous {
                frame: name.to_owned(),
            });
        }
        Ok(Self {
            name: name.to_owned(),
            matrix: Matrix4::from_fn(|r, c| matrix[(r, c)].clone()),
        })
    }

    /// The 4x4 homogeneous transformation matrix of this frame.
    #[inline]
    pub fn matrix(&self) -> &Matrix4<T> {
        &self.matrix
    }

    /// Position of this frame's origin: column 3, rows 0..3.
    pub fn origin(&self) -> Point3<T> {
        Point3::new(
            self.matrix[(0, 3)].clone(),
            self.matrix[(1, 3)].clone(),
            self.matrix[(2, 3)].clone(),
        )
    }

    /// Direction of this frame's X axis (matrix column 0).
    pub fn x_axis(&self) -> Vector3<T> {
        self.matrix.fixed_view::<3, 1>(0, 0).into_owned()
    }

    /// Direction of this frame's Y axis (matrix column 1).
    pub fn y_axis(&self) -> Vector3<T> {
        self.matrix.fixed_view::<3, 1>(0, 1).into_owned()
    }

    /// Direction of this frame's Z axis (matrix column 2).
    pub fn z_axis(&self) -> Vector3<T> {
        self.matrix.fixed_view::<3, 1>(0, 2).into_owned()
    }
}

impl<T: RealField> Display for Frame<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}:", self.name)?;
        write!(f, "{}", self.matrix)
    }
}

fn to_radians<T>(degrees: T) -> T
where
    T: RealField + SupersetOf<f64>,
{
    degrees * T::pi() / na::convert(180.0)
}
