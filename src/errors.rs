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
use crate::joint::AxisCode;

pub type Result<T> = std::result::Result<T, Error>;

/// The reason a frame could not be built
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The joint parameters do not describe a buildable transform.
    ///
    /// This is a structural error in the chain definition and aborts
    /// assembly of the affected frame.
    #[error("invalid joint {joint:?}: {reason}")]
    InvalidJointSpecification { joint: String, reason: JointSpecError },
    /// A raw matrix with a shape other than 4x4 was supplied.
    #[error("homogeneous transforms are 4x4, found {rows}x{cols}")]
    DimensionMismatch { rows: usize, cols: usize },
    /// A raw 4x4 matrix whose bottom row is not `[0, 0, 0, 1]` was supplied.
    #[error("frame {frame:?}: bottom row of a homogeneous transform must be [0, 0, 0, 1]")]
    NotHomogeneous { frame: String },
}

/// Detail for [`Error::InvalidJointSpecification`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum JointSpecError {
    #[error("unrecognized axis code {0:?}")]
    UnknownAxisCode(String),
    #[error("axis {0} requires a rotation angle")]
    AngleRequired(AxisCode),
    #[error("identity/prismatic joints take no rotation angle")]
    AngleForbidden,
}
