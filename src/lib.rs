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
//! # Robotic arm pose computation using [nalgebra](https://nalgebra.org).
//!
//! `armkin` has below functionalities
//!
//! 1. Per-joint homogeneous transformation matrices (roll/pitch/yaw/prismatic)
//! 1. Chain composition of frames relative to the world frame
//! 1. Scene description for 3D visualizers
//!
//! See `Chain` as the top level interface.
//!
//! ```
//! use armkin::{Chain, JointParams};
//!
//! let chain = Chain::from_joints(&[
//!     JointParams::revolute("T_01", "z", 5.0, 150.0),
//!     JointParams::revolute("T_12", "y", 4.0, 100.0),
//! ])
//! .unwrap();
//!
//! // world frame + one world-relative frame per joint
//! assert_eq!(chain.frames().len(), 3);
//! let end = chain.end_frame();
//! println!("{end}");
//! ```
mod chain;
mod errors;
mod frame;
pub mod joint;
pub mod scene;

use nalgebra as na;

pub use self::chain::Chain;
pub use self::errors::{Error, JointSpecError, Result};
pub use self::frame::Frame;
pub use self::joint::{AxisCode, JointParams};
pub use self::scene::Scene;

// re-export the nalgebra types that appear in the public API
pub use na::{Matrix4, Point3, RealField, Vector3};
pub use simba::scalar::{SubsetOf, SupersetOf};
