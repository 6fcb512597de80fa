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
use log::debug;
use nalgebra::RealField;
use simba::scalar::SupersetOf;
use std::fmt::{self, Display};

use crate::errors::Result;
use crate::frame::Frame;
use crate::joint::JointParams;
use crate::scene::Scene;

/// Serial kinematic chain of world-relative frames.
///
/// Assembly runs strictly left to right: each joint's transform is built
/// relative to its immediate predecessor and composed onto the previous
/// frame's world-relative pose. Frame 0 is always the world frame
/// (identity), frame `i` is the pose of joint `i` relative to the world
/// frame, and the sequence never changes after assembly.
///
/// # Examples
///
/// ```
/// use armkin::{Chain, JointParams};
///
/// let chain = Chain::from_joints(&[
///     JointParams::revolute("T_01", "z", 5.0, 150.0),
///     JointParams::revolute("T_12", "y", 4.0, 100.0),
///     JointParams::revolute("T_23", "z", 3.0, -90.0),
/// ])
/// .unwrap();
///
/// assert_eq!(chain.frames().len(), 4);
/// assert_eq!(chain.frames()[0].name, "world");
/// assert_eq!(chain.end_frame().name, "T_23");
/// println!("{chain}");
/// ```
#[derive(Debug, Clone)]
pub struct Chain<T: RealField> {
    frames: Vec<Frame<T>>,
}

impl<T> Chain<T>
where
    T: RealField + SupersetOf<f64>,
{
    /// Assemble a chain from per-joint parameters.
    ///
    /// The first invalid joint aborts assembly; no partially valid frame
    /// sequence is ever returned.
    pub fn from_joints(joints: &[JointParams<T>]) -> Result<Self> {
        let mut frames = vec![Frame::world()];
        let mut pose = Frame::world();
        for params in joints {
            let local = Frame::from_joint(params)?;
            pose = Frame::composed(&local.name, &pose, &local);
            debug!("assembled frame {} at {:?}", pose.name, pose.origin());
            frames.push(pose.clone());
        }
        Ok(Self { frames })
    }

    /// All frames in world-relative form, world frame first.
    #[inline]
    pub fn frames(&self) -> &[Frame<T>] {
        &self.frames
    }

    /// The pose of the last joint, or the world frame for an empty chain.
    pub fn end_frame(&self) -> &Frame<T> {
        &self.frames[self.frames.len() - 1]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Frame<T>> {
        self.frames.iter()
    }

    /// Scene description of this chain for a 3D visualizer.
    pub fn scene(&self) -> Scene<T> {
        Scene::from_frames(&self.frames)
    }
}

impl<T: RealField> Display for Chain<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Frame List: ")?;
        let mut first = true;
        for frame in &self.frames {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{}", frame.name)?;
            first = false;
        }
        Ok(())
    }
}
