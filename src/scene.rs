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
//! Scene description handed to 3D visualizers
//!
//! A [`Scene`] is a plain value: lines and markers in world coordinates,
//! produced statelessly from an ordered frame sequence. Renderers draw it
//! however they like; nothing here touches a window or global plot state.
use nalgebra::{Point3, RealField};
use simba::scalar::SupersetOf;

use crate::frame::Frame;

/// RGBA color of a scene element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// X axes
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    /// Y axes
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
    /// Z axes
    pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
    /// Link segments
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    /// Joint markers
    pub const ORANGE: Color = Color::rgb(1.0, 0.65, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Color {
        Color { r, g, b, a: 1.0 }
    }
}

/// A straight line segment in world coordinates
#[derive(Debug, Clone)]
pub struct Line<T: RealField> {
    pub from: Point3<T>,
    pub to: Point3<T>,
    pub color: Color,
    pub width: f32,
}

/// A point marker in world coordinates
#[derive(Debug, Clone)]
pub struct Marker<T: RealField> {
    pub position: Point3<T>,
    pub color: Color,
    pub size: f32,
}

const AXIS_WIDTH: f32 = 1.0;
const WORLD_AXIS_WIDTH: f32 = 2.0;
const SEGMENT_WIDTH: f32 = 2.5;
const JOINT_SIZE: f32 = 9.0;

/// Everything a visualizer needs to draw a chain
///
/// Per frame: a unit-length line along each of its axes (X red, Y blue,
/// Z green, the world frame drawn thicker) and an orange marker at its
/// origin. Consecutive origins are connected by black link segments.
///
/// # Examples
///
/// ```
/// use armkin::{Chain, JointParams, Scene};
///
/// let chain = Chain::from_joints(&[JointParams::revolute("T_01", "z", 5.0, 150.0)]).unwrap();
/// let scene = Scene::from_frames(chain.frames());
/// // 3 axis lines per frame + 1 link segment
/// assert_eq!(scene.lines.len(), 7);
/// assert_eq!(scene.markers.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Scene<T: RealField> {
    pub lines: Vec<Line<T>>,
    pub markers: Vec<Marker<T>>,
}

impl<T> Scene<T>
where
    T: RealField + SupersetOf<f64>,
{
    /// Build the scene for an ordered, world-relative frame sequence.
    pub fn from_frames(frames: &[Frame<T>]) -> Self {
        let mut lines = Vec::with_capacity(frames.len() * 4);
        let mut markers = Vec::with_capacity(frames.len());
        let mut previous_origin: Option<Point3<T>> = None;
        for (i, frame) in frames.iter().enumerate() {
            let width = if i == 0 { WORLD_AXIS_WIDTH } else { AXIS_WIDTH };
            let origin = frame.origin();
            let axes = [
                (frame.x_axis(), Color::RED),
                (frame.y_axis(), Color::BLUE),
                (frame.z_axis(), Color::GREEN),
            ];
            for (axis, color) in axes {
                lines.push(Line {
                    from: origin.clone(),
                    to: origin.clone() + axis,
                    color,
                    width,
                });
            }
            if let Some(prev) = previous_origin {
                lines.push(Line {
                    from: prev,
                    to: origin.clone(),
                    color: Color::BLACK,
                    width: SEGMENT_WIDTH,
                });
            }
            markers.push(Marker {
                position: origin.clone(),
                color: Color::ORANGE,
                size: JOINT_SIZE,
            });
            previous_origin = Some(origin);
        }
        Self { lines, markers }
    }
}
