// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Defines light source shapes for the ray tracer.
//!
//! Both shapes are area lights sampled by the backend; they differ only in
//! the surface the samples are drawn from.

use crate::codes::rt_enum;

rt_enum! {
    /// The shape of a light source.
    #[derive(Default)]
    pub enum Light {
        /// A flat, one-sided parallelogram emitter.
        #[default]
        Parallelogram = 0,
        /// A spherical emitter radiating in all directions.
        Spherical = 1,
    }
    reserved {}
}

impl Light {
    /// Returns `true` for the flat parallelogram emitter.
    pub fn is_area_light(self) -> bool {
        matches!(self, Light::Parallelogram)
    }

    /// Returns `true` for the spherical emitter.
    pub fn is_spherical(self) -> bool {
        matches!(self, Light::Spherical)
    }
}
