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

//! # PlotOptiX Core
//!
//! The integer vocabulary exchanged with the native ray-tracing backend:
//! coordinate display modes, geometry kinds, camera models, light shapes and
//! frame result codes.
//!
//! Every member carries an explicit, stable code. Codes that belonged to
//! retired members stay reserved and are rejected on input, so data written
//! by another build of the backend is never read as the wrong member.
//!
//! ```
//! use plotoptix_core::{EnumError, Geometry, RtEnum};
//!
//! assert_eq!(Geometry::Parallelograms.code(), 7);
//! assert!(matches!(
//!     Geometry::from_code(3),
//!     Err(EnumError::InvalidEnumValue { reserved: Some("ParticleSetVarL"), .. })
//! ));
//! ```

#![warn(missing_docs)]

mod codes;

pub mod camera;
pub mod coordinates;
pub mod error;
pub mod geometry;
pub mod light;
pub mod raw;
pub mod result;
pub mod settings;

pub use camera::Camera;
pub use codes::RtEnum;
pub use coordinates::Coordinates;
pub use error::{EnumError, EnumValue};
pub use geometry::Geometry;
pub use light::Light;
pub use result::RtResult;
pub use settings::ViewerSettings;
