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

//! Camera projection models.

use crate::codes::rt_enum;

rt_enum! {
    /// The projection model used to generate primary rays.
    #[derive(Default)]
    pub enum Camera {
        /// An ideal pinhole camera; everything is in focus.
        #[default]
        Pinhole = 0,
        /// A thin-lens camera with depth of field.
        DoF = 1,
    }
    reserved {
        2 => "Ortho",
    }
}

impl Camera {
    /// Returns `true` if the camera has a focal plane and aperture.
    pub fn has_focus(self) -> bool {
        matches!(self, Camera::DoF)
    }
}
