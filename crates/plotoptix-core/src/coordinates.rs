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

//! Display modes for the scene bounding coordinates.

use crate::codes::rt_enum;

rt_enum! {
    /// Whether, and how, the scene bounding coordinates are drawn.
    ///
    /// ```
    /// use plotoptix_core::{Coordinates, RtEnum};
    ///
    /// assert_eq!(Coordinates::default(), Coordinates::Hidden);
    /// assert_eq!(Coordinates::try_from(1), Ok(Coordinates::Box));
    /// assert_eq!(Coordinates::reserved_name(2), Some("Axes"));
    /// ```
    #[derive(Default)]
    pub enum Coordinates {
        /// No coordinate overlay.
        #[default]
        Hidden = 0,
        /// The scene bounding box is drawn.
        Box = 1,
    }
    reserved {
        2 => "Axes",
    }
}

impl Coordinates {
    /// Returns `true` if the mode draws anything over the scene.
    pub fn is_visible(self) -> bool {
        self != Coordinates::Hidden
    }
}
