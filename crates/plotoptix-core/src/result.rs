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

//! Outcome codes returned by the backend for each ray-tracing frame.

use crate::codes::rt_enum;

rt_enum! {
    /// The outcome of a single ray-tracing frame.
    pub enum RtResult {
        /// A new frame was traced.
        Success = 0,
        /// The frame completed the requested accumulation passes.
        AccumDone = 1,
        /// Nothing changed since the last frame; no tracing was done.
        NoUpdates = 2,
    }
    reserved {}
}

impl RtResult {
    /// Returns `true` only for [`RtResult::Success`].
    pub fn is_success(self) -> bool {
        self == RtResult::Success
    }

    /// Returns `true` once accumulation has reached its frame limit.
    pub fn accumulation_done(self) -> bool {
        self == RtResult::AccumDone
    }

    /// Returns `true` if the output buffers hold a freshly traced frame.
    pub fn has_new_frame(self) -> bool {
        matches!(self, RtResult::Success | RtResult::AccumDone)
    }
}
