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

//! Raw views over code buffers shared with the native backend.
//!
//! The backend stores every code as a native-endian 32-bit integer. Because
//! each enumeration is `#[repr(i32)]`, a slice of members already has that
//! layout and can be handed over without copying. The reverse direction is
//! checked: a buffer containing a code outside the enumeration is rejected.

use crate::codes::RtEnum;
use crate::error::{EnumError, EnumValue};
use bytemuck::{CheckedBitPattern, NoUninit};
use std::mem::size_of;

const CODE_WIDTH: usize = size_of::<i32>();

/// Returns the bytes of a member slice, ready to be uploaded to the backend.
pub fn as_bytes<T: RtEnum + NoUninit>(members: &[T]) -> &[u8] {
    bytemuck::cast_slice(members)
}

/// Reinterprets a slice of codes as members without copying.
///
/// # Errors
/// Returns [`EnumError::InvalidEnumValue`] for the first code that is not a
/// member of `T`.
pub fn view_codes<T: RtEnum + CheckedBitPattern>(codes: &[i32]) -> Result<&[T], EnumError> {
    if let Some(err) = codes.iter().find_map(|&code| T::from_code(code).err()) {
        log::warn!("Rejecting {} code buffer: {err}", T::NAME);
        return Err(err);
    }
    // Every code was validated above, so the checked cast cannot fail.
    Ok(bytemuck::checked::cast_slice(codes))
}

/// Decodes members from a byte buffer of arbitrary alignment.
///
/// # Errors
/// Returns [`EnumError::BufferLength`] if `bytes` does not hold a whole number
/// of codes, or [`EnumError::InvalidEnumValue`] for the first invalid code.
pub fn read_codes<T: RtEnum>(bytes: &[u8]) -> Result<Vec<T>, EnumError> {
    if !bytes.len().is_multiple_of(CODE_WIDTH) {
        return Err(EnumError::BufferLength {
            len: bytes.len(),
            element_size: CODE_WIDTH,
        });
    }

    bytes
        .chunks_exact(CODE_WIDTH)
        .enumerate()
        .map(|(index, chunk)| {
            let code: i32 = bytemuck::pod_read_unaligned(chunk);
            T::from_code(code).inspect_err(|err| {
                log::warn!("Rejecting {} code at index {index}: {err}", T::NAME);
            })
        })
        .collect()
}
