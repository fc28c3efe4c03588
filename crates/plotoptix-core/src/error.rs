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

//! Defines the error type returned when a value cannot be mapped onto the
//! backend vocabulary.

use std::fmt;

/// The input presented for a member, as a code or as a name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnumValue {
    /// An integer code.
    Code(i32),
    /// A member name.
    Name(String),
}

impl fmt::Display for EnumValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnumValue::Code(code) => write!(f, "{code}"),
            EnumValue::Name(name) => write!(f, "'{name}'"),
        }
    }
}

/// An error raised while converting integers, names or buffers into
/// enumeration members.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnumError {
    /// The code or name does not belong to the enumeration.
    InvalidEnumValue {
        /// The name of the enumeration that rejected the value.
        enum_name: &'static str,
        /// The rejected code or name.
        value: EnumValue,
        /// The retired member name, if the value is a reserved gap.
        reserved: Option<&'static str>,
    },
    /// A raw buffer does not hold a whole number of codes.
    BufferLength {
        /// The length of the buffer, in bytes.
        len: usize,
        /// The width of a single code, in bytes.
        element_size: usize,
    },
    /// The settings could not be encoded or decoded.
    Settings(String),
}

impl fmt::Display for EnumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnumError::InvalidEnumValue {
                enum_name,
                value,
                reserved: Some(retired),
            } => write!(
                f,
                "Invalid {enum_name} value {value}: reserved for retired member '{retired}'"
            ),
            EnumError::InvalidEnumValue {
                enum_name, value, ..
            } => write!(f, "Invalid {enum_name} value {value}"),
            EnumError::BufferLength { len, element_size } => write!(
                f,
                "Buffer of {len} bytes is not a multiple of the {element_size}-byte code width"
            ),
            EnumError::Settings(details) => write!(f, "Invalid viewer settings: {details}"),
        }
    }
}

impl std::error::Error for EnumError {}

impl From<serde_json::Error> for EnumError {
    fn from(err: serde_json::Error) -> Self {
        EnumError::Settings(err.to_string())
    }
}

impl From<bincode::error::EncodeError> for EnumError {
    fn from(err: bincode::error::EncodeError) -> Self {
        EnumError::Settings(err.to_string())
    }
}

impl From<bincode::error::DecodeError> for EnumError {
    fn from(err: bincode::error::DecodeError) -> Self {
        EnumError::Settings(err.to_string())
    }
}
