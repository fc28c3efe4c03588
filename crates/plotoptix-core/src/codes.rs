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

//! The common contract shared by every enumeration exchanged with the
//! native backend.
//!
//! Each enumeration is declared through [`rt_enum!`], which pins every member
//! to an explicit `i32` discriminant and records the codes of retired members.
//! A retired code can never be given to a new member: the declaration fails
//! to compile.

use crate::error::{EnumError, EnumValue};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

/// A closed set of named integer codes understood by the native backend.
///
/// # Examples
///
/// ```
/// use plotoptix_core::{Geometry, RtEnum};
///
/// assert_eq!(Geometry::from_code(6), Ok(Geometry::BezierChain));
/// assert_eq!(Geometry::BezierChain.name(), "BezierChain");
/// assert!(Geometry::from_code(3).is_err());
/// ```
pub trait RtEnum: Copy + Eq + Sized + 'static {
    /// The name of the enumeration, used in error messages.
    const NAME: &'static str;

    /// Every member, in ascending code order.
    const ALL: &'static [Self];

    /// Codes held back for retired members, paired with the retired name.
    const RESERVED: &'static [(i32, &'static str)];

    /// Returns the integer code of this member.
    fn code(self) -> i32;

    /// Returns the name of this member.
    fn name(self) -> &'static str;

    /// Looks up the member with the given code.
    ///
    /// # Errors
    /// Returns [`EnumError::InvalidEnumValue`] if no member carries `code`,
    /// including when `code` is a reserved gap.
    fn from_code(code: i32) -> Result<Self, EnumError> {
        Self::ALL
            .iter()
            .copied()
            .find(|member| member.code() == code)
            .ok_or(EnumError::InvalidEnumValue {
                enum_name: Self::NAME,
                value: EnumValue::Code(code),
                reserved: Self::reserved_name(code),
            })
    }

    /// Looks up the member with the given name. Matching is case-sensitive.
    ///
    /// # Errors
    /// Returns [`EnumError::InvalidEnumValue`] if no member is called `name`.
    fn from_name(name: &str) -> Result<Self, EnumError> {
        Self::ALL
            .iter()
            .copied()
            .find(|member| member.name() == name)
            .ok_or_else(|| EnumError::InvalidEnumValue {
                enum_name: Self::NAME,
                value: EnumValue::Name(name.to_string()),
                reserved: None,
            })
    }

    /// Returns the retired member name if `code` is a reserved gap.
    fn reserved_name(code: i32) -> Option<&'static str> {
        Self::RESERVED
            .iter()
            .find(|(reserved, _)| *reserved == code)
            .map(|(_, retired)| *retired)
    }
}

/// How a member may be written in human-readable input.
#[derive(Deserialize)]
#[serde(untagged)]
enum CodeOrName {
    Code(i32),
    Name(String),
}

/// Deserializes a member from its code, or from its name when the format is
/// human-readable.
pub(crate) fn deserialize_member<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: RtEnum,
    D: Deserializer<'de>,
{
    if deserializer.is_human_readable() {
        match CodeOrName::deserialize(deserializer)? {
            CodeOrName::Code(code) => T::from_code(code),
            CodeOrName::Name(name) => T::from_name(&name),
        }
        .map_err(D::Error::custom)
    } else {
        let code = i32::deserialize(deserializer)?;
        T::from_code(code).map_err(D::Error::custom)
    }
}

/// Declares an enumeration whose members carry explicit, stable codes.
///
/// Codes are forwarded as single tokens so the bytemuck derives can read the
/// discriminants. The `reserved` block lists retired codes. A member reusing
/// one of them is rejected at compile time.
macro_rules! rt_enum {
    (
        $(#[$meta:meta])*
        pub enum $Name:ident {
            $(
                $(#[$vmeta:meta])*
                $Variant:ident = $code:tt
            ),+ $(,)?
        }
        reserved {
            $($rcode:tt => $rname:literal),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            ::bytemuck::NoUninit,
            ::bytemuck::CheckedBitPattern,
        )]
        #[repr(i32)]
        pub enum $Name {
            $(
                $(#[$vmeta])*
                $Variant = $code,
            )+
        }

        const _: () = {
            let codes: &[i32] = &[$($code),+];
            let reserved: &[i32] = &[$($rcode),*];
            let mut i = 0;
            while i < codes.len() {
                let mut j = 0;
                while j < reserved.len() {
                    assert!(
                        codes[i] != reserved[j],
                        concat!("a member of ", stringify!($Name), " reuses a reserved code")
                    );
                    j += 1;
                }
                i += 1;
            }
        };

        impl $crate::codes::RtEnum for $Name {
            const NAME: &'static str = stringify!($Name);
            const ALL: &'static [Self] = &[$(Self::$Variant),+];
            const RESERVED: &'static [(i32, &'static str)] = &[$(($rcode, $rname)),*];

            fn code(self) -> i32 {
                self as i32
            }

            fn name(self) -> &'static str {
                match self {
                    $(Self::$Variant => stringify!($Variant),)+
                }
            }
        }

        impl TryFrom<i32> for $Name {
            type Error = $crate::error::EnumError;

            fn try_from(code: i32) -> Result<Self, Self::Error> {
                <Self as $crate::codes::RtEnum>::from_code(code)
            }
        }

        impl From<$Name> for i32 {
            fn from(member: $Name) -> Self {
                member as i32
            }
        }

        impl ::std::str::FromStr for $Name {
            type Err = $crate::error::EnumError;

            fn from_str(name: &str) -> Result<Self, Self::Err> {
                <Self as $crate::codes::RtEnum>::from_name(name)
            }
        }

        impl ::std::fmt::Display for $Name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::codes::RtEnum::name(*self))
            }
        }

        impl ::serde::Serialize for $Name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_i32(*self as i32)
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $Name {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                $crate::codes::deserialize_member(deserializer)
            }
        }
    };
}

pub(crate) use rt_enum;
