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

//! Primitive kinds for renderable objects.
//!
//! Codes 2 to 5 belonged to particle and curve variants that the backend no
//! longer builds. They stay reserved so that scenes saved by older backends
//! are rejected instead of being read as a different primitive.

use crate::codes::rt_enum;

rt_enum! {
    /// The primitive shape a renderable object is built from.
    ///
    /// # Examples
    ///
    /// ```
    /// use plotoptix_core::{Geometry, RtEnum};
    ///
    /// let kind: Geometry = "Parallelograms".parse().unwrap();
    /// assert_eq!(kind.code(), 7);
    /// ```
    #[derive(Default)]
    pub enum Geometry {
        /// The primitive kind is not known.
        #[default]
        Unknown = 0,
        /// A set of spherical particles.
        ParticleSet = 1,
        /// Connected segments of cubic Bezier curves.
        BezierChain = 6,
        /// Flat parallelograms.
        Parallelograms = 7,
        /// Parallelepipeds (skewed boxes).
        Parallelepipeds = 8,
    }
    reserved {
        2 => "ParticleNetConstL",
        3 => "ParticleSetVarL",
        4 => "ParticleSetTextured",
        5 => "BezierCurves",
    }
}

impl Geometry {
    /// Returns `true` for geometries made of particles.
    pub fn is_particle_based(self) -> bool {
        matches!(self, Geometry::ParticleSet)
    }

    /// Returns `true` unless the kind is [`Geometry::Unknown`].
    pub fn is_known(self) -> bool {
        self != Geometry::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::RtEnum;
    use crate::error::{EnumError, EnumValue};

    #[test]
    fn test_codes_match_backend() {
        let expected = [
            (Geometry::Unknown, 0),
            (Geometry::ParticleSet, 1),
            (Geometry::BezierChain, 6),
            (Geometry::Parallelograms, 7),
            (Geometry::Parallelepipeds, 8),
        ];
        for (member, code) in expected {
            assert_eq!(member.code(), code);
            assert_eq!(i32::from(member), code);
        }
        assert_eq!(Geometry::ALL.len(), expected.len());
    }

    #[test]
    fn test_reserved_gap_is_rejected() {
        for code in 2..=5 {
            let err = Geometry::from_code(code).unwrap_err();
            assert!(matches!(err, EnumError::InvalidEnumValue { reserved: Some(_), .. }));
        }
    }

    #[test]
    fn test_code_three_fails_with_invalid_enum_value() {
        assert_eq!(
            Geometry::try_from(3),
            Err(EnumError::InvalidEnumValue {
                enum_name: "Geometry",
                value: EnumValue::Code(3),
                reserved: Some("ParticleSetVarL"),
            })
        );
    }

    #[test]
    fn test_out_of_range_codes_are_rejected() {
        assert!(Geometry::from_code(9).is_err());
        assert!(Geometry::from_code(-1).is_err());
        assert!(Geometry::from_code(i32::MAX).is_err());
    }

    #[test]
    fn test_name_round_trip() {
        for &member in Geometry::ALL {
            let parsed: Geometry = member.to_string().parse().unwrap();
            assert_eq!(parsed, member);
            assert_eq!(Geometry::from_code(parsed.code()), Ok(member));
        }
    }

    #[test]
    fn test_unknown_name_fails_with_invalid_enum_value() {
        assert_eq!(
            Geometry::from_name("Mesh"),
            Err(EnumError::InvalidEnumValue {
                enum_name: "Geometry",
                value: EnumValue::Name("Mesh".to_string()),
                reserved: None,
            })
        );
    }

    #[test]
    fn test_retired_names_are_not_members() {
        for (_, retired) in Geometry::RESERVED {
            assert!(Geometry::from_name(retired).is_err());
        }
    }

    #[test]
    fn test_helpers() {
        assert!(Geometry::ParticleSet.is_particle_based());
        assert!(!Geometry::BezierChain.is_particle_based());
        assert!(!Geometry::default().is_known());
        assert!(Geometry::Parallelepipeds.is_known());
    }
}
