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

//! Viewer settings expressed in the backend vocabulary.

use crate::camera::Camera;
use crate::coordinates::Coordinates;
use crate::error::EnumError;
use crate::light::Light;
use serde::{Deserialize, Serialize};

/// Startup settings for a ray-tracing viewer.
///
/// In JSON every enumeration field accepts either its integer code or its
/// member name; missing fields take their default. The binary form always
/// stores codes.
///
/// # Examples
///
/// ```
/// use plotoptix_core::{Camera, Coordinates, ViewerSettings};
///
/// let settings = ViewerSettings::from_json(r#"{ "camera": "DoF", "coordinates": 1 }"#).unwrap();
/// assert_eq!(settings.camera, Camera::DoF);
/// assert_eq!(settings.coordinates, Coordinates::Box);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerSettings {
    /// How the scene bounding coordinates are drawn.
    pub coordinates: Coordinates,
    /// The projection model of the default camera.
    pub camera: Camera,
    /// The shape of the default light.
    pub light: Light,
    /// The number of frames accumulated before the backend reports
    /// [`crate::RtResult::AccumDone`].
    pub max_accumulation_frames: u32,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            coordinates: Coordinates::default(),
            camera: Camera::default(),
            light: Light::default(),
            max_accumulation_frames: 4,
        }
    }
}

impl ViewerSettings {
    /// Parses settings from a JSON document.
    ///
    /// # Errors
    /// Returns [`EnumError::Settings`] if the document is malformed or names a
    /// code or member that does not exist.
    pub fn from_json(text: &str) -> Result<Self, EnumError> {
        let settings: Self = serde_json::from_str(text)?;
        log::debug!("Loaded viewer settings: {settings:?}");
        Ok(settings)
    }

    /// Writes the settings as pretty-printed JSON, using integer codes.
    pub fn to_json(&self) -> Result<String, EnumError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Encodes the settings in their compact binary form.
    pub fn to_bytes(&self) -> Result<Vec<u8>, EnumError> {
        let config = bincode::config::standard();
        Ok(bincode::serde::encode_to_vec(self, config)?)
    }

    /// Decodes settings previously written by [`ViewerSettings::to_bytes`].
    ///
    /// # Errors
    /// Returns [`EnumError::Settings`] if the bytes are truncated, carry
    /// trailing data, or hold a code outside one of the enumerations.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, EnumError> {
        let config = bincode::config::standard();
        let (settings, consumed): (Self, usize) =
            bincode::serde::decode_from_slice(bytes, config)?;
        if consumed != bytes.len() {
            return Err(EnumError::Settings(format!(
                "{} trailing bytes after encoded settings",
                bytes.len() - consumed
            )));
        }
        log::debug!("Decoded viewer settings: {settings:?}");
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = ViewerSettings::default();
        assert_eq!(settings.coordinates, Coordinates::Hidden);
        assert_eq!(settings.camera, Camera::Pinhole);
        assert_eq!(settings.light, Light::Parallelogram);
        assert_eq!(settings.max_accumulation_frames, 4);
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        assert_eq!(
            ViewerSettings::from_json("{}").unwrap(),
            ViewerSettings::default()
        );
    }

    #[test]
    fn test_json_accepts_names_and_codes() {
        let settings = ViewerSettings::from_json(
            r#"{ "coordinates": "Box", "camera": 1, "light": "Spherical", "max_accumulation_frames": 32 }"#,
        )
        .unwrap();
        assert_eq!(
            settings,
            ViewerSettings {
                coordinates: Coordinates::Box,
                camera: Camera::DoF,
                light: Light::Spherical,
                max_accumulation_frames: 32,
            }
        );
    }

    #[test]
    fn test_json_output_uses_codes() {
        let settings = ViewerSettings {
            camera: Camera::DoF,
            ..Default::default()
        };
        let value: serde_json::Value = serde_json::from_str(&settings.to_json().unwrap()).unwrap();
        assert_eq!(value["camera"], 1);
        assert_eq!(value["coordinates"], 0);
        assert_eq!(ViewerSettings::from_json(&settings.to_json().unwrap()).unwrap(), settings);
    }

    #[test]
    fn test_json_rejects_reserved_code() {
        let err = ViewerSettings::from_json(r#"{ "camera": 2 }"#).unwrap_err();
        match err {
            EnumError::Settings(details) => assert!(details.contains("Ortho")),
            other => panic!("Expected a settings error, got {other:?}"),
        }
    }

    #[test]
    fn test_binary_round_trip() {
        let settings = ViewerSettings {
            coordinates: Coordinates::Box,
            camera: Camera::DoF,
            light: Light::Spherical,
            max_accumulation_frames: 128,
        };
        let bytes = settings.to_bytes().unwrap();
        assert_eq!(ViewerSettings::from_bytes(&bytes).unwrap(), settings);
    }

    #[test]
    fn test_binary_rejects_trailing_bytes() {
        let mut bytes = ViewerSettings::default().to_bytes().unwrap();
        bytes.extend_from_slice(&[1, 2, 3]);
        assert_eq!(
            ViewerSettings::from_bytes(&bytes),
            Err(EnumError::Settings(
                "3 trailing bytes after encoded settings".to_string()
            ))
        );
    }

    #[test]
    fn test_binary_rejects_reserved_code() {
        // Same field layout as `ViewerSettings`, with raw codes.
        #[derive(Serialize)]
        struct RawSettings {
            coordinates: i32,
            camera: i32,
            light: i32,
            max_accumulation_frames: u32,
        }

        let raw = RawSettings {
            coordinates: 0,
            camera: 2,
            light: 0,
            max_accumulation_frames: 4,
        };
        let bytes = bincode::serde::encode_to_vec(&raw, bincode::config::standard()).unwrap();
        match ViewerSettings::from_bytes(&bytes) {
            Err(EnumError::Settings(details)) => assert!(details.contains("Ortho")),
            other => panic!("Expected a settings error, got {other:?}"),
        }
    }

    #[test]
    fn test_binary_rejects_truncated_input() {
        let bytes = ViewerSettings::default().to_bytes().unwrap();
        assert!(matches!(
            ViewerSettings::from_bytes(&bytes[..1]),
            Err(EnumError::Settings(_))
        ));
    }
}
