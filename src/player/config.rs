use crate::{
    assets::address::FrameAddress,
    foundation::core::SurfaceSize,
    foundation::error::{ScrublineError, ScrublineResult},
    parallax::curve::{CurvePoint, ParallaxCurve, ParallaxRig},
};

/// Complete configuration surface of a scrub player.
///
/// A config is a pure data model that can be built programmatically or
/// shipped as JSON and loaded via [`PlayerConfig::from_json_str`]. Rendering
/// against a config is performed by [`crate::ScrubPlayer`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PlayerConfig {
    /// Number of frames in the sequence (`N`); indices run `0..N-1`.
    pub frame_count: usize,
    /// Address rule resolving each frame index to a URI.
    pub address: FrameAddress,
    /// Parallax curve definitions, each evaluated per progress update.
    #[serde(default)]
    pub curves: Vec<CurveSpec>,
    /// Logical output resolution of the drawing surface.
    pub surface: SurfaceSize,
}

/// Serializable form of one parallax curve.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CurveSpec {
    /// Unique name of the visual property the curve drives.
    pub name: String,
    /// Control points, sorted by progress.
    pub points: Vec<CurvePoint>,
}

impl PlayerConfig {
    /// Check every part of the config, including the curve definitions.
    pub fn validate(&self) -> ScrublineResult<()> {
        if self.frame_count == 0 {
            return Err(ScrublineError::validation("frame_count must be >= 1"));
        }
        if self.surface.width == 0 || self.surface.height == 0 {
            return Err(ScrublineError::validation(
                "surface dimensions must be non-zero",
            ));
        }
        self.address.validate()?;
        self.rig()?;
        Ok(())
    }

    /// Build the parallax rig described by [`PlayerConfig::curves`].
    pub fn rig(&self) -> ScrublineResult<ParallaxRig> {
        let curves = self
            .curves
            .iter()
            .map(|spec| ParallaxCurve::new(spec.name.clone(), spec.points.clone()))
            .collect::<ScrublineResult<Vec<_>>>()?;
        ParallaxRig::new(curves)
    }

    /// Parse and validate a config from JSON.
    pub fn from_json_str(s: &str) -> ScrublineResult<Self> {
        let config: Self =
            serde_json::from_str(s).map_err(|e| ScrublineError::serde(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Stock configuration for a 192-frame hero capture at 1920x1080 with
    /// the five default parallax curves.
    pub fn scroll_hero() -> Self {
        fn span(name: &str, from: f64, to: f64) -> CurveSpec {
            CurveSpec {
                name: name.to_string(),
                points: vec![
                    CurvePoint {
                        progress: 0.0,
                        value: from,
                    },
                    CurvePoint {
                        progress: 1.0,
                        value: to,
                    },
                ],
            }
        }

        Self {
            frame_count: 192,
            address: FrameAddress::new("hero-sequence", "delay-0.04s.png"),
            curves: vec![
                span("canvas_scale", 1.0, 1.25),
                span("canvas_y", 0.0, 15.0),
                span("text_y", 0.0, -40.0),
                span("text_scale", 1.0, 0.9),
                CurveSpec {
                    name: "text_opacity".to_string(),
                    points: vec![
                        CurvePoint {
                            progress: 0.0,
                            value: 1.0,
                        },
                        CurvePoint {
                            progress: 0.5,
                            value: 0.5,
                        },
                        CurvePoint {
                            progress: 0.8,
                            value: 0.0,
                        },
                    ],
                },
            ],
            surface: SurfaceSize {
                width: 1920,
                height: 1080,
            },
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/player/config.rs"]
mod tests;
