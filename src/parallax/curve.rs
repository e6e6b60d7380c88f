use crate::{
    foundation::core::Progress,
    foundation::error::{ScrublineError, ScrublineResult},
};

/// One control point of a parallax curve.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CurvePoint {
    /// Progress position of the point, within `[0, 1]`.
    pub progress: f64,
    /// Output value at that progress.
    pub value: f64,
}

/// A named piecewise-linear function of progress driving one visual property
/// (scale, offset, opacity, ...), independent of frame selection.
///
/// A curve may cover only a sub-range of `[0, 1]`; outside its own domain it
/// extrapolates flat to the nearest endpoint value. Control points are
/// immutable after construction, so identical progress always yields
/// identical output.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ParallaxCurve {
    name: String,
    points: Vec<CurvePoint>, // sorted by progress
}

impl ParallaxCurve {
    /// Build a curve; requires a non-empty name and at least two finite
    /// control points sorted by progress.
    pub fn new(name: impl Into<String>, points: Vec<CurvePoint>) -> ScrublineResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(ScrublineError::validation("curve name must be non-empty"));
        }
        if points.len() < 2 {
            return Err(ScrublineError::validation(
                "curve must have at least 2 control points",
            ));
        }
        for pt in &points {
            if !pt.progress.is_finite() || !(0.0..=1.0).contains(&pt.progress) {
                return Err(ScrublineError::validation(
                    "curve control point progress must be within [0, 1]",
                ));
            }
            if !pt.value.is_finite() {
                return Err(ScrublineError::validation(
                    "curve control point value must be finite",
                ));
            }
        }
        if !points.windows(2).all(|w| w[0].progress <= w[1].progress) {
            return Err(ScrublineError::validation(
                "curve control points must be sorted by progress",
            ));
        }
        Ok(Self { name, points })
    }

    /// Name of the visual property this curve drives.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Control points, sorted by progress.
    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    /// Evaluate at `p` by linear interpolation between the two bracketing
    /// control points. Evaluating exactly at a control point's progress
    /// returns that point's exact value.
    pub fn eval(&self, p: Progress) -> f64 {
        let x = p.value();
        let idx = self.points.partition_point(|pt| pt.progress <= x);

        if idx == 0 {
            return self.points[0].value;
        }
        if idx >= self.points.len() {
            return self.points[self.points.len() - 1].value;
        }

        let a = &self.points[idx - 1];
        let b = &self.points[idx];
        let denom = b.progress - a.progress;
        if denom <= 0.0 {
            return a.value;
        }

        let t = (x - a.progress) / denom;
        a.value + (b.value - a.value) * t
    }
}

/// The evaluated value of one curve at some progress.
#[derive(Clone, Debug, PartialEq)]
pub struct CurveSample {
    /// Name of the sampled curve.
    pub name: String,
    /// Value of that curve at the sampled progress.
    pub value: f64,
}

/// The current value of every curve of a rig; recomputed per progress update
/// and handed to the host as a small record to apply to its layout nodes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParallaxState {
    samples: Vec<CurveSample>,
}

impl ParallaxState {
    /// All samples, in rig order.
    pub fn samples(&self) -> &[CurveSample] {
        &self.samples
    }

    /// Value of the curve called `name`, if the rig has one.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.samples
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.value)
    }
}

/// An ordered set of parallax curves evaluated together.
///
/// Curves share no mutable state; each is sampled independently from the
/// same progress value.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ParallaxRig {
    curves: Vec<ParallaxCurve>,
}

impl ParallaxRig {
    /// Build a rig; curve names must be unique.
    pub fn new(curves: Vec<ParallaxCurve>) -> ScrublineResult<Self> {
        for (i, a) in curves.iter().enumerate() {
            if curves[..i].iter().any(|b| b.name() == a.name()) {
                return Err(ScrublineError::validation(format!(
                    "duplicate curve name '{}'",
                    a.name()
                )));
            }
        }
        Ok(Self { curves })
    }

    /// The rig's curves, in evaluation order.
    pub fn curves(&self) -> &[ParallaxCurve] {
        &self.curves
    }

    /// Sample every curve at `p`, in rig order.
    pub fn evaluate(&self, p: Progress) -> ParallaxState {
        ParallaxState {
            samples: self
                .curves
                .iter()
                .map(|c| CurveSample {
                    name: c.name().to_string(),
                    value: c.eval(p),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/parallax/curve.rs"]
mod tests;
