use std::collections::HashMap;

use tracing::debug;

use crate::calculations::curve_sampler;
use crate::models::{Component, CurveSample, ParameterSnapshot};

#[derive(Debug, Clone, Default)]
struct CurveTrack {
    samples: Vec<CurveSample>,
    last_snapshot: Option<ParameterSnapshot>,
}

/// Every distinct curve drawn for each component during the session.
///
/// A new curve is appended only when the (intercept, slope, driver) snapshot
/// for that component differs from the last one recorded, so re-rendering
/// with unchanged inputs never grows the history. History is append-only.
#[derive(Debug, Clone, Default)]
pub struct CurveHistory {
    tracks: HashMap<Component, CurveTrack>,
}

impl CurveHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the curve for `component` if its inputs changed since the last
    /// call, and returns every curve recorded for it, oldest first.
    pub fn record_if_changed(
        &mut self,
        component: Component,
        intercept: f64,
        slope: f64,
        driver: f64,
    ) -> &[CurveSample] {
        let snapshot = ParameterSnapshot::new(intercept, slope, driver);
        let track = self.tracks.entry(component).or_default();

        if track.last_snapshot != Some(snapshot) {
            let curve = curve_sampler::sample(component.evaluator(), intercept, slope);
            track.samples.push(curve);
            track.last_snapshot = Some(snapshot);
            debug!(
                component = component.symbol(),
                intercept,
                slope,
                driver,
                versions = track.samples.len(),
                "curve version recorded"
            );
        }

        &track.samples
    }

    /// Curves recorded for `component`, oldest first.
    pub fn samples(
        &self,
        component: Component,
    ) -> &[CurveSample] {
        self.tracks
            .get(&component)
            .map(|track| track.samples.as_slice())
            .unwrap_or_default()
    }
}
