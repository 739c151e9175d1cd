//! Shared waypoint accumulator.
//!
//! Every strategy emits through a [`WaypointBuilder`], which owns the index
//! cursor, enforces the waypoint budget and rejects positions outside the
//! WGS-84 ranges.

use crate::error::{PlanError, PlanResult};
use surveykit_core::{GenerationParameters, Waypoint};

#[derive(Debug)]
pub struct WaypointBuilder {
    waypoints: Vec<Waypoint>,
    next_index: u32,
    limit: usize,
    altitude: f64,
    speed: f64,
    action: String,
}

impl WaypointBuilder {
    /// Starts at `params.starting_index` with at most `limit` waypoints.
    pub fn new(params: &GenerationParameters, limit: usize) -> Self {
        Self {
            waypoints: Vec::new(),
            next_index: params.starting_index,
            limit,
            altitude: params.altitude,
            speed: params.speed,
            action: params.action.clone(),
        }
    }

    /// Overrides the altitude and speed stamped on every waypoint.
    pub fn with_flight(mut self, altitude: f64, speed: f64) -> Self {
        self.altitude = altitude;
        self.speed = speed;
        self
    }

    /// Fails early when `additional` more waypoints cannot fit.
    pub fn reserve(&mut self, additional: usize) -> PlanResult<()> {
        if self.waypoints.len().saturating_add(additional) > self.limit {
            return Err(PlanError::WaypointLimitExceeded { limit: self.limit });
        }
        self.waypoints.reserve(additional);
        Ok(())
    }

    pub fn push(&mut self, latitude: f64, longitude: f64, heading: f64) -> PlanResult<()> {
        let action = std::mem::take(&mut self.action);
        let result = self.push_with_action(latitude, longitude, heading, &action);
        self.action = action;
        result
    }

    pub fn push_with_action(
        &mut self,
        latitude: f64,
        longitude: f64,
        heading: f64,
        action: &str,
    ) -> PlanResult<()> {
        if self.waypoints.len() >= self.limit {
            return Err(PlanError::WaypointLimitExceeded { limit: self.limit });
        }
        if !(latitude.is_finite() && longitude.is_finite())
            || latitude.abs() > 90.0
            || longitude.abs() > 180.0
        {
            return Err(PlanError::InvalidCoordinate(format!(
                "generated position ({latitude}, {longitude}) is outside WGS-84 ranges"
            )));
        }

        let index = self.next_index;
        self.next_index = index
            .checked_add(1)
            .ok_or(PlanError::WaypointLimitExceeded { limit: self.limit })?;

        self.waypoints.push(Waypoint {
            index,
            latitude,
            longitude,
            altitude: self.altitude,
            speed: self.speed,
            heading: Waypoint::normalize_heading(heading),
            action: action.to_string(),
        });
        Ok(())
    }

    /// Waypoints that can still be pushed.
    pub fn remaining(&self) -> usize {
        self.limit.saturating_sub(self.waypoints.len())
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    pub fn finish(self) -> Vec<Waypoint> {
        self.waypoints
    }
}
