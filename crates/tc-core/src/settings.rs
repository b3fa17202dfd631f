//! Routing settings supplied once when the transit router is built.

use crate::{CoreError, CoreResult, Minutes};

const METERS_PER_KILOMETER: f64 = 1_000.0;
const MINUTES_PER_HOUR: f64 = 60.0;

/// Bus timing parameters shared by every route.
///
/// Typically deserialized from the `routing_settings` section of an input
/// document by the application crate.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoutingSettings {
    /// Minutes spent waiting at a stop before every boarding.
    pub bus_wait_time: u32,

    /// Bus speed in km/h.  Constant across all routes and segments.
    pub bus_velocity: f64,
}

impl RoutingSettings {
    /// Build and validate settings in one step.
    pub fn new(bus_wait_time: u32, bus_velocity: f64) -> CoreResult<Self> {
        let settings = Self { bus_wait_time, bus_velocity };
        settings.validate()?;
        Ok(settings)
    }

    /// Both values must be strictly positive; velocity must be finite.
    pub fn validate(&self) -> CoreResult<()> {
        if self.bus_wait_time == 0 {
            return Err(CoreError::Config("bus_wait_time must be positive".into()));
        }
        if !self.bus_velocity.is_finite() || self.bus_velocity <= 0.0 {
            return Err(CoreError::Config(format!(
                "bus_velocity must be a positive finite number, got {}",
                self.bus_velocity
            )));
        }
        Ok(())
    }

    #[inline]
    pub fn wait_minutes(&self) -> Minutes {
        f64::from(self.bus_wait_time)
    }

    /// Bus velocity converted to metres per minute.
    #[inline]
    pub fn velocity_m_per_min(&self) -> f64 {
        self.bus_velocity * METERS_PER_KILOMETER / MINUTES_PER_HOUR
    }

    /// Minutes needed to cover `meters` of road.
    #[inline]
    pub fn ride_minutes(&self, meters: u64) -> Minutes {
        meters as f64 / self.velocity_m_per_min()
    }
}
