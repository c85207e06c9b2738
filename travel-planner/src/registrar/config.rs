//! Registration configuration.

/// Parameters for deriving and registering routes.
#[derive(Debug, Clone)]
pub struct RegistrarConfig {
    /// Road cost per kilometre (currency units).
    pub road_cost_per_km: f64,

    /// Assumed road speed (km/h), used to derive road travel time.
    pub road_speed_kmh: f64,

    /// Undo the in-memory insertion when the store write fails.
    /// When false the graph keeps the route and diverges from the store
    /// until the next full reload.
    pub rollback_on_store_failure: bool,
}

impl RegistrarConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(road_cost_per_km: f64, road_speed_kmh: f64, rollback_on_store_failure: bool) -> Self {
        Self {
            road_cost_per_km,
            road_speed_kmh,
            rollback_on_store_failure,
        }
    }

    /// Set whether failed store writes roll back the graph.
    pub fn with_rollback(mut self, rollback: bool) -> Self {
        self.rollback_on_store_failure = rollback;
        self
    }
}

impl Default for RegistrarConfig {
    fn default() -> Self {
        Self {
            road_cost_per_km: 2.0,
            road_speed_kmh: 60.0,
            rollback_on_store_failure: true,
        }
    }
}
