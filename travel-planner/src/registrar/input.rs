//! Per-mode route input and attribute derivation.

use crate::domain::{RouteAttributes, TransportMode};

use super::config::RegistrarConfig;

/// The values a caller supplies to register a route.
///
/// Each variant carries exactly the fields its mode requires; the rest are
/// derived by [`RouteInput::derive`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RouteInput {
    /// Cost and time are derived from distance.
    Road { distance: f64 },

    /// Everything is explicit.
    Train { fare: f64, distance: f64, time: f64 },

    /// Distance is undefined for air travel and recorded as zero.
    Airplane { fare: f64, time: f64 },
}

impl RouteInput {
    /// The transport mode this input registers.
    pub fn mode(&self) -> TransportMode {
        match self {
            Self::Road { .. } => TransportMode::Road,
            Self::Train { .. } => TransportMode::Train,
            Self::Airplane { .. } => TransportMode::Airplane,
        }
    }

    /// Compute the full attribute triple for this input.
    pub fn derive(&self, config: &RegistrarConfig) -> RouteAttributes {
        match *self {
            Self::Road { distance } => RouteAttributes::new(
                distance * config.road_cost_per_km,
                distance,
                distance / config.road_speed_kmh,
            ),
            Self::Train {
                fare,
                distance,
                time,
            } => RouteAttributes::new(fare, distance, time),
            Self::Airplane { fare, time } => RouteAttributes::new(fare, 0.0, time),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn road_derivation() {
        let attrs = RouteInput::Road { distance: 150.0 }.derive(&RegistrarConfig::default());
        assert_eq!(attrs, RouteAttributes::new(300.0, 150.0, 2.5));
    }

    #[test]
    fn road_derivation_uses_config() {
        let config = RegistrarConfig::new(4.0, 50.0, true);
        let attrs = RouteInput::Road { distance: 100.0 }.derive(&config);
        assert_eq!(attrs, RouteAttributes::new(400.0, 100.0, 2.0));
    }

    #[test]
    fn train_is_explicit() {
        let input = RouteInput::Train {
            fare: 1500.0,
            distance: 1400.0,
            time: 16.0,
        };
        assert_eq!(input.mode(), TransportMode::Train);
        assert_eq!(
            input.derive(&RegistrarConfig::default()),
            RouteAttributes::new(1500.0, 1400.0, 16.0)
        );
    }

    #[test]
    fn airplane_has_zero_distance() {
        let input = RouteInput::Airplane {
            fare: 5000.0,
            time: 2.5,
        };
        assert_eq!(input.mode(), TransportMode::Airplane);
        assert_eq!(
            input.derive(&RegistrarConfig::default()),
            RouteAttributes::new(5000.0, 0.0, 2.5)
        );
    }
}
