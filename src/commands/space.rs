//! Code space report
//!
//! Sizes the space for a configuration without materializing it.

use crate::core::{Code, ConfigError, PlayConfig};
use crate::space::random_code;
use rand::Rng;

/// Size of a configuration's code space and a sample secret
pub struct SpaceReport {
    pub config: PlayConfig,
    /// `None` when the size does not fit in a `u64`
    pub size: Option<u64>,
    pub sample: Code,
}

impl SpaceReport {
    /// Whether a game could be played with this configuration
    #[must_use]
    pub fn within_limit(&self) -> bool {
        self.size.is_some_and(|size| size <= self.config.space_limit)
    }
}

/// Build a report for the configuration
///
/// # Errors
/// Returns `ConfigError` if the game configuration is invalid. An oversized
/// space is reported, not rejected.
pub fn space_report<R: Rng + ?Sized>(
    config: &PlayConfig,
    rng: &mut R,
) -> Result<SpaceReport, ConfigError> {
    config.game.validate()?;

    Ok(SpaceReport {
        config: *config,
        size: config.game.space_size(),
        sample: random_code(&config.game, rng)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn reports_classic_sizes() {
        let mut rng = StdRng::seed_from_u64(7);

        let with_repeats = space_report(&PlayConfig::new(GameConfig::new(6, 4, true)), &mut rng).unwrap();
        assert_eq!(with_repeats.size, Some(1296));
        assert!(with_repeats.within_limit());

        let without = space_report(&PlayConfig::new(GameConfig::new(6, 4, false)), &mut rng).unwrap();
        assert_eq!(without.size, Some(360));
        assert!(!without.sample.has_repeats());
    }

    #[test]
    fn oversized_space_is_reported() {
        let mut rng = StdRng::seed_from_u64(7);
        let report = space_report(&PlayConfig::new(GameConfig::new(26, 20, true)), &mut rng).unwrap();

        assert!(!report.within_limit());
        assert_eq!(report.sample.len(), 20);
    }

    #[test]
    fn invalid_configuration_is_rejected() {
        let mut rng = StdRng::seed_from_u64(7);
        let result = space_report(&PlayConfig::new(GameConfig::new(3, 4, false)), &mut rng);
        assert_eq!(
            result.err(),
            Some(ConfigError::LengthExceedsColours {
                length: 4,
                colours: 3
            })
        );
    }
}
