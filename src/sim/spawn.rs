//! Spike generation
//!
//! Each bounce spawns a fresh set of spikes on the wall the ball is heading
//! toward. Positions snap to `spawn_slots` vertical slots one spike-height apart,
//! starting one slot below the top edge, and never overlap.

use rand::Rng;

use super::collision::intervals_overlap;
use super::state::{Side, Spike, SpikeSet};
use crate::config::GameConfig;

/// Generation gave up before placing every spike
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GenerateError {
    #[error("placed {placed} of {wanted} spikes before running out of attempts")]
    Exhausted { placed: usize, wanted: usize },
}

/// Pick how many spikes the next set gets
pub fn roll_spike_count<R: Rng>(rng: &mut R, config: &GameConfig) -> usize {
    rng.random_range(config.min_spikes..=config.max_spikes) as usize
}

/// Generate `count` non-overlapping spikes by rejection sampling.
///
/// Each spike gets at most `max_spawn_attempts` draws.
pub fn generate_spikes<R: Rng>(
    rng: &mut R,
    anchor_x: f32,
    count: usize,
    config: &GameConfig,
) -> Result<SpikeSet, GenerateError> {
    let mut spikes: Vec<Spike> = Vec::with_capacity(count);

    for _ in 0..count {
        let mut placed = None;
        for _ in 0..config.max_spawn_attempts {
            let slot = rng.random_range(1..=config.spawn_slots);
            let y = slot as f32 * config.spike_height;
            if !intervals_overlap(&spikes, y, config.spike_height) {
                placed = Some(y);
                break;
            }
        }

        let Some(y) = placed else {
            return Err(GenerateError::Exhausted {
                placed: spikes.len(),
                wanted: count,
            });
        };
        spikes.push(Spike::new(
            anchor_x,
            y,
            config.spike_width,
            config.spike_height,
            config.canvas_width,
        ));
    }

    Ok(SpikeSet {
        side: Side::from_anchor(anchor_x, config.canvas_width),
        spikes,
    })
}

/// Deterministic layout: `count` spikes spread evenly over the slots
pub fn fallback_layout(anchor_x: f32, count: usize, config: &GameConfig) -> SpikeSet {
    let slots = config.spawn_slots as usize;
    let count = count.min(slots);
    let stride = if count == 0 { 1 } else { slots / count };

    let spikes = (0..count)
        .map(|i| {
            let slot = 1 + i * stride;
            Spike::new(
                anchor_x,
                slot as f32 * config.spike_height,
                config.spike_width,
                config.spike_height,
                config.canvas_width,
            )
        })
        .collect();

    SpikeSet {
        side: Side::from_anchor(anchor_x, config.canvas_width),
        spikes,
    }
}

/// Roll a spike count and place that many spikes, falling back to the even
/// layout if sampling runs out of attempts
pub fn spawn_spike_set<R: Rng>(rng: &mut R, anchor_x: f32, config: &GameConfig) -> SpikeSet {
    let count = roll_spike_count(rng, config);
    let set = match generate_spikes(rng, anchor_x, count, config) {
        Ok(set) => set,
        Err(e) => {
            log::warn!("Spike generation {}, using even layout", e);
            fallback_layout(anchor_x, count, config)
        }
    };

    debug_assert!(
        (config.min_spikes as usize..=config.max_spikes as usize).contains(&set.len()),
        "spike count {} out of range",
        set.len()
    );
    debug_assert!(set.is_disjoint(), "overlapping spikes generated");
    set
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_generate_respects_slots() {
        let config = GameConfig::default();
        let mut rng = Pcg32::seed_from_u64(42);

        for _ in 0..200 {
            let set = generate_spikes(&mut rng, 0.0, 5, &config).unwrap();
            assert_eq!(set.len(), 5);
            assert_eq!(set.side, Side::Left);
            assert!(set.is_disjoint());
            for spike in &set.spikes {
                assert!(spike.y >= config.spike_height);
                assert!(spike.y <= config.spawn_slots as f32 * config.spike_height);
                assert_eq!(spike.y % config.spike_height, 0.0);
            }
        }
    }

    #[test]
    fn test_roll_spike_count_covers_range() {
        let config = GameConfig::default();
        let mut rng = Pcg32::seed_from_u64(7);
        let mut seen = [false; 6];

        for _ in 0..500 {
            let n = roll_spike_count(&mut rng, &config);
            assert!((1..=5).contains(&n));
            seen[n] = true;
        }
        assert!(seen[1..].iter().all(|&s| s));
    }

    #[test]
    fn test_generate_exhausts_when_slots_run_out() {
        // Two slots, three spikes: the third can never be placed
        let config = GameConfig {
            spawn_slots: 2,
            max_spawn_attempts: 64,
            ..GameConfig::default()
        };
        let mut rng = Pcg32::seed_from_u64(1);

        let err = generate_spikes(&mut rng, 0.0, 3, &config).unwrap_err();
        assert_eq!(err, GenerateError::Exhausted { placed: 2, wanted: 3 });
    }

    #[test]
    fn test_fallback_layout_is_even_and_disjoint() {
        let config = GameConfig::default();
        let set = fallback_layout(config.right_anchor_x(), 5, &config);

        assert_eq!(set.side, Side::Right);
        assert_eq!(set.len(), 5);
        assert!(set.is_disjoint());
        let ys: Vec<f32> = set.spikes.iter().map(|s| s.y).collect();
        // stride = 14 / 5 = 2
        assert_eq!(ys, vec![30.0, 90.0, 150.0, 210.0, 270.0]);
    }

    #[test]
    fn test_spawn_falls_back_when_sampling_exhausts() {
        // One draw per spike over five slots: most multi-spike rolls collide
        let config = GameConfig {
            spawn_slots: 5,
            max_spikes: 5,
            max_spawn_attempts: 1,
            ..GameConfig::default()
        };
        assert!(config.validate().is_ok());

        let mut fell_back = 0;
        for seed in 0..100 {
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut replay = rng.clone();
            let count = roll_spike_count(&mut replay, &config);
            let exhausted = generate_spikes(&mut replay, 0.0, count, &config).is_err();

            let set = spawn_spike_set(&mut rng, 0.0, &config);

            assert!((1..=5).contains(&set.len()));
            assert!(set.is_disjoint());
            assert_eq!(set.len(), count);
            if exhausted {
                assert_eq!(set, fallback_layout(0.0, count, &config));
                fell_back += 1;
            }
        }
        assert!(fell_back > 0);
    }

    #[test]
    fn test_spawn_spike_set_right_wall_vertices() {
        let config = GameConfig::default();
        let mut rng = Pcg32::seed_from_u64(99);
        let set = spawn_spike_set(&mut rng, config.right_anchor_x(), &config);

        assert_eq!(set.side, Side::Right);
        for spike in &set.spikes {
            assert_eq!(spike.vertices[0].x, config.canvas_width);
            assert_eq!(spike.vertices[1].x, config.canvas_width - config.spike_width);
        }
    }
}
