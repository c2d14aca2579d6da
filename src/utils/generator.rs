//! Random node generation, mostly for tests and benchmarks.

use std::f32::consts::TAU;

use rand::Rng;
use uuid::Builder;

use crate::types::{location::Location, node::Node};

/// Generate `capacity` nodes uniformly scattered in a disk of `radius`
/// graph units around `location`.
///
/// Node uids are random UUIDs drawn from `rng`, so a seeded generator
/// reproduces the same nodes.
pub fn generate_nodes_near<R: Rng>(
    rng: &mut R,
    location: &Location,
    radius: f32,
    capacity: usize,
) -> Vec<Node> {
    (0..capacity)
        .map(|_| {
            let uid = Builder::from_random_bytes(rng.gen()).into_uuid();
            let angle = rng.gen_range(0.0..TAU);
            let distance = radius * rng.gen::<f32>().sqrt();
            Node::new(
                uid.to_string(),
                location.x.into_inner() + distance * angle.cos(),
                location.y.into_inner() + distance * angle.sin(),
            )
        })
        .collect()
}

#[cfg(test)]
mod generator_tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_nodes_are_within_radius() {
        let center = Location::new(10.0, -4.0);
        let mut rng = StdRng::seed_from_u64(7);
        let nodes = generate_nodes_near(&mut rng, &center, 2.0, 200);

        assert_eq!(nodes.len(), 200);
        for node in &nodes {
            assert!(node.location.distance(&center) <= 2.0 + 1e-4);
        }
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let center = Location::new(0.0, 0.0);
        let a = generate_nodes_near(&mut StdRng::seed_from_u64(42), &center, 1.0, 5);
        let b = generate_nodes_near(&mut StdRng::seed_from_u64(42), &center, 1.0, 5);
        assert_eq!(a, b);
        assert_ne!(a[0].uid, a[1].uid);
    }
}
