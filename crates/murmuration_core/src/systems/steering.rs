//! Vector rules shared by every mobile agent.
//!
//! Each rule reduces a neighbour set to one steering vector. Headings follow the
//! minimal path of the space, so a neighbour just across a wrapped edge pulls or
//! pushes in the direction of that short path.

use crate::config::DegeneratePolicy;
use crate::error::{Result, SimError};
use crate::space::{Neighbor, Space};
use glam::DVec2;
use murmuration_data::AgentId;

/// Mean unit heading from `origin` toward each neighbour. Zero when there are none.
///
/// Used as cohesion for flock members and as attack for predators.
pub fn mean_heading(space: &Space, origin: DVec2, neighbors: &[Neighbor]) -> DVec2 {
    if neighbors.is_empty() {
        return DVec2::ZERO;
    }
    let sum: DVec2 = neighbors
        .iter()
        .filter_map(|n| space.heading(origin, n.position))
        .sum();
    sum / neighbors.len() as f64
}

/// Sum of unit headings pointing away from every neighbour closer than `threshold`.
///
/// Separation and avoidance are both this rule applied to different sets.
pub fn repel(space: &Space, origin: DVec2, neighbors: &[Neighbor], threshold: f64) -> DVec2 {
    neighbors
        .iter()
        .filter(|n| n.distance < threshold)
        .filter_map(|n| space.heading(origin, n.position))
        .map(|h| -h)
        .sum()
}

/// Mean of the given velocities. Zero when there are none.
pub fn mean_velocity(velocities: &[DVec2]) -> DVec2 {
    if velocities.is_empty() {
        return DVec2::ZERO;
    }
    velocities.iter().sum::<DVec2>() / velocities.len() as f64
}

/// Unit heading toward `target`, or zero when already there.
#[inline]
pub fn seek(space: &Space, origin: DVec2, target: DVec2) -> DVec2 {
    space.heading(origin, target).unwrap_or(DVec2::ZERO)
}

/// Normalizes a blended steering vector.
///
/// When `combined` has no direction the policy decides: `RetainHeading` falls back to
/// the normalized `previous` velocity (`None` if that has no direction either) and
/// `Fatal` reports [`SimError::DegenerateVelocity`].
pub fn resolve_heading(
    combined: DVec2,
    previous: DVec2,
    policy: DegeneratePolicy,
    id: AgentId,
) -> Result<Option<DVec2>> {
    if let Some(unit) = combined.try_normalize() {
        return Ok(Some(unit));
    }
    match policy {
        DegeneratePolicy::Fatal => Err(SimError::DegenerateVelocity(id)),
        DegeneratePolicy::RetainHeading => {
            tracing::debug!(agent = %id, "Degenerate steering vector, retaining heading");
            Ok(previous.try_normalize())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use murmuration_data::AgentKind;

    fn neighbor(space: &Space, origin: DVec2, id: u64, x: f64, y: f64) -> Neighbor {
        let position = DVec2::new(x, y);
        Neighbor {
            id: AgentId(id),
            kind: AgentKind::FlockMember,
            position,
            distance: space.distance(origin, position),
        }
    }

    #[test]
    fn test_mean_heading_of_opposite_neighbors_cancels() {
        let space = Space::new(100.0, 100.0, false);
        let origin = DVec2::new(50.0, 50.0);
        let set = [
            neighbor(&space, origin, 1, 40.0, 50.0),
            neighbor(&space, origin, 2, 60.0, 50.0),
        ];
        assert!(mean_heading(&space, origin, &set).length() < 1e-12);
        assert_eq!(mean_heading(&space, origin, &[]), DVec2::ZERO);
    }

    #[test]
    fn test_repel_only_counts_close_neighbors() {
        let space = Space::new(100.0, 100.0, false);
        let origin = DVec2::new(50.0, 50.0);
        let set = [
            neighbor(&space, origin, 1, 52.0, 50.0),
            neighbor(&space, origin, 2, 50.0, 80.0),
        ];
        let push = repel(&space, origin, &set, 5.0);
        assert!((push - DVec2::new(-1.0, 0.0)).length() < 1e-12);
    }

    #[test]
    fn test_repel_follows_wrapped_path() {
        let space = Space::new(100.0, 100.0, true);
        let origin = DVec2::new(1.0, 50.0);
        let set = [neighbor(&space, origin, 1, 99.0, 50.0)];
        assert_eq!(set[0].distance, 2.0);
        let push = repel(&space, origin, &set, 20.0);
        assert!((push - DVec2::X).length() < 1e-12);
    }

    #[test]
    fn test_mean_velocity() {
        let v = mean_velocity(&[DVec2::X, DVec2::Y]);
        assert_eq!(v, DVec2::new(0.5, 0.5));
        assert_eq!(mean_velocity(&[]), DVec2::ZERO);
    }

    #[test]
    fn test_seek_at_target_is_zero() {
        let space = Space::new(100.0, 100.0, false);
        let here = DVec2::new(10.0, 10.0);
        assert_eq!(seek(&space, here, here), DVec2::ZERO);
        assert_eq!(seek(&space, here, DVec2::new(10.0, 20.0)), DVec2::Y);
    }

    #[test]
    fn test_resolve_heading_policies() {
        let id = AgentId(3);
        let unit = resolve_heading(DVec2::new(3.0, 4.0), DVec2::ZERO, DegeneratePolicy::Fatal, id)
            .unwrap()
            .unwrap();
        assert!((unit.length() - 1.0).abs() < 1e-12);

        let retained = resolve_heading(
            DVec2::ZERO,
            DVec2::new(0.0, -2.0),
            DegeneratePolicy::RetainHeading,
            id,
        )
        .unwrap();
        assert_eq!(retained, Some(DVec2::new(0.0, -1.0)));

        let stalled =
            resolve_heading(DVec2::ZERO, DVec2::ZERO, DegeneratePolicy::RetainHeading, id).unwrap();
        assert_eq!(stalled, None);

        assert_eq!(
            resolve_heading(DVec2::ZERO, DVec2::X, DegeneratePolicy::Fatal, id),
            Err(SimError::DegenerateVelocity(id))
        );
        assert!(resolve_heading(
            DVec2::new(f64::NAN, 0.0),
            DVec2::ZERO,
            DegeneratePolicy::Fatal,
            id
        )
        .is_err());
    }
}
