//! The bounded plane every agent occupies.
//!
//! `Space` owns the authoritative position of each placed agent and answers the
//! distance, heading and neighbourhood queries steering is built from. Neighbourhood
//! queries go through a [`SpatialHash`] and then filter on exact distance, so the
//! result set is the one a full linear scan would produce.

use crate::error::{Result, SimError};
use crate::geometry::Bounds;
use crate::spatial_hash::SpatialHash;
use glam::DVec2;
use murmuration_data::{AgentId, AgentKind};
use std::collections::BTreeMap;

/// Edge length of an index cell when none is configured.
pub const DEFAULT_CELL_SIZE: f64 = 25.0;

/// One agent found by a neighbourhood query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    pub id: AgentId,
    pub kind: AgentKind,
    pub position: DVec2,
    /// Distance from the query point, measured the way [`Space::distance`] does.
    pub distance: f64,
}

#[derive(Debug, Clone, Copy)]
struct Placement {
    position: DVec2,
    kind: AgentKind,
    cell: usize,
}

#[derive(Debug, Clone)]
pub struct Space {
    bounds: Bounds,
    placements: BTreeMap<AgentId, Placement>,
    index: SpatialHash,
}

impl Space {
    pub fn new(width: f64, height: f64, wrap: bool) -> Self {
        Self::with_cell_size(width, height, wrap, DEFAULT_CELL_SIZE)
    }

    pub fn with_cell_size(width: f64, height: f64, wrap: bool, cell_size: f64) -> Self {
        Self {
            bounds: Bounds::new(width, height, wrap),
            placements: BTreeMap::new(),
            index: SpatialHash::new(cell_size, width, height, wrap),
        }
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn width(&self) -> f64 {
        self.bounds.width
    }

    pub fn height(&self) -> f64 {
        self.bounds.height
    }

    pub fn is_toroidal(&self) -> bool {
        self.bounds.wrap
    }

    pub fn center(&self) -> DVec2 {
        self.bounds.center()
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    pub fn contains(&self, id: AgentId) -> bool {
        self.placements.contains_key(&id)
    }

    pub fn kind_of(&self, id: AgentId) -> Option<AgentKind> {
        self.placements.get(&id).map(|p| p.kind)
    }

    pub fn position(&self, id: AgentId) -> Result<DVec2> {
        self.placements
            .get(&id)
            .map(|p| p.position)
            .ok_or(SimError::NotFound(id))
    }

    /// Registers `id` at `pos` and returns the stored position.
    ///
    /// On a torus the position is wrapped first; otherwise it must already lie inside
    /// the area.
    pub fn place(&mut self, id: AgentId, kind: AgentKind, pos: DVec2) -> Result<DVec2> {
        if self.placements.contains_key(&id) {
            return Err(SimError::DuplicateAgent(id));
        }
        let position = self.admit(pos)?;
        let cell = self
            .index
            .insert(id, position.x, position.y)
            .ok_or_else(|| self.out_of_bounds(position))?;
        self.placements.insert(
            id,
            Placement {
                position,
                kind,
                cell,
            },
        );
        Ok(position)
    }

    /// Moves a registered agent and returns where it ended up.
    ///
    /// On a torus each coordinate is reduced modulo the matching dimension; on a plain
    /// area the position is clamped to the edges. Non-finite targets are rejected.
    pub fn move_agent(&mut self, id: AgentId, new_pos: DVec2) -> Result<DVec2> {
        let bounds = self.bounds;
        let placement = self.placements.get_mut(&id).ok_or(SimError::NotFound(id))?;
        if !new_pos.is_finite() {
            return Err(SimError::out_of_bounds(new_pos, bounds.width, bounds.height));
        }
        let position = if bounds.wrap {
            bounds.wrap_point(new_pos)
        } else {
            bounds.clamp_point(new_pos)
        };
        placement.cell = self
            .index
            .relocate(id, placement.cell, position.x, position.y)
            .ok_or(SimError::out_of_bounds(position, bounds.width, bounds.height))?;
        placement.position = position;
        Ok(position)
    }

    /// Deregisters `id`, returning its last position. Removing twice is an error.
    pub fn remove(&mut self, id: AgentId) -> Result<DVec2> {
        let placement = self.placements.remove(&id).ok_or(SimError::NotFound(id))?;
        self.index.remove(id, placement.cell);
        Ok(placement.position)
    }

    #[inline]
    pub fn distance(&self, a: DVec2, b: DVec2) -> f64 {
        self.bounds.distance(a, b)
    }

    /// Unit vector from `a` toward `b`; `None` when they coincide.
    #[inline]
    pub fn heading(&self, a: DVec2, b: DVec2) -> Option<DVec2> {
        self.bounds.heading(a, b)
    }

    /// Every registered agent strictly closer than `radius` to `pos`, ordered by id.
    ///
    /// With `include_self == false`, agents sitting exactly on `pos` are left out.
    pub fn neighbors_within(&self, pos: DVec2, radius: f64, include_self: bool) -> Vec<Neighbor> {
        let mut found = Vec::new();
        self.index.query_callback(pos.x, pos.y, radius, |id| {
            if let Some(placement) = self.placements.get(&id) {
                if let Some(n) = self.accept(id, placement, pos, radius, include_self) {
                    found.push(n);
                }
            }
        });
        found.sort_unstable_by_key(|n| n.id);
        found
    }

    /// Same contract as [`Space::neighbors_within`], answered by scanning every agent.
    pub fn neighbors_within_linear(
        &self,
        pos: DVec2,
        radius: f64,
        include_self: bool,
    ) -> Vec<Neighbor> {
        if !radius.is_finite() || radius < 0.0 {
            return Vec::new();
        }
        self.placements
            .iter()
            .filter_map(|(&id, placement)| self.accept(id, placement, pos, radius, include_self))
            .collect()
    }

    /// Neighbours of one kind, never including anything sitting exactly on `pos`.
    pub fn neighbors_of_kind(&self, pos: DVec2, radius: f64, kind: AgentKind) -> Vec<Neighbor> {
        let mut found = self.neighbors_within(pos, radius, false);
        found.retain(|n| n.kind == kind);
        found
    }

    pub fn iter(&self) -> impl Iterator<Item = (AgentId, AgentKind, DVec2)> + '_ {
        self.placements
            .iter()
            .map(|(&id, p)| (id, p.kind, p.position))
    }

    #[inline]
    fn accept(
        &self,
        id: AgentId,
        placement: &Placement,
        pos: DVec2,
        radius: f64,
        include_self: bool,
    ) -> Option<Neighbor> {
        let distance = self.bounds.distance(pos, placement.position);
        if distance >= radius || (!include_self && distance == 0.0) {
            return None;
        }
        Some(Neighbor {
            id,
            kind: placement.kind,
            position: placement.position,
            distance,
        })
    }

    fn admit(&self, pos: DVec2) -> Result<DVec2> {
        if self.bounds.wrap && pos.is_finite() {
            return Ok(self.bounds.wrap_point(pos));
        }
        if self.bounds.contains(pos) {
            Ok(pos)
        } else {
            Err(self.out_of_bounds(pos))
        }
    }

    fn out_of_bounds(&self, pos: DVec2) -> SimError {
        SimError::out_of_bounds(pos, self.bounds.width, self.bounds.height)
    }
}
