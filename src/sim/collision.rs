//! Collision detection
//!
//! Everything is an axis-aligned box. Boxes that merely touch along an edge
//! do not collide, so a crawling runner can slide right under a branch whose
//! bottom edge sits exactly on its hitbox.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{BottomRunner, GameState, Obstacle, Stream, TopRunner};
use crate::consts::*;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        let half = size / 2.0;
        Self::new(center - half, center + half)
    }

    pub fn from_top_left(pos: Vec2, size: Vec2) -> Self {
        Self::new(pos, pos + size)
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Strict overlap on both axes
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }
}

impl Obstacle {
    pub fn bounds(&self) -> Aabb {
        Aabb::from_top_left(self.pos, self.size)
    }
}

impl TopRunner {
    pub fn hitbox(&self) -> Aabb {
        Aabb::from_center(self.pos, Vec2::splat(PLAYER_SIZE))
    }
}

impl BottomRunner {
    /// Nominal square, or its lower part while crawling
    pub fn hitbox(&self) -> Aabb {
        let nominal = Aabb::from_center(self.pos, Vec2::splat(PLAYER_SIZE));
        if self.is_crawling() {
            Aabb::new(Vec2::new(nominal.min.x, nominal.max.y - CRAWL_HEIGHT), nominal.max)
        } else {
            nominal
        }
    }
}

/// First obstacle in the stream overlapping the hitbox
pub fn first_hit<'a>(hitbox: &Aabb, obstacles: &'a [Obstacle]) -> Option<&'a Obstacle> {
    obstacles.iter().find(|o| hitbox.overlaps(&o.bounds()))
}

/// Which stream (if any) the runners collided in; bottom is checked first
pub fn check_collisions(state: &GameState) -> Option<Stream> {
    if first_hit(&state.bottom.hitbox(), &state.bottom_obstacles).is_some() {
        return Some(Stream::Bottom);
    }
    if first_hit(&state.top.hitbox(), &state.top_obstacles).is_some() {
        return Some(Stream::Top);
    }
    None
}
