//! Collision tests for landings and hazard hits
//!
//! Landing uses a swept test: the player's bottom edge must cross a
//! platform's top band between the previous tick and this one, so fast falls
//! can't tunnel through thin platforms. Hazard hits are plain AABB overlap
//! with a forgiving inset.

use crate::consts::*;

use super::state::{Hazard, Platform, Player};

/// Swept landing test against a single platform.
///
/// Hits when the bottom edge crossed into the platform's top band this tick
/// (previous bottom at or above the band's midline, current bottom at or
/// below the top) and the horizontal extents overlap with [`EDGE_INSET`]
/// shaved off each platform edge so corner grazes don't catch.
///
/// The caller is responsible for only invoking this while the player is
/// descending and for skipping broken platforms.
pub fn swept_landing(player: &Player, platform: &Platform) -> bool {
    let prev_bottom = player.prev_y + PLAYER_H;
    let bottom = player.bottom();
    let crossed =
        prev_bottom <= platform.y + PLATFORM_H * 0.5 && bottom >= platform.y;
    if !crossed {
        return false;
    }

    let (left, right) = player.x_extent();
    right > platform.x + EDGE_INSET && left < platform.x + platform.width - EDGE_INSET
}

/// Axis-aligned overlap test with the same inset applied to both boxes
pub fn rects_overlap_inset(
    ax: f32,
    ay: f32,
    aw: f32,
    ah: f32,
    bx: f32,
    by: f32,
    bw: f32,
    bh: f32,
    inset: f32,
) -> bool {
    ax + aw - inset > bx + inset
        && ax + inset < bx + bw - inset
        && ay + ah - inset > by + inset
        && ay + inset < by + bh - inset
}

/// Whether a falling hazard overlaps the player, with the forgiving inset
/// on both hitboxes. Warning-phase hazards never hit.
pub fn hazard_hits_player(hazard: &Hazard, player: &Player) -> bool {
    if !hazard.is_falling() {
        return false;
    }
    rects_overlap_inset(
        player.pos.x,
        player.pos.y,
        PLAYER_W,
        PLAYER_H,
        hazard.x,
        hazard.y,
        HAZARD_SIZE,
        HAZARD_SIZE,
        HAZARD_HIT_INSET,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{HazardPhase, PlatformKind};
    use glam::Vec2;

    fn player_at(x: f32, y: f32, prev_y: f32) -> Player {
        Player {
            pos: Vec2::new(x, y),
            vel: Vec2::new(0.0, 5.0),
            prev_y,
        }
    }

    fn platform_at(x: f32, y: f32, width: f32) -> Platform {
        Platform {
            x,
            y,
            width,
            kind: PlatformKind::Static,
        }
    }

    #[test]
    fn landing_detected_when_bottom_crosses_top() {
        let platform = platform_at(100.0, 400.0, 100.0);
        // Bottom moved from 390 to 402, crossing the top at 400
        let player = player_at(110.0, 402.0 - PLAYER_H, 390.0 - PLAYER_H);
        assert!(swept_landing(&player, &platform));
    }

    #[test]
    fn fast_fall_does_not_tunnel() {
        let platform = platform_at(100.0, 400.0, 100.0);
        // A 40px step straight through the platform still registers
        let player = player_at(110.0, 435.0 - PLAYER_H, 395.0 - PLAYER_H);
        assert!(swept_landing(&player, &platform));
    }

    #[test]
    fn no_landing_from_below_band() {
        let platform = platform_at(100.0, 400.0, 100.0);
        // Previous bottom already below the band midline: pass-through
        let player = player_at(110.0, 420.0 - PLAYER_H, 412.0 - PLAYER_H);
        assert!(!swept_landing(&player, &platform));
    }

    #[test]
    fn edge_graze_is_forgiven() {
        let platform = platform_at(100.0, 400.0, 100.0);
        // Player's right edge only reaches 3px past the platform's left edge,
        // inside the inset
        let player = player_at(100.0 + EDGE_INSET - 1.0 - PLAYER_W, 402.0 - PLAYER_H, 390.0 - PLAYER_H);
        assert!(!swept_landing(&player, &platform));
    }

    #[test]
    fn warning_hazard_never_hits() {
        let player = player_at(200.0, 300.0, 295.0);
        let hazard = Hazard {
            x: 200.0,
            y: 300.0,
            phase: HazardPhase::Warning { ticks_left: 10 },
        };
        assert!(!hazard_hits_player(&hazard, &player));
    }

    #[test]
    fn falling_hazard_hits_on_overlap() {
        let player = player_at(200.0, 300.0, 295.0);
        let hazard = Hazard {
            x: 200.0,
            y: 300.0,
            phase: HazardPhase::Falling,
        };
        assert!(hazard_hits_player(&hazard, &player));
    }

    #[test]
    fn inset_shrinks_hazard_hitbox() {
        let player = player_at(200.0, 300.0, 295.0);
        // Boxes overlap by less than twice the inset: forgiven
        let hazard = Hazard {
            x: 200.0 + PLAYER_W - 2.0 * HAZARD_HIT_INSET + 1.0,
            y: 300.0,
            phase: HazardPhase::Falling,
        };
        assert!(!hazard_hits_player(&hazard, &player));
    }
}
