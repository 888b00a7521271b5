//! Idle/demo mode - an AI that plays the match
//!
//! Produces an [`InputSnapshot`] per tick from the current world, so it can
//! stand in for the keyboard anywhere the simulation is driven. Targets are
//! taken lowest platform first. To reach a platform the pilot walks to a
//! launch column beside it whose airspace is clear, glides up past the line,
//! drifts over it and drops on. Once on an enemy's floor it keeps its
//! distance, fires, and hops over incoming shots.
//!
//! All randomness comes from a seeded PCG stream, so a given seed replays the
//! same match.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::sim::{Character, Enemy, InputSnapshot, Obstacle, World};

/// Preferred horizontal distance from the target while engaging
const ENGAGE_DISTANCE: f32 = 160.0;
/// How far an enemy shot may be before the pilot hops over it
const DODGE_DISTANCE: f32 = 120.0;
/// Ticks jump is held for a dodge hop
const HOP_TICKS: u32 = 6;
/// Height above a platform line to glide to before drifting over it
const CLEARANCE: f32 = 45.0;
/// Gap kept between a launch column and the platform it climbs past
const COLUMN_GAP: f32 = 12.0;
/// How close to a launch column counts as being on it
const COLUMN_TOLERANCE: f32 = 5.0;

pub struct Autopilot {
    rng: Pcg32,
    hop_ticks: u32,
}

impl Autopilot {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            hop_ticks: 0,
        }
    }

    /// Decide this tick's input
    pub fn next_input(&mut self, world: &World) -> InputSnapshot {
        let mut input = InputSnapshot::default();
        let c = &world.character;

        let Some(target) = pick_target(world) else {
            return input;
        };

        if self.hop_ticks > 0 {
            self.hop_ticks -= 1;
            input.jump = true;
        }

        let feet = c.pos.y + c.size.y;
        let step = next_floor(world, feet, target.floor);
        let ob = &world.obstacles[step];
        let standing = standing_on(world, c);

        let target_x = if standing == Some(target.floor) {
            self.engage(world, target, &mut input)
        } else if feet < ob.y - 1.0 {
            // Above the next floor: drift over it and drop, or walk off a higher one
            match standing {
                Some(current) if current != step => escape_point(&world.obstacles[current], ob, c.pos.x),
                _ => {
                    input.jump |= !ob.spans(c.pos.x) && feet > ob.y - CLEARANCE;
                    inside(ob, c.pos.x)
                }
            }
        } else {
            match launch_column(world, step, feet, c.pos.x) {
                Some(column) => {
                    let at_column = (c.pos.x - column).abs() <= COLUMN_TOLERANCE;
                    let still_climbing = c.jumping && !ob.spans(c.pos.x);
                    input.jump |= at_column || still_climbing;
                    column
                }
                None => ob.midpoint_x(),
            }
        };

        let (left, right) = steer(c, target_x);
        input.move_left = left;
        input.move_right = right;
        input
    }

    /// Hold position near the target, fire at it, hop over incoming shots.
    /// Returns the x to steer toward.
    fn engage(&mut self, world: &World, target: &Enemy, input: &mut InputSnapshot) -> f32 {
        let c = &world.character;
        let floor = world.floor_of(target);
        let enemy_x = target.world_x(floor);
        let facing_left = enemy_x < c.pos.x;

        if self.rng.random_bool(0.9) {
            input.fire_left = facing_left;
            input.fire_right = !facing_left;
        }

        let threatened = world.shots.iter().any(|shot| {
            !shot.origin.is_player()
                && (shot.pos.x - c.pos.x).abs() < DODGE_DISTANCE
                && (shot.pos.x < c.pos.x) == (shot.direction.sign() > 0.0)
                && c.hit_region().contains(glam::Vec2::new(c.pos.x, shot.pos.y))
        });
        if threatened && self.hop_ticks == 0 && self.rng.random_bool(0.8) {
            self.hop_ticks = HOP_TICKS;
            input.jump = true;
        }

        let side = if facing_left { 1.0 } else { -1.0 };
        inside(floor, enemy_x + side * ENGAGE_DISTANCE)
    }
}

/// The enemy on the floor we stand on, else the one on the lowest floor
fn pick_target(world: &World) -> Option<&Enemy> {
    let standing = standing_on(world, &world.character);
    world
        .enemies
        .iter()
        .find(|e| Some(e.floor) == standing)
        .or_else(|| {
            world.enemies.iter().reduce(|best, e| {
                if world.floor_of(e).y > world.floor_of(best).y {
                    e
                } else {
                    best
                }
            })
        })
}

/// Platform the character is resting on, if any
fn standing_on(world: &World, c: &Character) -> Option<usize> {
    let feet = c.pos.y + c.size.y;
    world
        .obstacles
        .iter()
        .position(|o| o.spans(c.pos.x) && (feet - o.y).abs() < 1.0)
}

/// Closest x in `ob`'s span, with a small margin
fn inside(ob: &Obstacle, x: f32) -> f32 {
    x.clamp(ob.x_start + COLUMN_GAP, ob.x_end - COLUMN_GAP)
}

/// Where to walk off `current` to drop toward `below`
fn escape_point(current: &Obstacle, below: &Obstacle, x: f32) -> f32 {
    let candidates = [current.x_start - COLUMN_GAP, current.x_end + COLUMN_GAP];
    let max_x = WORLD_WIDTH - CHARACTER_SIZE;
    nearest_to(x, candidates.into_iter().filter(|&cx| below.spans(cx)))
        .or_else(|| nearest_to(x, candidates.into_iter().filter(|&cx| (0.0..=max_x).contains(&cx))))
        .unwrap_or(below.midpoint_x())
}

fn nearest_to(x: f32, xs: impl Iterator<Item = f32>) -> Option<f32> {
    xs.min_by(|a, b| (a - x).abs().total_cmp(&(b - x).abs()))
}

/// A column beside `step` from which gliding straight up meets no other
/// platform between the feet and the line. Nearest to `x` wins.
fn launch_column(world: &World, step: usize, feet: f32, x: f32) -> Option<f32> {
    let clear = column_candidates(&world.obstacles[step])
        .into_iter()
        .filter(|&col| blocker(world, step, feet, col).is_none());
    nearest_to(x, clear)
}

fn column_candidates(ob: &Obstacle) -> Vec<f32> {
    let max_x = WORLD_WIDTH - CHARACTER_SIZE;
    [ob.x_start - COLUMN_GAP, ob.x_end + COLUMN_GAP]
        .into_iter()
        .filter(|&col| (0.0..=max_x).contains(&col) && !ob.spans(col))
        .collect()
}

/// Lowest platform strictly between `step` and the feet that spans `col`
fn blocker(world: &World, step: usize, feet: f32, col: f32) -> Option<usize> {
    let line = world.obstacles[step].y;
    world
        .obstacles
        .iter()
        .enumerate()
        .filter(|(_, o)| o.y > line && o.y < feet - 1.0 && o.spans(col))
        .max_by(|(_, a), (_, b)| a.y.total_cmp(&b.y))
        .map(|(i, _)| i)
}

/// First platform to climb on the way to `goal`: `goal` itself when one of
/// its launch columns is clear, otherwise whatever blocks them
fn next_floor(world: &World, feet: f32, goal: usize) -> usize {
    let mut step = goal;
    for _ in 0..world.obstacles.len() {
        let ob = &world.obstacles[step];
        if ob.y >= feet {
            return step;
        }
        let candidates = column_candidates(ob);
        if candidates.iter().any(|&col| blocker(world, step, feet, col).is_none()) {
            return step;
        }
        match candidates
            .iter()
            .filter_map(|&col| blocker(world, step, feet, col))
            .max_by(|&a, &b| world.obstacles[a].y.total_cmp(&world.obstacles[b].y))
        {
            Some(next) => step = next,
            None => return step,
        }
    }
    step
}

/// Velocity-seeking steering: velocity persists on the ground, so brake by
/// pushing against it
fn steer(c: &Character, target_x: f32) -> (bool, bool) {
    let desired = ((target_x - c.pos.x) * 0.25).clamp(-c.speed, c.speed);
    (c.vel.x > desired + 0.5, c.vel.x < desired - 0.5)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Direction, EnemyKind, TickOutcome, tick};
    use glam::Vec2;

    #[test]
    fn test_targets_lowest_floor_first() {
        let world = World::new();
        let target = pick_target(&world).unwrap();
        assert_eq!(target.floor, 2);
    }

    #[test]
    fn test_route_to_top_floor_goes_via_middle() {
        let world = World::new();
        // From the ground, the top-left platform's only column is under the middle one
        assert_eq!(next_floor(&world, 800.0, 0), 2);
        // From the middle platform it is reachable directly
        assert_eq!(next_floor(&world, 500.0, 0), 0);
        assert_eq!(launch_column(&world, 0, 500.0, 450.0), Some(412.0));
        // The right platform is reachable from the ground on its left side
        assert_eq!(next_floor(&world, 800.0, 1), 1);
        assert_eq!(launch_column(&world, 1, 800.0, 500.0), Some(788.0));
    }

    #[test]
    fn test_steer_brakes_against_slide() {
        let mut c = Character::default();
        c.vel.x = 8.0;
        // Already at target while sliding right: push left
        assert_eq!(steer(&c, c.pos.x), (true, false));
        c.vel.x = 0.0;
        assert_eq!(steer(&c, c.pos.x), (false, false));
        assert_eq!(steer(&c, c.pos.x + 100.0), (false, true));
    }

    #[test]
    fn test_engages_enemy_on_same_floor() {
        let character = Character {
            pos: Vec2::new(250.0, 470.0),
            ..Default::default()
        };
        let world = World::with_layout(
            character,
            vec![Obstacle::new(200.0, 500.0, 600.0)],
            vec![Enemy::new(EnemyKind::Sniper, 0, 100, 440.0, Direction::Left)],
        );
        let mut pilot = Autopilot::new(1);
        let fired_right = (0..20)
            .map(|_| pilot.next_input(&world))
            .filter(|input| input.fire_right)
            .count();
        assert!(fired_right > 0);
    }

    #[test]
    fn test_climbs_at_launch_column() {
        let character = Character {
            pos: Vec2::new(790.0, 770.0),
            ..Default::default()
        };
        let world = World::with_layout(
            character,
            vec![Obstacle::new(800.0, 300.0, 1200.0)],
            vec![Enemy::new(EnemyKind::Assaulter, 0, 0, 240.0, Direction::Right)],
        );
        let input = Autopilot::new(3).next_input(&world);
        assert!(input.jump);
    }

    #[test]
    fn test_same_seed_same_match() {
        let run = |seed| {
            let mut world = World::new();
            let mut pilot = Autopilot::new(seed);
            for _ in 0..1500 {
                let input = pilot.next_input(&world);
                if let TickOutcome::Finished(_) = tick(&mut world, &input) {
                    break;
                }
            }
            (world.frame_count, world.character.pos, world.character.hp, world.enemies.len())
        };
        assert_eq!(run(42), run(42));
    }
}
