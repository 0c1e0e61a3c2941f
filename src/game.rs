//! Game context
//!
//! `Game` owns everything: the immutable maps and textures built at init
//! and the mutable player/camera/input state. There are no globals; hosts
//! embed a `Game`, feed it counter readings and input, and read back the
//! render contract.

use log::{info, warn};
use thiserror::Error;

use crate::clock::FrameClock;
use crate::consts::MAX_TICKS_PER_ADVANCE;
use crate::fixed::Fixed;
use crate::grid::Grid;
use crate::level::{Level, LevelError};
use crate::render::{SpriteInstance, Viewport};
use crate::sim::sdf::DistanceField;
use crate::sim::state::{Camera, Facing, InputState, Player};
use crate::sim::tick::tick;
use crate::sim::world::{PlayerMap, WorldMap};
use crate::texture::Rgb8;
use crate::texture::atlas::SpriteAtlas;
use crate::texture::background::compose_background;
use crate::texture::noise::{NoiseError, fractal_noise, white_noise};
use crate::tuning::Tuning;

/// Anything that can go wrong while building a `Game`. After a successful
/// init the simulation has no fallible operations.
#[derive(Debug, Error)]
pub enum InitError {
    #[error("invalid level layout: {0}")]
    Level(#[from] LevelError),
    #[error("noise generation failed: {0}")]
    Noise(#[from] NoiseError),
}

pub struct Game {
    tuning: Tuning,
    world: WorldMap,
    player_map: PlayerMap,
    distance_field: DistanceField,
    background: Grid<Rgb8>,
    atlas: SpriteAtlas,
    player: Player,
    camera: Camera,
    input: InputState,
    clock: FrameClock,
}

impl Game {
    /// Build a game from an ASCII layout. `clock_frequency` is the host
    /// counter's units-per-second and `now` its current reading.
    pub fn new(
        layout: &str,
        tuning: Tuning,
        clock_frequency: u64,
        now: u64,
    ) -> Result<Game, InitError> {
        let level = Level::parse(layout)?;
        info!(
            "level parsed: {}x{} tiles, start tile {:?}",
            level.width(),
            level.height(),
            level.start_tile()
        );

        let world = WorldMap::build(&level);
        let player_map = PlayerMap::build(&world);
        info!(
            "collision maps built: {}x{} world pixels",
            world.width(),
            world.height()
        );

        let distance_field = DistanceField::build(&world);
        info!("distance field built");

        let white = white_noise(world.width(), world.height())?;
        let fractal = fractal_noise(&white);
        let background = compose_background(&world, &white, &fractal);
        let atlas = SpriteAtlas::build();
        info!("textures composed");

        let player = Player::spawn(&level);
        let mut camera = Camera::default();
        camera.follow(&player, world.width(), world.height());

        Ok(Game {
            tuning,
            world,
            player_map,
            distance_field,
            background,
            atlas,
            player,
            camera,
            input: InputState::default(),
            clock: FrameClock::new(clock_frequency, now),
        })
    }

    /// Feed the current counter reading and run every logical tick that is
    /// due, up to the catch-up budget. Returns the number of ticks run.
    pub fn advance(&mut self, now: u64) -> u32 {
        self.clock.advance(now);

        let mut steps = 0;
        while self.clock.consume() {
            self.step();
            steps += 1;
            if steps == MAX_TICKS_PER_ADVANCE {
                warn!("tick budget exhausted, dropping backlog");
                self.clock.discard_backlog();
                break;
            }
        }
        steps
    }

    /// One logical tick: input and physics, then the camera.
    pub fn step(&mut self) {
        tick(&mut self.player, &self.input, &self.player_map, &self.tuning);
        self.camera
            .follow(&self.player, self.world.width(), self.world.height());
    }

    /// Input snapshot for the host to mutate between frames.
    pub fn input_mut(&mut self) -> &mut InputState {
        &mut self.input
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn camera(&self) -> Camera {
        self.camera
    }

    pub fn world(&self) -> &WorldMap {
        &self.world
    }

    /// Init-time textures for one-time upload.
    pub fn background(&self) -> &Grid<Rgb8> {
        &self.background
    }

    pub fn distance_field(&self) -> &DistanceField {
        &self.distance_field
    }

    pub fn atlas(&self) -> &SpriteAtlas {
        &self.atlas
    }

    /// The sprites to draw this frame: the hat above the head, then the
    /// body in front of it, both 16x16 and anchored off the player's
    /// top-left corner.
    pub fn sprites(&self) -> [SpriteInstance; 2] {
        let pos = self.player.pos;
        [
            SpriteInstance {
                x: pos.x - 2,
                y: pos.y - 15,
                size: 16,
                layer: 1,
            },
            SpriteInstance {
                x: pos.x - 2,
                y: pos.y + 1,
                size: 16,
                layer: match self.player.facing {
                    Facing::Right => 2,
                    Facing::Left => 3,
                },
            },
        ]
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::at(self.camera.x, self.camera.y)
    }
}
