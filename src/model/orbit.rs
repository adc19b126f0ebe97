use glam::Vec3;
use tracing::info;

use crate::controller::vehicle_controller::ControlError;

/// How long an explosion marker stays alive, in seconds
const EXPLOSION_LIFETIME: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OrbitEvent {
    MeteorHitEarth { at: Vec3 },
    MeteorHitSun { at: Vec3 },
    ExplosionExpired,
}

#[derive(Debug, Clone, Copy)]
pub struct Explosion {
    pub position: Vec3,
    pub remaining: f32,
}

/// Orbital-mechanics toy: the sun sits at the origin, the earth runs a
/// circular orbit while spinning, and a meteor falls toward both bodies until
/// it hits one. Collisions are plain distance thresholds; the visual explosion
/// is modeled as a timed marker the host can render however it likes.
pub struct OrbitalScene {
    pub orbit_radius: f32,
    pub orbit_rate: f32,
    pub spin_rate: f32,
    pub earth_pull: f32,
    pub sun_pull: f32,
    pub earth_radius: f32,
    pub sun_radius: f32,
    orbit_angle: f32,
    earth_spin: f32,
    earth_position: Vec3,
    earth_scorched: bool,
    meteor: Option<Vec3>,
    explosion: Option<Explosion>,
}

impl Default for OrbitalScene {
    fn default() -> Self {
        Self {
            orbit_radius: 10.0,
            orbit_rate: 1.0,
            spin_rate: 0.6,
            earth_pull: 6.0,
            sun_pull: 3.0,
            earth_radius: 1.0,
            sun_radius: 5.0,
            orbit_angle: 0.0,
            earth_spin: 0.0,
            earth_position: Vec3::new(10.0, 0.0, 0.0),
            earth_scorched: false,
            meteor: Some(Vec3::new(30.0, 0.0, 0.0)),
            explosion: None,
        }
    }
}

impl OrbitalScene {
    pub fn earth_position(&self) -> Vec3 {
        self.earth_position
    }

    pub fn earth_spin(&self) -> f32 {
        self.earth_spin
    }

    /// The earth turns red after a meteor strike
    pub fn earth_scorched(&self) -> bool {
        self.earth_scorched
    }

    pub fn meteor_position(&self) -> Option<Vec3> {
        self.meteor
    }

    pub fn explosion(&self) -> Option<&Explosion> {
        self.explosion.as_ref()
    }

    pub fn update(&mut self, elapsed: f32) -> Result<Vec<OrbitEvent>, ControlError> {
        if !elapsed.is_finite() || elapsed < 0.0 {
            return Err(ControlError::InvalidElapsed(elapsed));
        }
        let mut events = Vec::new();
        if elapsed == 0.0 {
            return Ok(events);
        }

        self.orbit_angle += self.orbit_rate * elapsed;
        self.earth_position = Vec3::new(
            self.orbit_radius * self.orbit_angle.cos(),
            0.0,
            self.orbit_radius * self.orbit_angle.sin(),
        );
        self.earth_spin += self.spin_rate * elapsed;

        if let Some(mut meteor) = self.meteor.take() {
            let to_earth = (self.earth_position - meteor).normalize_or_zero();
            let to_sun = (-meteor).normalize_or_zero();
            meteor += to_earth * (self.earth_pull * elapsed) + to_sun * (self.sun_pull * elapsed);

            if meteor.distance(self.earth_position) < self.earth_radius {
                self.earth_scorched = true;
                self.explosion = Some(Explosion {
                    position: meteor,
                    remaining: EXPLOSION_LIFETIME,
                });
                info!(?meteor, "meteor collided with the earth");
                events.push(OrbitEvent::MeteorHitEarth { at: meteor });
            } else if meteor.length() < self.sun_radius {
                self.explosion = Some(Explosion {
                    position: meteor,
                    remaining: EXPLOSION_LIFETIME,
                });
                info!(?meteor, "meteor collided with the sun");
                events.push(OrbitEvent::MeteorHitSun { at: meteor });
            } else {
                self.meteor = Some(meteor);
            }
        }

        if let Some(explosion) = self.explosion.as_mut() {
            explosion.remaining -= elapsed;
            if explosion.remaining <= 0.0 {
                self.explosion = None;
                events.push(OrbitEvent::ExplosionExpired);
            }
        }

        Ok(events)
    }
}
