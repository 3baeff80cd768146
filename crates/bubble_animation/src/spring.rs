//! Spring physics animation
//!
//! RK4-integrated damped springs. The widget uses two tunings: a stiff,
//! well-damped spring for the carousel strip and container heights, and a
//! softer bouncing spring that pulls the dragged card back into place.

use serde::{Deserialize, Serialize};

/// Configuration for a spring animation
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    #[serde(default = "default_mass")]
    pub mass: f32,
}

fn default_mass() -> f32 {
    1.0
}

impl SpringConfig {
    /// Create a new spring configuration
    pub fn new(stiffness: f32, damping: f32, mass: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass,
        }
    }

    /// Strip and height transitions (stiffness 400, damping 40)
    pub fn carousel() -> Self {
        Self::new(400.0, 40.0, 1.0)
    }

    /// Card release bounce (stiffness 200, damping 20)
    pub fn bounce() -> Self {
        Self::new(200.0, 20.0, 1.0)
    }

}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::carousel()
    }
}

/// A single spring-driven scalar
#[derive(Clone, Copy, Debug)]
pub struct Spring {
    config: SpringConfig,
    value: f32,
    velocity: f32,
    target: f32,
    rest_delta: f32,
    rest_speed: f32,
}

impl Spring {
    pub fn new(config: SpringConfig, initial: f32) -> Self {
        Self {
            config,
            value: initial,
            velocity: 0.0,
            target: initial,
            rest_delta: 0.01,
            rest_speed: 0.1,
        }
    }

    /// Override the distance and speed under which the spring counts as settled
    pub fn with_rest(mut self, delta: f32, speed: f32) -> Self {
        self.rest_delta = delta;
        self.rest_speed = speed;
        self
    }

    pub fn config(&self) -> SpringConfig {
        self.config
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    /// Retarget; current velocity is kept so interruptions stay smooth
    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    pub fn set_config(&mut self, config: SpringConfig) {
        self.config = config;
    }

    pub fn is_settled(&self) -> bool {
        (self.value - self.target).abs() < self.rest_delta && self.velocity.abs() < self.rest_speed
    }

    /// Advance by `dt` seconds
    pub fn step(&mut self, dt: f32) {
        if self.is_settled() {
            self.value = self.target;
            self.velocity = 0.0;
            return;
        }

        let (x, v) = (self.value, self.velocity);
        let (dx1, dv1) = self.derivative(x, v);
        let (dx2, dv2) = self.derivative(x + dx1 * dt * 0.5, v + dv1 * dt * 0.5);
        let (dx3, dv3) = self.derivative(x + dx2 * dt * 0.5, v + dv2 * dt * 0.5);
        let (dx4, dv4) = self.derivative(x + dx3 * dt, v + dv3 * dt);

        self.value += (dx1 + 2.0 * (dx2 + dx3) + dx4) * dt / 6.0;
        self.velocity += (dv1 + 2.0 * (dv2 + dv3) + dv4) * dt / 6.0;
    }

    /// (dx/dt, dv/dt) at position `x` moving at `v`
    fn derivative(&self, x: f32, v: f32) -> (f32, f32) {
        let force = -self.config.stiffness * (x - self.target) - self.config.damping * v;
        (v, force / self.config.mass)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(spring: &mut Spring, seconds: f32) {
        let frames = (seconds * 60.0) as usize;
        for _ in 0..frames {
            spring.step(1.0 / 60.0);
        }
    }

    #[test]
    fn test_carousel_spring_settles() {
        let mut spring = Spring::new(SpringConfig::carousel(), 0.0);
        spring.set_target(-375.0);
        run(&mut spring, 2.0);

        assert!(spring.is_settled());
        assert_eq!(spring.value(), -375.0);
    }

    #[test]
    fn test_carousel_spring_is_critically_damped() {
        // 40 == 2 * sqrt(400): no overshoot past the target
        let mut spring = Spring::new(SpringConfig::carousel(), 0.0);
        spring.set_target(100.0);
        for _ in 0..120 {
            spring.step(1.0 / 60.0);
            assert!(spring.value() <= 100.0 + 0.5);
        }
    }

    #[test]
    fn test_bounce_spring_overshoots() {
        let mut spring = Spring::new(SpringConfig::bounce(), 60.0);
        spring.set_target(0.0);
        let mut lowest = f32::MAX;
        for _ in 0..120 {
            spring.step(1.0 / 60.0);
            lowest = lowest.min(spring.value());
        }
        assert!(lowest < 0.0);
    }

    #[test]
    fn test_retarget_keeps_velocity() {
        let mut spring = Spring::new(SpringConfig::bounce(), 0.0);
        spring.set_target(100.0);
        run(&mut spring, 0.2);

        let velocity = spring.velocity();
        assert!(velocity > 0.0);
        spring.set_target(20.0);
        assert_eq!(spring.velocity(), velocity);
    }

    #[test]
    fn test_large_steps_stay_bounded() {
        let mut spring = Spring::new(SpringConfig::carousel(), 0.0);
        spring.set_target(1000.0);
        for _ in 0..100 {
            spring.step(0.05);
            assert!(spring.value().is_finite());
            assert!(spring.value() < 2000.0);
        }
    }
}
