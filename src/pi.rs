// Discrete PI regulator for the output-voltage loop.
//
// The integral accumulates every cycle; there is no windup freeze while
// the output sits at the saturation bound, and the previous error and
// output are carried without a derivative term acting on them. That is
// the qualified behavior of this power stage; do not change it without
// re-qualifying the loop.

use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

#[repr(C)]
#[derive(Debug, Clone, Copy, IntoBytes, FromBytes, Immutable, KnownLayout)]
pub struct Config {
    pub kp: f32,
    pub ki: f32,
    /// Integration step, seconds.
    pub ts: f32,
    /// Symmetric bound on the PI sum.
    pub umax: f32,
    /// Steady-state duty bias.
    pub d0: f32,
    pub duty_min: f32,
    pub duty_max: f32,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, IntoBytes, FromBytes, Immutable, KnownLayout)]
pub struct Pi {
    pub config: Config,

    pub error: f32,
    pub error_prev: f32,

    pub proportional: f32,
    pub integral: f32,
    pub integral_prev: f32,

    /// PI sum before and after saturation.
    pub output_unclamped: f32,
    pub output: f32,
    pub output_prev: f32,

    /// Last commanded duty fraction, inside the configured band.
    pub duty: f32,
}

impl Pi {
    /// A zero or negative saturation bound would break the duty mapping,
    /// and an inverted duty band has no safe interpretation. Both are
    /// build-out errors, fatal at construction (compile-time when the
    /// controller is built from `config` constants).
    pub const fn new(config: Config) -> Self {
        assert!(config.umax > 0.0, "umax must be positive");
        assert!(
            config.duty_min <= config.duty_max,
            "duty band is inverted"
        );

        Self {
            config,
            error: 0.0,
            error_prev: 0.0,
            proportional: 0.0,
            integral: 0.0,
            integral_prev: 0.0,
            output_unclamped: 0.0,
            output: 0.0,
            output_prev: 0.0,
            duty: 0.0,
        }
    }

    /// One control-rate step: error, P and I terms, output saturation,
    /// then the duty mapping `d0 + u/umax` clamped to the safe band.
    /// Returns the duty fraction for the actuator.
    pub fn update(&mut self, measured: f32, reference: f32) -> f32 {
        let cfg = &self.config;

        self.error = reference - measured;
        self.proportional = cfg.kp * self.error;
        self.integral = self.integral_prev + cfg.ki * cfg.ts * self.error;

        self.output_unclamped = self.proportional + self.integral;
        self.output = self.output_unclamped.clamp(-cfg.umax, cfg.umax);

        // The integral is carried forward as computed, not rolled back
        // to the clamped output.
        self.error_prev = self.error;
        self.output_prev = self.output;
        self.integral_prev = self.integral;

        self.duty = (cfg.d0 + self.output / cfg.umax).clamp(cfg.duty_min, cfg.duty_max);
        self.duty
    }

    pub fn reset(&mut self) {
        self.error = 0.0;
        self.error_prev = 0.0;
        self.proportional = 0.0;
        self.integral = 0.0;
        self.integral_prev = 0.0;
        self.output_unclamped = 0.0;
        self.output = 0.0;
        self.output_prev = 0.0;
        self.duty = 0.0;
    }
}
