/// What a call to [`Tracker::update`] did with the measurement.
///
/// Ignoring it is fine: a rejected sample leaves the tracker untouched either way.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Update {
    Initialized,
    Corrected,
    Rejected,
}

/// Fixed-gain alpha-beta filter over a 2D constant-velocity model.
#[derive(Debug, Clone)]
pub struct Tracker {
    alpha: f64,
    beta: f64,
    x: f64,
    y: f64,
    vx: f64,
    vy: f64,
    last_time: f64,
    initialized: bool,
}

impl Tracker {
    pub fn new(alpha: f64, beta: f64) -> Tracker {
        Tracker {
            alpha,
            beta,
            x: 0.0,
            y: 0.0,
            vx: 0.0,
            vy: 0.0,
            last_time: 0.0,
            initialized: false,
        }
    }

    pub fn update(&mut self, t: f64, mx: f64, my: f64) -> Update {
        if !self.initialized {
            self.x = mx;
            self.y = my;
            self.last_time = t;
            self.initialized = true;
            return Update::Initialized;
        }

        let dt = t - self.last_time;
        if dt <= 0.0 {
            return Update::Rejected;
        }

        let px = self.x + self.vx * dt;
        let py = self.y + self.vy * dt;

        let ex = mx - px;
        let ey = my - py;

        self.x = px + self.alpha * ex;
        self.y = py + self.alpha * ey;

        // no guard on tiny dt, beta / dt is allowed to blow up
        self.vx += (self.beta / dt) * ex;
        self.vy += (self.beta / dt) * ey;

        self.last_time = t;
        Update::Corrected
    }

    /// Position `horizon` time units ahead of the last accepted measurement.
    pub fn predict(&self, horizon: f64) -> (f64, f64) {
        (self.x + self.vx * horizon, self.y + self.vy * horizon)
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn vx(&self) -> f64 {
        self.vx
    }

    pub fn vy(&self) -> f64 {
        self.vy
    }

    pub fn last_time(&self) -> f64 {
        self.last_time
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }
}
