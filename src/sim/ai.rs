//! Opponent targeting policy
//!
//! The opponent never aims at the ball's exact center. It picks a random
//! offset from its own paddle center (the hit offset) and steers so the
//! ball meets that point, which makes it miss at believable rates. The
//! offset is resampled whenever it returns the ball or a point is scored,
//! so the error of one exchange never carries into the next.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::rng::gaussian;

/// Spread of the hit offset, as a fraction of the paddle half-width
const OFFSET_DEVIATION_FACTOR: f32 = 0.6;

/// Opponent targeting state
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct OpponentAi {
    /// Horizontal offset from the paddle center it tries to intercept with
    pub hit_offset: f32,
}

impl OpponentAi {
    /// Resample the hit offset for the next exchange
    pub fn retarget(&mut self, rng: &mut impl Rng, paddle_width: f32) {
        self.hit_offset = gaussian(rng, 0.0, OFFSET_DEVIATION_FACTOR * paddle_width / 2.0);
    }

    /// Per-tick paddle velocity toward the current target
    ///
    /// Proportional to the distance between the ball center and the
    /// paddle's aim point, saturated at `max_speed`: the paddle closes at
    /// full speed from afar and settles without overshoot once the gap is
    /// below one tick of travel.
    pub fn velocity(&self, paddle: &Rect, ball: &Rect, max_speed: f32) -> f32 {
        let target = paddle.center_x() + self.hit_offset;
        let diff = ball.center_x() - target;
        diff.signum() * diff.abs().min(max_speed)
    }
}
