//! Transition timing fields.
//!
//! Transition-capable messages carry an optional two-byte block:
//!
//! ```text
//! +------------+-----------+---------+
//! | resolution |   steps   |  delay  |
//! |  bits 7-6  |  bits 5-0 | 1 byte  |
//! +------------+-----------+---------+
//! ```
//!
//! The block is either entirely present or entirely absent, so messages hold
//! it as `Option<Transition>`.

use crate::constants::{DELAY_STEP_MS, TRANSITION_RESOLUTION_SHIFT, TRANSITION_STEPS_MAX};
use crate::error::{check_range, MessageError, Result};
use bytes::BufMut;
use std::time::Duration;

/// Duration of a single transition step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum StepResolution {
    /// 100 milliseconds per step.
    Millis100 = 0,
    /// 1 second per step.
    Seconds1 = 1,
    /// 10 seconds per step.
    Seconds10 = 2,
    /// 10 minutes per step.
    Minutes10 = 3,
}

impl StepResolution {
    /// All resolutions, finest first.
    pub const ALL: [StepResolution; 4] = [
        StepResolution::Millis100,
        StepResolution::Seconds1,
        StepResolution::Seconds10,
        StepResolution::Minutes10,
    ];

    /// The 2-bit field value.
    pub fn bits(self) -> u8 {
        self as u8
    }

    /// Length of one step at this resolution.
    pub fn step_duration(self) -> Duration {
        match self {
            StepResolution::Millis100 => Duration::from_millis(100),
            StepResolution::Seconds1 => Duration::from_secs(1),
            StepResolution::Seconds10 => Duration::from_secs(10),
            StepResolution::Minutes10 => Duration::from_secs(600),
        }
    }
}

impl TryFrom<u8> for StepResolution {
    type Error = MessageError;

    fn try_from(bits: u8) -> Result<Self> {
        StepResolution::ALL
            .get(usize::from(bits))
            .copied()
            .ok_or_else(|| MessageError::invalid_argument("transition resolution", bits.into(), 0, 3))
    }
}

/// A complete transition block: step count, step resolution and delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Transition {
    steps: u8,
    resolution: StepResolution,
    delay: u8,
}

impl Transition {
    /// Create a transition. `steps` must fit in six bits; `delay` counts
    /// 5 ms units.
    pub fn new(steps: u8, resolution: StepResolution, delay: u8) -> Result<Self> {
        check_range("transition steps", steps.into(), 0, TRANSITION_STEPS_MAX.into())?;
        Ok(Transition {
            steps,
            resolution,
            delay,
        })
    }

    /// Create a transition from unchecked integers, validating every field.
    pub fn from_raw(steps: i64, resolution: i64, delay: i64) -> Result<Self> {
        let steps = check_range("transition steps", steps, 0, TRANSITION_STEPS_MAX.into())?;
        let resolution = check_range("transition resolution", resolution, 0, 3)?;
        let delay = check_range("delay", delay, 0, u8::MAX.into())?;
        Ok(Transition {
            steps: steps as u8,
            resolution: StepResolution::try_from(resolution as u8)?,
            delay: delay as u8,
        })
    }

    /// Pick the finest resolution that represents `duration`, rounding to the
    /// nearest step. A duration that only overflows 63 steps through rounding
    /// stays at the finer resolution with 63 steps. `delay` is rounded to the
    /// nearest 5 ms.
    pub fn from_duration(duration: Duration, delay: Duration) -> Result<Self> {
        let max_ms = i64::from(TRANSITION_STEPS_MAX) * 600_000;
        let ms = check_range("transition time (ms)", millis(duration), 0, max_ms)? as u64;

        let max_delay_ms = i64::from(u8::MAX) * DELAY_STEP_MS as i64;
        let delay_ms = check_range("delay (ms)", millis(delay), 0, max_delay_ms)? as u64;
        let delay = ((delay_ms + DELAY_STEP_MS / 2) / DELAY_STEP_MS).min(u8::MAX.into()) as u8;

        let step_ms = |resolution: StepResolution| resolution.step_duration().as_millis() as u64;
        let resolution = StepResolution::ALL
            .into_iter()
            .find(|r| ms / step_ms(*r) <= u64::from(TRANSITION_STEPS_MAX))
            .unwrap_or(StepResolution::Minutes10);
        let step = step_ms(resolution);
        let steps = ((ms + step / 2) / step).min(TRANSITION_STEPS_MAX.into()) as u8;
        Transition::new(steps, resolution, delay)
    }

    /// Number of transition steps.
    pub fn steps(&self) -> u8 {
        self.steps
    }

    /// Step resolution.
    pub fn resolution(&self) -> StepResolution {
        self.resolution
    }

    /// Delay in 5 ms units.
    pub fn delay(&self) -> u8 {
        self.delay
    }

    /// The packed transition time byte: `(resolution << 6) | steps`.
    pub fn transition_time(&self) -> u8 {
        (self.resolution.bits() << TRANSITION_RESOLUTION_SHIFT) | self.steps
    }

    /// Total transition time.
    pub fn duration(&self) -> Duration {
        self.resolution.step_duration() * u32::from(self.steps)
    }

    /// Time before the transition starts.
    pub fn delay_duration(&self) -> Duration {
        Duration::from_millis(u64::from(self.delay) * DELAY_STEP_MS)
    }

    /// Append the two-byte wire form to `buf`.
    pub fn encode_into(&self, buf: &mut impl BufMut) {
        buf.put_u8(self.transition_time());
        buf.put_u8(self.delay);
    }
}

fn millis(duration: Duration) -> i64 {
    i64::try_from(duration.as_millis()).unwrap_or(i64::MAX)
}
