//! Movement feel constants
//!
//! Everything that shapes how the player moves lives here so designers can
//! iterate without touching the simulation code. The defaults reproduce the
//! shipped feel bit-for-bit; the launch ratios are opaque tuned values with
//! no closed-form derivation, kept as exact fixed-point fractions.

use serde::{Deserialize, Serialize};

use crate::fixed::Fixed;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Downward acceleration applied per tick while airborne.
    pub gravity: Fixed,
    /// Vertical drag, applied every tick as `vel.y * num / den`.
    pub drag_num: i32,
    pub drag_den: i32,
    /// Terminal downward speed, pixels per tick.
    pub max_fall_speed: Fixed,
    /// Horizontal acceleration per tick while walking.
    pub walk_accel: i16,
    /// Ticks of jump charge that can be banked.
    pub jump_charge_max: i16,
    /// Charge deducted right before the launch formulas run.
    pub jump_release_cost: i16,
    /// Launch speed floor, before the charge bonus.
    pub launch_base: i16,
    /// Extra launch speed per tick of charge.
    pub launch_charge_rate: Fixed,
    /// Horizontal launch ratio at zero charge.
    pub launch_x_base: Fixed,
    /// How much the horizontal ratio falls off per tick of charge.
    pub launch_x_falloff: Fixed,
    /// Vertical launch ratio at zero charge.
    pub launch_y_base: Fixed,
    /// How much the vertical ratio rises per tick of charge.
    pub launch_y_rise: Fixed,
}

impl Default for Tuning {
    fn default() -> Self {
        Tuning {
            // 1020 px/s^2 at 60 ticks/s.
            gravity: Fixed::from_int(1020) / (60 * 60),
            drag_num: 99,
            drag_den: 100,
            max_fall_speed: Fixed::from_int(7),
            walk_accel: 2,
            jump_charge_max: 35,
            jump_release_cost: 8,
            launch_base: 6,
            launch_charge_rate: Fixed::from_int(4045) / 32767,
            launch_x_base: Fixed::from_int(21063) / 32767,
            launch_x_falloff: Fixed::from_int(375) / 32767,
            launch_y_base: Fixed::from_int(25101) / 32767,
            launch_y_rise: Fixed::from_int(191) / 32767,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_raw_values() {
        let t = Tuning::default();
        assert_eq!(t.gravity.raw(), 18_568);
        assert_eq!(t.max_fall_speed.raw(), 7 << 16);
        assert_eq!(t.launch_charge_rate.raw(), 8_090);
        assert_eq!(t.launch_x_base.raw(), 42_127);
        assert_eq!(t.launch_x_falloff.raw(), 750);
        assert_eq!(t.launch_y_base.raw(), 50_203);
        assert_eq!(t.launch_y_rise.raw(), 382);
    }

    #[test]
    fn json_round_trip() {
        let t = Tuning::default();
        let json = serde_json::to_string(&t).unwrap();
        let back: Tuning = serde_json::from_str(&json).unwrap();
        assert_eq!(back.gravity, t.gravity);
        assert_eq!(back.jump_charge_max, t.jump_charge_max);
        assert_eq!(back.launch_y_rise, t.launch_y_rise);
    }

    #[test]
    fn partial_overrides_fill_from_default() {
        let t: Tuning = serde_json::from_str(r#"{"walk_accel": 3}"#).unwrap();
        assert_eq!(t.walk_accel, 3);
        assert_eq!(t.jump_charge_max, 35);
    }
}
