use std::time::Duration;

use crate::game::constants::{NO_REWARD, SPEED_BASE};

/// `max(0, floor(SPEED_BASE - elapsed_seconds))`
pub fn speed_points(elapsed: Duration) -> u32 {
    let remaining = f64::from(SPEED_BASE) - elapsed.as_secs_f64();
    if remaining <= 0.0 {
        0
    } else {
        remaining.floor() as u32
    }
}

pub fn declaration_points(correct: bool) -> u32 {
    if correct { NO_REWARD } else { 0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_points_floor() {
        assert_eq!(speed_points(Duration::from_secs(5)), 25);
        assert_eq!(speed_points(Duration::from_millis(5_900)), 24);
        assert_eq!(speed_points(Duration::from_millis(100)), 29);
        assert_eq!(speed_points(Duration::ZERO), 30);
    }

    #[test]
    fn test_speed_points_never_negative() {
        assert_eq!(speed_points(Duration::from_secs(30)), 0);
        assert_eq!(speed_points(Duration::from_secs(31)), 0);
        assert_eq!(speed_points(Duration::from_secs(3_600)), 0);
    }

    #[test]
    fn test_declaration_points() {
        assert_eq!(declaration_points(true), 10);
        assert_eq!(declaration_points(false), 0);
    }
}
