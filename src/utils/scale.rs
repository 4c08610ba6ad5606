/// Maximum PWM duty value a pin register accepts.
pub const DUTY_MAX: u16 = 1023;

/// Maps a brightness percentage (0-100) onto the PWM duty range (0-[`DUTY_MAX`]).
///
/// This is the LED equivalent of Arduino `map()`:
/// <https://www.arduino.cc/reference/en/language/functions/math/map/>
/// except the result is rounded to the nearest duty value rather than truncated.
///
/// # Parameters
/// * `percent`:  the brightness percentage; values above 100 saturate to [`DUTY_MAX`]
///
/// # Returns
/// The duty value to write to the pin.
pub fn percent_to_duty(percent: u8) -> u16 {
    let percent = percent.min(100) as u32;
    ((percent * DUTY_MAX as u32 + 50) / 100) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duty_bounds() {
        assert_eq!(percent_to_duty(0), 0);
        assert_eq!(percent_to_duty(100), DUTY_MAX);
        // Out-of-range percentages saturate.
        assert_eq!(percent_to_duty(250), DUTY_MAX);
    }

    #[test]
    fn test_duty_rounding() {
        assert_eq!(percent_to_duty(50), 512); // round(511.5)
        assert_eq!(percent_to_duty(55), 563); // round(562.65)
        assert_eq!(percent_to_duty(70), 716); // round(716.1)
    }

    #[test]
    fn test_duty_monotonic() {
        let mut previous = 0;
        for percent in 0..=100 {
            let duty = percent_to_duty(percent);
            assert!(duty >= previous, "duty regressed at {}%", percent);
            previous = duty;
        }
    }
}
