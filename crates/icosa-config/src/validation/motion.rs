//! Motion validation.

use crate::schema::IcosaConfig;

use super::helpers::validate_range_f64;

pub(crate) fn validate_motion(errors: &mut Vec<String>, config: &IcosaConfig) {
    let motion = &config.motion;

    // Zero smoothing would freeze the pointer response entirely.
    if !(motion.smoothing > 0.0 && motion.smoothing <= 1.0) {
        errors.push(format!(
            "motion.smoothing = {} is out of range (0, 1]",
            motion.smoothing
        ));
    }
    validate_range_f64(errors, "motion.drift_x", motion.drift_x, -0.1, 0.1);
    validate_range_f64(errors, "motion.drift_y", motion.drift_y, -0.1, 0.1);
    validate_range_f64(
        errors,
        "motion.pointer_gain",
        motion.pointer_gain,
        0.0,
        std::f64::consts::PI,
    );
}
