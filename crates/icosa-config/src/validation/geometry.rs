//! Geometry and camera validation.

use crate::schema::IcosaConfig;

use super::helpers::validate_range_f64;

pub(crate) fn validate_geometry(errors: &mut Vec<String>, config: &IcosaConfig) {
    validate_range_f64(errors, "geometry.size", config.geometry.size, 1.0, 2000.0);
    validate_range_f64(
        errors,
        "geometry.edge_threshold",
        config.geometry.edge_threshold,
        2.01,
        3.2,
    );
}

/// The camera must sit outside the object, otherwise `distance + z`
/// reaches zero for some rotation and the projection blows up.
pub(crate) fn validate_camera(errors: &mut Vec<String>, config: &IcosaConfig) {
    let distance = config.camera.distance;
    validate_range_f64(errors, "camera.distance", distance, 100.0, 100_000.0);

    let phi = (1.0 + 5f64.sqrt()) / 2.0;
    let circumradius = config.geometry.size * (1.0 + phi * phi).sqrt();
    if distance <= circumradius {
        errors.push(format!(
            "camera.distance = {distance} must exceed the icosahedron circumradius ({circumradius:.1})"
        ));
    }
}
