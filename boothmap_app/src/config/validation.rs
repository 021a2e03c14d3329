// Copyright 2026 the Boothmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Range checks for [`VenueConfig`].

use super::schema::VenueConfig;
use crate::error::ConfigError;

/// Runs every check, collecting all failures into one error.
pub(crate) fn validate(config: &VenueConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    let v = &config.viewport;
    validate_positive(&mut errors, "content.width", config.content.width);
    validate_positive(&mut errors, "content.height", config.content.height);
    validate_range_f64(&mut errors, "viewport.padding", v.padding, 0.0, f64::MAX);
    validate_positive(&mut errors, "viewport.min_scale_floor", v.min_scale_floor);
    validate_positive(&mut errors, "viewport.max_scale", v.max_scale);
    validate_range_f64(
        &mut errors,
        "viewport.min_scale_fit_ratio",
        v.min_scale_fit_ratio,
        f64::MIN_POSITIVE,
        1.0,
    );
    if v.max_scale < v.min_scale_floor {
        errors.push(format!(
            "viewport.max_scale = {} is below viewport.min_scale_floor = {}",
            v.max_scale, v.min_scale_floor
        ));
    }
    if !(v.zoom_step > 1.0 && v.zoom_step.is_finite()) {
        errors.push(format!(
            "viewport.zoom_step = {} must be greater than 1",
            v.zoom_step
        ));
    }
    validate_range_f64(&mut errors, "viewport.wheel_step", v.wheel_step, 0.0, 1.0);

    validate_positive(&mut errors, "pan.target_scale", config.pan.target_scale);
    validate_range_f64(
        &mut errors,
        "interaction.click_tolerance",
        config.interaction.click_tolerance,
        0.0,
        f64::MAX,
    );

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::Validation(errors.join("; ")))
    }
}

fn validate_positive(errors: &mut Vec<String>, name: &str, value: f64) {
    if !(value > 0.0 && value.is_finite()) {
        errors.push(format!("{name} = {value} must be positive"));
    }
}

fn validate_range_f64(errors: &mut Vec<String>, name: &str, value: f64, min: f64, max: f64) {
    if !(min..=max).contains(&value) {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}
