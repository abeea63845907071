use glam::DVec3;

use crate::error::{NavError, NavResult};

pub(crate) fn finite_point(value: DVec3, field_name: &str) -> NavResult<DVec3> {
    if !value.is_finite() {
        return Err(NavError::InvalidData(format!("{field_name} must be finite")));
    }
    Ok(value)
}

/// Normalizes a direction, rejecting zero-length and non-finite input.
pub(crate) fn unit_direction(value: DVec3, field_name: &str) -> NavResult<DVec3> {
    let value = finite_point(value, field_name)?;
    value.try_normalize().ok_or_else(|| {
        NavError::InvalidData(format!("{field_name} must have non-zero length"))
    })
}

pub(crate) fn positive_spacing(value: f64, field_name: &str) -> NavResult<f64> {
    if !value.is_finite() || value <= 0.0 {
        return Err(NavError::InvalidData(format!(
            "{field_name} must be finite and > 0"
        )));
    }
    Ok(value)
}
