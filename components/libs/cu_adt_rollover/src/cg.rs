//! Combined center of gravity of the machine and its payload.

/// Mass-weighted CG height of the empty machine and the payload.
///
/// A non-positive weight on either side falls back to the unloaded CG height: there is no
/// meaningful total mass to weight by, and an empty body is the configuration the chassis
/// CG was measured for.
///
/// The result is kept within the two CG heights, rounding included.
pub fn combine_cg(
    unloaded_weight_kg: f64,
    load_weight_kg: f64,
    unloaded_cg_height_m: f64,
    load_cg_height_m: f64,
) -> f64 {
    if load_weight_kg <= 0.0 || unloaded_weight_kg <= 0.0 {
        return unloaded_cg_height_m;
    }
    let weighted = (unloaded_weight_kg * unloaded_cg_height_m
        + load_weight_kg * load_cg_height_m)
        / (unloaded_weight_kg + load_weight_kg);
    weighted
        .max(unloaded_cg_height_m.min(load_cg_height_m))
        .min(unloaded_cg_height_m.max(load_cg_height_m))
}
