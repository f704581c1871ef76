/// Fixed integration step for a release altitude, in seconds.
///
/// Higher releases trade accuracy for fewer rounds. Each band includes its
/// lower bound.
pub fn select_time_step(altitude: f64) -> f64 {
    if altitude < 100.0 {
        0.01
    } else if altitude < 200.0 {
        0.02
    } else if altitude < 400.0 {
        0.03
    } else if altitude < 1000.0 {
        0.04
    } else {
        0.05
    }
}
