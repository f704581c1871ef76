use crate::control::{release::ReleaseConfig, simulator::DropOutcome};

/// Text report of one prediction, one entry per printed line.
pub struct DropReport {
    pub lines: Vec<String>,
}

impl DropReport {
    pub fn new(config: &ReleaseConfig, outcome: &DropOutcome) -> Self {
        let mut lines = vec![
            format!("DRONE ALTITUDE {}", Self::format_distance(config.drone.altitude)),
            format!(
                "DRONE VELOCITY {:.2} m/s",
                config.drone.horizontal_velocity
            ),
            format!(
                "DRONE VERTICAL SPEED {:.2} m/s",
                config.drone.vertical_velocity
            ),
            "----------------".to_string(),
        ];

        match outcome {
            DropOutcome::Landed(result) => {
                lines.push(format!(
                    "CARGO FALL DURATION {}",
                    Self::format_time(result.fall_duration)
                ));
                lines.push(format!(
                    "CARGO HORIZONTAL DISTANCE TRAVELLED {}",
                    Self::format_distance(result.horizontal_distance)
                ));
                lines.push(format!(
                    "CARGO FINAL FALL SPEED {:.2} m/s",
                    result.final_fall_speed
                ));
                lines.push(format!(
                    "CARGO FINAL HORIZONTAL SPEED {:.2} m/s",
                    result.final_horizontal_velocity
                ));
                lines.push(format!(
                    "CARGO IMPACT SPEED {:.2} m/s at {:.1}°",
                    result.impact_speed(),
                    result.impact_angle_degrees()
                ));
                lines.push(format!("SIMULATION ROUNDS {}", result.simulation_rounds));
            }
            DropOutcome::Inconclusive => lines.push("SIMULATION FAILED".to_string()),
        }

        lines.push("----------------".to_string());
        DropReport { lines }
    }

    fn format_time(elapsed_time: f64) -> String {
        if elapsed_time >= 60.0 {
            let minutes = (elapsed_time / 60.0).floor();
            let seconds = elapsed_time % 60.0;
            format!("{:.0}m {:.2}s", minutes, seconds)
        } else {
            format!("{:.2}s", elapsed_time)
        }
    }

    fn format_distance(distance: f64) -> String {
        if distance.abs() >= 1000.0 {
            format!("{:.2} km", distance / 1000.0)
        } else {
            format!("{:.2} m", distance)
        }
    }

    pub fn display(&self) {
        for line in &self.lines {
            println!("{}", line);
        }
    }
}
