use std::io::{self, Write};

use crate::dynamics::State;

/// Write trajectory samples to CSV format.
///
/// Columns: time, x, y, vel_x, vel_y, speed
pub fn write_trajectory<W: Write>(writer: &mut W, states: &[State]) -> io::Result<()> {
    writeln!(writer, "time,x,y,vel_x,vel_y,speed")?;

    for s in states {
        writeln!(
            writer,
            "{:.4},{:.4},{:.4},{:.4},{:.4},{:.4}",
            s.time,
            s.pos.x,
            s.pos.y,
            s.vel.x,
            s.vel.y,
            s.speed(),
        )?;
    }

    Ok(())
}

/// Write trajectory samples to a CSV file at the given path.
pub fn write_trajectory_file(path: &str, states: &[State]) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_trajectory(&mut file, states)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector2;

    #[test]
    fn csv_output_has_header_and_rows() {
        let states = vec![
            State {
                time: 0.0,
                pos: Vector2::new(0.0, 0.6),
                vel: Vector2::new(39.28, 39.28),
            },
            State {
                time: 0.01,
                pos: Vector2::new(0.3928, 0.9928),
                vel: Vector2::new(38.0, 37.9),
            },
        ];

        let mut buf = Vec::new();
        write_trajectory(&mut buf, &states).unwrap();
        let output = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "time,x,y,vel_x,vel_y,speed");
        assert_eq!(lines.len(), 3); // header + 2 data rows
        assert!(lines[1].starts_with("0.0000,0.0000,0.6000,"));
    }
}
