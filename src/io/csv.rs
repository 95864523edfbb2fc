use std::io::{self, Write};
use std::path::Path;

use crate::dynamics::state::State;

/// Write trajectory data to CSV format.
///
/// Columns: time, x, v, energy
pub fn write_trajectory<W: Write>(writer: &mut W, trajectory: &[State]) -> io::Result<()> {
    writeln!(writer, "time,x,v,energy")?;

    for s in trajectory {
        writeln!(
            writer,
            "{:.4},{:.6},{:.6},{:.6}",
            s.time,
            s.x,
            s.v,
            s.energy(),
        )?;
    }

    Ok(())
}

/// Write trajectory to a CSV file at the given path.
pub fn write_trajectory_file(path: impl AsRef<Path>, trajectory: &[State]) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_trajectory(&mut file, trajectory)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_output_has_header_and_rows() {
        let traj = vec![
            State { time: 0.0, x: 1.0, v: 2.0 },
            State { time: 0.05, x: 1.1, v: 1.95 },
        ];

        let mut buf = Vec::new();
        write_trajectory(&mut buf, &traj).unwrap();
        let output = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "time,x,v,energy");
        assert_eq!(lines.len(), 3); // header + 2 data rows
        assert!(lines[1].starts_with("0.0000,1.000000,2.000000,"));
    }
}
