use std::io::{self, Write};

/// Writes menu lines to stdout, teeing into `writer` when one is given
/// so tests can capture the rendered menu.
///
/// A stdout failure is reported on stderr instead of aborting: the host
/// runner may have closed the pipe, and that must not look like a
/// plugin crash.
pub fn print_lines(lines: &[String], writer: &mut Option<&mut dyn Write>) -> io::Result<()> {
    for line in lines {
        if let Err(e) = writeln!(io::stdout(), "{line}") {
            eprintln!("Failed to write to stdout: {e}");
        }

        if let Some(w) = writer {
            writeln!(w, "{line}")?;
        }
    }

    Ok(())
}
