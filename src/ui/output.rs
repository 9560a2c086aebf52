use std::io::{self, Write};

use icongen::config::ConfigWarning;

pub fn print_config_warnings(warnings: &[ConfigWarning]) {
    let mut err = io::stderr().lock();
    let _ = write_config_warnings(&mut err, warnings);
}

fn write_config_warnings(out: &mut impl Write, warnings: &[ConfigWarning]) -> io::Result<()> {
    for w in warnings {
        if let Some(line) = w.line {
            writeln!(
                out,
                "⚠ Unknown config key '{}' in {}:{}",
                w.key,
                w.file.display(),
                line
            )?;
        } else {
            writeln!(out, "⚠ Unknown config key '{}' in {}", w.key, w.file.display())?;
        }

        if let Some(suggestion) = &w.suggestion {
            writeln!(out, "   Did you mean '{}'?\n", suggestion)?;
        }
    }
    Ok(())
}
