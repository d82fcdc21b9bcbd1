use std::{
    fs::File,
    io::{self, Write},
    path::Path,
};

use env_logger::{Builder, Target};
use log::LevelFilter;

/// Duplicates every log line to the run's log file and stdout.
struct TeeWriter {
    file: File,
    stdout: io::Stdout,
}

impl Write for TeeWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.stdout.write_all(buf)?;
        self.file.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.stdout.flush()?;
        self.file.flush()
    }
}

pub fn init(log_path: &Path) -> anyhow::Result<()> {
    let file = File::create(log_path)?;
    Builder::new()
        .filter_level(LevelFilter::Info)
        .target(Target::Pipe(Box::new(TeeWriter {
            file,
            stdout: io::stdout(),
        })))
        .init();
    Ok(())
}
