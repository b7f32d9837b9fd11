use crate::domain::ports::OutputSink;
use crate::utils::error::{NotifyError, Result};
use std::io::Write;
use std::sync::{Mutex, MutexGuard};

/// Writes each line to the process's standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl StdoutSink {
    pub fn new() -> Self {
        Self
    }
}

impl OutputSink for StdoutSink {
    fn write_line(&self, line: &str) -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", line)?;
        stdout.flush()?;
        Ok(())
    }
}

/// Collects lines in memory, in write order.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    fn buffer(&self) -> Result<MutexGuard<'_, Vec<String>>> {
        self.lines.lock().map_err(|e| NotifyError::SinkError {
            message: format!("memory sink lock poisoned: {}", e),
        })
    }

    pub fn lines(&self) -> Result<Vec<String>> {
        let lines = self.buffer()?;
        Ok(lines.clone())
    }

    /// Returns captured lines and clears the buffer.
    pub fn take(&self) -> Result<Vec<String>> {
        let mut lines = self.buffer()?;
        Ok(std::mem::take(&mut *lines))
    }
}

impl OutputSink for MemorySink {
    fn write_line(&self, line: &str) -> Result<()> {
        let mut lines = self.buffer()?;
        lines.push(line.to_string());
        Ok(())
    }
}
