use indicatif::DecimalBytes;
use std::io::{self, Read, Write};

/// Width of the blank run used to wipe the previous progress line
const CLEAR_WIDTH: usize = 35;

/// Write sink that counts bytes and redraws a progress line on every write
#[derive(Debug)]
pub struct WriteCounter<W: Write = io::Stdout> {
    total: u64,
    display: Option<W>,
    drawn: bool,
}

impl WriteCounter<io::Stdout> {
    /// Counter drawing progress to stdout, or silent when `report` is false
    pub fn stdout(report: bool) -> Self {
        Self::new(report.then(io::stdout))
    }
}

impl<W: Write> WriteCounter<W> {
    pub fn new(display: Option<W>) -> Self {
        Self {
            total: 0,
            display,
            drawn: false,
        }
    }

    /// Total bytes written so far
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Whether a progress line has been drawn
    pub fn has_drawn(&self) -> bool {
        self.drawn
    }

    /// Renders the progress line for a byte total
    pub fn progress_line(total: u64) -> String {
        format!(
            "\r{}\rDownloading... {} complete",
            " ".repeat(CLEAR_WIDTH),
            DecimalBytes(total)
        )
    }

    pub fn into_display(self) -> Option<W> {
        self.display
    }

    fn print_progress(&mut self) {
        if let Some(display) = self.display.as_mut() {
            // a broken terminal must not abort the download
            let _ = display.write_all(Self::progress_line(self.total).as_bytes());
            let _ = display.flush();
            self.drawn = true;
        }
    }
}

impl<W: Write> Write for WriteCounter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.total += buf.len() as u64;
        self.print_progress();
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Reader that copies everything it reads into a counter
pub struct TeeReader<'a, R, W: Write> {
    inner: R,
    counter: &'a mut WriteCounter<W>,
}

impl<'a, R: Read, W: Write> TeeReader<'a, R, W> {
    pub fn new(inner: R, counter: &'a mut WriteCounter<W>) -> Self {
        Self { inner, counter }
    }
}

impl<R: Read, W: Write> Read for TeeReader<'_, R, W> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        if n > 0 {
            self.counter.write_all(&buf[..n])?;
        }
        Ok(n)
    }
}
