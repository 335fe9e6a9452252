use std::io::{BufRead, Write};

use crate::dataset::{DatasetError, WorkRequest};

/// Writes requests as newline-delimited JSON, preserving call order.
pub struct DatasetWriter<W: Write> {
    inner: W,
    written: u64,
}

impl<W: Write> DatasetWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            written: 0,
        }
    }

    pub fn written(&self) -> u64 {
        self.written
    }

    pub fn write(
        &mut self,
        request: &WorkRequest,
    ) -> Result<(), DatasetError> {
        serde_json::to_writer(&mut self.inner, request)?;
        self.inner.write_all(b"\n")?;
        self.written += 1;
        Ok(())
    }

    pub fn finish(mut self) -> Result<W, DatasetError> {
        self.inner.flush()?;
        Ok(self.inner)
    }
}

/// Parses a JSON-lines dataset. Blank lines are ignored.
pub fn read_dataset<R: BufRead>(
    reader: R,
) -> Result<Vec<WorkRequest>, DatasetError> {
    let mut requests = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        requests.push(serde_json::from_str(&line)?);
    }
    Ok(requests)
}
