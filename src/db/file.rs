//! Whole-file reads and rewrites of the Surah data file. There is no header,
//! no escaping, and no partial update: every save replaces the file.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::Surah;

/// Records recovered from the file, plus how many lines could not be parsed.
#[derive(Debug, Default)]
pub struct Loaded {
    pub surahs: Vec<Surah>,
    pub skipped: usize,
}

/// Read one line without its terminator, decoding invalid UTF-8 with
/// replacement characters. `Ok(None)` at end of input.
pub(crate) fn read_line_lossy<R: BufRead>(
    reader: &mut R,
    buf: &mut Vec<u8>,
) -> io::Result<Option<String>> {
    buf.clear();
    if reader.read_until(b'\n', buf)? == 0 {
        return Ok(None);
    }
    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }
    Ok(Some(String::from_utf8_lossy(buf).into_owned()))
}

/// Read every line in file order. Unparseable lines are counted and dropped;
/// only failing to open or read the file is an error. Bytes that are not
/// UTF-8 never fail the load, so one bad line cannot cost the other records.
pub fn read_surahs(path: &Path) -> Result<Loaded> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let mut reader = BufReader::new(file);
    let mut buf = Vec::new();

    let mut loaded = Loaded::default();
    while let Some(line) = read_line_lossy(&mut reader, &mut buf)
        .with_context(|| format!("failed to read {}", path.display()))?
    {
        match Surah::from_line(&line) {
            Ok(surah) => loaded.surahs.push(surah),
            Err(_) => loaded.skipped += 1,
        }
    }

    Ok(loaded)
}

/// Truncate the file and write one line per record, newline-terminated.
pub fn write_surahs(path: &Path, surahs: &[Surah]) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    for surah in surahs {
        writeln!(writer, "{}", surah.to_line())
            .with_context(|| format!("failed to write {}", path.display()))?;
    }

    writer
        .flush()
        .with_context(|| format!("failed to flush {}", path.display()))
}
