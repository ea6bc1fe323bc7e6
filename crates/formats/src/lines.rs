//! Streaming line reader for corpus files
//!
//! Reads a text corpus one line at a time, keeping the line terminator,
//! with automatic gzip decompression for `.gz` paths.

use crate::{Error, Result};
use flate2::read::GzDecoder;
use std::collections::VecDeque;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use tracing::{debug, info};

/// One line of a corpus file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    /// 1-based line number in the source file
    pub number: usize,
    /// Line text, including a trailing `\n` when the line had one
    pub text: String,
}

/// Configuration for the line reader
#[derive(Debug, Clone)]
pub struct LineReaderConfig {
    /// Buffer size for BufReader
    pub buffer_size: usize,
}

impl Default for LineReaderConfig {
    fn default() -> Self {
        Self {
            buffer_size: 64 * 1024,
        }
    }
}

/// Streaming reader yielding one [`SourceLine`] per line
///
/// `\n`, `\r\n` and a lone `\r` all end a line, and every terminator is
/// handed to callers as `\n`.
pub struct LineReader<R: Read> {
    reader: BufReader<R>,
    pending: VecDeque<SourceLine>,
    line_number: usize,
    bytes_read: u64,
    total_bytes: Option<u64>,
}

impl LineReader<Box<dyn Read>> {
    /// Open a corpus file, auto-detecting gzip compression
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let metadata = file.metadata()?;
        if metadata.is_dir() {
            return Err(Error::InvalidFile(format!(
                "{} is a directory",
                path.display()
            )));
        }

        info!("Opening corpus: {:?}", path);

        match path.extension().and_then(|e| e.to_str()) {
            Some("gz") => {
                debug!("Reading gzip-compressed corpus: {:?}", path);
                let reader: Box<dyn Read> = Box::new(GzDecoder::new(file));
                Ok(Self::new_with_config(reader, LineReaderConfig::default(), None))
            }
            _ => {
                let reader: Box<dyn Read> = Box::new(file);
                Ok(Self::new_with_config(
                    reader,
                    LineReaderConfig::default(),
                    Some(metadata.len()),
                ))
            }
        }
    }
}

impl<R: Read> LineReader<R> {
    /// Create a new line reader from any Read source
    pub fn new(reader: R) -> Self {
        Self::new_with_config(reader, LineReaderConfig::default(), None)
    }

    /// Create a new line reader with custom configuration
    pub fn new_with_config(reader: R, config: LineReaderConfig, total_bytes: Option<u64>) -> Self {
        Self {
            reader: BufReader::with_capacity(config.buffer_size, reader),
            pending: VecDeque::new(),
            line_number: 0,
            bytes_read: 0,
            total_bytes,
        }
    }

    /// Get the number of lines split out so far
    pub fn lines_processed(&self) -> usize {
        self.line_number
    }

    /// Get the number of (decompressed) bytes read so far
    pub fn bytes_processed(&self) -> u64 {
        self.bytes_read
    }

    /// Get the on-disk size when known (plain files only)
    pub fn total_bytes(&self) -> Option<u64> {
        self.total_bytes
    }
}

impl<R: Read> LineReader<R> {
    /// Queue the lines held in one `\n`-terminated chunk.
    ///
    /// A lone `\r` also ends a line, so one chunk can hold several.
    fn enqueue_chunk(&mut self, mut chunk: String) {
        if chunk.ends_with("\r\n") {
            chunk.truncate(chunk.len() - 2);
            chunk.push('\n');
        }

        for piece in chunk.split_inclusive('\r') {
            let mut text = piece.to_string();
            if text.ends_with('\r') {
                text.pop();
                text.push('\n');
            }
            self.line_number += 1;
            self.pending.push_back(SourceLine {
                number: self.line_number,
                text,
            });
        }
    }
}

impl<R: Read> Iterator for LineReader<R> {
    type Item = Result<SourceLine>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(line) = self.pending.pop_front() {
            return Some(Ok(line));
        }

        let mut chunk = String::new();
        match self.reader.read_line(&mut chunk) {
            Ok(0) => None,
            Ok(n) => {
                self.bytes_read += n as u64;
                self.enqueue_chunk(chunk);
                self.pending.pop_front().map(Ok)
            }
            Err(e) => Some(Err(Error::Io(e))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_line_reader_keeps_terminators() {
        let data = "李白:床前明月光\n杜甫:国破山河在\n无尾:最后一行";

        let reader = LineReader::new(data.as_bytes());
        let lines: Vec<_> = reader.collect::<Result<Vec<_>>>().unwrap();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].text, "李白:床前明月光\n");
        assert_eq!(lines[1].number, 2);
        assert_eq!(lines[2].text, "无尾:最后一行");
    }

    #[test]
    fn test_line_reader_normalizes_crlf() {
        let data = "a:b\r\nc:d\r\n";

        let reader = LineReader::new(data.as_bytes());
        let lines: Vec<_> = reader.collect::<Result<Vec<_>>>().unwrap();

        assert_eq!(lines[0].text, "a:b\n");
        assert_eq!(lines[1].text, "c:d\n");
    }

    #[test]
    fn test_line_reader_splits_on_lone_cr() {
        let data = "李白:床前明月光\r杜甫:国破山河在\r";

        let reader = LineReader::new(data.as_bytes());
        let lines: Vec<_> = reader.collect::<Result<Vec<_>>>().unwrap();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].text, "李白:床前明月光\n");
        assert_eq!(lines[1].text, "杜甫:国破山河在\n");
        assert_eq!(lines[1].number, 2);
    }

    #[test]
    fn test_line_reader_mixed_terminators() {
        let data = "a:b\rc:d\ne:f\r\n\r\rg:h";

        let mut reader = LineReader::new(data.as_bytes());
        let lines: Vec<_> = reader.by_ref().collect::<Result<Vec<_>>>().unwrap();
        let texts: Vec<&str> = lines.iter().map(|l| l.text.as_str()).collect();

        assert_eq!(texts, vec!["a:b\n", "c:d\n", "e:f\n", "\n", "\n", "g:h"]);
        assert_eq!(lines[5].number, 6);
        assert_eq!(reader.lines_processed(), 6);
        assert_eq!(reader.bytes_processed(), data.len() as u64);
    }

    #[test]
    fn test_line_reader_yields_empty_lines() {
        let data = "a:b\n\nc:d\n";

        let reader = LineReader::new(data.as_bytes());
        let lines: Vec<_> = reader.collect::<Result<Vec<_>>>().unwrap();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1].text, "\n");
        assert_eq!(lines[2].number, 3);
    }

    #[test]
    fn test_line_reader_progress_tracking() {
        let data = "a:b\nc:d\n";
        let mut reader = LineReader::new(data.as_bytes());

        assert_eq!(reader.lines_processed(), 0);
        assert_eq!(reader.bytes_processed(), 0);

        let _ = reader.next();
        assert_eq!(reader.lines_processed(), 1);
        assert_eq!(reader.bytes_processed(), 4);

        let _ = reader.next();
        assert_eq!(reader.lines_processed(), 2);
        assert!(reader.next().is_none());
    }

    #[test]
    fn test_line_reader_invalid_utf8() {
        let data: &[u8] = &[b'a', b':', 0xff, 0xfe, b'\n'];
        let mut reader = LineReader::new(data);

        assert!(matches!(reader.next(), Some(Err(Error::Io(_)))));
    }

    #[test]
    fn test_line_reader_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "李白:床前明月光").unwrap();
        writeln!(temp_file, "王维:空山不见人").unwrap();
        temp_file.flush().unwrap();

        let reader = LineReader::open(temp_file.path()).unwrap();
        assert!(reader.total_bytes().unwrap() > 0);

        let lines: Vec<_> = reader.collect::<Result<Vec<_>>>().unwrap();
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_line_reader_missing_file() {
        let result = LineReader::open("/nonexistent/dir/shi.txt");
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_line_reader_directory() {
        let dir = tempfile::tempdir().unwrap();
        let result = LineReader::open(dir.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_line_reader_gzip() {
        use flate2::write::GzEncoder;
        use flate2::Compression;

        let temp_file = NamedTempFile::new().unwrap();
        let temp_path = temp_file.path().with_extension("txt.gz");

        {
            let file = File::create(&temp_path).unwrap();
            let mut encoder = GzEncoder::new(file, Compression::default());
            writeln!(encoder, "孟浩然:春眠不觉晓").unwrap();
            writeln!(encoder, "王之涣:白日依山尽").unwrap();
            encoder.finish().unwrap();
        }

        let reader = LineReader::open(&temp_path).unwrap();
        assert!(reader.total_bytes().is_none());

        let lines: Vec<_> = reader.collect::<Result<Vec<_>>>().unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].text, "孟浩然:春眠不觉晓\n");

        std::fs::remove_file(temp_path).unwrap();
    }
}
