//! Encoding detection and transcoding module
//!
//! Input text is expected to be UTF-8 or ASCII-compatible, but files saved by
//! other tools often carry a BOM or a legacy single-byte charset. Lines are
//! decoded to UTF-8 before tokenization.

use chardetng::EncodingDetector;
use encoding_rs::Encoding;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

/// Number of leading bytes sampled for charset detection
const SAMPLE_SIZE: usize = 64 * 1024;

/// Result of encoding detection
#[derive(Debug, Clone)]
pub struct EncodingInfo {
    /// Detected encoding name
    pub name: &'static str,
    /// Confidence level (0.0 - 1.0)
    pub confidence: f32,
    /// The encoding_rs Encoding reference
    pub encoding: &'static Encoding,
    /// Length of the byte order mark, if one was found
    pub bom_len: usize,
}

impl Default for EncodingInfo {
    fn default() -> Self {
        Self {
            name: "UTF-8",
            confidence: 1.0,
            encoding: encoding_rs::UTF_8,
            bom_len: 0,
        }
    }
}

/// Detect the encoding of a byte sample
pub fn detect_encoding(sample: &[u8]) -> EncodingInfo {
    if sample.is_empty() {
        return EncodingInfo::default();
    }

    if let Some((encoding, bom_len)) = detect_bom(sample) {
        return EncodingInfo {
            name: encoding.name(),
            confidence: 1.0,
            encoding,
            bom_len,
        };
    }

    // Valid UTF-8 (a sequence cut at the sample boundary included) wins outright
    match std::str::from_utf8(sample) {
        Ok(_) => return EncodingInfo::default(),
        Err(e) if e.error_len().is_none() => return EncodingInfo::default(),
        Err(_) => {}
    }

    let mut detector = EncodingDetector::new();
    detector.feed(sample, true);
    let encoding = detector.guess(None, false);

    EncodingInfo {
        name: encoding.name(),
        confidence: 0.8,
        encoding,
        bom_len: 0,
    }
}

/// Detect BOM (Byte Order Mark) at the start of content
fn detect_bom(content: &[u8]) -> Option<(&'static Encoding, usize)> {
    if content.starts_with(&[0xEF, 0xBB, 0xBF]) {
        return Some((encoding_rs::UTF_8, 3));
    }
    if content.starts_with(&[0xFE, 0xFF]) {
        return Some((encoding_rs::UTF_16BE, 2));
    }
    if content.starts_with(&[0xFF, 0xFE]) {
        return Some((encoding_rs::UTF_16LE, 2));
    }
    None
}

/// Line iterator that decodes each line to UTF-8
///
/// ASCII-compatible encodings are streamed line by line. UTF-16 input has no
/// byte-level newline, so it is decoded in one piece and then split.
pub struct LineReader<R: BufRead> {
    reader: R,
    encoding: &'static Encoding,
    line_buffer: Vec<u8>,
    decoded: Option<std::vec::IntoIter<String>>,
}

impl LineReader<BufReader<File>> {
    /// Open a file and detect its encoding from the leading bytes
    pub fn open(path: &Path) -> io::Result<Self> {
        let file = File::open(path)?;
        Self::new(BufReader::with_capacity(SAMPLE_SIZE, file))
    }
}

impl<R: BufRead> LineReader<R> {
    /// Wrap a buffered reader, sampling its first buffer for encoding detection
    pub fn new(mut reader: R) -> io::Result<Self> {
        let info = detect_encoding(reader.fill_buf()?);
        reader.consume(info.bom_len);

        if info.name != "UTF-8" {
            log::debug!("decoding input as {} (confidence {:.1})", info.name, info.confidence);
        }

        Ok(Self::with_encoding(reader, info.encoding))
    }

    /// Wrap a reader whose encoding is already known; no BOM is skipped
    pub fn with_encoding(reader: R, encoding: &'static Encoding) -> Self {
        Self {
            reader,
            encoding,
            line_buffer: Vec::with_capacity(4096),
            decoded: None,
        }
    }

    /// Get the encoding lines are decoded from
    pub fn encoding(&self) -> &'static Encoding {
        self.encoding
    }

    fn decode_remaining(&mut self) -> io::Result<std::vec::IntoIter<String>> {
        let mut bytes = Vec::new();
        self.reader.read_to_end(&mut bytes)?;

        let (text, had_errors) = self.encoding.decode_without_bom_handling(&bytes);
        if had_errors {
            log::warn!("Encoding errors in input, using lossy conversion");
        }

        let lines: Vec<String> = text.lines().map(str::to_owned).collect();
        Ok(lines.into_iter())
    }
}

impl<R: BufRead> Iterator for LineReader<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.encoding.is_ascii_compatible() {
            if self.decoded.is_none() {
                match self.decode_remaining() {
                    Ok(lines) => self.decoded = Some(lines),
                    Err(e) => return Some(Err(e)),
                }
            }
            return self.decoded.as_mut().and_then(Iterator::next).map(Ok);
        }

        self.line_buffer.clear();

        match self.reader.read_until(b'\n', &mut self.line_buffer) {
            Ok(0) => None,
            Ok(_) => {
                while self.line_buffer.last() == Some(&b'\n')
                    || self.line_buffer.last() == Some(&b'\r') {
                    self.line_buffer.pop();
                }

                if self.encoding == encoding_rs::UTF_8 {
                    match std::str::from_utf8(&self.line_buffer) {
                        Ok(s) => Some(Ok(s.to_owned())),
                        Err(_) => Some(Ok(String::from_utf8_lossy(&self.line_buffer).into_owned())),
                    }
                } else {
                    let (decoded, had_errors) = self.encoding.decode_without_bom_handling(&self.line_buffer);
                    if had_errors {
                        log::warn!("Encoding errors in line, using lossy conversion");
                    }
                    Some(Ok(decoded.into_owned()))
                }
            }
            Err(e) => Some(Err(e)),
        }
    }
}
