//! Line-oriented batch input: one coordinate expression per line, from a
//! file (`@path`) or stdin (`@-`).

use std::fs::File;
use std::io::{self, BufRead, BufReader};

pub enum FileReader {
    Stdin(BufReader<io::Stdin>),
    File(BufReader<File>),
    #[cfg(test)]
    Test(BufReader<io::Cursor<Vec<u8>>>),
}

impl BufRead for FileReader {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        match self {
            FileReader::Stdin(reader) => reader.fill_buf(),
            FileReader::File(reader) => reader.fill_buf(),
            #[cfg(test)]
            FileReader::Test(reader) => reader.fill_buf(),
        }
    }

    fn consume(&mut self, amt: usize) {
        match self {
            FileReader::Stdin(reader) => reader.consume(amt),
            FileReader::File(reader) => reader.consume(amt),
            #[cfg(test)]
            FileReader::Test(reader) => reader.consume(amt),
        }
    }
}

impl io::Read for FileReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            FileReader::Stdin(reader) => reader.read(buf),
            FileReader::File(reader) => reader.read(buf),
            #[cfg(test)]
            FileReader::Test(reader) => reader.read(buf),
        }
    }
}

pub fn create_file_reader(spec: &str) -> io::Result<FileReader> {
    if spec == "@-" {
        Ok(FileReader::Stdin(BufReader::new(io::stdin())))
    } else {
        let path = &spec[1..]; // Remove the '@' prefix
        let file = File::open(path)?;
        Ok(FileReader::File(BufReader::new(file)))
    }
}

/// Lines from a reader with blanks and `#` comment lines skipped and
/// surrounding whitespace trimmed.
pub struct CoordinateLines<R: BufRead> {
    lines: io::Lines<R>,
}

impl<R: BufRead> Iterator for CoordinateLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.lines.next()? {
                Ok(line) => {
                    let trimmed = line.trim();
                    if trimmed.is_empty() || trimmed.starts_with('#') {
                        continue;
                    }
                    return Some(Ok(trimmed.to_string()));
                }
                Err(e) => return Some(Err(e)),
            }
        }
    }
}

pub fn coordinate_lines<R: BufRead>(reader: R) -> CoordinateLines<R> {
    CoordinateLines {
        lines: reader.lines(),
    }
}
