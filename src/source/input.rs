use std::fs::File;
use std::io::{BufReader, Bytes, Read};
use std::path::Path;

use crate::error::Error;


/// Bytes of an in-memory string.
pub struct StringSource {
    bytes: Vec<u8>,
    next: usize,
}

impl StringSource {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self {
            bytes: s.as_ref().as_bytes().to_vec(),
            next: 0,
        }
    }
}

impl Iterator for StringSource {
    type Item = Result<u8, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let c = *self.bytes.get(self.next)?;
        self.next += 1;
        Some(Ok(c))
    }
}


/// Bytes of any reader, e.g. stdin or a file.
pub struct ReadSource<R: Read> {
    bytes: Bytes<BufReader<R>>,
}

impl<R: Read> ReadSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            bytes: BufReader::new(reader).bytes(),
        }
    }
}

impl ReadSource<File> {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        Ok(Self::new(File::open(path)?))
    }
}

impl<R: Read> Iterator for ReadSource<R> {
    type Item = Result<u8, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        self.bytes.next().map(|res| res.map_err(|e| e.into()))
    }
}
