use std::collections::VecDeque;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use super::ConvertError;

pub enum InputSource {
    Stdin,
    File(PathBuf),
    Reader(Box<dyn BufRead>),
}

impl InputSource {
    pub fn from_arg(arg: PathBuf) -> Self {
        if arg.as_os_str() == "-" {
            Self::Stdin
        } else {
            Self::File(arg)
        }
    }

    fn open(self) -> Result<Box<dyn BufRead>, ConvertError> {
        match self {
            Self::Stdin => Ok(Box::new(io::stdin().lock())),
            Self::File(path) => {
                let file = File::open(&path).map_err(|source| ConvertError::Open { path, source })?;
                Ok(Box::new(BufReader::new(file)))
            }
            Self::Reader(reader) => Ok(reader),
        }
    }
}

// Each source is opened only once the previous one is exhausted.
pub struct InputLines {
    sources: VecDeque<InputSource>,
    current: Option<Box<dyn BufRead>>,
}

impl InputLines {
    pub fn new(sources: impl IntoIterator<Item = InputSource>) -> Self {
        Self {
            sources: sources.into_iter().collect(),
            current: None,
        }
    }

    pub fn from_args(args: Vec<PathBuf>) -> Self {
        if args.is_empty() {
            return Self::new([InputSource::Stdin]);
        }
        Self::new(args.into_iter().map(InputSource::from_arg))
    }

    #[cfg(test)]
    pub(crate) fn from_reader(reader: impl BufRead + 'static) -> Self {
        Self::new([InputSource::Reader(Box::new(reader))])
    }
}

impl Iterator for InputLines {
    type Item = Result<String, ConvertError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.current.is_none() {
                let source = self.sources.pop_front()?;
                match source.open() {
                    Ok(reader) => self.current = Some(reader),
                    Err(error) => return Some(Err(error)),
                }
            }
            let Some(reader) = self.current.as_mut() else {
                continue;
            };

            let mut line = String::new();
            match reader.read_line(&mut line) {
                Ok(0) => self.current = None,
                Ok(_) => return Some(Ok(line)),
                Err(error) => {
                    self.current = None;
                    return Some(Err(ConvertError::Read(error)));
                }
            }
        }
    }
}
