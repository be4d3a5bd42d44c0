use std::fs::File;
use std::io;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use super::random_source::RandomSource;
use super::source::GridSource;
use super::text_source::TextSource;

pub struct GridSourceBuilder {
    input: Option<PathBuf>,
    random_size: Option<usize>,
    seed: Option<u64>,
}

impl GridSourceBuilder {
    pub fn new() -> Self {
        Self {
            input: None,
            random_size: None,
            seed: None,
        }
    }

    pub fn input(mut self, input: Option<PathBuf>) -> Self {
        self.input = input;
        self
    }

    pub fn random(mut self, size: Option<usize>, seed: Option<u64>) -> Self {
        self.random_size = size;
        self.seed = seed;
        self
    }
}

impl Default for GridSourceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GridSourceBuilder {
    pub fn build_appropriate_source(self) -> Result<Box<dyn GridSource>> {
        let source: Box<dyn GridSource> = match (self.random_size, self.input) {
            (Some(_), Some(path)) => {
                bail!(
                    "cannot read {} and generate a random system at the same time",
                    path.display()
                );
            }
            (Some(size), None) => Box::new(RandomSource::new(size, self.seed)),
            (None, Some(path)) => {
                let file = File::open(&path)
                    .with_context(|| format!("opening {}", path.display()))?;
                Box::new(TextSource::new(file, path.display().to_string()))
            }
            (None, None) => Box::new(TextSource::new(io::stdin(), "stdin")),
        };
        Ok(source)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn random_and_input_are_exclusive() {
        let result = GridSourceBuilder::new()
            .input(Some(PathBuf::from("system.txt")))
            .random(Some(3), None)
            .build_appropriate_source();
        assert!(result.is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        let result = GridSourceBuilder::new()
            .input(Some(PathBuf::from("/definitely/not/here.txt")))
            .build_appropriate_source();
        assert!(result.is_err());
    }

    #[test]
    fn builds_a_random_source() {
        let mut source = GridSourceBuilder::new()
            .random(Some(2), Some(5))
            .build_appropriate_source()
            .unwrap();
        let grid = source.load().unwrap();
        assert_eq!(grid.number_of_columns(), 3);
    }
}
