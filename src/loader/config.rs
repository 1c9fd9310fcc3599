/*!
Engine configuration: a flat `key=value` text file naming the table
dimensions, memory size, initial command pointer, and initial stack
pointer (spec.md 3, 5). Blank lines and lines starting with `#` are
comments; any other unrecognized key, or a missing/malformed value, is a
fatal `EngineError::Config`.
*/

use crate::error::{EngineError, EngineResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    pub table_width: usize,
    pub table_height: usize,
    pub memory_count: usize,
    pub program_address: usize,
    pub stack_pointer: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            table_width: 8,
            table_height: 8,
            memory_count: 512,
            program_address: 0,
            stack_pointer: 400,
        }
    }
}

pub fn parse_config(contents: &str) -> EngineResult<EngineConfig> {
    let mut config = EngineConfig::default();
    for (line_number, raw_line) in contents.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let (key, value) = line.split_once('=').ok_or_else(|| {
            EngineError::config(format!("line {}: expected key=value, got {raw_line:?}", line_number + 1))
        })?;
        let key = key.trim();
        let value = value.trim();
        match key {
            "table" => {
                let (w, h) = value.split_once('x').ok_or_else(|| {
                    EngineError::config(format!("line {}: table dimensions must be WxH, got {value:?}", line_number + 1))
                })?;
                config.table_width = parse_usize(w, line_number)?;
                config.table_height = parse_usize(h, line_number)?;
            }
            "memory" => config.memory_count = parse_usize(value, line_number)?,
            "program" => config.program_address = parse_usize(value, line_number)?,
            "stack" => config.stack_pointer = parse_usize(value, line_number)?,
            other => {
                return Err(EngineError::config(format!(
                    "line {}: unknown config key {other:?}",
                    line_number + 1
                )))
            }
        }
    }
    Ok(config)
}

fn parse_usize(text: &str, line_number: usize) -> EngineResult<usize> {
    text.parse::<usize>()
        .map_err(|_| EngineError::config(format!("line {}: expected a non-negative integer, got {text:?}", line_number + 1)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_known_key() {
        let config = parse_config("table=16x12\nmemory=1024\nprogram=3\nstack=500\n").unwrap();
        assert_eq!(config.table_width, 16);
        assert_eq!(config.table_height, 12);
        assert_eq!(config.memory_count, 1024);
        assert_eq!(config.program_address, 3);
        assert_eq!(config.stack_pointer, 500);
    }

    #[test]
    fn comments_and_blank_lines_are_skipped() {
        let config = parse_config("# a comment\n\ntable=4x4\n").unwrap();
        assert_eq!(config.table_width, 4);
    }

    #[test]
    fn unknown_key_is_a_config_error() {
        assert!(parse_config("bogus=1").is_err());
    }

    #[test]
    fn malformed_table_dimension_is_a_config_error() {
        assert!(parse_config("table=16").is_err());
    }
}
