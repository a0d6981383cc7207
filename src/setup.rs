/***************************************/
/*        3rd party libraries          */
/***************************************/
use std::io::{self, BufRead, Write};

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::SetupConfig;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildingSetup {
    pub num_floors: u32,
    pub num_elevators: u32,
}

#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error("{what} must be a whole number, got {input:?}")]
    NotANumber { what: &'static str, input: String },
    #[error("{what} must be between {min} and {max}, got {value}")]
    OutOfRange {
        what: &'static str,
        value: i64,
        min: u32,
        max: u32,
    },
    #[error("setup cancelled")]
    Cancelled,
    #[error("failed to read setup input: {0}")]
    Io(#[from] io::Error),
}

const FLOORS: &str = "number of floors";
const ELEVATORS: &str = "number of elevators";

/***************************************/
/*             Public API              */
/***************************************/
/**
 * Asks for the floor and elevator counts on `output` and reads the answers from `input`.
 *
 * End of input or an empty answer cancels the setup. Any invalid answer ends
 * the setup with an error, so a building is only created from two valid counts.
 */
pub fn prompt_setup<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    config: &SetupConfig,
) -> Result<BuildingSetup, SetupError> {
    complete_setup(None, None, input, output, config)
}

/// Validates the counts that are known and asks only for the missing ones.
pub fn complete_setup<R: BufRead, W: Write>(
    floors: Option<i64>,
    elevators: Option<i64>,
    input: &mut R,
    output: &mut W,
    config: &SetupConfig,
) -> Result<BuildingSetup, SetupError> {
    let num_floors = match floors {
        Some(value) => check_range(FLOORS, value, config.min_floors, config.max_floors)?,
        None => ask(input, output, "How many floors?", FLOORS, config.min_floors, config.max_floors)?,
    };
    let num_elevators = match elevators {
        Some(value) => check_range(ELEVATORS, value, config.min_elevators, config.max_elevators)?,
        None => ask(
            input,
            output,
            "How many elevators?",
            ELEVATORS,
            config.min_elevators,
            config.max_elevators,
        )?,
    };

    Ok(BuildingSetup {
        num_floors,
        num_elevators,
    })
}

/***************************************/
/*          Private functions          */
/***************************************/
fn ask<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
    what: &'static str,
    min: u32,
    max: u32,
) -> Result<u32, SetupError> {
    write!(output, "{} ({}-{}) ", question, min, max)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(SetupError::Cancelled);
    }
    let answer = line.trim();
    if answer.is_empty() {
        return Err(SetupError::Cancelled);
    }

    let value = answer.parse::<i64>().map_err(|_| SetupError::NotANumber {
        what,
        input: answer.to_string(),
    })?;
    check_range(what, value, min, max)
}

fn check_range(what: &'static str, value: i64, min: u32, max: u32) -> Result<u32, SetupError> {
    if value < min as i64 || value > max as i64 {
        return Err(SetupError::OutOfRange {
            what,
            value,
            min,
            max,
        });
    }
    Ok(value as u32)
}

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod setup_tests {
    use super::*;
    use std::io::Cursor;

    fn validate_setup(floors: i64, elevators: i64, config: &SetupConfig) -> Result<BuildingSetup, SetupError> {
        complete_setup(Some(floors), Some(elevators), &mut Cursor::new(""), &mut Vec::new(), config)
    }

    #[test]
    fn test_validate_setup_bounds() {
        let config = SetupConfig::default();

        assert_eq!(
            validate_setup(20, 10, &config).unwrap(),
            BuildingSetup { num_floors: 20, num_elevators: 10 }
        );
        assert!(matches!(
            validate_setup(0, 1, &config),
            Err(SetupError::OutOfRange { what: FLOORS, value: 0, .. })
        ));
        assert!(matches!(
            validate_setup(5, 11, &config),
            Err(SetupError::OutOfRange { what: ELEVATORS, value: 11, .. })
        ));
        assert!(matches!(
            validate_setup(-3, 1, &config),
            Err(SetupError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_prompt_setup() {
        // Arrange
        let mut input = Cursor::new("4\n 2 \n");
        let mut output = Vec::new();

        // Act
        let setup = prompt_setup(&mut input, &mut output, &SetupConfig::default()).unwrap();

        // Assert
        assert_eq!(setup, BuildingSetup { num_floors: 4, num_elevators: 2 });
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "How many floors? (1-20) How many elevators? (1-10) "
        );
    }

    #[test]
    fn test_prompt_setup_cancelled() {
        let config = SetupConfig::default();

        let eof = prompt_setup(&mut Cursor::new("3\n"), &mut Vec::new(), &config);
        let empty = prompt_setup(&mut Cursor::new("\n"), &mut Vec::new(), &config);

        assert!(matches!(eof, Err(SetupError::Cancelled)));
        assert!(matches!(empty, Err(SetupError::Cancelled)));
    }

    #[test]
    fn test_complete_setup_asks_only_for_missing_count() {
        // Arrange
        let mut input = Cursor::new("3\n");
        let mut output = Vec::new();

        // Act
        let setup = complete_setup(Some(7), None, &mut input, &mut output, &SetupConfig::default()).unwrap();
        let invalid = complete_setup(Some(21), None, &mut Cursor::new("3\n"), &mut Vec::new(), &SetupConfig::default());

        // Assert
        assert_eq!(setup, BuildingSetup { num_floors: 7, num_elevators: 3 });
        assert_eq!(String::from_utf8(output).unwrap(), "How many elevators? (1-10) ");
        assert!(matches!(invalid, Err(SetupError::OutOfRange { what: FLOORS, value: 21, .. })));
    }

    #[test]
    fn test_prompt_setup_rejects_bad_input() {
        let config = SetupConfig::default();

        let word = prompt_setup(&mut Cursor::new("three\n2\n"), &mut Vec::new(), &config);
        let big = prompt_setup(&mut Cursor::new("3\n99\n"), &mut Vec::new(), &config);

        assert!(matches!(word, Err(SetupError::NotANumber { what: FLOORS, .. })));
        assert!(matches!(big, Err(SetupError::OutOfRange { what: ELEVATORS, value: 99, .. })));
    }
}
