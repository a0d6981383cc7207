/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    Up(i64),
    Down(i64),
    Board { index: usize, count: usize },
    Wait { floor: i32, count: usize },
    Refresh,
    Render,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("unknown command {0:?}, type help for a list")]
    Unknown(String),
    #[error("{command} needs {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },
    #[error("{argument} must be a whole number, got {input:?}")]
    BadArgument { argument: &'static str, input: String },
    #[error("{0} takes no more arguments")]
    TrailingInput(&'static str),
}

pub const USAGE: &str = "\
commands:
  up <index>             move elevator <index> up one floor
  down <index>           move elevator <index> down one floor
  board <index> <count>  set the passengers inside elevator <index>
  wait <floor> <count>   set the people waiting on <floor>
  refresh                pull the latest state and redraw
  render                 redraw without pulling state
  help                   show this list
  quit                   leave the console";

/***************************************/
/*             Public API              */
/***************************************/

/// Parses one console line. Blank lines yield `None`.
pub fn parse_command(line: &str) -> Result<Option<ConsoleCommand>, CommandError> {
    let mut words = line.split_whitespace();
    let keyword = match words.next() {
        Some(keyword) => keyword.to_lowercase(),
        None => return Ok(None),
    };

    let command = match keyword.as_str() {
        "up" => ConsoleCommand::Up(argument(&mut words, "up", "index")?),
        "down" => ConsoleCommand::Down(argument(&mut words, "down", "index")?),
        "board" => ConsoleCommand::Board {
            index: argument(&mut words, "board", "index")?,
            count: argument(&mut words, "board", "count")?,
        },
        "wait" => ConsoleCommand::Wait {
            floor: argument(&mut words, "wait", "floor")?,
            count: argument(&mut words, "wait", "count")?,
        },
        "refresh" => ConsoleCommand::Refresh,
        "render" => ConsoleCommand::Render,
        "help" | "?" => ConsoleCommand::Help,
        "quit" | "exit" | "q" => ConsoleCommand::Quit,
        _ => return Err(CommandError::Unknown(keyword.clone())),
    };

    if words.next().is_some() {
        return Err(CommandError::TrailingInput(keyword_name(&command)));
    }
    Ok(Some(command))
}

/***************************************/
/*          Private functions          */
/***************************************/
fn argument<'a, T, I>(words: &mut I, command: &'static str, argument: &'static str) -> Result<T, CommandError>
where
    T: std::str::FromStr,
    I: Iterator<Item = &'a str>,
{
    let word = words
        .next()
        .ok_or(CommandError::MissingArgument { command, argument })?;
    word.parse::<T>().map_err(|_| CommandError::BadArgument {
        argument,
        input: word.to_string(),
    })
}

fn keyword_name(command: &ConsoleCommand) -> &'static str {
    match command {
        ConsoleCommand::Up(_) => "up",
        ConsoleCommand::Down(_) => "down",
        ConsoleCommand::Board { .. } => "board",
        ConsoleCommand::Wait { .. } => "wait",
        ConsoleCommand::Refresh => "refresh",
        ConsoleCommand::Render => "render",
        ConsoleCommand::Help => "help",
        ConsoleCommand::Quit => "quit",
    }
}
