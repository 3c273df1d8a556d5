pub mod command;

pub use self::command::Command;

macro_rules! try_cmd {
    ($e:expr) => {
        match $e {
            Ok(v) => v,
            Err(e) => return Command::Error(e),
        }
    };
}

/// Splits a line on whitespace. A token wrapped in double quotes may contain
/// spaces and may be empty.
fn tokenize(line: &str) -> Result<Vec<&str>, &'static str> {
    let mut tokens = vec![];
    let mut rest = line.trim_start();

    while !rest.is_empty() {
        if let Some(quoted) = rest.strip_prefix('"') {
            let end = match quoted.find('"') {
                Some(end) => end,
                None => return Err("unterminated quote"),
            };
            tokens.push(&quoted[..end]);
            rest = &quoted[end + 1..];
        } else {
            let end = rest.find(char::is_whitespace).unwrap_or_else(|| rest.len());
            tokens.push(&rest[..end]);
            rest = &rest[end..];
        }
        rest = rest.trim_start();
    }

    Ok(tokens)
}

pub fn parse(line: &str) -> Command {
    let tokens = try_cmd!(tokenize(line));

    if tokens.is_empty() {
        return Command::Empty;
    }

    let l = tokens.len();

    match tokens[0] {
        "get" => {
            if l != 2 {
                return Command::Error("ARG COUNT ERROR");
            }
            Command::Getter { name: tokens[1] }
        }
        "set" => {
            if l != 3 {
                return Command::Error("ARG COUNT ERROR");
            }
            Command::Setter {
                name: tokens[1],
                number: tokens[2],
            }
        }
        "dump" => {
            if l != 1 {
                return Command::Error("ARG COUNT ERROR");
            }
            Command::Dump
        }
        _ => Command::Unknown,
    }
}
