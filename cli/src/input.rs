use std::io;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// A line typed at the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Empty,
    Quit,
    Lookup(String),
}

impl Input {
    /// Classify a raw line; names are trimmed and lowercased
    pub fn parse(line: &str) -> Self {
        let name = line.trim().to_lowercase();
        match name.as_str() {
            "" => Input::Empty,
            "exit" | "quit" => Input::Quit,
            _ => Input::Lookup(name),
        }
    }

    /// Classify a command-line argument; every non-blank argument is a name
    pub fn parse_arg(arg: &str) -> Self {
        let name = arg.trim().to_lowercase();
        if name.is_empty() {
            Input::Empty
        } else {
            Input::Lookup(name)
        }
    }
}

/// Read one line, replacing invalid UTF-8 instead of failing. `None` at EOF.
pub async fn read_line<R>(reader: &mut R) -> io::Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
{
    let mut buf = Vec::new();
    if reader.read_until(b'\n', &mut buf).await? == 0 {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}
