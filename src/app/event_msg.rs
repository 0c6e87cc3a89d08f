use std::fmt;

/// A normalised key name, e.g. `"q"`, `"ctrl+c"`, `"enter"`, `"1"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Key(String);

impl Key {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    Resize(u16, u16),
    KeyPressed(Key),
}

impl Msg {
    pub fn key(name: &str) -> Self {
        Msg::KeyPressed(Key::from(name))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    None,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CmdOrBatch<T> {
    Single(T),
    Batch(Vec<T>),
}

impl CmdOrBatch<Cmd> {
    pub fn none() -> Self {
        CmdOrBatch::Single(Cmd::None)
    }

    /// Flattens nested results, dropping `Cmd::None`.
    pub fn batch(parts: impl IntoIterator<Item = CmdOrBatch<Cmd>>) -> Self {
        let mut commands: Vec<Cmd> = parts
            .into_iter()
            .flat_map(CmdOrBatch::into_vec)
            .filter(|cmd| *cmd != Cmd::None)
            .collect();

        match commands.len() {
            0 => CmdOrBatch::none(),
            1 => CmdOrBatch::Single(commands.remove(0)),
            _ => CmdOrBatch::Batch(commands),
        }
    }

    pub fn into_vec(self) -> Vec<Cmd> {
        match self {
            CmdOrBatch::Single(cmd) => vec![cmd],
            CmdOrBatch::Batch(commands) => commands,
        }
    }

    pub fn is_quit(&self) -> bool {
        match self {
            CmdOrBatch::Single(cmd) => *cmd == Cmd::Quit,
            CmdOrBatch::Batch(commands) => commands.contains(&Cmd::Quit),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Sub {
    KeyboardInput,
    TerminalResize,
}
