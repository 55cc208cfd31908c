use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
    pub board: Board,
    #[serde(default)]
    pub dump: Dump,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Board {
    pub width: i32,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Dump {
    #[serde(default)]
    pub neighbours: bool,
}
