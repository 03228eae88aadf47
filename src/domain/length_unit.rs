use std::fmt::Display;

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum LengthUnit {
    Meters,
    Feet,
}

impl LengthUnit {
    pub fn suffix(&self) -> &'static str {
        match self {
            LengthUnit::Meters => "meters",
            LengthUnit::Feet => "feet",
        }
    }
}

impl Display for LengthUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.suffix())
    }
}
