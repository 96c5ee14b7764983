use strum::{Display, EnumIter, EnumString};

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Side length, in cells, of the square maze for this level.
    pub fn size(self) -> usize {
        match self {
            Difficulty::Easy => 10,
            Difficulty::Medium => 20,
            Difficulty::Hard => 30,
        }
    }

    /// `(cols, rows)`.
    pub fn dimensions(self) -> (usize, usize) {
        (self.size(), self.size())
    }

    pub fn from_key(c: char) -> Option<Self> {
        match c {
            '1' => Some(Difficulty::Easy),
            '2' => Some(Difficulty::Medium),
            '3' => Some(Difficulty::Hard),
            _ => None,
        }
    }
}
