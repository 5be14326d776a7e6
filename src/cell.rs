use crossterm::style::Color;

/// The binary state of a single cell.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Cell {
    Dead,
    Alive,
}

impl Cell {
    pub fn is_alive(&self) -> bool {
        matches!(self, Cell::Alive)
    }

    /// The opposite state, used when the host clicks a cell.
    pub fn toggled(&self) -> Cell {
        match self {
            Cell::Alive => Cell::Dead,
            Cell::Dead => Cell::Alive,
        }
    }

    pub fn char(&self) -> char {
        match self {
            Cell::Alive => 'o',
            Cell::Dead => '.',
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Cell::Alive => Color::Green,
            Cell::Dead => Color::DarkGrey,
        }
    }
}

pub fn from_char(value: char) -> Option<Cell> {
    match value {
        '.' => Some(Cell::Dead),
        'o' => Some(Cell::Alive),
        _ => None,
    }
}
