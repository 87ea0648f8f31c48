//! Board columns, a-file to h-file.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
}

impl Column {
    /// Left to right; position in the array is the column index.
    pub const ALL: [Column; 8] = [
        Column::A,
        Column::B,
        Column::C,
        Column::D,
        Column::E,
        Column::F,
        Column::G,
        Column::H,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Parse a lowercase file letter.
    pub fn from_letter(c: u8) -> Option<Column> {
        let index = c.checked_sub(b'a')?;
        Column::ALL.get(usize::from(index)).copied()
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", char::from(b'a' + self.index() as u8))
    }
}
