/// Where a SmartBuffer accessor reads or writes.
///
/// `Cursor` uses the buffer's cursor and advances it past the accessed bytes.
/// `At` accesses an explicit byte offset and leaves the cursor untouched.
/// `At(0)` is a real offset, it never means "use the cursor".
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Offset {
    Cursor,
    At(usize),
}

impl Offset {
    /// the byte offset this resolves to for the given cursor position
    pub fn resolve(self, cursor: usize) -> usize {
        match self {
            Offset::Cursor => cursor,
            Offset::At(offset) => offset,
        }
    }

    pub fn is_cursor(self) -> bool {
        self == Offset::Cursor
    }
}

impl Default for Offset {
    fn default() -> Self {
        Offset::Cursor
    }
}

impl From<usize> for Offset {
    fn from(offset: usize) -> Self {
        Offset::At(offset)
    }
}

impl From<Option<usize>> for Offset {
    fn from(offset: Option<usize>) -> Self {
        match offset {
            Some(offset) => Offset::At(offset),
            None => Offset::Cursor,
        }
    }
}
