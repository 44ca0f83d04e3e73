//! The wide per-game record.

/// One flat row of game statistics: parallel column and value vectors plus
/// the id of the page it came from. Columns and values are always the same
/// length.
#[derive(Debug, Clone, PartialEq)]
pub struct GameRecord {
    pub game_id: u64,
    pub columns: Vec<String>,
    pub values: Vec<String>,
}

impl GameRecord {
    /// Looks up a value by column name.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.columns
            .iter()
            .position(|c| c == column)
            .map(|i| self.values[i].as_str())
    }

    /// Number of columns in this record.
    pub fn width(&self) -> usize {
        self.columns.len()
    }
}
