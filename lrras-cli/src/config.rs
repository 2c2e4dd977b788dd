//! Table rendering configuration

/// Output flavour of an index table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableStyle {
    /// Plain text grid with `|` and `-` rules
    #[default]
    Text,
    /// LaTeX tabular body (`&` separators, `\\` and `\hline`)
    Latex,
}

/// Configuration for the index table renderer
#[derive(Debug, Clone, PartialEq)]
pub struct TableConfig {
    /// Output flavour
    pub style: TableStyle,

    /// Width each cell value is right-aligned to
    pub cell_width: usize,

    /// Render N/Z/R/P instead of the numeric codes
    pub symbols: bool,

    /// Render the header row (and, in text style, the rule below it)
    pub header: bool,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            style: TableStyle::default(),
            cell_width: 2,
            symbols: false,
            header: true,
        }
    }
}

impl TableConfig {
    /// LaTeX tabular body with numeric codes
    pub fn latex() -> Self {
        Self {
            style: TableStyle::Latex,
            ..Default::default()
        }
    }

    /// Text grid using state letters
    pub fn symbolic() -> Self {
        Self {
            symbols: true,
            cell_width: 1,
            ..Default::default()
        }
    }
}
