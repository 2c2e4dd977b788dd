//! Index table rendering
//!
//! Renders the 4×4 combination table of one [`IndexOp`] over the codes
//! −1..=2, rows indexed by the left operand and columns by the right one.
//!
//! ```text
//!     | -1   0   1   2 
//! ----+----------------
//!  -1 | -1  -1  -1   1 
//!   0 | -1   0   1   2 
//!   1 | -1   1   1   2 
//!   2 |  1   2   2   2 
//! ```

use std::fmt;

use lrras_core::{IndexOp, SpaceIndex};
use tracing::debug;

use crate::config::{TableConfig, TableStyle};

/// A single operator table, rendered through `Display`
pub struct IndexTable<'a> {
    op: IndexOp,
    config: &'a TableConfig,
}

impl<'a> IndexTable<'a> {
    pub fn new(op: IndexOp, config: &'a TableConfig) -> Self {
        Self { op, config }
    }

    fn cell(&self, f: &mut fmt::Formatter<'_>, index: SpaceIndex) -> fmt::Result {
        let width = self.config.cell_width;
        if self.config.symbols {
            write!(f, "{:>width$}", index.symbol())
        } else {
            write!(f, "{:>width$}", index.code())
        }
    }

    /// Text cells are padded by one space on both sides, the last one too
    fn text_cell(&self, f: &mut fmt::Formatter<'_>, index: SpaceIndex) -> fmt::Result {
        f.write_str(" ")?;
        self.cell(f, index)?;
        f.write_str(" ")
    }

    fn fmt_text(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = " ".repeat(self.config.cell_width + 2);

        if self.config.header {
            write!(f, "{label}|")?;
            for b in SpaceIndex::ALL {
                self.text_cell(f, b)?;
            }
            writeln!(f)?;

            write!(f, "{}+", "-".repeat(label.len()))?;
            writeln!(f, "{}", "-".repeat((self.config.cell_width + 2) * SpaceIndex::ALL.len()))?;
        }

        for a in SpaceIndex::ALL {
            f.write_str(" ")?;
            self.cell(f, a)?;
            f.write_str(" |")?;
            for b in SpaceIndex::ALL {
                self.text_cell(f, self.op.apply(a, b))?;
            }
            writeln!(f)?;
        }

        Ok(())
    }

    fn fmt_latex(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.config.header {
            write!(f, "{}", " ".repeat(self.config.cell_width + 2))?;
            for b in SpaceIndex::ALL {
                f.write_str("& ")?;
                self.cell(f, b)?;
                f.write_str(" ")?;
            }
            writeln!(f, r"\\")?;
            writeln!(f, r"\hline")?;
        }

        for a in SpaceIndex::ALL {
            f.write_str(" ")?;
            self.cell(f, a)?;
            f.write_str(" ")?;
            for b in SpaceIndex::ALL {
                f.write_str("& ")?;
                self.cell(f, self.op.apply(a, b))?;
                f.write_str(" ")?;
            }
            writeln!(f, r"\\")?;
            writeln!(f, r"\hline")?;
        }

        Ok(())
    }
}

impl fmt::Display for IndexTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.config.style {
            TableStyle::Text => self.fmt_text(f),
            TableStyle::Latex => self.fmt_latex(f),
        }
    }
}

/// Render one operator table
pub fn render_table(op: IndexOp, config: &TableConfig) -> String {
    debug!(op = op.name(), style = ?config.style, "rendering index table");
    IndexTable::new(op, config).to_string()
}

/// Render the four operator tables, each under a `μ_<op>` title
pub fn render_all(config: &TableConfig) -> String {
    IndexOp::ALL
        .iter()
        .map(|&op| format!("μ_{} ({})\n{}", op.name(), op.symbol(), render_table(op, config)))
        .collect::<Vec<_>>()
        .join("\n")
}
