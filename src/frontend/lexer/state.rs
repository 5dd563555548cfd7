//! Lexer state management
//! Tracks the current indentation level and bracket nesting depth

/// Result of moving to a new line's indentation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndentChange {
    /// Same level as the previous line
    Unchanged,
    /// One level deeper
    Indent,
    /// This many levels shallower
    Dedent(usize),
}

/// Indentation jumped more than one level; carries (previous, found)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndentJump {
    pub previous: usize,
    pub found: usize,
}

/// Lexer state management
#[derive(Debug, Default)]
pub struct LexerState {
    /// Indentation level of the last line that was tracked
    indent_level: usize,
    /// Number of currently open `(`, `{`, `[`
    block_depth: usize,
}

impl LexerState {
    /// Create new lexer state
    pub fn new() -> Self {
        Self::default()
    }

    pub fn indent_level(&self) -> usize {
        self.indent_level
    }

    pub fn block_depth(&self) -> usize {
        self.block_depth
    }

    /// Indentation is ignored while any bracket is open
    pub fn in_block(&self) -> bool {
        self.block_depth > 0
    }

    pub fn enter_block(&mut self) {
        self.block_depth += 1;
    }

    /// Unbalanced closers leave the depth at zero
    pub fn leave_block(&mut self) {
        self.block_depth = self.block_depth.saturating_sub(1);
    }

    /// Move to the indentation of a new line
    pub fn transition(
        &mut self,
        indent: usize,
    ) -> Result<IndentChange, IndentJump> {
        let previous = self.indent_level;
        if indent > previous {
            if indent - previous != 1 {
                return Err(IndentJump {
                    previous,
                    found: indent,
                });
            }
            self.indent_level = indent;
            Ok(IndentChange::Indent)
        } else if indent < previous {
            self.indent_level = indent;
            Ok(IndentChange::Dedent(previous - indent))
        } else {
            Ok(IndentChange::Unchanged)
        }
    }

    /// Return to column zero, yielding the number of levels closed
    pub fn close_all(&mut self) -> usize {
        std::mem::take(&mut self.indent_level)
    }
}
