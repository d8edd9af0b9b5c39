// 🧱 SQL Building Blocks - literal escaping, NULL handling, script buffer
// All string interpolation into SQL goes through here; nothing else in the
// crate concatenates user data into a statement.

/// Quote a string literal: trim, double embedded single quotes, wrap in `'`.
pub fn lit(value: &str) -> String {
    let trimmed = value.trim();
    format!("'{}'", trimmed.replace('\'', "''"))
}

/// Quote an optional literal: `None` (or blank) becomes the SQL `NULL`
/// keyword. Unknown and empty are different things; an absent nation must
/// not round-trip into an empty string.
pub fn lit_opt(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => lit(v),
        _ => "NULL".to_string(),
    }
}

/// Line-oriented SQL script under construction.
///
/// Keeps emission append-only and newline handling in one place; the final
/// text always ends with a newline so generated files diff cleanly.
#[derive(Debug, Default)]
pub struct Script {
    lines: Vec<String>,
}

impl Script {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one complete statement (caller includes the trailing `;`).
    pub fn stmt(&mut self, statement: String) {
        self.lines.push(statement);
    }

    /// Append a `-- comment` line.
    pub fn comment(&mut self, text: &str) {
        self.lines.push(format!("-- {}", text));
    }

    /// Append a blank separator line.
    pub fn blank(&mut self) {
        self.lines.push(String::new());
    }

    pub fn into_string(self) -> String {
        let mut out = self.lines.join("\n");
        out.push('\n');
        out
    }
}

// ============================================================================
// TESTS
// ============================================================================
