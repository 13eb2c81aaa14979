//! Terminal rendering for markdown output
//!
//! Rich mode styles headers and inline markdown with termimad; plain mode
//! prints the markdown untouched so output stays stable for scripts and
//! tests.

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

/// ANSI color for each header level, by number of leading `#`.
const HEADER_COLORS: [&str; 3] = ["\x1b[1;34m", "\x1b[36m", "\x1b[33m"];
const RESET: &str = "\x1b[0m";

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to the terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        if !self.rich_enabled {
            print!("{markdown}");
            return Ok(());
        }

        for line in markdown.lines() {
            match header_level(line) {
                // Headers keep their hashes so ids stay visible
                Some(level) => println!("{}{line}{RESET}", HEADER_COLORS[level - 1]),
                None => {
                    self.skin.print_inline(line);
                    println!();
                }
            }
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Header level of a markdown line, capped at the deepest styled level.
fn header_level(line: &str) -> Option<usize> {
    let hashes = line.chars().take_while(|&c| c == '#').count();
    if hashes == 0 || !line[hashes..].starts_with(' ') {
        return None;
    }
    Some(hashes.min(HEADER_COLORS.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_renderer() {
        let renderer = TerminalRenderer::new(false);
        assert!(!renderer.rich_enabled);
    }

    #[test]
    fn test_default_is_rich() {
        let renderer = TerminalRenderer::default();
        assert!(renderer.rich_enabled);
    }

    #[test]
    fn test_header_level() {
        assert_eq!(header_level("# 1. Sprint 1"), Some(1));
        assert_eq!(header_level("## 0. To Do (ID: 1)"), Some(2));
        assert_eq!(header_level("#### deep"), Some(3));
        assert_eq!(header_level("#hashtag"), None);
        assert_eq!(header_level("- Owner: sam"), None);
    }
}
