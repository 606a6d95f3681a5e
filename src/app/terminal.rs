//! Terminal rendering and prompt helpers

use crate::client::view::RenderedMessage;
use std::io::{self, BufRead, Write};

/// Render one message as an ANSI line: colored sender, admin marker,
/// time, content
pub fn render_line(msg: &RenderedMessage) -> String {
    let (r, g, b) = msg.color_rgb();
    let marker = if msg.is_admin { " \u{2605}" } else { "" };
    format!(
        "\x1b[38;2;{};{};{}m{}{}\x1b[0m [{}]: {}",
        r, g, b, msg.username, marker, msg.time, msg.content
    )
}

/// Print a prompt and read one line from stdin
pub fn prompt_line(label: &str) -> io::Result<String> {
    print!("{}", label);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_line_colors_the_sender() {
        let msg = RenderedMessage {
            username: "bob".to_string(),
            color: "#00f".to_string(),
            is_admin: false,
            time: "12:00:00".to_string(),
            content: "hi".to_string(),
        };
        let line = render_line(&msg);
        assert!(line.contains("\x1b[38;2;0;0;255m"));
        assert!(line.contains("[12:00:00]: hi"));
        assert!(!line.contains('\u{2605}'));
    }

    #[test]
    fn test_render_line_marks_admins() {
        let msg = RenderedMessage {
            username: "root".to_string(),
            color: "#fff".to_string(),
            is_admin: true,
            time: "t".to_string(),
            content: "c".to_string(),
        };
        assert!(render_line(&msg).contains('\u{2605}'));
    }
}
