//! Conversation rendering.
//!
//! Turns the display log into bubble lines:
//! - user bubbles on the right, assistant and error bubbles on the left
//! - text wrapped by terminal display width
//! - inline Markdown links shown as `text (url)`, bold markers dropped

use chrono::{Local, TimeZone};
use ratatui::{
    layout::Alignment,
    style::Style,
    text::{Line, Span},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::domain::{
    display_log::{DisplayMessage, MessageAuthor},
    persona,
};

use super::styles;

const MIN_BUBBLE_TEXT_WIDTH: usize = 20;

/// Builds every conversation line for a viewport `width` columns wide.
pub fn conversation_lines(
    messages: &[DisplayMessage],
    typing: bool,
    width: usize,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for (index, message) in messages.iter().enumerate() {
        if index > 0 {
            lines.push(Line::default());
        }
        lines.extend(message_lines(message, width));
    }

    if typing {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            persona::TYPING_INDICATOR.to_owned(),
            styles::typing_indicator_style(),
        )));
    }

    lines
}

fn message_lines(message: &DisplayMessage, width: usize) -> Vec<Line<'static>> {
    let alignment = if message.is_from_user() {
        Alignment::Right
    } else {
        Alignment::Left
    };
    let style = bubble_style(message.author);

    let rows = wrap_text(
        &render_inline_markdown(&message.text),
        bubble_text_width(width),
    );
    let row_width = rows.iter().map(|row| row.width()).max().unwrap_or(0);

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(
        Line::from(Span::styled(
            format_time(message.sent_at_unix_ms),
            styles::message_time_style(),
        ))
        .alignment(alignment),
    );

    for row in rows {
        let padding = " ".repeat(row_width - row.width());
        lines.push(
            Line::from(Span::styled(format!(" {row}{padding} "), style)).alignment(alignment),
        );
    }

    lines
}

fn bubble_style(author: MessageAuthor) -> Style {
    match author {
        MessageAuthor::User => styles::user_bubble_style(),
        MessageAuthor::Assistant => styles::assistant_bubble_style(),
        MessageAuthor::Error => styles::error_bubble_style(),
    }
}

/// Text columns available inside a bubble, excluding its side padding.
fn bubble_text_width(width: usize) -> usize {
    let inner = width.saturating_sub(2);
    (width * 3 / 4)
        .saturating_sub(2)
        .max(MIN_BUBBLE_TEXT_WIDTH)
        .min(inner)
        .max(1)
}

fn format_time(unix_ms: i64) -> String {
    Local
        .timestamp_millis_opt(unix_ms)
        .single()
        .map(|time| time.format("%H:%M").to_string())
        .unwrap_or_default()
}

/// Rewrites `[label](url)` as `label (url)` and removes `**` markers.
pub fn render_inline_markdown(text: &str) -> String {
    let text = text.replace("**", "");
    let mut rendered = String::with_capacity(text.len());
    let mut rest = text.as_str();

    while let Some(open) = rest.find('[') {
        let after_open = &rest[open + 1..];

        let Some(close) = after_open.find("](") else {
            break;
        };
        let label = &after_open[..close];
        if label.contains('[') || label.contains(']') {
            rendered.push_str(&rest[..=open]);
            rest = after_open;
            continue;
        }

        let after_label = &after_open[close + 2..];
        let Some(end) = after_label.find(')') else {
            break;
        };

        rendered.push_str(&rest[..open]);
        rendered.push_str(label);
        rendered.push_str(" (");
        rendered.push_str(&after_label[..end]);
        rendered.push(')');
        rest = &after_label[end + 1..];
    }

    rendered.push_str(rest);
    rendered
}

/// Word-wraps `text` so no row exceeds `width` display columns.
///
/// Explicit newlines start a new row. Words wider than a row are split.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        let mut current_width = 0;

        for word in paragraph.split_whitespace() {
            let word_width = word.width();

            if current_width > 0 && current_width + 1 + word_width > width {
                rows.push(std::mem::take(&mut current));
                current_width = 0;
            }

            if word_width > width {
                for ch in word.chars() {
                    let ch_width = ch.width().unwrap_or(0);
                    if current_width > 0 && current_width + ch_width > width {
                        rows.push(std::mem::take(&mut current));
                        current_width = 0;
                    }
                    current.push(ch);
                    current_width += ch_width;
                }
                continue;
            }

            if current_width > 0 {
                current.push(' ');
                current_width += 1;
            }
            current.push_str(word);
            current_width += word_width;
        }

        rows.push(current);
    }

    rows
}
