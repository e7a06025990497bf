//! Rendering primitives for CLI output.

use std::io::{self, Write};

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::{ASCII_MARKDOWN, UTF8_FULL};
use comfy_table::{ContentArrangement, Table as ComfyTable};
use solid_core::Color;

use super::context::UiContext;
use super::format::truncate;
use super::theme::{frame, product_color_style, styled, styles, Badge};

/// Render a demo banner.
///
/// Pretty mode: bold title inside a box frame
/// Plain mode: the title on its own line
pub fn banner(ctx: &UiContext, title: &str) -> String {
    if !ctx.mode.is_pretty() {
        return title.to_string();
    }

    let inner = ctx.width.saturating_sub(4).max(8);
    let title = truncate(title, inner);
    let span = title.chars().count() + 2;
    let horizontal = frame::HORIZONTAL.get(ctx.unicode).repeat(span);
    let vertical = frame::VERTICAL.get(ctx.unicode);
    let body = styled(&title, styles::bold(), ctx.color);

    [
        format!(
            "{}{}{}",
            frame::TOP_LEFT.get(ctx.unicode),
            horizontal,
            frame::TOP_RIGHT.get(ctx.unicode)
        ),
        format!("{} {} {}", vertical, body, vertical),
        format!(
            "{}{}{}",
            frame::BOTTOM_LEFT.get(ctx.unicode),
            horizontal,
            frame::BOTTOM_RIGHT.get(ctx.unicode)
        ),
    ]
    .join("\n")
}

/// Render a line of narration, tinting colour words in pretty mode.
pub fn narration(ctx: &UiContext, text: &str) -> String {
    if !(ctx.mode.is_pretty() && ctx.color) {
        return text.to_string();
    }
    text.split(' ')
        .map(|word| {
            let bare = word.trim_matches(|c: char| !c.is_alphabetic());
            match bare.parse::<Color>() {
                Ok(color) => {
                    word.replacen(bare, &styled(bare, product_color_style(color), true), 1)
                }
                _ => word.to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render a badge with optional message.
pub fn badge(ctx: &UiContext, kind: Badge, message: &str) -> String {
    let badge_text = kind.display(ctx.unicode);
    let colored_badge = styled(badge_text, kind.style(), ctx.color);

    if message.is_empty() {
        colored_badge
    } else {
        format!("{} {}", colored_badge, message)
    }
}

/// Render a table using comfy-table.
///
/// Callers only use this in pretty mode; the ASCII preset is used when
/// unicode is disabled.
pub fn table(ctx: &UiContext, headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut table = ComfyTable::new();

    if ctx.unicode {
        table
            .load_preset(UTF8_FULL)
            .apply_modifier(UTF8_ROUND_CORNERS);
    } else {
        table.load_preset(ASCII_MARKDOWN);
    }

    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_width(ctx.width.min(u16::MAX as usize) as u16);
    table.set_header(headers.to_vec());

    for row in rows {
        table.add_row(row);
    }

    table.to_string()
}

/// Print a message to stdout unless in JSON mode.
pub fn print(ctx: &UiContext, message: &str) {
    if !ctx.mode.is_json() {
        write_stdout(message);
    }
}

/// Write a line to stdout.
///
/// A reader that went away (`solid | head -1`) is not an error.
pub fn write_stdout(message: &str) {
    if let Err(err) = write_line(&mut std::io::stdout().lock(), message) {
        tracing::warn!(error = %err, "failed to write to stdout");
    }
}

fn write_line(out: &mut impl Write, message: &str) -> io::Result<()> {
    match writeln!(out, "{}", message) {
        Err(err) if err.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}

/// Format an error message.
///
/// Pretty mode: "[ERR] message"
/// Plain mode: "error=message"
pub fn error_message(ctx: &UiContext, message: &str) -> String {
    if ctx.mode.is_pretty() {
        badge(ctx, Badge::Err, message)
    } else {
        format!("error={}", message)
    }
}

/// Print an error message to stderr.
pub fn print_error(ctx: &UiContext, message: &str) {
    eprintln!("{}", error_message(ctx, message));
}
