//! Horizontal track drawing shared by sliders and progress bars.

use ratatui::style::{Color, Style};
use ratatui::text::Span;

const FILLED: &str = "━";
const HANDLE: &str = "●";
const EMPTY: &str = "─";

/// Width of the moving segment of an indeterminate bar, as a share of the track.
const MARQUEE_SHARE: usize = 4;

/// Index of the handle cell for `fraction` on a track of `width` cells.
pub fn handle_position(fraction: f64, width: usize) -> usize {
    if width == 0 {
        return 0;
    }
    let fraction = if fraction.is_finite() {
        fraction.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let pos = (fraction * width as f64).round() as usize;
    pos.min(width - 1)
}

/// Slider track: filled up to the handle, empty after it.
pub fn slider(fraction: f64, width: usize, fill: Color, handle: Color) -> Vec<Span<'static>> {
    let pos = handle_position(fraction, width);
    (0..width)
        .map(|i| {
            if i == pos {
                Span::styled(HANDLE, Style::default().fg(handle))
            } else if i < pos {
                Span::styled(FILLED, Style::default().fg(fill))
            } else {
                Span::styled(EMPTY, Style::default().fg(Color::DarkGray))
            }
        })
        .collect()
}

/// Determinate progress bar without a handle.
pub fn progress(fraction: f64, width: usize, fill: Color) -> Vec<Span<'static>> {
    let fraction = if fraction.is_finite() {
        fraction.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let filled = (fraction * width as f64).round() as usize;
    bar(width, fill, |i| i < filled)
}

/// Looping indeterminate bar; `frame` advances the moving segment.
pub fn marquee(frame: u64, width: usize, fill: Color) -> Vec<Span<'static>> {
    if width == 0 {
        return Vec::new();
    }
    let segment = (width / MARQUEE_SHARE).max(1);
    let start = (frame % width as u64) as usize;
    bar(width, fill, |i| (i + width - start) % width < segment)
}

fn bar(width: usize, fill: Color, is_filled: impl Fn(usize) -> bool) -> Vec<Span<'static>> {
    (0..width)
        .map(|i| {
            if is_filled(i) {
                Span::styled(FILLED, Style::default().fg(fill))
            } else {
                Span::styled(EMPTY, Style::default().fg(Color::DarkGray))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(spans: &[Span<'_>]) -> String {
        spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn slider_places_handle_proportionally() {
        let spans = slider(0.5, 11, Color::Cyan, Color::White);
        assert_eq!(text(&spans), "━━━━━━●────");
        assert_eq!(handle_position(1.0, 10), 9);
        assert_eq!(handle_position(f64::NAN, 10), 0);
    }

    #[test]
    fn progress_fills_fraction() {
        assert_eq!(text(&progress(0.4, 10, Color::Cyan)), "━━━━──────");
    }

    #[test]
    fn marquee_wraps_around_the_track() {
        assert_eq!(text(&marquee(0, 8, Color::Cyan)), "━━──────");
        assert_eq!(text(&marquee(7, 8, Color::Cyan)), "━──────━");
        assert!(marquee(3, 0, Color::Cyan).is_empty());
    }
}
