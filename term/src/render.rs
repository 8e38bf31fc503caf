use crossterm::style::{Color, Stylize, style};
use sweeper_core::{BoardView, VisibleCell};

/// Console color for a mine count, following the classic palette.
pub(crate) fn digit_color(count: u8) -> Option<Color> {
    match count {
        1 => Some(Color::Red),
        2 => Some(Color::Blue),
        3 => Some(Color::Black),
        4 => Some(Color::Green),
        5 => Some(Color::Yellow),
        6 => Some(Color::Magenta),
        7 => Some(Color::Cyan),
        8 => Some(Color::Black),
        _ => None,
    }
}

fn glyph(cell: VisibleCell) -> char {
    match cell {
        VisibleCell::Hidden => 'H',
        VisibleCell::Mine => '*',
        VisibleCell::Empty => '.',
        // counts never exceed 8
        VisibleCell::Number(count) => char::from(b'0' + count),
    }
}

/// Draws the board with 1-indexed row and column labels, each cell three columns wide.
pub(crate) fn render(view: &BoardView, color: bool) -> String {
    let (_, cols) = view.size();
    let mut out = String::from("\n   ");

    for col in 1..=cols {
        push_label(&mut out, col);
    }
    out.push('\n');

    for (row, cells) in (1..).zip(view.rows()) {
        push_label(&mut out, row);
        for &cell in cells.iter() {
            let symbol = glyph(cell);
            let shown = match cell {
                VisibleCell::Number(count) if color => {
                    let color = digit_color(count).unwrap_or(Color::Reset);
                    style(symbol).with(color).to_string()
                }
                _ => symbol.to_string(),
            };
            out.push_str(&shown);
            out.push_str("  ");
        }
        out.push('\n');
    }
    out
}

/// Labels below 10 get two trailing spaces, wider labels one, so columns stay aligned.
fn push_label(out: &mut String, label: u8) {
    out.push_str(&label.to_string());
    out.push_str(if label < 10 { "  " } else { " " });
}
