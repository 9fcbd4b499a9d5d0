use cube_core::{Color, Cube, Face};
use owo_colors::{OwoColorize, Style};

fn style(color: Color) -> Style {
    let style = Style::new().black();
    match color {
        Color::White => style.on_white(),
        Color::Yellow => style.on_yellow(),
        Color::Green => style.on_green(),
        Color::Blue => style.on_blue(),
        Color::Red => style.on_red(),
        Color::Orange => style.on_truecolor(255, 140, 0),
    }
}

fn row(out: &mut String, cube: &Cube, face: Face, row: usize, color: bool) {
    for &sticker in &cube.face(face)[row * 3..row * 3 + 3] {
        let letter = format!(" {sticker} ");
        if color {
            out.push_str(&letter.style(style(sticker)).to_string());
        } else {
            out.push_str(&letter);
        }
    }
}

/// The cube unfolded with up on top, the sides left to right starting at left, and down below
pub fn net(cube: &Cube, color: bool) -> String {
    let mut out = String::new();
    let indent = " ".repeat(10);

    for r in 0..3 {
        out.push_str(&indent);
        row(&mut out, cube, Face::Up, r, color);
        out.push('\n');
    }

    for r in 0..3 {
        for (i, face) in [Face::Left, Face::Front, Face::Right, Face::Back]
            .into_iter()
            .enumerate()
        {
            if i > 0 {
                out.push(' ');
            }
            row(&mut out, cube, face, r, color);
        }
        out.push('\n');
    }

    for r in 0..3 {
        out.push_str(&indent);
        row(&mut out, cube, Face::Down, r, color);
        out.push('\n');
    }

    out
}
