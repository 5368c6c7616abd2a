use svg::Document;
use svg::node::element::Path;
use svg::node::element::path::Data;

use vector_text_core::Font;
use vector_text_vsofont::decode;

const SIMPLE: &str = include_str!("../tests/data/simple.vso");

/// Width of one glyph cell before spacing, in font units.
const ADVANCE: f32 = 1.0;

fn text_to_svg_path(font: &Font, text: &str, scale: f32, margin: f32) -> (Data, f32) {
    let mut data = Data::new();
    let mut x_offset = 0.0;

    for character in text.chars() {
        let glyph = match character {
            ' ' => font.glyph("space"),
            _ => font.glyph_for_char(character),
        };

        if let Some(glyph) = glyph {
            for [start, end] in glyph.strokes() {
                data = data
                    .move_to((
                        (start.x + x_offset) * scale + margin,
                        start.y * scale + margin,
                    ))
                    .line_to((
                        (end.x + x_offset) * scale + margin,
                        end.y * scale + margin,
                    ));
            }
        }

        x_offset += ADVANCE + font.spacing();
    }

    (data, x_offset * scale + 2.0 * margin)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    use svg::node::element::Rectangle;

    let scale = 40.0;
    let margin = 10.0;

    let font = decode(SIMPLE)?;
    let (data, width) = text_to_svg_path(&font, "HI TO LAVA 17", scale, margin);
    let height = scale + 2.0 * margin;

    let path = Path::new()
        .set("fill", "none")
        .set("stroke", "black")
        .set("stroke-width", 2)
        .set("d", data);

    let background = Rectangle::new()
        .set("x", 0)
        .set("y", 0)
        .set("width", width)
        .set("height", height)
        .set("fill", "white");

    let document = Document::new()
        .add(background)
        .add(path)
        .set("viewBox", (0, 0, width, height))
        .set("width", format!("{width}px"))
        .set("height", format!("{height}px"));

    svg::save("output_vsofont.svg", &document)?;
    println!("Wrote output_vsofont.svg");

    Ok(())
}
