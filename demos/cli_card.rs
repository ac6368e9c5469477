//! CLI card demo: drive a card with typed gestures and print what would be drawn.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use cardface::{
    AssetCatalog, CardOptions, CardRenderer, CardTable, DisplayItem, GestureEvent, ImageId,
    ProportionalMetrics, Rank, Rect, Rotation, Suit,
};

fn main() {
    println!("Card demo (f = flip, n = next, + / - = zoom, r WxH = resize, q = quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let table = CardTable::new(seed);

    let mut catalog = AssetCatalog::new();
    catalog.insert_back(ImageId(0));
    for (index, suit) in Suit::ALL.into_iter().enumerate() {
        for (offset, kind) in ["J", "Q", "K"].into_iter().enumerate() {
            if let Ok(rank) = Rank::face(kind) {
                catalog.insert_face(rank, suit, ImageId((index * 3 + offset + 1) as u32));
            }
        }
    }

    let options = CardOptions::default();
    let renderer = CardRenderer::new(&options, ProportionalMetrics::default(), &catalog);
    let mut bounds = Rect::new(0.0, 0.0, 250.0, 350.0);
    let mut resized = false;

    loop {
        if table.take_needs_display() | core::mem::take(&mut resized) {
            match table.render(&renderer, bounds) {
                Ok(list) => {
                    println!("\n{} at {:?}", table.snapshot().card(), bounds.size);
                    for item in &list.items {
                        println!("  {}", format_item(item));
                    }
                }
                Err(err) => println!("Render error: {err}"),
            }
        }

        let input = prompt_line("> ");
        let event = match input.as_str() {
            "f" | "flip" => GestureEvent::Flip,
            "n" | "next" => GestureEvent::Next,
            "+" => GestureEvent::Pinch(1.25),
            "-" => GestureEvent::Pinch(0.8),
            "q" | "quit" | "" => return,
            other => {
                if let Some(size) = other.strip_prefix("r ") {
                    match parse_size(size) {
                        Some((width, height)) => {
                            bounds = Rect::new(0.0, 0.0, width, height);
                            resized = true;
                        }
                        None => println!("Expected WxH, e.g. r 300x400"),
                    }
                } else {
                    println!("Unknown command.");
                }
                continue;
            }
        };

        if let Err(err) = table.handle(event) {
            println!("Gesture error: {err}");
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn parse_size(text: &str) -> Option<(f64, f64)> {
    let (width, height) = text.trim().split_once('x')?;
    Some((width.parse().ok()?, height.parse().ok()?))
}

fn format_rect(rect: &Rect) -> String {
    format!(
        "({:.1}, {:.1}) {:.1}x{:.1}",
        rect.origin.x, rect.origin.y, rect.size.width, rect.size.height
    )
}

fn format_item(item: &DisplayItem) -> String {
    match item {
        DisplayItem::ClipRoundedRect { rect, radius } => {
            format!("clip {} r={radius:.1}", format_rect(rect))
        }
        DisplayItem::FillRoundedRect { rect, radius, color } => format!(
            "fill {} r={radius:.1} #{:02x}{:02x}{:02x}",
            format_rect(rect),
            color.r,
            color.g,
            color.b
        ),
        DisplayItem::Image { rect, image } => format!("image #{} {}", image.0, format_rect(rect)),
        DisplayItem::Text {
            text,
            font_size,
            rect,
            rotation,
            role,
        } => {
            let turned = if *rotation == Rotation::HalfTurn {
                " (turned)"
            } else {
                ""
            };
            format!(
                "{role:?} {:?} {font_size:.1}pt {}{turned}",
                text,
                format_rect(rect)
            )
        }
    }
}
