//! CLI reach-21 example.
//!
//! Simulates the device in a terminal: the segmented panel becomes a line of
//! text, pixels become coordinates, and the buzzer prints the notes it would
//! play. Press enter for a tick, `a` for the start button, `m` for the mode
//! button, `q` to quit.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use reach21::{Buzzer, Display, Game, Note, Phase};

/// A 10-character panel rendered as a string, one char per column.
#[derive(Default)]
struct TermPanel {
    columns: [char; 10],
    pixels: Vec<(u8, u8)>,
}

impl Display for TermPanel {
    fn show(&mut self, text: &str, start_column: u8) {
        for (offset, ch) in text.chars().enumerate() {
            if let Some(slot) = self.columns.get_mut(start_column as usize + offset) {
                *slot = ch;
            }
        }
    }

    fn set_pixel(&mut self, row: u8, col: u8) {
        self.pixels.push((row, col));
    }
}

impl TermPanel {
    fn render(&mut self) -> String {
        let text: String = self
            .columns
            .iter()
            .map(|&c| if c == '\0' { ' ' } else { c })
            .collect();
        let pixels = std::mem::take(&mut self.pixels);
        if pixels.is_empty() {
            format!("[{text}]")
        } else {
            format!("[{text}] px{pixels:?}")
        }
    }
}

struct TermBuzzer;

impl Buzzer for TermBuzzer {
    fn play_note(&mut self, note: Note, duration_ms: u16) {
        println!("  ♪ {note:?} for {duration_ms}ms");
    }
}

fn main() {
    env_logger::init();

    println!("reach-21 (enter = tick, a = start/hit, m = dealer draw, q = quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let game = Game::new(TermPanel::default(), TermBuzzer, seed);

    loop {
        let result = match prompt_line("> ").as_str() {
            "" => game.tick().map(|_| ()),
            "a" | "start" => game.press_start(),
            "m" | "mode" => game.press_mode(),
            "q" | "quit" => return,
            other => {
                println!("Unknown input: {other:?}");
                continue;
            }
        };

        if let Err(err) = result {
            println!("Fatal: {err}");
            return;
        }

        println!("{}", game.display.lock().render());
        println!(
            "  phase {:?} | dealer {:02} | player {:02} | last card {:02} | pool {}",
            game.phase(),
            game.dealer_score(),
            game.player_score(),
            game.last_drawn_card(),
            game.cards_remaining(),
        );

        // Ticks come back-to-back while the animation runs; a key press per
        // frame would be tedious.
        while game.phase() == Phase::Animating || game.phase() == Phase::Dealing {
            match game.tick() {
                Ok(_) => println!("{}", game.display.lock().render()),
                Err(err) => {
                    println!("Fatal: {err}");
                    return;
                }
            }
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
