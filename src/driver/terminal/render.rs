use std::io::{self, Write};

use crate::game::{Category, Game, GROUP_SIZE};

/// One line describing a solved or revealed category.
pub fn category_line(category: &Category) -> String {
    format!(
        "[{}] {}: {}",
        category.color,
        category.name,
        category.words.join(", ")
    )
}

/// Lay out the board four words to a row, bracketing the selected ones.
pub fn grid<R>(game: &Game<R>) -> Vec<String> {
    let width = game
        .remaining_words()
        .iter()
        .map(|w| w.chars().count())
        .max()
        .unwrap_or(0)
        + 2;

    game.remaining_words()
        .chunks(GROUP_SIZE)
        .map(|row| {
            row.iter()
                .map(|word| {
                    let cell = if game.is_selected(word) {
                        format!("[{}]", word)
                    } else {
                        format!(" {} ", word)
                    };
                    format!("{:<width$}", cell, width = width)
                })
                .collect::<Vec<_>>()
                .join(" ")
                .trim_end()
                .to_owned()
        })
        .collect()
}

/// Filled dots for mistakes still available, hollow ones for mistakes made.
pub fn mistake_dots<R>(game: &Game<R>) -> String {
    let mut dots = vec!["●"; game.mistakes_remaining()];
    dots.extend(vec!["○"; game.mistakes()]);
    dots.join(" ")
}

pub fn board<R>(out: &mut impl Write, game: &Game<R>) -> io::Result<()> {
    writeln!(out)?;
    for category in game.solved_categories() {
        writeln!(out, "{}", category_line(category))?;
    }

    if let Some(message) = game.status().message() {
        writeln!(out, "{}", message)?;
        writeln!(out, "Type 'new' to play again or 'quit' to leave.")?;
        return Ok(());
    }

    for row in grid(game) {
        writeln!(out, "{}", row)?;
    }
    writeln!(out, "Mistakes remaining: {}", mistake_dots(game))?;
    Ok(())
}
