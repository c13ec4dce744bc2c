//! Console reconciler: prints an [`Infobox`](super::Infobox) as a block of
//! text.

use owo_colors::OwoColorize;

use super::Infobox;

/// The coloured dot for a status style token. Unknown tokens get the
/// distinct error mark rather than a colour from the scale.
#[must_use]
pub fn indicator_dot(style_token: &str) -> String {
    match style_token {
        "col-nt" => "●".green().to_string(),
        "col-nu" => "●".cyan().to_string(),
        "col-rl" => "●".blue().to_string(),
        "col-rc" => "●".bright_green().to_string(),
        "col-dc" => "●".yellow().to_string(),
        "col-ni" => "●".bright_cyan().to_string(),
        "col-nv" => "●".bright_yellow().to_string(),
        "col-ne" => "●".bright_red().to_string(),
        "col-nc" => "●".red().to_string(),
        "col-black" => "●".dimmed().to_string(),
        _ => "✖".bright_magenta().to_string(),
    }
}

/// Print one card to stdout.
pub fn print_infobox(card: &Infobox) {
    let rule = "─".repeat(56);
    let rule = if card.card_class.starts_with("red") {
        rule.red().to_string()
    } else {
        rule.blue().to_string()
    };

    println!("\n{rule}");
    println!(
        "{} {}  [{}]",
        indicator_dot(card.indicator.style_token),
        card.header.bold(),
        card.button.label
    );
    if !card.photo_source.is_empty() {
        println!("  Photo: {}", card.photo_source);
    }
    println!("  {}", card.credit.dimmed());
    for row in &card.rows {
        println!("  {:<16} {}", row.heading, row.value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_tokens_use_the_dot_mark() {
        assert!(indicator_dot("col-nt").contains('●'));
        assert!(indicator_dot("col-black").contains('●'));
    }

    #[test]
    fn test_unknown_tokens_use_the_error_mark() {
        assert!(indicator_dot("col-error").contains('✖'));
        assert!(indicator_dot("something-else").contains('✖'));
    }
}
