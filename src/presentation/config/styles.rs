use std::{collections::HashMap, str::FromStr};

use derive_deref::{Deref, DerefMut};
use ratatui::style::{Color, Modifier, Style};
use serde::{de::Deserializer, Deserialize};

/// Named styles, e.g. `"badge": "bold white on red"`
#[derive(Clone, Debug, Default, Deref, DerefMut)]
pub struct Styles(pub HashMap<String, Style>);

impl<'de> Deserialize<'de> for Styles {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed_map = HashMap::<String, String>::deserialize(deserializer)?;

        let styles = parsed_map
            .into_iter()
            .map(|(name, raw)| (name, parse_style(&raw)))
            .collect();

        Ok(Styles(styles))
    }
}

impl Styles {
    /// Style by name; unknown names render unstyled
    pub fn style(&self, name: &str) -> Style {
        self.get(name).copied().unwrap_or_default()
    }
}

/// Parse `[modifiers] [fg] [on [modifiers] bg]`
/// Colors are anything `ratatui::style::Color` parses: names such as
/// `dark gray` or `light blue`, `#rrggbb`, or an index.
pub fn parse_style(line: &str) -> Style {
    let lower = line.to_lowercase();
    let (foreground, background) = match lower.find(" on ") {
        Some(pos) => (&lower[..pos], Some(&lower[pos + 4..])),
        None => match lower.strip_prefix("on ") {
            Some(bg) => ("", Some(bg)),
            None => (lower.as_str(), None),
        },
    };

    let (fg, fg_modifiers) = split_modifiers(foreground);
    let mut style = Style::default().add_modifier(fg_modifiers);
    if let Some(color) = fg {
        style = style.fg(color);
    }

    if let Some(background) = background {
        let (bg, bg_modifiers) = split_modifiers(background);
        style = style.add_modifier(bg_modifiers);
        if let Some(color) = bg {
            style = style.bg(color);
        }
    }

    style
}

fn split_modifiers(part: &str) -> (Option<Color>, Modifier) {
    let mut modifiers = Modifier::empty();
    let mut color_words = Vec::new();

    for word in part.split_whitespace() {
        match word {
            "bold" => modifiers |= Modifier::BOLD,
            "dim" => modifiers |= Modifier::DIM,
            "italic" => modifiers |= Modifier::ITALIC,
            "underline" | "underlined" => modifiers |= Modifier::UNDERLINED,
            "inverse" | "reversed" => modifiers |= Modifier::REVERSED,
            other => color_words.push(other),
        }
    }

    let color = if color_words.is_empty() {
        None
    } else {
        let name = color_words.join(" ");
        match Color::from_str(&name) {
            Ok(color) => Some(color),
            Err(_) => {
                log::warn!("unknown color `{name}` in style");
                None
            }
        }
    };

    (color, modifiers)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("blue", Style::default().fg(Color::Blue))]
    #[case("bold blue", Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD))]
    #[case("dark gray", Style::default().fg(Color::DarkGray))]
    #[case(
        "bold white on red",
        Style::default().fg(Color::White).bg(Color::Red).add_modifier(Modifier::BOLD)
    )]
    #[case("black on gray", Style::default().fg(Color::Black).bg(Color::Gray))]
    #[case("on blue", Style::default().bg(Color::Blue))]
    #[case("#ff8000", Style::default().fg(Color::Rgb(255, 128, 0)))]
    #[case("underline italic", Style::default().add_modifier(Modifier::UNDERLINED | Modifier::ITALIC))]
    fn test_parse_style(#[case] raw: &str, #[case] expected: Style) {
        assert_eq!(parse_style(raw), expected);
    }

    #[test]
    fn test_unknown_color_is_dropped() {
        assert_eq!(
            parse_style("bold chartreuse-ish"),
            Style::default().add_modifier(Modifier::BOLD)
        );
    }

    #[test]
    fn test_deserialize_and_lookup() -> color_eyre::Result<()> {
        let styles: Styles = json5::from_str(r#"{ "badge": "white on red" }"#)?;
        assert_eq!(
            styles.style("badge"),
            Style::default().fg(Color::White).bg(Color::Red)
        );
        assert_eq!(styles.style("missing"), Style::default());
        Ok(())
    }
}
