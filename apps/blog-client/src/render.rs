//! Plain-text rendering of the session view.

use std::fmt::{self, Display, Formatter};

use cryptoblog_core::session::{ComposerView, FeedView, PostCard, View};

const HEADER: &str = "Crypto Blog";
const TAGLINE: &str = "Explore the latest in cryptocurrency and blockchain technology";

pub fn render(view: &View) -> String {
    Screen(view).to_string()
}

struct Screen<'a>(&'a View);

impl Display for Screen<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let view = self.0;
        writeln!(f, "{HEADER}\n{TAGLINE}\n")?;
        writeln!(f, "[ {} ]\n", view.toggle_label)?;

        if let Some(composer) = &view.composer {
            render_composer(f, composer)?;
        }

        match &view.feed {
            FeedView::Loading => writeln!(f, "  ... loading ..."),
            FeedView::Posts(cards) => cards.iter().try_for_each(|card| render_card(f, card)),
        }
    }
}

fn render_composer(f: &mut Formatter<'_>, composer: &ComposerView) -> fmt::Result {
    for field in &composer.fields {
        writeln!(f, "{}", field.label)?;
        for line in field.value.lines() {
            writeln!(f, "  > {line}")?;
        }
        if field.value.is_empty() {
            writeln!(f, "  >")?;
        }
        if let Some(error) = field.error {
            writeln!(f, "  ! {error}")?;
        }
    }
    writeln!(f, "[ Submit Post ]\n")
}

fn render_card(f: &mut Formatter<'_>, card: &PostCard) -> fmt::Result {
    writeln!(f, "## {}", card.title)?;
    writeln!(f, "{}", card.body)?;
    writeln!(f, "{}\n", card.byline)
}
