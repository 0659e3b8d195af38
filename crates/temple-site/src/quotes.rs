//! The Tao verse carousel
//!
//! Pairs of verse lines cycle on a timer, the way the page fades them in
//! and out over the hero. Interactive runs cycle until Ctrl-C; a
//! non-attended run prints exactly one full cycle and returns.

use std::time::Duration;

use anyhow::Result;
use console::style;
use temple_i18n::{LanguageContext, Resolved};
use tokio::time;
use tracing::debug;

const BAR_WIDTH: usize = 12;

/// Paired verse lines with a cursor into the cycle
#[derive(Debug, Clone)]
pub struct QuoteCarousel {
    pairs: Vec<(String, String)>,
    index: usize,
}

impl QuoteCarousel {
    /// Build from the active language's verse pairs.
    ///
    /// A missing entry or an unexpected shape yields an empty carousel;
    /// playback then simply has nothing to show.
    pub fn from_context(ctx: &LanguageContext) -> Self {
        let pairs = match ctx.resolve("tao.lines") {
            Resolved::Pairs(pairs) => pairs.to_vec(),
            other => {
                debug!("verse pairs unavailable, got {:?}", other.kind());
                Vec::new()
            }
        };
        Self { pairs, index: 0 }
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// The pair currently shown
    pub fn current(&self) -> Option<&(String, String)> {
        self.pairs.get(self.index)
    }

    /// Step to the next pair, wrapping at the end
    pub fn advance(&mut self) {
        if !self.pairs.is_empty() {
            self.index = (self.index + 1) % self.pairs.len();
        }
    }

    /// Position in the cycle as a fraction, 1/len after the first pair
    pub fn progress(&self) -> f64 {
        if self.pairs.is_empty() {
            return 0.0;
        }
        (self.index + 1) as f64 / self.pairs.len() as f64
    }

    fn at_start(&self) -> bool {
        self.index == 0
    }
}

/// Render a fixed-width bar for the cycle position.
pub fn progress_bar(progress: f64, width: usize) -> String {
    let filled = ((progress * width as f64).round() as usize).min(width);
    format!("{}{}", "●".repeat(filled), "○".repeat(width - filled))
}

/// Cycle the verse pairs until Ctrl-C, or exactly once when unattended.
pub async fn play(ctx: &LanguageContext, period: Duration) -> Result<()> {
    let mut carousel = QuoteCarousel::from_context(ctx);
    if carousel.is_empty() {
        return Ok(());
    }

    let attended = console::user_attended();
    println!("\n{}", style(ctx.text("tao.intro")).italic());

    // interval() panics on a zero period.
    let period = period.max(Duration::from_millis(1));
    let mut ticker = time::interval(period);
    ticker.tick().await;

    loop {
        if let Some((first, second)) = carousel.current() {
            println!("\n  {}\n  {}", style(first).bold(), style(second).bold());
            println!(
                "  {}  {}",
                style(progress_bar(carousel.progress(), BAR_WIDTH)).dim(),
                style(ctx.text("tao.attribution")).dim()
            );
        }

        carousel.advance();

        if attended {
            tokio::select! {
                _ = ticker.tick() => {}
                _ = tokio::signal::ctrl_c() => break,
            }
        } else if carousel.at_start() {
            break;
        }
    }

    Ok(())
}
