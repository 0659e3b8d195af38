//! The interactive page tour

use std::time::Duration;

use anyhow::Result;
use console::style;
use temple_i18n::{Language, LanguageContext};
use tracing::debug;

use crate::{content, newsletter, quotes, sections};

/// Menu stops, in page order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stop {
    About,
    ForWhom,
    Offerings,
    Support,
    Verses,
    Newsletter,
    Language,
    Leave,
}

/// Run the site tour until the visitor leaves.
pub async fn run(ctx: &mut LanguageContext, quote_period: Duration, banner: bool) -> Result<()> {
    if banner {
        cliclack::intro(sections::banner())?;
    }
    println!("{}\n", sections::hero(ctx));

    loop {
        match prompt_stop(ctx)? {
            Stop::About => println!("\n{}\n", sections::about(ctx)),
            Stop::ForWhom => println!("\n{}\n", sections::for_whom(ctx)),
            Stop::Offerings => println!("\n{}\n", sections::offerings(ctx)),
            Stop::Support => println!("\n{}\n", sections::support(ctx)),
            Stop::Verses => quotes::play(ctx, quote_period).await?,
            Stop::Newsletter => newsletter::run(ctx)?,
            Stop::Language => {
                if prompt_language(ctx)? {
                    println!("\n{}\n", sections::hero(ctx));
                }
            }
            Stop::Leave => break,
        }
    }

    println!("\n{}", sections::footer(ctx));
    cliclack::outro(style(content::TEMPLE_NAME_LONG).dim())?;
    Ok(())
}

fn prompt_stop(ctx: &LanguageContext) -> Result<Stop> {
    let language_label = match ctx.current() {
        Some(language) => format!("{} {}", language.flag(), language.display_name()),
        None => ctx.language().to_string(),
    };
    // The attribution doubles as the verse menu label, sans its lead dash.
    let verse_label = ctx.text("tao.attribution").trim_start_matches('—').trim();

    let stop = cliclack::select(content::TEMPLE_NAME)
        .item(Stop::About, ctx.text("nav.about"), "")
        .item(Stop::ForWhom, ctx.text("nav.forwhom"), "")
        .item(Stop::Offerings, ctx.text("nav.offerings"), "")
        .item(Stop::Support, ctx.text("nav.support"), "")
        .item(Stop::Verses, verse_label, ctx.text("tao.intro"))
        .item(Stop::Newsletter, ctx.text("newsletter.title"), "")
        .item(Stop::Language, language_label, "\u{1F310}")
        .item(Stop::Leave, ctx.text("nav.leave"), "")
        .interact()?;
    Ok(stop)
}

/// Show the language menu; true means the language changed.
fn prompt_language(ctx: &mut LanguageContext) -> Result<bool> {
    let mut select = cliclack::select("\u{1F310}").initial_value(ctx.language().to_string());
    for language in Language::all() {
        select = select.item(
            language.code().to_string(),
            format!("{} {}", language.flag(), language.display_name()),
            "",
        );
    }
    let code: String = select.interact()?;
    Ok(apply_language_choice(ctx, &code))
}

/// Make `code` the active language and persist it. Returns true when the
/// code differs from the previous one; confirming the current language
/// still writes the slot.
fn apply_language_choice(ctx: &mut LanguageContext, code: &str) -> bool {
    let before = ctx.language().to_string();
    ctx.set_language(code);
    let changed = code != before;
    if changed {
        debug!("language switched from '{}' to '{}'", before, code);
    }
    changed
}
