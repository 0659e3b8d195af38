//! Pure renderers for the page sections
//!
//! Each renderer takes the language context and returns a styled text block;
//! printing and interaction stay in the caller so these remain testable.

use console::style;
use temple_i18n::LanguageContext;

use crate::content;

fn heading(text: &str) -> String {
    style(text).bold().underlined().to_string()
}

/// Masthead line joining the temple's two names
pub fn banner() -> String {
    format!(
        "{} {}",
        style(content::TEMPLE_NAME).bold().green(),
        style(content::TEMPLE_NAME_LONG).dim()
    )
}

/// Hero block shown before the first menu
pub fn hero(ctx: &LanguageContext) -> String {
    format!(
        "{}\n{}",
        style(ctx.text("hero.title")).bold(),
        style(ctx.text("hero.subtitle")).dim()
    )
}

pub fn about(ctx: &LanguageContext) -> String {
    [
        heading(ctx.text("about.title")),
        style(ctx.text("about.subtitle")).italic().to_string(),
        ctx.text("about.p1").to_string(),
        ctx.text("about.p2").to_string(),
        ctx.text("about.p3").to_string(),
    ]
    .join("\n\n")
}

/// The four audience cards
pub fn for_whom(ctx: &LanguageContext) -> String {
    let mut out = heading(ctx.text("forwhom.title"));
    for n in 1..=4 {
        let title = ctx.text(&format!("forwhom.card{n}.title")).to_string();
        let subtitle = ctx.text(&format!("forwhom.card{n}.subtitle")).to_string();
        let desc = ctx.text(&format!("forwhom.card{n}.desc")).to_string();
        out.push_str(&format!(
            "\n\n{}\n{}\n{}",
            style(title).bold(),
            style(subtitle).dim(),
            desc
        ));
    }
    out
}

/// The two ways to stay, the daily frame, and the teachers heading
pub fn offerings(ctx: &LanguageContext) -> String {
    let mut out = heading(ctx.text("whatwillyoufind.title"));
    for stay in ["shortterm", "longterm"] {
        let title = ctx.text(&format!("whatwillyoufind.{stay}.title")).to_string();
        let duration = ctx
            .text(&format!("whatwillyoufind.{stay}.duration"))
            .to_string();
        let desc = ctx.text(&format!("whatwillyoufind.{stay}.desc")).to_string();
        out.push_str(&format!(
            "\n\n{}\n{}\n{}",
            style(title).bold(),
            style(duration).dim(),
            desc
        ));
    }
    out.push_str(&format!(
        "\n\n{}",
        style(ctx.text("whatwillyoufind.offered.title")).bold()
    ));
    for n in 1..=4 {
        let item = ctx.text(&format!("whatwillyoufind.offered.{n}")).to_string();
        out.push_str(&format!("\n  • {item}"));
    }
    out.push_str(&format!(
        "\n\n{}",
        style(ctx.text("whatwillyoufind.instructors.title")).bold()
    ));
    out
}

/// The wishlist and donation cards
pub fn support(ctx: &LanguageContext) -> String {
    let mut out = heading(ctx.text("support.title"));
    out.push_str(&format!(
        "\n{}",
        style(ctx.text("support.subtitle")).dim()
    ));
    for kind in ["wishlist", "donation"] {
        let title = ctx.text(&format!("support.{kind}.title")).to_string();
        let desc = ctx.text(&format!("support.{kind}.desc")).to_string();
        let button = ctx.text(&format!("support.{kind}.button")).to_string();
        out.push_str(&format!(
            "\n\n{}\n{}\n{}",
            style(title).bold(),
            desc,
            style(format!("[ {button} ]")).green()
        ));
    }
    out.push_str(&format!(
        "\n\n{}",
        style(ctx.text("support.closing")).italic()
    ));
    out
}

/// Legal links, rights line, and the social line
pub fn footer(ctx: &LanguageContext) -> String {
    let links = [
        "footer.impressum",
        "footer.privacy",
        "footer.terms",
        "footer.contact",
    ]
    .map(|key| ctx.text(key).to_string())
    .join(" · ");

    format!(
        "{}\n{}\n{}",
        style(links).dim(),
        style(format!(
            "© {} · {}",
            content::TEMPLE_NAME,
            ctx.text("footer.rights")
        ))
        .dim(),
        style(format!("{} @dalinsi", ctx.text("footer.followUs"))).dim()
    )
}
