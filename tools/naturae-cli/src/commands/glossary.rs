//! Read the botanical glossary.

use anyhow::Result;

use super::GlossaryArgs;
use crate::context::Context;

/// Run the glossary command.
pub fn run(args: GlossaryArgs, ctx: &Context) -> Result<()> {
    let mut session = ctx.session();

    if args.letters {
        let letters: String = session
            .glossary_letters()
            .iter()
            .map(|l| l.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        if ctx.output.is_json() {
            ctx.output.json(&session.glossary_letters());
        } else {
            ctx.output.kv("Lettres", &letters);
        }
        return Ok(());
    }

    session.set_glossary_letter(args.letter);
    let visible = session.visible_glossary();

    if ctx.output.is_json() {
        ctx.output.json(&visible);
        return Ok(());
    }

    let title = match session.glossary_letter() {
        Some(letter) => format!("Glossaire Botanique — {}", letter.to_uppercase()),
        None => "Glossaire Botanique".to_string(),
    };
    ctx.output.header(&title);

    if visible.is_empty() {
        ctx.output.info("Aucune entrée pour cette lettre.");
        return Ok(());
    }

    for item in visible {
        ctx.output.list_item(&format!("{} — INCI: {}", item.name, item.inci));
        ctx.output.para(&item.description);
    }

    Ok(())
}
