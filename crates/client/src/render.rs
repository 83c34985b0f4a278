//! Plain-text rendering of snapshots and history.
use std::fmt::Write;

use runtime::Snapshot;
use tabletop_core::{CatalogOracle, Conditions, History, Infusion, Monster};

pub fn snapshot(snapshot: &Snapshot, catalog: &dyn CatalogOracle) -> String {
    let state = &snapshot.state;
    let mut out = String::new();

    let _ = writeln!(
        out,
        "round {} ({}), scenario level {}",
        state.round, state.step, state.level
    );

    let infused: Vec<String> = state
        .elemental_infusion
        .iter()
        .filter(|(_, infusion)| *infusion != Infusion::Inert)
        .map(|(element, infusion)| format!("{element}:{infusion}"))
        .collect();
    if !infused.is_empty() {
        let _ = writeln!(out, "elements: {}", infused.join(" "));
    }

    for character in &state.characters {
        let initiative = character
            .initiative
            .map(|value| value.to_string())
            .unwrap_or_else(|| "-".into());
        let _ = writeln!(
            out,
            "  {:<14} hp {:>3}  init {:>2}{}",
            character.key,
            character.hit_points,
            initiative,
            conditions(&character.conditions)
        );
    }

    for monster in &state.monsters {
        let _ = writeln!(
            out,
            "  {:<14} lvl {}  {}",
            monster.key,
            monster.level,
            ability_card(monster, catalog)
        );
        for standee in &monster.standees {
            let _ = writeln!(
                out,
                "    #{:<3} {:<6} hp {:>3}{}",
                standee.id,
                standee.rank,
                standee.hit_points,
                conditions(&standee.conditions)
            );
        }
    }

    let _ = write!(
        out,
        "[rev {}] undo {} / redo {}",
        snapshot.revision, snapshot.past_len, snapshot.future_len
    );
    out
}

pub fn history(history: &History) -> String {
    let mut out = String::new();
    if !history.can_undo() && !history.can_redo() {
        out.push_str("history is empty");
        return out;
    }
    for (index, entry) in history.past().iter().enumerate() {
        let _ = writeln!(out, "  {:>3}  {}", index + 1, entry.original.kind());
    }
    let _ = writeln!(out, "  ---  now");
    // Next redo first.
    for entry in history.future() {
        let _ = writeln!(out, "       {} (undone)", entry.original.kind());
    }
    out.truncate(out.trim_end().len());
    out
}

fn ability_card(monster: &Monster, catalog: &dyn CatalogOracle) -> String {
    let Some(id) = monster.current_ability_card_id else {
        return format!("drawn {}", monster.drawn_ability_card_ids.len());
    };
    match catalog
        .monster(&monster.key)
        .and_then(|definition| definition.ability_card(id))
    {
        Some(card) if card.shuffle => format!(
            "card {} \"{}\" init {} (shuffle)",
            id, card.name, card.initiative
        ),
        Some(card) => format!("card {} \"{}\" init {}", id, card.name, card.initiative),
        None => format!("card {id}"),
    }
}

fn conditions(conditions: &Conditions) -> String {
    if conditions.is_empty() {
        return String::new();
    }
    let names: Vec<String> = conditions.iter().map(ToString::to_string).collect();
    format!("  [{}]", names.join(","))
}
