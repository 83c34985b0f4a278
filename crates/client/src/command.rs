//! Line-oriented command parser.
//!
//! Each input line is one command: a verb followed by whitespace-separated
//! arguments. Conditions are comma-separated (`poison,wound`).
use std::collections::BTreeMap;
use std::str::FromStr;

use anyhow::{Context, Result, anyhow, bail};

use tabletop_core::{
    AddMonsterAction, AddMonsterStandeeAction, CharacterKey, ClearTabletopAction, Condition,
    Conditions, Element, HitPoints, InfuseElementAction, Initiative, Level, MonsterKey,
    NextRoundAction, Rank, RemoveMonsterStandeeAction, SetScenarioLevelAction, StandeeId,
    TrackedAction, UpdateCharacterAction, UpdateMonsterStandeeAction, distinct_conditions,
};

pub const HELP: &str = "\
commands:
  add-character <key> [level]              add a character at full hit points
  update-character <key> <hp> [conditions]
  add-monster <key> <level>
  add-standee <monster> <id> [rank]        rank: normal | elite | boss
  update-standee <monster> <id> <hp> [conditions]
  remove-standee <monster> <id>
  infuse <element>                         fire | ice | air | earth | light | dark
  level <n>                                set the scenario level
  draw <character>=<initiative> ...        reveal monster ability cards
  draw-monster <monster>                   reveal one monster's ability card
  next-round
  clear
  undo [n] | redo [n]
  state | history | help | quit";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Forward action that needs no catalog lookup.
    Dispatch(TrackedAction),
    /// Hit points come from the character's catalog table at `level`.
    AddCharacter { key: CharacterKey, level: usize },
    Draw(BTreeMap<CharacterKey, Initiative>),
    DrawMonster(MonsterKey),
    Undo(usize),
    Redo(usize),
    State,
    History,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self> {
        let mut words = line.split_whitespace();
        let verb = words.next().ok_or_else(|| anyhow!("empty command"))?;
        let args: Vec<&str> = words.collect();

        let command = match verb {
            "add-character" => {
                let [key, rest @ ..] = args.as_slice() else {
                    bail!("usage: add-character <key> [level]");
                };
                let level = match rest {
                    [] => 1,
                    [level] => number(level, "level")?,
                    _ => bail!("usage: add-character <key> [level]"),
                };
                Command::AddCharacter {
                    key: CharacterKey::new(*key),
                    level,
                }
            }
            "update-character" => {
                let (key, hit_points, conditions) = match args.as_slice() {
                    [key, hp] => (key, hp, None),
                    [key, hp, conditions] => (key, hp, Some(*conditions)),
                    _ => bail!("usage: update-character <key> <hp> [conditions]"),
                };
                Command::Dispatch(TrackedAction::from(UpdateCharacterAction {
                    key: CharacterKey::new(*key),
                    hit_points: number::<HitPoints>(hit_points, "hit points")?,
                    conditions: parse_conditions(conditions)?,
                }))
            }
            "add-monster" => {
                let [key, level] = args.as_slice() else {
                    bail!("usage: add-monster <key> <level>");
                };
                Command::Dispatch(TrackedAction::from(AddMonsterAction::new(
                    *key,
                    number::<Level>(level, "level")?,
                )))
            }
            "add-standee" => {
                let (key, id, rank) = match args.as_slice() {
                    [key, id] => (key, id, Rank::Normal),
                    [key, id, rank] => (key, id, named::<Rank>(rank, "rank")?),
                    _ => bail!("usage: add-standee <monster> <id> [rank]"),
                };
                Command::Dispatch(TrackedAction::from(AddMonsterStandeeAction::new(
                    *key,
                    number(id, "standee id")?,
                    rank,
                )))
            }
            "update-standee" => {
                let (key, id, hit_points, conditions) = match args.as_slice() {
                    [key, id, hp] => (key, id, hp, None),
                    [key, id, hp, conditions] => (key, id, hp, Some(*conditions)),
                    _ => bail!("usage: update-standee <monster> <id> <hp> [conditions]"),
                };
                Command::Dispatch(TrackedAction::from(UpdateMonsterStandeeAction {
                    key: MonsterKey::new(*key),
                    id: StandeeId(number(id, "standee id")?),
                    hit_points: number(hit_points, "hit points")?,
                    conditions: parse_conditions(conditions)?,
                }))
            }
            "remove-standee" => {
                let [key, id] = args.as_slice() else {
                    bail!("usage: remove-standee <monster> <id>");
                };
                Command::Dispatch(TrackedAction::from(RemoveMonsterStandeeAction {
                    key: MonsterKey::new(*key),
                    id: StandeeId(number(id, "standee id")?),
                }))
            }
            "infuse" => {
                let [element] = args.as_slice() else {
                    bail!("usage: infuse <element>");
                };
                Command::Dispatch(TrackedAction::from(InfuseElementAction {
                    element: named::<Element>(element, "element")?,
                }))
            }
            "level" => {
                let [level] = args.as_slice() else {
                    bail!("usage: level <n>");
                };
                Command::Dispatch(TrackedAction::from(SetScenarioLevelAction {
                    level: number(level, "level")?,
                }))
            }
            "next-round" => no_args(verb, &args, Command::Dispatch(NextRoundAction.into()))?,
            "clear" => no_args(verb, &args, Command::Dispatch(ClearTabletopAction.into()))?,
            "draw" => Command::Draw(parse_initiatives(&args)?),
            "draw-monster" => {
                let [key] = args.as_slice() else {
                    bail!("usage: draw-monster <monster>");
                };
                Command::DrawMonster(MonsterKey::new(*key))
            }
            "undo" => Command::Undo(step_count(&args)?),
            "redo" => Command::Redo(step_count(&args)?),
            "state" => no_args(verb, &args, Command::State)?,
            "history" => no_args(verb, &args, Command::History)?,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => bail!("unknown command `{other}` (try `help`)"),
        };

        Ok(command)
    }
}

fn no_args(verb: &str, args: &[&str], command: Command) -> Result<Command> {
    if args.is_empty() {
        Ok(command)
    } else {
        bail!("`{verb}` takes no arguments")
    }
}

fn step_count(args: &[&str]) -> Result<usize> {
    match args {
        [] => Ok(1),
        [count] => number(count, "step count"),
        _ => bail!("usage: undo [n] | redo [n]"),
    }
}

fn number<T>(value: &str, what: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value
        .parse()
        .with_context(|| format!("invalid {what} `{value}`"))
}

fn named<T: FromStr>(value: &str, what: &str) -> Result<T> {
    value
        .to_ascii_lowercase()
        .parse()
        .map_err(|_| anyhow!("unknown {what} `{value}`"))
}

fn parse_conditions(list: Option<&str>) -> Result<Conditions> {
    let Some(list) = list else {
        return Ok(Conditions::new());
    };
    if list == "-" {
        return Ok(Conditions::new());
    }
    let conditions = list
        .split(',')
        .filter(|name| !name.is_empty())
        .map(|name| named::<Condition>(name, "condition"))
        .collect::<Result<Conditions>>()?;
    Ok(distinct_conditions(&conditions))
}

fn parse_initiatives(args: &[&str]) -> Result<BTreeMap<CharacterKey, Initiative>> {
    args.iter()
        .map(|pair| -> Result<(CharacterKey, Initiative)> {
            let (key, initiative) = pair
                .split_once('=')
                .ok_or_else(|| anyhow!("expected <character>=<initiative>, got `{pair}`"))?;
            Ok((CharacterKey::new(key), number(initiative, "initiative")?))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Command {
        line.parse().expect("command should parse")
    }

    #[test]
    fn add_character_defaults_to_level_one() {
        assert_eq!(
            parse("add-character brute"),
            Command::AddCharacter {
                key: CharacterKey::new("brute"),
                level: 1,
            }
        );
        assert_eq!(
            parse("add-character brute 4"),
            Command::AddCharacter {
                key: CharacterKey::new("brute"),
                level: 4,
            }
        );
    }

    #[test]
    fn update_standee_parses_conditions_in_order() {
        let expected = TrackedAction::from(UpdateMonsterStandeeAction {
            key: MonsterKey::new("goblin"),
            id: StandeeId(2),
            hit_points: 3,
            conditions: vec![Condition::Wound, Condition::Poison],
        });
        assert_eq!(
            parse("update-standee goblin 2 3 wound,poison"),
            Command::Dispatch(expected)
        );
    }

    #[test]
    fn repeated_conditions_are_listed_once() {
        let Command::Dispatch(TrackedAction::UpdateCharacter(action)) =
            parse("update-character brute 6 poison,wound,poison")
        else {
            panic!("expected update-character");
        };
        assert_eq!(action.conditions, vec![Condition::Poison, Condition::Wound]);
    }

    #[test]
    fn dash_clears_conditions() {
        let Command::Dispatch(TrackedAction::UpdateCharacter(action)) =
            parse("update-character brute 9 -")
        else {
            panic!("expected update-character");
        };
        assert!(action.conditions.is_empty());
        assert_eq!(action.hit_points, 9);
    }

    #[test]
    fn standee_rank_is_case_insensitive() {
        let Command::Dispatch(TrackedAction::AddMonsterStandee(action)) =
            parse("add-standee goblin 1 Elite")
        else {
            panic!("expected add-standee");
        };
        assert_eq!(action.rank, Rank::Elite);
        assert_eq!(action.id, StandeeId(1));
    }

    #[test]
    fn draw_collects_initiatives() {
        let Command::Draw(initiatives) = parse("draw brute=12 spellweaver=67") else {
            panic!("expected draw");
        };
        assert_eq!(initiatives.len(), 2);
        assert_eq!(initiatives.get(&CharacterKey::new("brute")), Some(&12));
        assert_eq!(initiatives.get(&CharacterKey::new("spellweaver")), Some(&67));
    }

    #[test]
    fn undo_and_redo_default_to_one_step() {
        assert_eq!(parse("undo"), Command::Undo(1));
        assert_eq!(parse("redo 3"), Command::Redo(3));
    }

    #[test]
    fn simple_verbs_map_to_actions() {
        assert_eq!(
            parse("infuse fire"),
            Command::Dispatch(TrackedAction::from(InfuseElementAction {
                element: Element::Fire,
            }))
        );
        assert_eq!(
            parse("next-round"),
            Command::Dispatch(TrackedAction::from(NextRoundAction))
        );
        assert_eq!(parse("quit"), Command::Quit);
    }

    #[test]
    fn malformed_lines_are_rejected() {
        for line in [
            "",
            "teleport",
            "add-monster goblin",
            "add-monster goblin high",
            "infuse plasma",
            "update-character brute 5 cursed",
            "draw brute:12",
            "undo many",
            "next-round now",
        ] {
            assert!(line.parse::<Command>().is_err(), "`{line}` should not parse");
        }
    }
}
