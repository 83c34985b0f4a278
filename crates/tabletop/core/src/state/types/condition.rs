/// Condition tag that can be active on a character or standee.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::EnumIter,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Condition {
    Poison,
    Wound,
    Immobilize,
    Disarm,
    Stun,
    Muddle,
    Invisible,
    Strengthen,
}

/// Ordered set of active conditions, kept in the order they were applied.
pub type Conditions = Vec<Condition>;

/// Drops repeated conditions, keeping the first occurrence of each.
pub fn distinct_conditions(conditions: &[Condition]) -> Conditions {
    let mut distinct = Conditions::with_capacity(conditions.len());
    for condition in conditions {
        if !distinct.contains(condition) {
            distinct.push(*condition);
        }
    }
    distinct
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distinct_keeps_first_occurrence_order() {
        let conditions = [
            Condition::Wound,
            Condition::Poison,
            Condition::Wound,
            Condition::Stun,
            Condition::Poison,
        ];

        assert_eq!(
            distinct_conditions(&conditions),
            vec![Condition::Wound, Condition::Poison, Condition::Stun]
        );
    }
}
