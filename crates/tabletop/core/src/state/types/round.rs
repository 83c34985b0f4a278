/// Phase within a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, strum::Display)]
#[strum(serialize_all = "kebab-case")]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum Step {
    /// Players pick ability cards; character initiatives are unset.
    #[default]
    CardSelection,
    /// Monster ability cards are revealed and figures act in initiative order.
    Actions,
}
