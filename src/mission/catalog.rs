//! The fixed deck of mission cards

use crate::mission::kind::MissionKind;

/// Mission texts dealt to factions, drawn with replacement
pub const MISSION_TEXTS: [&str; 5] = [
    "Conquistar 4 territórios seguidos.",
    "Eliminar todas as tropas da cor Vermelho.",
    "Conquistar um total de 7 territórios.",
    "Dominar mais da metade dos territórios do mapa.",
    "Manter a maioria dos territórios sob sua bandeira.",
];

/// A mission card: the text shown to the player and the rule it stands for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissionCard {
    pub text: &'static str,
    pub kind: MissionKind,
}

/// Every card in the catalog, in catalog order
pub fn catalog() -> Vec<MissionCard> {
    MISSION_TEXTS
        .iter()
        .map(|&text| MissionCard {
            text,
            kind: MissionKind::classify(text),
        })
        .collect()
}
