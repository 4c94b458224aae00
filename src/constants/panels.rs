//! Vehicle panel catalog
//!
//! The damage-entry grid is a fixed 5x3 layout of body panels. Hood, roof
//! and the upper trunk lid lie flat and price against the horizontal AW
//! tables; every other panel is vertical.

use crate::domain::model::PanelOrientation;

/// One entry of the panel catalog
#[derive(Debug, Clone, Copy)]
pub struct PanelSpec {
    pub id: &'static str,
    /// Display name as used on the printed quote
    pub name: &'static str,
    pub orientation: PanelOrientation,
    /// Position in the damage-entry grid
    pub row: u8,
    pub col: u8,
}

/// Full panel catalog in grid order (row 2, col 1 is the vehicle photo slot)
pub const PANEL_CATALOG: &[PanelSpec] = &[
    PanelSpec { id: "paraLamaEsquerdo", name: "Para-lama Esquerdo", orientation: PanelOrientation::Vertical, row: 0, col: 0 },
    PanelSpec { id: "capo", name: "Capô", orientation: PanelOrientation::Horizontal, row: 0, col: 1 },
    PanelSpec { id: "paraLamaDireito", name: "Para-lama Direito", orientation: PanelOrientation::Vertical, row: 0, col: 2 },
    PanelSpec { id: "colunaEsquerda", name: "Coluna Esquerda", orientation: PanelOrientation::Vertical, row: 1, col: 0 },
    PanelSpec { id: "teto", name: "Teto", orientation: PanelOrientation::Horizontal, row: 1, col: 1 },
    PanelSpec { id: "colunaDireita", name: "Coluna Direita", orientation: PanelOrientation::Vertical, row: 1, col: 2 },
    PanelSpec { id: "portaDianteiraEsquerda", name: "Porta Dianteira Esquerda", orientation: PanelOrientation::Vertical, row: 2, col: 0 },
    PanelSpec { id: "portaDianteiraDireita", name: "Porta Dianteira Direita", orientation: PanelOrientation::Vertical, row: 2, col: 2 },
    PanelSpec { id: "portaTraseiraEsquerda", name: "Porta Traseira Esquerda", orientation: PanelOrientation::Vertical, row: 3, col: 0 },
    PanelSpec { id: "portaMalasSuperior", name: "Porta Malas Superior", orientation: PanelOrientation::Horizontal, row: 3, col: 1 },
    PanelSpec { id: "portaTraseiraDireita", name: "Porta Traseira Direita", orientation: PanelOrientation::Vertical, row: 3, col: 2 },
    PanelSpec { id: "lateralEsquerda", name: "Lateral Esquerda", orientation: PanelOrientation::Vertical, row: 4, col: 0 },
    PanelSpec { id: "portaMalasInferior", name: "Porta Malas Inferior", orientation: PanelOrientation::Vertical, row: 4, col: 1 },
    PanelSpec { id: "lateralDireita", name: "Lateral Direita", orientation: PanelOrientation::Vertical, row: 4, col: 2 },
];

/// Look up a catalog entry by panel id
pub fn panel_spec(panel_id: &str) -> Option<&'static PanelSpec> {
    PANEL_CATALOG.iter().find(|p| p.id == panel_id)
}

/// Orientation for a panel id; unknown panels price as vertical
pub fn orientation_for(panel_id: &str) -> PanelOrientation {
    panel_spec(panel_id)
        .map(|p| p.orientation)
        .unwrap_or(PanelOrientation::Vertical)
}

/// Display name for a panel id, falling back to the id itself
pub fn panel_name(panel_id: &str) -> &str {
    panel_spec(panel_id).map(|p| p.name).unwrap_or(panel_id)
}
