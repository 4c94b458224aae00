//! Damage description types for a single vehicle panel
//!
//! The wire shape mirrors the workshop's damage-entry grid: per panel,
//! dent counts for the three supported dent diameters plus the special
//! material flags.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Supported dent diameter classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DentSize {
    #[serde(rename = "mm20")]
    Mm20,
    #[serde(rename = "mm30")]
    Mm30,
    #[serde(rename = "mm40")]
    Mm40,
}

impl DentSize {
    pub const ALL: [DentSize; 3] = [DentSize::Mm20, DentSize::Mm30, DentSize::Mm40];

    /// Resolve a size in millimeters to a dent class
    ///
    /// The catalog only prices 20/30/40mm dents; anything else is rejected
    /// rather than mapped to a nearby class.
    pub fn from_mm(mm: u32) -> Result<Self> {
        match mm {
            20 => Ok(DentSize::Mm20),
            30 => Ok(DentSize::Mm30),
            40 => Ok(DentSize::Mm40),
            other => Err(Error::InvalidDentSize(other)),
        }
    }

    pub fn mm(&self) -> u32 {
        match self {
            DentSize::Mm20 => 20,
            DentSize::Mm30 => 30,
            DentSize::Mm40 => 40,
        }
    }
}

/// Whether a panel lies flat (hood, roof, upper trunk lid) or stands upright
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelOrientation {
    Horizontal,
    Vertical,
}

impl PanelOrientation {
    pub fn label(&self) -> &'static str {
        match self {
            PanelOrientation::Horizontal => "horizontal",
            PanelOrientation::Vertical => "vertical",
        }
    }
}

/// Dent counts per diameter class for one panel
///
/// Counts are `i32` so that a negative value coming in over the wire
/// reaches the engine's validation and fails as `InvalidDentCount`
/// instead of dying inside deserialization.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct DentCounts {
    #[serde(default)]
    pub mm20: i32,
    #[serde(default)]
    pub mm30: i32,
    #[serde(default)]
    pub mm40: i32,
}

impl DentCounts {
    pub fn get(&self, size: DentSize) -> i32 {
        match size {
            DentSize::Mm20 => self.mm20,
            DentSize::Mm30 => self.mm30,
            DentSize::Mm40 => self.mm40,
        }
    }

    /// True when no bucket has any dents
    pub fn is_empty(&self) -> bool {
        self.mm20 == 0 && self.mm30 == 0 && self.mm40 == 0
    }
}

/// Special material and handling flags for one panel
///
/// Wire names follow the original grid ("aluminio", "cola", "pintura").
/// `paint` is cosmetic bookkeeping only and never affects the AW price;
/// pre-press and cavity access are rarer handling surcharges that default
/// to false when absent from the report.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct MaterialFlags {
    #[serde(rename = "aluminio", default)]
    pub aluminum: bool,
    #[serde(rename = "cola", default)]
    pub glue_technique: bool,
    #[serde(rename = "pintura", default)]
    pub paint: bool,
    #[serde(rename = "preFormagem", default)]
    pub needs_pre_press: bool,
    #[serde(rename = "acessoCavidade", default)]
    pub needs_cavity_access: bool,
}

/// One panel's full damage record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelDamageReport {
    #[serde(rename = "pecaId")]
    pub panel_id: String,
    #[serde(rename = "amassados")]
    pub dents: DentCounts,
    #[serde(rename = "materiais", default)]
    pub materials: MaterialFlags,
}

impl PanelDamageReport {
    pub fn new(panel_id: impl Into<String>) -> Self {
        Self {
            panel_id: panel_id.into(),
            dents: DentCounts::default(),
            materials: MaterialFlags::default(),
        }
    }

    pub fn with_dents(mut self, mm20: i32, mm30: i32, mm40: i32) -> Self {
        self.dents = DentCounts { mm20, mm30, mm40 };
        self
    }

    pub fn with_materials(mut self, materials: MaterialFlags) -> Self {
        self.materials = materials;
        self
    }
}
