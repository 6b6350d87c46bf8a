//! Molecular constants table
//!
//! Literature values for the Protein A ligand variants and the antibody
//! formats they capture. The table is a plain immutable value: it is built
//! once (usually with [`MolecularConstants::default`]) and borrowed by every
//! model stage.
//!
//! # Enumerations
//!
//! Ligand variants and target molecules are closed enums. Both can be parsed
//! from the lowercase tags used by the presentation layer (`"wild_type"`,
//! `"human_igg1"`, ...):
//!
//! - an unknown **ligand variant** tag falls back to [`LigandVariant::WildType`]
//! - an unknown **target molecule** tag is an error, there is no sensible default
//!
//! # Example
//!
//! ```rust
//! use elution_rs::physics::{MolecularConstants, TargetMolecule};
//!
//! let table = MolecularConstants::default();
//! let igg1 = table.target(TargetMolecule::HumanIgG1);
//!
//! assert_eq!(igg1.fc_pka, 6.1);
//! assert_eq!(igg1.stability, 0.9);
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::ElutionError;

// =================================================================================================
// Ligand variants
// =================================================================================================

/// Protein A ligand variant packed in the column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LigandVariant {
    /// Native staphylococcal Protein A
    #[default]
    WildType,
    /// Engineered for elution at higher (milder) pH
    EngineeredMild,
    /// Engineered for alkaline cleaning, elutes at lower pH
    EngineeredHarsh,
}

impl LigandVariant {
    /// All variants, in table order
    pub const ALL: [LigandVariant; 3] = [
        LigandVariant::WildType,
        LigandVariant::EngineeredMild,
        LigandVariant::EngineeredHarsh,
    ];

    /// Tag used by the presentation layer
    pub fn tag(&self) -> &'static str {
        match self {
            LigandVariant::WildType => "wild_type",
            LigandVariant::EngineeredMild => "engineered_mild",
            LigandVariant::EngineeredHarsh => "engineered_harsh",
        }
    }

    /// Parse a tag, falling back to wild-type for anything unrecognised
    ///
    /// The fallback takes every wild-type value, its zero capacity bonus
    /// included. The browser form instead granted the +10 mg/mL bonus to any
    /// tag it did not recognise.
    pub fn from_tag(tag: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|variant| variant.tag() == tag.trim())
            .unwrap_or_else(|| {
                log::warn!("unknown ligand variant `{}`, using wild_type constants", tag);
                LigandVariant::WildType
            })
    }

    /// Binding-capacity bonus of the ligand chemistry \[mg/mL\]
    pub fn capacity_bonus(&self) -> f64 {
        match self {
            LigandVariant::WildType => 0.0,
            LigandVariant::EngineeredMild => 20.0,
            LigandVariant::EngineeredHarsh => 10.0,
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for LigandVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for LigandVariant {
    type Err = ElutionError;

    /// Never fails: unknown tags map to [`LigandVariant::WildType`]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_tag(s))
    }
}

// =================================================================================================
// Target molecules
// =================================================================================================

/// Antibody or fragment format being purified
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TargetMolecule {
    #[default]
    HumanIgG1,
    HumanIgG2,
    HumanIgG4,
    MouseIgG1,
    FcFusion,
    FabFragment,
    Bispecific,
}

impl TargetMolecule {
    /// All formats, in table order
    pub const ALL: [TargetMolecule; 7] = [
        TargetMolecule::HumanIgG1,
        TargetMolecule::HumanIgG2,
        TargetMolecule::HumanIgG4,
        TargetMolecule::MouseIgG1,
        TargetMolecule::FcFusion,
        TargetMolecule::FabFragment,
        TargetMolecule::Bispecific,
    ];

    /// Tag used by the presentation layer
    pub fn tag(&self) -> &'static str {
        match self {
            TargetMolecule::HumanIgG1 => "human_igg1",
            TargetMolecule::HumanIgG2 => "human_igg2",
            TargetMolecule::HumanIgG4 => "human_igg4",
            TargetMolecule::MouseIgG1 => "mouse_igg1",
            TargetMolecule::FcFusion => "fc_fusion",
            TargetMolecule::FabFragment => "fab_fragment",
            TargetMolecule::Bispecific => "bispecific",
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for TargetMolecule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for TargetMolecule {
    type Err = ElutionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|target| target.tag() == s.trim())
            .ok_or_else(|| ElutionError::UnknownOption {
                kind: "target molecule",
                value: s.to_string(),
            })
    }
}

// =================================================================================================
// Constant records
// =================================================================================================

/// pKa pair of a ligand variant
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LigandPka {
    /// pKa of the ligand histidines driving pH-triggered release
    pub histidine: f64,
    /// pKa of the Fc binding site on the ligand
    pub binding_site: f64,
}

impl LigandPka {
    pub const fn new(histidine: f64, binding_site: f64) -> Self {
        Self { histidine, binding_site }
    }
}

/// Fc-region properties of an antibody format
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TargetProperties {
    /// pKa of the Fc histidine cluster at the Protein A interface
    pub fc_pka: f64,
    /// Conformational stability, in \[0, 1\]
    pub stability: f64,
    /// Propensity to aggregate at low pH, in \[0, 1\]
    pub aggregation_tendency: f64,
}

impl TargetProperties {
    /// Create a record
    ///
    /// # Panics
    ///
    /// If `stability` or `aggregation_tendency` lies outside \[0, 1\].
    pub fn new(fc_pka: f64, stability: f64, aggregation_tendency: f64) -> Self {
        assert!(
            (0.0..=1.0).contains(&stability),
            "Stability must be in [0,1], got {}",
            stability
        );
        assert!(
            (0.0..=1.0).contains(&aggregation_tendency),
            "Aggregation tendency must be in [0,1], got {}",
            aggregation_tendency
        );
        Self { fc_pka, stability, aggregation_tendency }
    }
}

/// Affinity parameters shared by all formats
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BindingConstants {
    /// Reference association constant at 25 °C \[M⁻¹\]
    pub base_affinity: f64,
    /// Exponential decay of affinity per °C above 25 °C
    pub temperature_factor: f64,
}

impl Default for BindingConstants {
    fn default() -> Self {
        Self {
            base_affinity: 1e8,
            temperature_factor: 0.02,
        }
    }
}

// =================================================================================================
// Table
// =================================================================================================

/// Immutable lookup table of ligand and antibody constants
///
/// Records are stored in fixed arrays indexed by the enum discriminants, so a
/// table always holds exactly one record per variant and lookups cannot miss.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MolecularConstants {
    ligands: [LigandPka; 3],
    targets: [TargetProperties; 7],
    /// Binding-constant parameters
    pub binding: BindingConstants,
}

impl Default for MolecularConstants {
    fn default() -> Self {
        Self {
            ligands: [
                LigandPka::new(6.0, 5.8),  // wild_type
                LigandPka::new(6.2, 6.0),  // engineered_mild
                LigandPka::new(5.8, 5.5),  // engineered_harsh
            ],
            targets: [
                TargetProperties { fc_pka: 6.1, stability: 0.9, aggregation_tendency: 0.3 },
                TargetProperties { fc_pka: 6.0, stability: 0.85, aggregation_tendency: 0.4 },
                TargetProperties { fc_pka: 6.15, stability: 0.8, aggregation_tendency: 0.5 },
                TargetProperties { fc_pka: 5.9, stability: 0.88, aggregation_tendency: 0.35 },
                TargetProperties { fc_pka: 6.05, stability: 0.75, aggregation_tendency: 0.6 },
                TargetProperties { fc_pka: 6.3, stability: 0.95, aggregation_tendency: 0.2 },
                TargetProperties { fc_pka: 6.0, stability: 0.7, aggregation_tendency: 0.7 },
            ],
            binding: BindingConstants::default(),
        }
    }
}

impl MolecularConstants {
    /// pKa record of a ligand variant
    pub fn ligand(&self, variant: LigandVariant) -> &LigandPka {
        &self.ligands[variant.index()]
    }

    /// Fc properties of a target molecule
    pub fn target(&self, target: TargetMolecule) -> &TargetProperties {
        &self.targets[target.index()]
    }

    /// Builder pattern: replace one ligand record
    pub fn with_ligand(mut self, variant: LigandVariant, pka: LigandPka) -> Self {
        self.ligands[variant.index()] = pka;
        self
    }

    /// Builder pattern: replace one target record
    pub fn with_target(mut self, target: TargetMolecule, properties: TargetProperties) -> Self {
        self.targets[target.index()] = properties;
        self
    }

    /// Builder pattern: replace the binding constants
    pub fn with_binding(mut self, binding: BindingConstants) -> Self {
        self.binding = binding;
        self
    }
}

// =================================================================================================
// Tests
// =================================================================================================
