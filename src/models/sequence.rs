//! Sequence analysis
//!
//! Turns the raw residue string typed by the user into a [`ResidueProfile`]:
//! per-residue counts of the eleven amino acids the model cares about.
//!
//! # Multimeric ligands
//!
//! Protein A ligands come as single domains or as chains of 2, 4 or 6 repeated
//! domains ([`LigandFormat`]). The sequence is repeated once per domain before
//! counting, so a tetrameric ligand exposes four times as many functional
//! residues to the antibody as the monomer built from the same sequence.
//!
//! # Example
//!
//! ```rust
//! use elution_rs::models::sequence::{analyze, LigandFormat};
//!
//! let analysis = analyze("AKHHYF CNQDE", LigandFormat::Dimeric).unwrap();
//! let profile = analysis.profile;
//!
//! assert_eq!(profile.histidine, 4);      // 2 per domain × 2 domains
//! assert_eq!(profile.total, 22);         // 11 residues × 2 domains
//! assert_eq!(profile.domain_count, 2);
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::{ElutionError, Result};

/// Minimum number of residues after normalization
pub const MIN_SEQUENCE_LENGTH: usize = 10;

// =================================================================================================
// Ligand format
// =================================================================================================

/// Number of repeated Protein A domains in the ligand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LigandFormat {
    #[default]
    Monomeric,
    Dimeric,
    Tetrameric,
    Multimeric,
}

impl LigandFormat {
    pub const ALL: [LigandFormat; 4] = [
        LigandFormat::Monomeric,
        LigandFormat::Dimeric,
        LigandFormat::Tetrameric,
        LigandFormat::Multimeric,
    ];

    /// Domain multiplier applied to the sequence
    pub fn domain_count(&self) -> u32 {
        match self {
            LigandFormat::Monomeric => 1,
            LigandFormat::Dimeric => 2,
            LigandFormat::Tetrameric => 4,
            LigandFormat::Multimeric => 6,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            LigandFormat::Monomeric => "monomeric",
            LigandFormat::Dimeric => "dimeric",
            LigandFormat::Tetrameric => "tetrameric",
            LigandFormat::Multimeric => "multimeric",
        }
    }

    /// Parse a tag; unknown formats count as a single domain
    pub fn from_tag(tag: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|format| format.tag() == tag.trim())
            .unwrap_or_else(|| {
                log::warn!("unknown ligand format `{}`, assuming monomeric", tag);
                LigandFormat::Monomeric
            })
    }
}

impl fmt::Display for LigandFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for LigandFormat {
    type Err = ElutionError;

    /// Never fails: unknown tags map to [`LigandFormat::Monomeric`]
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::from_tag(s))
    }
}

// =================================================================================================
// Residue profile
// =================================================================================================

/// Residue counts of the effective (domain-expanded) ligand sequence
///
/// `total` always equals the normalized raw length × `domain_count`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResidueProfile {
    pub histidine: usize,
    pub asparagine: usize,
    pub glutamine: usize,
    pub tyrosine: usize,
    pub phenylalanine: usize,
    pub cysteine: usize,
    pub tryptophan: usize,
    pub aspartic: usize,
    pub glutamic: usize,
    pub lysine: usize,
    pub arginine: usize,
    /// Effective sequence length
    pub total: usize,
    /// Domain multiplier of the ligand format
    pub domain_count: u32,
}

impl ResidueProfile {
    /// Count residues of an already expanded sequence
    fn count(sequence: &str, domain_count: u32) -> Self {
        let mut profile = Self {
            domain_count,
            ..Default::default()
        };

        for residue in sequence.chars() {
            profile.total += 1;
            match residue {
                'H' => profile.histidine += 1,
                'N' => profile.asparagine += 1,
                'Q' => profile.glutamine += 1,
                'Y' => profile.tyrosine += 1,
                'F' => profile.phenylalanine += 1,
                'C' => profile.cysteine += 1,
                'W' => profile.tryptophan += 1,
                'D' => profile.aspartic += 1,
                'E' => profile.glutamic += 1,
                'K' => profile.lysine += 1,
                'R' => profile.arginine += 1,
                _ => {}
            }
        }

        profile
    }

    /// Tyrosine + phenylalanine, the aromatic residues the model weighs
    pub fn hydrophobic_aromatic(&self) -> usize {
        self.tyrosine + self.phenylalanine
    }

    /// Tyrosine + phenylalanine + tryptophan, as shown in residue summaries
    pub fn aromatic_total(&self) -> usize {
        self.tyrosine + self.phenylalanine + self.tryptophan
    }

    /// Asparagine + glutamine (deamidation-prone)
    pub fn amide(&self) -> usize {
        self.asparagine + self.glutamine
    }

    /// Basic minus acidic residues
    pub fn net_charge(&self) -> i64 {
        (self.lysine + self.arginine) as i64 - (self.aspartic + self.glutamic) as i64
    }
}

// =================================================================================================
// Annotation
// =================================================================================================

/// Display class of a highlighted residue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResidueClass {
    Histidine,
    Asparagine,
    Glutamine,
    Tyrosine,
    Phenylalanine,
    Cysteine,
}

impl ResidueClass {
    /// Highlight class of a residue letter, if it is one of the highlighted kinds
    pub fn of(residue: char) -> Option<Self> {
        match residue {
            'H' => Some(ResidueClass::Histidine),
            'N' => Some(ResidueClass::Asparagine),
            'Q' => Some(ResidueClass::Glutamine),
            'Y' => Some(ResidueClass::Tyrosine),
            'F' => Some(ResidueClass::Phenylalanine),
            'C' => Some(ResidueClass::Cysteine),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ResidueClass::Histidine => "histidine",
            ResidueClass::Asparagine => "asparagine",
            ResidueClass::Glutamine => "glutamine",
            ResidueClass::Tyrosine => "tyrosine",
            ResidueClass::Phenylalanine => "phenylalanine",
            ResidueClass::Cysteine => "cysteine",
        }
    }
}

/// One residue of the raw sequence with its optional highlight class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnotatedResidue {
    pub residue: char,
    pub class: Option<ResidueClass>,
}

/// Annotate a normalized raw sequence for display
pub fn annotate_sequence(sequence: &str) -> Vec<AnnotatedResidue> {
    sequence
        .chars()
        .map(|residue| AnnotatedResidue {
            residue,
            class: ResidueClass::of(residue),
        })
        .collect()
}

// =================================================================================================
// Analysis
// =================================================================================================

/// Result of [`analyze`]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SequenceAnalysis {
    /// Normalized raw sequence (uppercase, no whitespace, not expanded)
    pub sequence: String,
    /// Sequence repeated once per ligand domain
    pub effective_sequence: String,
    /// Counts over the effective sequence
    pub profile: ResidueProfile,
}

impl SequenceAnalysis {
    /// Display annotation of the raw (unexpanded) sequence
    pub fn annotated(&self) -> Vec<AnnotatedResidue> {
        annotate_sequence(&self.sequence)
    }

    pub fn domain_count(&self) -> u32 {
        self.profile.domain_count
    }
}

/// Uppercase and strip every whitespace character
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Analyze a raw sequence for the given ligand format
///
/// # Errors
///
/// [`ElutionError::InvalidSequence`] when fewer than [`MIN_SEQUENCE_LENGTH`]
/// residues remain after normalization.
pub fn analyze(raw: &str, format: LigandFormat) -> Result<SequenceAnalysis> {
    let sequence = normalize(raw);
    let length = sequence.chars().count();

    if length < MIN_SEQUENCE_LENGTH {
        return Err(ElutionError::InvalidSequence { length });
    }

    let domain_count = format.domain_count();
    let effective_sequence = sequence.repeat(domain_count as usize);
    let profile = ResidueProfile::count(&effective_sequence, domain_count);

    log::debug!(
        "analyzed {} residues ×{} domains: His={} Tyr+Phe={} Cys={}",
        length,
        domain_count,
        profile.histidine,
        profile.hydrophobic_aromatic(),
        profile.cysteine
    );

    Ok(SequenceAnalysis {
        sequence,
        effective_sequence,
        profile,
    })
}

// =================================================================================================
// Tests
// =================================================================================================
