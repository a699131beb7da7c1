//! # Constants
//!
//! Residue vocabulary shared by the records and the summaries.
//!
//! ## Residue Types
//!
//! - [`AminoAcid`] - the 20 standard amino acids plus `Unknown`
//! - `is_amino_acid()` - Check if a residue code names a standard amino acid
//! - `aa3to1()` - Three-letter to one-letter code
//!
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString};

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum AminoAcid {
    #[strum(to_string = "ALA", serialize = "A")] Ala,
    #[strum(to_string = "ARG", serialize = "R")] Arg,
    #[strum(to_string = "ASN", serialize = "N")] Asn,
    #[strum(to_string = "ASP", serialize = "D")] Asp,
    #[strum(to_string = "CYS", serialize = "C")] Cys,
    #[strum(to_string = "GLN", serialize = "Q")] Gln,
    #[strum(to_string = "GLU", serialize = "E")] Glu,
    #[strum(to_string = "GLY", serialize = "G")] Gly,
    #[strum(to_string = "HIS", serialize = "H")] His,
    #[strum(to_string = "ILE", serialize = "I")] Ile,
    #[strum(to_string = "LEU", serialize = "L")] Leu,
    #[strum(to_string = "LYS", serialize = "K")] Lys,
    #[strum(to_string = "MET", serialize = "M")] Met,
    #[strum(to_string = "PHE", serialize = "F")] Phe,
    #[strum(to_string = "PRO", serialize = "P")] Pro,
    #[strum(to_string = "SER", serialize = "S")] Ser,
    #[strum(to_string = "THR", serialize = "T")] Thr,
    #[strum(to_string = "TRP", serialize = "W")] Trp,
    #[strum(to_string = "TYR", serialize = "Y")] Tyr,
    #[strum(to_string = "VAL", serialize = "V")] Val,
    #[strum(to_string = "UNK", serialize = "X")] Unknown,
}

impl AminoAcid {
    /// Parse a one- or three-letter code, falling back to `Unknown`.
    pub fn parse_lenient(code: &str) -> Self {
        AminoAcid::from_str(code.trim()).unwrap_or(AminoAcid::Unknown)
    }

    #[rustfmt::skip]
    pub fn one_letter(&self) -> char {
        match self {
            AminoAcid::Ala => 'A', AminoAcid::Arg => 'R', AminoAcid::Asn => 'N',
            AminoAcid::Asp => 'D', AminoAcid::Cys => 'C', AminoAcid::Gln => 'Q',
            AminoAcid::Glu => 'E', AminoAcid::Gly => 'G', AminoAcid::His => 'H',
            AminoAcid::Ile => 'I', AminoAcid::Leu => 'L', AminoAcid::Lys => 'K',
            AminoAcid::Met => 'M', AminoAcid::Phe => 'F', AminoAcid::Pro => 'P',
            AminoAcid::Ser => 'S', AminoAcid::Thr => 'T', AminoAcid::Trp => 'W',
            AminoAcid::Tyr => 'Y', AminoAcid::Val => 'V', AminoAcid::Unknown => 'X',
        }
    }
}

pub fn is_amino_acid(code: &str) -> bool {
    AminoAcid::parse_lenient(code) != AminoAcid::Unknown
}

pub fn aa3to1(aa: &str) -> char {
    AminoAcid::parse_lenient(aa).one_letter()
}
