use serde::{Deserialize, Serialize};

/// Two-letter postal code of a state or the District of Columbia.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StateCode {
    AK, AL, AR, AZ, CA, CO, CT, DC, DE, FL, GA, HI, IA, ID, IL, IN, KS,
    KY, LA, MA, MD, ME, MI, MN, MO, MS, MT, NC, ND, NE, NH, NJ, NM, NV,
    NY, OH, OK, OR, PA, RI, SC, SD, TN, TX, UT, VA, VT, WA, WI, WV, WY,
}

impl StateCode {
    pub const ALL: [StateCode; 51] = [
        Self::AK, Self::AL, Self::AR, Self::AZ, Self::CA, Self::CO, Self::CT,
        Self::DC, Self::DE, Self::FL, Self::GA, Self::HI, Self::IA, Self::ID,
        Self::IL, Self::IN, Self::KS, Self::KY, Self::LA, Self::MA, Self::MD,
        Self::ME, Self::MI, Self::MN, Self::MO, Self::MS, Self::MT, Self::NC,
        Self::ND, Self::NE, Self::NH, Self::NJ, Self::NM, Self::NV, Self::NY,
        Self::OH, Self::OK, Self::OR, Self::PA, Self::RI, Self::SC, Self::SD,
        Self::TN, Self::TX, Self::UT, Self::VA, Self::VT, Self::WA, Self::WI,
        Self::WV, Self::WY,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AK => "AK", Self::AL => "AL", Self::AR => "AR", Self::AZ => "AZ",
            Self::CA => "CA", Self::CO => "CO", Self::CT => "CT", Self::DC => "DC",
            Self::DE => "DE", Self::FL => "FL", Self::GA => "GA", Self::HI => "HI",
            Self::IA => "IA", Self::ID => "ID", Self::IL => "IL", Self::IN => "IN",
            Self::KS => "KS", Self::KY => "KY", Self::LA => "LA", Self::MA => "MA",
            Self::MD => "MD", Self::ME => "ME", Self::MI => "MI", Self::MN => "MN",
            Self::MO => "MO", Self::MS => "MS", Self::MT => "MT", Self::NC => "NC",
            Self::ND => "ND", Self::NE => "NE", Self::NH => "NH", Self::NJ => "NJ",
            Self::NM => "NM", Self::NV => "NV", Self::NY => "NY", Self::OH => "OH",
            Self::OK => "OK", Self::OR => "OR", Self::PA => "PA", Self::RI => "RI",
            Self::SC => "SC", Self::SD => "SD", Self::TN => "TN", Self::TX => "TX",
            Self::UT => "UT", Self::VA => "VA", Self::VT => "VT", Self::WA => "WA",
            Self::WI => "WI", Self::WV => "WV", Self::WY => "WY",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|code| code.as_str() == s)
    }
}

impl std::fmt::Display for StateCode {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A taxing authority below the state level.
///
/// Only localities whose tax is computed on the state return are modeled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locality {
    MdAnneArundel,
    MdBaltimoreCity,
    MdBaltimoreCounty,
    MdHoward,
    MdMontgomery,
    MdPrinceGeorges,
    MdWorcester,
}

impl Locality {
    pub fn state(&self) -> StateCode {
        match self {
            Self::MdAnneArundel
            | Self::MdBaltimoreCity
            | Self::MdBaltimoreCounty
            | Self::MdHoward
            | Self::MdMontgomery
            | Self::MdPrinceGeorges
            | Self::MdWorcester => StateCode::MD,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::MdAnneArundel => "Anne Arundel County",
            Self::MdBaltimoreCity => "Baltimore City",
            Self::MdBaltimoreCounty => "Baltimore County",
            Self::MdHoward => "Howard County",
            Self::MdMontgomery => "Montgomery County",
            Self::MdPrinceGeorges => "Prince George's County",
            Self::MdWorcester => "Worcester County",
        }
    }
}

/// Taxing authority a form or a bracket table belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Jurisdiction {
    Federal,
    State(StateCode),
}

impl Jurisdiction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Federal => "US",
            Self::State(code) => code.as_str(),
        }
    }

    /// Parses `US` or a two-letter state code.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "US" => Some(Self::Federal),
            other => StateCode::parse(other).map(Self::State),
        }
    }
}

impl std::fmt::Display for Jurisdiction {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<StateCode> for Jurisdiction {
    fn from(code: StateCode) -> Self {
        Self::State(code)
    }
}
