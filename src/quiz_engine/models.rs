use std::fmt;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Edgework categories
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TotalKind {
    Ports,
    Batteries,
    BatteryHolders,
    Indicators,
    UnlitIndicators,
    LitIndicators,
}

impl TotalKind {
    pub const ALL: [TotalKind; 6] = [
        TotalKind::Ports,
        TotalKind::Batteries,
        TotalKind::BatteryHolders,
        TotalKind::Indicators,
        TotalKind::UnlitIndicators,
        TotalKind::LitIndicators,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TotalKind::Ports           => "Ports",
            TotalKind::Batteries       => "Batteries",
            TotalKind::BatteryHolders  => "Battery Holders",
            TotalKind::Indicators      => "Indicators",
            TotalKind::UnlitIndicators => "Unlit Indicators",
            TotalKind::LitIndicators   => "Lit Indicators",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PortKind {
    Serial,
    Parallel,
    DviD,
    Rj45,
    Ps2,
    StereoRca,
}

impl PortKind {
    pub const ALL: [PortKind; 6] = [
        PortKind::Serial,
        PortKind::Parallel,
        PortKind::DviD,
        PortKind::Rj45,
        PortKind::Ps2,
        PortKind::StereoRca,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PortKind::Serial    => "Serial",
            PortKind::Parallel  => "Parallel",
            PortKind::DviD      => "DVI-D",
            PortKind::Rj45      => "RJ-45",
            PortKind::Ps2       => "PS2",
            PortKind::StereoRca => "Stereo RCA",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BatteryKind {
    AA,
    D,
}

impl BatteryKind {
    pub const ALL: [BatteryKind; 2] = [BatteryKind::AA, BatteryKind::D];

    pub fn name(self) -> &'static str {
        match self {
            BatteryKind::AA => "AA",
            BatteryKind::D  => "D",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum IndicatorLabel {
    SND,
    CLR,
    CAR,
    IND,
    FRQ,
    SIG,
    NSA,
    MSA,
    TRN,
    BOB,
    FRK,
}

impl IndicatorLabel {
    pub const ALL: [IndicatorLabel; 11] = [
        IndicatorLabel::SND,
        IndicatorLabel::CLR,
        IndicatorLabel::CAR,
        IndicatorLabel::IND,
        IndicatorLabel::FRQ,
        IndicatorLabel::SIG,
        IndicatorLabel::NSA,
        IndicatorLabel::MSA,
        IndicatorLabel::TRN,
        IndicatorLabel::BOB,
        IndicatorLabel::FRK,
    ];

    pub fn name(self) -> &'static str {
        match self {
            IndicatorLabel::SND => "SND",
            IndicatorLabel::CLR => "CLR",
            IndicatorLabel::CAR => "CAR",
            IndicatorLabel::IND => "IND",
            IndicatorLabel::FRQ => "FRQ",
            IndicatorLabel::SIG => "SIG",
            IndicatorLabel::NSA => "NSA",
            IndicatorLabel::MSA => "MSA",
            IndicatorLabel::TRN => "TRN",
            IndicatorLabel::BOB => "BOB",
            IndicatorLabel::FRK => "FRK",
        }
    }
}

macro_rules! display_by_name {
    ($($ty:ty),*) => {$(
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }
    )*};
}

display_by_name!(TotalKind, PortKind, BatteryKind, IndicatorLabel);

/// Tri-state of an indicator on the puzzle object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum IndicatorState {
    #[default]
    Absent,
    Unlit,
    Lit,
}

impl IndicatorState {
    /// Numeric form: Absent=0, Unlit=1, Lit=2.
    pub fn value(self) -> u32 {
        match self {
            IndicatorState::Absent => 0,
            IndicatorState::Unlit  => 1,
            IndicatorState::Lit    => 2,
        }
    }

    pub fn is_present(self) -> bool {
        self != IndicatorState::Absent
    }
}

/// A single askable thing: one entry of one category list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Total(TotalKind),
    Port(PortKind),
    Battery(BatteryKind),
    Indicator(IndicatorLabel),
}

impl Category {
    pub fn name(self) -> &'static str {
        match self {
            Category::Total(k)     => k.name(),
            Category::Port(k)      => k.name(),
            Category::Battery(k)   => k.name(),
            Category::Indicator(k) => k.name(),
        }
    }

    /// Group tag used in question tokens.
    pub fn group_tag(self) -> &'static str {
        match self {
            Category::Total(_)     => "TOTALS",
            Category::Port(_)      => "PORTS",
            Category::Battery(_)   => "BATTERIES",
            Category::Indicator(_) => "INDICATORS",
        }
    }
}

// ---------------------------------------------------------------------------
// Questions
// ---------------------------------------------------------------------------

/// The four built-in question families. Each owns one prompt template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuestionFamily {
    IndicatorState,
    HowMany,
    IsPresent,
    SerialCharacter,
}

impl QuestionFamily {
    pub const ALL: [QuestionFamily; 4] = [
        QuestionFamily::IndicatorState,
        QuestionFamily::HowMany,
        QuestionFamily::IsPresent,
        QuestionFamily::SerialCharacter,
    ];

    /// Template id, also the leading tag of the family's tokens.
    pub fn template_id(self) -> u8 {
        match self {
            QuestionFamily::IndicatorState  => 0,
            QuestionFamily::HowMany         => 1,
            QuestionFamily::IsPresent       => 2,
            QuestionFamily::SerialCharacter => 3,
        }
    }

    /// Prompt template; `{0}` is replaced by the question subject.
    pub fn template(self) -> &'static str {
        match self {
            QuestionFamily::IndicatorState  => "What is the\nstate of the\n{0} indicator?",
            QuestionFamily::HowMany         => "How many\n{0}\nare there?",
            QuestionFamily::IsPresent       => "Is there a\n{0}\npresent?",
            QuestionFamily::SerialCharacter => "What is the\n{0} character\nof the S.N.?",
        }
    }
}

impl fmt::Display for QuestionFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            QuestionFamily::IndicatorState  => "Indicator State",
            QuestionFamily::HowMany         => "How Many",
            QuestionFamily::IsPresent       => "Is Present",
            QuestionFamily::SerialCharacter => "Serial Character",
        };
        write!(f, "{}", s)
    }
}

/// Identity of an asked question, used to avoid asking it again.
///
/// How-Many and Is-Present tokens are scoped by category group, so
/// "1 TOTALS Ports" and "1 PORTS Serial" never collide. Serial-Character
/// tokens carry the character itself, not its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuestionToken {
    IndicatorState(IndicatorLabel),
    HowMany(Category),
    IsPresent(Category),
    SerialCharacter(char),
}

impl QuestionToken {
    pub fn family(self) -> QuestionFamily {
        match self {
            QuestionToken::IndicatorState(_)  => QuestionFamily::IndicatorState,
            QuestionToken::HowMany(_)         => QuestionFamily::HowMany,
            QuestionToken::IsPresent(_)       => QuestionFamily::IsPresent,
            QuestionToken::SerialCharacter(_) => QuestionFamily::SerialCharacter,
        }
    }
}

impl fmt::Display for QuestionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let id = self.family().template_id();
        match self {
            QuestionToken::IndicatorState(label) => write!(f, "{id} {label}"),
            QuestionToken::HowMany(c) | QuestionToken::IsPresent(c) =>
                write!(f, "{id} {} {}", c.group_tag(), c.name()),
            QuestionToken::SerialCharacter(ch) => write!(f, "{id} {ch}"),
        }
    }
}

/// Number of answer buttons on the module.
pub const BUTTON_COUNT: usize = 3;

/// Slot left empty by the two-choice layouts; pressing it does nothing.
pub const PLACEHOLDER_SLOT: usize = 1;

/// One generated multiple-choice prompt. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub family: QuestionFamily,
    pub subject: String,
    pub choices: [String; BUTTON_COUNT],
    pub correct_index: usize,
    pub token: QuestionToken,
}

impl Question {
    /// Prompt text with the subject substituted into the family template.
    pub fn prompt(&self) -> String {
        self.family.template().replace("{0}", &self.subject)
    }

    pub fn correct_choice(&self) -> &str {
        &self.choices[self.correct_index]
    }

    /// A slot can be pressed meaningfully only if it carries a label.
    pub fn is_selectable(&self, slot: usize) -> bool {
        self.choices.get(slot).is_some_and(|c| !c.is_empty())
    }

    pub fn is_two_choice(&self) -> bool {
        self.choices[PLACEHOLDER_SLOT].is_empty()
    }
}
