//! Edgework facts: the host query interface and the captured snapshot.
//!
//! The host is asked exactly once, when a module is created. Everything the
//! question generator reads afterwards comes from the [`FactSnapshot`].

use serde::{Deserialize, Serialize};

use crate::quiz_engine::{
    error::SnapshotError,
    models::{BatteryKind, Category, IndicatorLabel, IndicatorState, PortKind, TotalKind},
};

pub const SERIAL_LENGTH: usize = 6;

/// What the host puzzle framework must answer about the puzzle object.
pub trait EdgeworkSource {
    fn port_count(&self, kind: PortKind) -> u32;
    fn total_ports(&self) -> u32;
    fn battery_count(&self, kind: BatteryKind) -> u32;
    fn total_batteries(&self) -> u32;
    fn battery_holders(&self) -> u32;
    fn indicator(&self, label: IndicatorLabel) -> IndicatorState;
    fn indicator_count(&self) -> u32;
    fn unlit_indicator_count(&self) -> u32;
    fn lit_indicator_count(&self) -> u32;
    fn serial_number(&self) -> String;
}

/// Immutable capture of the edgework. Every category has an entry, zero or not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactSnapshot {
    totals: [u32; 6],
    ports: [u32; 6],
    batteries: [u32; 2],
    indicators: [IndicatorState; 11],
    serial: [char; SERIAL_LENGTH],
}

fn index_of<T: PartialEq>(all: &[T], item: T) -> usize {
    all.iter().position(|x| *x == item).unwrap_or_default()
}

impl FactSnapshot {
    /// Query `source` once and validate the serial number.
    pub fn capture(source: &impl EdgeworkSource) -> Result<Self, SnapshotError> {
        let serial = parse_serial(&source.serial_number())?;

        let totals = TotalKind::ALL.map(|kind| match kind {
            TotalKind::Ports           => source.total_ports(),
            TotalKind::Batteries       => source.total_batteries(),
            TotalKind::BatteryHolders  => source.battery_holders(),
            TotalKind::Indicators      => source.indicator_count(),
            TotalKind::UnlitIndicators => source.unlit_indicator_count(),
            TotalKind::LitIndicators   => source.lit_indicator_count(),
        });

        Ok(FactSnapshot {
            totals,
            ports: PortKind::ALL.map(|k| source.port_count(k)),
            batteries: BatteryKind::ALL.map(|k| source.battery_count(k)),
            indicators: IndicatorLabel::ALL.map(|l| source.indicator(l)),
            serial,
        })
    }

    pub fn total(&self, kind: TotalKind) -> u32 {
        self.totals[index_of(&TotalKind::ALL, kind)]
    }

    pub fn port(&self, kind: PortKind) -> u32 {
        self.ports[index_of(&PortKind::ALL, kind)]
    }

    pub fn battery(&self, kind: BatteryKind) -> u32 {
        self.batteries[index_of(&BatteryKind::ALL, kind)]
    }

    pub fn indicator(&self, label: IndicatorLabel) -> IndicatorState {
        self.indicators[index_of(&IndicatorLabel::ALL, label)]
    }

    /// Count for any category; indicators count as their tri-state value.
    pub fn count(&self, category: Category) -> u32 {
        match category {
            Category::Total(k)     => self.total(k),
            Category::Port(k)      => self.port(k),
            Category::Battery(k)   => self.battery(k),
            Category::Indicator(l) => self.indicator(l).value(),
        }
    }

    pub fn serial(&self) -> &[char; SERIAL_LENGTH] {
        &self.serial
    }

    pub fn serial_string(&self) -> String {
        self.serial.iter().collect()
    }

    pub fn has_indicators(&self) -> bool {
        self.total(TotalKind::Indicators) > 0
    }
}

fn parse_serial(raw: &str) -> Result<[char; SERIAL_LENGTH], SnapshotError> {
    let chars: Vec<char> = raw.chars().collect();
    if chars.len() != SERIAL_LENGTH {
        return Err(SnapshotError::SerialLength(chars.len()));
    }
    let mut serial = ['0'; SERIAL_LENGTH];
    for (position, (slot, ch)) in serial.iter_mut().zip(chars).enumerate() {
        if !ch.is_ascii_alphanumeric() {
            return Err(SnapshotError::SerialCharacter { position, ch });
        }
        *slot = ch;
    }
    Ok(serial)
}

// ---------------------------------------------------------------------------
// Plain fact record
// ---------------------------------------------------------------------------

/// Edgework described as data, e.g. loaded from JSON by a test rig.
///
/// Totals are derived from the parts unless an override is given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeworkFacts {
    pub ports: Vec<(PortKind, u32)>,
    pub batteries: Vec<(BatteryKind, u32)>,
    pub battery_holders: u32,
    pub indicators: Vec<(IndicatorLabel, IndicatorState)>,
    pub serial: String,
    /// Port total when the host also counts port types outside the six known ones.
    pub total_ports_override: Option<u32>,
}

impl EdgeworkFacts {
    pub fn new(serial: impl Into<String>) -> Self {
        EdgeworkFacts { serial: serial.into(), ..Default::default() }
    }

    pub fn with_port(mut self, kind: PortKind, count: u32) -> Self {
        self.ports.push((kind, count));
        self
    }

    /// Add `count` batteries of `kind`; holders follow the usual packing
    /// (two AA per holder, one D per holder).
    pub fn with_batteries(mut self, kind: BatteryKind, count: u32) -> Self {
        self.batteries.push((kind, count));
        self.battery_holders += match kind {
            BatteryKind::AA => count.div_ceil(2),
            BatteryKind::D  => count,
        };
        self
    }

    pub fn with_indicator(mut self, label: IndicatorLabel, state: IndicatorState) -> Self {
        self.indicators.retain(|(l, _)| *l != label);
        self.indicators.push((label, state));
        self
    }

    fn indicators_in(&self, state: IndicatorState) -> u32 {
        self.indicators.iter().filter(|(_, s)| *s == state).count() as u32
    }
}

impl EdgeworkSource for EdgeworkFacts {
    fn port_count(&self, kind: PortKind) -> u32 {
        self.ports.iter().filter(|(k, _)| *k == kind).map(|(_, n)| n).sum()
    }

    fn total_ports(&self) -> u32 {
        self.total_ports_override
            .unwrap_or_else(|| self.ports.iter().map(|(_, n)| n).sum())
    }

    fn battery_count(&self, kind: BatteryKind) -> u32 {
        self.batteries.iter().filter(|(k, _)| *k == kind).map(|(_, n)| n).sum()
    }

    fn total_batteries(&self) -> u32 {
        self.batteries.iter().map(|(_, n)| n).sum()
    }

    fn battery_holders(&self) -> u32 {
        self.battery_holders
    }

    fn indicator(&self, label: IndicatorLabel) -> IndicatorState {
        self.indicators
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, s)| *s)
            .unwrap_or_default()
    }

    fn indicator_count(&self) -> u32 {
        self.unlit_indicator_count() + self.lit_indicator_count()
    }

    fn unlit_indicator_count(&self) -> u32 {
        self.indicators_in(IndicatorState::Unlit)
    }

    fn lit_indicator_count(&self) -> u32 {
        self.indicators_in(IndicatorState::Lit)
    }

    fn serial_number(&self) -> String {
        self.serial.clone()
    }
}
