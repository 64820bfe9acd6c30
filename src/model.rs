use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Identifiant fort pour un membre du personnel
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StaffId(String);

impl StaffId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StaffId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Nature d'une affectation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShiftKind {
    /// Tâche du bloc de semaine (lundi..vendredi)
    Core,
    /// Créneau de renfort hebdomadaire
    OnCall,
}

impl ShiftKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Core => "core",
            Self::OnCall => "oncall",
        }
    }
}

/// Affectation d'un membre à une tâche pour une date du planning
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    pub staff: StaffId,
    pub label: String,
    pub kind: ShiftKind,
    /// Numéro de semaine de génération, base 1.
    pub week: u32,
}

/// Planning complet : affectations indexées par date calendaire.
///
/// Itération en ordre croissant de date ; au sein d'une date, ordre
/// d'insertion (stable d'une génération à l'autre).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    days: BTreeMap<NaiveDate, Vec<Shift>>,
}

impl Schedule {
    /// Ajoute un shift à la date donnée (crée l'entrée si absente).
    pub fn push(&mut self, date: NaiveDate, shift: Shift) {
        self.days.entry(date).or_default().push(shift);
    }

    pub fn days(&self) -> impl Iterator<Item = (NaiveDate, &[Shift])> {
        self.days.iter().map(|(date, shifts)| (*date, shifts.as_slice()))
    }

    pub fn shifts_on(&self, date: NaiveDate) -> &[Shift] {
        self.days.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Nombre de dates couvertes.
    pub fn date_count(&self) -> usize {
        self.days.len()
    }

    /// Nombre total de shifts, toutes dates confondues.
    pub fn shift_count(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}
