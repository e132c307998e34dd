//! Patient-facing input fields and the partially-filled observation.

use serde::{Deserialize, Serialize};

/// A field a patient (or form) can supply.
///
/// Height and Weight are collected instead of BMI; the deriver folds them
/// into the BMI model feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PatientField {
    Age,
    Height,
    Weight,
    Glucose,
    FamilyHistory,
    BloodPressure,
    Pregnancies,
    Insulin,
    SkinThickness,
    DiabetesPedigreeFunction,
}

impl PatientField {
    /// All trackable fields, required first.
    pub const ALL: [PatientField; 10] = [
        PatientField::Age,
        PatientField::Height,
        PatientField::Weight,
        PatientField::Glucose,
        PatientField::FamilyHistory,
        PatientField::BloodPressure,
        PatientField::Pregnancies,
        PatientField::Insulin,
        PatientField::SkinThickness,
        PatientField::DiabetesPedigreeFunction,
    ];

    /// Fields the request interface requires.
    pub const REQUIRED: [PatientField; 5] = [
        PatientField::Age,
        PatientField::Height,
        PatientField::Weight,
        PatientField::Glucose,
        PatientField::FamilyHistory,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PatientField::Age => "Age",
            PatientField::Height => "Height",
            PatientField::Weight => "Weight",
            PatientField::Glucose => "Glucose",
            PatientField::FamilyHistory => "FamilyHistory",
            PatientField::BloodPressure => "BloodPressure",
            PatientField::Pregnancies => "Pregnancies",
            PatientField::Insulin => "Insulin",
            PatientField::SkinThickness => "SkinThickness",
            PatientField::DiabetesPedigreeFunction => "DiabetesPedigreeFunction",
        }
    }

    /// Case-insensitive lookup by form key.
    pub fn from_key(key: &str) -> Option<Self> {
        PatientField::ALL
            .into_iter()
            .find(|field| field.as_str().eq_ignore_ascii_case(key.trim()))
    }

    pub fn is_required(self) -> bool {
        PatientField::REQUIRED.contains(&self)
    }
}

impl std::fmt::Display for PatientField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mapping from patient field to an optionally supplied numeric value.
///
/// The core accepts any subset; the request intake enforces required
/// presence. Units: Height in cm, Weight in kg, FamilyHistory 0 or 1.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PatientObservation {
    pub age: Option<f64>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub glucose: Option<f64>,
    pub family_history: Option<f64>,
    pub blood_pressure: Option<f64>,
    pub pregnancies: Option<f64>,
    pub insulin: Option<f64>,
    pub skin_thickness: Option<f64>,
    pub diabetes_pedigree: Option<f64>,
}

impl PatientObservation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: PatientField) -> Option<f64> {
        match field {
            PatientField::Age => self.age,
            PatientField::Height => self.height,
            PatientField::Weight => self.weight,
            PatientField::Glucose => self.glucose,
            PatientField::FamilyHistory => self.family_history,
            PatientField::BloodPressure => self.blood_pressure,
            PatientField::Pregnancies => self.pregnancies,
            PatientField::Insulin => self.insulin,
            PatientField::SkinThickness => self.skin_thickness,
            PatientField::DiabetesPedigreeFunction => self.diabetes_pedigree,
        }
    }

    pub fn set(&mut self, field: PatientField, value: f64) {
        let slot = match field {
            PatientField::Age => &mut self.age,
            PatientField::Height => &mut self.height,
            PatientField::Weight => &mut self.weight,
            PatientField::Glucose => &mut self.glucose,
            PatientField::FamilyHistory => &mut self.family_history,
            PatientField::BloodPressure => &mut self.blood_pressure,
            PatientField::Pregnancies => &mut self.pregnancies,
            PatientField::Insulin => &mut self.insulin,
            PatientField::SkinThickness => &mut self.skin_thickness,
            PatientField::DiabetesPedigreeFunction => &mut self.diabetes_pedigree,
        };
        *slot = Some(value);
    }

    /// Number of fields the caller explicitly supplied. Feeds the
    /// confidence tier; Height and Weight count individually.
    pub fn provided_count(&self) -> usize {
        PatientField::ALL
            .into_iter()
            .filter(|field| self.value(*field).is_some())
            .count()
    }

    pub fn with(mut self, field: PatientField, value: f64) -> Self {
        self.set(field, value);
        self
    }
}
